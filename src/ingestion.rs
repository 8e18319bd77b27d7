use crate::error::Result;
use crate::statement::{LineItem, StatementDataset};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Coerces raw cell text to a numeric value. Invalid or empty text becomes
/// 0.0 rather than failing the row; thousands separators are tolerated.
pub fn coerce_numeric(raw: &str) -> f64 {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return 0.0;
    }
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Builds a dataset from raw text rows of (label, prior, current), applying
/// numeric coercion to the value cells.
pub fn from_raw_rows<'a, I>(rows: I) -> StatementDataset
where
    I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
{
    let rows = rows
        .into_iter()
        .map(|(label, prior, current)| LineItem {
            label: label.trim().to_string(),
            prior_value: coerce_numeric(prior),
            current_value: coerce_numeric(current),
        })
        .collect();
    StatementDataset::new(rows)
}

/// Reads a three-column statement (label, prior value, current value) from
/// CSV with a header row. Extra columns are ignored; short rows pad with
/// empty cells, which coerce to zero.
pub fn read_statement_csv<R: Read>(reader: R) -> Result<StatementDataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(LineItem {
            label: record.get(0).unwrap_or("").trim().to_string(),
            prior_value: coerce_numeric(record.get(1).unwrap_or("")),
            current_value: coerce_numeric(record.get(2).unwrap_or("")),
        });
    }

    debug!("ingested {} statement rows from CSV", rows.len());
    Ok(StatementDataset::new(rows))
}

pub fn read_statement_csv_file<P: AsRef<Path>>(path: P) -> Result<StatementDataset> {
    let file = File::open(path)?;
    read_statement_csv(file)
}
