use crate::engine::AugmentedDataset;
use crate::ratios::RatioSet;
use crate::statement::labels;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Renders the augmented dataset as a Markdown pipe table, numeric cells
/// formatted to two decimals, rows in dataset order.
pub fn render_augmented_table(dataset: &AugmentedDataset) -> String {
    let mut out = String::from(
        "| Line Item | Prior | Current | Growth (%) | Prior Share (%) | Current Share (%) |\n\
         |---|---:|---:|---:|---:|---:|\n",
    );

    for row in dataset.iter() {
        out.push_str(&format!(
            "| {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} |\n",
            row.label,
            row.prior_value,
            row.current_value,
            row.growth_rate,
            row.prior_asset_share,
            row.current_asset_share,
        ));
    }

    out
}

/// Renders the ratio set as a label/value Markdown table. Unavailable
/// ratios appear as a literal `N/A`, an infinite current ratio as
/// `Infinite`.
pub fn render_ratio_table(ratios: &RatioSet) -> String {
    let mut out = String::from("| Metric | Value |\n|---|---|\n");
    for (metric, value) in ratio_rows(ratios) {
        out.push_str(&format!("| {} | {} |\n", metric, value));
    }
    out
}

fn ratio_rows(ratios: &RatioSet) -> Vec<(&'static str, String)> {
    vec![
        ("Current ratio (prior)", ratios.current_ratio_prior.format("")),
        (
            "Current ratio (current)",
            ratios.current_ratio_current.format(""),
        ),
        ("Asset turnover (current)", ratios.asset_turnover.format("")),
        (
            "Net profit margin (prior)",
            ratios.net_profit_margin_prior.format("%"),
        ),
        (
            "Net profit margin (current)",
            ratios.net_profit_margin_current.format("%"),
        ),
        (
            "Return on assets (current)",
            ratios.return_on_assets.format("%"),
        ),
    ]
}

/// One pre-formatted metric row of a [`ReportSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SummaryRow {
    pub metric: String,
    pub value: String,
}

/// The textual report handed to rendering and to the commentary layer:
/// the full augmented table plus a label/value list of the headline
/// metrics, every value pre-formatted as a string with `N/A` markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportSummary {
    #[schemars(description = "The full augmented statement as a Markdown table")]
    pub statement_table: String,

    #[schemars(description = "Headline metrics, values pre-formatted ('N/A' when unavailable)")]
    pub metrics: Vec<SummaryRow>,
}

impl ReportSummary {
    pub fn build(dataset: &AugmentedDataset, ratios: &RatioSet) -> Self {
        let current_asset_growth = dataset
            .find(labels::CURRENT_ASSETS)
            .map(|row| format!("{:.2}%", row.growth_rate))
            .unwrap_or_else(|| "N/A".to_string());

        let mut metrics = vec![SummaryRow {
            metric: "Current asset growth".to_string(),
            value: current_asset_growth,
        }];
        metrics.extend(ratio_rows(ratios).into_iter().map(|(metric, value)| {
            SummaryRow {
                metric: metric.to_string(),
                value,
            }
        }));

        Self {
            statement_table: render_augmented_table(dataset),
            metrics,
        }
    }

    pub fn to_markdown(&self) -> String {
        let mut out = self.statement_table.clone();
        out.push('\n');
        out.push_str("| Metric | Value |\n|---|---|\n");
        for row in &self.metrics {
            out.push_str(&format!("| {} | {} |\n", row.metric, row.value));
        }
        out
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ReportSummary)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::generate_json_schema())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::derive;
    use crate::ingestion::from_raw_rows;
    use crate::ratios::compute_ratios;

    fn sample() -> (AugmentedDataset, RatioSet) {
        let dataset = from_raw_rows([
            ("TOTAL ASSETS", "1000", "1200"),
            ("CURRENT ASSETS", "400", "500"),
            ("CURRENT LIABILITIES", "200", "0"),
        ]);
        let augmented = derive(&dataset).unwrap();
        let ratios = compute_ratios(&augmented);
        (augmented, ratios)
    }

    #[test]
    fn test_augmented_table_rows_and_format() {
        let (augmented, _) = sample();
        let table = render_augmented_table(&augmented);

        assert!(table.contains("| TOTAL ASSETS | 1000.00 | 1200.00 | 20.00 | 100.00 | 100.00 |"));
        assert_eq!(table.lines().count(), 2 + augmented.len());
    }

    #[test]
    fn test_ratio_table_markers() {
        let (_, ratios) = sample();
        let table = render_ratio_table(&ratios);

        assert!(table.contains("| Current ratio (prior) | 2.00 |"));
        assert!(table.contains("| Current ratio (current) | Infinite |"));
        assert!(table.contains("| Net profit margin (current) | N/A |"));
    }

    #[test]
    fn test_summary_contains_growth_and_metrics() {
        let (augmented, ratios) = sample();
        let summary = ReportSummary::build(&augmented, &ratios);

        assert_eq!(summary.metrics[0].metric, "Current asset growth");
        assert_eq!(summary.metrics[0].value, "25.00%");

        let markdown = summary.to_markdown();
        assert!(markdown.contains("| Line Item |"));
        assert!(markdown.contains("| Return on assets (current) | N/A |"));
    }

    #[test]
    fn test_schema_generation() {
        let schema = ReportSummary::schema_as_json().unwrap();
        assert!(schema.contains("statement_table"));
        assert!(schema.contains("metrics"));
    }
}
