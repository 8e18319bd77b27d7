use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Well-known label fragments used by the derivation and ratio engines.
///
/// Lookups are case-insensitive substring matches, so a statement row named
/// "II. TOTAL ASSETS (270 = 100 + 200)" still resolves against
/// [`TOTAL_ASSETS`].
pub mod labels {
    /// Anchor row for structural proportions. Mandatory for derivation.
    pub const TOTAL_ASSETS: &str = "TOTAL ASSETS";
    pub const CURRENT_ASSETS: &str = "CURRENT ASSETS";
    pub const CURRENT_LIABILITIES: &str = "CURRENT LIABILITIES";
    pub const NET_REVENUE: &str = "NET REVENUE";
    pub const NET_PROFIT: &str = "NET PROFIT";
}

/// A labeled statement row with a value for each of the two periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LineItem {
    #[schemars(description = "The caption of the row as it appears in the statement (e.g., 'Total Assets')")]
    pub label: String,

    #[schemars(description = "Value reported for the prior period. Unparseable input coerces to 0.")]
    pub prior_value: f64,

    #[schemars(description = "Value reported for the current period. Unparseable input coerces to 0.")]
    pub current_value: f64,
}

/// An ordered two-period statement. Row order is the input order and is
/// preserved through every downstream transformation; the dataset itself is
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StatementDataset {
    rows: Vec<LineItem>,
}

impl StatementDataset {
    pub fn new(rows: Vec<LineItem>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[LineItem] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolves a label fragment to the first matching row, in dataset order.
    ///
    /// Matching is case-insensitive substring containment. Multiple matches
    /// are not an error; later matches are ignored. `None` means no row
    /// matched, and callers must handle that explicitly rather than assuming
    /// a zero value.
    pub fn find(&self, label_fragment: &str) -> Option<&LineItem> {
        self.rows
            .iter()
            .find(|item| label_contains(&item.label, label_fragment))
    }
}

pub(crate) fn label_contains(label: &str, fragment: &str) -> bool {
    label.to_lowercase().contains(&fragment.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(label: &str, prior: f64, current: f64) -> LineItem {
        LineItem {
            label: label.to_string(),
            prior_value: prior,
            current_value: current,
        }
    }

    #[test]
    fn test_find_is_case_insensitive_substring() {
        let dataset = StatementDataset::new(vec![
            item("A. Current assets", 400.0, 500.0),
            item("TOTAL ASSETS (270)", 1000.0, 1200.0),
        ]);

        let found = dataset.find("total assets").unwrap();
        assert_eq!(found.prior_value, 1000.0);

        let found = dataset.find(labels::CURRENT_ASSETS).unwrap();
        assert_eq!(found.current_value, 500.0);
    }

    #[test]
    fn test_find_returns_first_match_in_order() {
        let dataset = StatementDataset::new(vec![
            item("Net revenue from sales", 900.0, 1100.0),
            item("Net revenue from services", 50.0, 60.0),
        ]);

        let found = dataset.find(labels::NET_REVENUE).unwrap();
        assert_eq!(found.label, "Net revenue from sales");
    }

    #[test]
    fn test_find_no_match_is_none() {
        let dataset = StatementDataset::new(vec![item("Inventory", 10.0, 20.0)]);
        assert!(dataset.find(labels::NET_PROFIT).is_none());
    }
}
