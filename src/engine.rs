use crate::error::{AnalysisError, Result};
use crate::statement::{label_contains, labels, StatementDataset};
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Substituted for a denominator of exactly zero. Keeps growth and share
/// figures finite (huge, but finite) instead of faulting or producing NaN.
pub const EPSILON: f64 = 1e-9;

pub(crate) fn safe_divisor(x: f64) -> f64 {
    if x != 0.0 {
        x
    } else {
        EPSILON
    }
}

/// A statement row plus the three derived columns, all in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AugmentedLineItem {
    pub label: String,
    pub prior_value: f64,
    pub current_value: f64,

    #[schemars(description = "Period-over-period growth of this row, in percent")]
    pub growth_rate: f64,

    #[schemars(description = "This row's prior value as a percentage of prior-period total assets")]
    pub prior_asset_share: f64,

    #[schemars(description = "This row's current value as a percentage of current-period total assets")]
    pub current_asset_share: f64,
}

/// The derivation output: every input row in input order, augmented with
/// growth and asset-share columns. Only constructible through [`derive`],
/// so an `AugmentedDataset` always had a total-assets anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AugmentedDataset {
    rows: Vec<AugmentedLineItem>,
}

impl AugmentedDataset {
    pub fn rows(&self) -> &[AugmentedLineItem] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AugmentedLineItem> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Same lookup contract as [`StatementDataset::find`]: case-insensitive
    /// substring, first match in row order.
    pub fn find(&self, label_fragment: &str) -> Option<&AugmentedLineItem> {
        self.rows
            .iter()
            .find(|item| label_contains(&item.label, label_fragment))
    }
}

/// Computes the growth-rate and asset-share columns for every row.
///
/// The statement must contain a row matching [`labels::TOTAL_ASSETS`]; that
/// row anchors the share computation for the whole dataset. Without it there
/// is no partial result, the derivation fails with
/// [`AnalysisError::AnchorNotFound`].
///
/// A prior value of exactly zero yields a huge finite growth figure via
/// [`EPSILON`] substitution rather than an error; the same substitution is
/// applied independently to each period's anchor value.
pub fn derive(dataset: &StatementDataset) -> Result<AugmentedDataset> {
    let anchor = dataset
        .find(labels::TOTAL_ASSETS)
        .ok_or_else(|| AnalysisError::AnchorNotFound(labels::TOTAL_ASSETS.to_string()))?;

    let prior_anchor = safe_divisor(anchor.prior_value);
    let current_anchor = safe_divisor(anchor.current_value);

    debug!(
        "deriving {} rows against anchor '{}' (prior={}, current={})",
        dataset.len(),
        anchor.label,
        anchor.prior_value,
        anchor.current_value
    );

    let rows = dataset
        .iter()
        .map(|item| AugmentedLineItem {
            label: item.label.clone(),
            prior_value: item.prior_value,
            current_value: item.current_value,
            growth_rate: (item.current_value - item.prior_value) / safe_divisor(item.prior_value)
                * 100.0,
            prior_asset_share: item.prior_value / prior_anchor * 100.0,
            current_asset_share: item.current_value / current_anchor * 100.0,
        })
        .collect();

    Ok(AugmentedDataset { rows })
}
