use crate::engine::AugmentedDataset;
use crate::statement::labels;
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single ratio computation.
///
/// `Infinite` and `Unavailable` are distinct sentinels, and both are
/// distinct from a value of zero: an infinite current ratio means "no
/// short-term obligations", an unavailable one means "the statement does
/// not carry the inputs". Consumers must handle all three cases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum RatioValue {
    Value(f64),
    Infinite,
    Unavailable,
}

impl RatioValue {
    pub fn is_available(&self) -> bool {
        !matches!(self, RatioValue::Unavailable)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RatioValue::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// Renders the value with two decimals and the given unit suffix;
    /// the sentinels render as literal `Infinite` / `N/A` markers.
    pub fn format(&self, suffix: &str) -> String {
        match self {
            RatioValue::Value(v) => format!("{:.2}{}", v, suffix),
            RatioValue::Infinite => "Infinite".to_string(),
            RatioValue::Unavailable => "N/A".to_string(),
        }
    }
}

impl fmt::Display for RatioValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(""))
    }
}

/// The fixed ratio set computed from one statement. Every field is
/// independently available: a missing line item degrades only the ratios
/// that depend on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RatioSet {
    pub current_ratio_prior: RatioValue,
    pub current_ratio_current: RatioValue,
    pub asset_turnover: RatioValue,
    pub net_profit_margin_prior: RatioValue,
    pub net_profit_margin_current: RatioValue,
    pub return_on_assets: RatioValue,
}

/// Computes the liquidity, efficiency, and profitability ratios.
///
/// - Current ratio (per period): current assets / current liabilities;
///   zero liabilities yields `Infinite`, a missing line item on either side
///   marks both periods unavailable.
/// - Asset turnover (current period): current net revenue / average total
///   assets.
/// - Net profit margin (per period): net profit / net revenue * 100, each
///   period on its own inputs.
/// - Return on assets (current period): current net profit / average total
///   assets * 100.
///
/// Average total assets is the mean of the two total-assets values of this
/// statement and is the denominator wherever average assets are referenced.
pub fn compute_ratios(dataset: &AugmentedDataset) -> RatioSet {
    let current_assets = dataset.find(labels::CURRENT_ASSETS);
    let current_liabilities = dataset.find(labels::CURRENT_LIABILITIES);

    let (current_ratio_prior, current_ratio_current) = match (current_assets, current_liabilities)
    {
        (Some(assets), Some(liabilities)) => (
            current_ratio(assets.prior_value, liabilities.prior_value),
            current_ratio(assets.current_value, liabilities.current_value),
        ),
        _ => {
            debug!("current assets or current liabilities not found; liquidity unavailable");
            (RatioValue::Unavailable, RatioValue::Unavailable)
        }
    };

    let average_assets = dataset
        .find(labels::TOTAL_ASSETS)
        .map(|total| (total.prior_value + total.current_value) / 2.0);

    let net_revenue = dataset.find(labels::NET_REVENUE);
    let net_profit = dataset.find(labels::NET_PROFIT);

    let asset_turnover = match (average_assets, net_revenue) {
        (Some(avg), Some(revenue)) if avg != 0.0 => RatioValue::Value(revenue.current_value / avg),
        _ => RatioValue::Unavailable,
    };

    let net_profit_margin_prior = margin(
        net_profit.map(|p| p.prior_value),
        net_revenue.map(|r| r.prior_value),
    );
    let net_profit_margin_current = margin(
        net_profit.map(|p| p.current_value),
        net_revenue.map(|r| r.current_value),
    );

    let return_on_assets = match (average_assets, net_profit) {
        (Some(avg), Some(profit)) if avg != 0.0 => {
            RatioValue::Value(profit.current_value / avg * 100.0)
        }
        _ => RatioValue::Unavailable,
    };

    RatioSet {
        current_ratio_prior,
        current_ratio_current,
        asset_turnover,
        net_profit_margin_prior,
        net_profit_margin_current,
        return_on_assets,
    }
}

fn current_ratio(assets: f64, liabilities: f64) -> RatioValue {
    if liabilities == 0.0 {
        RatioValue::Infinite
    } else {
        RatioValue::Value(assets / liabilities)
    }
}

fn margin(profit: Option<f64>, revenue: Option<f64>) -> RatioValue {
    match (profit, revenue) {
        (Some(profit), Some(revenue)) if revenue != 0.0 => {
            RatioValue::Value(profit / revenue * 100.0)
        }
        _ => RatioValue::Unavailable,
    }
}
