//! # Statement Analyzer
//!
//! A library for analyzing two-period financial statements (a prior and a
//! current value per line item) into growth, structure, and ratio metrics.
//!
//! ## Core Concepts
//!
//! - **Statement Dataset**: the ordered, immutable rows of one statement
//! - **Derivation**: per-row growth rate and proportion of total assets,
//!   anchored on the mandatory "TOTAL ASSETS" line item
//! - **Ratio Set**: liquidity, efficiency, and profitability ratios, each
//!   independently available; a statement missing one line item degrades
//!   only the ratios that depend on it
//! - **Report Summary**: a Markdown rendering of both, consumed by table
//!   display and by the optional AI commentary layer (`gemini` feature)
//!
//! ## Example
//!
//! ```rust
//! use statement_analyzer::{analyze_statement, from_raw_rows, RatioValue};
//!
//! let dataset = from_raw_rows([
//!     ("TOTAL ASSETS", "1000", "1200"),
//!     ("CURRENT ASSETS", "400", "500"),
//!     ("CURRENT LIABILITIES", "200", "250"),
//! ]);
//!
//! let analysis = analyze_statement(&dataset).unwrap();
//! assert_eq!(analysis.ratios.current_ratio_current, RatioValue::Value(2.0));
//! ```

pub mod engine;
pub mod error;
pub mod ingestion;
pub mod ratios;
pub mod report;
pub mod session;
pub mod statement;

#[cfg(feature = "gemini")]
pub mod llm;

pub use engine::{derive, AugmentedDataset, AugmentedLineItem, EPSILON};
pub use error::{AnalysisError, Result};
pub use ingestion::*;
pub use ratios::{compute_ratios, RatioSet, RatioValue};
pub use report::*;
pub use session::*;
pub use statement::{labels, LineItem, StatementDataset};

use log::{debug, info};
use serde::{Deserialize, Serialize};

/// The full output of one pipeline run. A pure function of the input
/// dataset: recomputing on an unmodified dataset yields an identical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementAnalysis {
    pub augmented: AugmentedDataset,
    pub ratios: RatioSet,
}

impl StatementAnalysis {
    pub fn summary(&self) -> ReportSummary {
        ReportSummary::build(&self.augmented, &self.ratios)
    }
}

/// Runs the whole pipeline: derivation, then ratio computation.
///
/// Fails only on the structural error (no total-assets anchor); every other
/// degenerate input surfaces as per-ratio [`RatioValue::Unavailable`] or
/// [`RatioValue::Infinite`] markers in the result.
pub fn analyze_statement(dataset: &StatementDataset) -> Result<StatementAnalysis> {
    info!("analyzing statement with {} line items", dataset.len());

    let augmented = derive(dataset)?;
    let ratios = compute_ratios(&augmented);

    debug!(
        "ratio availability: current ratio {}/{}, turnover {}, margin {}/{}, roa {}",
        ratios.current_ratio_prior,
        ratios.current_ratio_current,
        ratios.asset_turnover,
        ratios.net_profit_margin_prior,
        ratios.net_profit_margin_current,
        ratios.return_on_assets
    );

    Ok(StatementAnalysis { augmented, ratios })
}
