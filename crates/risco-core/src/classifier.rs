//! Threshold-based risk band classification.
//!
//! The band table is policy, not code: an ordered list of
//! `(label, inclusive lower bound)` pairs, replaceable at initialization.
//! `RiskBands::new` sorts the table descending by bound, so callers never
//! depend on insertion order.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RiscoError;
use crate::RiscoResult;

/// A single band threshold: scores strictly above `lower_bound` fall in
/// `label` (the floor band also matches on equality).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskBand {
    #[serde(rename = "faixa")]
    pub label: String,
    #[serde(rename = "minimo")]
    pub lower_bound: Decimal,
}

/// Ordered band threshold table.
#[derive(Debug, Clone)]
pub struct RiskBands {
    bands: Vec<RiskBand>,
}

impl Default for RiskBands {
    /// Default policy: BAIXO ≤ 0.4 < MEDIO ≤ 0.7 < ALTO.
    fn default() -> Self {
        RiskBands {
            bands: vec![
                RiskBand {
                    label: "ALTO".to_string(),
                    lower_bound: dec!(0.7),
                },
                RiskBand {
                    label: "MEDIO".to_string(),
                    lower_bound: dec!(0.4),
                },
                RiskBand {
                    label: "BAIXO".to_string(),
                    lower_bound: dec!(0.0),
                },
            ],
        }
    }
}

impl RiskBands {
    /// Build a table from `(label, lower bound)` pairs in any order.
    /// The table is sorted descending by bound here, once.
    pub fn new(mut bands: Vec<RiskBand>) -> RiscoResult<Self> {
        if bands.is_empty() {
            return Err(RiscoError::InvalidBandConfig(
                "band list is empty".to_string(),
            ));
        }
        bands.sort_by(|a, b| b.lower_bound.cmp(&a.lower_bound));
        for pair in bands.windows(2) {
            if pair[0].lower_bound == pair[1].lower_bound {
                return Err(RiscoError::InvalidBandConfig(format!(
                    "duplicate lower bound {} ({} / {})",
                    pair[0].lower_bound, pair[0].label, pair[1].label
                )));
            }
        }
        Ok(RiskBands { bands })
    }

    /// Map a score to its band label.
    ///
    /// Scan descending: first band whose bound is strictly below the score
    /// wins. The floor band also accepts equality, so a score sitting
    /// exactly on the lowest bound still classifies. Anything below the
    /// floor (negative score, or a floor bound above zero) is a
    /// configuration gap and surfaces as `UnclassifiedScore`.
    pub fn classify(&self, score: Decimal) -> RiscoResult<&str> {
        for band in &self.bands {
            if score > band.lower_bound {
                return Ok(&band.label);
            }
        }
        if let Some(floor) = self.bands.last() {
            if score == floor.lower_bound {
                return Ok(&floor.label);
            }
        }
        Err(RiscoError::UnclassifiedScore { score })
    }

    /// Band labels in configuration (descending-bound) order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.bands.iter().map(|b| b.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}
