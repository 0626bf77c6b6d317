use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ArbitrationError;

/// Coarse band of a consistency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyBand {
    HighConsistency,
    ModerateConsistency,
    LowConsistency,
}

impl ConsistencyBand {
    pub const HIGH_MIN: f64 = 0.7;
    pub const MODERATE_MIN: f64 = 0.5;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_MIN {
            Self::HighConsistency
        } else if score >= Self::MODERATE_MIN {
            Self::ModerateConsistency
        } else {
            Self::LowConsistency
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighConsistency => "high_consistency",
            Self::ModerateConsistency => "moderate_consistency",
            Self::LowConsistency => "low_consistency",
        }
    }
}

/// Field adjustments proposed by arbitration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendedAdjustments {
    /// Multiplier on material probability.
    pub probability_boost: f64,
    /// Additive increase on uncertainty.
    pub uncertainty_increase: f64,
}

impl RecommendedAdjustments {
    pub const BOOST_MIN: f64 = 0.5;
    pub const BOOST_MAX: f64 = 1.5;
}

/// Outcome of consistency arbitration.
///
/// Every evaluator, remote or deterministic, produces this exact shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// Name of the evaluator that produced the report.
    pub evaluator: String,
    pub consistency_score: f64,
    pub spectral_convergence: f64,
    pub geometric_plausibility: f64,
    pub temporal_consistency: f64,
    pub overfitting_risk: f64,
    pub band: ConsistencyBand,
    /// Agreement of each evidence channel with the consensus, in [0, 1].
    pub channel_agreement: BTreeMap<String, f64>,
    pub adjustments: RecommendedAdjustments,
    pub reasoning: String,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ConsistencyReport {
    /// Check the numeric contract: scores and agreements in [0, 1],
    /// boost in [0.5, 1.5], uncertainty increase in [0, 1].
    pub fn validate(&self) -> Result<(), ArbitrationError> {
        let unit = [
            ("consistency_score", self.consistency_score),
            ("spectral_convergence", self.spectral_convergence),
            ("geometric_plausibility", self.geometric_plausibility),
            ("temporal_consistency", self.temporal_consistency),
            ("overfitting_risk", self.overfitting_risk),
            (
                "uncertainty_increase",
                self.adjustments.uncertainty_increase,
            ),
        ];
        for (key, value) in unit {
            check_range(key, value, 0.0, 1.0)?;
        }
        for (channel, value) in &self.channel_agreement {
            check_range(&format!("channel_agreement.{channel}"), *value, 0.0, 1.0)?;
        }
        check_range(
            "probability_boost",
            self.adjustments.probability_boost,
            RecommendedAdjustments::BOOST_MIN,
            RecommendedAdjustments::BOOST_MAX,
        )
    }
}

fn check_range(key: &str, value: f64, lo: f64, hi: f64) -> Result<(), ArbitrationError> {
    if value.is_finite() && (lo..=hi).contains(&value) {
        Ok(())
    } else {
        Err(ArbitrationError::OutOfRange {
            key: key.to_string(),
            value,
        })
    }
}
