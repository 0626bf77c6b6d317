use serde::{Deserialize, Serialize};

use super::{check_unit, defaults};
use crate::errors::{FusionError, StrataResult};

/// Evidence fusion configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FusionConfig {
    pub interpolation: Interpolation,
    pub weights: FusionWeights,
    pub rules: RuleThresholds,
}

/// Weights of the four evidence channels in the fused probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionWeights {
    pub volumetric: f64,
    pub temporal: f64,
    pub spatial: f64,
    pub spectral: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            volumetric: defaults::DEFAULT_WEIGHT_VOLUMETRIC,
            temporal: defaults::DEFAULT_WEIGHT_TEMPORAL,
            spatial: defaults::DEFAULT_WEIGHT_SPATIAL,
            spectral: defaults::DEFAULT_WEIGHT_SPECTRAL,
        }
    }
}

impl FusionWeights {
    pub fn total(&self) -> f64 {
        self.volumetric + self.temporal + self.spatial + self.spectral
    }

    pub fn validate(&self) -> StrataResult<()> {
        let all = [self.volumetric, self.temporal, self.spatial, self.spectral];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(FusionError::InvalidWeights {
                reason: format!("weights must be finite and non-negative: {all:?}"),
            }
            .into());
        }
        if self.total() <= 0.0 {
            return Err(FusionError::InvalidWeights {
                reason: "weights sum to zero".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Thresholds and factors of the three scientific consistency rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    /// Rule 1: persistence below this attenuates.
    pub persistence_min: f64,
    pub low_persistence_attenuation: f64,
    /// Rule 2: volumetric evidence below this with persistence above
    /// `high_persistence_min` attenuates.
    pub low_volume_max: f64,
    pub high_persistence_min: f64,
    pub persistence_without_volume_attenuation: f64,
    /// Rule 3: all three channels above their minimum earn the bonus.
    pub convergence_volumetric_min: f64,
    pub convergence_persistence_min: f64,
    pub convergence_coherence_min: f64,
    pub convergence_bonus: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            persistence_min: defaults::DEFAULT_PERSISTENCE_MIN,
            low_persistence_attenuation: defaults::DEFAULT_LOW_PERSISTENCE_ATTENUATION,
            low_volume_max: defaults::DEFAULT_LOW_VOLUME_MAX,
            high_persistence_min: defaults::DEFAULT_HIGH_PERSISTENCE_MIN,
            persistence_without_volume_attenuation:
                defaults::DEFAULT_PERSISTENCE_WITHOUT_VOLUME_ATTENUATION,
            convergence_volumetric_min: defaults::DEFAULT_CONVERGENCE_VOLUMETRIC_MIN,
            convergence_persistence_min: defaults::DEFAULT_CONVERGENCE_PERSISTENCE_MIN,
            convergence_coherence_min: defaults::DEFAULT_CONVERGENCE_COHERENCE_MIN,
            convergence_bonus: defaults::DEFAULT_CONVERGENCE_BONUS,
        }
    }
}

impl RuleThresholds {
    pub fn validate(&self) -> StrataResult<()> {
        check_unit("fusion.rules.persistence_min", self.persistence_min)?;
        check_unit(
            "fusion.rules.low_persistence_attenuation",
            self.low_persistence_attenuation,
        )?;
        check_unit("fusion.rules.low_volume_max", self.low_volume_max)?;
        check_unit("fusion.rules.high_persistence_min", self.high_persistence_min)?;
        check_unit(
            "fusion.rules.persistence_without_volume_attenuation",
            self.persistence_without_volume_attenuation,
        )?;
        check_unit(
            "fusion.rules.convergence_volumetric_min",
            self.convergence_volumetric_min,
        )?;
        check_unit(
            "fusion.rules.convergence_persistence_min",
            self.convergence_persistence_min,
        )?;
        check_unit(
            "fusion.rules.convergence_coherence_min",
            self.convergence_coherence_min,
        )?;
        if !(self.convergence_bonus.is_finite() && self.convergence_bonus >= 1.0) {
            return Err(crate::errors::StrataError::ConfigError(format!(
                "fusion.rules.convergence_bonus must be >= 1.0, got {}",
                self.convergence_bonus
            )));
        }
        Ok(())
    }
}

/// Resize kernel used when a spectral grid does not match the
/// volumetric-evidence grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    Nearest,
    #[default]
    Bilinear,
}
