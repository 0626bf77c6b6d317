pub mod arbitration_config;
pub mod defaults;
pub mod fusion_config;
pub mod observability_config;
pub mod surface_config;
pub mod volumetric_config;

use serde::{Deserialize, Serialize};

pub use arbitration_config::ArbitrationConfig;
pub use fusion_config::{FusionConfig, FusionWeights, Interpolation, RuleThresholds};
pub use observability_config::ObservabilityConfig;
pub use surface_config::SurfaceConfig;
pub use volumetric_config::VolumetricConfig;

use crate::errors::{StrataError, StrataResult};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StrataConfig {
    pub volumetric: VolumetricConfig,
    pub surface: SurfaceConfig,
    pub fusion: FusionConfig,
    pub arbitration: ArbitrationConfig,
    pub observability: ObservabilityConfig,
}

impl StrataConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Reject configurations for which no safe default exists.
    pub fn validate(&self) -> StrataResult<()> {
        let v = &self.volumetric;
        if !(v.voxel_resolution_m.is_finite() && v.voxel_resolution_m > 0.0) {
            return Err(crate::errors::GeometryError::InvalidVoxelSize {
                size: v.voxel_resolution_m,
            }
            .into());
        }
        if v.max_horizontal_voxels == 0 || v.max_vertical_voxels == 0 {
            return Err(StrataError::ConfigError(
                "voxel maxima must be at least 1".to_string(),
            ));
        }
        if v.min_vertical_voxels > v.max_vertical_voxels {
            return Err(StrataError::ConfigError(format!(
                "min_vertical_voxels {} exceeds max_vertical_voxels {}",
                v.min_vertical_voxels, v.max_vertical_voxels
            )));
        }
        if !(v.height_factor.is_finite() && v.height_factor > 0.0) {
            return Err(StrataError::ConfigError(format!(
                "height_factor must be positive, got {}",
                v.height_factor
            )));
        }
        check_unit("surface.confidence_threshold", self.surface.confidence_threshold)?;
        self.fusion.weights.validate()?;
        self.fusion.rules.validate()?;
        if self.arbitration.timeout_ms == 0 {
            return Err(StrataError::ConfigError(
                "arbitration.timeout_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Require a finite value in [0.0, 1.0].
pub(crate) fn check_unit(name: &str, value: f64) -> StrataResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(StrataError::ConfigError(format!(
            "{name} must lie in [0, 1], got {value}"
        )))
    }
}
