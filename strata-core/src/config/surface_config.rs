use serde::{Deserialize, Serialize};

use super::defaults;

/// Surface extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Iso-probability at which the surface is extracted.
    pub confidence_threshold: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: defaults::DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}
