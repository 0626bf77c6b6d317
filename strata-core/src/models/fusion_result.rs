use serde::{Deserialize, Serialize};

use crate::config::{FusionWeights, Interpolation, RuleThresholds};
use crate::grid::Grid2;

/// Externally supplied spectral/temporal evidence grids, each in [0, 1].
/// Shapes may differ from the volumetric grid; fusion resamples them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralEvidence {
    pub temporal_persistence: Grid2,
    pub spatial_coherence: Grid2,
    pub spectral_differential: Grid2,
}

/// Weighted contribution of each channel to the fused probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelContributions {
    pub volumetric: Grid2,
    pub temporal: Grid2,
    pub spatial: Grid2,
    pub spectral: Grid2,
}

/// Shape record of one resampled channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelShape {
    pub channel: String,
    pub original_shape: (usize, usize),
    pub resampled: bool,
}

/// How many cells each consistency rule touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCounts {
    pub low_persistence: usize,
    pub persistence_without_volume: usize,
    pub convergence_bonus: usize,
}

/// Weights, thresholds, and shapes used by one fusion pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionMetadata {
    pub weights: FusionWeights,
    pub rules: RuleThresholds,
    pub interpolation: Interpolation,
    pub target_shape: (usize, usize),
    pub channels: Vec<ChannelShape>,
    pub rule_counts: RuleCounts,
}

/// Terminal artifact of evidence fusion. Read-only once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionResult {
    /// Final fused probability in [0, 1].
    pub probability: Grid2,
    pub contributions: ChannelContributions,
    /// Per-cell confidence: weakest channel discounted by dispersion.
    pub confidence: Grid2,
    /// Spectral share of the total contribution, in [0, 1].
    pub dominant_source: Grid2,
    pub metadata: FusionMetadata,
}

impl FusionResult {
    pub fn shape(&self) -> (usize, usize) {
        self.probability.shape()
    }
}
