use tracing::{debug, warn};

use strata_core::config::FusionConfig;
use strata_core::errors::{FusionError, StrataResult};
use strata_core::models::{
    ChannelShape, DirectVolumetricAnalysis, FusionMetadata, FusionResult, SpectralEvidence,
};
use strata_core::Grid2;

use crate::channels::{AlignedEvidence, ChannelGrids};
use crate::resample::resample;
use crate::rules;

/// Fuses the direct-volumetric channel with spectral/temporal evidence.
#[derive(Debug, Clone, Default)]
pub struct EvidenceFusionEngine {
    config: FusionConfig,
}

impl EvidenceFusionEngine {
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Fuse one terrain analysis with one set of spectral grids.
    pub fn fuse(
        &self,
        analysis: &DirectVolumetricAnalysis,
        spectral: &SpectralEvidence,
    ) -> StrataResult<FusionResult> {
        let volumetric = analysis.volumetric_evidence();
        let aligned = self.align(spectral, volumetric.shape())?;
        self.combine(&volumetric, aligned)
    }

    /// Resample every spectral grid to `target`. Independent of the
    /// volumetric channel, so it can run concurrently with terrain analysis.
    pub fn align(
        &self,
        spectral: &SpectralEvidence,
        target: (usize, usize),
    ) -> StrataResult<AlignedEvidence> {
        if target.0 == 0 || target.1 == 0 {
            return Err(FusionError::EmptyEvidence {
                channel: "volumetric".to_string(),
            }
            .into());
        }
        let mut shapes = Vec::with_capacity(3);
        let mut fit = |name: &str, grid: &Grid2| -> StrataResult<Grid2> {
            if grid.is_empty() {
                return Err(FusionError::EmptyEvidence {
                    channel: name.to_string(),
                }
                .into());
            }
            let resampled = grid.shape() != target;
            if resampled {
                warn!(
                    channel = name,
                    from = ?grid.shape(),
                    to = ?target,
                    interpolation = ?self.config.interpolation,
                    "evidence shape mismatch, resampling"
                );
            }
            shapes.push(ChannelShape {
                channel: name.to_string(),
                original_shape: grid.shape(),
                resampled,
            });
            let out = resample(grid, target, self.config.interpolation);
            if out.shape() != target {
                return Err(FusionError::ResampleFailed {
                    channel: name.to_string(),
                    reason: format!("produced {:?}, wanted {:?}", out.shape(), target),
                }
                .into());
            }
            Ok(out)
        };

        let temporal = fit("temporal_persistence", &spectral.temporal_persistence)?;
        let spatial = fit("spatial_coherence", &spectral.spatial_coherence)?;
        let spectral = fit("spectral_differential", &spectral.spectral_differential)?;
        Ok(AlignedEvidence {
            target_shape: target,
            temporal,
            spatial,
            spectral,
            shapes,
        })
    }

    /// Combine the volumetric channel with aligned spectral evidence.
    pub fn combine(&self, volumetric: &Grid2, aligned: AlignedEvidence) -> StrataResult<FusionResult> {
        if volumetric.is_empty() {
            return Err(FusionError::EmptyEvidence {
                channel: "volumetric".to_string(),
            }
            .into());
        }
        self.config.weights.validate()?;
        let (channels, shapes) = aligned.with_volumetric(volumetric)?;
        Ok(self.fuse_channels(&channels, shapes))
    }

    /// Weighted sum, consistency rules, confidence, and dominant source
    /// over already-aligned channels.
    pub fn fuse_channels(&self, channels: &ChannelGrids, shapes: Vec<ChannelShape>) -> FusionResult {
        let weights = self.config.weights;
        let contributions = channels.contributions(&weights);
        let baseline = channels.baseline(&weights);
        let (probability, rule_counts) =
            rules::apply(&baseline, channels, &weights, &self.config.rules);

        let (nx, ny) = channels.shape();
        let confidence = Grid2::from_fn(nx, ny, |x, y| cell_confidence(channels.at(x, y)));
        let dominant_source = Grid2::from_fn(nx, ny, |x, y| {
            let get = |g: &Grid2| g.get(x, y).unwrap_or(0.0);
            let spectral_side = get(&contributions.temporal)
                + get(&contributions.spatial)
                + get(&contributions.spectral);
            let total = spectral_side + get(&contributions.volumetric);
            if total > 0.0 {
                (spectral_side / total).clamp(0.0, 1.0)
            } else {
                0.5
            }
        });

        debug!(
            shape = ?(nx, ny),
            mean_probability = probability.mean(),
            low_persistence = rule_counts.low_persistence,
            persistence_without_volume = rule_counts.persistence_without_volume,
            convergence_bonus = rule_counts.convergence_bonus,
            "evidence fused"
        );

        FusionResult {
            probability,
            contributions,
            confidence,
            dominant_source,
            metadata: FusionMetadata {
                weights,
                rules: self.config.rules,
                interpolation: self.config.interpolation,
                target_shape: (nx, ny),
                channels: shapes,
                rule_counts,
            },
        }
    }
}

/// Weakest channel discounted by dispersion: `min * (1 - 2σ)`.
pub fn cell_confidence(values: [f64; 4]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    (min * (1.0 - 2.0 * variance.sqrt())).clamp(0.0, 1.0)
}
