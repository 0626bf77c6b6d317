//! Evidence channels aligned to a common shape.

use strata_core::config::FusionWeights;
use strata_core::errors::{GeometryError, StrataResult};
use strata_core::models::{ChannelContributions, ChannelShape};
use strata_core::Grid2;

/// Four same-shaped evidence grids, values in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelGrids {
    pub volumetric: Grid2,
    pub temporal: Grid2,
    pub spatial: Grid2,
    pub spectral: Grid2,
}

impl ChannelGrids {
    /// Assemble the channels, rejecting any shape disagreement.
    pub fn new(
        volumetric: Grid2,
        temporal: Grid2,
        spatial: Grid2,
        spectral: Grid2,
    ) -> StrataResult<Self> {
        volumetric.ensure_same_shape(&temporal)?;
        volumetric.ensure_same_shape(&spatial)?;
        volumetric.ensure_same_shape(&spectral)?;
        Ok(Self {
            volumetric: volumetric.map(unit),
            temporal: temporal.map(unit),
            spatial: spatial.map(unit),
            spectral: spectral.map(unit),
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        self.volumetric.shape()
    }

    /// Channel values at one cell, in volumetric/temporal/spatial/spectral order.
    pub fn at(&self, x: usize, y: usize) -> [f64; 4] {
        [
            self.volumetric.get(x, y).unwrap_or(0.0),
            self.temporal.get(x, y).unwrap_or(0.0),
            self.spatial.get(x, y).unwrap_or(0.0),
            self.spectral.get(x, y).unwrap_or(0.0),
        ]
    }

    /// Per-channel weighted contributions, normalised by the weight total
    /// so that they sum to a probability.
    pub fn contributions(&self, weights: &FusionWeights) -> ChannelContributions {
        let total = weights.total();
        let scale = |grid: &Grid2, w: f64| {
            if total > 0.0 {
                grid.map(|v| v * w / total)
            } else {
                grid.map(|_| 0.0)
            }
        };
        ChannelContributions {
            volumetric: scale(&self.volumetric, weights.volumetric),
            temporal: scale(&self.temporal, weights.temporal),
            spatial: scale(&self.spatial, weights.spatial),
            spectral: scale(&self.spectral, weights.spectral),
        }
    }

    /// Weighted sum before consistency rules.
    pub fn baseline(&self, weights: &FusionWeights) -> Grid2 {
        let c = self.contributions(weights);
        let (nx, ny) = self.shape();
        Grid2::from_fn(nx, ny, |x, y| {
            let sum = [&c.volumetric, &c.temporal, &c.spatial, &c.spectral]
                .iter()
                .filter_map(|g| g.get(x, y))
                .sum::<f64>();
            unit(sum)
        })
    }
}

/// Spectral/temporal grids resampled to a target shape, awaiting the
/// volumetric channel.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedEvidence {
    pub target_shape: (usize, usize),
    pub temporal: Grid2,
    pub spatial: Grid2,
    pub spectral: Grid2,
    pub shapes: Vec<ChannelShape>,
}

impl AlignedEvidence {
    /// Join with the volumetric channel, which must have the target shape.
    pub fn with_volumetric(self, volumetric: &Grid2) -> StrataResult<(ChannelGrids, Vec<ChannelShape>)> {
        if volumetric.shape() != self.target_shape {
            return Err(GeometryError::ShapeMismatch {
                expected: format!("{:?}", self.target_shape),
                found: format!("volumetric {:?}", volumetric.shape()),
            }
            .into());
        }
        let grids = ChannelGrids::new(volumetric.clone(), self.temporal, self.spatial, self.spectral)?;
        Ok((grids, self.shapes))
    }
}

fn unit(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
