use serde::{Deserialize, Serialize};

use crate::grid::Grid2;

/// Pure geometry derived from a terrain/surface elevation pair.
///
/// Independent of any volumetric field and never an archaeological
/// probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectVolumetricAnalysis {
    /// Volume of material above the terrain model, m³.
    pub positive_volume_m3: f64,
    /// Volume of depressions below the terrain model, m³ (magnitude).
    pub negative_volume_m3: f64,
    /// Surface minus terrain, metres.
    pub elevation_difference: Grid2,
    /// Terrain slope, degrees.
    pub slope_deg: Grid2,
    /// Local variance of terrain elevation, m².
    pub roughness: Grid2,
    /// Sum of second derivatives of terrain elevation, 1/m.
    pub curvature: Grid2,
    /// Cell edge lengths `(dx, dy)` in metres.
    pub cell_size_m: (f64, f64),
}

impl DirectVolumetricAnalysis {
    pub fn shape(&self) -> (usize, usize) {
        self.roughness.shape()
    }

    /// Roughness normalised by its maximum into [0, 1]. A perfectly flat
    /// terrain yields an all-zero grid.
    pub fn volumetric_evidence(&self) -> Grid2 {
        let peak = self.roughness.max();
        if !(peak.is_finite() && peak > 0.0) {
            return self.roughness.map(|_| 0.0);
        }
        self.roughness.map(|r| (r / peak).clamp(0.0, 1.0))
    }

    pub fn net_volume_m3(&self) -> f64 {
        self.positive_volume_m3 - self.negative_volume_m3
    }
}
