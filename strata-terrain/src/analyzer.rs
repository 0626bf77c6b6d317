use tracing::debug;

use strata_core::errors::{StrataResult, TerrainError};
use strata_core::models::DirectVolumetricAnalysis;
use strata_core::Grid2;

use crate::derivatives;

/// Computes [`DirectVolumetricAnalysis`] from a terrain/surface pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectVolumetricAnalyzer;

impl DirectVolumetricAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyse `dtm` (bare ground) against `dsm` (top of everything), both
    /// with cells of `cell_size_m = (dx, dy)` metres. The grids must share
    /// one shape.
    pub fn analyze(
        &self,
        dtm: &Grid2,
        dsm: &Grid2,
        cell_size_m: (f64, f64),
    ) -> StrataResult<DirectVolumetricAnalysis> {
        let (dx, dy) = cell_size_m;
        if !(dx.is_finite() && dy.is_finite() && dx > 0.0 && dy > 0.0) {
            return Err(TerrainError::InvalidCellSize { dx, dy }.into());
        }
        check_elevation("dtm", dtm)?;
        check_elevation("dsm", dsm)?;
        dtm.ensure_same_shape(dsm)?;

        let elevation_difference = dsm.zip_map(dtm, |s, t| s - t)?;
        let cell_area = dx * dy;
        let (positive, negative) =
            elevation_difference
                .values()
                .iter()
                .fold((0.0, 0.0), |(pos, neg), &d| {
                    if d > 0.0 {
                        (pos + d, neg)
                    } else {
                        (pos, neg - d)
                    }
                });

        let analysis = DirectVolumetricAnalysis {
            positive_volume_m3: positive * cell_area,
            negative_volume_m3: negative * cell_area,
            slope_deg: derivatives::slope_deg(dtm, dx, dy),
            roughness: derivatives::roughness(dtm),
            curvature: derivatives::curvature(dtm, dx, dy),
            elevation_difference,
            cell_size_m,
        };
        debug!(
            shape = ?analysis.shape(),
            positive_m3 = analysis.positive_volume_m3,
            negative_m3 = analysis.negative_volume_m3,
            "direct volumetric analysis complete"
        );
        Ok(analysis)
    }
}

fn check_elevation(name: &str, grid: &Grid2) -> StrataResult<()> {
    if grid.is_empty() {
        return Err(TerrainError::EmptyElevation {
            name: name.to_string(),
        }
        .into());
    }
    let (nx, _) = grid.shape();
    if let Some(i) = grid.values().iter().position(|v| !v.is_finite()) {
        return Err(TerrainError::NonFiniteElevation {
            name: name.to_string(),
            x: i % nx,
            y: i / nx,
        }
        .into());
    }
    Ok(())
}
