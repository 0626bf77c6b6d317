use serde::{Deserialize, Serialize};

use strata_core::errors::StrataResult;
use strata_core::models::{
    ConfidenceZone, Disclaimer, FusionResult, GeometricModel, MeshStatistics, VolumetricField,
};
use strata_core::Grid2;

/// Dominant-source value used when no fusion result is available.
const NEUTRAL_DOMINANT_SOURCE: f64 = 0.5;

/// Per-vertex attributes for a 3D viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexAttributes {
    pub index: usize,
    pub position: [f64; 3],
    /// Material volume of the voxel column under the vertex, m³.
    pub local_volume_m3: f64,
    pub fused_probability: f64,
    pub dominant_source: f64,
    pub confidence: f64,
    pub zone: ConfidenceZone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeBundle {
    pub vertex_count: usize,
    pub face_count: usize,
    pub iso_threshold: f64,
    pub statistics: MeshStatistics,
    pub vertices: Vec<VertexAttributes>,
    pub disclaimer: Disclaimer,
}

impl AttributeBundle {
    pub fn to_json(&self) -> StrataResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the attribute bundle for `model`, which must have been extracted
/// from `field`. Fusion grids are assumed to span the same horizontal
/// footprint as the field.
pub fn attribute_bundle(
    model: &GeometricModel,
    field: &VolumetricField,
    fusion: Option<&FusionResult>,
) -> AttributeBundle {
    let (nx, ny, nz) = field.dimensions();
    let size = field.voxel_size_m();
    let extent = (nx as f64 * size[0], ny as f64 * size[1]);
    let voxel_volume = field.voxel_volume_m3();
    let column_volume = Grid2::from_fn(nx, ny, |x, y| {
        (0..nz)
            .filter_map(|z| field.material().get(x, y, z))
            .sum::<f64>()
            * voxel_volume
    });

    let vertices = model
        .vertices
        .iter()
        .enumerate()
        .map(|(index, &position)| {
            let (fx, fy) = (position[0] / extent.0, position[1] / extent.1);
            let local_volume_m3 = lookup(&column_volume, fx, fy).unwrap_or(0.0);
            let (fused_probability, dominant_source) = match fusion {
                Some(f) => (
                    lookup(&f.probability, fx, fy).unwrap_or(0.0),
                    lookup(&f.dominant_source, fx, fy).unwrap_or(NEUTRAL_DOMINANT_SOURCE),
                ),
                None => (0.0, NEUTRAL_DOMINANT_SOURCE),
            };
            let confidence = model.vertex_confidence.get(index).copied().unwrap_or(0.0);
            VertexAttributes {
                index,
                position,
                local_volume_m3,
                fused_probability,
                dominant_source,
                confidence,
                zone: ConfidenceZone::from_confidence(confidence),
            }
        })
        .collect();

    AttributeBundle {
        vertex_count: model.vertex_count(),
        face_count: model.face_count(),
        iso_threshold: model.iso_threshold,
        statistics: model.statistics,
        vertices,
        disclaimer: Disclaimer::for_level(field.inference_level()),
    }
}

/// Cell of `grid` covering the fractional footprint position `(fx, fy)`.
fn lookup(grid: &Grid2, fx: f64, fy: f64) -> Option<f64> {
    if grid.is_empty() || !fx.is_finite() || !fy.is_finite() {
        return None;
    }
    let (gx, gy) = grid.shape();
    let ix = ((fx * gx as f64).floor().max(0.0) as usize).min(gx - 1);
    let iy = ((fy * gy as f64).floor().max(0.0) as usize).min(gy - 1);
    grid.get(ix, iy)
}
