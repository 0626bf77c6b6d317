use tracing::debug;

use strata_core::config::SurfaceConfig;
use strata_core::models::{ConfidenceZone, ConfidenceZones, GeometricModel, VolumetricField};

use crate::{nets, statistics};

/// Extracts a [`GeometricModel`] from a [`VolumetricField`].
#[derive(Debug, Clone, Default)]
pub struct SurfaceExtractor {
    config: SurfaceConfig,
}

impl SurfaceExtractor {
    pub fn new(config: SurfaceConfig) -> Self {
        Self { config }
    }

    /// Extract at the configured iso-probability threshold.
    pub fn extract(&self, field: &VolumetricField) -> GeometricModel {
        self.extract_at(field, self.config.confidence_threshold)
    }

    /// Extract at an explicit threshold. Returns the empty model when no
    /// voxel lies above it.
    pub fn extract_at(&self, field: &VolumetricField, threshold: f64) -> GeometricModel {
        let size = field.voxel_size_m();
        let mesh = nets::extract(field.material(), threshold, size);
        if mesh.vertices.is_empty() {
            debug!(threshold, "no material above threshold, empty model");
            return GeometricModel::empty(threshold);
        }

        let vertex_confidence: Vec<f64> = mesh
            .vertices
            .iter()
            .map(|p| {
                // Local metres back to fractional voxel indices.
                let u = field.uncertainty().sample(
                    p[0] / size[0] - 0.5,
                    p[1] / size[1] - 0.5,
                    p[2] / size[2] - 0.5,
                );
                (1.0 - u).clamp(0.0, 1.0)
            })
            .collect();

        let mut zones = ConfidenceZones::default();
        for (i, &c) in vertex_confidence.iter().enumerate() {
            match ConfidenceZone::from_confidence(c) {
                ConfidenceZone::High => zones.high.push(i),
                ConfidenceZone::Medium => zones.medium.push(i),
                ConfidenceZone::Low => zones.low.push(i),
            }
        }

        let stats = statistics::compute(&mesh.vertices, &mesh.faces);
        debug!(
            vertices = mesh.vertices.len(),
            faces = mesh.faces.len(),
            volume_m3 = stats.estimated_volume_m3,
            "surface extracted"
        );
        GeometricModel {
            vertices: mesh.vertices,
            faces: mesh.faces,
            vertex_confidence,
            confidence_zones: zones,
            statistics: stats,
            iso_threshold: threshold,
        }
    }
}
