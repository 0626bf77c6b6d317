use serde::{Deserialize, Serialize};

use super::defaults;

/// Volumetric field generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumetricConfig {
    /// Target voxel edge length in metres.
    pub voxel_resolution_m: f64,
    /// Upper bound on voxels along each horizontal axis.
    pub max_horizontal_voxels: usize,
    /// Upper bound on voxels along the height axis.
    pub max_vertical_voxels: usize,
    /// Lower bound on voxels along the height axis.
    pub min_vertical_voxels: usize,
    /// Height of the lattice as a fraction of sqrt(footprint area).
    pub height_factor: f64,
    /// Radius of the separable low-pass filter, in voxels.
    pub smoothing_radius: usize,
    /// Peak amplitude of the deterministic per-voxel texture.
    pub texture_amplitude: f64,
}

impl Default for VolumetricConfig {
    fn default() -> Self {
        Self {
            voxel_resolution_m: defaults::DEFAULT_VOXEL_RESOLUTION_M,
            max_horizontal_voxels: defaults::DEFAULT_MAX_HORIZONTAL_VOXELS,
            max_vertical_voxels: defaults::DEFAULT_MAX_VERTICAL_VOXELS,
            min_vertical_voxels: defaults::DEFAULT_MIN_VERTICAL_VOXELS,
            height_factor: defaults::DEFAULT_HEIGHT_FACTOR,
            smoothing_radius: defaults::DEFAULT_SMOOTHING_RADIUS,
            texture_amplitude: defaults::DEFAULT_TEXTURE_AMPLITUDE,
        }
    }
}
