use serde::{Deserialize, Serialize};

use super::anomaly::GeoPoint;
use super::morphology::MorphologicalClass;
use crate::constants::{
    CORE_THRESHOLD, DEGENERATE_UNCERTAINTY, METERS_PER_DEGREE, PERIPHERAL_THRESHOLD,
    PROBABLE_THRESHOLD,
};
use crate::errors::{GeometryError, StrataResult};
use crate::grid::Grid3;

/// How far the evidence allows the reconstruction to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceLevel {
    /// Zero-extent bounds; a single maximally uncertain voxel.
    Degenerate,
    /// Shape family unknown or evidence weak.
    Exploratory,
    /// Shape family compatible with the evidence.
    Morphological,
    /// Shape family with strong, convergent evidence.
    Constrained,
}

impl InferenceLevel {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Degenerate => "no usable extent: placeholder volume only",
            Self::Exploratory => "exploratory volume: generic decay profile",
            Self::Morphological => "coarse morphology compatible with a shape family",
            Self::Constrained => "coarse morphology constrained by convergent evidence",
        }
    }
}

/// Fractions of voxels above the 0.7 / 0.5 / 0.3 material thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfidenceLayers {
    pub core: f64,
    pub probable: f64,
    pub peripheral: f64,
}

impl ConfidenceLayers {
    pub fn from_grid(material: &Grid3) -> Self {
        Self {
            core: material.fraction_above(CORE_THRESHOLD),
            probable: material.fraction_above(PROBABLE_THRESHOLD),
            peripheral: material.fraction_above(PERIPHERAL_THRESHOLD),
        }
    }

    /// Non-increasing from peripheral to core.
    pub fn is_monotone(&self) -> bool {
        self.core <= self.probable && self.probable <= self.peripheral
    }
}

/// Dense 3D possibility space of one anomaly.
///
/// Three same-shaped grids over an `(nx, ny, nz)` lattice. Fields are only
/// ever transformed whole; there is no per-voxel setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumetricField {
    material: Grid3,
    void: Grid3,
    uncertainty: Grid3,
    origin: GeoPoint,
    /// Voxel edge lengths `(x, y, z)` in metres.
    voxel_size_m: [f64; 3],
    morphological_class: MorphologicalClass,
    inference_level: InferenceLevel,
    confidence_layers: ConfidenceLayers,
}

impl VolumetricField {
    /// Assemble a field. Grids must share one shape; values are clamped to
    /// [0, 1] and confidence layers are computed from the material grid.
    pub fn new(
        material: Grid3,
        void: Grid3,
        uncertainty: Grid3,
        origin: GeoPoint,
        voxel_size_m: [f64; 3],
        morphological_class: MorphologicalClass,
        inference_level: InferenceLevel,
    ) -> StrataResult<Self> {
        if material.is_empty() {
            return Err(GeometryError::EmptyGrid {
                context: "material probability".to_string(),
            }
            .into());
        }
        for (name, grid) in [("void", &void), ("uncertainty", &uncertainty)] {
            if grid.shape() != material.shape() {
                return Err(GeometryError::ShapeMismatch {
                    expected: format!("{:?}", material.shape()),
                    found: format!("{name} {:?}", grid.shape()),
                }
                .into());
            }
        }
        if voxel_size_m.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(GeometryError::InvalidVoxelSize {
                size: voxel_size_m.iter().copied().fold(f64::INFINITY, f64::min),
            }
            .into());
        }
        let material = material.map(clamp_unit);
        let confidence_layers = ConfidenceLayers::from_grid(&material);
        Ok(Self {
            material,
            void: void.map(clamp_unit),
            uncertainty: uncertainty.map(clamp_unit),
            origin,
            voxel_size_m,
            morphological_class,
            inference_level,
            confidence_layers,
        })
    }

    /// Single-voxel sentinel for zero-extent bounds: no material, maximum
    /// uncertainty.
    pub fn degenerate(origin: GeoPoint, morphological_class: MorphologicalClass) -> Self {
        let material = Grid3::filled(1, 1, 1, 0.0);
        Self {
            confidence_layers: ConfidenceLayers::from_grid(&material),
            material,
            void: Grid3::filled(1, 1, 1, 0.0),
            uncertainty: Grid3::filled(1, 1, 1, DEGENERATE_UNCERTAINTY),
            origin,
            voxel_size_m: [1.0, 1.0, 1.0],
            morphological_class,
            inference_level: InferenceLevel::Degenerate,
        }
    }

    pub fn material(&self) -> &Grid3 {
        &self.material
    }

    pub fn void(&self) -> &Grid3 {
        &self.void
    }

    pub fn uncertainty(&self) -> &Grid3 {
        &self.uncertainty
    }

    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    pub fn voxel_size_m(&self) -> [f64; 3] {
        self.voxel_size_m
    }

    pub fn voxel_volume_m3(&self) -> f64 {
        self.voxel_size_m.iter().product()
    }

    /// `(nx, ny, nz)`.
    pub fn dimensions(&self) -> (usize, usize, usize) {
        self.material.shape()
    }

    pub fn morphological_class(&self) -> MorphologicalClass {
        self.morphological_class
    }

    pub fn inference_level(&self) -> InferenceLevel {
        self.inference_level
    }

    pub fn confidence_layers(&self) -> ConfidenceLayers {
        self.confidence_layers
    }

    pub fn is_degenerate(&self) -> bool {
        self.inference_level == InferenceLevel::Degenerate
    }

    /// Geographic position of the centre of voxel column `(x, y)`.
    pub fn voxel_geo(&self, x: usize, y: usize) -> GeoPoint {
        let lat = self.origin.lat + (y as f64 + 0.5) * self.voxel_size_m[1] / METERS_PER_DEGREE;
        let lon_scale = METERS_PER_DEGREE * self.origin.lat.to_radians().cos().max(1e-6);
        let lon = self.origin.lon + (x as f64 + 0.5) * self.voxel_size_m[0] / lon_scale;
        GeoPoint { lat, lon }
    }

    /// Replace the material and uncertainty grids wholesale, keeping the
    /// lattice. Confidence layers are recomputed.
    pub fn with_grids(&self, material: Grid3, uncertainty: Grid3) -> StrataResult<Self> {
        Self::new(
            material,
            self.void.clone(),
            uncertainty,
            self.origin,
            self.voxel_size_m,
            self.morphological_class,
            self.inference_level,
        )
    }

    /// Globally rescale material probability by `boost` and raise
    /// uncertainty by `uncertainty_increase`, clipping both to [0, 1].
    pub fn rescaled(&self, boost: f64, uncertainty_increase: f64) -> Self {
        let material = self.material.map(|v| clamp_unit(v * boost));
        let uncertainty = self.uncertainty.map(|v| clamp_unit(v + uncertainty_increase));
        Self {
            confidence_layers: ConfidenceLayers::from_grid(&material),
            material,
            uncertainty,
            ..self.clone()
        }
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
