use tracing::{debug, warn};

use strata_core::config::VolumetricConfig;
use strata_core::errors::StrataResult;
use strata_core::models::{
    GeoBounds, InferenceLevel, MorphologicalClass, SpatialSignature, VolumetricField,
};
use strata_core::noise::centred_noise;
use strata_core::Grid3;

use crate::lattice::Lattice;
use crate::profiles::{self, ProfilePoint};
use crate::smoothing;

/// Signature confidence below which a field is only exploratory.
const EXPLORATORY_CONFIDENCE_MAX: f64 = 0.4;
/// Confidence and convergence required for a constrained field.
const CONSTRAINED_CONFIDENCE_MIN: f64 = 0.75;
const CONSTRAINED_CONVERGENCE_MIN: f64 = 0.7;

/// Builds a [`VolumetricField`] from a signature, a class, and bounds.
///
/// Pure and deterministic: the only "noise" is a hash of voxel coordinates.
#[derive(Debug, Clone, Default)]
pub struct VolumetricFieldGenerator {
    config: VolumetricConfig,
}

impl VolumetricFieldGenerator {
    pub fn new(config: VolumetricConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VolumetricConfig {
        &self.config
    }

    /// Generate the field for one anomaly.
    ///
    /// Zero-extent bounds yield the single-voxel degenerate field. Bounds
    /// that are inverted, non-finite, or off the globe are errors.
    pub fn generate(
        &self,
        signature: &SpatialSignature,
        class: MorphologicalClass,
        bounds: &GeoBounds,
    ) -> StrataResult<VolumetricField> {
        let signature = signature.clone().clamped();
        let Some(lattice) = Lattice::plan(bounds, &signature, &self.config)? else {
            warn!(
                class = %class,
                lat_min = bounds.lat_min,
                lat_max = bounds.lat_max,
                lon_min = bounds.lon_min,
                lon_max = bounds.lon_max,
                "zero-extent bounds, emitting degenerate field"
            );
            return Ok(VolumetricField::degenerate(bounds.origin(), class));
        };

        let confidence_scale = confidence_scale(signature.signature_confidence);
        let amplitude = self.config.texture_amplitude.max(0.0);
        let salt = class.ordinal() << 16;

        let raw = Grid3::from_fn(lattice.nx, lattice.ny, lattice.nz, |x, y, z| {
            let p = point(&lattice, x, y, z);
            let base = profiles::material(class, p) * confidence_scale;
            let geo = lattice.voxel_geo(x, y);
            let texture = 2.0 * amplitude * centred_noise(geo.lat, geo.lon, salt | z as u64);
            (base + texture).clamp(0.0, 1.0)
        });
        let material = smoothing::smooth(&raw, self.config.smoothing_radius);

        let void = Grid3::from_fn(lattice.nx, lattice.ny, lattice.nz, |x, y, z| {
            profiles::void(class, point(&lattice, x, y, z)) * confidence_scale
        });
        let uncertainty = Grid3::from_fn(lattice.nx, lattice.ny, lattice.nz, |x, y, z| {
            voxel_uncertainty(point(&lattice, x, y, z), &signature)
        });

        let level = inference_level(class, &signature);
        let field = VolumetricField::new(
            material,
            void,
            uncertainty,
            lattice.origin,
            lattice.voxel_size_m,
            class,
            level,
        )?;

        let layers = field.confidence_layers();
        debug!(
            class = %class,
            nx = lattice.nx,
            ny = lattice.ny,
            nz = lattice.nz,
            level = ?level,
            core = layers.core,
            probable = layers.probable,
            peripheral = layers.peripheral,
            "volumetric field generated"
        );
        Ok(field)
    }
}

fn point(lattice: &Lattice, x: usize, y: usize, z: usize) -> ProfilePoint {
    let (u, v, w) = lattice.normalised(x, y, z);
    ProfilePoint::new(u, v, w)
}

/// Multiplier on profile probabilities. A default-confidence signature
/// keeps the profile peak above the core threshold; confidence decides the
/// inference level, not whether a core exists.
pub fn confidence_scale(signature_confidence: f64) -> f64 {
    0.8 + 0.2 * signature_confidence.clamp(0.0, 1.0)
}

/// Uncertainty rises with horizontal and vertical distance from the
/// inferred centre (mid-height of the lattice), and falls with sensor
/// convergence.
pub fn voxel_uncertainty(p: ProfilePoint, signature: &SpatialSignature) -> f64 {
    let horizontal = (p.u.hypot(p.v) / 2.0).min(1.0);
    let vertical = (2.0 * (p.w - 0.5).abs()).min(1.0);
    let base = 0.15
        + 0.3 * horizontal
        + 0.2 * vertical
        + 0.2 * (1.0 - signature.signature_confidence);
    let convergence_factor = 1.2 - 0.5 * signature.sensor_convergence;
    (base * convergence_factor).clamp(0.0, 1.0)
}

/// Inference level supported by the signature for `class`.
pub fn inference_level(class: MorphologicalClass, signature: &SpatialSignature) -> InferenceLevel {
    if class == MorphologicalClass::UndefinedVolume
        || signature.signature_confidence < EXPLORATORY_CONFIDENCE_MAX
    {
        InferenceLevel::Exploratory
    } else if signature.signature_confidence >= CONSTRAINED_CONFIDENCE_MIN
        && signature.sensor_convergence >= CONSTRAINED_CONVERGENCE_MIN
    {
        InferenceLevel::Constrained
    } else {
        InferenceLevel::Morphological
    }
}
