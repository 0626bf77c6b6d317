use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SIGNATURE_CONFIDENCE, MIDPOINT};

/// Fixed-dimension feature vector summarising one anomaly's multi-sensor
/// evidence. Created once per anomaly and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialSignature {
    /// Footprint area, m². Always >= 1.0.
    pub area_m2: f64,
    /// Long side over short side. Always >= 1.0.
    pub elongation_ratio: f64,
    /// 0.0 (irregular) to 1.0 (perfectly symmetric).
    pub symmetry_index: f64,
    /// 0.0 (isotropic) to 1.0 (strongly directional).
    pub anisotropy_factor: f64,
    /// Diurnal thermal amplitude, kelvin. Always >= 0.0.
    pub thermal_amplitude: f64,
    /// Normalised SAR roughness in [0, 1].
    pub sar_roughness: f64,
    /// Multi-temporal coherence in [0, 1].
    pub temporal_coherence: f64,
    /// Residual slope, degrees in [0, 90].
    pub residual_slope: f64,
    pub signature_confidence: f64,
    pub sensor_convergence: f64,
    pub temporal_persistence: f64,
    /// Layers that contributed at least one value.
    #[serde(default)]
    pub contributing_layers: Vec<String>,
}

impl SpatialSignature {
    /// Default thermal amplitude when no layer reports one.
    pub const DEFAULT_THERMAL_AMPLITUDE: f64 = 5.0;
    /// Default residual slope when no layer reports one.
    pub const DEFAULT_RESIDUAL_SLOPE: f64 = 5.0;
    /// Default footprint when nothing describes one.
    pub const DEFAULT_AREA_M2: f64 = 100.0;

    /// Clamp every scalar into its valid range. Non-finite values are
    /// replaced by the low-confidence defaults.
    pub fn clamped(self) -> Self {
        let d = Self::default();
        let fin = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        Self {
            area_m2: fin(self.area_m2, d.area_m2).max(1.0),
            elongation_ratio: fin(self.elongation_ratio, d.elongation_ratio).max(1.0),
            symmetry_index: fin(self.symmetry_index, d.symmetry_index).clamp(0.0, 1.0),
            anisotropy_factor: fin(self.anisotropy_factor, d.anisotropy_factor).clamp(0.0, 1.0),
            thermal_amplitude: fin(self.thermal_amplitude, d.thermal_amplitude).max(0.0),
            sar_roughness: fin(self.sar_roughness, d.sar_roughness).clamp(0.0, 1.0),
            temporal_coherence: fin(self.temporal_coherence, d.temporal_coherence).clamp(0.0, 1.0),
            residual_slope: fin(self.residual_slope, d.residual_slope).clamp(0.0, 90.0),
            signature_confidence: fin(self.signature_confidence, d.signature_confidence)
                .clamp(0.0, 1.0),
            sensor_convergence: fin(self.sensor_convergence, d.sensor_convergence).clamp(0.0, 1.0),
            temporal_persistence: fin(self.temporal_persistence, d.temporal_persistence)
                .clamp(0.0, 1.0),
            contributing_layers: self.contributing_layers,
        }
    }

    /// Side length of a square with the same footprint, metres.
    pub fn footprint_side_m(&self) -> f64 {
        self.area_m2.max(1.0).sqrt()
    }
}

/// The documented low-confidence default signature.
impl Default for SpatialSignature {
    fn default() -> Self {
        Self {
            area_m2: Self::DEFAULT_AREA_M2,
            elongation_ratio: 1.0,
            symmetry_index: MIDPOINT,
            anisotropy_factor: 0.0,
            thermal_amplitude: Self::DEFAULT_THERMAL_AMPLITUDE,
            sar_roughness: MIDPOINT,
            temporal_coherence: MIDPOINT,
            residual_slope: Self::DEFAULT_RESIDUAL_SLOPE,
            signature_confidence: DEFAULT_SIGNATURE_CONFIDENCE,
            sensor_convergence: MIDPOINT,
            temporal_persistence: MIDPOINT,
            contributing_layers: Vec::new(),
        }
    }
}
