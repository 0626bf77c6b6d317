//! SignatureExtractor: per-anomaly reduction of layer results.
//!
//! Sparse evidence never fails: absent layers and fields fall back to the
//! midpoint defaults documented on [`SpatialSignature`].

use strata_core::constants::MIDPOINT;
use strata_core::models::{AnomalyDescriptor, LayerResult, LayerResults, SpatialSignature};
use tracing::debug;

/// Layers needed for full coverage credit in the signature confidence.
const FULL_COVERAGE_LAYERS: f64 = 4.0;

/// Stateless signature extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureExtractor;

impl SignatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Reduce `layers` into a clamped [`SpatialSignature`].
    ///
    /// With no usable layer values the low-confidence default signature is
    /// returned, keeping whatever footprint geometry the descriptor carries.
    pub fn extract(&self, anomaly: &AnomalyDescriptor, layers: &LayerResults) -> SpatialSignature {
        let (area_m2, elongation_ratio) = footprint(anomaly);

        let contributing: Vec<String> = layers
            .iter()
            .filter(|(_, layer)| has_any_value(layer))
            .map(|(name, _)| name.clone())
            .collect();

        if contributing.is_empty() {
            debug!(
                anomaly_id = %anomaly.id,
                layer_count = layers.len(),
                "no usable layer values, using default signature"
            );
            return SpatialSignature {
                area_m2,
                elongation_ratio,
                anisotropy_factor: anisotropy(elongation_ratio),
                ..SpatialSignature::default()
            }
            .clamped();
        }

        let arch = unit_values(layers, |l| l.archaeological_probability);
        let geometric = mean_or(&unit_values(layers, |l| l.geometric_coherence), MIDPOINT);
        let natural = mean_or(&unit_values(layers, |l| l.natural_explanation_score), MIDPOINT);
        let persistence_values = unit_values(layers, |l| l.temporal_persistence);
        let persistence = mean_or(&persistence_values, MIDPOINT);

        let thermal = mean_or(
            &finite_values(layers, |l| l.thermal_amplitude_k.map(|v| v.max(0.0))),
            SpatialSignature::DEFAULT_THERMAL_AMPLITUDE,
        );
        let roughness = mean_or(&unit_values(layers, |l| l.sar_roughness), MIDPOINT);
        let slope = mean_or(
            &finite_values(layers, |l| l.residual_slope_deg.map(|v| v.clamp(0.0, 90.0))),
            SpatialSignature::DEFAULT_RESIDUAL_SLOPE,
        );
        let coherence_values = unit_values(layers, |l| l.coherence);
        let temporal_coherence = if coherence_values.is_empty() {
            persistence
        } else {
            mean_or(&coherence_values, MIDPOINT)
        };

        let coverage = 0.5 + 0.5 * (contributing.len() as f64 / FULL_COVERAGE_LAYERS).min(1.0);
        let signature_confidence = mean_or(&arch, MIDPOINT) * (1.0 - 0.5 * natural) * coverage;
        let sensor_convergence = if arch.len() < 2 {
            MIDPOINT
        } else {
            1.0 - 2.0 * std_dev(&arch)
        };

        let signature = SpatialSignature {
            area_m2,
            elongation_ratio,
            symmetry_index: geometric * (1.0 - 0.5 * natural),
            anisotropy_factor: anisotropy(elongation_ratio),
            thermal_amplitude: thermal,
            sar_roughness: roughness,
            temporal_coherence,
            residual_slope: slope,
            signature_confidence,
            sensor_convergence,
            temporal_persistence: persistence,
            contributing_layers: contributing,
        }
        .clamped();

        debug!(
            anomaly_id = %anomaly.id,
            layers = signature.contributing_layers.len(),
            confidence = signature.signature_confidence,
            convergence = signature.sensor_convergence,
            "signature extracted"
        );
        signature
    }
}

/// `(area_m2, elongation_ratio)` from the descriptor, most specific first.
fn footprint(anomaly: &AnomalyDescriptor) -> (f64, f64) {
    let positive = |v: Option<f64>| v.filter(|x| x.is_finite() && *x > 0.0);
    let sides = positive(anomaly.length_m).zip(positive(anomaly.width_m));

    let area = positive(anomaly.area_m2)
        .or_else(|| sides.map(|(l, w)| l * w))
        .or_else(|| {
            anomaly
                .bounds
                .filter(|b| b.validate().is_ok() && !b.is_degenerate())
                .map(|b| b.area_m2())
        })
        .unwrap_or(SpatialSignature::DEFAULT_AREA_M2);

    let elongation = sides
        .map(|(l, w)| l.max(w) / l.min(w))
        .unwrap_or(1.0);

    (area.max(1.0), elongation.max(1.0))
}

fn anisotropy(elongation: f64) -> f64 {
    1.0 - 1.0 / elongation.max(1.0)
}

fn has_any_value(layer: &LayerResult) -> bool {
    [
        layer.archaeological_probability,
        layer.geometric_coherence,
        layer.temporal_persistence,
        layer.natural_explanation_score,
        layer.thermal_amplitude_k,
        layer.sar_roughness,
        layer.residual_slope_deg,
        layer.coherence,
    ]
    .iter()
    .any(|v| v.is_some_and(f64::is_finite))
}

fn finite_values(layers: &LayerResults, field: impl Fn(&LayerResult) -> Option<f64>) -> Vec<f64> {
    layers
        .values()
        .filter_map(field)
        .filter(|v| v.is_finite())
        .collect()
}

fn unit_values(layers: &LayerResults, field: impl Fn(&LayerResult) -> Option<f64>) -> Vec<f64> {
    finite_values(layers, |l| field(l).map(|v| v.clamp(0.0, 1.0)))
}

fn mean_or(values: &[f64], fallback: f64) -> f64 {
    if values.is_empty() {
        fallback
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn std_dev(values: &[f64]) -> f64 {
    let mean = mean_or(values, 0.0);
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len().max(1) as f64;
    var.sqrt()
}
