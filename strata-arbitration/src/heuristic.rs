//! Deterministic consistency evaluator.
//!
//! - spectral convergence = 1 − variance of per-layer archaeological probability
//! - geometric plausibility = mean per-layer geometric coherence
//! - temporal consistency = mean per-layer temporal persistence
//! - over-fitting risk = max(0, 0.5 − 0.1 · layers / (area / 1000))
//! - score = 0.3 convergence + 0.3 plausibility + 0.2 temporal + 0.2 (1 − risk)

use std::collections::BTreeMap;

use strata_core::constants::MIDPOINT;
use strata_core::errors::StrataResult;
use strata_core::models::{ConsistencyBand, ConsistencyReport, RecommendedAdjustments};
use strata_core::traits::{ArbitrationContext, IConsistencyEvaluator};

const WEIGHT_CONVERGENCE: f64 = 0.3;
const WEIGHT_PLAUSIBILITY: f64 = 0.3;
const WEIGHT_TEMPORAL: f64 = 0.2;
const WEIGHT_PARSIMONY: f64 = 0.2;

const OVERFITTING_BASE: f64 = 0.5;
const DENSITY_FACTOR: f64 = 0.1;
const AREA_UNIT_M2: f64 = 1000.0;

/// Over-fitting risk above which a warning is emitted.
const OVERFITTING_WARN: f64 = 0.3;
/// Convergence below which the layers are reported as disagreeing.
const CONVERGENCE_WARN: f64 = 0.9;

pub const EVALUATOR_NAME: &str = "deterministic-heuristic";

/// Always-available heuristic evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeterministicEvaluator;

impl DeterministicEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Infallible evaluation.
    pub fn report(&self, ctx: &ArbitrationContext<'_>) -> ConsistencyReport {
        let layers = ctx.layer_results;
        let n = layers.len();

        let arch: Vec<(&str, f64)> = layers
            .iter()
            .map(|(name, l)| (name.as_str(), or_mid(l.archaeological_probability)))
            .collect();
        let arch_values: Vec<f64> = arch.iter().map(|(_, v)| *v).collect();

        let spectral_convergence = if n == 0 {
            MIDPOINT
        } else {
            (1.0 - variance(&arch_values)).clamp(0.0, 1.0)
        };
        let geometric_plausibility =
            mean_or_mid(layers.values().map(|l| or_mid(l.geometric_coherence)));
        let temporal_consistency =
            mean_or_mid(layers.values().map(|l| or_mid(l.temporal_persistence)));

        let density = n as f64 / (ctx.area_m2() / AREA_UNIT_M2);
        let overfitting_risk = (OVERFITTING_BASE - density * DENSITY_FACTOR).clamp(0.0, 1.0);

        let consistency_score = (WEIGHT_CONVERGENCE * spectral_convergence
            + WEIGHT_PLAUSIBILITY * geometric_plausibility
            + WEIGHT_TEMPORAL * temporal_consistency
            + WEIGHT_PARSIMONY * (1.0 - overfitting_risk))
            .clamp(0.0, 1.0);
        let band = ConsistencyBand::from_score(consistency_score);

        let consensus = mean_or_mid(arch_values.iter().copied());
        let channel_agreement: BTreeMap<String, f64> = arch
            .iter()
            .map(|(name, v)| (name.to_string(), (1.0 - (v - consensus).abs()).clamp(0.0, 1.0)))
            .collect();

        let adjustments = RecommendedAdjustments {
            probability_boost: (1.0 + (consistency_score - 0.5)).clamp(
                RecommendedAdjustments::BOOST_MIN,
                RecommendedAdjustments::BOOST_MAX,
            ),
            uncertainty_increase: overfitting_risk,
        };

        let mut warnings = Vec::new();
        let mut recommendations = Vec::new();
        if n == 0 {
            warnings.push("no sensor layers available; scores are neutral defaults".to_string());
        }
        if overfitting_risk > OVERFITTING_WARN {
            warnings.push(format!(
                "sparse evidence for footprint ({n} layers over {:.0} m²): over-fitting risk {overfitting_risk:.2}",
                ctx.area_m2()
            ));
            recommendations.push("add independent sensor coverage before interpretation".to_string());
        }
        if n >= 2 && spectral_convergence < CONVERGENCE_WARN {
            warnings.push(format!(
                "sensor layers disagree on archaeological probability (convergence {spectral_convergence:.2})"
            ));
        }
        if let Some(layers) = ctx.field_layers {
            if layers.core > 0.0 && band == ConsistencyBand::LowConsistency {
                warnings.push(
                    "field carries a dense core despite low consistency; treat shape as speculative"
                        .to_string(),
                );
            }
        }
        match band {
            ConsistencyBand::HighConsistency => recommendations
                .push("proceed to ground-based geophysical validation".to_string()),
            ConsistencyBand::ModerateConsistency => recommendations
                .push("targeted validation of the core region only".to_string()),
            ConsistencyBand::LowConsistency => recommendations
                .push("do not interpret geometry; revisit source evidence".to_string()),
        }

        let reasoning = format!(
            "{n} layers for anomaly {}: convergence {spectral_convergence:.2}, plausibility \
             {geometric_plausibility:.2}, temporal {temporal_consistency:.2}, over-fitting \
             {overfitting_risk:.2} -> score {consistency_score:.2} ({}) for a {} shape family",
            ctx.anomaly_id,
            band.as_str(),
            ctx.morphological_class,
        );

        ConsistencyReport {
            evaluator: EVALUATOR_NAME.to_string(),
            consistency_score,
            spectral_convergence,
            geometric_plausibility,
            temporal_consistency,
            overfitting_risk,
            band,
            channel_agreement,
            adjustments,
            reasoning,
            warnings,
            recommendations,
        }
    }
}

impl IConsistencyEvaluator for DeterministicEvaluator {
    fn evaluate(&self, ctx: &ArbitrationContext<'_>) -> StrataResult<ConsistencyReport> {
        Ok(self.report(ctx))
    }

    fn name(&self) -> &str {
        EVALUATOR_NAME
    }

    fn is_available(&self) -> bool {
        true
    }
}

fn or_mid(v: Option<f64>) -> f64 {
    match v {
        Some(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => MIDPOINT,
    }
}

fn mean_or_mid(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        MIDPOINT
    } else {
        sum / count as f64
    }
}

fn variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::models::{LayerResult, LayerResults, MorphologicalClass, SpatialSignature};

    fn ctx<'a>(layers: &'a LayerResults, sig: &'a SpatialSignature) -> ArbitrationContext<'a> {
        ArbitrationContext {
            anomaly_id: "a-1",
            layer_results: layers,
            signature: sig,
            morphological_class: MorphologicalClass::TruncatedPyramidal,
            field_layers: None,
        }
    }

    #[test]
    fn no_layers_gives_neutral_report() {
        let layers = LayerResults::new();
        let sig = SpatialSignature::default();
        let r = DeterministicEvaluator::new().report(&ctx(&layers, &sig));
        assert_eq!(r.spectral_convergence, 0.5);
        assert_eq!(r.geometric_plausibility, 0.5);
        assert_eq!(r.overfitting_risk, 0.5);
        assert!(r.channel_agreement.is_empty());
        assert!(r.validate().is_ok());
    }

    #[test]
    fn single_layer_has_full_convergence() {
        let mut layers = LayerResults::new();
        layers.insert("only".into(), LayerResult::with_probabilities(0.3, 0.5, 0.5, 0.0));
        let sig = SpatialSignature::default();
        let r = DeterministicEvaluator::new().report(&ctx(&layers, &sig));
        assert_eq!(r.spectral_convergence, 1.0);
        assert!(!r.warnings.iter().any(|w| w.contains("disagree")));
        assert!(r.validate().is_ok());
    }

    #[test]
    fn disagreement_lowers_convergence() {
        let mut layers = LayerResults::new();
        layers.insert("a".into(), LayerResult::with_probabilities(0.1, 0.5, 0.5, 0.0));
        layers.insert("b".into(), LayerResult::with_probabilities(0.9, 0.5, 0.5, 0.0));
        let sig = SpatialSignature::default();
        let r = DeterministicEvaluator::new().report(&ctx(&layers, &sig));
        assert!((r.spectral_convergence - 0.84).abs() < 1e-12);
        assert!((r.channel_agreement["a"] - 0.6).abs() < 1e-12);
        assert!(r.warnings.iter().any(|w| w.contains("disagree")));
    }

    #[test]
    fn boost_tracks_score() {
        let mut layers = LayerResults::new();
        layers.insert("a".into(), LayerResult::with_probabilities(0.7, 0.9, 0.9, 0.0));
        layers.insert("b".into(), LayerResult::with_probabilities(0.7, 0.9, 0.9, 0.0));
        let sig = SpatialSignature::default();
        let r = DeterministicEvaluator::new().report(&ctx(&layers, &sig));
        assert!((r.adjustments.probability_boost - (r.consistency_score + 0.5)).abs() < 1e-12);
        assert_eq!(r.adjustments.uncertainty_increase, r.overfitting_risk);
    }
}
