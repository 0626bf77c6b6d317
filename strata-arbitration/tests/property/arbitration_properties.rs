//! Property-based tests for the deterministic evaluator.

use proptest::prelude::*;
use strata_arbitration::DeterministicEvaluator;
use strata_core::models::*;
use strata_core::traits::ArbitrationContext;

fn layer_strategy() -> impl Strategy<Value = LayerResult> {
    (
        prop::option::of(0.0f64..=1.0),
        prop::option::of(0.0f64..=1.0),
        prop::option::of(0.0f64..=1.0),
        prop::option::of(0.0f64..=1.0),
    )
        .prop_map(|(a, g, t, n)| LayerResult {
            archaeological_probability: a,
            geometric_coherence: g,
            temporal_persistence: t,
            natural_explanation_score: n,
            ..Default::default()
        })
}

fn layers_strategy() -> impl Strategy<Value = LayerResults> {
    prop::collection::btree_map("[a-z]{3,8}", layer_strategy(), 0..8)
}

// ── Report contract ──

proptest! {
    #[test]
    fn prop_report_always_validates(layers in layers_strategy(), area in 1.0f64..100_000.0) {
        let sig = SpatialSignature { area_m2: area, ..Default::default() };
        let ctx = ArbitrationContext {
            anomaly_id: "p",
            layer_results: &layers,
            signature: &sig,
            morphological_class: MorphologicalClass::UndefinedVolume,
            field_layers: None,
        };
        let r = DeterministicEvaluator::new().report(&ctx);
        prop_assert!(r.validate().is_ok());
        prop_assert_eq!(r.band, ConsistencyBand::from_score(r.consistency_score));
        prop_assert_eq!(r.channel_agreement.len(), layers.len());
    }

    #[test]
    fn prop_report_deterministic(layers in layers_strategy()) {
        let sig = SpatialSignature::default();
        let ctx = ArbitrationContext {
            anomaly_id: "p",
            layer_results: &layers,
            signature: &sig,
            morphological_class: MorphologicalClass::CavityVoid,
            field_layers: None,
        };
        let e = DeterministicEvaluator::new();
        prop_assert_eq!(e.report(&ctx), e.report(&ctx));
    }
}
