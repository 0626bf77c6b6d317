use proptest::prelude::*;
use strata_core::models::{AnomalyDescriptor, GeoBounds, LayerResult, LayerResults};
use strata_core::StrataConfig;
use strata_pipeline::AnomalyPipeline;

fn layers_strategy() -> impl Strategy<Value = LayerResults> {
    prop::collection::vec((0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64), 0..6).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (a, g, t, n))| {
                    (format!("layer_{i}"), LayerResult::with_probabilities(a, g, t, n))
                })
                .collect()
        },
    )
}

fn anomaly(area: f64) -> AnomalyDescriptor {
    AnomalyDescriptor {
        id: "prop".to_string(),
        area_m2: Some(area),
        ..AnomalyDescriptor::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn well_typed_input_always_succeeds(
        layers in layers_strategy(),
        area in 20.0..3_000.0f64,
        span in 0.0..0.0004f64,
    ) {
        let pipeline = AnomalyPipeline::new(StrataConfig::default()).unwrap();
        let bounds = GeoBounds::new(40.0, 40.0 + span, 14.0, 14.0 + span);
        let outcome = pipeline.process_anomaly(&anomaly(area), &layers, &bounds);
        prop_assert!(outcome.success);

        let field = outcome.arbitrated_field.unwrap();
        prop_assert!(field.material().values().iter().all(|v| (0.0..=1.0).contains(v)));
        prop_assert!(field.uncertainty().values().iter().all(|v| (0.0..=1.0).contains(v)));

        let report = outcome.metadata_report.unwrap();
        let c = report.confidence_layers;
        prop_assert!(c.core_pct <= c.probable_pct && c.probable_pct <= c.peripheral_pct);
        prop_assert!(report.consistency.consistency_score >= 0.0);
        prop_assert!(report.consistency.consistency_score <= 1.0);
    }

    #[test]
    fn processing_is_deterministic(layers in layers_strategy(), area in 50.0..1_500.0f64) {
        let pipeline = AnomalyPipeline::new(StrataConfig::default()).unwrap();
        let bounds = GeoBounds::new(-3.0, -2.9998, 100.0, 100.0002);
        let a = pipeline.process_anomaly(&anomaly(area), &layers, &bounds);
        let b = pipeline.process_anomaly(&anomaly(area), &layers, &bounds);
        prop_assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }
}
