use proptest::prelude::*;
use strata_core::models::{MorphologicalClass, SpatialSignature};
use strata_signature::MorphologyClassifier;

fn arb_signature() -> impl Strategy<Value = SpatialSignature> {
    (
        (1.0f64..100_000.0, 1.0f64..20.0, 0.0f64..=1.0, 0.0f64..=1.0),
        (0.0f64..30.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=90.0),
        (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0),
    )
        .prop_map(|((area, elong, sym, aniso), (thermal, sar, coh, slope), (conf, conv, pers))| {
            SpatialSignature {
                area_m2: area,
                elongation_ratio: elong,
                symmetry_index: sym,
                anisotropy_factor: aniso,
                thermal_amplitude: thermal,
                sar_roughness: sar,
                temporal_coherence: coh,
                residual_slope: slope,
                signature_confidence: conf,
                sensor_convergence: conv,
                temporal_persistence: pers,
                contributing_layers: vec![],
            }
        })
}

proptest! {
    #[test]
    fn classifier_is_total(sig in arb_signature()) {
        let class = MorphologyClassifier::new().classify(&sig);
        prop_assert!(MorphologicalClass::ALL.contains(&class));
    }

    #[test]
    fn classifier_is_deterministic(sig in arb_signature()) {
        let c = MorphologyClassifier::new();
        prop_assert_eq!(c.classify_with_trace(&sig), c.classify_with_trace(&sig));
    }
}
