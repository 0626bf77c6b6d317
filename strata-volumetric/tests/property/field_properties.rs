//! Property-based tests for volumetric field generation.

use proptest::prelude::*;
use strata_core::config::VolumetricConfig;
use strata_core::models::*;
use strata_volumetric::VolumetricFieldGenerator;

fn class_strategy() -> impl Strategy<Value = MorphologicalClass> {
    (0..MorphologicalClass::ALL.len()).prop_map(|i| MorphologicalClass::ALL[i])
}

prop_compose! {
    fn signature_strategy()(
        area in 1.0f64..5_000.0,
        elongation in 1.0f64..6.0,
        confidence in 0.0f64..=1.0,
        convergence in 0.0f64..=1.0,
    ) -> SpatialSignature {
        SpatialSignature {
            area_m2: area,
            elongation_ratio: elongation,
            signature_confidence: confidence,
            sensor_convergence: convergence,
            ..Default::default()
        }
    }
}

prop_compose! {
    fn bounds_strategy()(
        lat in -60.0f64..60.0,
        lon in -170.0f64..170.0,
        dlat in 0.00005f64..0.001,
        dlon in 0.00005f64..0.001,
    ) -> GeoBounds {
        GeoBounds::new(lat, lat + dlat, lon, lon + dlon)
    }
}

// ── Range invariants ──

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_grids_in_unit_interval(
        sig in signature_strategy(),
        class in class_strategy(),
        bounds in bounds_strategy(),
    ) {
        let field = VolumetricFieldGenerator::new(VolumetricConfig::default())
            .generate(&sig, class, &bounds)
            .unwrap();
        for grid in [field.material(), field.void(), field.uncertainty()] {
            prop_assert!(grid.min() >= 0.0);
            prop_assert!(grid.max() <= 1.0);
        }
    }

    #[test]
    fn prop_confidence_layers_monotone(
        sig in signature_strategy(),
        class in class_strategy(),
        bounds in bounds_strategy(),
    ) {
        let field = VolumetricFieldGenerator::new(VolumetricConfig::default())
            .generate(&sig, class, &bounds)
            .unwrap();
        prop_assert!(field.confidence_layers().is_monotone());
    }

    #[test]
    fn prop_void_only_for_cavities(
        sig in signature_strategy(),
        class in class_strategy(),
        bounds in bounds_strategy(),
    ) {
        let field = VolumetricFieldGenerator::new(VolumetricConfig::default())
            .generate(&sig, class, &bounds)
            .unwrap();
        if !class.has_void() {
            prop_assert_eq!(field.void().max(), 0.0);
        }
    }
}

// ── Determinism ──

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_generation_deterministic(
        sig in signature_strategy(),
        class in class_strategy(),
        bounds in bounds_strategy(),
    ) {
        let g = VolumetricFieldGenerator::new(VolumetricConfig::default());
        let a = g.generate(&sig, class, &bounds).unwrap();
        let b = g.generate(&sig, class, &bounds).unwrap();
        prop_assert_eq!(a, b);
    }
}
