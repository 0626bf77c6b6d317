use strata_core::models::*;

#[test]
fn bounds_validate_rejects_inverted_and_non_finite() {
    assert!(GeoBounds::new(10.0, 9.0, 0.0, 1.0).validate().is_err());
    assert!(GeoBounds::new(f64::NAN, 9.0, 0.0, 1.0).validate().is_err());
    assert!(GeoBounds::new(0.0, 95.0, 0.0, 1.0).validate().is_err());
    assert!(GeoBounds::new(10.0, 10.001, 20.0, 20.001).validate().is_ok());
}

#[test]
fn equal_bounds_are_degenerate_but_valid() {
    let b = GeoBounds::new(30.0, 30.0, 31.0, 31.001);
    assert!(b.validate().is_ok());
    assert!(b.is_degenerate());
    assert_eq!(b.area_m2(), 0.0);
}

#[test]
fn extent_shrinks_longitude_with_latitude() {
    let equator = GeoBounds::new(-0.0005, 0.0005, 0.0, 0.001);
    let north = GeoBounds::new(59.9995, 60.0005, 0.0, 0.001);
    let (ew_eq, ns_eq) = equator.extent_m();
    let (ew_n, ns_n) = north.extent_m();
    assert!((ns_eq - ns_n).abs() < 1e-6);
    assert!((ew_n / ew_eq - 0.5).abs() < 1e-3);
}

#[test]
fn morphological_class_serializes_kebab_case() {
    let json = serde_json::to_string(&MorphologicalClass::CavityVoid).unwrap();
    assert_eq!(json, "\"cavity-void\"");
    for class in MorphologicalClass::ALL {
        let s = serde_json::to_string(&class).unwrap();
        assert_eq!(s, format!("\"{}\"", class.as_str()));
    }
}

#[test]
fn only_cavity_has_void() {
    let with_void: Vec<_> = MorphologicalClass::ALL
        .iter()
        .filter(|c| c.has_void())
        .collect();
    assert_eq!(with_void, vec![&MorphologicalClass::CavityVoid]);
}

#[test]
fn default_signature_is_low_confidence() {
    let s = SpatialSignature::default();
    assert_eq!(s.signature_confidence, 0.3);
    assert!(s.area_m2 >= 1.0);
    assert!(s.elongation_ratio >= 1.0);
}

#[test]
fn clamped_signature_repairs_ranges() {
    let s = SpatialSignature {
        area_m2: 0.2,
        elongation_ratio: 0.5,
        symmetry_index: 1.8,
        sar_roughness: f64::NAN,
        residual_slope: 120.0,
        ..SpatialSignature::default()
    }
    .clamped();
    assert_eq!(s.area_m2, 1.0);
    assert_eq!(s.elongation_ratio, 1.0);
    assert_eq!(s.symmetry_index, 1.0);
    assert_eq!(s.sar_roughness, 0.5);
    assert_eq!(s.residual_slope, 90.0);
}

#[test]
fn layer_result_deserializes_with_missing_fields() {
    let layer: LayerResult =
        serde_json::from_str(r#"{"archaeological_probability": 0.7}"#).unwrap();
    assert_eq!(layer.archaeological_probability, Some(0.7));
    assert_eq!(layer.geometric_coherence, None);
}

#[test]
fn consistency_report_validate_rejects_out_of_range_boost() {
    let report = ConsistencyReport {
        evaluator: "test".into(),
        consistency_score: 0.6,
        spectral_convergence: 0.9,
        geometric_plausibility: 0.5,
        temporal_consistency: 0.5,
        overfitting_risk: 0.0,
        band: ConsistencyBand::ModerateConsistency,
        channel_agreement: Default::default(),
        adjustments: RecommendedAdjustments {
            probability_boost: 2.0,
            uncertainty_increase: 0.0,
        },
        reasoning: String::new(),
        warnings: vec![],
        recommendations: vec![],
    };
    assert!(report.validate().is_err());
}
