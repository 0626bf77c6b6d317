//! Property-based tests for surface extraction.

use proptest::prelude::*;
use strata_core::models::*;
use strata_core::Grid3;
use strata_surface::SurfaceExtractor;

prop_compose! {
    fn field_strategy()(
        nx in 1usize..7,
        ny in 1usize..7,
        nz in 1usize..5,
    )(
        values in prop::collection::vec(0.0f64..=1.0, nx * ny * nz),
        uncertainty in 0.0f64..=1.0,
        nx in Just(nx),
        ny in Just(ny),
        nz in Just(nz),
    ) -> VolumetricField {
        let mut it = values.into_iter();
        let material = Grid3::from_fn(nx, ny, nz, |_, _, _| it.next().unwrap_or(0.0));
        VolumetricField::new(
            material,
            Grid3::filled(nx, ny, nz, 0.0),
            Grid3::filled(nx, ny, nz, uncertainty),
            GeoPoint { lat: 0.0, lon: 0.0 },
            [1.5, 1.5, 0.75],
            MorphologicalClass::UndefinedVolume,
            InferenceLevel::Exploratory,
        )
        .unwrap()
    }
}

// ── Mesh structure ──

proptest! {
    #[test]
    fn prop_face_indices_valid(field in field_strategy(), threshold in 0.05f64..0.95) {
        let model = SurfaceExtractor::default().extract_at(&field, threshold);
        for face in &model.faces {
            for &i in face {
                prop_assert!(i < model.vertex_count());
            }
        }
    }

    #[test]
    fn prop_empty_iff_nothing_above_threshold(
        field in field_strategy(),
        threshold in 0.05f64..0.95,
    ) {
        let model = SurfaceExtractor::default().extract_at(&field, threshold);
        let any_above = field.material().values().iter().any(|&v| v > threshold);
        prop_assert_eq!(!model.is_empty(), any_above);
    }

    #[test]
    fn prop_zones_partition_vertices(field in field_strategy(), threshold in 0.05f64..0.95) {
        let model = SurfaceExtractor::default().extract_at(&field, threshold);
        let z = &model.confidence_zones;
        prop_assert_eq!(z.high.len() + z.medium.len() + z.low.len(), model.vertex_count());
        prop_assert!(model.vertex_confidence.iter().all(|c| (0.0..=1.0).contains(c)));
    }

    #[test]
    fn prop_statistics_non_negative(field in field_strategy(), threshold in 0.05f64..0.95) {
        let s = SurfaceExtractor::default().extract_at(&field, threshold).statistics;
        prop_assert!(s.estimated_volume_m3 >= 0.0);
        prop_assert!(s.surface_area_m2 >= 0.0);
        prop_assert!(s.footprint_area_m2 >= 0.0);
        prop_assert!(s.max_height_m >= 0.0);
    }
}
