use proptest::prelude::*;
use strata_core::grid::{Grid2, Grid3};
use strata_core::noise::hash_noise;

proptest! {
    #[test]
    fn grid3_sample_stays_within_value_range(
        nx in 1usize..6,
        ny in 1usize..6,
        nz in 1usize..6,
        sx in -2.0f64..8.0,
        sy in -2.0f64..8.0,
        sz in -2.0f64..8.0,
    ) {
        let g = Grid3::from_fn(nx, ny, nz, |x, y, z| hash_noise(x as f64, y as f64, z as u64));
        let v = g.sample(sx, sy, sz);
        prop_assert!(v >= g.min() - 1e-12 && v <= g.max() + 1e-12);
    }

    #[test]
    fn grid2_zip_map_preserves_shape(nx in 1usize..10, ny in 1usize..10) {
        let a = Grid2::filled(nx, ny, 0.25);
        let b = Grid2::filled(nx, ny, 0.5);
        let c = a.zip_map(&b, |x, y| x + y).unwrap();
        prop_assert_eq!(c.shape(), (nx, ny));
        prop_assert!((c.mean() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn noise_is_deterministic_and_bounded(lat in -90.0f64..90.0, lon in -180.0f64..180.0, salt in 0u64..1000) {
        let a = hash_noise(lat, lon, salt);
        let b = hash_noise(lat, lon, salt);
        prop_assert_eq!(a.to_bits(), b.to_bits());
        prop_assert!((0.0..1.0).contains(&a));
    }
}
