//! Property-based tests for resampling and fusion.

use proptest::prelude::*;
use strata_core::config::{FusionConfig, Interpolation};
use strata_core::Grid2;
use strata_fusion::{resample, rules, ChannelGrids, EvidenceFusionEngine};

fn grid_strategy(nx: usize, ny: usize) -> impl Strategy<Value = Grid2> {
    prop::collection::vec(0.0f64..=1.0, nx * ny)
        .prop_map(move |data| Grid2::from_vec(nx, ny, data).unwrap())
}

fn channels_strategy() -> impl Strategy<Value = ChannelGrids> {
    (1usize..8, 1usize..8).prop_flat_map(|(nx, ny)| {
        (
            grid_strategy(nx, ny),
            grid_strategy(nx, ny),
            grid_strategy(nx, ny),
            grid_strategy(nx, ny),
        )
            .prop_map(|(v, t, s, d)| ChannelGrids::new(v, t, s, d).unwrap())
    })
}

// ── Fusion ranges ──

proptest! {
    #[test]
    fn prop_fused_grids_in_unit_interval(channels in channels_strategy()) {
        let r = EvidenceFusionEngine::default().fuse_channels(&channels, Vec::new());
        for g in [&r.probability, &r.confidence, &r.dominant_source] {
            prop_assert!(g.min() >= 0.0 && g.max() <= 1.0);
            prop_assert_eq!(g.shape(), channels.shape());
        }
    }

    #[test]
    fn prop_rules_idempotent(channels in channels_strategy()) {
        let config = FusionConfig::default();
        let baseline = channels.baseline(&config.weights);
        let (once, _) = rules::apply(&baseline, &channels, &config.weights, &config.rules);
        let (twice, _) = rules::apply(&once, &channels, &config.weights, &config.rules);
        prop_assert_eq!(once, twice);
    }
}

// ── Resampling ──

proptest! {
    #[test]
    fn prop_nearest_integer_round_trip_preserves_mean(
        grid in (1usize..8, 1usize..8).prop_flat_map(|(nx, ny)| grid_strategy(nx, ny)),
        factor in 1usize..4,
    ) {
        let (nx, ny) = grid.shape();
        let up = resample(&grid, (nx * factor, ny * factor), Interpolation::Nearest);
        let back = resample(&up, (nx, ny), Interpolation::Nearest);
        prop_assert!((back.mean() - grid.mean()).abs() < 1e-9);
    }

    #[test]
    fn prop_bilinear_round_trip_of_smooth_grid_preserves_mean(
        nx in 2usize..10,
        ny in 2usize..10,
        a in 0.0f64..0.5,
        b in 0.0f64..0.5,
        factor in 2usize..4,
    ) {
        // Linear ramps are reproduced exactly away from clamped edges.
        let grid = Grid2::from_fn(nx, ny, |x, y| {
            a * x as f64 / (nx - 1) as f64 + b * y as f64 / (ny - 1) as f64
        });
        let up = resample(&grid, (nx * factor, ny * factor), Interpolation::Bilinear);
        let back = resample(&up, (nx, ny), Interpolation::Bilinear);
        prop_assert!((back.mean() - grid.mean()).abs() < 0.05);
    }

    #[test]
    fn prop_resample_hits_target_shape(
        grid in (1usize..6, 1usize..6).prop_flat_map(|(nx, ny)| grid_strategy(nx, ny)),
        tx in 1usize..12,
        ty in 1usize..12,
    ) {
        for interp in [Interpolation::Nearest, Interpolation::Bilinear] {
            let r = resample(&grid, (tx, ty), interp);
            prop_assert_eq!(r.shape(), (tx, ty));
            prop_assert!(r.min() >= grid.min() - 1e-12 && r.max() <= grid.max() + 1e-12);
        }
    }
}
