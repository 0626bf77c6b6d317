use strata_core::config::Interpolation;
use strata_core::grid::Grid2;
use strata_core::models::SpectralEvidence;
use strata_core::StrataConfig;
use strata_fusion::resample;
use strata_pipeline::AnomalyPipeline;

const N: usize = 8;

fn pipeline() -> AnomalyPipeline {
    AnomalyPipeline::new(StrataConfig::default()).unwrap()
}

fn terrain() -> (Grid2, Grid2) {
    let dtm = Grid2::from_fn(N, N, |x, y| ((x * 7 + y * 3) % 5) as f64 * 0.2);
    let dsm = Grid2::from_fn(N, N, |x, y| {
        let raised = (2..6).contains(&x) && (2..6).contains(&y);
        dtm.get(x, y).unwrap_or(0.0) + if raised { 1.5 } else { 0.0 }
    });
    (dtm, dsm)
}

fn spectral(temporal: f64) -> SpectralEvidence {
    SpectralEvidence {
        temporal_persistence: Grid2::filled(3, 3, temporal),
        spatial_coherence: Grid2::filled(N, N, 0.6),
        spectral_differential: Grid2::filled(4, 4, 0.5),
    }
}

#[test]
fn low_persistence_attenuates_every_cell() {
    let (dtm, dsm) = terrain();
    let result = pipeline()
        .run_fusion_pass(&dtm, &dsm, (1.0, 1.0), &spectral(0.2))
        .unwrap();

    assert_eq!(result.shape(), (N, N));
    assert_eq!(result.metadata.rule_counts.low_persistence, N * N);
    assert!(result.probability.values().iter().all(|&p| (0.0..=0.3 + 1e-9).contains(&p)));
}

#[test]
fn mismatched_spectral_grids_are_resampled_and_recorded() {
    let (dtm, dsm) = terrain();
    let result = pipeline()
        .run_fusion_pass(&dtm, &dsm, (1.0, 1.0), &spectral(0.8))
        .unwrap();

    let resampled: Vec<(&str, bool)> = result
        .metadata
        .channels
        .iter()
        .map(|c| (c.channel.as_str(), c.resampled))
        .collect();
    assert_eq!(
        resampled,
        [
            ("temporal_persistence", true),
            ("spatial_coherence", false),
            ("spectral_differential", true),
        ]
    );
    assert_eq!(result.metadata.target_shape, (N, N));
    assert!(result.contributions.temporal.values().iter().all(|v| v.is_finite()));
}

#[test]
fn concurrent_pass_matches_sequential_fuse() {
    let (dtm, dsm) = terrain();
    let pipeline = pipeline();
    let evidence = spectral(0.7);

    let concurrent = pipeline.run_fusion_pass(&dtm, &dsm, (2.0, 2.0), &evidence).unwrap();
    let analysis = pipeline.analyze_terrain(&dtm, &dsm, (2.0, 2.0)).unwrap();
    let sequential = pipeline.fuse(&analysis, &evidence).unwrap();
    assert_eq!(concurrent, sequential);
    assert!(analysis.positive_volume_m3 > 0.0);
}

#[test]
fn terrain_errors_propagate() {
    let (dtm, _) = terrain();
    let small = Grid2::filled(4, 4, 1.0);
    let pipeline = pipeline();
    assert!(pipeline.run_fusion_pass(&dtm, &small, (1.0, 1.0), &spectral(0.5)).is_err());
    assert!(pipeline.run_fusion_pass(&dtm, &dtm, (0.0, 1.0), &spectral(0.5)).is_err());
}

#[test]
fn empty_spectral_channel_is_an_error() {
    let (dtm, dsm) = terrain();
    let mut evidence = spectral(0.5);
    evidence.spectral_differential = Grid2::filled(0, 0, 0.0);
    assert!(pipeline().run_fusion_pass(&dtm, &dsm, (1.0, 1.0), &evidence).is_err());
}

#[test]
fn resample_round_trip_preserves_mean() {
    let grid = Grid2::from_fn(4, 4, |x, y| (x + 2 * y) as f64 / 10.0);
    let up = resample(&grid, (N, N), Interpolation::Nearest);
    let back = resample(&up, (4, 4), Interpolation::Nearest);
    assert!((back.mean() - grid.mean()).abs() < 1e-9);
}
