//! Fusion pass: terrain analysis and spectral alignment share no data, so
//! they run on separate rayon workers and join at the fusion engine.

use strata_core::grid::Grid2;
use strata_core::models::{DirectVolumetricAnalysis, FusionResult, SpectralEvidence};
use strata_core::StrataResult;
use strata_observability::events;

use crate::pipeline::AnomalyPipeline;

impl AnomalyPipeline {
    /// Analyse `dtm`/`dsm` and fuse the result with `spectral`, resampling
    /// every spectral grid to the elevation grid's shape.
    pub fn run_fusion_pass(
        &self,
        dtm: &Grid2,
        dsm: &Grid2,
        cell_size_m: (f64, f64),
        spectral: &SpectralEvidence,
    ) -> StrataResult<FusionResult> {
        let target = dtm.shape();
        let span = strata_observability::fusion_span!(target);
        let _entered = span.enter();

        let (analysis, aligned) = rayon::join(
            || self.terrain.analyze(dtm, dsm, cell_size_m),
            || self.fusion.align(spectral, target),
        );
        let analysis = analysis?;
        let aligned = aligned?;
        for shape in aligned.shapes.iter().filter(|s| s.resampled) {
            events::evidence_resampled(&shape.channel, shape.original_shape, aligned.target_shape);
        }
        self.fusion.combine(&analysis.volumetric_evidence(), aligned)
    }

    /// Fuse an existing terrain analysis with spectral evidence.
    pub fn fuse(
        &self,
        analysis: &DirectVolumetricAnalysis,
        spectral: &SpectralEvidence,
    ) -> StrataResult<FusionResult> {
        self.fusion.fuse(analysis, spectral)
    }

    /// Terrain branch only.
    pub fn analyze_terrain(
        &self,
        dtm: &Grid2,
        dsm: &Grid2,
        cell_size_m: (f64, f64),
    ) -> StrataResult<DirectVolumetricAnalysis> {
        self.terrain.analyze(dtm, dsm, cell_size_m)
    }
}
