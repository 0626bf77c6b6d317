//! AnomalyPipeline: owns one instance of every stage, built from a single
//! validated [`StrataConfig`].

use rayon::prelude::*;
use strata_arbitration::{Arbitration, ConsistencyArbitrator};
use strata_core::models::{AnomalyDescriptor, Disclaimer, GeoBounds, LayerResults};
use strata_core::traits::ArbitrationContext;
use strata_core::{StrataConfig, StrataResult};
use strata_fusion::EvidenceFusionEngine;
use strata_observability::events;
use strata_signature::{MorphologyClassifier, SignatureExtractor};
use strata_surface::SurfaceExtractor;
use strata_terrain::DirectVolumetricAnalyzer;
use strata_volumetric::VolumetricFieldGenerator;
use tracing::debug;

use crate::input::AnomalyInput;
use crate::outcome::PipelineOutcome;
use crate::report::MetadataReport;

pub struct AnomalyPipeline {
    config: StrataConfig,
    extractor: SignatureExtractor,
    classifier: MorphologyClassifier,
    generator: VolumetricFieldGenerator,
    surface: SurfaceExtractor,
    arbitrator: ConsistencyArbitrator,
    pub(crate) terrain: DirectVolumetricAnalyzer,
    pub(crate) fusion: EvidenceFusionEngine,
}

impl AnomalyPipeline {
    /// Validate `config` and build every stage from it. An invalid config
    /// is the only construction failure.
    pub fn new(config: StrataConfig) -> StrataResult<Self> {
        config.validate()?;
        let arbitrator = ConsistencyArbitrator::from_config(&config.arbitration);
        Ok(Self {
            extractor: SignatureExtractor::new(),
            classifier: MorphologyClassifier::new(),
            generator: VolumetricFieldGenerator::new(config.volumetric.clone()),
            surface: SurfaceExtractor::new(config.surface.clone()),
            terrain: DirectVolumetricAnalyzer::new(),
            fusion: EvidenceFusionEngine::new(config.fusion.clone()),
            arbitrator,
            config,
        })
    }

    /// Replace the arbitrator, e.g. to plug in a custom primary evaluator.
    pub fn with_arbitrator(mut self, arbitrator: ConsistencyArbitrator) -> Self {
        self.arbitrator = arbitrator;
        self
    }

    pub fn config(&self) -> &StrataConfig {
        &self.config
    }

    pub fn arbitrator(&self) -> &ConsistencyArbitrator {
        &self.arbitrator
    }

    /// Run one anomaly end to end.
    ///
    /// Sparse layers and degenerate geometry are absorbed into low-confidence
    /// results. Only unusable bounds (inverted, non-finite, off the globe)
    /// yield `success == false`.
    pub fn process_anomaly(
        &self,
        anomaly: &AnomalyDescriptor,
        layer_results: &LayerResults,
        bounds: &GeoBounds,
    ) -> PipelineOutcome {
        let span = strata_observability::anomaly_span!(anomaly.id);
        let _entered = span.enter();

        match self.run(anomaly, layer_results, bounds) {
            Ok(outcome) => outcome,
            Err(e) => {
                let error = e.to_string();
                events::pipeline_failed(&anomaly.id, &error);
                PipelineOutcome::failed(&anomaly.id, error)
            }
        }
    }

    /// Process every input in parallel. Output order equals input order.
    pub fn process_batch(&self, inputs: &[AnomalyInput]) -> Vec<PipelineOutcome> {
        let span = strata_observability::batch_span!(inputs.len());
        let _entered = span.enter();

        inputs
            .par_iter()
            .map(|input| self.process_anomaly(&input.anomaly, &input.layer_results, &input.bounds))
            .collect()
    }

    fn run(
        &self,
        anomaly: &AnomalyDescriptor,
        layer_results: &LayerResults,
        bounds: &GeoBounds,
    ) -> StrataResult<PipelineOutcome> {
        bounds.validate()?;

        // The footprint falls back to the processing bounds when the
        // descriptor carries none.
        let descriptor = AnomalyDescriptor {
            bounds: anomaly.bounds.or(Some(*bounds)),
            ..anomaly.clone()
        };
        let signature = self.extractor.extract(&descriptor, layer_results);
        let classification = self.classifier.classify_with_trace(&signature);
        let class = classification.class;

        let field = self.generator.generate(&signature, class, bounds)?;
        if field.is_degenerate() {
            events::degenerate_geometry(&anomaly.id, "zero-extent bounds");
        }

        let ctx = ArbitrationContext {
            anomaly_id: &anomaly.id,
            layer_results,
            signature: &signature,
            morphological_class: class,
            field_layers: Some(field.confidence_layers()),
        };
        // Surface extraction and arbitration both only read the field.
        let (model, arbitration) = rayon::join(
            || self.surface.extract(&field),
            || self.arbitrator.arbitrate(&ctx, &field),
        );
        let Arbitration {
            report,
            adjusted: arbitrated,
            fallback_events,
        } = arbitration;
        for event in &fallback_events {
            events::arbitration_fallback(event);
        }
        if model.is_empty() && !field.is_degenerate() {
            events::degenerate_geometry(&anomaly.id, "empty iso-surface");
        }

        let arbitrated_level = arbitrated.inference_level();
        let metadata = MetadataReport::build(
            &anomaly.id,
            &signature,
            classification.rule,
            &arbitrated,
            &model,
            &report,
        );
        debug!(
            anomaly_id = %anomaly.id,
            vertices = model.vertices.len(),
            faces = model.faces.len(),
            band = report.band.as_str(),
            "anomaly stages complete"
        );
        events::anomaly_processed(
            &anomaly.id,
            class,
            field.inference_level(),
            report.consistency_score,
        );

        Ok(PipelineOutcome {
            anomaly_id: anomaly.id.clone(),
            success: true,
            error: None,
            morphological_class: Some(class),
            spatial_signature: Some(signature),
            volumetric_field: Some(field),
            arbitrated_field: Some(arbitrated),
            geometric_model: Some(model),
            consistency_report: Some(report),
            metadata_report: Some(metadata),
            fallback_events,
            disclaimer: Disclaimer::for_level(arbitrated_level),
        })
    }
}
