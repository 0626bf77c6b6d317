use crate::errors::StrataResult;
use crate::models::{
    ConfidenceLayers, ConsistencyReport, LayerResults, MorphologicalClass, SpatialSignature,
};

/// Everything an evaluator may look at when auditing one anomaly.
#[derive(Debug, Clone, Copy)]
pub struct ArbitrationContext<'a> {
    pub anomaly_id: &'a str,
    pub layer_results: &'a LayerResults,
    pub signature: &'a SpatialSignature,
    pub morphological_class: MorphologicalClass,
    /// Confidence layers of the generated field, when one exists.
    pub field_layers: Option<ConfidenceLayers>,
}

impl ArbitrationContext<'_> {
    /// Footprint area used for data-density estimates, m².
    pub fn area_m2(&self) -> f64 {
        self.signature.area_m2.max(1.0)
    }
}

/// Cross-channel consistency evaluation.
pub trait IConsistencyEvaluator: Send + Sync {
    /// Audit the evidence and produce a report satisfying
    /// [`ConsistencyReport::validate`].
    fn evaluate(&self, ctx: &ArbitrationContext<'_>) -> StrataResult<ConsistencyReport>;

    /// Human-readable evaluator name.
    fn name(&self) -> &str;

    /// Whether this evaluator is currently usable.
    fn is_available(&self) -> bool;
}
