use serde::{Deserialize, Serialize};
use strata_core::models::{AnomalyDescriptor, GeoBounds, LayerResults};

/// One unit of batch work: the three arguments of
/// [`AnomalyPipeline::process_anomaly`](crate::AnomalyPipeline::process_anomaly).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyInput {
    pub anomaly: AnomalyDescriptor,
    #[serde(default)]
    pub layer_results: LayerResults,
    pub bounds: GeoBounds,
}

impl AnomalyInput {
    pub fn new(anomaly: AnomalyDescriptor, layer_results: LayerResults, bounds: GeoBounds) -> Self {
        Self {
            anomaly,
            layer_results,
            bounds,
        }
    }
}
