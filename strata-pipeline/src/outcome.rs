use serde::{Deserialize, Serialize};
use strata_core::models::{
    ConsistencyReport, Disclaimer, FallbackEvent, FusionResult, GeometricModel,
    MorphologicalClass, SpatialSignature, VolumetricField,
};
use strata_core::StrataResult;
use strata_surface::{attribute_bundle, to_obj};

use crate::report::MetadataReport;

/// Structured result of one anomaly. Never a bare yes/no: on success every
/// artifact is present, on failure only `error` explains why. Both carry a
/// disclaimer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutcome {
    pub anomaly_id: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub morphological_class: Option<MorphologicalClass>,
    pub spatial_signature: Option<SpatialSignature>,
    /// Field as generated from the signature.
    pub volumetric_field: Option<VolumetricField>,
    /// Field after arbitration adjustments.
    pub arbitrated_field: Option<VolumetricField>,
    /// Surface of `volumetric_field`.
    pub geometric_model: Option<GeometricModel>,
    pub consistency_report: Option<ConsistencyReport>,
    pub metadata_report: Option<MetadataReport>,
    /// Fallbacks taken while auditing this anomaly.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallback_events: Vec<FallbackEvent>,
    pub disclaimer: Disclaimer,
}

impl PipelineOutcome {
    pub(crate) fn failed(anomaly_id: &str, error: String) -> Self {
        Self {
            anomaly_id: anomaly_id.to_string(),
            success: false,
            error: Some(error),
            morphological_class: None,
            spatial_signature: None,
            volumetric_field: None,
            arbitrated_field: None,
            geometric_model: None,
            consistency_report: None,
            metadata_report: None,
            fallback_events: Vec::new(),
            disclaimer: Disclaimer::no_reconstruction(),
        }
    }

    /// Plain-text mesh export of the geometric model, disclaimer included.
    pub fn mesh_obj(&self) -> Option<String> {
        self.geometric_model
            .as_ref()
            .map(|model| to_obj(model, &self.disclaimer))
    }

    /// Per-vertex attribute bundle as JSON, optionally enriched with a
    /// fusion result covering the same footprint.
    pub fn attributes_json(&self, fusion: Option<&FusionResult>) -> StrataResult<Option<String>> {
        match (&self.geometric_model, &self.volumetric_field) {
            (Some(model), Some(field)) => attribute_bundle(model, field, fusion).to_json().map(Some),
            _ => Ok(None),
        }
    }

    pub fn to_json(&self) -> StrataResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
