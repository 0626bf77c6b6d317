//! Metadata report consumed by reporting and UI collaborators.
//!
//! Built from the arbitrated field, so percentages describe the final
//! possibility space. Contains no timestamps: identical inputs give
//! byte-identical reports.

mod validation;

pub use validation::{validation_methods, ValidationMethod};

pub use strata_core::models::Disclaimer;

use serde::{Deserialize, Serialize};
use strata_core::constants::CORE_THRESHOLD;
use strata_core::models::{
    ConsistencyBand, ConsistencyReport, GeometricModel, InferenceLevel, MeshStatistics,
    MorphologicalClass, SpatialSignature, VolumetricField,
};
use strata_core::StrataResult;

/// Confidence layers as percentages of all voxels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    pub core_pct: f64,
    pub probable_pct: f64,
    pub peripheral_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UncertaintySummary {
    pub mean_pct: f64,
    /// Share of voxels with uncertainty above 0.7.
    pub high_uncertainty_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencySummary {
    pub evaluator: String,
    pub consistency_score: f64,
    pub band: ConsistencyBand,
    pub overfitting_risk: f64,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataReport {
    pub anomaly_id: String,
    pub inference_level: InferenceLevel,
    pub morphological_class: MorphologicalClass,
    pub classification_rule: String,
    pub signature_confidence: f64,
    pub dimensions: (usize, usize, usize),
    pub voxel_size_m: [f64; 3],
    pub confidence_layers: ConfidenceBreakdown,
    pub uncertainty: UncertaintySummary,
    pub mesh: MeshStatistics,
    pub consistency: ConsistencySummary,
    pub validation_methods: Vec<ValidationMethod>,
    pub disclaimer: Disclaimer,
}

impl MetadataReport {
    pub fn build(
        anomaly_id: &str,
        signature: &SpatialSignature,
        classification_rule: &str,
        field: &VolumetricField,
        model: &GeometricModel,
        consistency: &ConsistencyReport,
    ) -> Self {
        let layers = field.confidence_layers();
        let uncertainty = field.uncertainty();
        let level = field.inference_level();
        let class = field.morphological_class();
        Self {
            anomaly_id: anomaly_id.to_string(),
            inference_level: level,
            morphological_class: class,
            classification_rule: classification_rule.to_string(),
            signature_confidence: signature.signature_confidence,
            dimensions: field.dimensions(),
            voxel_size_m: field.voxel_size_m(),
            confidence_layers: ConfidenceBreakdown {
                core_pct: percent(layers.core),
                probable_pct: percent(layers.probable),
                peripheral_pct: percent(layers.peripheral),
            },
            uncertainty: UncertaintySummary {
                mean_pct: percent(uncertainty.mean()),
                high_uncertainty_pct: percent(uncertainty.fraction_above(CORE_THRESHOLD)),
            },
            mesh: model.statistics,
            consistency: ConsistencySummary {
                evaluator: consistency.evaluator.clone(),
                consistency_score: consistency.consistency_score,
                band: consistency.band,
                overfitting_risk: consistency.overfitting_risk,
                warnings: consistency.warnings.clone(),
            },
            validation_methods: validation_methods(class).to_vec(),
            disclaimer: Disclaimer::for_level(level),
        }
    }

    pub fn to_json(&self) -> StrataResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Fraction to percent, one decimal.
fn percent(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 10.0
}
