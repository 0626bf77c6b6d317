mod anomaly;
mod consistency_report;
mod disclaimer;
mod fallback_event;
mod field;
mod fusion_result;
mod geometric_model;
mod morphology;
mod signature;
mod terrain_analysis;

pub use anomaly::{AnomalyDescriptor, GeoBounds, GeoPoint, LayerResult, LayerResults};
pub use consistency_report::{ConsistencyBand, ConsistencyReport, RecommendedAdjustments};
pub use disclaimer::{Disclaimer, NO_RECONSTRUCTION};
pub use fallback_event::FallbackEvent;
pub use field::{ConfidenceLayers, InferenceLevel, VolumetricField};
pub use fusion_result::{
    ChannelContributions, ChannelShape, FusionMetadata, FusionResult, RuleCounts,
    SpectralEvidence,
};
pub use geometric_model::{ConfidenceZone, ConfidenceZones, GeometricModel, MeshStatistics};
pub use morphology::MorphologicalClass;
pub use signature::SpatialSignature;
pub use terrain_analysis::DirectVolumetricAnalysis;
