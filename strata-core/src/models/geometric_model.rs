use serde::{Deserialize, Serialize};

/// Confidence bucket of a mesh vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceZone {
    High,
    Medium,
    Low,
}

impl ConfidenceZone {
    pub const HIGH_MIN: f64 = 0.7;
    pub const MEDIUM_MIN: f64 = 0.4;

    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= Self::HIGH_MIN {
            Self::High
        } else if confidence >= Self::MEDIUM_MIN {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Vertex indices partitioned by confidence zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceZones {
    pub high: Vec<usize>,
    pub medium: Vec<usize>,
    pub low: Vec<usize>,
}

/// Scalar statistics computed from the mesh itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshStatistics {
    pub estimated_volume_m3: f64,
    pub surface_area_m2: f64,
    pub max_height_m: f64,
    pub footprint_area_m2: f64,
}

/// Low-polygon surface extracted from a volumetric field.
///
/// Vertex positions are local metric coordinates relative to the field
/// origin, `z` up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometricModel {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<[usize; 3]>,
    /// Per-vertex confidence in [0, 1], parallel to `vertices`.
    pub vertex_confidence: Vec<f64>,
    pub confidence_zones: ConfidenceZones,
    pub statistics: MeshStatistics,
    pub iso_threshold: f64,
}

impl GeometricModel {
    /// Explicit empty model for fields with nothing above the threshold.
    pub fn empty(iso_threshold: f64) -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            vertex_confidence: Vec::new(),
            confidence_zones: ConfidenceZones::default(),
            statistics: MeshStatistics::default(),
            iso_threshold,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}
