/// Lattice and bounds errors.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("invalid bounds: {reason}")]
    InvalidBounds { reason: String },

    #[error("invalid voxel size: {size}")]
    InvalidVoxelSize { size: f64 },

    #[error("empty grid: {context}")]
    EmptyGrid { context: String },

    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },
}
