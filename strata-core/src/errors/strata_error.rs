use super::{ArbitrationError, FusionError, GeometryError, TerrainError};

/// Top-level error type for the Strata inference pipeline.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum StrataError {
    #[error("geometry error: {0}")]
    GeometryError(#[from] GeometryError),

    #[error("terrain analysis error: {0}")]
    TerrainError(#[from] TerrainError),

    #[error("fusion error: {0}")]
    FusionError(#[from] FusionError),

    #[error("arbitration error: {0}")]
    ArbitrationError(#[from] ArbitrationError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl StrataError {
    /// Whether the error belongs to the unrecoverable-configuration class,
    /// i.e. no safe default exists and the caller must see a failure.
    pub fn is_unrecoverable(&self) -> bool {
        matches!(
            self,
            StrataError::ConfigError(_)
                | StrataError::GeometryError(GeometryError::InvalidBounds { .. })
                | StrataError::GeometryError(GeometryError::InvalidVoxelSize { .. })
        )
    }
}

/// Convenience type alias.
pub type StrataResult<T> = Result<T, StrataError>;
