/// Evidence fusion errors.
#[derive(Debug, thiserror::Error)]
pub enum FusionError {
    #[error("empty evidence grid: {channel}")]
    EmptyEvidence { channel: String },

    #[error("resample failed for {channel}: {reason}")]
    ResampleFailed { channel: String, reason: String },

    #[error("invalid fusion weights: {reason}")]
    InvalidWeights { reason: String },
}
