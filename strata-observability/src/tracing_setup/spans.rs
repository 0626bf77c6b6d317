//! Span definitions per pipeline stage.

/// Span covering one anomaly through the whole pipeline.
#[macro_export]
macro_rules! anomaly_span {
    ($anomaly_id:expr) => {
        tracing::info_span!("strata.anomaly", anomaly_id = %$anomaly_id)
    };
}

/// Span covering one fusion pass.
#[macro_export]
macro_rules! fusion_span {
    ($shape:expr) => {
        tracing::info_span!("strata.fusion", shape = ?$shape)
    };
}

/// Span covering one batch.
#[macro_export]
macro_rules! batch_span {
    ($size:expr) => {
        tracing::info_span!("strata.batch", size = $size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANOMALY: &str = "strata.anomaly";
    pub const FUSION: &str = "strata.fusion";
    pub const BATCH: &str = "strata.batch";
}
