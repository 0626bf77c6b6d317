//! Structured log events for key pipeline operations.

use strata_core::models::{FallbackEvent, InferenceLevel, MorphologicalClass};

/// One anomaly finished the pipeline.
pub fn anomaly_processed(
    anomaly_id: &str,
    class: MorphologicalClass,
    level: InferenceLevel,
    consistency_score: f64,
) {
    tracing::info!(
        event = "anomaly_processed",
        anomaly_id = %anomaly_id,
        class = %class,
        level = ?level,
        consistency_score = consistency_score,
        "anomaly processed"
    );
}

/// Bounds or surface collapsed to a sentinel result.
pub fn degenerate_geometry(anomaly_id: &str, what: &str) {
    tracing::warn!(
        event = "degenerate_geometry",
        anomaly_id = %anomaly_id,
        what = %what,
        "degenerate geometry"
    );
}

/// An evidence grid was resampled to the fusion shape.
pub fn evidence_resampled(channel: &str, from: (usize, usize), to: (usize, usize)) {
    tracing::info!(
        event = "evidence_resampled",
        channel = %channel,
        from = ?from,
        to = ?to,
        "evidence resampled"
    );
}

/// The arbitrator used its deterministic fallback.
pub fn arbitration_fallback(event: &FallbackEvent) {
    tracing::warn!(
        event = "arbitration_fallback",
        anomaly_id = %event.anomaly_id,
        component = %event.component,
        failure = %event.failure,
        fallback = %event.fallback_used,
        at = %event.timestamp,
        "arbitration fell back"
    );
}

/// Unrecoverable failure for one anomaly.
pub fn pipeline_failed(anomaly_id: &str, error: &str) {
    tracing::error!(
        event = "pipeline_failed",
        anomaly_id = %anomaly_id,
        error = %error,
        "pipeline failed"
    );
}
