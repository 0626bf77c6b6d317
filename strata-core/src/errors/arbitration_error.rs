/// Consistency arbitration errors.
///
/// These never reach the pipeline caller: the arbitrator logs them and
/// falls back to the deterministic evaluator.
#[derive(Debug, thiserror::Error)]
pub enum ArbitrationError {
    #[error("evaluator unavailable: {evaluator}")]
    Unavailable { evaluator: String },

    #[error("evaluator timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("missing key in response: {key}")]
    MissingKey { key: String },

    #[error("value out of range: {key} = {value}")]
    OutOfRange { key: String, value: f64 },
}
