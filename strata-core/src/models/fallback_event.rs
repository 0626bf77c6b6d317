use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recorded whenever a component falls back to its deterministic path for
/// one anomaly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackEvent {
    pub anomaly_id: String,
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}
