use serde::{Deserialize, Serialize};

use super::defaults;

/// Consistency arbitration configuration.
///
/// With no `endpoint` the arbitrator runs the deterministic evaluator only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArbitrationConfig {
    /// URL of the optional external reasoning service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Model name sent to the reasoning service.
    pub model: String,
    /// Environment variable holding the service API key.
    pub api_key_env: String,
    /// Hard bound on one reasoning call, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ArbitrationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            model: defaults::DEFAULT_ARBITRATION_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_ARBITRATION_API_KEY_ENV.to_string(),
            timeout_ms: defaults::DEFAULT_ARBITRATION_TIMEOUT_MS,
        }
    }
}
