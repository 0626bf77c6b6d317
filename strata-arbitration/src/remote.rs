//! Optional remote reasoning evaluator.
//!
//! One POST per evaluation on a current-thread tokio runtime, bounded by a
//! hard timeout. No retries: the arbitrator falls back instead.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use strata_core::config::ArbitrationConfig;
use strata_core::errors::{ArbitrationError, StrataResult};
use strata_core::models::{
    ConfidenceLayers, ConsistencyBand, ConsistencyReport, LayerResult, RecommendedAdjustments,
    SpatialSignature,
};
use strata_core::traits::{ArbitrationContext, IConsistencyEvaluator};

/// Numeric keys every response must carry.
const REQUIRED_KEYS: [&str; 7] = [
    "consistency_score",
    "spectral_convergence",
    "geometric_plausibility",
    "temporal_consistency",
    "overfitting_risk",
    "probability_boost",
    "uncertainty_increase",
];

#[derive(Serialize)]
struct EvaluateRequest<'a> {
    model: &'a str,
    anomaly_id: &'a str,
    morphological_class: &'a str,
    signature: &'a SpatialSignature,
    layers: BTreeMap<&'a str, &'a LayerResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field_layers: Option<ConfidenceLayers>,
}

/// Remote reasoning evaluator.
pub struct RemoteReasoningEvaluator {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
    available: AtomicBool,
}

impl RemoteReasoningEvaluator {
    pub fn new(
        endpoint: String,
        model: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            endpoint,
            model,
            api_key,
            timeout,
            available: AtomicBool::new(true),
        }
    }

    /// Build from config, reading the API key from the configured
    /// environment variable. `None` when no endpoint is configured.
    pub fn from_config(config: &ArbitrationConfig) -> Option<Self> {
        let endpoint = config.endpoint.as_ref().filter(|e| !e.trim().is_empty())?;
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.is_empty());
        Some(Self::new(
            endpoint.clone(),
            config.model.clone(),
            api_key,
            Duration::from_millis(config.timeout_ms),
        ))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Mark the service usable again after a transport failure.
    pub fn reset_availability(&self) {
        self.available.store(true, Ordering::Relaxed);
    }

    fn request_body(&self, ctx: &ArbitrationContext<'_>) -> Result<String, ArbitrationError> {
        let request = EvaluateRequest {
            model: &self.model,
            anomaly_id: ctx.anomaly_id,
            morphological_class: ctx.morphological_class.as_str(),
            signature: ctx.signature,
            layers: ctx
                .layer_results
                .iter()
                .map(|(k, v)| (k.as_str(), v))
                .collect(),
            field_layers: ctx.field_layers,
        };
        serde_json::to_string(&request).map_err(|e| ArbitrationError::MalformedResponse {
            reason: format!("request serialization: {e}"),
        })
    }

    fn send(&self, body: String) -> Result<String, ArbitrationError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ArbitrationError::RequestFailed {
                reason: format!("runtime error: {e}"),
            })?;

        let client = reqwest::Client::new();
        let mut request = client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {key}"));
        }
        let timeout_ms = self.timeout.as_millis() as u64;

        rt.block_on(async {
            let call = async move {
                let response = request
                    .send()
                    .await
                    .map_err(|e| ArbitrationError::RequestFailed {
                        reason: format!("HTTP error: {e}"),
                    })?;
                let status = response.status();
                if !status.is_success() {
                    let text = response.text().await.unwrap_or_default();
                    return Err(ArbitrationError::RequestFailed {
                        reason: format!("service returned {status}: {text}"),
                    });
                }
                response
                    .text()
                    .await
                    .map_err(|e| ArbitrationError::MalformedResponse {
                        reason: format!("body read error: {e}"),
                    })
            };
            tokio::time::timeout(self.timeout, call)
                .await
                .map_err(|_| ArbitrationError::Timeout { timeout_ms })?
        })
    }
}

impl IConsistencyEvaluator for RemoteReasoningEvaluator {
    fn evaluate(&self, ctx: &ArbitrationContext<'_>) -> StrataResult<ConsistencyReport> {
        if !self.is_available() {
            return Err(ArbitrationError::Unavailable {
                evaluator: self.name().to_string(),
            }
            .into());
        }
        let body = self.request_body(ctx)?;
        let text = match self.send(body) {
            Ok(text) => text,
            Err(e) => {
                if matches!(
                    e,
                    ArbitrationError::RequestFailed { .. } | ArbitrationError::Timeout { .. }
                ) {
                    warn!(endpoint = %self.endpoint, error = %e, "reasoning service marked unavailable");
                    self.available.store(false, Ordering::Relaxed);
                }
                return Err(e.into());
            }
        };
        let report = parse_response(&text, self.name())?;
        debug!(anomaly = ctx.anomaly_id, score = report.consistency_score, "remote evaluation");
        Ok(report)
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        !self.endpoint.is_empty() && self.available.load(Ordering::Relaxed)
    }
}

/// Parse and validate a service response against the report contract.
pub fn parse_response(text: &str, evaluator: &str) -> Result<ConsistencyReport, ArbitrationError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ArbitrationError::MalformedResponse {
            reason: format!("invalid JSON: {e}"),
        })?;
    let obj = value
        .as_object()
        .ok_or_else(|| ArbitrationError::MalformedResponse {
            reason: "response is not a JSON object".to_string(),
        })?;

    let mut numbers = [0.0; REQUIRED_KEYS.len()];
    for (slot, key) in numbers.iter_mut().zip(REQUIRED_KEYS) {
        *slot = number(obj, key)?;
    }
    let [consistency_score, spectral_convergence, geometric_plausibility, temporal_consistency, overfitting_risk, probability_boost, uncertainty_increase] =
        numbers;

    let channel_agreement = match obj.get("channel_agreement") {
        None | Some(Value::Null) => BTreeMap::new(),
        Some(Value::Object(map)) => map
            .iter()
            .map(|(k, v)| {
                v.as_f64()
                    .map(|f| (k.clone(), f))
                    .ok_or_else(|| ArbitrationError::MalformedResponse {
                        reason: format!("channel_agreement.{k} is not a number"),
                    })
            })
            .collect::<Result<_, _>>()?,
        Some(_) => {
            return Err(ArbitrationError::MalformedResponse {
                reason: "channel_agreement is not an object".to_string(),
            })
        }
    };

    let report = ConsistencyReport {
        evaluator: evaluator.to_string(),
        consistency_score,
        spectral_convergence,
        geometric_plausibility,
        temporal_consistency,
        overfitting_risk,
        band: ConsistencyBand::from_score(consistency_score),
        channel_agreement,
        adjustments: RecommendedAdjustments {
            probability_boost,
            uncertainty_increase,
        },
        reasoning: obj
            .get("reasoning")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        warnings: strings(obj, "warnings"),
        recommendations: strings(obj, "recommendations"),
    };
    report.validate()?;
    Ok(report)
}

fn number(obj: &Map<String, Value>, key: &str) -> Result<f64, ArbitrationError> {
    match obj.get(key) {
        None | Some(Value::Null) => Err(ArbitrationError::MissingKey {
            key: key.to_string(),
        }),
        Some(v) => v.as_f64().ok_or_else(|| ArbitrationError::MalformedResponse {
            reason: format!("{key} is not a number"),
        }),
    }
}

fn strings(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "consistency_score": 0.72,
        "spectral_convergence": 0.9,
        "geometric_plausibility": 0.7,
        "temporal_consistency": 0.6,
        "overfitting_risk": 0.1,
        "probability_boost": 1.22,
        "uncertainty_increase": 0.1,
        "channel_agreement": {"sentinel2": 0.95},
        "reasoning": "layers agree",
        "warnings": [],
        "recommendations": ["ground_penetrating_radar"]
    }"#;

    #[test]
    fn valid_response_parses() {
        let r = parse_response(VALID, "auditor").unwrap();
        assert_eq!(r.evaluator, "auditor");
        assert_eq!(r.band, ConsistencyBand::HighConsistency);
        assert_eq!(r.channel_agreement["sentinel2"], 0.95);
        assert_eq!(r.recommendations.len(), 1);
    }

    #[test]
    fn missing_key_is_rejected() {
        let text = VALID.replace("\"overfitting_risk\": 0.1,", "");
        assert!(matches!(
            parse_response(&text, "auditor"),
            Err(ArbitrationError::MissingKey { key }) if key == "overfitting_risk"
        ));
    }

    #[test]
    fn out_of_range_is_rejected() {
        let text = VALID.replace("\"probability_boost\": 1.22", "\"probability_boost\": 2.5");
        assert!(matches!(
            parse_response(&text, "auditor"),
            Err(ArbitrationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn non_numeric_and_non_json_are_malformed() {
        let text = VALID.replace("0.72", "\"high\"");
        assert!(matches!(
            parse_response(&text, "auditor"),
            Err(ArbitrationError::MalformedResponse { .. })
        ));
        assert!(matches!(
            parse_response("<html>", "auditor"),
            Err(ArbitrationError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn no_endpoint_means_no_evaluator() {
        assert!(RemoteReasoningEvaluator::from_config(&ArbitrationConfig::default()).is_none());
    }
}
