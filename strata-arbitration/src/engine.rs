use chrono::Utc;
use tracing::{debug, warn};

use strata_core::config::ArbitrationConfig;
use strata_core::models::{ConsistencyReport, FallbackEvent, VolumetricField};
use strata_core::traits::{ArbitrationContext, IConsistencyEvaluator};

use crate::adjustment::apply_adjustments;
use crate::heuristic::DeterministicEvaluator;
use crate::remote::RemoteReasoningEvaluator;

const COMPONENT: &str = "consistency_arbitration";

/// A report plus the fallbacks taken while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub report: ConsistencyReport,
    pub fallback_events: Vec<FallbackEvent>,
}

/// [`Evaluation`] with the adjustments applied to the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Arbitration {
    pub report: ConsistencyReport,
    pub adjusted: VolumetricField,
    pub fallback_events: Vec<FallbackEvent>,
}

/// Consistency arbitrator: an optional primary evaluator in front of the
/// always-available deterministic one.
///
/// Primary failures are logged and returned as [`FallbackEvent`]s with the
/// evaluation they belong to; they never reach the caller as errors.
pub struct ConsistencyArbitrator {
    primary: Option<Box<dyn IConsistencyEvaluator>>,
    fallback: DeterministicEvaluator,
}

impl Default for ConsistencyArbitrator {
    fn default() -> Self {
        Self::deterministic()
    }
}

impl ConsistencyArbitrator {
    /// Deterministic evaluator only.
    pub fn deterministic() -> Self {
        Self {
            primary: None,
            fallback: DeterministicEvaluator::new(),
        }
    }

    /// Remote evaluator when an endpoint is configured, deterministic otherwise.
    pub fn from_config(config: &ArbitrationConfig) -> Self {
        match RemoteReasoningEvaluator::from_config(config) {
            Some(remote) => {
                debug!(endpoint = remote.endpoint(), "remote reasoning evaluator configured");
                Self::with_primary(Box::new(remote))
            }
            None => Self::deterministic(),
        }
    }

    /// Use `primary` in front of the deterministic fallback.
    pub fn with_primary(primary: Box<dyn IConsistencyEvaluator>) -> Self {
        Self {
            primary: Some(primary),
            ..Self::deterministic()
        }
    }

    /// Name of the evaluator that will be tried first.
    pub fn primary_name(&self) -> &str {
        self.primary
            .as_ref()
            .map(|p| p.name())
            .unwrap_or_else(|| self.fallback.name())
    }

    /// Audit one anomaly. The report always satisfies
    /// [`ConsistencyReport::validate`].
    pub fn evaluate(&self, ctx: &ArbitrationContext<'_>) -> Evaluation {
        let mut fallback_events = Vec::new();
        if let Some(primary) = &self.primary {
            if !primary.is_available() {
                fallback_events.push(self.event(ctx, primary.name(), "evaluator unavailable"));
            } else {
                let outcome = primary
                    .evaluate(ctx)
                    .and_then(|report| report.validate().map(|()| report).map_err(Into::into));
                match outcome {
                    Ok(report) => {
                        return Evaluation {
                            report,
                            fallback_events,
                        }
                    }
                    Err(e) => {
                        warn!(
                            evaluator = primary.name(),
                            anomaly = ctx.anomaly_id,
                            error = %e,
                            "primary evaluator failed, using deterministic fallback"
                        );
                        fallback_events.push(self.event(ctx, primary.name(), &e.to_string()));
                    }
                }
            }
        }
        Evaluation {
            report: self.fallback.report(ctx),
            fallback_events,
        }
    }

    /// Evaluate and apply the resulting adjustments to `field`.
    pub fn arbitrate(&self, ctx: &ArbitrationContext<'_>, field: &VolumetricField) -> Arbitration {
        let Evaluation {
            report,
            fallback_events,
        } = self.evaluate(ctx);
        let adjusted = apply_adjustments(field, &report);
        Arbitration {
            report,
            adjusted,
            fallback_events,
        }
    }

    fn event(&self, ctx: &ArbitrationContext<'_>, evaluator: &str, failure: &str) -> FallbackEvent {
        FallbackEvent {
            anomaly_id: ctx.anomaly_id.to_string(),
            component: COMPONENT.to_string(),
            failure: format!("{evaluator}: {failure}"),
            fallback_used: self.fallback.name().to_string(),
            timestamp: Utc::now(),
        }
    }
}
