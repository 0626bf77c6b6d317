//! MorphologyClassifier: first-match decision table over signature
//! thresholds. Total over all signatures: no match yields
//! [`MorphologicalClass::UndefinedVolume`].

pub mod rules;

use serde::Serialize;
use strata_core::models::{MorphologicalClass, SpatialSignature};
use tracing::debug;

pub use rules::{MorphologyRule, RULES};

/// Rule name reported when nothing matched.
pub const NO_RULE_MATCHED: &str = "no_rule_matched";

/// A class together with the rule that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub class: MorphologicalClass,
    pub rule: &'static str,
}

/// Stateless rule-table classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct MorphologyClassifier;

impl MorphologyClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, signature: &SpatialSignature) -> MorphologicalClass {
        self.classify_with_trace(signature).class
    }

    /// Evaluate [`RULES`] in priority order; the first match wins.
    pub fn classify_with_trace(&self, signature: &SpatialSignature) -> Classification {
        let classification = RULES
            .iter()
            .find(|rule| (rule.matches)(signature))
            .map(|rule| Classification {
                class: rule.class,
                rule: rule.name,
            })
            .unwrap_or(Classification {
                class: MorphologicalClass::UndefinedVolume,
                rule: NO_RULE_MATCHED,
            });
        debug!(
            class = %classification.class,
            rule = classification.rule,
            "signature classified"
        );
        classification
    }
}
