//! # strata-arbitration
//!
//! Audits agreement between evidence channels, penalises over-fitting on
//! sparse data, and proposes a global rescale of the volumetric field.
//!
//! Two evaluators share one contract ([`IConsistencyEvaluator`]): an
//! optional remote reasoning service and a deterministic heuristic that is
//! always available. [`ConsistencyArbitrator`] picks between them at
//! construction and falls back silently (logged, never raised).
//!
//! [`IConsistencyEvaluator`]: strata_core::traits::IConsistencyEvaluator

pub mod adjustment;
pub mod engine;
pub mod heuristic;
pub mod remote;

pub use adjustment::apply_adjustments;
pub use engine::{Arbitration, ConsistencyArbitrator, Evaluation};
pub use heuristic::DeterministicEvaluator;
pub use remote::RemoteReasoningEvaluator;
