//! # strata-observability
//!
//! JSON tracing subscriber setup, span definitions per pipeline stage, and
//! structured events for anomaly processing, degradation, and fallback.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_from_config, init_tracing_with_filter};
