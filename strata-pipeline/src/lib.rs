//! # strata-pipeline
//!
//! Wires every stage together. [`AnomalyPipeline::process_anomaly`] runs
//! signature extraction, classification, field generation, surface
//! extraction and consistency arbitration for one anomaly;
//! [`AnomalyPipeline::run_fusion_pass`] runs the terrain and spectral
//! branches concurrently and fuses them.

pub mod fusion_pass;
pub mod input;
pub mod outcome;
pub mod pipeline;
pub mod report;

pub use input::AnomalyInput;
pub use outcome::PipelineOutcome;
pub use pipeline::AnomalyPipeline;
pub use report::{validation_methods, Disclaimer, MetadataReport, ValidationMethod};
