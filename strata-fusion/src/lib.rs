//! # strata-fusion
//!
//! Combines the roughness-derived volumetric evidence with externally
//! supplied spectral/temporal grids.
//!
//! Every spectral grid is resampled to the volumetric-evidence shape
//! before combination; shapes are never truncated or broadcast. The
//! weighted sum is then bounded by three consistency rules.

pub mod channels;
pub mod engine;
pub mod resample;
pub mod rules;

pub use channels::{AlignedEvidence, ChannelGrids};
pub use engine::EvidenceFusionEngine;
pub use resample::resample;
