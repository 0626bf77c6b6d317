//! # strata-terrain
//!
//! Independent evidence branch: elevation differencing, slope, roughness,
//! and curvature from a terrain (bare-ground) and a surface
//! (top-of-everything) elevation model. Reports pure geometry only.

pub mod analyzer;
pub mod derivatives;

pub use analyzer::DirectVolumetricAnalyzer;
