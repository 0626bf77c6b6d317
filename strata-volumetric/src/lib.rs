//! # strata-volumetric
//!
//! Synthesises a bounded 3D probability lattice whose shape is consistent
//! with, not a depiction of, the classified morphology.
//!
//! ## Stages
//! 1. **Lattice**: extent from geographic bounds and footprint, clamped
//! 2. **Profiles**: class-specific base probability per voxel
//! 3. **Uncertainty**: distance from the inferred centre, sensor convergence
//! 4. **Smoothing**: separable low-pass filter against speckle
//! 5. **Confidence layers**: recomputed from the smoothed grid

pub mod generator;
pub mod lattice;
pub mod profiles;
pub mod smoothing;

pub use generator::VolumetricFieldGenerator;
pub use lattice::Lattice;
