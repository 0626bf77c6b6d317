//! # strata-core
//!
//! Foundation crate for the Strata volumetric inference system.
//! Defines the data model, dense grids, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod grid;
pub mod models;
pub mod noise;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::StrataConfig;
pub use errors::{StrataError, StrataResult};
pub use grid::{Grid2, Grid3};
pub use models::{
    ConsistencyReport, GeoBounds, GeometricModel, MorphologicalClass, SpatialSignature,
    VolumetricField,
};
