//! # strata-surface
//!
//! Extracts a closed, deterministic triangle mesh from a volumetric field
//! at an iso-probability threshold, computes statistics from the mesh
//! itself, and exports it as plain-text mesh or a per-vertex attribute
//! bundle.

pub mod export;
pub mod extractor;
pub mod nets;
pub mod statistics;

pub use export::{attribute_bundle, to_obj, AttributeBundle, VertexAttributes};
pub use extractor::SurfaceExtractor;
