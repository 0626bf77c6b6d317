//! # strata-signature
//!
//! Reduces per-layer sensor results into a [`SpatialSignature`] and softly
//! classifies that signature into a [`MorphologicalClass`].
//!
//! The classifier asserts compatibility with an abstract shape family only,
//! never a cultural or functional meaning.
//!
//! [`SpatialSignature`]: strata_core::models::SpatialSignature
//! [`MorphologicalClass`]: strata_core::models::MorphologicalClass

pub mod classifier;
pub mod extractor;

pub use classifier::{Classification, MorphologyClassifier};
pub use extractor::SignatureExtractor;
