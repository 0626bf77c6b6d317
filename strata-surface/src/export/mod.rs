//! Mesh and attribute export.

mod attributes;
mod obj;

pub use attributes::{attribute_bundle, AttributeBundle, VertexAttributes};
pub use obj::to_obj;
