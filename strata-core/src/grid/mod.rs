//! Dense row-major grids with index-safe accessors.
//!
//! All 2D and 3D evidence in the pipeline lives in these flat buffers.
//! Nothing outside this module computes a flat index by hand.

mod grid2;
mod grid3;

pub use grid2::Grid2;
pub use grid3::Grid3;
