mod arbitration_error;
mod fusion_error;
mod geometry_error;
mod strata_error;
mod terrain_error;

pub use arbitration_error::ArbitrationError;
pub use fusion_error::FusionError;
pub use geometry_error::GeometryError;
pub use strata_error::{StrataError, StrataResult};
pub use terrain_error::TerrainError;
