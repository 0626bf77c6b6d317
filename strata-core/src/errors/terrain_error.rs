/// Direct volumetric analysis errors.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    #[error("empty elevation grid: {name}")]
    EmptyElevation { name: String },

    #[error("invalid cell size: {dx} x {dy}")]
    InvalidCellSize { dx: f64, dy: f64 },

    #[error("non-finite elevation in {name} at ({x}, {y})")]
    NonFiniteElevation { name: String, x: usize, y: usize },
}
