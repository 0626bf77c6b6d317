use serde::{Deserialize, Serialize};

use crate::errors::{GeometryError, StrataResult};

/// Dense 2D grid of `f64`, row-major (`x` fastest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid2 {
    nx: usize,
    ny: usize,
    data: Vec<f64>,
}

impl Grid2 {
    /// A grid filled with `value`.
    pub fn filled(nx: usize, ny: usize, value: f64) -> Self {
        Self {
            nx,
            ny,
            data: vec![value; nx * ny],
        }
    }

    /// Build a grid by evaluating `f(x, y)` at every cell.
    pub fn from_fn(nx: usize, ny: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(nx * ny);
        for y in 0..ny {
            for x in 0..nx {
                data.push(f(x, y));
            }
        }
        Self { nx, ny, data }
    }

    /// Wrap an existing buffer; its length must equal `nx * ny`.
    pub fn from_vec(nx: usize, ny: usize, data: Vec<f64>) -> StrataResult<Self> {
        if data.len() != nx * ny {
            return Err(GeometryError::ShapeMismatch {
                expected: format!("{nx}x{ny} ({} cells)", nx * ny),
                found: format!("{} cells", data.len()),
            }
            .into());
        }
        Ok(Self { nx, ny, data })
    }

    /// Build from nested rows (`rows[y][x]`). Rows must be equal length.
    pub fn from_rows(rows: &[Vec<f64>]) -> StrataResult<Self> {
        let ny = rows.len();
        let nx = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|r| r.len() != nx) {
            return Err(GeometryError::ShapeMismatch {
                expected: format!("rows of length {nx}"),
                found: "ragged rows".to_string(),
            }
            .into());
        }
        Ok(Self {
            nx,
            ny,
            data: rows.concat(),
        })
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    /// `(nx, ny)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.nx + x
    }

    /// Value at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        (x < self.nx && y < self.ny).then(|| self.data[self.index(x, y)])
    }

    /// Value at `(x, y)` with coordinates clamped to the grid edge.
    ///
    /// # Panics
    /// Panics if the grid is empty.
    pub fn clamped(&self, x: isize, y: isize) -> f64 {
        let cx = x.clamp(0, self.nx as isize - 1) as usize;
        let cy = y.clamp(0, self.ny as isize - 1) as usize;
        self.data[self.index(cx, cy)]
    }

    /// Raw row-major values.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Apply `f` to every cell.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            nx: self.nx,
            ny: self.ny,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Combine two same-shaped grids cell by cell.
    pub fn zip_map(&self, other: &Grid2, f: impl Fn(f64, f64) -> f64) -> StrataResult<Self> {
        self.ensure_same_shape(other)?;
        Ok(Self {
            nx: self.nx,
            ny: self.ny,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    pub fn ensure_same_shape(&self, other: &Grid2) -> StrataResult<()> {
        if self.shape() != other.shape() {
            return Err(GeometryError::ShapeMismatch {
                expected: format!("{:?}", self.shape()),
                found: format!("{:?}", other.shape()),
            }
            .into());
        }
        Ok(())
    }

    /// Arithmetic mean; 0.0 for an empty grid.
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Every value is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}
