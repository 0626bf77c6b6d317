use serde::{Deserialize, Serialize};

/// Dense 3D grid of `f64` stored as one flat buffer.
///
/// Layout is `x` fastest, then `y`, then `z` (height).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid3 {
    nx: usize,
    ny: usize,
    nz: usize,
    data: Vec<f64>,
}

impl Grid3 {
    pub fn filled(nx: usize, ny: usize, nz: usize, value: f64) -> Self {
        Self {
            nx,
            ny,
            nz,
            data: vec![value; nx * ny * nz],
        }
    }

    /// Build a grid by evaluating `f(x, y, z)` at every voxel.
    pub fn from_fn(
        nx: usize,
        ny: usize,
        nz: usize,
        mut f: impl FnMut(usize, usize, usize) -> f64,
    ) -> Self {
        let mut data = Vec::with_capacity(nx * ny * nz);
        for z in 0..nz {
            for y in 0..ny {
                for x in 0..nx {
                    data.push(f(x, y, z));
                }
            }
        }
        Self { nx, ny, nz, data }
    }

    /// `(nx, ny, nz)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.ny + y) * self.nx + x
    }

    /// Value at `(x, y, z)`, or `None` outside the lattice.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<f64> {
        (x < self.nx && y < self.ny && z < self.nz).then(|| self.data[self.index(x, y, z)])
    }

    /// Value with coordinates clamped to the lattice edge.
    ///
    /// # Panics
    /// Panics if the grid is empty.
    pub fn clamped(&self, x: isize, y: isize, z: isize) -> f64 {
        let cx = x.clamp(0, self.nx as isize - 1) as usize;
        let cy = y.clamp(0, self.ny as isize - 1) as usize;
        let cz = z.clamp(0, self.nz as isize - 1) as usize;
        self.data[self.index(cx, cy, cz)]
    }

    /// Trilinear sample at fractional voxel coordinates, clamped to the lattice.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        let x = x.clamp(0.0, (self.nx - 1) as f64);
        let y = y.clamp(0.0, (self.ny - 1) as f64);
        let z = z.clamp(0.0, (self.nz - 1) as f64);
        let (x0, y0, z0) = (x.floor(), y.floor(), z.floor());
        let (fx, fy, fz) = (x - x0, y - y0, z - z0);
        let (x0, y0, z0) = (x0 as isize, y0 as isize, z0 as isize);

        let lerp = |a: f64, b: f64, t: f64| a + (b - a) * t;
        let c = |dx: isize, dy: isize, dz: isize| self.clamped(x0 + dx, y0 + dy, z0 + dz);

        let c00 = lerp(c(0, 0, 0), c(1, 0, 0), fx);
        let c10 = lerp(c(0, 1, 0), c(1, 1, 0), fx);
        let c01 = lerp(c(0, 0, 1), c(1, 0, 1), fx);
        let c11 = lerp(c(0, 1, 1), c(1, 1, 1), fx);
        lerp(lerp(c00, c10, fy), lerp(c01, c11, fy), fz)
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            nx: self.nx,
            ny: self.ny,
            nz: self.nz,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Rebuild the grid from a function of the voxel coordinates and the
    /// current value.
    pub fn map_indexed(&self, mut f: impl FnMut(usize, usize, usize, f64) -> f64) -> Self {
        Self::from_fn(self.nx, self.ny, self.nz, |x, y, z| {
            f(x, y, z, self.data[self.index(x, y, z)])
        })
    }

    /// Fraction of voxels strictly above `threshold`; 0.0 when empty.
    pub fn fraction_above(&self, threshold: f64) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().filter(|&&v| v > threshold).count() as f64 / self.data.len() as f64
    }

    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }
}
