//! Separable binomial low-pass filter over a [`Grid3`].
//!
//! Suppresses single-voxel speckle so that texture noise cannot be read as
//! structure. Edges are handled by clamping.

use strata_core::Grid3;

/// Normalised binomial weights of length `2 * radius + 1`.
pub fn binomial_kernel(radius: usize) -> Vec<f64> {
    let n = 2 * radius;
    let mut row = vec![1.0_f64];
    for _ in 0..n {
        let mut next = vec![1.0; row.len() + 1];
        for i in 1..row.len() {
            next[i] = row[i - 1] + row[i];
        }
        row = next;
    }
    let total: f64 = row.iter().sum();
    row.into_iter().map(|w| w / total).collect()
}

/// Smooth along x, then y, then z. Radius 0 returns the grid unchanged.
pub fn smooth(grid: &Grid3, radius: usize) -> Grid3 {
    if radius == 0 || grid.is_empty() {
        return grid.clone();
    }
    let kernel = binomial_kernel(radius);
    let along_x = convolve(grid, &kernel, Axis::X);
    let along_y = convolve(&along_x, &kernel, Axis::Y);
    convolve(&along_y, &kernel, Axis::Z)
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
    Z,
}

fn convolve(grid: &Grid3, kernel: &[f64], axis: Axis) -> Grid3 {
    let r = (kernel.len() / 2) as isize;
    let (nx, ny, nz) = grid.shape();
    Grid3::from_fn(nx, ny, nz, |x, y, z| {
        let (x, y, z) = (x as isize, y as isize, z as isize);
        kernel
            .iter()
            .enumerate()
            .map(|(k, w)| {
                let d = k as isize - r;
                let value = match axis {
                    Axis::X => grid.clamped(x + d, y, z),
                    Axis::Y => grid.clamped(x, y + d, z),
                    Axis::Z => grid.clamped(x, y, z + d),
                };
                w * value
            })
            .sum()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_sums_to_one() {
        for r in 0..4 {
            let k = binomial_kernel(r);
            assert_eq!(k.len(), 2 * r + 1);
            assert!((k.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        }
        assert_eq!(binomial_kernel(1), vec![0.25, 0.5, 0.25]);
    }

    #[test]
    fn constant_grid_is_fixed_point() {
        let g = Grid3::filled(4, 3, 2, 0.6);
        let s = smooth(&g, 2);
        assert!(s.values().iter().all(|v| (v - 0.6).abs() < 1e-12));
    }

    #[test]
    fn spike_is_spread() {
        let g = Grid3::from_fn(5, 5, 5, |x, y, z| {
            if (x, y, z) == (2, 2, 2) {
                1.0
            } else {
                0.0
            }
        });
        let s = smooth(&g, 1);
        let peak = s.get(2, 2, 2).unwrap();
        assert!((peak - 0.125).abs() < 1e-12);
        assert!(s.get(1, 2, 2).unwrap() > 0.0);
        assert!((s.values().iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_radius_is_identity() {
        let g = Grid3::from_fn(3, 3, 3, |x, _, _| x as f64 / 2.0);
        assert_eq!(smooth(&g, 0), g);
    }
}
