//! Finite-difference operators over elevation grids. Edges use one-sided
//! differences; single-cell axes have zero derivative.

use strata_core::Grid2;

/// Slope in degrees from the gradient magnitude.
pub fn slope_deg(z: &Grid2, dx: f64, dy: f64) -> Grid2 {
    let (nx, ny) = z.shape();
    Grid2::from_fn(nx, ny, |x, y| {
        let gx = first_difference(nx, x, dx, |i| z.clamped(i, y as isize));
        let gy = first_difference(ny, y, dy, |j| z.clamped(x as isize, j));
        gx.hypot(gy).atan().to_degrees()
    })
}

/// Variance over the 3x3 window, edges clamped.
pub fn roughness(z: &Grid2) -> Grid2 {
    let (nx, ny) = z.shape();
    Grid2::from_fn(nx, ny, |x, y| {
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                let v = z.clamped(x as isize + dx, y as isize + dy);
                sum += v;
                sum_sq += v * v;
            }
        }
        let mean = sum / 9.0;
        (sum_sq / 9.0 - mean * mean).max(0.0)
    })
}

/// Laplacian `d2z/dx2 + d2z/dy2`, edges clamped.
pub fn curvature(z: &Grid2, dx: f64, dy: f64) -> Grid2 {
    let (nx, ny) = z.shape();
    Grid2::from_fn(nx, ny, |x, y| {
        let (xi, yi) = (x as isize, y as isize);
        let c = z.clamped(xi, yi);
        let dxx = (z.clamped(xi - 1, yi) - 2.0 * c + z.clamped(xi + 1, yi)) / (dx * dx);
        let dyy = (z.clamped(xi, yi - 1) - 2.0 * c + z.clamped(xi, yi + 1)) / (dy * dy);
        dxx + dyy
    })
}

fn first_difference(n: usize, i: usize, step: f64, at: impl Fn(isize) -> f64) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let i = i as isize;
    if i == 0 {
        (at(1) - at(0)) / step
    } else if i as usize == n - 1 {
        (at(i) - at(i - 1)) / step
    } else {
        (at(i + 1) - at(i - 1)) / (2.0 * step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(nx: usize, ny: usize, rise_per_cell: f64) -> Grid2 {
        Grid2::from_fn(nx, ny, |x, _| x as f64 * rise_per_cell)
    }

    #[test]
    fn ramp_has_constant_slope() {
        let s = slope_deg(&ramp(5, 4, 1.0), 1.0, 1.0);
        assert!(s.values().iter().all(|v| (v - 45.0).abs() < 1e-9));
    }

    #[test]
    fn flat_has_no_slope_roughness_or_curvature() {
        let z = Grid2::filled(4, 4, 12.0);
        assert_eq!(slope_deg(&z, 1.0, 1.0).max(), 0.0);
        assert!(roughness(&z).max() < 1e-12);
        assert_eq!(curvature(&z, 1.0, 1.0).max(), 0.0);
    }

    #[test]
    fn pit_has_positive_curvature() {
        let z = Grid2::from_fn(5, 5, |x, y| if (x, y) == (2, 2) { -1.0 } else { 0.0 });
        let c = curvature(&z, 1.0, 1.0);
        assert_eq!(c.get(2, 2), Some(4.0));
        assert!(roughness(&z).get(2, 2).unwrap() > 0.0);
    }

    #[test]
    fn single_cell_axis_has_zero_gradient() {
        let z = Grid2::from_fn(1, 3, |_, y| y as f64);
        let s = slope_deg(&z, 1.0, 1.0);
        assert!((s.get(0, 1).unwrap() - 45.0).abs() < 1e-9);
    }
}
