//! Grid resizing with centre-aligned sampling.

use strata_core::config::Interpolation;
use strata_core::Grid2;

/// Resize `grid` to `target`. Returns the input unchanged when the shapes
/// already match. An empty source or target yields an empty grid.
pub fn resample(grid: &Grid2, target: (usize, usize), interpolation: Interpolation) -> Grid2 {
    let (tx, ty) = target;
    if grid.shape() == target {
        return grid.clone();
    }
    if grid.is_empty() || tx == 0 || ty == 0 {
        return Grid2::filled(tx, ty, 0.0);
    }
    let (sx, sy) = grid.shape();
    let scale_x = sx as f64 / tx as f64;
    let scale_y = sy as f64 / ty as f64;

    match interpolation {
        Interpolation::Nearest => Grid2::from_fn(tx, ty, |x, y| {
            let ix = (((x as f64 + 0.5) * scale_x) as usize).min(sx - 1);
            let iy = (((y as f64 + 0.5) * scale_y) as usize).min(sy - 1);
            grid.clamped(ix as isize, iy as isize)
        }),
        Interpolation::Bilinear => Grid2::from_fn(tx, ty, |x, y| {
            let fx = ((x as f64 + 0.5) * scale_x - 0.5).clamp(0.0, (sx - 1) as f64);
            let fy = ((y as f64 + 0.5) * scale_y - 0.5).clamp(0.0, (sy - 1) as f64);
            let (x0, y0) = (fx.floor(), fy.floor());
            let (tx_, ty_) = (fx - x0, fy - y0);
            let (x0, y0) = (x0 as isize, y0 as isize);
            let top = lerp(grid.clamped(x0, y0), grid.clamped(x0 + 1, y0), tx_);
            let bottom = lerp(grid.clamped(x0, y0 + 1), grid.clamped(x0 + 1, y0 + 1), tx_);
            lerp(top, bottom, ty_)
        }),
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
