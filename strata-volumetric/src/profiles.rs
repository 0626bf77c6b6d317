//! Class-specific base probability profiles.
//!
//! Every profile is a function of footprint-normalised coordinates
//! `(u, v, w)`: `u`, `v` are 0 at the inferred centre and ±1 at the footprint
//! edge, `w` runs from 0 at the base to 1 at the top of the lattice. Shapes
//! are deliberately coarse.

use strata_core::models::MorphologicalClass;

/// Rate at which probability decays beyond a profile's edge, per unit of
/// normalised distance.
const EDGE_FALLOFF: f64 = 4.0;

/// Normalised voxel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    pub u: f64,
    pub v: f64,
    pub w: f64,
}

impl ProfilePoint {
    pub fn new(u: f64, v: f64, w: f64) -> Self {
        Self { u, v, w }
    }

    /// Chebyshev distance from the centre in footprint units.
    fn square_radius(&self) -> f64 {
        self.u.abs().max(self.v.abs())
    }

    /// Euclidean horizontal distance from the centre in footprint units.
    fn radius(&self) -> f64 {
        self.u.hypot(self.v)
    }
}

/// Base material probability for `class` at `p`, before confidence scaling
/// and texture.
pub fn material(class: MorphologicalClass, p: ProfilePoint) -> f64 {
    let w = p.w;
    match class {
        MorphologicalClass::TruncatedPyramidal => {
            // Sloped sides, flat top at 40% of the base half-width.
            let half = 1.0 - 0.6 * w;
            soft_inside(p.square_radius(), half, 0.97 - 0.35 * w)
        }
        MorphologicalClass::SteppedPlatform => {
            let step = (w * 3.0).floor().min(2.0);
            let half = 1.0 - 0.28 * step;
            soft_inside(p.square_radius(), half, 0.92 - 0.1 * step)
        }
        MorphologicalClass::LinearCompact => {
            // Low elongated body; the lattice already stretches u along the
            // long axis.
            let body = soft_inside(p.square_radius(), 1.0, 0.88);
            body * soft_below(w, 0.5)
        }
        MorphologicalClass::CavityVoid => {
            // Overburden shell; the chamber itself is carried by the void grid.
            let shell = soft_inside(p.square_radius(), 1.0, 0.65);
            shell * (1.0 - chamber(p))
        }
        MorphologicalClass::EmbankmentMound => {
            let crest = (-2.0 * p.radius().powi(2)).exp();
            0.9 * sigmoid((crest - w) * 10.0)
        }
        MorphologicalClass::OrthogonalNetwork => {
            let inside = soft_inside(p.square_radius(), 1.0, 1.0);
            let on_wall = is_wall(p.u) || is_wall(p.v);
            let level = if on_wall { 0.82 } else { 0.18 };
            inside * level * soft_below(w, 0.35)
        }
        MorphologicalClass::UndefinedVolume => 0.5 * (-p.radius()).exp() * (1.0 - w),
    }
}

/// Base void probability for `class` at `p`. Zero for classes without an
/// internal void.
pub fn void(class: MorphologicalClass, p: ProfilePoint) -> f64 {
    if class.has_void() {
        0.9 * chamber(p)
    } else {
        0.0
    }
}

/// Ellipsoidal chamber centred at 40% height, normalised to 1 at its centre.
fn chamber(p: ProfilePoint) -> f64 {
    let r2 = (p.u / 0.6).powi(2) + (p.v / 0.6).powi(2) + ((p.w - 0.4) / 0.3).powi(2);
    (-2.0 * r2).exp()
}

/// `value` within `half`, exponential decay outside.
fn soft_inside(distance: f64, half: f64, value: f64) -> f64 {
    if distance <= half {
        value
    } else {
        value * (-(distance - half) * EDGE_FALLOFF).exp()
    }
}

/// 1 below `limit`, exponential decay above.
fn soft_below(w: f64, limit: f64) -> f64 {
    soft_inside(w, limit, 1.0)
}

/// Four wall lines across the footprint along each axis.
fn is_wall(coord: f64) -> bool {
    let phase = ((coord + 1.0) * 1.5).rem_euclid(1.0);
    phase < 0.2 || phase > 0.9
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
