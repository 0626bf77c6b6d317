//! Voxel lattice planning.

use strata_core::config::VolumetricConfig;
use strata_core::constants::METERS_PER_DEGREE;
use strata_core::errors::{GeometryError, StrataResult};
use strata_core::models::{GeoBounds, GeoPoint, SpatialSignature};

/// Planned voxel lattice for one anomaly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    /// Voxel edge lengths `(x, y, z)` in metres.
    pub voxel_size_m: [f64; 3],
    pub origin: GeoPoint,
    /// Inferred footprint centre in fractional voxel coordinates.
    pub center: (f64, f64),
    /// Footprint half-extents in voxels along x and y.
    pub half_extent: (f64, f64),
}

impl Lattice {
    /// Plan a lattice for `bounds`, or `None` when the bounds have zero
    /// extent. Invalid bounds or voxel size are errors.
    pub fn plan(
        bounds: &GeoBounds,
        signature: &SpatialSignature,
        config: &VolumetricConfig,
    ) -> StrataResult<Option<Self>> {
        let res = config.voxel_resolution_m;
        if !(res.is_finite() && res > 0.0) {
            return Err(GeometryError::InvalidVoxelSize { size: res }.into());
        }
        bounds.validate()?;
        if bounds.is_degenerate() {
            return Ok(None);
        }

        let (ew, ns) = bounds.extent_m();
        if !(ew > 0.0 && ns > 0.0) {
            return Ok(None);
        }
        let max_h = config.max_horizontal_voxels.max(1);
        let nx = axis_count(ew, res, 1, max_h);
        let ny = axis_count(ns, res, 1, max_h);

        let height_m = signature.footprint_side_m() * config.height_factor;
        let max_v = config.max_vertical_voxels.max(1);
        let min_v = config.min_vertical_voxels.clamp(1, max_v);
        let nz = axis_count(height_m, res, min_v, max_v);

        let sx = ew / nx as f64;
        let sy = ns / ny as f64;
        let sz = height_m.max(f64::EPSILON) / nz as f64;

        // Elongation stretches the footprint along x while preserving area.
        let side = signature.footprint_side_m();
        let stretch = signature.elongation_ratio.max(1.0).sqrt();
        let half_x = (side * stretch / 2.0 / sx).clamp(0.5, (nx as f64 / 2.0).max(0.5));
        let half_y = (side / stretch / 2.0 / sy).clamp(0.5, (ny as f64 / 2.0).max(0.5));

        Ok(Some(Self {
            nx,
            ny,
            nz,
            voxel_size_m: [sx, sy, sz],
            origin: bounds.origin(),
            center: ((nx as f64 - 1.0) / 2.0, (ny as f64 - 1.0) / 2.0),
            half_extent: (half_x, half_y),
        }))
    }

    /// Footprint-normalised coordinates of voxel `(x, y, z)`: `u`, `v` are 0
    /// at the centre and ±1 at the footprint edge; `w` runs 0 (base) to 1
    /// (top of the lattice).
    pub fn normalised(&self, x: usize, y: usize, z: usize) -> (f64, f64, f64) {
        let u = (x as f64 - self.center.0) / self.half_extent.0;
        let v = (y as f64 - self.center.1) / self.half_extent.1;
        let w = if self.nz > 1 {
            z as f64 / (self.nz - 1) as f64
        } else {
            0.0
        };
        (u, v, w)
    }

    /// Geographic position of the centre of column `(x, y)`. Matches
    /// [`strata_core::VolumetricField::voxel_geo`] for the same lattice.
    pub fn voxel_geo(&self, x: usize, y: usize) -> GeoPoint {
        let lat = self.origin.lat + (y as f64 + 0.5) * self.voxel_size_m[1] / METERS_PER_DEGREE;
        let lon_scale = METERS_PER_DEGREE * self.origin.lat.to_radians().cos().max(1e-6);
        let lon = self.origin.lon + (x as f64 + 0.5) * self.voxel_size_m[0] / lon_scale;
        GeoPoint { lat, lon }
    }

    pub fn voxel_count(&self) -> usize {
        self.nx * self.ny * self.nz
    }
}

fn axis_count(extent_m: f64, res: f64, min: usize, max: usize) -> usize {
    let raw = (extent_m / res).ceil();
    if raw.is_finite() && raw > 0.0 {
        (raw as usize).clamp(min, max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(span_deg: f64) -> GeoBounds {
        GeoBounds::new(10.0, 10.0 + span_deg, 20.0, 20.0 + span_deg)
    }

    #[test]
    fn degenerate_bounds_plan_nothing() {
        let b = GeoBounds::new(10.0, 10.0, 20.0, 20.001);
        let plan = Lattice::plan(&b, &SpatialSignature::default(), &VolumetricConfig::default());
        assert!(plan.unwrap().is_none());
    }

    #[test]
    fn inverted_bounds_are_errors() {
        let b = GeoBounds::new(11.0, 10.0, 20.0, 20.001);
        assert!(
            Lattice::plan(&b, &SpatialSignature::default(), &VolumetricConfig::default()).is_err()
        );
    }

    #[test]
    fn large_bounds_are_clamped() {
        let lattice = Lattice::plan(
            &bounds(0.1),
            &SpatialSignature::default(),
            &VolumetricConfig::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(lattice.nx, 64);
        assert_eq!(lattice.ny, 64);
        assert!(lattice.voxel_size_m[0] > 100.0);
    }

    #[test]
    fn height_axis_grows_with_area() {
        let small = SpatialSignature {
            area_m2: 400.0,
            ..Default::default()
        };
        let large = SpatialSignature {
            area_m2: 40_000.0,
            ..Default::default()
        };
        let cfg = VolumetricConfig::default();
        let a = Lattice::plan(&bounds(0.002), &small, &cfg).unwrap().unwrap();
        let b = Lattice::plan(&bounds(0.002), &large, &cfg).unwrap().unwrap();
        assert!(b.nz > a.nz);
        assert!(a.nz >= cfg.min_vertical_voxels);
    }
}
