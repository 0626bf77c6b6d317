//! Statistics computed from a triangle mesh.

use strata_core::models::MeshStatistics;

/// Volume (divergence theorem), surface area, footprint (projected area of
/// upward-facing triangles), and height (vertex z-extent).
pub fn compute(vertices: &[[f64; 3]], faces: &[[usize; 3]]) -> MeshStatistics {
    let mut signed_volume = 0.0;
    let mut area = 0.0;
    let mut footprint = 0.0;

    for face in faces {
        let (Some(a), Some(b), Some(c)) = (
            vertices.get(face[0]),
            vertices.get(face[1]),
            vertices.get(face[2]),
        ) else {
            continue;
        };
        signed_volume += dot(*a, cross(*b, *c)) / 6.0;
        let n = cross(sub(*b, *a), sub(*c, *a));
        area += norm(n) / 2.0;
        if n[2] > 0.0 {
            footprint += n[2] / 2.0;
        }
    }

    let (zmin, zmax) = vertices
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v[2]), hi.max(v[2]))
        });
    let max_height = if vertices.is_empty() { 0.0 } else { zmax - zmin };

    MeshStatistics {
        estimated_volume_m3: signed_volume.abs(),
        surface_area_m2: area,
        max_height_m: max_height,
        footprint_area_m2: footprint,
    }
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}
