//! Naive surface nets.
//!
//! Samples sit at voxel centres. The lattice is padded by one empty sample
//! on every side so the mesh is always closed. Each cell whose eight
//! corners straddle the threshold gets one vertex at the mean of its edge
//! crossings; each sample edge that crosses the threshold gets one quad
//! joining the four cells around it, wound so normals point outward.

use strata_core::Grid3;

/// Corner offsets of a cell, indexed by bit pattern `x | y << 1 | z << 2`.
const CORNERS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [0, 1, 0],
    [1, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [0, 1, 1],
    [1, 1, 1],
];

/// Cell edges as pairs of corner indices.
const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (0, 2),
    (1, 3),
    (4, 6),
    (5, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Raw mesh in local metres.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<[usize; 3]>,
}

/// Threshold view of a grid padded by one empty sample per side.
struct Padded<'a> {
    grid: &'a Grid3,
    dims: [usize; 3],
    threshold: f64,
}

impl<'a> Padded<'a> {
    fn new(grid: &'a Grid3, threshold: f64) -> Self {
        let (nx, ny, nz) = grid.shape();
        Self {
            grid,
            dims: [nx + 2, ny + 2, nz + 2],
            threshold,
        }
    }

    fn value(&self, p: [usize; 3]) -> f64 {
        if (0..3).any(|a| p[a] == 0 || p[a] == self.dims[a] - 1) {
            return 0.0;
        }
        self.grid.get(p[0] - 1, p[1] - 1, p[2] - 1).unwrap_or(0.0)
    }

    fn inside(&self, p: [usize; 3]) -> bool {
        self.value(p) > self.threshold
    }

    fn cell_dims(&self) -> [usize; 3] {
        [self.dims[0] - 1, self.dims[1] - 1, self.dims[2] - 1]
    }

    fn cell_index(&self, c: [usize; 3]) -> usize {
        let d = self.cell_dims();
        c[0] + d[0] * (c[1] + d[1] * c[2])
    }
}

/// Extract the mesh of `{v > threshold}`. Voxel size scales sample
/// positions: sample `i` of the unpadded grid sits at `(i + 0.5) * size`.
pub fn extract(grid: &Grid3, threshold: f64, voxel_size_m: [f64; 3]) -> Mesh {
    if grid.is_empty() {
        return Mesh::default();
    }
    let padded = Padded::new(grid, threshold);
    let cd = padded.cell_dims();
    let mut cell_vertex: Vec<Option<usize>> = vec![None; cd[0] * cd[1] * cd[2]];
    let mut mesh = Mesh::default();

    for k in 0..cd[2] {
        for j in 0..cd[1] {
            for i in 0..cd[0] {
                if let Some(v) = cell_vertex_position(&padded, [i, j, k], voxel_size_m) {
                    cell_vertex[padded.cell_index([i, j, k])] = Some(mesh.vertices.len());
                    mesh.vertices.push(v);
                }
            }
        }
    }

    let vertex_at = |c: [usize; 3]| cell_vertex[padded.cell_index(c)];
    let d = padded.dims;
    for k in 1..d[2] - 1 {
        for j in 1..d[1] - 1 {
            for i in 0..d[0] - 1 {
                // Edge along x from (i, j, k) to (i + 1, j, k).
                let quad = [[i, j - 1, k - 1], [i, j, k - 1], [i, j, k], [i, j - 1, k]];
                emit(&mut mesh, &padded, [i, j, k], [i + 1, j, k], quad, vertex_at);
            }
        }
    }
    for k in 1..d[2] - 1 {
        for j in 0..d[1] - 1 {
            for i in 1..d[0] - 1 {
                let quad = [[i - 1, j, k - 1], [i - 1, j, k], [i, j, k], [i, j, k - 1]];
                emit(&mut mesh, &padded, [i, j, k], [i, j + 1, k], quad, vertex_at);
            }
        }
    }
    for k in 0..d[2] - 1 {
        for j in 1..d[1] - 1 {
            for i in 1..d[0] - 1 {
                let quad = [[i - 1, j - 1, k], [i, j - 1, k], [i, j, k], [i - 1, j, k]];
                emit(&mut mesh, &padded, [i, j, k], [i, j, k + 1], quad, vertex_at);
            }
        }
    }
    mesh
}

/// Two triangles for a crossing edge. `quad` is counter-clockwise seen from
/// the positive end of the edge; it is reversed when the inside is there.
fn emit(
    mesh: &mut Mesh,
    padded: &Padded<'_>,
    a: [usize; 3],
    b: [usize; 3],
    quad: [[usize; 3]; 4],
    vertex_at: impl Fn([usize; 3]) -> Option<usize>,
) {
    let (ia, ib) = (padded.inside(a), padded.inside(b));
    if ia == ib {
        return;
    }
    let mut q = [0usize; 4];
    for (slot, cell) in q.iter_mut().zip(quad) {
        match vertex_at(cell) {
            Some(v) => *slot = v,
            None => return,
        }
    }
    if !ia {
        q.reverse();
    }
    mesh.faces.push([q[0], q[1], q[2]]);
    mesh.faces.push([q[0], q[2], q[3]]);
}

fn cell_vertex_position(padded: &Padded<'_>, c: [usize; 3], size: [f64; 3]) -> Option<[f64; 3]> {
    let corner = |n: usize| {
        let o = CORNERS[n];
        [c[0] + o[0], c[1] + o[1], c[2] + o[2]]
    };
    let values: [f64; 8] = std::array::from_fn(|n| padded.value(corner(n)));
    let inside: [bool; 8] = std::array::from_fn(|n| values[n] > padded.threshold);
    if inside.iter().all(|&b| b) || inside.iter().all(|&b| !b) {
        return None;
    }

    let mut sum = [0.0; 3];
    let mut crossings = 0usize;
    for &(e0, e1) in &EDGES {
        if inside[e0] == inside[e1] {
            continue;
        }
        let (v0, v1) = (values[e0], values[e1]);
        let t = if (v1 - v0).abs() > f64::EPSILON {
            ((padded.threshold - v0) / (v1 - v0)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        let (p0, p1) = (corner(e0), corner(e1));
        for a in 0..3 {
            let x0 = p0[a] as f64;
            let x1 = p1[a] as f64;
            sum[a] += x0 + t * (x1 - x0);
        }
        crossings += 1;
    }
    let n = crossings as f64;
    // Padded sample p sits at (p - 1 + 0.5) * size.
    Some(std::array::from_fn(|a| (sum[a] / n - 0.5) * size[a]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_gives_empty_mesh() {
        let g = Grid3::filled(3, 3, 3, 0.1);
        let mesh = extract(&g, 0.5, [1.0; 3]);
        assert!(mesh.vertices.is_empty());
        assert!(mesh.faces.is_empty());
    }

    #[test]
    fn single_voxel_gives_closed_box() {
        let g = Grid3::filled(1, 1, 1, 1.0);
        let mesh = extract(&g, 0.5, [1.0; 3]);
        // Eight cells around the sample, six crossing edges, two triangles each.
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.faces.len(), 12);
    }

    #[test]
    fn face_indices_are_valid() {
        let g = Grid3::from_fn(4, 4, 3, |x, y, z| {
            if (1..3).contains(&x) && (1..3).contains(&y) && z < 2 {
                0.9
            } else {
                0.0
            }
        });
        let mesh = extract(&g, 0.5, [2.0, 2.0, 1.0]);
        assert!(!mesh.faces.is_empty());
        for f in &mesh.faces {
            assert!(f.iter().all(|&i| i < mesh.vertices.len()));
        }
    }
}
