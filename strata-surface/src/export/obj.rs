use std::fmt::Write;

use strata_core::models::{Disclaimer, GeometricModel};

/// Plain-text vertex/face mesh. The first line is the summary header; the
/// disclaimer follows as comment lines. Face indices are 1-based.
pub fn to_obj(model: &GeometricModel, disclaimer: &Disclaimer) -> String {
    let mut out = String::with_capacity(32 * (model.vertex_count() + model.face_count()) + 512);
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "# strata mesh volume_m3={:.3} vertices={} faces={}",
        model.statistics.estimated_volume_m3,
        model.vertex_count(),
        model.face_count()
    );
    for line in disclaimer.comment_lines() {
        let _ = writeln!(out, "# {line}");
    }
    for v in &model.vertices {
        let _ = writeln!(out, "v {:.4} {:.4} {:.4}", v[0], v[1], v[2]);
    }
    for f in &model.faces {
        let _ = writeln!(out, "f {} {} {}", f[0] + 1, f[1] + 1, f[2] + 1);
    }
    out
}
