use strata_core::models::{ConsistencyReport, RecommendedAdjustments, VolumetricField};

/// Apply a report's recommended adjustments to `field`, producing a new
/// field with recomputed confidence layers. The boost is clipped to
/// [0.5, 1.5] and the uncertainty increase to [0, 1].
pub fn apply_adjustments(field: &VolumetricField, report: &ConsistencyReport) -> VolumetricField {
    let adj = report.adjustments;
    let boost = finite_or(adj.probability_boost, 1.0).clamp(
        RecommendedAdjustments::BOOST_MIN,
        RecommendedAdjustments::BOOST_MAX,
    );
    let increase = finite_or(adj.uncertainty_increase, 0.0).clamp(0.0, 1.0);
    field.rescaled(boost, increase)
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}
