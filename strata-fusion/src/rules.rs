//! Scientific consistency rules.
//!
//! Each rule bounds a cell's probability relative to its unruled baseline
//! (the weighted channel sum) instead of scaling the incoming value, so
//! reapplying the rules to their own output changes nothing.
//!
//! 1. Volume without persistence is not archaeology.
//! 2. Persistence without volume is not structure.
//! 3. Convergence increases confidence.

use strata_core::config::{FusionWeights, RuleThresholds};
use strata_core::models::RuleCounts;
use strata_core::Grid2;

use crate::channels::ChannelGrids;

/// Which rules fired for one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleHits {
    pub low_persistence: bool,
    pub persistence_without_volume: bool,
    pub convergence_bonus: bool,
}

impl RuleHits {
    pub fn any(&self) -> bool {
        self.low_persistence || self.persistence_without_volume || self.convergence_bonus
    }
}

/// Apply the three rules to `probability` in order.
pub fn apply(
    probability: &Grid2,
    channels: &ChannelGrids,
    weights: &FusionWeights,
    rules: &RuleThresholds,
) -> (Grid2, RuleCounts) {
    let baseline = channels.baseline(weights);
    let mut counts = RuleCounts::default();
    let (nx, ny) = channels.shape();
    let out = Grid2::from_fn(nx, ny, |x, y| {
        let p = probability.get(x, y).unwrap_or(0.0);
        let b = baseline.get(x, y).unwrap_or(0.0);
        let [volumetric, temporal, spatial, _] = channels.at(x, y);
        let (value, hits) = apply_cell(p, b, volumetric, temporal, spatial, rules);
        counts.low_persistence += usize::from(hits.low_persistence);
        counts.persistence_without_volume += usize::from(hits.persistence_without_volume);
        counts.convergence_bonus += usize::from(hits.convergence_bonus);
        value
    });
    (out, counts)
}

/// Rules for one cell, each bound applied on top of the previous one.
/// Every bound is a fixed multiple of `baseline`, so the result is a
/// clamp of `probability` and a second pass leaves it unchanged.
pub fn apply_cell(
    probability: f64,
    baseline: f64,
    volumetric: f64,
    temporal: f64,
    spatial: f64,
    rules: &RuleThresholds,
) -> (f64, RuleHits) {
    let mut hits = RuleHits::default();
    let mut value = probability;

    if temporal < rules.persistence_min {
        hits.low_persistence = true;
        value = value.min(baseline * rules.low_persistence_attenuation);
    }
    if volumetric < rules.low_volume_max && temporal > rules.high_persistence_min {
        hits.persistence_without_volume = true;
        value = value.min(baseline * rules.persistence_without_volume_attenuation);
    }
    if volumetric > rules.convergence_volumetric_min
        && temporal > rules.convergence_persistence_min
        && spatial > rules.convergence_coherence_min
    {
        hits.convergence_bonus = true;
        value = value.max((baseline * rules.convergence_bonus).min(1.0));
    }
    (value.clamp(0.0, 1.0), hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleThresholds {
        RuleThresholds::default()
    }

    #[test]
    fn low_persistence_attenuates() {
        let (v, hits) = apply_cell(0.6, 0.6, 0.8, 0.2, 0.5, &rules());
        assert!(hits.low_persistence && !hits.convergence_bonus);
        assert!((v - 0.18).abs() < 1e-12);
    }

    #[test]
    fn persistence_without_volume_attenuates_less() {
        let (v, hits) = apply_cell(0.5, 0.5, 0.1, 0.9, 0.5, &rules());
        assert!(hits.persistence_without_volume && !hits.low_persistence);
        assert!((v - 0.3).abs() < 1e-12);
    }

    #[test]
    fn convergence_bonus_is_capped() {
        let (v, hits) = apply_cell(0.9, 0.9, 0.9, 0.9, 0.9, &rules());
        assert!(hits.convergence_bonus);
        assert_eq!(v, 1.0);
        let (v, _) = apply_cell(0.6, 0.6, 0.7, 0.7, 0.6, &rules());
        assert!((v - 0.78).abs() < 1e-12);
    }

    #[test]
    fn thresholds_are_strict() {
        // Exactly at the persistence minimum: rule 1 does not fire.
        let (_, hits) = apply_cell(0.5, 0.5, 0.5, 0.4, 0.5, &rules());
        assert!(!hits.any());
    }

    #[test]
    fn reapplication_is_a_fixed_point() {
        for (v, t, s) in [(0.8, 0.2, 0.5), (0.1, 0.9, 0.3), (0.9, 0.9, 0.9), (0.5, 0.5, 0.5)] {
            let b = 0.4 * v + 0.3 * t + 0.2 * s;
            let (once, _) = apply_cell(b, b, v, t, s, &rules());
            let (twice, _) = apply_cell(once, b, v, t, s, &rules());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn overlapping_rules_all_apply_in_order() {
        let rules = RuleThresholds {
            persistence_min: 0.8,
            ..RuleThresholds::default()
        };
        // Persistence 0.7 is low for rule 1 yet high enough for rule 3.
        let (v, hits) = apply_cell(0.5, 0.5, 0.9, 0.7, 0.9, &rules);
        assert!(hits.low_persistence && hits.convergence_bonus);
        assert!((v - 0.65).abs() < 1e-12);
        let (again, _) = apply_cell(v, 0.5, 0.9, 0.7, 0.9, &rules);
        assert_eq!(v, again);

        // Rules 1 and 2 together keep the stronger attenuation.
        let rules = RuleThresholds {
            persistence_min: 0.9,
            ..RuleThresholds::default()
        };
        let (v, hits) = apply_cell(0.5, 0.5, 0.1, 0.8, 0.2, &rules);
        assert!(hits.low_persistence && hits.persistence_without_volume);
        assert!((v - 0.15).abs() < 1e-12);
    }

    #[test]
    fn overlapping_rules_are_counted_once_each() {
        let g = |v: f64| Grid2::filled(2, 2, v);
        let channels = ChannelGrids::new(g(0.9), g(0.7), g(0.9), g(0.5)).unwrap();
        let rules = RuleThresholds {
            persistence_min: 0.8,
            ..RuleThresholds::default()
        };
        let weights = FusionWeights::default();
        let baseline = channels.baseline(&weights);
        let (_, counts) = apply(&baseline, &channels, &weights, &rules);
        assert_eq!(counts.low_persistence, 4);
        assert_eq!(counts.convergence_bonus, 4);
        assert_eq!(counts.persistence_without_volume, 0);
    }
}
