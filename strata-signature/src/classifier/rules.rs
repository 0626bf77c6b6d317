//! The decision table. Order is priority.

use strata_core::models::{MorphologicalClass, SpatialSignature};

/// One row of the decision table.
#[derive(Debug, Clone, Copy)]
pub struct MorphologyRule {
    pub class: MorphologicalClass,
    pub name: &'static str,
    pub matches: fn(&SpatialSignature) -> bool,
}

pub const RULES: [MorphologyRule; 6] = [
    MorphologyRule {
        class: MorphologicalClass::TruncatedPyramidal,
        name: "symmetric_compact_persistent",
        matches: truncated_pyramidal,
    },
    MorphologyRule {
        class: MorphologicalClass::SteppedPlatform,
        name: "symmetric_large_terraced",
        matches: stepped_platform,
    },
    MorphologyRule {
        class: MorphologicalClass::LinearCompact,
        name: "elongated_anisotropic",
        matches: linear_compact,
    },
    MorphologyRule {
        class: MorphologicalClass::CavityVoid,
        name: "smooth_radar_thermal_contrast",
        matches: cavity_void,
    },
    MorphologyRule {
        class: MorphologicalClass::EmbankmentMound,
        name: "gentle_compact_thermally_quiet",
        matches: embankment_mound,
    },
    MorphologyRule {
        class: MorphologicalClass::OrthogonalNetwork,
        name: "large_rough_coherent",
        matches: orthogonal_network,
    },
];

fn truncated_pyramidal(s: &SpatialSignature) -> bool {
    s.symmetry_index >= 0.75
        && s.elongation_ratio < 1.5
        && s.area_m2 >= 200.0
        && s.temporal_persistence >= 0.6
        && s.thermal_amplitude < 8.0
}

fn stepped_platform(s: &SpatialSignature) -> bool {
    s.symmetry_index >= 0.6
        && s.elongation_ratio < 2.0
        && s.area_m2 >= 1_000.0
        && s.residual_slope >= 15.0
}

fn linear_compact(s: &SpatialSignature) -> bool {
    s.elongation_ratio >= 3.0 && s.anisotropy_factor >= 0.6
}

fn cavity_void(s: &SpatialSignature) -> bool {
    s.sar_roughness < 0.3 && s.thermal_amplitude >= 8.0
}

fn embankment_mound(s: &SpatialSignature) -> bool {
    s.area_m2 >= 100.0
        && s.elongation_ratio < 2.5
        && s.residual_slope < 10.0
        && s.thermal_amplitude < 5.0
        && s.symmetry_index >= 0.4
}

fn orthogonal_network(s: &SpatialSignature) -> bool {
    s.area_m2 >= 2_000.0
        && s.sar_roughness >= 0.6
        && s.temporal_coherence >= 0.6
        && s.symmetry_index >= 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_class_except_undefined_has_a_rule() {
        for class in MorphologicalClass::ALL {
            let has_rule = RULES.iter().any(|r| r.class == class);
            assert_eq!(has_rule, class != MorphologicalClass::UndefinedVolume);
        }
    }

    #[test]
    fn rule_names_are_unique() {
        for (i, a) in RULES.iter().enumerate() {
            for b in &RULES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
