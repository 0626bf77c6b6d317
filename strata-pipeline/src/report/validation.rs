//! Recommended geophysical validation methods per morphological class.

use std::fmt;

use serde::{Deserialize, Serialize};
use strata_core::models::MorphologicalClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMethod {
    GroundPenetratingRadar,
    ElectricalResistivityTomography,
    Magnetometry,
    LidarMicrotopography,
    SeismicRefraction,
    MicroGravimetry,
    ElectromagneticInduction,
}

impl ValidationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GroundPenetratingRadar => "ground_penetrating_radar",
            Self::ElectricalResistivityTomography => "electrical_resistivity_tomography",
            Self::Magnetometry => "magnetometry",
            Self::LidarMicrotopography => "lidar_microtopography",
            Self::SeismicRefraction => "seismic_refraction",
            Self::MicroGravimetry => "micro_gravimetry",
            Self::ElectromagneticInduction => "electromagnetic_induction",
        }
    }
}

impl fmt::Display for ValidationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed mapping, in recommended order.
pub fn validation_methods(class: MorphologicalClass) -> &'static [ValidationMethod] {
    use ValidationMethod::*;
    match class {
        MorphologicalClass::TruncatedPyramidal => &[
            GroundPenetratingRadar,
            ElectricalResistivityTomography,
            Magnetometry,
        ],
        MorphologicalClass::SteppedPlatform => &[
            GroundPenetratingRadar,
            ElectricalResistivityTomography,
            LidarMicrotopography,
        ],
        MorphologicalClass::LinearCompact => &[Magnetometry, GroundPenetratingRadar],
        MorphologicalClass::CavityVoid => &[SeismicRefraction, MicroGravimetry],
        MorphologicalClass::EmbankmentMound => &[
            ElectricalResistivityTomography,
            Magnetometry,
            LidarMicrotopography,
        ],
        MorphologicalClass::OrthogonalNetwork => &[
            Magnetometry,
            GroundPenetratingRadar,
            ElectromagneticInduction,
        ],
        MorphologicalClass::UndefinedVolume => &[Magnetometry, ElectricalResistivityTomography],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cavity_maps_to_seismic_and_gravimetry() {
        let methods: Vec<&str> = validation_methods(MorphologicalClass::CavityVoid)
            .iter()
            .map(ValidationMethod::as_str)
            .collect();
        assert_eq!(methods, ["seismic_refraction", "micro_gravimetry"]);
    }

    #[test]
    fn every_class_has_methods() {
        for class in MorphologicalClass::ALL {
            assert!(!validation_methods(class).is_empty(), "{class} has no methods");
        }
    }

    #[test]
    fn serde_name_matches_as_str() {
        let json = serde_json::to_string(&ValidationMethod::LidarMicrotopography).unwrap();
        assert_eq!(json, "\"lidar_microtopography\"");
    }
}
