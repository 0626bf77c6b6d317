use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::METERS_PER_DEGREE;
use crate::errors::{GeometryError, StrataResult};

/// Per-layer sensor results keyed by layer name.
///
/// Ordered so that every reduction over layers is deterministic.
pub type LayerResults = BTreeMap<String, LayerResult>;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Axis-aligned geographic bounds in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl GeoBounds {
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    /// Reject bounds for which no safe default exists: non-finite values,
    /// coordinates off the globe, or inverted ranges.
    ///
    /// Equal min/max is legal here; see [`GeoBounds::is_degenerate`].
    pub fn validate(&self) -> StrataResult<()> {
        let all = [self.lat_min, self.lat_max, self.lon_min, self.lon_max];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::InvalidBounds {
                reason: format!("non-finite coordinate in {all:?}"),
            }
            .into());
        }
        if self.lat_min < -90.0 || self.lat_max > 90.0 {
            return Err(GeometryError::InvalidBounds {
                reason: format!("latitude outside [-90, 90]: {}..{}", self.lat_min, self.lat_max),
            }
            .into());
        }
        if self.lon_min < -180.0 || self.lon_max > 180.0 {
            return Err(GeometryError::InvalidBounds {
                reason: format!(
                    "longitude outside [-180, 180]: {}..{}",
                    self.lon_min, self.lon_max
                ),
            }
            .into());
        }
        if self.lat_min > self.lat_max || self.lon_min > self.lon_max {
            return Err(GeometryError::InvalidBounds {
                reason: format!(
                    "inverted bounds: lat {}..{}, lon {}..{}",
                    self.lat_min, self.lat_max, self.lon_min, self.lon_max
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Zero extent along either axis.
    pub fn is_degenerate(&self) -> bool {
        self.lat_max - self.lat_min <= 0.0 || self.lon_max - self.lon_min <= 0.0
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            lat: (self.lat_min + self.lat_max) / 2.0,
            lon: (self.lon_min + self.lon_max) / 2.0,
        }
    }

    pub fn origin(&self) -> GeoPoint {
        GeoPoint {
            lat: self.lat_min,
            lon: self.lon_min,
        }
    }

    /// Metric extent `(east_west_m, north_south_m)`, longitude scaled by the
    /// cosine of the mid-latitude.
    pub fn extent_m(&self) -> (f64, f64) {
        let mid_lat = self.center().lat.to_radians();
        let ew = (self.lon_max - self.lon_min) * METERS_PER_DEGREE * mid_lat.cos();
        let ns = (self.lat_max - self.lat_min) * METERS_PER_DEGREE;
        (ew.max(0.0), ns.max(0.0))
    }

    pub fn area_m2(&self) -> f64 {
        let (ew, ns) = self.extent_m();
        ew * ns
    }
}

/// Anomaly descriptor supplied by the upstream detection collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyDescriptor {
    pub id: String,
    pub area_m2: Option<f64>,
    pub length_m: Option<f64>,
    pub width_m: Option<f64>,
    pub bounds: Option<GeoBounds>,
}

/// Result record of one sensor layer. Every field is optional; absent
/// values are replaced by documented defaults downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerResult {
    pub archaeological_probability: Option<f64>,
    pub geometric_coherence: Option<f64>,
    pub temporal_persistence: Option<f64>,
    pub natural_explanation_score: Option<f64>,
    /// Diurnal thermal amplitude, kelvin.
    pub thermal_amplitude_k: Option<f64>,
    /// Normalised SAR backscatter roughness.
    pub sar_roughness: Option<f64>,
    /// Residual slope after trend removal, degrees.
    pub residual_slope_deg: Option<f64>,
    /// Multi-temporal interferometric coherence.
    pub coherence: Option<f64>,
}

impl LayerResult {
    /// Shorthand for the four probability fields of the input contract.
    pub fn with_probabilities(
        archaeological_probability: f64,
        geometric_coherence: f64,
        temporal_persistence: f64,
        natural_explanation_score: f64,
    ) -> Self {
        Self {
            archaeological_probability: Some(archaeological_probability),
            geometric_coherence: Some(geometric_coherence),
            temporal_persistence: Some(temporal_persistence),
            natural_explanation_score: Some(natural_explanation_score),
            ..Self::default()
        }
    }
}
