/// Metres per degree of latitude (and of longitude at the equator).
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Uncertainty assigned to every voxel of a degenerate (single-voxel) field.
pub const DEGENERATE_UNCERTAINTY: f64 = 1.0;

/// Signature confidence of the low-confidence default signature.
pub const DEFAULT_SIGNATURE_CONFIDENCE: f64 = 0.3;

/// Neutral value substituted for every absent probability-type field.
pub const MIDPOINT: f64 = 0.5;

/// Confidence-layer thresholds: core, probable, peripheral.
pub const CORE_THRESHOLD: f64 = 0.7;
pub const PROBABLE_THRESHOLD: f64 = 0.5;
pub const PERIPHERAL_THRESHOLD: f64 = 0.3;

/// Non-claims carried by every output document.
pub const NON_CLAIMS: &[&str] = &[
    "no architectural detail is asserted",
    "no cultural or chronological attribution is made",
    "no certainty is claimed: outputs describe a possibility space",
];
