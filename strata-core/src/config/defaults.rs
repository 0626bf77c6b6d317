// Single source of truth for all default values.

// --- Volumetric ---
pub const DEFAULT_VOXEL_RESOLUTION_M: f64 = 1.0;
pub const DEFAULT_MAX_HORIZONTAL_VOXELS: usize = 64;
pub const DEFAULT_MAX_VERTICAL_VOXELS: usize = 32;
pub const DEFAULT_MIN_VERTICAL_VOXELS: usize = 4;
pub const DEFAULT_HEIGHT_FACTOR: f64 = 0.15;
pub const DEFAULT_SMOOTHING_RADIUS: usize = 1;
pub const DEFAULT_TEXTURE_AMPLITUDE: f64 = 0.02;

// --- Surface ---
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;

// --- Fusion weights ---
pub const DEFAULT_WEIGHT_VOLUMETRIC: f64 = 0.40;
pub const DEFAULT_WEIGHT_TEMPORAL: f64 = 0.30;
pub const DEFAULT_WEIGHT_SPATIAL: f64 = 0.20;
pub const DEFAULT_WEIGHT_SPECTRAL: f64 = 0.10;

// --- Fusion rules ---
pub const DEFAULT_PERSISTENCE_MIN: f64 = 0.4;
pub const DEFAULT_LOW_PERSISTENCE_ATTENUATION: f64 = 0.3;
pub const DEFAULT_LOW_VOLUME_MAX: f64 = 0.2;
pub const DEFAULT_HIGH_PERSISTENCE_MIN: f64 = 0.7;
pub const DEFAULT_PERSISTENCE_WITHOUT_VOLUME_ATTENUATION: f64 = 0.6;
pub const DEFAULT_CONVERGENCE_VOLUMETRIC_MIN: f64 = 0.5;
pub const DEFAULT_CONVERGENCE_PERSISTENCE_MIN: f64 = 0.6;
pub const DEFAULT_CONVERGENCE_COHERENCE_MIN: f64 = 0.5;
pub const DEFAULT_CONVERGENCE_BONUS: f64 = 1.3;

// --- Arbitration ---
pub const DEFAULT_ARBITRATION_MODEL: &str = "consistency-auditor";
pub const DEFAULT_ARBITRATION_API_KEY_ENV: &str = "STRATA_REASONING_API_KEY";
pub const DEFAULT_ARBITRATION_TIMEOUT_MS: u64 = 5_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
