use std::fmt;

use serde::{Deserialize, Serialize};

/// Abstract geometric archetype. A shape family, never a cultural or
/// functional label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MorphologicalClass {
    TruncatedPyramidal,
    SteppedPlatform,
    LinearCompact,
    CavityVoid,
    EmbankmentMound,
    OrthogonalNetwork,
    UndefinedVolume,
}

impl MorphologicalClass {
    pub const ALL: [MorphologicalClass; 7] = [
        Self::TruncatedPyramidal,
        Self::SteppedPlatform,
        Self::LinearCompact,
        Self::CavityVoid,
        Self::EmbankmentMound,
        Self::OrthogonalNetwork,
        Self::UndefinedVolume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TruncatedPyramidal => "truncated-pyramidal",
            Self::SteppedPlatform => "stepped-platform",
            Self::LinearCompact => "linear-compact",
            Self::CavityVoid => "cavity-void",
            Self::EmbankmentMound => "embankment-mound",
            Self::OrthogonalNetwork => "orthogonal-network",
            Self::UndefinedVolume => "undefined-volume",
        }
    }

    /// Only the cavity archetype populates void probability.
    pub fn has_void(&self) -> bool {
        matches!(self, Self::CavityVoid)
    }

    /// Stable small integer, used to salt texture noise per class.
    pub fn ordinal(&self) -> u64 {
        match self {
            Self::TruncatedPyramidal => 0,
            Self::SteppedPlatform => 1,
            Self::LinearCompact => 2,
            Self::CavityVoid => 3,
            Self::EmbankmentMound => 4,
            Self::OrthogonalNetwork => 5,
            Self::UndefinedVolume => 6,
        }
    }
}

impl fmt::Display for MorphologicalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
