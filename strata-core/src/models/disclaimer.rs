use serde::{Deserialize, Serialize};

use crate::constants::NON_CLAIMS;
use crate::models::InferenceLevel;

/// Reconstruction level shown when no volume was produced at all.
pub const NO_RECONSTRUCTION: &str = "no reconstruction: input rejected before inference";

/// Disclaimer block carried by every output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disclaimer {
    pub reconstruction_level: String,
    pub non_claims: Vec<String>,
}

impl Disclaimer {
    pub fn for_level(level: InferenceLevel) -> Self {
        Self::with_level(level.description())
    }

    /// Disclaimer for outcomes that carry no field.
    pub fn no_reconstruction() -> Self {
        Self::with_level(NO_RECONSTRUCTION)
    }

    /// Mesh-file comment lines, one per entry, without the leading `#`.
    pub fn comment_lines(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(format!("reconstruction level: {}", self.reconstruction_level)).chain(
            self.non_claims
                .iter()
                .map(|claim| format!("non-claim: {claim}")),
        )
    }

    fn with_level(level: &str) -> Self {
        Self {
            reconstruction_level: level.to_string(),
            non_claims: NON_CLAIMS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_disclaimer_lists_all_non_claims() {
        for d in [
            Disclaimer::for_level(InferenceLevel::Constrained),
            Disclaimer::no_reconstruction(),
        ] {
            assert_eq!(d.non_claims.len(), NON_CLAIMS.len());
        }
    }

    #[test]
    fn comment_lines_start_with_the_level() {
        let d = Disclaimer::for_level(InferenceLevel::Exploratory);
        let lines: Vec<String> = d.comment_lines().collect();
        assert_eq!(lines.len(), 1 + NON_CLAIMS.len());
        assert!(lines[0].contains(InferenceLevel::Exploratory.description()));
        assert!(lines[1].starts_with("non-claim: "));
    }
}
