//! Anomaly scenarios shared by the integration tests.
//!
//! Each scenario is one JSON document under `scenarios/`, shaped like a
//! pipeline input (`anomaly`, `layer_results`, `bounds`).

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

fn scenario_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios")
}

/// Deserialize scenario `name` (file stem, no extension).
///
/// # Panics
/// When the scenario is missing or does not match `T`; fixtures are part of
/// the test suite, so either is a test bug.
pub fn load_scenario<T: DeserializeOwned>(name: &str) -> T {
    let path = scenario_dir().join(format!("{name}.json"));
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("scenario {name} unreadable at {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("scenario {name} is malformed: {e}"))
}

/// Stems of every scenario, sorted.
pub fn scenario_names() -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(scenario_dir()) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension()? != "json" {
                return None;
            }
            path.file_stem()?.to_str().map(str::to_string)
        })
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::models::{AnomalyDescriptor, GeoBounds, LayerResults};

    #[derive(serde::Deserialize)]
    struct Scenario {
        anomaly: AnomalyDescriptor,
        #[serde(default)]
        layer_results: LayerResults,
        bounds: GeoBounds,
    }

    #[test]
    fn names_cover_every_scenario_file() {
        assert_eq!(
            scenario_names(),
            [
                "cavity",
                "convergent_layers",
                "degenerate_bounds",
                "inverted_bounds",
                "pyramidal",
                "sparse_layers",
            ]
        );
    }

    #[test]
    fn every_scenario_parses_into_core_types() {
        for name in scenario_names() {
            let scenario: Scenario = load_scenario(&name);
            assert!(!scenario.anomaly.id.is_empty(), "{name} has no anomaly id");
            assert!(scenario.bounds.lat_min.is_finite(), "{name}");
            let _ = scenario.layer_results;
        }
    }

    #[test]
    #[should_panic(expected = "scenario missing unreadable")]
    fn missing_scenario_panics_with_its_name() {
        let _: serde_json::Value = load_scenario("missing");
    }
}
