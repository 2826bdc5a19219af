//! Scenario loader

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::{Scenario, ScenarioSpec};

/// Load a scenario from a JSON file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .context("Invalid scenario file name")?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario at {}", path.display()))?;
    let spec: ScenarioSpec = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse scenario at {}", path.display()))?;

    Ok(Scenario {
        name,
        path: path.to_path_buf(),
        spec,
    })
}

/// List scenario files (`*.json`) in a directory, sorted by file name
pub fn scenario_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read scenarios directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    Ok(paths)
}

/// Load every scenario in a directory, failing on the first malformed file
pub fn load_scenarios(dir: &Path) -> Result<Vec<Scenario>> {
    scenario_paths(dir)?
        .iter()
        .map(|path| load_scenario(path))
        .collect()
}
