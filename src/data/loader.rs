use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::Scenario;

pub fn load_scenario_from_path(path: impl AsRef<Path>) -> Result<Scenario> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading scenario file: {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing scenario file as JSON: {}", path.display()))
}

pub fn load_scenario_from_str(json: &str) -> Result<Scenario> {
    serde_json::from_str(json).context("failed to parse scenario JSON")
}
