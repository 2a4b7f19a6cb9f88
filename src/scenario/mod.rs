mod init;
mod schema;

pub use init::write_starter_scenario;
pub use schema::Scenario;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/offsetkit/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("offsetkit")
}

/// Get the default scenario file path (~/.config/offsetkit/scenario.yaml)
pub fn get_scenario_path() -> PathBuf {
    get_config_dir().join("scenario.yaml")
}

/// Load a scenario from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to the scenario file. If None, uses the default
///   path (~/.config/offsetkit/scenario.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - The scenario file does not exist
/// - The scenario file cannot be read
/// - The YAML cannot be parsed
pub fn load_scenario(path: Option<PathBuf>) -> Result<Scenario> {
    let scenario_path = path.unwrap_or_else(get_scenario_path);

    if !scenario_path.exists() {
        anyhow::bail!(
            "Scenario file not found at {}. Run `offsetkit init` to create one.",
            scenario_path.display()
        );
    }

    let content = fs::read_to_string(&scenario_path)
        .with_context(|| format!("Failed to read scenario file at {}", scenario_path.display()))?;

    let scenario: Scenario = serde_saphyr::from_str(&content).with_context(|| {
        format!(
            "Failed to parse scenario: invalid YAML in {}",
            scenario_path.display()
        )
    })?;

    Ok(scenario)
}
