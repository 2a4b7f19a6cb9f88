use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::get_scenario_path;

/// Starter scenario mirroring the form placeholders: a mid-size operation
/// with a diesel fleet, plus an ecosystem section for `predict`.
const STARTER_SCENARIO: &str = "\
# offsetkit scenario
# Numeric fields are monthly figures unless noted. Delete or zero out
# anything that does not apply; omitted fields count as zero.

transport:
  fuel_type: diesel        # diesel | petrol | cng | electric
  fuel_consumption: 5000   # liters/month
  vehicle_count: 50
  employee_commute: 25000  # person-km/month

manufacturing:
  process_type: steel
  energy_consumption: 100000  # kWh/month
  raw_materials: 500          # tons/month
  waste_generated: 50         # tons/month

operations:
  electricity_usage: 25000    # kWh/month
  natural_gas_usage: 5000     # m3/month
  facility_size: 50000        # sq ft
  employee_count: 200

logistics:
  shipping_mode: truck        # truck | ship | air | rail
  shipping_distance: 10000    # km/month
  packaging_type: cardboard
  packaging_materials: 1000   # kg/month

# Only needed for `offsetkit predict`.
ecosystem:
  soil_type: alluvial         # alluvial | coastal | ...
  trees_count: 12500
  area_size: 450              # hectares
  rainfall: 1200              # mm/year
";

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    print!("{} [{}]: ", message, hint);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Write a commented starter scenario file.
///
/// If `path` is None, uses the default scenario path. Prompts before
/// overwriting an existing file.
pub fn write_starter_scenario(path: Option<PathBuf>) -> Result<()> {
    let scenario_path = path.unwrap_or_else(get_scenario_path);

    if scenario_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Scenario already exists at {}. Overwrite?",
                scenario_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = scenario_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&scenario_path, STARTER_SCENARIO)
        .with_context(|| format!("Failed to write scenario to {}", scenario_path.display()))?;

    println!("Scenario written to {}", scenario_path.display());
    println!("Edit it to match your operation, then run `offsetkit report`.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;

    #[test]
    fn test_starter_scenario_parses() {
        let scenario: Scenario = serde_saphyr::from_str(STARTER_SCENARIO).unwrap();
        assert_eq!(scenario.transport.selected_fuel(), Some("diesel"));
        assert_eq!(scenario.operations.employee_count, 200.0);
        assert!(scenario.ecosystem.is_some());
    }

    #[test]
    fn test_starter_scenario_produces_positive_totals() {
        let scenario: Scenario = serde_saphyr::from_str(STARTER_SCENARIO).unwrap();
        let result = crate::calculator::calculate_emissions(
            &scenario.transport,
            &scenario.manufacturing,
            &scenario.operations,
            &scenario.logistics,
        );
        assert!(result.total_emissions > 0);
        assert_eq!(result.credits_needed, result.total_emissions);
    }
}
