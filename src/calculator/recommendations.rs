//! Threshold-based reduction advisories.
//!
//! Each rule is an independent predicate over the raw category inputs. Rules
//! are evaluated in a fixed order and each true predicate appends exactly one
//! fixed advisory, so the output list is 0-4 entries long and stably ordered
//! no matter which subset fires.

use super::inputs::{LogisticsInput, ManufacturingInput, OperationsInput, TransportInput};

pub const FLEET_ADVISORY: &str = "Consider switching to electric or hybrid vehicles for fleet";
pub const RENEWABLES_ADVISORY: &str = "Implement solar panels or renewable energy sources";
pub const WASTE_ADVISORY: &str = "Optimize waste management and recycling processes";
pub const SHIPPING_ADVISORY: &str = "Consider sea or land transportation for non-urgent shipments";

/// Fleet advisory threshold, liters/month.
const FUEL_CONSUMPTION_THRESHOLD: f64 = 1000.0;

/// Renewables advisory threshold, kWh/month.
const ELECTRICITY_THRESHOLD: f64 = 10_000.0;

/// Waste advisory threshold, tons/month.
const WASTE_THRESHOLD: f64 = 100.0;

/// Evaluate all rules against the raw inputs, in fixed order.
pub fn recommend(
    transport: &TransportInput,
    manufacturing: &ManufacturingInput,
    operations: &OperationsInput,
    logistics: &LogisticsInput,
) -> Vec<String> {
    let mut actions = Vec::new();

    if transport.fuel_consumption > FUEL_CONSUMPTION_THRESHOLD {
        actions.push(FLEET_ADVISORY.to_string());
    }
    if operations.electricity_usage > ELECTRICITY_THRESHOLD {
        actions.push(RENEWABLES_ADVISORY.to_string());
    }
    if manufacturing.waste_generated > WASTE_THRESHOLD {
        actions.push(WASTE_ADVISORY.to_string());
    }
    if logistics
        .selected_mode()
        .is_some_and(|m| m.eq_ignore_ascii_case("air"))
    {
        actions.push(SHIPPING_ADVISORY.to_string());
    }

    actions
}
