//! Emission estimation engine.
//!
//! Four independent category aggregators reduce raw monthly inputs to kg
//! CO₂e/year, a totalizer folds them into a headline tons/year figure, and
//! credits/cost are derived under a fixed 1 credit = 1 ton policy. Every
//! derived number is a pure function of the inputs and the constant factor
//! table; a fresh result is built on each call and nothing is retained.

use serde::Serialize;

use super::factors::{
    fuel_factor, shipping_factor, ELECTRICITY_KG_PER_KWH, NATURAL_GAS_KG_PER_M3,
};
use super::inputs::{LogisticsInput, ManufacturingInput, OperationsInput, TransportInput};
use super::recommendations::recommend;

/// Fixed price per credit, currency units.
pub const CREDIT_UNIT_PRICE: f64 = 100.0;

const MONTHS_PER_YEAR: f64 = 12.0;
const WORKING_DAYS_PER_YEAR: f64 = 250.0;
const COMMUTE_KG_PER_PERSON_KM: f64 = 0.2;
const RAW_MATERIALS_KG_PER_TON: f64 = 0.5;
const WASTE_KG_PER_TON: f64 = 0.3;
const FACILITY_KG_PER_SQFT: f64 = 0.05;
const EMPLOYEE_KG_PER_YEAR: f64 = 4.0;
const PACKAGING_KG_PER_KG: f64 = 0.8;

/// Per-category annual totals, tons CO₂e/year.
///
/// Each figure is rounded independently from its own kg sum, so the four
/// values may not add up to the headline total, which is rounded once from
/// the unrounded sum. See [`EmissionBreakdown::sum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmissionBreakdown {
    pub transport: u64,
    pub manufacturing: u64,
    pub operations: u64,
    pub logistics: u64,
}

impl EmissionBreakdown {
    /// Sum of the four independently-rounded category figures. May differ
    /// from [`CalculationResult::total_emissions`] by rounding.
    pub fn sum(&self) -> u64 {
        self.transport + self.manufacturing + self.operations + self.logistics
    }
}

/// One complete calculation, superseded wholesale by the next invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Headline figure, tons CO₂e/year, rounded once from the kg sum.
    pub total_emissions: u64,

    /// Offset credits required; 1 credit = 1 ton.
    pub credits_needed: u64,

    /// Estimated purchase cost at the fixed unit price.
    pub estimated_cost: f64,

    pub breakdown: EmissionBreakdown,

    /// Reduction advisories, fixed order, 0-4 entries.
    pub recommended_actions: Vec<String>,
}

/// Annual transport emissions, kg CO₂e.
///
/// The fleet fuel term needs both a fuel selection and a positive
/// consumption; employee commute always counts.
pub fn transport_kg(input: &TransportInput) -> f64 {
    let mut kg = 0.0;
    if let Some(fuel) = input.selected_fuel() {
        if input.fuel_consumption > 0.0 {
            kg += input.fuel_consumption
                * fuel_factor(fuel)
                * input.vehicle_count
                * MONTHS_PER_YEAR;
        }
    }
    kg + input.employee_commute * WORKING_DAYS_PER_YEAR * COMMUTE_KG_PER_PERSON_KM
}

/// Annual manufacturing emissions, kg CO₂e.
pub fn manufacturing_kg(input: &ManufacturingInput) -> f64 {
    input.energy_consumption * ELECTRICITY_KG_PER_KWH * MONTHS_PER_YEAR
        + input.raw_materials * RAW_MATERIALS_KG_PER_TON
        + input.waste_generated * WASTE_KG_PER_TON
}

/// Annual operations emissions, kg CO₂e.
pub fn operations_kg(input: &OperationsInput) -> f64 {
    input.electricity_usage * ELECTRICITY_KG_PER_KWH * MONTHS_PER_YEAR
        + input.natural_gas_usage * NATURAL_GAS_KG_PER_M3 * MONTHS_PER_YEAR
        + input.facility_size * FACILITY_KG_PER_SQFT
        + input.employee_count * EMPLOYEE_KG_PER_YEAR
}

/// Annual logistics emissions, kg CO₂e.
///
/// The shipping term needs both a mode selection and a positive distance;
/// packaging always counts.
pub fn logistics_kg(input: &LogisticsInput) -> f64 {
    let mut kg = 0.0;
    if let Some(mode) = input.selected_mode() {
        if input.shipping_distance > 0.0 {
            kg += input.shipping_distance * shipping_factor(mode) * MONTHS_PER_YEAR;
        }
    }
    kg + input.packaging_materials * PACKAGING_KG_PER_KG
}

fn kg_to_tons(kg: f64) -> u64 {
    (kg / 1000.0).round() as u64
}

/// Run the full pipeline: aggregate, totalize, derive credits and cost, and
/// evaluate the recommendation rules. Never fails; absent or zero inputs
/// simply contribute zero.
pub fn calculate_emissions(
    transport: &TransportInput,
    manufacturing: &ManufacturingInput,
    operations: &OperationsInput,
    logistics: &LogisticsInput,
) -> CalculationResult {
    let transport_total = transport_kg(transport);
    let manufacturing_total = manufacturing_kg(manufacturing);
    let operations_total = operations_kg(operations);
    let logistics_total = logistics_kg(logistics);

    let total_emissions =
        kg_to_tons(transport_total + manufacturing_total + operations_total + logistics_total);
    let credits_needed = total_emissions;

    CalculationResult {
        total_emissions,
        credits_needed,
        estimated_cost: credits_needed as f64 * CREDIT_UNIT_PRICE,
        breakdown: EmissionBreakdown {
            transport: kg_to_tons(transport_total),
            manufacturing: kg_to_tons(manufacturing_total),
            operations: kg_to_tons(operations_total),
            logistics: kg_to_tons(logistics_total),
        },
        recommended_actions: recommend(transport, manufacturing, operations, logistics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::recommendations::{FLEET_ADVISORY, SHIPPING_ADVISORY};
    use approx::assert_relative_eq;

    fn zero() -> (
        TransportInput,
        ManufacturingInput,
        OperationsInput,
        LogisticsInput,
    ) {
        (
            TransportInput::default(),
            ManufacturingInput::default(),
            OperationsInput::default(),
            LogisticsInput::default(),
        )
    }

    #[test]
    fn test_zero_inputs_yield_zero_result() {
        let (t, m, o, l) = zero();
        let result = calculate_emissions(&t, &m, &o, &l);
        assert_eq!(result.total_emissions, 0);
        assert_eq!(result.credits_needed, 0);
        assert_eq!(result.estimated_cost, 0.0);
        assert_eq!(result.breakdown.sum(), 0);
        assert!(result.recommended_actions.is_empty());
    }

    #[test]
    fn test_transport_fuel_term_requires_selection_and_consumption() {
        // Consumption without a fuel type: only the commute term counts.
        let no_fuel = TransportInput {
            fuel_consumption: 5000.0,
            vehicle_count: 50.0,
            employee_commute: 100.0,
            ..Default::default()
        };
        assert_relative_eq!(transport_kg(&no_fuel), 100.0 * 250.0 * 0.2);

        // Fuel type without consumption: same.
        let no_consumption = TransportInput {
            fuel_type: Some("diesel".to_string()),
            vehicle_count: 50.0,
            employee_commute: 100.0,
            ..Default::default()
        };
        assert_relative_eq!(transport_kg(&no_consumption), 100.0 * 250.0 * 0.2);
    }

    #[test]
    fn test_diesel_fleet_worked_example() {
        // 5000 L/month diesel, 50 vehicles, 25000 person-km/month commute:
        // 5000 * 2.68 * 50 * 12 + 25000 * 250 * 0.2 = 9,290,000 kg = 9290 t.
        let transport = TransportInput {
            fuel_type: Some("diesel".to_string()),
            fuel_consumption: 5000.0,
            vehicle_count: 50.0,
            employee_commute: 25_000.0,
        };
        assert_relative_eq!(transport_kg(&transport), 9_290_000.0);

        let (_, m, o, l) = zero();
        let result = calculate_emissions(&transport, &m, &o, &l);
        assert_eq!(result.total_emissions, 9290);
        assert_eq!(result.breakdown.transport, 9290);
        assert_eq!(result.credits_needed, result.total_emissions);
        assert_eq!(result.estimated_cost, 929_000.0);
        assert!(result
            .recommended_actions
            .contains(&FLEET_ADVISORY.to_string()));
    }

    #[test]
    fn test_unknown_fuel_uses_fallback_factor() {
        let transport = TransportInput {
            fuel_type: Some("cng".to_string()),
            fuel_consumption: 1000.0,
            vehicle_count: 1.0,
            ..Default::default()
        };
        // 1000 * 2.5 * 1 * 12
        assert_relative_eq!(transport_kg(&transport), 30_000.0);
    }

    #[test]
    fn test_manufacturing_terms() {
        let input = ManufacturingInput {
            process_type: Some("steel".to_string()),
            energy_consumption: 100_000.0,
            raw_materials: 500.0,
            waste_generated: 50.0,
        };
        // 100000 * 0.85 * 12 + 500 * 0.5 + 50 * 0.3
        assert_relative_eq!(manufacturing_kg(&input), 1_020_265.0);
    }

    #[test]
    fn test_operations_terms() {
        let input = OperationsInput {
            electricity_usage: 25_000.0,
            natural_gas_usage: 5000.0,
            facility_size: 50_000.0,
            employee_count: 200.0,
        };
        // 25000 * 0.85 * 12 + 5000 * 2.03 * 12 + 50000 * 0.05 + 200 * 4
        assert_relative_eq!(operations_kg(&input), 255_000.0 + 121_800.0 + 2500.0 + 800.0);
    }

    #[test]
    fn test_logistics_shipping_term_requires_mode_and_distance() {
        let no_mode = LogisticsInput {
            shipping_distance: 10_000.0,
            packaging_materials: 1000.0,
            ..Default::default()
        };
        assert_relative_eq!(logistics_kg(&no_mode), 800.0);

        let with_mode = LogisticsInput {
            shipping_mode: Some("ship".to_string()),
            shipping_distance: 10_000.0,
            packaging_materials: 1000.0,
            ..Default::default()
        };
        // 10000 * 0.03 * 12 + 800
        assert_relative_eq!(logistics_kg(&with_mode), 4400.0);
    }

    #[test]
    fn test_air_shipping_triggers_advisory() {
        let logistics = LogisticsInput {
            shipping_mode: Some("air".to_string()),
            shipping_distance: 2000.0,
            ..Default::default()
        };
        let (t, m, o, _) = zero();
        let result = calculate_emissions(&t, &m, &o, &logistics);
        assert!(result.total_emissions > 0);
        assert!(result
            .recommended_actions
            .contains(&SHIPPING_ADVISORY.to_string()));
    }

    #[test]
    fn test_breakdown_rounds_independently_of_total() {
        // Two categories at 450 kg each round to 0 t individually, but the
        // 900 kg grand total rounds to 1 t.
        let transport = TransportInput {
            employee_commute: 9.0, // 9 * 250 * 0.2 = 450 kg
            ..Default::default()
        };
        let manufacturing = ManufacturingInput {
            raw_materials: 900.0, // 900 * 0.5 = 450 kg
            ..Default::default()
        };
        let (_, _, o, l) = zero();
        let result = calculate_emissions(&transport, &manufacturing, &o, &l);
        assert_eq!(result.breakdown.transport, 0);
        assert_eq!(result.breakdown.manufacturing, 0);
        assert_eq!(result.breakdown.sum(), 0);
        assert_eq!(result.total_emissions, 1);
    }

    #[test]
    fn test_deterministic_and_idempotent() {
        let transport = TransportInput {
            fuel_type: Some("petrol".to_string()),
            fuel_consumption: 1234.0,
            vehicle_count: 7.0,
            employee_commute: 321.0,
        };
        let manufacturing = ManufacturingInput {
            energy_consumption: 4567.0,
            raw_materials: 89.0,
            waste_generated: 12.0,
            ..Default::default()
        };
        let (_, _, o, l) = zero();
        let first = calculate_emissions(&transport, &manufacturing, &o, &l);
        let second = calculate_emissions(&transport, &manufacturing, &o, &l);
        assert_eq!(first, second);
    }

    #[test]
    fn test_monotonic_in_each_numeric_input() {
        let base = OperationsInput {
            electricity_usage: 1000.0,
            natural_gas_usage: 100.0,
            facility_size: 10_000.0,
            employee_count: 50.0,
        };
        let baseline = operations_kg(&base);

        let mut bumped = base.clone();
        bumped.electricity_usage += 1.0;
        assert!(operations_kg(&bumped) >= baseline);

        let mut bumped = base.clone();
        bumped.natural_gas_usage += 1.0;
        assert!(operations_kg(&bumped) >= baseline);

        let mut bumped = base.clone();
        bumped.facility_size += 1.0;
        assert!(operations_kg(&bumped) >= baseline);

        let mut bumped = base;
        bumped.employee_count += 1.0;
        assert!(operations_kg(&bumped) >= baseline);
    }
}
