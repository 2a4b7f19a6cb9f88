use serde::{Deserialize, Serialize};

use crate::calculator::{LogisticsInput, ManufacturingInput, OperationsInput, TransportInput};
use crate::sequestration::EcosystemInput;

/// One input snapshot for the calculators.
///
/// Every section is optional in the file; omitted sections fall back to
/// all-zero inputs, which contribute nothing to the totals. The `ecosystem`
/// section is only needed for `predict`.
///
/// Example YAML:
/// ```yaml
/// transport:
///   fuel_type: diesel
///   fuel_consumption: 5000
///   vehicle_count: 50
///   employee_commute: 25000
/// operations:
///   electricity_usage: 25000
/// ecosystem:
///   soil_type: alluvial
///   trees_count: 12500
///   area_size: 450
///   rainfall: 1200
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Scenario {
    pub transport: TransportInput,
    pub manufacturing: ManufacturingInput,
    pub operations: OperationsInput,
    pub logistics: LogisticsInput,
    pub ecosystem: Option<EcosystemInput>,
}
