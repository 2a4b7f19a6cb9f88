use serde::{Deserialize, Serialize};

/// Transport category inputs.
///
/// Numeric fields are monthly figures except where noted; all default to
/// zero. The fuel term is only counted when a fuel type is selected *and*
/// consumption is positive — either alone contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct TransportInput {
    /// Fuel selection ("diesel", "petrol", ...); unknown values use the
    /// fallback factor.
    pub fuel_type: Option<String>,

    /// Fleet fuel consumption, liters/month.
    pub fuel_consumption: f64,

    /// Vehicles in the fleet.
    pub vehicle_count: f64,

    /// Employee commute, person-km/month.
    pub employee_commute: f64,
}

impl TransportInput {
    /// The selected fuel type, treating an empty string as no selection.
    pub fn selected_fuel(&self) -> Option<&str> {
        selection(&self.fuel_type)
    }
}

/// Manufacturing category inputs. All terms are unconditional; the process
/// type is descriptive only and does not affect the figure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ManufacturingInput {
    /// Process description ("steel", "cement", ...). Not used in the math.
    pub process_type: Option<String>,

    /// Energy consumption, kWh/month.
    pub energy_consumption: f64,

    /// Raw material throughput, tons/month.
    pub raw_materials: f64,

    /// Waste generated, tons/month.
    pub waste_generated: f64,
}

/// Operations category inputs. All terms are unconditional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct OperationsInput {
    /// Electricity usage, kWh/month.
    pub electricity_usage: f64,

    /// Natural gas usage, m³/month.
    pub natural_gas_usage: f64,

    /// Facility size, sq ft.
    pub facility_size: f64,

    /// Headcount.
    pub employee_count: f64,
}

/// Logistics category inputs.
///
/// The shipping term is only counted when a mode is selected *and* the
/// distance is positive; packaging is unconditional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct LogisticsInput {
    /// Shipping mode ("truck", "ship", "air", ...); unknown values use the
    /// fallback factor.
    pub shipping_mode: Option<String>,

    /// Shipping distance, km/month.
    pub shipping_distance: f64,

    /// Packaging description ("cardboard", ...). Not used in the math.
    pub packaging_type: Option<String>,

    /// Packaging materials, kg/month.
    pub packaging_materials: f64,
}

impl LogisticsInput {
    /// The selected shipping mode, treating an empty string as no selection.
    pub fn selected_mode(&self) -> Option<&str> {
        selection(&self.shipping_mode)
    }
}

/// Treat `None` and `Some("")` the same: no selection made.
pub(crate) fn selection(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_all_zero() {
        let t = TransportInput::default();
        assert_eq!(t.fuel_type, None);
        assert_eq!(t.fuel_consumption, 0.0);
        assert_eq!(t.vehicle_count, 0.0);
        assert_eq!(t.employee_commute, 0.0);
    }

    #[test]
    fn test_empty_string_is_no_selection() {
        let t = TransportInput {
            fuel_type: Some("".to_string()),
            ..Default::default()
        };
        assert_eq!(t.selected_fuel(), None);

        let l = LogisticsInput {
            shipping_mode: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(l.selected_mode(), None);
    }

    #[test]
    fn test_partial_yaml_parse_fills_defaults() {
        let yaml = r#"
fuel_type: diesel
fuel_consumption: 5000
"#;
        let t: TransportInput = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(t.selected_fuel(), Some("diesel"));
        assert_eq!(t.fuel_consumption, 5000.0);
        assert_eq!(t.vehicle_count, 0.0);
        assert_eq!(t.employee_commute, 0.0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "fuel_typo: diesel";
        assert!(serde_saphyr::from_str::<TransportInput>(yaml).is_err());
    }
}
