//! Emission factor table.
//!
//! Constant multipliers converting one unit of input (liter of fuel, kWh,
//! cubic meter, km shipped) into kg of CO₂-equivalent. Lookups are
//! case-insensitive and never fail: unrecognized selections fall back to a
//! documented default so a half-filled scenario still produces a figure.

/// kg CO₂ per kWh of grid electricity.
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.85;

/// kg CO₂ per cubic meter of natural gas.
pub const NATURAL_GAS_KG_PER_M3: f64 = 2.03;

/// Fallback for fuel types without a dedicated factor (cng, electric, ...).
pub const FUEL_FALLBACK_KG_PER_LITER: f64 = 2.5;

/// Fallback for shipping modes without a dedicated factor (rail, ...).
pub const SHIPPING_FALLBACK_KG_PER_KM: f64 = 0.1;

/// kg CO₂ per liter for a fuel selection.
pub fn fuel_factor(fuel_type: &str) -> f64 {
    if fuel_type.eq_ignore_ascii_case("diesel") {
        2.68
    } else if fuel_type.eq_ignore_ascii_case("petrol") {
        2.31
    } else {
        FUEL_FALLBACK_KG_PER_LITER
    }
}

/// kg CO₂ per km for a shipping mode selection.
pub fn shipping_factor(mode: &str) -> f64 {
    if mode.eq_ignore_ascii_case("truck") {
        0.10
    } else if mode.eq_ignore_ascii_case("ship") {
        0.03
    } else if mode.eq_ignore_ascii_case("air") {
        0.50
    } else {
        SHIPPING_FALLBACK_KG_PER_KM
    }
}
