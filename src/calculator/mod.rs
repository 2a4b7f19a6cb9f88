pub mod engine;
pub mod factors;
pub mod inputs;
pub mod recommendations;

pub use engine::{calculate_emissions, CalculationResult, EmissionBreakdown, CREDIT_UNIT_PRICE};
pub use inputs::{LogisticsInput, ManufacturingInput, OperationsInput, TransportInput};
pub use recommendations::recommend;
