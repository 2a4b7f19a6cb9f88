//! Carbon emission estimation and offset credit derivation.
//!
//! The core is pure and synchronous: structured category inputs go in,
//! emission totals, credit requirements, cost estimates, and rule-based
//! advisories come out. No persistence, no clock, no shared state — each
//! calculation is a fresh function of its inputs and the constant factor
//! table.

pub mod advisor;
pub mod calculator;
pub mod output;
pub mod scenario;
pub mod sequestration;
