//! Physics formulas for single-observation diagnostics
//!
//! Free functions over unit-tagged quantities. Each converts its inputs to
//! the units the formula is defined in and tags the result with its true
//! unit. `weather::Atmosphere` resolves ambient inputs and delegates here.

pub mod comfort;
pub mod moisture;
pub mod thermodynamics;

pub use comfort::{heat_index, wind_chill};
pub use moisture::{dew_point, mixing_ratio, relative_humidity, vapor_pressure};
pub use thermodynamics::{equivalent_potential_temperature, potential_temperature, virtual_temperature};
