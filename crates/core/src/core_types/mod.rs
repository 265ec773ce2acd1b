//! Core types: unit-tagged quantities and diagnostic results

pub mod diagnostic;
pub mod pressure;
pub mod temperature;
pub mod units;

pub use diagnostic::Diagnostic;
pub use pressure::{Pressure, PressureUnit};
pub use temperature::{Temperature, TemperatureUnit};
pub use units::*;
