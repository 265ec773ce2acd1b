//! Atmospheric Diagnostics Core Library
//!
//! Unit-aware thermodynamic calculations for a single surface observation:
//! temperature and pressure conversion, vapor pressure, relative humidity,
//! dew point, mixing ratio, virtual, potential and equivalent potential
//! temperature, heat index and wind chill.
//!
//! Every quantity carries its unit. Formulas convert internally to the units
//! they are defined in (°C and mb, or °F and mph for the NWS regressions) and
//! tag results with their true output unit, so mixing scales cannot silently
//! produce wrong physics.
//!
//! ## Layout
//! - [`core_types`]: `Temperature`, `Pressure` and friends, conversion tables
//! - [`physics`]: the formulas as free functions
//! - [`weather`]: the `Atmosphere` snapshot with ambient defaults and
//!   overrides, configuration and the summary report

// Core types and utilities
pub mod core_types;
pub mod error;

pub mod physics;
pub mod weather;

// Re-export core types
pub use core_types::{
    Diagnostic, GramsPerKilogram, KilometersPerHour, MetersPerSecond, MilesPerHour, Percent, Pressure,
    PressureUnit, Temperature, TemperatureUnit,
};
pub use error::{AtmosError, AtmosResult, DiagnosticWarning};
pub use weather::{Atmosphere, AtmosphereBuilder, AtmosphereConfig, DiagnosticsReport};
