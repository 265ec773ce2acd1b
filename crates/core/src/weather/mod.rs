//! Observation snapshot and diagnostic engine
//!
//! [`Atmosphere`] bundles one observation and exposes the diagnostics from
//! [`physics`](crate::physics) with ambient defaults, optional overrides and
//! configurable thresholds.

pub mod atmosphere;
pub mod config;
pub mod report;

pub use atmosphere::{Atmosphere, AtmosphereBuilder};
pub use config::AtmosphereConfig;
pub use report::{DiagnosticsReport, ReportFailure};
