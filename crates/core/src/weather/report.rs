//! One-shot summary of every diagnostic an observation supports

use super::atmosphere::Atmosphere;
use crate::core_types::{Diagnostic, GramsPerKilogram, Percent, Pressure, Temperature};
use crate::error::{AtmosError, AtmosResult};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A diagnostic that could not be computed, and why
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportFailure {
    pub operation: &'static str,
    pub message: String,
}

/// Every diagnostic computable from an [`Atmosphere`]'s ambient fields
///
/// Fields are `None` when the operation failed; the failure is then listed in
/// `failures` under the field's name.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DiagnosticsReport {
    pub saturation_vapor_pressure: Option<Pressure>,
    pub actual_vapor_pressure: Option<Pressure>,
    pub relative_humidity: Option<Diagnostic<Percent>>,
    pub saturation_mixing_ratio: Option<GramsPerKilogram>,
    pub actual_mixing_ratio: Option<GramsPerKilogram>,
    pub virtual_temperature: Option<Temperature>,
    pub potential_temperature: Option<Temperature>,
    pub equivalent_potential_temperature: Option<Temperature>,
    pub heat_index: Option<Diagnostic<Temperature>>,
    pub wind_chill: Option<Diagnostic<Temperature>>,
    pub failures: Vec<ReportFailure>,
}

fn record<T>(failures: &mut Vec<ReportFailure>, operation: &'static str, result: AtmosResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(operation, %err, "diagnostic unavailable");
            failures.push(ReportFailure {
                operation,
                message: err.to_string(),
            });
            None
        }
    }
}

impl DiagnosticsReport {
    pub fn from_atmosphere(atmosphere: &Atmosphere) -> Self {
        let mut failures = Vec::new();
        let dew_point = atmosphere
            .dew_point_observation()
            .ok_or(AtmosError::MissingInput("dew_point"));

        let saturation_vapor_pressure =
            record(&mut failures, "saturation_vapor_pressure", atmosphere.vapor_pressure(None));
        let actual_vapor_pressure = record(
            &mut failures,
            "actual_vapor_pressure",
            dew_point.clone().and_then(|td| atmosphere.vapor_pressure(Some(td))),
        );
        let relative_humidity =
            record(&mut failures, "relative_humidity", atmosphere.relative_humidity(None, None));
        let saturation_mixing_ratio =
            record(&mut failures, "saturation_mixing_ratio", atmosphere.mixing_ratio(None, None));
        let actual_mixing_ratio = record(
            &mut failures,
            "actual_mixing_ratio",
            dew_point.and_then(|td| atmosphere.mixing_ratio(Some(td), None)),
        );
        let virtual_temperature = record(
            &mut failures,
            "virtual_temperature",
            atmosphere.virtual_temperature(None, None, None),
        );
        let potential_temperature = record(
            &mut failures,
            "potential_temperature",
            atmosphere.potential_temperature(None, None),
        );
        let equivalent_potential_temperature = record(
            &mut failures,
            "equivalent_potential_temperature",
            atmosphere.equivalent_potential_temperature(None, None),
        );
        let heat_index = record(&mut failures, "heat_index", atmosphere.heat_index(None, None));
        let wind_chill = record(&mut failures, "wind_chill", atmosphere.wind_chill(None, None));

        Self {
            saturation_vapor_pressure,
            actual_vapor_pressure,
            relative_humidity,
            saturation_mixing_ratio,
            actual_mixing_ratio,
            virtual_temperature,
            potential_temperature,
            equivalent_potential_temperature,
            heat_index,
            wind_chill,
            failures,
        }
    }

    /// Names of the operations that produced a value with a warning
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.relative_humidity.as_ref().is_some_and(|d| !d.is_valid()) {
            names.push("relative_humidity");
        }
        if self.heat_index.as_ref().is_some_and(|d| !d.is_valid()) {
            names.push("heat_index");
        }
        if self.wind_chill.as_ref().is_some_and(|d| !d.is_valid()) {
            names.push("wind_chill");
        }
        names
    }
}

fn write_line<T: fmt::Display>(f: &mut fmt::Formatter<'_>, label: &str, value: Option<&T>) -> fmt::Result {
    match value {
        Some(value) => writeln!(f, "{label:<34} {value}"),
        None => writeln!(f, "{label:<34} n/a"),
    }
}

impl fmt::Display for DiagnosticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_line(f, "Saturation vapor pressure", self.saturation_vapor_pressure.as_ref())?;
        write_line(f, "Actual vapor pressure", self.actual_vapor_pressure.as_ref())?;
        write_line(f, "Relative humidity", self.relative_humidity.as_ref())?;
        write_line(f, "Saturation mixing ratio", self.saturation_mixing_ratio.as_ref())?;
        write_line(f, "Actual mixing ratio", self.actual_mixing_ratio.as_ref())?;
        write_line(f, "Virtual temperature", self.virtual_temperature.as_ref())?;
        write_line(f, "Potential temperature", self.potential_temperature.as_ref())?;
        write_line(f, "Equivalent potential temperature", self.equivalent_potential_temperature.as_ref())?;
        write_line(f, "Heat index", self.heat_index.as_ref())?;
        write_line(f, "Wind chill", self.wind_chill.as_ref())?;
        for failure in &self.failures {
            writeln!(f, "  {}: {}", failure.operation, failure.message)?;
        }
        Ok(())
    }
}
