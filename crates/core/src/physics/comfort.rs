//! Apparent-temperature regressions from the US National Weather Service
//!
//! Both formulas are empirical fits in °F and only hold inside the envelope
//! they were fitted on. Outside it the unmodified air temperature (in °F) is
//! returned together with a `FormulaRange` warning.
//!
//! # Scientific References
//! - Rothfusz, L.P. (1990). "The Heat Index Equation." NWS Technical
//!   Attachment SR 90-23
//! - NWS (2001). "Wind Chill Temperature Index." Office of Climate, Water,
//!   and Weather Services

use crate::core_types::{Diagnostic, MilesPerHour, Percent, Temperature, TemperatureUnit};
use crate::error::{AtmosResult, DiagnosticWarning};
use tracing::warn;

/// Rothfusz regression coefficients, `c1..c9`
const HEAT_INDEX_COEFFICIENTS: [f64; 9] = [
    -42.379,
    2.04901523,
    10.14333127,
    -0.22475541,
    -0.00683783,
    -0.05481717,
    0.00122874,
    0.00085282,
    -0.00000199,
];

/// Lowest temperature the heat index regression is valid for (°F)
pub const HEAT_INDEX_MIN_TEMPERATURE_F: f64 = 80.0;

/// Lowest relative humidity the heat index regression is valid for (%)
pub const HEAT_INDEX_MIN_HUMIDITY: f64 = 40.0;

/// Highest temperature the wind chill regression is valid for (°F)
pub const WIND_CHILL_MAX_TEMPERATURE_F: f64 = 50.0;

/// Lowest wind speed the wind chill regression is valid for (mph)
pub const WIND_CHILL_MIN_WIND_MPH: f64 = 3.0;

/// Heat index in whole °F, rounded up.
///
/// Valid for `T ≥ 80°F` and `RH ≥ 40%`.
pub fn heat_index(temperature: Temperature, humidity: Percent) -> AtmosResult<Diagnostic<Temperature>> {
    let fahrenheit = temperature.convert(TemperatureUnit::Fahrenheit)?;
    let t = fahrenheit.value();
    let rh = humidity.value();

    if t < HEAT_INDEX_MIN_TEMPERATURE_F || rh < HEAT_INDEX_MIN_HUMIDITY {
        let message = format!(
            "T = {t:.1}°F, RH = {rh:.1}% (requires T >= {HEAT_INDEX_MIN_TEMPERATURE_F}°F and RH >= {HEAT_INDEX_MIN_HUMIDITY}%)"
        );
        warn!(detail = %message, "heat index outside validated range, returning air temperature");
        return Ok(Diagnostic::flagged(
            fahrenheit,
            DiagnosticWarning::FormulaRange {
                formula: "heat index",
                message,
            },
        ));
    }

    let [c1, c2, c3, c4, c5, c6, c7, c8, c9] = HEAT_INDEX_COEFFICIENTS;
    let index = c1
        + c2 * t
        + c3 * rh
        + c4 * t * rh
        + c5 * t * t
        + c6 * rh * rh
        + c7 * t * t * rh
        + c8 * t * rh * rh
        + c9 * t * t * rh * rh;

    Ok(Diagnostic::valid(Temperature::fahrenheit(index.ceil())?))
}

/// Wind chill in whole °F, rounded down.
///
/// Valid for `T ≤ 50°F` and `V ≥ 3 mph`.
pub fn wind_chill(temperature: Temperature, wind_speed: MilesPerHour) -> AtmosResult<Diagnostic<Temperature>> {
    let fahrenheit = temperature.convert(TemperatureUnit::Fahrenheit)?;
    let t = fahrenheit.value();
    let v = wind_speed.value();

    if t > WIND_CHILL_MAX_TEMPERATURE_F || v < WIND_CHILL_MIN_WIND_MPH {
        let message = format!(
            "T = {t:.1}°F, V = {v:.1} mph (requires T <= {WIND_CHILL_MAX_TEMPERATURE_F}°F and V >= {WIND_CHILL_MIN_WIND_MPH} mph)"
        );
        warn!(detail = %message, "wind chill outside validated range, returning air temperature");
        return Ok(Diagnostic::flagged(
            fahrenheit,
            DiagnosticWarning::FormulaRange {
                formula: "wind chill",
                message,
            },
        ));
    }

    let v_016 = v.powf(0.16);
    let chill = 35.74 + 0.6215 * t - 35.75 * v_016 + 0.4275 * t * v_016;
    Ok(Diagnostic::valid(Temperature::fahrenheit(chill.floor())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(v: f64) -> Temperature {
        Temperature::fahrenheit(v).unwrap()
    }

    #[test]
    fn test_heat_index_reference() {
        let hi = heat_index(f(90.0), Percent::new(50.0)).unwrap();
        assert!(hi.is_valid());
        // Regression gives 94.6°F, rounded up
        assert_eq!(hi.value(), f(95.0));
    }

    #[test]
    fn test_heat_index_from_celsius() {
        // 32.2222°C = 90°F
        let hi = heat_index(Temperature::celsius(32.222222).unwrap(), Percent::new(50.0)).unwrap();
        assert_eq!(hi.value().unit(), TemperatureUnit::Fahrenheit);
        assert_eq!(hi.value().value(), 95.0);
    }

    #[test]
    fn test_heat_index_below_envelope_falls_back() {
        let hi = heat_index(f(70.0), Percent::new(50.0)).unwrap();
        assert!(matches!(
            hi.warning(),
            Some(DiagnosticWarning::FormulaRange { formula: "heat index", .. })
        ));
        assert_eq!(hi.value(), f(70.0));
        assert!(hi.into_strict().is_err());
    }

    #[test]
    fn test_heat_index_dry_air_falls_back() {
        let hi = heat_index(f(95.0), Percent::new(20.0)).unwrap();
        assert!(!hi.is_valid());
        assert_eq!(hi.value(), f(95.0));
    }

    #[test]
    fn test_wind_chill_reference() {
        let wc = wind_chill(f(30.0), MilesPerHour::new(20.0).unwrap()).unwrap();
        assert!(wc.is_valid());
        // Regression gives 17.36°F, rounded down
        assert_eq!(wc.value(), f(17.0));

        let wc = wind_chill(f(0.0), MilesPerHour::new(15.0).unwrap()).unwrap();
        assert_eq!(wc.value(), f(-20.0));
    }

    #[test]
    fn test_wind_chill_warm_air_falls_back() {
        let wc = wind_chill(f(60.0), MilesPerHour::new(20.0).unwrap()).unwrap();
        assert!(matches!(
            wc.warning(),
            Some(DiagnosticWarning::FormulaRange { formula: "wind chill", .. })
        ));
        assert_eq!(wc.value(), f(60.0));
    }

    #[test]
    fn test_wind_chill_calm_air_falls_back() {
        let wc = wind_chill(f(20.0), MilesPerHour::new(2.0).unwrap()).unwrap();
        assert!(!wc.is_valid());
        assert_eq!(wc.value(), f(20.0));
    }

    #[test]
    fn test_fallback_is_in_fahrenheit() {
        let wc = wind_chill(Temperature::celsius(20.0).unwrap(), MilesPerHour::new(10.0).unwrap()).unwrap();
        assert_eq!(wc.value().unit(), TemperatureUnit::Fahrenheit);
        assert!((wc.value().value() - 68.0).abs() < 1e-9);
    }
}
