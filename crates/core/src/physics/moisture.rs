//! Atmospheric moisture: vapor pressure, relative humidity, dew point and
//! mixing ratio
//!
//! All formulas work in degrees Celsius and millibars; inputs are converted on
//! entry and results carry their true output unit.
//!
//! # Scientific References
//! - Tetens, O. (1930). "Über einige meteorologische Begriffe."
//!   Zeitschrift für Geophysik, 6, 297-309
//! - Wallace, J.M. and Hobbs, P.V. (2006). "Atmospheric Science: An
//!   Introductory Survey", 2nd ed., §3.5

use crate::core_types::{GramsPerKilogram, Percent, Pressure, PressureUnit, Temperature, TemperatureUnit};
use crate::error::{AtmosError, AtmosResult};

/// Saturation vapor pressure at 0°C (mb)
const VAPOR_PRESSURE_AT_FREEZING: f64 = 6.11;

/// Magnus-Tetens coefficient (dimensionless, base-10 form)
const MAGNUS_A: f64 = 7.5;

/// Magnus-Tetens temperature offset (°C)
const MAGNUS_B: f64 = 237.3;

/// `VAPOR_PRESSURE_AT_FREEZING` scaled by 100 so it pairs with RH in percent
const DEW_POINT_REFERENCE: f64 = 611.0;

/// 1000 × ratio of the gas constants of dry air and water vapour (g/kg)
const EPSILON_G_PER_KG: f64 = 621.97;

/// Vapor pressure over water in millibars.
///
/// `e(T) = 6.11 × 10^(7.5·T / (237.3 + T))`, `T` in °C.
///
/// One formula, two physical quantities, selected by the caller's input:
/// - dry-bulb temperature → **saturation** vapor pressure `es`
/// - dew point → **actual** vapor pressure `e`
///
/// # Errors
/// `NumericDomain` when `237.3 + T <= 0`; `DomainRange` when the result
/// underflows to zero.
pub fn vapor_pressure(temperature: Temperature) -> AtmosResult<Pressure> {
    let exponent = magnus_exponent(temperature, "vapor pressure")?;
    Pressure::millibars(VAPOR_PRESSURE_AT_FREEZING * 10f64.powf(exponent))
}

/// `7.5·T / (237.3 + T)`, `T` in °C
fn magnus_exponent(temperature: Temperature, operation: &'static str) -> AtmosResult<f64> {
    let t_c = temperature.value_in(TemperatureUnit::Celsius)?;
    let denominator = MAGNUS_B + t_c;
    if denominator <= 0.0 {
        return Err(AtmosError::numeric_domain(
            operation,
            format!("237.3 + T = {denominator:.2} must be positive (T = {t_c:.2}°C)"),
        ));
    }
    Ok(MAGNUS_A * t_c / denominator)
}

/// Relative humidity in percent: `e(Td) / e(T) × 100`.
///
/// The `6.11` prefactors cancel, leaving `10^(a(Td) − a(T))` with `a` the
/// Magnus exponent. Very cold dew points give ~0 % instead of underflowing
/// the vapor pressure.
///
/// The raw ratio is returned. Values above 100 % occur when `Td > T`;
/// flagging them is left to the caller (see `Atmosphere::relative_humidity`).
pub fn relative_humidity(temperature: Temperature, dew_point: Temperature) -> AtmosResult<Percent> {
    let actual = magnus_exponent(dew_point, "relative humidity")?;
    let saturation = magnus_exponent(temperature, "relative humidity")?;
    Ok(Percent::new(10f64.powf(actual - saturation) * 100.0))
}

/// Dew point from dry-bulb temperature and relative humidity.
///
/// `Td = 237.3·ln(x) / (7.5·ln(10) − ln(x))` with `x = es·RH / 611`.
/// The result is returned in the unit of `temperature`.
///
/// # Errors
/// `NumericDomain` when `RH <= 0` (logarithm undefined) or when the
/// denominator vanishes.
pub fn dew_point(temperature: Temperature, humidity: Percent) -> AtmosResult<Temperature> {
    if !humidity.value().is_finite() || humidity.value() <= 0.0 {
        return Err(AtmosError::numeric_domain(
            "dew point",
            format!("relative humidity {humidity} must be positive, ln(es·RH/611) is undefined"),
        ));
    }
    let es = vapor_pressure(temperature)?.value_in(PressureUnit::Millibars)?;
    let ln_x = (es * humidity.value() / DEW_POINT_REFERENCE).ln();
    let denominator = MAGNUS_A * std::f64::consts::LN_10 - ln_x;
    if denominator <= 0.0 {
        return Err(AtmosError::numeric_domain(
            "dew point",
            format!("denominator {denominator:.3} is not positive for RH = {humidity}"),
        ));
    }
    let td_c = MAGNUS_B * ln_x / denominator;
    Temperature::celsius(td_c)?.convert(temperature.unit())
}

/// Mixing ratio in g/kg: `w = 621.97 · e / (P − e)`.
///
/// `e` is the vapor pressure of `temperature`, so as with [`vapor_pressure`]
/// the input decides the quantity: dry-bulb gives the **saturation** mixing
/// ratio, dew point the **actual** mixing ratio.
///
/// # Errors
/// `DomainRange` when `P <= e`.
pub fn mixing_ratio(temperature: Temperature, pressure: Pressure) -> AtmosResult<GramsPerKilogram> {
    let e = vapor_pressure(temperature)?.value_in(PressureUnit::Millibars)?;
    let p = pressure.value_in(PressureUnit::Millibars)?;
    if p <= e {
        return Err(AtmosError::domain_range(
            "pressure",
            format!("P = {p:.2} mb must exceed vapor pressure e = {e:.2} mb"),
        ));
    }
    Ok(GramsPerKilogram::new(EPSILON_G_PER_KG * e / (p - e)))
}
