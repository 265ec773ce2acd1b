//! Derived temperatures: virtual, potential and equivalent potential
//!
//! All three are returned in Kelvin.
//!
//! # Scientific References
//! - Poisson equation: Wallace & Hobbs (2006), §3.4
//! - Holton, J.R. (2004). "An Introduction to Dynamic Meteorology", §2.7

use super::moisture::{mixing_ratio, vapor_pressure};
use crate::core_types::{Pressure, PressureUnit, Temperature, TemperatureUnit};
use crate::error::{AtmosError, AtmosResult};

/// `R_d / c_p` for dry air
const POISSON_EXPONENT: f64 = 0.286;

/// `1 − ε`, with `ε = R_d / R_v ≈ 0.621`
const VIRTUAL_TEMPERATURE_COEFFICIENT: f64 = 0.379;

/// Latent heating per g/kg of mixing ratio, in K (θe ≈ θ + 3w)
const LATENT_HEATING_PER_G_KG: f64 = 3.0;

/// Virtual temperature: `Tv = T_K / (1 − 0.379 · e(Td) / P)`.
///
/// `e(Td)` is the actual vapor pressure, i.e. vapor pressure of the dew
/// point.
pub fn virtual_temperature(
    temperature: Temperature,
    dew_point: Temperature,
    pressure: Pressure,
) -> AtmosResult<Temperature> {
    let t_k = temperature.value_in(TemperatureUnit::Kelvin)?;
    let e = vapor_pressure(dew_point)?.value_in(PressureUnit::Millibars)?;
    let p = pressure.value_in(PressureUnit::Millibars)?;

    let denominator = 1.0 - VIRTUAL_TEMPERATURE_COEFFICIENT * e / p;
    if denominator <= 0.0 {
        return Err(AtmosError::domain_range(
            "pressure",
            format!("P = {p:.2} mb is too low for vapor pressure e = {e:.2} mb"),
        ));
    }
    Temperature::kelvin(t_k / denominator)
}

/// Potential temperature (Poisson equation): `θ = T_K · (P0 / P)^0.286`.
///
/// At `P == P0` the result is exactly `T_K`.
pub fn potential_temperature(
    temperature: Temperature,
    pressure: Pressure,
    reference: Pressure,
) -> AtmosResult<Temperature> {
    let t_k = temperature.value_in(TemperatureUnit::Kelvin)?;
    let p = pressure.value_in(PressureUnit::Millibars)?;
    let p0 = reference.value_in(PressureUnit::Millibars)?;
    Temperature::kelvin(t_k * (p0 / p).powf(POISSON_EXPONENT))
}

/// Equivalent potential temperature approximation: `θe = θ + 3·w`.
///
/// `w` is the saturation mixing ratio of `temperature` at `pressure` (g/kg).
pub fn equivalent_potential_temperature(
    temperature: Temperature,
    pressure: Pressure,
    reference: Pressure,
) -> AtmosResult<Temperature> {
    let theta = potential_temperature(temperature, pressure, reference)?;
    let w = mixing_ratio(temperature, pressure)?;
    Temperature::kelvin(theta.value() + LATENT_HEATING_PER_G_KG * w.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn mb(v: f64) -> Pressure {
        Pressure::millibars(v).unwrap()
    }

    #[test]
    fn test_potential_temperature_identity_at_reference() {
        for t in [-40.0, 0.0, 18.3, 45.0] {
            let temp = Temperature::celsius(t).unwrap();
            let theta = potential_temperature(temp, mb(1000.0), Pressure::REFERENCE).unwrap();
            assert_eq!(theta.unit(), TemperatureUnit::Kelvin);
            assert_eq!(theta.value(), temp.value_in(TemperatureUnit::Kelvin).unwrap());
        }
    }

    #[test]
    fn test_potential_temperature_aloft() {
        let theta = potential_temperature(Temperature::celsius(20.0).unwrap(), mb(850.0), Pressure::REFERENCE).unwrap();
        assert_abs_diff_eq!(theta.value(), 307.10, epsilon = 0.01);
    }

    #[test]
    fn test_potential_temperature_in_hectopascals() {
        let p = Pressure::hectopascals(850.0).unwrap();
        let theta = potential_temperature(Temperature::celsius(20.0).unwrap(), p, Pressure::REFERENCE).unwrap();
        assert_abs_diff_eq!(theta.value(), 307.10, epsilon = 0.01);
    }

    #[test]
    fn test_virtual_temperature() {
        let tv = virtual_temperature(
            Temperature::celsius(25.0).unwrap(),
            Temperature::celsius(15.0).unwrap(),
            mb(1000.0),
        )
        .unwrap();
        assert_eq!(tv.unit(), TemperatureUnit::Kelvin);
        assert_abs_diff_eq!(tv.value(), 300.09, epsilon = 0.01);
        // Moist air is always less dense than dry air at the same T
        assert!(tv.value() > 298.15);
    }

    #[test]
    fn test_virtual_temperature_rejects_thin_air() {
        // e(30°C) ≈ 42.4 mb, 0.379 × 42.4 > 10
        let result = virtual_temperature(
            Temperature::celsius(35.0).unwrap(),
            Temperature::celsius(30.0).unwrap(),
            mb(10.0),
        );
        assert!(matches!(result, Err(AtmosError::DomainRange { .. })));
    }

    #[test]
    fn test_equivalent_potential_temperature_uses_mixing_ratio() {
        let t = Temperature::celsius(20.0).unwrap();
        let theta_e = equivalent_potential_temperature(t, mb(850.0), Pressure::REFERENCE).unwrap();
        assert_abs_diff_eq!(theta_e.value(), 359.89, epsilon = 0.01);

        // A colder parcel holds less water, so the latent term shrinks
        let cold = Temperature::celsius(0.0).unwrap();
        let theta_cold = potential_temperature(cold, mb(850.0), Pressure::REFERENCE).unwrap();
        let theta_e_cold = equivalent_potential_temperature(cold, mb(850.0), Pressure::REFERENCE).unwrap();
        let latent = theta_e_cold.value() - theta_cold.value();
        assert!(latent > 0.0 && latent < 3.0 * 11.56, "latent term {latent}");
    }
}
