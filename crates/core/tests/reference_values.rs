//! Reference-value validation for the diagnostic formulas
//!
//! Checks conversion laws and published reference values:
//!
//! - **Unit conversion**: round trip through every unit pair, exact freezing point
//! - **Tetens (1930)**: vapor pressure at 0°C
//! - **Inverse laws**: RH(T, T) = 100 %, dew point at saturation
//! - **Poisson equation**: identity at the 1000 mb reference
//! - **NWS**: heat index and wind chill envelopes
//!
//! Run tests with: cargo test --test `reference_values`

use approx::assert_abs_diff_eq;
use wx_diag_core::physics::{self, comfort};
use wx_diag_core::{
    AtmosError, Atmosphere, DiagnosticWarning, MilesPerHour, Percent, Pressure, PressureUnit, Temperature,
    TemperatureUnit,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Temperatures spanning polar night to desert afternoon, in each unit
fn sample_temperatures() -> Vec<Temperature> {
    let mut samples = Vec::new();
    for c in [-60.0, -17.7778, 0.0, 12.34, 37.0, 55.0] {
        samples.push(Temperature::celsius(c).unwrap());
    }
    for f in [-40.0, 0.0, 32.0, 98.6, 120.0] {
        samples.push(Temperature::fahrenheit(f).unwrap());
    }
    for k in [0.0, 233.15, 273.15, 310.0] {
        samples.push(Temperature::kelvin(k).unwrap());
    }
    samples
}

// ═══════════════════════════════════════════════════════════════════════════════
// UNIT CONVERSION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_round_trip_every_unit_pair() {
    for t in sample_temperatures() {
        for via in TemperatureUnit::ALL {
            let back = t.convert(via).unwrap().convert(t.unit()).unwrap();
            assert_abs_diff_eq!(back.value(), t.value(), epsilon = 0.01);
            assert_eq!(back.unit(), t.unit());
        }
    }
}

#[test]
fn test_conversion_is_idempotent() {
    for t in sample_temperatures() {
        for unit in TemperatureUnit::ALL {
            let once = t.convert(unit).unwrap();
            assert_eq!(once.convert(unit).unwrap(), once);
        }
    }
}

#[test]
fn test_freezing_point_is_exact() {
    let c = Temperature::fahrenheit(32.0).unwrap().convert(TemperatureUnit::Celsius).unwrap();
    assert_eq!(c.value(), 0.0);
}

#[test]
fn test_fahrenheit_celsius_crossover() {
    let c = Temperature::fahrenheit(-40.0).unwrap().convert(TemperatureUnit::Celsius).unwrap();
    assert_abs_diff_eq!(c.value(), -40.0, epsilon = 1e-9);
}

#[test]
fn test_unknown_unit_symbol() {
    let err = "Rankine".parse::<TemperatureUnit>().unwrap_err();
    assert!(matches!(err, AtmosError::InvalidUnitConversion { .. }));
    let err = "torr".parse::<PressureUnit>().unwrap_err();
    assert!(matches!(err, AtmosError::InvalidUnitConversion { .. }));
}

#[test]
fn test_standard_atmosphere_in_inches() {
    let p = Pressure::inches_of_mercury(29.92).unwrap().convert(PressureUnit::Hectopascals).unwrap();
    assert_abs_diff_eq!(p.value(), 1013.2, epsilon = 0.1);
}

// ═══════════════════════════════════════════════════════════════════════════════
// MOISTURE
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_vapor_pressure_at_freezing() {
    let e = physics::vapor_pressure(Temperature::celsius(0.0).unwrap()).unwrap();
    assert_abs_diff_eq!(e.value(), 6.11, epsilon = 0.01);
    assert_eq!(e.unit(), PressureUnit::Millibars);
}

#[test]
fn test_relative_humidity_equal_temperatures() {
    for t in sample_temperatures() {
        // The Magnus form diverges below -237.3°C
        if t.value_in(TemperatureUnit::Celsius).unwrap() < -100.0 {
            continue;
        }
        let rh = physics::relative_humidity(t, t).unwrap();
        assert_abs_diff_eq!(rh.value(), 100.0, epsilon = 1e-9);
    }
}

#[test]
fn test_dew_point_at_saturation_returns_temperature() {
    for c in [-30.0, -5.0, 0.0, 10.0, 25.0, 45.0] {
        let t = Temperature::celsius(c).unwrap();
        let td = physics::dew_point(t, Percent::SATURATED).unwrap();
        assert_abs_diff_eq!(td.value(), c, epsilon = 0.1);
    }
}

#[test]
fn test_dew_point_requires_positive_humidity() {
    let t = Temperature::celsius(20.0).unwrap();
    assert!(matches!(
        physics::dew_point(t, Percent::new(0.0)),
        Err(AtmosError::NumericDomain { .. })
    ));
}

#[test]
fn test_mixing_ratio_at_850_mb() {
    // 621.97 · 18.19 / (850 − 18.19)
    let w = physics::mixing_ratio(Temperature::celsius(16.0).unwrap(), Pressure::millibars(850.0).unwrap()).unwrap();
    assert_abs_diff_eq!(w.value(), 13.6, epsilon = 0.2);
}

#[test]
fn test_mixing_ratio_non_physical_pressure() {
    let result = physics::mixing_ratio(Temperature::celsius(30.0).unwrap(), Pressure::millibars(40.0).unwrap());
    assert!(matches!(result, Err(AtmosError::DomainRange { .. })));
}

// ═══════════════════════════════════════════════════════════════════════════════
// THERMODYNAMICS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_potential_temperature_identity_at_1000_mb() {
    let atmosphere = Atmosphere::new(None, Some(Pressure::millibars(1000.0).unwrap()), None, None);
    for t in sample_temperatures() {
        let theta = atmosphere.potential_temperature(Some(t), None).unwrap();
        assert_eq!(theta, t.convert(TemperatureUnit::Kelvin).unwrap());
    }
}

#[test]
fn test_equivalent_potential_temperature_tracks_moisture() {
    let p = Pressure::millibars(850.0).unwrap();
    let cool = physics::equivalent_potential_temperature(Temperature::celsius(5.0).unwrap(), p, Pressure::REFERENCE).unwrap();
    let warm = physics::equivalent_potential_temperature(Temperature::celsius(25.0).unwrap(), p, Pressure::REFERENCE).unwrap();
    let theta_cool = physics::potential_temperature(Temperature::celsius(5.0).unwrap(), p, Pressure::REFERENCE).unwrap();
    let theta_warm = physics::potential_temperature(Temperature::celsius(25.0).unwrap(), p, Pressure::REFERENCE).unwrap();

    // The latent term grows with temperature rather than staying fixed
    let latent_cool = cool.value() - theta_cool.value();
    let latent_warm = warm.value() - theta_warm.value();
    assert!(latent_warm > 2.0 * latent_cool, "cool {latent_cool}, warm {latent_warm}");
}

// ═══════════════════════════════════════════════════════════════════════════════
// NWS REGRESSIONS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_heat_index_outside_range_falls_back() {
    let hi = comfort::heat_index(Temperature::fahrenheit(70.0).unwrap(), Percent::new(50.0)).unwrap();
    assert!(matches!(hi.warning(), Some(DiagnosticWarning::FormulaRange { .. })));
    assert_eq!(hi.value(), Temperature::fahrenheit(70.0).unwrap());
    assert!(matches!(hi.into_strict(), Err(AtmosError::Rejected(_))));
}

#[test]
fn test_heat_index_nws_table() {
    // NWS heat index chart (Rothfusz regression, rounded up)
    let table = [(90.0, 50.0, 95.0), (96.0, 40.0, 101.0), (100.0, 60.0, 130.0)];
    for (t, rh, expected) in table {
        let hi = comfort::heat_index(Temperature::fahrenheit(t).unwrap(), Percent::new(rh)).unwrap();
        assert!(hi.is_valid());
        assert_eq!(hi.value().value(), expected, "T = {t}°F, RH = {rh}%");
    }
}

#[test]
fn test_wind_chill_outside_range_falls_back() {
    let warm = comfort::wind_chill(Temperature::fahrenheit(55.0).unwrap(), MilesPerHour::new(20.0).unwrap()).unwrap();
    assert!(matches!(warm.warning(), Some(DiagnosticWarning::FormulaRange { .. })));
    assert_eq!(warm.value().value(), 55.0);

    let calm = comfort::wind_chill(Temperature::fahrenheit(10.0).unwrap(), MilesPerHour::new(1.0).unwrap()).unwrap();
    assert!(!calm.is_valid());
}

#[test]
fn test_wind_chill_nws_table() {
    // NWS wind chill chart, rounded down
    let table = [(30.0, 20.0, 17.0), (0.0, 15.0, -20.0), (-10.0, 30.0, -40.0)];
    for (t, v, expected) in table {
        let wc = comfort::wind_chill(Temperature::fahrenheit(t).unwrap(), MilesPerHour::new(v).unwrap()).unwrap();
        assert!(wc.is_valid());
        assert_eq!(wc.value().value(), expected, "T = {t}°F, V = {v} mph");
    }
}
