//! Atmosphere: an immutable observation snapshot and its diagnostics
//!
//! An [`Atmosphere`] holds whatever a single surface observation reported:
//! dry-bulb temperature, pressure, dew point and wind speed, each optional.
//! It has no setters. A new observation means a new `Atmosphere`.
//!
//! Every diagnostic takes optional overrides. An override replaces the
//! matching ambient field for that call only; with neither present the call
//! fails with [`AtmosError::MissingInput`]. Relative humidity is never
//! stored, it is recomputed from temperature and dew point on each request.
//!
//! Nothing is cached or mutated after construction, so a snapshot can be
//! shared across threads freely.

use super::config::AtmosphereConfig;
use super::report::DiagnosticsReport;
use crate::core_types::{Diagnostic, GramsPerKilogram, MilesPerHour, Percent, Pressure, Temperature};
use crate::error::{AtmosError, AtmosResult, DiagnosticWarning};
use crate::physics;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Pick the override when given, else the ambient value.
fn resolve<T: Copy>(override_value: Option<T>, ambient: Option<T>, field: &'static str) -> AtmosResult<T> {
    override_value.or(ambient).ok_or(AtmosError::MissingInput(field))
}

/// Observation snapshot plus the diagnostic operations defined on it
///
/// # Example
/// ```
/// use wx_diag_core::core_types::{Percent, Pressure, Temperature, TemperatureUnit};
/// use wx_diag_core::weather::Atmosphere;
///
/// let atmosphere = Atmosphere::builder()
///     .temperature(Temperature::fahrenheit(85.0).unwrap())
///     .dew_point(Temperature::fahrenheit(71.0).unwrap())
///     .pressure(Pressure::millibars(1013.0).unwrap())
///     .build();
///
/// let rh = atmosphere.relative_humidity(None, None).unwrap();
/// assert!(rh.is_valid());
/// assert!((rh.value().value() - 63.0).abs() < 0.1);
///
/// let heat_index = atmosphere.heat_index(None, None).unwrap();
/// assert_eq!(heat_index.value().unit(), TemperatureUnit::Fahrenheit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Atmosphere {
    /// Dry-bulb air temperature
    temperature: Option<Temperature>,

    /// Station pressure
    pressure: Option<Pressure>,

    /// Dew point temperature
    dew_point: Option<Temperature>,

    /// Sustained wind speed
    wind_speed: Option<MilesPerHour>,

    #[serde(default)]
    config: AtmosphereConfig,
}

impl Atmosphere {
    /// Snapshot with the default configuration.
    pub fn new(
        temperature: Option<Temperature>,
        pressure: Option<Pressure>,
        dew_point: Option<Temperature>,
        wind_speed: Option<MilesPerHour>,
    ) -> Self {
        AtmosphereBuilder {
            temperature,
            pressure,
            dew_point,
            wind_speed,
            config: AtmosphereConfig::default(),
        }
        .build()
    }

    pub fn builder() -> AtmosphereBuilder {
        AtmosphereBuilder::default()
    }

    pub fn temperature(&self) -> Option<Temperature> {
        self.temperature
    }

    pub fn pressure(&self) -> Option<Pressure> {
        self.pressure
    }

    /// Observed dew point (not derived)
    pub fn dew_point_observation(&self) -> Option<Temperature> {
        self.dew_point
    }

    pub fn wind_speed(&self) -> Option<MilesPerHour> {
        self.wind_speed
    }

    pub fn config(&self) -> &AtmosphereConfig {
        &self.config
    }

    /// Vapor pressure (mb) of `temperature`, defaulting to the dry-bulb
    /// temperature.
    ///
    /// The input decides the quantity. Pass nothing (or the dry-bulb) for
    /// the saturation vapor pressure; pass the dew point for the actual one:
    /// `atmosphere.vapor_pressure(atmosphere.dew_point_observation())`.
    pub fn vapor_pressure(&self, temperature: Option<Temperature>) -> AtmosResult<Pressure> {
        let temperature = resolve(temperature, self.temperature, "temperature")?;
        physics::vapor_pressure(temperature)
    }

    /// Relative humidity from dry-bulb temperature and dew point.
    ///
    /// Values above 100 % by more than the configured tolerance carry a
    /// `Supersaturation` warning.
    pub fn relative_humidity(
        &self,
        temperature: Option<Temperature>,
        dew_point: Option<Temperature>,
    ) -> AtmosResult<Diagnostic<Percent>> {
        let temperature = resolve(temperature, self.temperature, "temperature")?;
        let dew_point = resolve(dew_point, self.dew_point, "dew_point")?;
        let humidity = physics::relative_humidity(temperature, dew_point)?;

        let tolerance = self.config.supersaturation_tolerance();
        if humidity.value() > Percent::SATURATED.value() + tolerance.value() {
            warn!(%humidity, %temperature, %dew_point, "relative humidity exceeds saturation");
            return Ok(Diagnostic::flagged(
                humidity,
                DiagnosticWarning::Supersaturation { humidity, tolerance },
            ));
        }
        Ok(Diagnostic::valid(humidity))
    }

    /// Dew point from temperature and relative humidity, returned in the
    /// unit of the temperature used.
    ///
    /// Without a humidity override the humidity is derived from the ambient
    /// dew point, so the call needs one of the two. A supersaturation warning
    /// on that derived humidity is carried onto the result.
    pub fn dew_point(
        &self,
        temperature: Option<Temperature>,
        humidity: Option<Percent>,
    ) -> AtmosResult<Diagnostic<Temperature>> {
        let temperature = resolve(temperature, self.temperature, "temperature")?;
        let humidity = self.resolve_humidity(temperature, humidity)?;
        let dew_point = physics::dew_point(temperature, humidity.value())?;
        Ok(Diagnostic::valid(dew_point).inherit_warning(&humidity))
    }

    /// Mixing ratio (g/kg) of `temperature` at `pressure`.
    ///
    /// Defaults to the dry-bulb temperature, which gives the saturation
    /// mixing ratio; pass the dew point for the actual mixing ratio.
    pub fn mixing_ratio(
        &self,
        temperature: Option<Temperature>,
        pressure: Option<Pressure>,
    ) -> AtmosResult<GramsPerKilogram> {
        let temperature = resolve(temperature, self.temperature, "temperature")?;
        let pressure = resolve(pressure, self.pressure, "pressure")?;
        physics::mixing_ratio(temperature, pressure)
    }

    /// Virtual temperature in Kelvin.
    pub fn virtual_temperature(
        &self,
        temperature: Option<Temperature>,
        dew_point: Option<Temperature>,
        pressure: Option<Pressure>,
    ) -> AtmosResult<Temperature> {
        let temperature = resolve(temperature, self.temperature, "temperature")?;
        let dew_point = resolve(dew_point, self.dew_point, "dew_point")?;
        let pressure = resolve(pressure, self.pressure, "pressure")?;
        physics::virtual_temperature(temperature, dew_point, pressure)
    }

    /// Potential temperature in Kelvin, relative to the configured reference
    /// pressure.
    pub fn potential_temperature(
        &self,
        temperature: Option<Temperature>,
        pressure: Option<Pressure>,
    ) -> AtmosResult<Temperature> {
        let temperature = resolve(temperature, self.temperature, "temperature")?;
        let pressure = resolve(pressure, self.pressure, "pressure")?;
        physics::potential_temperature(temperature, pressure, self.config.reference_pressure())
    }

    /// Equivalent potential temperature in Kelvin (`θ + 3·w`).
    pub fn equivalent_potential_temperature(
        &self,
        temperature: Option<Temperature>,
        pressure: Option<Pressure>,
    ) -> AtmosResult<Temperature> {
        let temperature = resolve(temperature, self.temperature, "temperature")?;
        let pressure = resolve(pressure, self.pressure, "pressure")?;
        physics::equivalent_potential_temperature(temperature, pressure, self.config.reference_pressure())
    }

    /// Heat index in °F.
    ///
    /// Without a humidity override the humidity is derived from the ambient
    /// temperature and dew point. A supersaturation warning on that derived
    /// humidity is carried onto the result unless the regression raised its
    /// own range warning.
    pub fn heat_index(
        &self,
        temperature: Option<Temperature>,
        humidity: Option<Percent>,
    ) -> AtmosResult<Diagnostic<Temperature>> {
        let temperature = resolve(temperature, self.temperature, "temperature")?;
        let humidity = self.resolve_humidity(temperature, humidity)?;
        Ok(physics::heat_index(temperature, humidity.value())?.inherit_warning(&humidity))
    }

    /// Wind chill in °F.
    pub fn wind_chill(
        &self,
        temperature: Option<Temperature>,
        wind_speed: Option<MilesPerHour>,
    ) -> AtmosResult<Diagnostic<Temperature>> {
        let temperature = resolve(temperature, self.temperature, "temperature")?;
        let wind_speed = resolve(wind_speed, self.wind_speed, "wind_speed")?;
        physics::wind_chill(temperature, wind_speed)
    }

    /// Humidity override as given, else derived from `temperature` and the
    /// ambient dew point together with its supersaturation check.
    fn resolve_humidity(
        &self,
        temperature: Temperature,
        humidity: Option<Percent>,
    ) -> AtmosResult<Diagnostic<Percent>> {
        match humidity {
            Some(humidity) => Ok(Diagnostic::valid(humidity)),
            None => self.relative_humidity(Some(temperature), None),
        }
    }

    /// Every diagnostic computable from the ambient fields.
    pub fn report(&self) -> DiagnosticsReport {
        DiagnosticsReport::from_atmosphere(self)
    }
}

/// Builder for [`Atmosphere`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AtmosphereBuilder {
    temperature: Option<Temperature>,
    pressure: Option<Pressure>,
    dew_point: Option<Temperature>,
    wind_speed: Option<MilesPerHour>,
    config: AtmosphereConfig,
}

impl AtmosphereBuilder {
    pub fn temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn pressure(mut self, pressure: Pressure) -> Self {
        self.pressure = Some(pressure);
        self
    }

    pub fn dew_point(mut self, dew_point: Temperature) -> Self {
        self.dew_point = Some(dew_point);
        self
    }

    pub fn wind_speed(mut self, wind_speed: MilesPerHour) -> Self {
        self.wind_speed = Some(wind_speed);
        self
    }

    pub fn config(mut self, config: AtmosphereConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Atmosphere {
        debug!(
            temperature = ?self.temperature,
            pressure = ?self.pressure,
            dew_point = ?self.dew_point,
            wind_speed = ?self.wind_speed,
            "atmosphere snapshot created"
        );
        Atmosphere {
            temperature: self.temperature,
            pressure: self.pressure,
            dew_point: self.dew_point,
            wind_speed: self.wind_speed,
            config: self.config,
        }
    }
}
