//! Temperature quantities tagged with their unit
//!
//! A [`Temperature`] never changes unit in place: [`Temperature::convert`]
//! returns a new value. Conversions are looked up in a table of edges keyed by
//! `(source, target)`. Celsius is the hub of the graph, so Fahrenheit and
//! Kelvin only have edges to and from Celsius and `F → K` resolves as
//! `F → C → K`. A pair with no edge and no route through the hub is the single
//! [`AtmosError::InvalidUnitConversion`] path.
//!
//! # Usage
//! ```
//! use wx_diag_core::core_types::{Temperature, TemperatureUnit};
//!
//! let freezing = Temperature::fahrenheit(32.0).unwrap();
//! let celsius = freezing.convert(TemperatureUnit::Celsius).unwrap();
//! assert_eq!(celsius.value(), 0.0);
//! ```

use crate::error::{AtmosError, AtmosResult};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Celsius to Kelvin conversion offset (0°C = 273.15 K)
pub(crate) const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

/// Slack allowed below 0 K so that `-459.67°F` survives float rounding
const ABSOLUTE_ZERO_SLACK: f64 = 1e-9;

/// Closed set of temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Every supported temperature unit
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// Unit every other unit converts through
    pub const HUB: TemperatureUnit = TemperatureUnit::Celsius;

    /// Display symbol
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = AtmosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "°c" | "degc" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "°f" | "degf" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
            _ => Err(AtmosError::unknown_unit(s, "a temperature unit (C, F, K)")),
        }
    }
}

type Edge = fn(f64) -> f64;

/// Direct conversion edges. Only hub edges are listed.
static CONVERSIONS: LazyLock<FxHashMap<(TemperatureUnit, TemperatureUnit), Edge>> =
    LazyLock::new(|| {
        use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

        let mut table: FxHashMap<(TemperatureUnit, TemperatureUnit), Edge> = FxHashMap::default();
        table.insert((Celsius, Fahrenheit), |c| c * 1.8 + 32.0);
        table.insert((Fahrenheit, Celsius), |f| (f - 32.0) * 5.0 / 9.0);
        table.insert((Celsius, Kelvin), |c| c + CELSIUS_KELVIN_OFFSET);
        table.insert((Kelvin, Celsius), |k| k - CELSIUS_KELVIN_OFFSET);
        table
    });

/// Convert a raw magnitude between units.
///
/// Same-unit conversion is the identity. Otherwise a direct edge is tried
/// first, then the walk `from → HUB → to`.
pub fn convert_value(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> AtmosResult<f64> {
    if from == to {
        return Ok(value);
    }
    if let Some(edge) = CONVERSIONS.get(&(from, to)) {
        return Ok(edge(value));
    }
    match (
        CONVERSIONS.get(&(from, TemperatureUnit::HUB)),
        CONVERSIONS.get(&(TemperatureUnit::HUB, to)),
    ) {
        (Some(into_hub), Some(out_of_hub)) => Ok(out_of_hub(into_hub(value))),
        _ => Err(AtmosError::InvalidUnitConversion {
            from: from.to_string(),
            to: to.to_string(),
        }),
    }
}

/// A temperature: magnitude plus the unit it is expressed in.
///
/// Always finite and never below absolute zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTemperature")]
pub struct Temperature {
    value: f64,
    unit: TemperatureUnit,
}

#[derive(Deserialize)]
struct RawTemperature {
    value: f64,
    unit: TemperatureUnit,
}

impl TryFrom<RawTemperature> for Temperature {
    type Error = AtmosError;

    fn try_from(raw: RawTemperature) -> Result<Self, Self::Error> {
        Temperature::new(raw.value, raw.unit)
    }
}

impl Temperature {
    /// Create a temperature, rejecting non-finite values and values below
    /// absolute zero.
    pub fn new(value: f64, unit: TemperatureUnit) -> AtmosResult<Self> {
        if !value.is_finite() {
            return Err(AtmosError::domain_range(
                "temperature",
                format!("{value} is not a finite number"),
            ));
        }
        let kelvin = convert_value(value, unit, TemperatureUnit::Kelvin)?;
        if kelvin < -ABSOLUTE_ZERO_SLACK {
            return Err(AtmosError::domain_range(
                "temperature",
                format!("{value:.2}{} is below absolute zero", unit.symbol()),
            ));
        }
        Ok(Self { value, unit })
    }

    /// Temperature in degrees Celsius
    pub fn celsius(value: f64) -> AtmosResult<Self> {
        Self::new(value, TemperatureUnit::Celsius)
    }

    /// Temperature in degrees Fahrenheit
    pub fn fahrenheit(value: f64) -> AtmosResult<Self> {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    /// Temperature in Kelvin
    pub fn kelvin(value: f64) -> AtmosResult<Self> {
        Self::new(value, TemperatureUnit::Kelvin)
    }

    /// Magnitude in this temperature's own unit
    #[inline]
    pub fn value(self) -> f64 {
        self.value
    }

    #[inline]
    pub fn unit(self) -> TemperatureUnit {
        self.unit
    }

    /// Return the same temperature expressed in `target`.
    pub fn convert(self, target: TemperatureUnit) -> AtmosResult<Self> {
        let value = convert_value(self.value, self.unit, target)?;
        Ok(Self {
            value,
            unit: target,
        })
    }

    /// Magnitude in `target` without building a new `Temperature`.
    pub fn value_in(self, target: TemperatureUnit) -> AtmosResult<f64> {
        convert_value(self.value, self.unit, target)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}{}", self.value, self.unit.symbol())
    }
}
