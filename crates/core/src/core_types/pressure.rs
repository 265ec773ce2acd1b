//! Pressure quantities tagged with their unit
//!
//! Pressure units are linear scalings of one another, so the conversion table
//! stores a multiplicative factor per `(source, target)` edge with millibars
//! as the hub. Millibars and hectopascals are numerically equal by definition.

use crate::error::{AtmosError, AtmosResult};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Millibars per inch of mercury (at 0°C, standard gravity)
pub const MILLIBARS_PER_INCH_OF_MERCURY: f64 = 33.8639;

/// Pascals per millibar
const PASCALS_PER_MILLIBAR: f64 = 100.0;

/// Closed set of pressure units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    Millibars,
    Hectopascals,
    InchesOfMercury,
}

impl PressureUnit {
    pub const ALL: [PressureUnit; 3] = [
        PressureUnit::Millibars,
        PressureUnit::Hectopascals,
        PressureUnit::InchesOfMercury,
    ];

    /// Unit every other unit converts through
    pub const HUB: PressureUnit = PressureUnit::Millibars;

    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Millibars => "mb",
            PressureUnit::Hectopascals => "hPa",
            PressureUnit::InchesOfMercury => "inHg",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for PressureUnit {
    type Err = AtmosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mb" | "mbar" | "millibar" | "millibars" => Ok(PressureUnit::Millibars),
            "hpa" | "hectopascal" | "hectopascals" => Ok(PressureUnit::Hectopascals),
            "inhg" | "in" | "inches" => Ok(PressureUnit::InchesOfMercury),
            _ => Err(AtmosError::unknown_unit(s, "a pressure unit (mb, hPa, inHg)")),
        }
    }
}

/// Multiplicative factors: `target = source * factor`
static FACTORS: LazyLock<FxHashMap<(PressureUnit, PressureUnit), f64>> = LazyLock::new(|| {
    use PressureUnit::{Hectopascals, InchesOfMercury, Millibars};

    let mut table = FxHashMap::default();
    table.insert((Millibars, Hectopascals), 1.0);
    table.insert((Hectopascals, Millibars), 1.0);
    table.insert((InchesOfMercury, Millibars), MILLIBARS_PER_INCH_OF_MERCURY);
    table.insert((Millibars, InchesOfMercury), 1.0 / MILLIBARS_PER_INCH_OF_MERCURY);
    table
});

/// Convert a raw magnitude between pressure units.
pub fn convert_value(value: f64, from: PressureUnit, to: PressureUnit) -> AtmosResult<f64> {
    if from == to {
        return Ok(value);
    }
    if let Some(factor) = FACTORS.get(&(from, to)) {
        return Ok(value * factor);
    }
    match (
        FACTORS.get(&(from, PressureUnit::HUB)),
        FACTORS.get(&(PressureUnit::HUB, to)),
    ) {
        (Some(into_hub), Some(out_of_hub)) => Ok(value * into_hub * out_of_hub),
        _ => Err(AtmosError::InvalidUnitConversion {
            from: from.to_string(),
            to: to.to_string(),
        }),
    }
}

/// A pressure: strictly positive magnitude plus its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPressure")]
pub struct Pressure {
    value: f64,
    unit: PressureUnit,
}

#[derive(Deserialize)]
struct RawPressure {
    value: f64,
    unit: PressureUnit,
}

impl TryFrom<RawPressure> for Pressure {
    type Error = AtmosError;

    fn try_from(raw: RawPressure) -> Result<Self, Self::Error> {
        Pressure::new(raw.value, raw.unit)
    }
}

impl Pressure {
    /// Reference pressure for potential temperature (1000 mb)
    pub const REFERENCE: Pressure = Pressure {
        value: 1000.0,
        unit: PressureUnit::Millibars,
    };

    /// Create a pressure. Non-finite or non-positive values are a domain
    /// error.
    pub fn new(value: f64, unit: PressureUnit) -> AtmosResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(AtmosError::domain_range(
                "pressure",
                format!("{value} {} must be finite and strictly positive", unit.symbol()),
            ));
        }
        Ok(Self { value, unit })
    }

    pub fn millibars(value: f64) -> AtmosResult<Self> {
        Self::new(value, PressureUnit::Millibars)
    }

    pub fn hectopascals(value: f64) -> AtmosResult<Self> {
        Self::new(value, PressureUnit::Hectopascals)
    }

    pub fn inches_of_mercury(value: f64) -> AtmosResult<Self> {
        Self::new(value, PressureUnit::InchesOfMercury)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.value
    }

    #[inline]
    pub fn unit(self) -> PressureUnit {
        self.unit
    }

    /// Return the same pressure expressed in `target`.
    pub fn convert(self, target: PressureUnit) -> AtmosResult<Self> {
        let value = convert_value(self.value, self.unit, target)?;
        Ok(Self {
            value,
            unit: target,
        })
    }

    /// Magnitude in `target` without building a new `Pressure`.
    pub fn value_in(self, target: PressureUnit) -> AtmosResult<f64> {
        convert_value(self.value, self.unit, target)
    }

    /// Raw magnitude in pascals (`mb * 100`)
    pub fn to_pascals(self) -> AtmosResult<f64> {
        Ok(self.value_in(PressureUnit::Millibars)? * PASCALS_PER_MILLIBAR)
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            PressureUnit::InchesOfMercury => write!(f, "{:.2} {}", self.value, self.unit),
            _ => write!(f, "{:.1} {}", self.value, self.unit),
        }
    }
}
