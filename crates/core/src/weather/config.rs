//! Tunable thresholds for the diagnostic engine

use crate::core_types::{Percent, Pressure};
use crate::error::{AtmosError, AtmosResult};
use serde::{Deserialize, Serialize};

/// Engine configuration
///
/// Fields are only reachable through validating setters, so a NaN or
/// negative tolerance can never switch off the supersaturation check.
///
/// # Example
/// ```
/// use wx_diag_core::core_types::{Percent, Pressure};
/// use wx_diag_core::weather::AtmosphereConfig;
///
/// let config = AtmosphereConfig::default()
///     .with_supersaturation_tolerance(Percent::new(0.5))
///     .unwrap();
/// assert_eq!(config.reference_pressure(), Pressure::REFERENCE);
/// assert!(AtmosphereConfig::default().with_supersaturation_tolerance(Percent::new(f64::NAN)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAtmosphereConfig")]
pub struct AtmosphereConfig {
    /// How far above 100 % relative humidity may go before it is flagged as
    /// supersaturated (percentage points)
    ///
    /// Slight excess is normal measurement noise when `Td ≈ T`.
    supersaturation_tolerance: Percent,

    /// Reference pressure `P0` of the potential temperature
    ///
    /// 1000 mb by meteorological convention.
    reference_pressure: Pressure,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawAtmosphereConfig {
    supersaturation_tolerance: Percent,
    reference_pressure: Pressure,
}

impl Default for RawAtmosphereConfig {
    fn default() -> Self {
        let config = AtmosphereConfig::default();
        Self {
            supersaturation_tolerance: config.supersaturation_tolerance,
            reference_pressure: config.reference_pressure,
        }
    }
}

impl TryFrom<RawAtmosphereConfig> for AtmosphereConfig {
    type Error = AtmosError;

    fn try_from(raw: RawAtmosphereConfig) -> Result<Self, Self::Error> {
        AtmosphereConfig::new(raw.supersaturation_tolerance, raw.reference_pressure)
    }
}

fn validate_tolerance(tolerance: Percent) -> AtmosResult<Percent> {
    if !tolerance.value().is_finite() || tolerance.value() < 0.0 {
        return Err(AtmosError::domain_range(
            "supersaturation tolerance",
            format!("{} must be finite and non-negative", tolerance.value()),
        ));
    }
    Ok(tolerance)
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            supersaturation_tolerance: Percent::new(1.0),
            reference_pressure: Pressure::REFERENCE,
        }
    }
}

impl AtmosphereConfig {
    /// Create a configuration. The tolerance must be finite and non-negative.
    pub fn new(supersaturation_tolerance: Percent, reference_pressure: Pressure) -> AtmosResult<Self> {
        Ok(Self {
            supersaturation_tolerance: validate_tolerance(supersaturation_tolerance)?,
            reference_pressure,
        })
    }

    pub fn with_supersaturation_tolerance(mut self, tolerance: Percent) -> AtmosResult<Self> {
        self.supersaturation_tolerance = validate_tolerance(tolerance)?;
        Ok(self)
    }

    /// `Pressure` is positive by construction, so this cannot fail.
    pub fn with_reference_pressure(mut self, reference_pressure: Pressure) -> Self {
        self.reference_pressure = reference_pressure;
        self
    }

    pub fn supersaturation_tolerance(&self) -> Percent {
        self.supersaturation_tolerance
    }

    pub fn reference_pressure(&self) -> Pressure {
        self.reference_pressure
    }
}
