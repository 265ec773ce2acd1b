//! Semantic newtypes for the scalar quantities that accompany an observation
//!
//! Temperatures and pressures carry a runtime unit tag (see
//! [`temperature`](super::temperature) and [`pressure`](super::pressure)).
//! The quantities here have one canonical unit each, so the unit lives in the
//! type instead:
//! - [`Percent`] for relative humidity
//! - [`MilesPerHour`] for wind speed, with conversions from
//!   [`KilometersPerHour`] and [`MetersPerSecond`]
//! - [`GramsPerKilogram`] for mixing ratio
//!
//! Total ordering via `Ord` (NaN handled as greater than all values), matching
//! the rest of the quantity types.

use crate::error::{AtmosError, AtmosResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// Kilometres per statute mile
const KM_PER_MILE: f64 = 1.609344;

/// Seconds per hour
const SECONDS_PER_HOUR: f64 = 3600.0;

#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// HUMIDITY
// ============================================================================

/// A percentage. Relative humidity may legitimately exceed 100 in
/// supersaturated air, so no upper bound is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Percent(f64);

impl Eq for Percent {}

impl PartialOrd for Percent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percent {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Percent {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Percent {
    /// Saturation (100 %)
    pub const SATURATED: Percent = Percent(100.0);

    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Percent(value)
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to fraction (0-1)
    #[inline]
    #[must_use]
    pub fn to_fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl From<f64> for Percent {
    fn from(v: f64) -> Self {
        Percent(v)
    }
}

impl From<Percent> for f64 {
    fn from(p: Percent) -> f64 {
        p.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

// ============================================================================
// WIND SPEED
// ============================================================================

/// Wind speed in statute miles per hour (the unit of the NWS wind chill
/// regression). Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MilesPerHour(f64);

impl Eq for MilesPerHour {}

impl PartialOrd for MilesPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MilesPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for MilesPerHour {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MilesPerHour {
    /// Calm air
    pub const CALM: MilesPerHour = MilesPerHour(0.0);

    /// Create a wind speed. Negative or non-finite speeds are a domain error.
    pub fn new(value: f64) -> AtmosResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(AtmosError::domain_range(
                "wind speed",
                format!("{value} mph must be finite and non-negative"),
            ));
        }
        Ok(MilesPerHour(value))
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn to_kmh(self) -> KilometersPerHour {
        KilometersPerHour(self.0 * KM_PER_MILE)
    }
}

impl TryFrom<f64> for MilesPerHour {
    type Error = AtmosError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        MilesPerHour::new(v)
    }
}

impl From<MilesPerHour> for f64 {
    fn from(v: MilesPerHour) -> f64 {
        v.0
    }
}

impl TryFrom<KilometersPerHour> for MilesPerHour {
    type Error = AtmosError;

    fn try_from(v: KilometersPerHour) -> Result<Self, Self::Error> {
        MilesPerHour::new(v.0 / KM_PER_MILE)
    }
}

impl TryFrom<MetersPerSecond> for MilesPerHour {
    type Error = AtmosError;

    fn try_from(v: MetersPerSecond) -> Result<Self, Self::Error> {
        MilesPerHour::new(v.0 * SECONDS_PER_HOUR / (KM_PER_MILE * 1000.0))
    }
}

impl fmt::Display for MilesPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} mph", self.0)
    }
}

/// Wind speed in km/h, as most non-US feeds report it
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilometersPerHour(f64);

impl KilometersPerHour {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilometersPerHour(value)
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for KilometersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km/h", self.0)
    }
}

/// Wind speed in m/s
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MetersPerSecond(f64);

impl MetersPerSecond {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MetersPerSecond(value)
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for MetersPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} m/s", self.0)
    }
}

// ============================================================================
// MIXING RATIO
// ============================================================================

/// Mass of water vapour per mass of dry air (g/kg)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct GramsPerKilogram(f64);

impl GramsPerKilogram {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        GramsPerKilogram(value)
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Deref for GramsPerKilogram {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl fmt::Display for GramsPerKilogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} g/kg", self.0)
    }
}
