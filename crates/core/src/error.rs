//! Error and warning types for atmospheric diagnostics.
//!
//! Hard failures abort an operation and surface as [`AtmosError`]. Empirical
//! formulas evaluated outside their validated envelope, and humidity readings
//! that exceed saturation, are not failures: they travel as a
//! [`DiagnosticWarning`] next to a fallback value inside
//! [`Diagnostic`](crate::core_types::Diagnostic).

use crate::core_types::Percent;
use serde::Serialize;
use thiserror::Error;

/// Result type alias using `AtmosError`.
pub type AtmosResult<T> = Result<T, AtmosError>;

/// Primary error type for unit conversion and diagnostic operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtmosError {
    /// No conversion path exists between the two units, or a unit symbol was
    /// not recognised.
    #[error("Cannot convert from {from} to {to}")]
    InvalidUnitConversion { from: String, to: String },

    /// A diagnostic needed an ambient field that is absent and no override
    /// was supplied.
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    /// A logarithm or division argument fell outside its mathematical domain.
    #[error("Numeric domain error in {operation}: {message}")]
    NumericDomain {
        operation: &'static str,
        message: String,
    },

    /// A physically impossible magnitude (non-positive pressure, temperature
    /// below absolute zero, `P <= e` in the mixing ratio).
    #[error("{quantity} out of physical range: {message}")]
    DomainRange {
        quantity: &'static str,
        message: String,
    },

    /// A warning promoted to a hard failure by `Diagnostic::into_strict`.
    #[error("Diagnostic rejected: {0}")]
    Rejected(#[from] DiagnosticWarning),
}

impl AtmosError {
    /// Error for a unit symbol that does not name any known unit.
    pub fn unknown_unit(symbol: &str, expected: &str) -> Self {
        Self::InvalidUnitConversion {
            from: format!("'{symbol}'"),
            to: expected.to_string(),
        }
    }

    pub(crate) fn domain_range(quantity: &'static str, message: impl Into<String>) -> Self {
        Self::DomainRange {
            quantity,
            message: message.into(),
        }
    }

    pub(crate) fn numeric_domain(operation: &'static str, message: impl Into<String>) -> Self {
        Self::NumericDomain {
            operation,
            message: message.into(),
        }
    }
}

/// Non-fatal conditions attached to a diagnostic value.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum DiagnosticWarning {
    /// Inputs lie outside the range an empirical regression was fitted on.
    /// The accompanying value is the unmodified input temperature (NWS
    /// convention).
    #[error("{formula} outside its validated range: {message}")]
    FormulaRange {
        formula: &'static str,
        message: String,
    },

    /// Relative humidity exceeds 100 % by more than the configured tolerance.
    #[error("Relative humidity {humidity} exceeds saturation by more than {tolerance}")]
    Supersaturation { humidity: Percent, tolerance: Percent },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_unit_message() {
        let err = AtmosError::unknown_unit("R", "a temperature unit");
        assert_eq!(err.to_string(), "Cannot convert from 'R' to a temperature unit");
    }

    #[test]
    fn test_warning_promotes_to_error() {
        let warning = DiagnosticWarning::FormulaRange {
            formula: "heat index",
            message: "T = 70.0°F below 80°F".to_string(),
        };
        let err: AtmosError = warning.clone().into();
        assert_eq!(err, AtmosError::Rejected(warning));
        assert!(err.to_string().starts_with("Diagnostic rejected: heat index"));
    }
}
