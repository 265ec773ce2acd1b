//! A computed value together with any warning raised while computing it

use crate::error::{AtmosResult, DiagnosticWarning};
use serde::Serialize;
use std::fmt;

/// Result of a diagnostic that can fall back instead of failing.
///
/// When `warning` is set, `value` is the fallback the formula prescribes
/// (for heat index and wind chill: the unmodified input temperature).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic<T> {
    value: T,
    warning: Option<DiagnosticWarning>,
}

impl<T> Diagnostic<T> {
    pub(crate) fn valid(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    pub(crate) fn flagged(value: T, warning: DiagnosticWarning) -> Self {
        Self {
            value,
            warning: Some(warning),
        }
    }

    /// Take over `upstream`'s warning unless this value already has one.
    ///
    /// Used when a diagnostic is computed from another, possibly flagged,
    /// diagnostic.
    pub(crate) fn inherit_warning<U>(mut self, upstream: &Diagnostic<U>) -> Self {
        if self.warning.is_none() {
            self.warning.clone_from(&upstream.warning);
        }
        self
    }

    pub fn value(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn warning(&self) -> Option<&DiagnosticWarning> {
        self.warning.as_ref()
    }

    /// True when no warning was raised
    pub fn is_valid(&self) -> bool {
        self.warning.is_none()
    }

    /// Turn a warning into a hard failure.
    pub fn into_strict(self) -> AtmosResult<T> {
        match self.warning {
            None => Ok(self.value),
            Some(warning) => Err(warning.into()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Diagnostic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.warning {
            None => write!(f, "{}", self.value),
            Some(warning) => write!(f, "{} ({warning})", self.value),
        }
    }
}
