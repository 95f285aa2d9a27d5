//! Conversion of raw value strings into typed field values.

use shoal_core::constraint::{Constrained, Constraint, ConstraintError};

use crate::{FatalError, Label};

/// A recognized label with its raw value, ready for conversion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry<'a> {
    pub label: Label,
    pub value: &'a str,
    pub source_file: &'a str,
}

impl<'a> Entry<'a> {
    pub fn new(label: Label, value: &'a str, source_file: &'a str) -> Self {
        Self {
            label,
            value: value.trim(),
            source_file,
        }
    }

    /// Parses the value as a real number. NaN and infinities are accepted.
    pub fn real(&self) -> Result<f64, FatalError> {
        self.value.parse().map_err(|_| self.malformed())
    }

    /// Parses the value as a finite real number.
    pub fn finite_real(&self) -> Result<f64, FatalError> {
        let x = self.real()?;
        if x.is_finite() { Ok(x) } else { Err(self.malformed()) }
    }

    /// Parses the value as a signed integer.
    pub fn integer(&self) -> Result<i64, FatalError> {
        self.value.parse().map_err(|_| self.malformed())
    }

    /// Parses an `on`/`off` switch, ignoring case.
    pub fn switch(&self) -> Option<bool> {
        match self.value.to_lowercase().as_str() {
            "on" => Some(true),
            "off" => Some(false),
            _ => None,
        }
    }

    /// Checks `raw` against constraint `C`, returning it unwrapped.
    pub fn check<C, T>(&self, raw: T) -> Result<T, FatalError>
    where
        C: Constraint<T>,
    {
        Constrained::<T, C>::new(raw)
            .map(Constrained::into_inner)
            .map_err(|reason| self.out_of_range(reason))
    }

    /// Formats the warning for a token that names no known option.
    pub fn unrecognized(&self, fallback: &str) -> String {
        format!(
            "{}: unrecognized {} '{}' (expected {}), using {fallback}",
            self.source_file,
            self.label,
            self.value,
            self.label.requirement()
        )
    }

    pub fn malformed(&self) -> FatalError {
        FatalError::Malformed {
            source_file: self.source_file.to_owned(),
            label: self.label,
            value: self.value.to_owned(),
        }
    }

    pub fn out_of_range(&self, reason: ConstraintError) -> FatalError {
        FatalError::OutOfRange {
            source_file: self.source_file.to_owned(),
            label: self.label,
            value: self.value.to_owned(),
            reason,
        }
    }
}
