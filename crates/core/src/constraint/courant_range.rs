use std::cmp::Ordering;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing the left-open CFL window: `0 < x ≤ 0.5`.
///
/// Explicit schemes on the solver's grid are only stable for Courant numbers
/// in this range.
///
/// # Examples
///
/// ```
/// use shoal_core::constraint::CourantRange;
///
/// assert!(CourantRange::new(0.25).is_ok());
/// assert!(CourantRange::new(CourantRange::MAX).is_ok());
///
/// assert!(CourantRange::new(0.0).is_err());
/// assert!(CourantRange::new(0.51).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CourantRange;

impl CourantRange {
    /// The largest admissible Courant number.
    pub const MAX: f64 = 0.5;

    /// Constructs `Constrained<f64, CourantRange>` if `0 < value ≤ 0.5`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than [`Self::MAX`].
    /// - [`ConstraintError::NotANumber`] if the value is NaN.
    pub fn new(value: f64) -> Result<Constrained<f64, CourantRange>, ConstraintError> {
        Constrained::<f64, CourantRange>::new(value)
    }
}

impl Constraint<f64> for CourantRange {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&0.0), value.partial_cmp(&Self::MAX)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
