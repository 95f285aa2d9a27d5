use std::cmp::Ordering;

use num_traits::One;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is greater than one: `x > 1`.
///
/// # Examples
///
/// ```
/// use shoal_core::constraint::AboveOne;
///
/// assert_eq!(AboveOne::new(3_i64).unwrap().into_inner(), 3);
/// assert!(AboveOne::new(1_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveOne;

impl AboveOne {
    /// Constructs `Constrained<T, AboveOne>` if `value > 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + One>(value: T) -> Result<Constrained<T, AboveOne>, ConstraintError> {
        Constrained::<T, AboveOne>::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for AboveOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Ok(()),
            Some(_) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
