use std::cmp::Ordering;

use num_traits::Zero;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive: `x > 0`.
///
/// Used for thresholds, strengths, and step sizes that have no meaningful
/// zero.
///
/// # Examples
///
/// ```
/// use shoal_core::constraint::{Constrained, StrictlyPositive};
///
/// let a = Constrained::<_, StrictlyPositive>::new(1e-6).unwrap();
/// assert_eq!(a.into_inner(), 1e-6);
///
/// let b = StrictlyPositive::new(f64::INFINITY).unwrap();
/// assert!(b.as_ref().is_infinite());
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-2.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if `value > 0`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Zero`] if equal to zero.
    /// - [`ConstraintError::Negative`] if less than zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
