//! Numeric constraints enforced at construction time.
//!
//! A [`Constrained<T, C>`] can only be built from a value that satisfies the
//! marker constraint `C`, so code holding one never re-checks the bound.
//!
//! # Provided Constraints
//!
//! - [`StrictlyPositive`]: greater than zero
//! - [`CourantRange`]: the stable CFL window `0 < x ≤ 0.5`
//! - [`AboveOne`]: greater than one
//!
//! # Extending
//!
//! Custom invariants are added by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod above_one;
mod courant_range;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use above_one::AboveOne;
pub use courant_range::CourantRange;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use shoal_core::constraint::{Constrained, StrictlyPositive};
///
/// let n = Constrained::<_, StrictlyPositive>::new(42.0).unwrap();
/// assert_eq!(n.into_inner(), 42.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, C: Constraint<T>> serde::Serialize for Constrained<T, C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Deserializes the inner value and re-checks the constraint.
#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>, C: Constraint<T>> serde::Deserialize<'de>
    for Constrained<T, C>
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
