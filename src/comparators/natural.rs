use std::fmt;
use std::marker::PhantomData;

use crate::comparable::Comparable;
use crate::errors::ComparisonResult;
use crate::ordering::Ordering;

use super::Comparator;

/// Compares [`Comparable`] values with [`Comparable::compare_to`] of the left-hand side.
pub struct NaturalOrder<T> {
    phantom: PhantomData<fn() -> T>,
}

/// Public methods
impl<T> NaturalOrder<T> {
    /// Create a new [`NaturalOrder`] comparator.
    pub fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<T: Comparable> Comparator<T> for NaturalOrder<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> ComparisonResult<Ordering> {
        lhs.compare_to(rhs)
    }
}

impl<T> Default for NaturalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NaturalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NaturalOrder<T> {}

impl<T> fmt::Debug for NaturalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NaturalOrder<{}>", std::any::type_name::<T>())
    }
}
