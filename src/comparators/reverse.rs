use crate::errors::ComparisonResult;
use crate::ordering::Ordering;

use super::Comparator;

/// Reverses any comparator by swapping the operands.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseComparator<C> {
    /// The comparator that is reversed.
    comparator: C,
}

/// Public methods
impl<C> ReverseComparator<C> {
    /// Reverse the given comparator.
    pub fn new(comparator: C) -> Self {
        Self { comparator }
    }

    /// Get a reference to the reversed comparator.
    pub fn inner(&self) -> &C {
        &self.comparator
    }

    /// Unwrap the reversed comparator.
    pub fn into_inner(self) -> C {
        self.comparator
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for ReverseComparator<C> {
    fn compare(&self, lhs: &T, rhs: &T) -> ComparisonResult<Ordering> {
        self.comparator.compare(rhs, lhs)
    }
}
