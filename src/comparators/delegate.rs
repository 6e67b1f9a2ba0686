use std::cmp;
use std::fmt;

use crate::errors::ComparisonResult;
use crate::ordering::Ordering;

use super::Comparator;

/// The boxed closure a [`ComparatorDelegate`] forwards to.
type DelegateFn<T> = dyn Fn(&T, &T) -> ComparisonResult<Ordering> + Send + Sync;

/**
Creates a comparator from a closure without the need to implement a dedicated struct.

# Examples

```
use comparables::comparators::{sort_by_comparator, ComparatorDelegate};

let by_length = ComparatorDelegate::from_fn(|lhs: &&str, rhs: &&str| lhs.len().cmp(&rhs.len()));

let mut words = vec!["three", "one", "eleven"];
sort_by_comparator(&mut words, &by_length).unwrap();

assert_eq!(words, vec!["one", "three", "eleven"]);
```
*/
pub struct ComparatorDelegate<T> {
    delegate: Box<DelegateFn<T>>,
}

/// Public methods
impl<T> ComparatorDelegate<T> {
    /// Create a comparator from a fallible closure.
    pub fn new<F>(delegate: F) -> Self
    where
        F: Fn(&T, &T) -> ComparisonResult<Ordering> + Send + Sync + 'static,
    {
        Self {
            delegate: Box::new(delegate),
        }
    }

    /// Create a comparator from an infallible closure like the ones taken by [`slice::sort_by`].
    pub fn from_fn<F>(delegate: F) -> Self
    where
        F: Fn(&T, &T) -> cmp::Ordering + Send + Sync + 'static,
    {
        Self::new(move |lhs: &T, rhs: &T| Ok(Ordering::from(delegate(lhs, rhs))))
    }
}

impl<T> Comparator<T> for ComparatorDelegate<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> ComparisonResult<Ordering> {
        (self.delegate)(lhs, rhs)
    }
}

impl<T> fmt::Debug for ComparatorDelegate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorDelegate").finish_non_exhaustive()
    }
}
