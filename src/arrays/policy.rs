/*!
This module provides the policies that decide what an array comparator does when the two arrays
under comparison do not line up.
*/

use crate::errors::{ComparisonError, ComparisonResult};
use crate::ordering::Ordering;
use crate::value::{Key, Value};

/**
Trait for the hooks an array comparator calls when its inputs do not line up.

Policies are stateless and chosen when a comparator is constructed. The value a hook returns, or
the error it fails with, is the result of the whole comparison.
*/
pub trait MismatchPolicy {
    /**
    Resolve two arrays of different lengths.

    `natural` is the ordering of `left_len` compared to `right_len`.
    */
    fn on_size_mismatch(
        &self,
        left_len: usize,
        right_len: usize,
        natural: Ordering,
    ) -> ComparisonResult<Ordering>;

    /// Resolve a key of the left-hand array that is absent from the right-hand array.
    fn on_missing_key(&self, left_value: &Value, key: &Key) -> ComparisonResult<Ordering>;
}

impl<P: MismatchPolicy + ?Sized> MismatchPolicy for &P {
    fn on_size_mismatch(
        &self,
        left_len: usize,
        right_len: usize,
        natural: Ordering,
    ) -> ComparisonResult<Ordering> {
        (**self).on_size_mismatch(left_len, right_len, natural)
    }

    fn on_missing_key(&self, left_value: &Value, key: &Key) -> ComparisonResult<Ordering> {
        (**self).on_missing_key(left_value, key)
    }
}

impl<P: MismatchPolicy + ?Sized> MismatchPolicy for Box<P> {
    fn on_size_mismatch(
        &self,
        left_len: usize,
        right_len: usize,
        natural: Ordering,
    ) -> ComparisonResult<Ordering> {
        (**self).on_size_mismatch(left_len, right_len, natural)
    }

    fn on_missing_key(&self, left_value: &Value, key: &Key) -> ComparisonResult<Ordering> {
        (**self).on_missing_key(left_value, key)
    }
}

/// Fails on every mismatch. Only arrays with the same keys can be compared.
#[derive(Clone, Copy, Debug, Default)]
pub struct Strict;

impl MismatchPolicy for Strict {
    fn on_size_mismatch(
        &self,
        left_len: usize,
        right_len: usize,
        _natural: Ordering,
    ) -> ComparisonResult<Ordering> {
        Err(ComparisonError::UncomparableSize {
            left_len,
            right_len,
        })
    }

    fn on_missing_key(&self, left_value: &Value, key: &Key) -> ComparisonResult<Ordering> {
        Err(ComparisonError::UncomparableKey {
            key: key.clone(),
            value: left_value.clone(),
        })
    }
}

/**
Resolves every mismatch.

The longer array is the greater one. A key that is missing from the right-hand side makes the
left-hand side greater.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct Sparse;

impl MismatchPolicy for Sparse {
    fn on_size_mismatch(
        &self,
        _left_len: usize,
        _right_len: usize,
        natural: Ordering,
    ) -> ComparisonResult<Ordering> {
        Ok(natural)
    }

    fn on_missing_key(&self, _left_value: &Value, _key: &Key) -> ComparisonResult<Ordering> {
        Ok(Ordering::Greater)
    }
}
