use crate::comparators::Comparator;
use crate::errors::ComparisonResult;
use crate::ordering::Ordering;
use crate::value::{Array, Value};

use super::expect_arrays;
use super::policy::MismatchPolicy;

/**
Compares unidimensional arrays entry by entry.

The arrays are first compared by length. Arrays of different lengths are handed to the
[`MismatchPolicy`] without looking at any entry. Otherwise the entries of the left-hand side are
visited in iteration order and compared with the right-hand entry under the same key using the
element comparator. The first entry that is not equal decides the result.

Nested arrays are leaves to this comparator and are handed to the element comparator as they are.
Use the [`NestedSequenceComparator`](super::NestedSequenceComparator) to descend into them.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceComparator<E, P> {
    /// The comparator used for individual entries.
    element_comparator: E,

    /// The hooks for arrays that do not line up.
    policy: P,
}

/// Public methods
impl<E, P> SequenceComparator<E, P> {
    /// Create a new [`SequenceComparator`].
    pub fn new(element_comparator: E, policy: P) -> Self {
        Self {
            element_comparator,
            policy,
        }
    }

    /// Get a reference to the element comparator.
    pub fn element_comparator(&self) -> &E {
        &self.element_comparator
    }

    /// Get a reference to the mismatch policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<E, P> SequenceComparator<E, P>
where
    E: Comparator<Value>,
    P: MismatchPolicy,
{
    /// Compare two arrays.
    pub fn compare_arrays(&self, lhs: &Array, rhs: &Array) -> ComparisonResult<Ordering> {
        if lhs.is_empty() && rhs.is_empty() {
            return Ok(Ordering::Equal);
        }

        let left_len = lhs.len();
        let right_len = rhs.len();
        if left_len != right_len {
            let natural = Ordering::from(left_len.cmp(&right_len));
            log::trace!(
                "Arrays with {} and {} entries do not line up. Consulting the size mismatch policy.",
                left_len,
                right_len
            );
            return self.policy.on_size_mismatch(left_len, right_len, natural);
        }

        for (key, left_value) in lhs.iter() {
            let Some(right_value) = rhs.get(key) else {
                log::trace!(
                    "Key `{}` is missing from the right-hand side. Consulting the missing key policy.",
                    key
                );
                return self.policy.on_missing_key(left_value, key);
            };

            let order = self.element_comparator.compare(left_value, right_value)?;
            if !order.is_equal() {
                return Ok(order);
            }
        }

        Ok(Ordering::Equal)
    }
}

impl<E, P> Comparator<Value> for SequenceComparator<E, P>
where
    E: Comparator<Value>,
    P: MismatchPolicy,
{
    fn compare(&self, lhs: &Value, rhs: &Value) -> ComparisonResult<Ordering> {
        let (lhs, rhs) = expect_arrays(lhs, rhs)?;

        self.compare_arrays(lhs, rhs).map_err(|err| {
            log::debug!("Array comparison failed. Error: {}", err);
            err
        })
    }
}
