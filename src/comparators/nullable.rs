use crate::errors::ComparisonResult;
use crate::ordering::Ordering;
use crate::value::Value;

use super::{Comparator, DefaultComparator};

/**
Compares values like the [`DefaultComparator`] but accepts null on either side.

Null is equal to null and less than every other value.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct NullableComparator;

impl Comparator<Value> for NullableComparator {
    fn compare(&self, lhs: &Value, rhs: &Value) -> ComparisonResult<Ordering> {
        match (lhs.is_null(), rhs.is_null()) {
            (true, true) => Ok(Ordering::Equal),
            (true, false) => Ok(Ordering::Less),
            (false, true) => Ok(Ordering::Greater),
            (false, false) => DefaultComparator.compare(lhs, rhs),
        }
    }
}
