use crate::arrays::{NestedSequenceComparator, Sparse};
use crate::errors::{ComparisonError, ComparisonResult};
use crate::ordering::Ordering;
use crate::value::Value;

use super::Comparator;

/**
The default comparator for [`Value`]s.

Both sides must be of the same [`ValueKind`](crate::ValueKind), otherwise the comparison fails with
a [`ComparisonError::TypeMismatch`]. Same kinds compare as follows:

- null is equal to null
- booleans, integers and strings use their natural order
- floats use the total order of [`f64::total_cmp`], so `NaN` equals itself and `-0.0` is less
  than `0.0`
- arrays are compared like the
  [`SparseRecursiveArrayComparator`](crate::arrays::SparseRecursiveArrayComparator) does
- objects are compared with [`Comparable::compare_to`](crate::Comparable::compare_to) of the
  left-hand side
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultComparator;

impl Comparator<Value> for DefaultComparator {
    fn compare(&self, lhs: &Value, rhs: &Value) -> ComparisonResult<Ordering> {
        match (lhs, rhs) {
            (Value::Null, Value::Null) => Ok(Ordering::Equal),
            (Value::Bool(left), Value::Bool(right)) => Ok(left.cmp(right).into()),
            (Value::Int(left), Value::Int(right)) => Ok(left.cmp(right).into()),
            (Value::Float(left), Value::Float(right)) => Ok(left.total_cmp(right).into()),
            (Value::Str(left), Value::Str(right)) => Ok(left.cmp(right).into()),
            (Value::Array(left), Value::Array(right)) => {
                NestedSequenceComparator::new(DefaultComparator, Sparse).compare_arrays(left, right)
            }
            (Value::Object(left), Value::Object(right)) => left.compare_object(right.as_ref()),
            _ => Err(ComparisonError::type_mismatch(lhs, rhs)),
        }
    }
}
