/*!
Array comparators compare two [`Array`]s entry by entry and produce a total order.

There are two engines:

1. [`SequenceComparator`] compares unidimensional arrays. Nested arrays are handed to the element
   comparator like any other value.
1. [`NestedSequenceComparator`] descends into nested arrays to any depth.

Both are configured with an element comparator for the leaves and a [`MismatchPolicy`] that
decides what happens when the lengths of two arrays differ or a key is missing from the right-hand
side. The type aliases in this module name the common configurations:

| Alias                                       | Engine     | Elements                | Policy     |
| ------------------------------------------- | ---------- | ----------------------- | ---------- |
| [`ArrayComparator`]                         | sequence   | [`DefaultComparator`]   | [`Strict`] |
| [`NullableArrayComparator`]                 | sequence   | [`NullableComparator`]  | [`Strict`] |
| [`SparseArrayComparator`]                   | sequence   | [`DefaultComparator`]   | [`Sparse`] |
| [`NullableSparseArrayComparator`]           | sequence   | [`NullableComparator`]  | [`Sparse`] |
| [`RecursiveArrayComparator`]                | nested     | [`DefaultComparator`]   | [`Strict`] |
| [`NullableRecursiveArrayComparator`]        | nested     | [`NullableComparator`]  | [`Strict`] |
| [`SparseRecursiveArrayComparator`]          | nested     | [`DefaultComparator`]   | [`Sparse`] |
| [`NullableSparseRecursiveArrayComparator`]  | nested     | [`NullableComparator`]  | [`Sparse`] |

# Examples

```
use comparables::{array, Ordering};
use comparables::arrays::{RecursiveArrayComparator, SparseRecursiveArrayComparator};

let lhs = array![1, array![2, array![3]]];
let rhs = array![1, array![2, array![]]];

assert!(RecursiveArrayComparator::default().compare_arrays(&lhs, &rhs).is_err());
assert_eq!(
    SparseRecursiveArrayComparator::default().compare_arrays(&lhs, &rhs).unwrap(),
    Ordering::Greater
);
```
*/

use crate::comparators::{DefaultComparator, NullableComparator};
use crate::errors::{ComparisonError, ComparisonResult};
use crate::value::{Array, Value};

mod nested;
pub use nested::NestedSequenceComparator;

mod policy;
pub use policy::{MismatchPolicy, Sparse, Strict};

mod sequence;
pub use sequence::SequenceComparator;

/// Compares unidimensional arrays with the same keys and matching types.
pub type ArrayComparator = SequenceComparator<DefaultComparator, Strict>;

/// Compares unidimensional arrays with the same keys and matching nullable types.
pub type NullableArrayComparator = SequenceComparator<NullableComparator, Strict>;

/// Compares unidimensional arrays with any keys and matching types.
pub type SparseArrayComparator = SequenceComparator<DefaultComparator, Sparse>;

/// Compares unidimensional arrays with any keys and matching nullable types.
pub type NullableSparseArrayComparator = SequenceComparator<NullableComparator, Sparse>;

/// Compares multidimensional arrays with the same keys and matching types.
pub type RecursiveArrayComparator = NestedSequenceComparator<DefaultComparator, Strict>;

/// Compares multidimensional arrays with the same keys and matching nullable types.
pub type NullableRecursiveArrayComparator = NestedSequenceComparator<NullableComparator, Strict>;

/// Compares multidimensional arrays with any keys and matching types.
pub type SparseRecursiveArrayComparator = NestedSequenceComparator<DefaultComparator, Sparse>;

/// Compares multidimensional arrays with any keys and matching nullable types.
pub type NullableSparseRecursiveArrayComparator =
    NestedSequenceComparator<NullableComparator, Sparse>;

/// Unwrap two values that must both be arrays.
fn expect_arrays<'a>(lhs: &'a Value, rhs: &'a Value) -> ComparisonResult<(&'a Array, &'a Array)> {
    match (lhs, rhs) {
        (Value::Array(left), Value::Array(right)) => Ok((left, right)),
        _ => Err(ComparisonError::type_mismatch(lhs, rhs)),
    }
}
