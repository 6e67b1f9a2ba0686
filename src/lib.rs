/*!
Comparables is a library of fallible, composable comparators. It provides an [`Ordering`] with an
explicit uncomparable state, a [`Comparable`] trait for types with a natural order and a family of
comparators that compare dynamically typed, arbitrarily nested arrays under configurable rules.

Comparisons never guess. When two values cannot be compared, the comparator fails with a
[`ComparisonError`] describing why, and the caller decides what to do with it.

# Example

```
use comparables::array;
use comparables::arrays::{ArrayComparator, SparseArrayComparator};
use comparables::comparators::sort_by_comparator;
use comparables::{Ordering, Value};

// Arrays with different keys cannot be compared strictly, but a sparse comparator resolves them
assert!(ArrayComparator::default()
    .compare_arrays(&array![0 => 1], &array![1 => 1])
    .is_err());
assert_eq!(
    SparseArrayComparator::default()
        .compare_arrays(&array![0 => 1], &array![1 => 1])
        .unwrap(),
    Ordering::Greater
);

// Comparators sort slices and report the first failed comparison
let mut rows: Vec<Value> = vec![array![3, 1].into(), array![1].into(), array![2, 2].into()];
sort_by_comparator(&mut rows, &SparseArrayComparator::default()).unwrap();
assert_eq!(
    rows.iter().map(ToString::to_string).collect::<Vec<_>>(),
    vec!["[0 => 1]", "[0 => 2, 1 => 2]", "[0 => 3, 1 => 1]"]
);
```
*/

#![warn(missing_debug_implementations, missing_docs)]

pub mod arrays;
pub mod comparators;
pub mod config;

mod comparable;
pub use comparable::{Comparable, ComparableObject};

mod errors;
pub use errors::{ComparisonError, ComparisonResult};

pub mod options;
pub use options::ArrayComparatorOptions;

mod ordering;
pub use ordering::Ordering;

mod value;
pub use value::{Array, Key, Value, ValueKind};
