/*!
This module contains the error type shared by every comparator in the crate.

All failures short-circuit a comparison and are handed to the caller unmodified. Callers that want
a boolean answer instead of a failure should go through the [`Comparable`](crate::Comparable)
convenience methods, which map failures to `false`.
*/

use thiserror::Error;

use crate::value::{Key, Value};

/// Result that wraps [`ComparisonError`].
pub type ComparisonResult<T> = Result<T, ComparisonError>;

/// Errors that can result from comparing two values.
#[derive(Debug, Error)]
pub enum ComparisonError {
    /**
    Variant for operands that do not have the expected shape, e.g. a non-array handed to an array
    comparator, two leaves of different kinds or a leaf facing a nested array.

    The fields hold a description of each operand.
    */
    #[error("Cannot compare {left} with {right}")]
    TypeMismatch {
        /// Description of the left-hand operand.
        left: String,
        /// Description of the right-hand operand.
        right: String,
    },

    /// Variant raised by the strict mismatch policy when two arrays differ in length.
    #[error(
        "Cannot compare sparse arrays, got {} on left- and {} on right-hand side",
        pluralize_elements(.left_len),
        pluralize_elements(.right_len)
    )]
    UncomparableSize {
        /// Number of elements on the left-hand side.
        left_len: usize,
        /// Number of elements on the right-hand side.
        right_len: usize,
    },

    /// Variant raised by the strict mismatch policy when a left-hand key is absent on the right.
    #[error(
        "Cannot compare {} against void, key `{key}` missing from right-hand side",
        .value.describe()
    )]
    UncomparableKey {
        /// The key that is missing from the right-hand side.
        key: Key,
        /// The left-hand value stored under the missing key.
        value: Value,
    },

    /// Variant for failures reported by a caller supplied element comparator.
    #[error("{0}")]
    ElementComparison(String),
}

/// Crate-only methods
impl ComparisonError {
    /// Construct a [`ComparisonError::TypeMismatch`] describing both operands.
    pub(crate) fn type_mismatch(left: &Value, right: &Value) -> Self {
        ComparisonError::TypeMismatch {
            left: left.describe(),
            right: right.describe(),
        }
    }
}

fn pluralize_elements(count: &usize) -> String {
    if *count == 1 {
        return "1 element".to_string();
    }

    format!("{} elements", count)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn size_errors_pluralize_the_element_counts() {
        let err = ComparisonError::UncomparableSize {
            left_len: 1,
            right_len: 0,
        };
        assert_eq!(
            err.to_string(),
            "Cannot compare sparse arrays, got 1 element on left- and 0 elements on right-hand side"
        );
    }

    #[test]
    fn key_errors_name_the_key_and_the_orphaned_value() {
        let err = ComparisonError::UncomparableKey {
            key: Key::Index(0),
            value: Value::from("foo"),
        };
        assert_eq!(
            err.to_string(),
            "Cannot compare string \"foo\" against void, key `0` missing from right-hand side"
        );
    }

    #[test]
    fn type_mismatch_describes_both_operands() {
        let err = ComparisonError::type_mismatch(&Value::Int(1), &Value::Float(1.1));
        assert_eq!(err.to_string(), "Cannot compare integer 1 with float 1.1");
    }
}
