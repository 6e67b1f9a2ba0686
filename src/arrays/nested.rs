use crate::comparators::Comparator;
use crate::config::INITIAL_STACK_CAPACITY;
use crate::errors::{ComparisonError, ComparisonResult};
use crate::ordering::Ordering;
use crate::value::{Array, Value};

use super::expect_arrays;
use super::policy::MismatchPolicy;

/**
Compares arbitrarily nested arrays entry by entry.

This comparator follows the same rules as the [`SequenceComparator`](super::SequenceComparator)
but descends into entries that are arrays on both sides instead of handing them to the element
comparator. Nested arrays are compared by length first and the [`MismatchPolicy`] resolves any
mismatch at any depth. Only leaves reach the element comparator. An entry that is an array on one
side and a leaf on the other is a [`ComparisonError::TypeMismatch`].

# Traversal

The walk does not recurse. It keeps an explicit stack with one [`Frame`] per level of nesting, so
the depth of the input is only bounded by the available memory. The stack is dropped when the
comparison returns.
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct NestedSequenceComparator<E, P> {
    /// The comparator used for leaf entries.
    element_comparator: E,

    /// The hooks for arrays that do not line up.
    policy: P,
}

/**
A pair of arrays at the same depth that are being compared.

The left-hand entries before `position` have been consumed.
*/
#[derive(Debug)]
struct Frame<'a> {
    /// The left-hand array at this depth.
    left: &'a Array,

    /// The right-hand array at this depth.
    right: &'a Array,

    /// The position of the next left-hand entry to visit.
    position: usize,
}

impl<'a> Frame<'a> {
    fn new(left: &'a Array, right: &'a Array) -> Self {
        Self {
            left,
            right,
            position: 0,
        }
    }
}

/// Public methods
impl<E, P> NestedSequenceComparator<E, P> {
    /// Create a new [`NestedSequenceComparator`].
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

impl<E, P> NestedSequenceComparator<E, P>
where
    E: Comparator<Value>,
    P: MismatchPolicy,
{
    /// Compare two arrays.
    pub fn compare_arrays(&self, lhs: &Array, rhs: &Array) -> ComparisonResult<Ordering> {
        if lhs.is_empty() && rhs.is_empty() {
            return Ok(Ordering::Equal);
        }

        if lhs.len() != rhs.len() {
            return self.resolve_size_mismatch(lhs, rhs);
        }

        let mut stack: Vec<Frame> = Vec::with_capacity(INITIAL_STACK_CAPACITY);
        stack.push(Frame::new(lhs, rhs));

        while let Some(frame) = stack.last_mut() {
            let left = frame.left;
            let right = frame.right;
            let Some((key, left_value)) = left.entry_at(frame.position) else {
                // This level is exhausted, continue with the parent
                stack.pop();
                continue;
            };
            frame.position += 1;

            let Some(right_value) = right.get(key) else {
                log::trace!(
                    "Key `{}` at depth {} is missing from the right-hand side. Consulting the \
                    missing key policy.",
                    key,
                    stack.len() - 1
                );
                return self.policy.on_missing_key(left_value, key);
            };

            match (left_value, right_value) {
                (Value::Array(left_nested), Value::Array(right_nested)) => {
                    if left_nested.is_empty() && right_nested.is_empty() {
                        continue;
                    }

                    if left_nested.len() != right_nested.len() {
                        return self.resolve_size_mismatch(left_nested, right_nested);
                    }

                    stack.push(Frame::new(left_nested, right_nested));
                }
                (Value::Array(_), _) | (_, Value::Array(_)) => {
                    return Err(ComparisonError::type_mismatch(left_value, right_value));
                }
                _ => {
                    let order = self.element_comparator.compare(left_value, right_value)?;
                    if !order.is_equal() {
                        return Ok(order);
                    }
                }
            }
        }

        Ok(Ordering::Equal)
    }
}

/// Private methods
impl<E, P> NestedSequenceComparator<E, P>
where
    P: MismatchPolicy,
{
    fn resolve_size_mismatch(&self, lhs: &Array, rhs: &Array) -> ComparisonResult<Ordering> {
        let left_len = lhs.len();
        let right_len = rhs.len();
        let natural = Ordering::from(left_len.cmp(&right_len));
        log::trace!(
            "Arrays with {} and {} entries do not line up. Consulting the size mismatch policy.",
            left_len,
            right_len
        );

        self.policy.on_size_mismatch(left_len, right_len, natural)
    }
}

impl<E, P> Comparator<Value> for NestedSequenceComparator<E, P>
where
    E: Comparator<Value>,
    P: MismatchPolicy,
{
    fn compare(&self, lhs: &Value, rhs: &Value) -> ComparisonResult<Ordering> {
        let (lhs, rhs) = expect_arrays(lhs, rhs)?;

        self.compare_arrays(lhs, rhs).map_err(|err| {
            log::debug!("Nested array comparison failed. Error: {}", err);
            err
        })
    }
}
