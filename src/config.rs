/*!
This module contains global configuration constants for the comparators.

These values are fixed for every comparator instance. They may be made configurable via
[`ArrayComparatorOptions`](crate::options::ArrayComparatorOptions) in future versions.
*/

/**
The integer value that an uncomparable ordering converts to.

[`Ordering::to_int`](crate::Ordering::to_int) returns a value in `[-1, 1]` for every comparable
ordering. Returning 0 for an uncomparable one would make it indistinguishable from an equal one, so
-2 is used instead. This also sorts uncomparable orderings below [`Ordering::Less`](crate::Ordering)
when the integers are compared naively.
*/
pub const NULL_ORDERING_INT: i8 = -2;

/**
The number of traversal frames that are allocated up front by the nested array comparator.

The stack grows past this as needed. Most data handed to the comparator is nested only a couple of
levels deep.
*/
pub(crate) const INITIAL_STACK_CAPACITY: usize = 8;
