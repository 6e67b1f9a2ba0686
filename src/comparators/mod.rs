/*!
Comparators are objects that compare two values for order. They are useful for sorting by
properties other than the natural ordering of a type, and they are the element comparison
strategy plugged into the [array comparators](crate::arrays).

Every comparator is fallible. A failed comparison is reported as a
[`ComparisonError`](crate::ComparisonError) and is never silently converted into an ordering.
*/

use std::sync::Arc;

use crate::errors::ComparisonResult;
use crate::ordering::Ordering;

mod default;
pub use default::DefaultComparator;

mod delegate;
pub use delegate::ComparatorDelegate;

mod natural;
pub use natural::NaturalOrder;

mod nullable;
pub use nullable::NullableComparator;

mod reverse;
pub use reverse::ReverseComparator;

/// An interface for structs intended to be used as a comparator.
pub trait Comparator<T: ?Sized> {
    /**
    Return an ordering obtained by comparing `lhs` and `rhs`.

    Invariants:

    1. Returns [`Ordering::Greater`] if `lhs` > `rhs`
    1. Returns [`Ordering::Equal`] if `lhs` == `rhs`
    1. Returns [`Ordering::Less`] if `lhs` < `rhs`
    1. Fails if and only if `compare(rhs, lhs)` fails
    */
    fn compare(&self, lhs: &T, rhs: &T) -> ComparisonResult<Ordering>;

    /**
    Compare `lhs` and `rhs` and return the classic three-way integer.

    The result is negative, zero or positive. An uncomparable result is reported as
    [`NULL_ORDERING_INT`](crate::config::NULL_ORDERING_INT), which sorts below everything else.
    */
    fn compare_as_int(&self, lhs: &T, rhs: &T) -> ComparisonResult<i8> {
        self.compare(lhs, rhs).map(Ordering::to_int)
    }

    /// Get a comparator that swaps the operands of this one.
    fn reversed(self) -> ReverseComparator<Self>
    where
        Self: Sized,
    {
        ReverseComparator::new(self)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    fn compare(&self, lhs: &T, rhs: &T) -> ComparisonResult<Ordering> {
        (**self).compare(lhs, rhs)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for Box<C> {
    fn compare(&self, lhs: &T, rhs: &T) -> ComparisonResult<Ordering> {
        (**self).compare(lhs, rhs)
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for Arc<C> {
    fn compare(&self, lhs: &T, rhs: &T) -> ComparisonResult<Ordering> {
        (**self).compare(lhs, rhs)
    }
}

/**
Sort `items` in ascending order according to `comparator`.

The sort is stable. Uncomparable pairs are ordered as if the left-hand side were less, following
[`Comparator::compare_as_int`].

If a comparison fails, sorting stops and the error is returned. The slice is left untouched in that
case.
*/
pub fn sort_by_comparator<T, C>(items: &mut [T], comparator: &C) -> ComparisonResult<()>
where
    C: Comparator<T> + ?Sized,
{
    let sorted_positions = merge_sort_positions(items, comparator)?;
    apply_permutation(items, &sorted_positions);

    Ok(())
}

/**
Bottom-up merge sort over the positions of `items`.

Returns `order` such that `items[order[0]], items[order[1]], ...` is sorted.
*/
fn merge_sort_positions<T, C>(items: &[T], comparator: &C) -> ComparisonResult<Vec<usize>>
where
    C: Comparator<T> + ?Sized,
{
    let num_items = items.len();
    let mut order: Vec<usize> = (0..num_items).collect();
    let mut merged: Vec<usize> = Vec::with_capacity(num_items);

    let mut run_length = 1;
    while run_length < num_items {
        merged.clear();

        let mut run_start = 0;
        while run_start < num_items {
            let run_mid = (run_start + run_length).min(num_items);
            let run_end = (run_start + 2 * run_length).min(num_items);
            let mut left = run_start;
            let mut right = run_mid;

            while left < run_mid && right < run_end {
                // Only take from the right run if it is strictly smaller to keep the sort stable
                let order_int =
                    comparator.compare_as_int(&items[order[left]], &items[order[right]])?;
                if order_int > 0 {
                    merged.push(order[right]);
                    right += 1;
                } else {
                    merged.push(order[left]);
                    left += 1;
                }
            }

            merged.extend_from_slice(&order[left..run_mid]);
            merged.extend_from_slice(&order[right..run_end]);
            run_start = run_end;
        }

        std::mem::swap(&mut order, &mut merged);
        run_length *= 2;
    }

    Ok(order)
}

/// Rearrange `items` so that position `i` holds the element that was at `order[i]`.
fn apply_permutation<T>(items: &mut [T], order: &[usize]) {
    let mut placed = vec![false; items.len()];

    for cycle_start in 0..items.len() {
        if placed[cycle_start] {
            continue;
        }

        let mut current = cycle_start;
        loop {
            placed[current] = true;
            let source = order[current];
            if source == cycle_start {
                break;
            }

            items.swap(current, source);
            current = source;
        }
    }
}
