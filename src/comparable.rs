/*!
This module contains the [`Comparable`] trait for types that provide their own ordering.

Implementers only need to expose their fields in declaration order via
[`Comparable::comparison_fields`]. The default [`Comparable::compare_to`] then produces a
lexicographic ordering over those fields with the
[`RecursiveArrayComparator`](crate::arrays::RecursiveArrayComparator). Types with a different
notion of order override [`Comparable::compare_to`] directly.

# Example

```
use comparables::{array, Array, Comparable, Ordering};

#[derive(Debug)]
struct Money {
    amount: i64,
    currency: String,
}

impl Comparable for Money {
    fn comparison_fields(&self) -> Array {
        array![
            "amount" => self.amount,
            "currency" => self.currency.as_str(),
        ]
    }
}

let ten_usd = Money { amount: 10, currency: "USD".into() };
let ten_eur = Money { amount: 10, currency: "EUR".into() };

assert_eq!(ten_usd.compare_to(&ten_eur).unwrap(), Ordering::Greater);
assert!(ten_eur.is_less_than(&ten_usd));
```
*/

use std::any::Any;
use std::fmt;

use crate::arrays::RecursiveArrayComparator;
use crate::comparators::{NaturalOrder, ReverseComparator};
use crate::errors::{ComparisonError, ComparisonResult};
use crate::ordering::Ordering;
use crate::value::Array;

/**
A type with a total order over its values.

# Invariants

Implementers must ensure that:

1. `x.compare_to(y)` is the reverse of `y.compare_to(x)`, which implies that one fails if and only
   if the other fails
1. The relation is transitive
1. `x.compare_to(y) == Equal` implies that `x` and `z` compare the same as `y` and `z` for all `z`
*/
pub trait Comparable {
    /// The fields that make up the value's identity, in declaration order.
    fn comparison_fields(&self) -> Array;

    /// Compare this value with `other` for order.
    fn compare_to(&self, other: &Self) -> ComparisonResult<Ordering> {
        RecursiveArrayComparator::default()
            .compare_arrays(&self.comparison_fields(), &other.comparison_fields())
    }

    /// Whether this value is less than `other`. Failed comparisons yield `false`.
    fn is_less_than(&self, other: &Self) -> bool {
        self.compare_to(other).map_or(false, Ordering::is_less)
    }

    /// Whether this value is less than or equal to `other`. Failed comparisons yield `false`.
    fn is_less_than_or_equals(&self, other: &Self) -> bool {
        self.compare_to(other)
            .map_or(false, Ordering::is_less_or_equal)
    }

    /// Whether this value is equal to `other`. Failed comparisons yield `false`.
    fn equals(&self, other: &Self) -> bool {
        self.compare_to(other).map_or(false, Ordering::is_equal)
    }

    /// Whether this value is greater than or equal to `other`. Failed comparisons yield `false`.
    fn is_greater_than_or_equals(&self, other: &Self) -> bool {
        self.compare_to(other)
            .map_or(false, Ordering::is_greater_or_equal)
    }

    /// Whether this value is greater than `other`. Failed comparisons yield `false`.
    fn is_greater_than(&self, other: &Self) -> bool {
        self.compare_to(other).map_or(false, Ordering::is_greater)
    }

    /// Get a comparator that sorts values of this type in ascending order.
    fn comparator() -> NaturalOrder<Self>
    where
        Self: Sized,
    {
        NaturalOrder::new()
    }

    /// Get a comparator that sorts values of this type in descending order.
    fn reverse_comparator() -> ReverseComparator<NaturalOrder<Self>>
    where
        Self: Sized,
    {
        ReverseComparator::new(NaturalOrder::new())
    }
}

impl Comparable for Ordering {
    fn comparison_fields(&self) -> Array {
        let mut fields = Array::with_capacity(1);
        fields.insert("order", i64::from(self.to_int()));

        fields
    }

    fn compare_to(&self, other: &Self) -> ComparisonResult<Ordering> {
        Ok(self.compare(*other))
    }
}

/**
Object safe form of [`Comparable`] so that comparable values of any type can be stored in a
[`Value`](crate::Value).

This is implemented for every `'static` [`Comparable`] type. Comparing two objects of different
concrete types fails with a [`ComparisonError::TypeMismatch`].
*/
pub trait ComparableObject: fmt::Debug + Send + Sync {
    /// The name of the concrete type.
    fn type_name(&self) -> &'static str;

    /// Upcast for downcasting the other side of a comparison.
    fn as_any(&self) -> &dyn Any;

    /// Compare with another object for order.
    fn compare_object(&self, other: &dyn ComparableObject) -> ComparisonResult<Ordering>;
}

impl<T> ComparableObject for T
where
    T: Comparable + fmt::Debug + Send + Sync + 'static,
{
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn compare_object(&self, other: &dyn ComparableObject) -> ComparisonResult<Ordering> {
        match other.as_any().downcast_ref::<T>() {
            Some(other) => self.compare_to(other),
            None => Err(ComparisonError::TypeMismatch {
                left: self.type_name().to_string(),
                right: other.type_name().to_string(),
            }),
        }
    }
}
