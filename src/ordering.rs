/*!
This module contains the [`Ordering`] type, the result of comparing two values for order.

Unlike [`std::cmp::Ordering`], this ordering has a fourth state, [`Ordering::Uncomparable`]. It
stands in for a comparison that has no valid answer while still allowing the combinators below to
be chained safely.
*/

use std::cmp;
use std::fmt;

use crate::config::NULL_ORDERING_INT;

/// The result of a comparison between two values.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Ordering {
    /// A compared value is less than another.
    Less,

    /// A compared value is equal to another.
    Equal,

    /// A compared value is greater than another.
    Greater,

    /**
    No valid comparison exists between the two values.

    All of the `is_*` predicates return `false` for this variant.
    */
    Uncomparable,
}

/// Public methods
impl Ordering {
    /**
    Create an ordering from a signed magnitude.

    Only the sign of `order` is considered i.e. any negative value becomes [`Ordering::Less`] and
    any positive value becomes [`Ordering::Greater`].
    */
    pub fn from_int(order: i64) -> Self {
        match order.signum() {
            -1 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    }

    /// Whether this ordering is [`Ordering::Less`].
    pub fn is_less(self) -> bool {
        self == Ordering::Less
    }

    /// Whether this ordering is [`Ordering::Less`] or [`Ordering::Equal`].
    pub fn is_less_or_equal(self) -> bool {
        matches!(self, Ordering::Less | Ordering::Equal)
    }

    /// Whether this ordering is [`Ordering::Equal`].
    pub fn is_equal(self) -> bool {
        self == Ordering::Equal
    }

    /// Whether this ordering is [`Ordering::Greater`] or [`Ordering::Equal`].
    pub fn is_greater_or_equal(self) -> bool {
        matches!(self, Ordering::Greater | Ordering::Equal)
    }

    /// Whether this ordering is [`Ordering::Greater`].
    pub fn is_greater(self) -> bool {
        self == Ordering::Greater
    }

    /// Whether this ordering is [`Ordering::Uncomparable`].
    pub fn is_uncomparable(self) -> bool {
        self == Ordering::Uncomparable
    }

    /**
    Chain two orderings lexicographically.

    Returns `self` when it is [`Ordering::Less`] or [`Ordering::Greater`], otherwise returns
    `other`. An uncomparable ordering yields `other` as well, so a failed comparison of a leading
    key defers to the following keys.
    */
    pub fn then(self, other: Ordering) -> Ordering {
        match self {
            Ordering::Less | Ordering::Greater => self,
            Ordering::Equal | Ordering::Uncomparable => other,
        }
    }

    /// Like [`Ordering::then`] but `f` is only called if its result is needed.
    pub fn then_with<F>(self, f: F) -> Ordering
    where
        F: FnOnce() -> Ordering,
    {
        match self {
            Ordering::Less | Ordering::Greater => self,
            Ordering::Equal | Ordering::Uncomparable => f(),
        }
    }

    /**
    Reverse the ordering.

    - [`Ordering::Less`] becomes [`Ordering::Greater`]
    - [`Ordering::Equal`] stays [`Ordering::Equal`]
    - [`Ordering::Greater`] becomes [`Ordering::Less`]
    - [`Ordering::Uncomparable`] stays [`Ordering::Uncomparable`]
    */
    pub fn reverse(self) -> Ordering {
        match self {
            Ordering::Less => Ordering::Greater,
            Ordering::Equal => Ordering::Equal,
            Ordering::Greater => Ordering::Less,
            Ordering::Uncomparable => Ordering::Uncomparable,
        }
    }

    /**
    Get the integer this ordering corresponds to.

    Comparable orderings map to -1, 0 and 1. [`Ordering::Uncomparable`] maps to
    [`NULL_ORDERING_INT`](crate::config::NULL_ORDERING_INT).
    */
    pub fn to_int(self) -> i8 {
        match self {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
            Ordering::Uncomparable => NULL_ORDERING_INT,
        }
    }

    /**
    Compare two orderings by their integer value.

    The result is [`Ordering::Uncomparable`] if either side is uncomparable.
    */
    pub fn compare(self, other: Ordering) -> Ordering {
        if self.is_uncomparable() || other.is_uncomparable() {
            return Ordering::Uncomparable;
        }

        Ordering::from(self.to_int().cmp(&other.to_int()))
    }

    /// Convert to a [`std::cmp::Ordering`], if this ordering is comparable.
    pub fn to_std(self) -> Option<cmp::Ordering> {
        match self {
            Ordering::Less => Some(cmp::Ordering::Less),
            Ordering::Equal => Some(cmp::Ordering::Equal),
            Ordering::Greater => Some(cmp::Ordering::Greater),
            Ordering::Uncomparable => None,
        }
    }
}

impl From<cmp::Ordering> for Ordering {
    fn from(order: cmp::Ordering) -> Self {
        match order {
            cmp::Ordering::Less => Ordering::Less,
            cmp::Ordering::Equal => Ordering::Equal,
            cmp::Ordering::Greater => Ordering::Greater,
        }
    }
}

impl From<Option<cmp::Ordering>> for Ordering {
    /// Convert the result of [`PartialOrd::partial_cmp`]. `None` becomes uncomparable.
    fn from(maybe_order: Option<cmp::Ordering>) -> Self {
        maybe_order.map_or(Ordering::Uncomparable, Ordering::from)
    }
}

impl From<Ordering> for i8 {
    fn from(order: Ordering) -> i8 {
        order.to_int()
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ordering::Less => "Less",
            Ordering::Equal => "Equal",
            Ordering::Greater => "Greater",
            Ordering::Uncomparable => "Uncomparable",
        };

        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ALL: [Ordering; 4] = [
        Ordering::Less,
        Ordering::Equal,
        Ordering::Greater,
        Ordering::Uncomparable,
    ];

    #[test]
    fn from_int_clamps_to_the_sign() {
        assert_eq!(Ordering::from_int(i64::MIN), Ordering::Less);
        assert_eq!(Ordering::from_int(-2), Ordering::Less);
        assert_eq!(Ordering::from_int(0), Ordering::Equal);
        assert_eq!(Ordering::from_int(2), Ordering::Greater);
        assert_eq!(Ordering::from_int(i64::MAX), Ordering::Greater);
    }

    #[test]
    fn predicates_match_the_variant() {
        assert!(Ordering::Less.is_less());
        assert!(Ordering::Less.is_less_or_equal());
        assert!(!Ordering::Less.is_greater_or_equal());

        assert!(Ordering::Equal.is_equal());
        assert!(Ordering::Equal.is_less_or_equal());
        assert!(Ordering::Equal.is_greater_or_equal());

        assert!(Ordering::Greater.is_greater());
        assert!(Ordering::Greater.is_greater_or_equal());
        assert!(!Ordering::Greater.is_less_or_equal());
    }

    #[test]
    fn uncomparable_answers_false_to_every_predicate() {
        let order = Ordering::Uncomparable;
        assert!(!order.is_less());
        assert!(!order.is_less_or_equal());
        assert!(!order.is_equal());
        assert!(!order.is_greater_or_equal());
        assert!(!order.is_greater());
        assert!(order.is_uncomparable());
    }

    #[test]
    fn then_only_defers_when_not_decided() {
        for other in ALL {
            assert_eq!(Ordering::Less.then(other), Ordering::Less);
            assert_eq!(Ordering::Greater.then(other), Ordering::Greater);
            assert_eq!(Ordering::Equal.then(other), other);
            assert_eq!(Ordering::Uncomparable.then(other), other);
        }
    }

    #[test]
    fn then_with_is_lazy() {
        let order = Ordering::Less.then_with(|| panic!("must not be evaluated"));
        assert_eq!(order, Ordering::Less);
        assert_eq!(
            Ordering::Equal.then_with(|| Ordering::Greater),
            Ordering::Greater
        );
    }

    #[test]
    fn reverse_swaps_less_and_greater() {
        assert_eq!(Ordering::Less.reverse(), Ordering::Greater);
        assert_eq!(Ordering::Equal.reverse(), Ordering::Equal);
        assert_eq!(Ordering::Greater.reverse(), Ordering::Less);
        assert_eq!(Ordering::Uncomparable.reverse(), Ordering::Uncomparable);

        for order in ALL {
            assert_eq!(order.reverse().reverse(), order);
        }
    }

    #[test]
    fn uncomparable_sorts_below_less_as_an_integer() {
        assert_eq!(Ordering::Uncomparable.to_int(), -2);
        assert!(Ordering::Uncomparable.to_int() < Ordering::Less.to_int());
    }

    #[test]
    fn orderings_compare_by_their_integer_value() {
        assert_eq!(Ordering::Less.compare(Ordering::Greater), Ordering::Less);
        assert_eq!(Ordering::Equal.compare(Ordering::Equal), Ordering::Equal);
        assert_eq!(Ordering::Greater.compare(Ordering::Less), Ordering::Greater);
        assert_eq!(
            Ordering::Uncomparable.compare(Ordering::Less),
            Ordering::Uncomparable
        );
        assert_eq!(
            Ordering::Less.compare(Ordering::Uncomparable),
            Ordering::Uncomparable
        );
    }

    #[test]
    fn converts_to_and_from_std() {
        assert_eq!(Ordering::from(1.0_f64.partial_cmp(&2.0)), Ordering::Less);
        assert_eq!(Ordering::from(f64::NAN.partial_cmp(&2.0)), Ordering::Uncomparable);
        assert_eq!(Ordering::Greater.to_std(), Some(cmp::Ordering::Greater));
        assert_eq!(Ordering::Uncomparable.to_std(), None);
    }
}
