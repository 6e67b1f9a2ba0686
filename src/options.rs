/*!
This module holds the options that select an array comparator at runtime.

The [array comparator type aliases](crate::arrays) are the way to go when the configuration is known
at compile time. [`ArrayComparatorOptions`] covers the case where it is not, e.g. when it is read
from user settings.
*/

use crate::arrays::{MismatchPolicy, NestedSequenceComparator, SequenceComparator, Sparse, Strict};
use crate::comparators::{Comparator, DefaultComparator, NullableComparator};
use crate::value::Value;

/// A boxed comparator for [`Value`]s that can be shared between threads.
pub type BoxedValueComparator = Box<dyn Comparator<Value> + Send + Sync>;

/// How deep an array comparator looks into its inputs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Traversal {
    /// Compare unidimensional arrays. Nested arrays are compared as leaves.
    Flat,

    /// Descend into nested arrays to any depth.
    Nested,
}

/// How an array comparator compares leaves.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ElementMode {
    /// Use the [`DefaultComparator`].
    Default,

    /// Use the [`NullableComparator`].
    Nullable,
}

/// How an array comparator handles arrays that do not line up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MismatchMode {
    /// Fail. See [`Strict`].
    Strict,

    /// Resolve the mismatch. See [`Sparse`].
    Sparse,
}

/// Holds options to select an array comparator.
#[derive(Clone, Debug)]
pub struct ArrayComparatorOptions {
    /**
    How deep the comparator looks into its inputs.

    **This defaults to [`Traversal::Flat`].**
    */
    traversal: Traversal,

    /**
    How leaves are compared.

    **This defaults to [`ElementMode::Default`].**
    */
    elements: ElementMode,

    /**
    How arrays that do not line up are handled.

    **This defaults to [`MismatchMode::Strict`].**
    */
    mismatch: MismatchMode,
}

/// Public methods
impl ArrayComparatorOptions {
    /// Get the traversal.
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Get the element mode.
    pub fn elements(&self) -> ElementMode {
        self.elements
    }

    /// Get the mismatch mode.
    pub fn mismatch(&self) -> MismatchMode {
        self.mismatch
    }

    /// Set the traversal.
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;

        self
    }

    /// Set the element mode.
    pub fn with_elements(mut self, elements: ElementMode) -> Self {
        self.elements = elements;

        self
    }

    /// Set the mismatch mode.
    pub fn with_mismatch(mut self, mismatch: MismatchMode) -> Self {
        self.mismatch = mismatch;

        self
    }

    /// Build the comparator described by these options.
    pub fn build(&self) -> BoxedValueComparator {
        log::debug!("Building an array comparator with options {:?}", self);

        let elements: BoxedValueComparator = match self.elements {
            ElementMode::Default => Box::new(DefaultComparator),
            ElementMode::Nullable => Box::new(NullableComparator),
        };

        let policy: Box<dyn MismatchPolicy + Send + Sync> = match self.mismatch {
            MismatchMode::Strict => Box::new(Strict),
            MismatchMode::Sparse => Box::new(Sparse),
        };

        match self.traversal {
            Traversal::Flat => Box::new(SequenceComparator::new(elements, policy)),
            Traversal::Nested => Box::new(NestedSequenceComparator::new(elements, policy)),
        }
    }
}

impl Default for ArrayComparatorOptions {
    fn default() -> Self {
        ArrayComparatorOptions {
            traversal: Traversal::Flat,
            elements: ElementMode::Default,
            mismatch: MismatchMode::Strict,
        }
    }
}
