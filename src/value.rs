/*!
This module contains the data model that the array comparators operate on.

An [`Array`] is an ordered collection of `(key, value)` pairs. Iteration follows insertion order,
while lookups by key are constant time. Keys are either integer indexes or string names, which
allows an array to act as a list, a map or a mix of both. A [`Value`] is either a leaf or a nested
[`Array`].

# Building arrays

The [`array!`](crate::array) macro builds lists keyed `0..n` as well as arrays with explicit keys:

```
use comparables::{array, Key, Value};

let list = array![1, 2, array![3]];
assert_eq!(list.len(), 3);

let sparse = array![1 => "foo"];
assert!(sparse.get(&Key::Index(0)).is_none());
assert!(matches!(sparse.get(&Key::Index(1)), Some(Value::Str(_))));
```
*/

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::comparable::{Comparable, ComparableObject};

/**
A key of an [`Array`] entry.

Converting a string that is the canonical decimal form of an integer, e.g. `"0"` or `"-5"`, yields
a [`Key::Index`]. Strings like `"05"`, `"+5"` or `"-0"` stay names. Constructing
[`Key::Name`] directly skips this normalization.
*/
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Key {
    /// An integer index.
    Index(i64),

    /// A string name.
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Key::Index(index.into())
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<usize> for Key {
    /// Indexes above `i64::MAX` saturate.
    fn from(index: usize) -> Self {
        Key::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        match parse_canonical_index(name) {
            Some(index) => Key::Index(index),
            None => Key::Name(name.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        match parse_canonical_index(&name) {
            Some(index) => Key::Index(index),
            None => Key::Name(name),
        }
    }
}

/// Parse `name` as an integer if it is written exactly as the integer would be printed.
fn parse_canonical_index(name: &str) -> Option<i64> {
    let index = name.parse::<i64>().ok()?;
    if index.to_string() != name {
        return None;
    }

    Some(index)
}

/**
An insertion ordered collection of `(key, value)` pairs.

Inserting a key that already exists replaces the stored value in place without changing the
iteration order.
*/
#[derive(Clone, Debug)]
pub struct Array {
    /// The entries in insertion order.
    entries: Vec<(Key, Value)>,

    /// Maps a key to its position in `entries`.
    positions: HashMap<Key, usize>,

    /**
    The index that [`Array::push`] will use next.

    This is `None` once `i64::MAX` has been used as a key, after which pushing fails.
    */
    next_index: Option<i64>,
}

/// Public methods
impl Array {
    /// Create an empty [`Array`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty [`Array`] with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            next_index: Some(0),
        }
    }

    /**
    Insert a value under `key`.

    Returns the previously stored value if the key was already present.
    */
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        let key = key.into();
        let value = value.into();

        if let (Key::Index(index), Some(next_index)) = (&key, self.next_index) {
            if *index >= next_index {
                self.next_index = index.checked_add(1);
            }
        }

        if let Some(&position) = self.positions.get(&key) {
            return Some(std::mem::replace(&mut self.entries[position].1, value));
        }

        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));

        None
    }

    /**
    Append a value under the integer index following the largest one used so far.

    Returns the key the value was stored under. Once `i64::MAX` has been used as a key there is no
    index left to append to, and the value is handed back as the error instead of replacing an
    existing entry.
    */
    pub fn push<V: Into<Value>>(&mut self, value: V) -> Result<Key, Value> {
        let value = value.into();
        let Some(index) = self.next_index else {
            return Err(value);
        };

        self.insert(index, value);

        Ok(Key::Index(index))
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.positions
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    /// Whether a value is stored under `key`.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.positions.contains_key(key)
    }

    /// Get the entry at `position` in iteration order.
    pub fn entry_at(&self, position: usize) -> Option<(&Key, &Value)> {
        self.entries.get(position).map(|(key, value)| (key, value))
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the array has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an iterator over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Get an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(key, _)| key)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Array {
    /// Create a list keyed `0..n`.
    fn from(values: Vec<V>) -> Self {
        values.into_iter().collect()
    }
}

impl Default for Array {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut array = Array::new();
        for (position, value) in iter.into_iter().enumerate() {
            array.insert(position, value);
        }

        array
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Array {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, (key, value)) in self.entries.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }

            match key {
                Key::Index(index) => write!(f, "{} => {}", index, value)?,
                Key::Name(name) => write!(f, "{:?} => {}", name, value)?,
            }
        }

        write!(f, "]")
    }
}

/// The kind of a [`Value`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// See [`Value::Null`].
    Null,
    /// See [`Value::Bool`].
    Bool,
    /// See [`Value::Int`].
    Int,
    /// See [`Value::Float`].
    Float,
    /// See [`Value::Str`].
    Str,
    /// See [`Value::Array`].
    Array,
    /// See [`Value::Object`].
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Str => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };

        write!(f, "{}", name)
    }
}

/// A value that can be stored in an [`Array`] and handed to a comparator.
#[derive(Clone, Debug)]
pub enum Value {
    /// The absent value.
    Null,

    /// A boolean.
    Bool(bool),

    /// A signed integer.
    Int(i64),

    /// A floating point number.
    Float(f64),

    /// A string.
    Str(String),

    /// A nested array.
    Array(Array),

    /**
    A user type with its own ordering.

    Use [`Value::object`] to wrap any [`Comparable`] type.
    */
    Object(Arc<dyn ComparableObject>),
}

/// Public methods
impl Value {
    /// Wrap a [`Comparable`] value.
    pub fn object<T>(value: T) -> Self
    where
        T: Comparable + fmt::Debug + Send + Sync + 'static,
    {
        Value::Object(Arc::new(value))
    }

    /// Get the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Whether this value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the nested array, if this value is one.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /**
    Describe the value for error messages.

    Leaves are rendered as their kind followed by their literal e.g. `integer 1`. Objects are
    rendered as their type name and null is rendered as `null`.
    */
    pub fn describe(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Object(object) => object.type_name().to_string(),
            _ => format!("{} {}", self.kind(), self),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{:?}", value),
            Value::Str(value) => write!(f, "{:?}", value),
            Value::Array(array) => write!(f, "{}", array),
            Value::Object(object) => write!(f, "{:?}", object),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(maybe_value: Option<T>) -> Self {
        maybe_value.map_or(Value::Null, Into::into)
    }
}

/**
Build an [`Array`].

`array![a, b, c]` creates a list keyed `0..n` and `array![k1 => a, k2 => b]` creates an array with
explicit keys. Values and keys may be anything convertible into [`Value`] and [`Key`].
*/
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut array = $crate::Array::new();
        $(array.insert($key, $value);)+
        array
    }};
    ($($value:expr),+ $(,)?) => {
        $crate::Array::from(::std::vec![$($crate::Value::from($value)),+])
    };
}
