//! Associative values.
//!
//! [`Map`] keeps its entries in insertion order with keys of any [`Value`]
//! kind (strings, numbers, even structs). Insertion order carries no meaning
//! for output: the encoder always renders entries sorted by the default text
//! form of their keys, which makes output reproducible for hash maps.
//!
//! ## Examples
//!
//! ```rust
//! use serde_human::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("two", 2);
//! map.insert("one", 1);
//!
//! let keys: Vec<String> = map.sorted_entries().into_iter().map(|(k, _)| k).collect();
//! assert_eq!(keys, vec!["one", "two"]);
//! ```

use crate::Value;

/// A keyed collection of values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map(Vec<(Value, Value)>);

impl Map {
    #[must_use]
    pub fn new() -> Self {
        Map(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(Vec::with_capacity(capacity))
    }

    /// Builds a map from entries whose keys are already distinct.
    ///
    /// Entries are kept as given, in order, without comparing keys. Host
    /// collections use this, since two distinct host keys may describe
    /// themselves as equal values and must still both be rendered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_human::{Map, Value};
    ///
    /// let map = Map::from_entries(vec![
    ///     (Value::from("a"), Value::from(1)),
    ///     (Value::from("a"), Value::from(2)),
    /// ]);
    /// assert_eq!(map.len(), 2);
    /// ```
    #[must_use]
    pub fn from_entries(entries: Vec<(Value, Value)>) -> Self {
        Map(entries)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained an equal key, the old value is replaced
    /// and returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_human::Map;
    ///
    /// let mut map = Map::new();
    /// assert!(map.insert("key", 42).is_none());
    /// assert!(map.insert("key", 43).is_some());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    /// Returns the value stored under a key.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the value stored under a string key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_human::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// map.insert("test1", 1);
    /// assert_eq!(map.get_str("test1"), Some(&Value::from(1)));
    /// ```
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (Value, Value)> {
        self.0.iter()
    }

    /// Returns the entries keyed by the default text form of each key, sorted
    /// lexicographically by that text.
    ///
    /// The sort is stable, so keys with identical text keep insertion order.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(String, &Value)> {
        let mut entries: Vec<(String, &Value)> =
            self.0.iter().map(|(k, v)| (k.to_string(), v)).collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }
}

impl IntoIterator for Map {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = &'a (Value, Value);
    type IntoIter = std::slice::Iter<'a, (Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Collects entries through [`Map::insert`], so a later equal key replaces
/// an earlier one.
impl FromIterator<(Value, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        let mut map = Map::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
