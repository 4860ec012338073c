//! Dictionary type for property-list values.
//!
//! [`PlistMap`] is a thin wrapper around [`IndexMap`] keyed by
//! [`CommentedString`]. It keeps insertion order for inspection, but the writer
//! never relies on it: entries are written in the order given by
//! [`compare_keys`], so two maps with the same entries always produce the same
//! text.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pbxproj::{PlistMap, PlistValue};
//!
//! let mut map = PlistMap::new();
//! map.insert("path", "foo.swift");
//! map.insert("isa", "PBXFileReference");
//!
//! let order: Vec<_> = map.sorted_entries().into_iter().map(|(k, _)| k.as_str()).collect();
//! assert_eq!(order, vec!["isa", "path"]);
//! ```

use crate::{CommentedString, PlistValue};
use indexmap::IndexMap;
use std::cmp::Ordering;

/// Orders dictionary keys for output: `isa` first, then the rest by primary string.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::{compare_keys, CommentedString};
/// use std::cmp::Ordering;
///
/// let isa = CommentedString::new("isa");
/// let children = CommentedString::new("children");
/// assert_eq!(compare_keys(&isa, &children), Ordering::Less);
/// assert_eq!(compare_keys(&children, &isa), Ordering::Greater);
/// ```
#[must_use]
pub fn compare_keys(a: &CommentedString, b: &CommentedString) -> Ordering {
    match (a.is_isa(), b.is_isa()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// A dictionary of annotated keys to property-list values.
///
/// Keys are unique by primary string: inserting a key equal to an existing one
/// replaces the value and keeps the existing key's annotation.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::{CommentedString, PlistMap};
///
/// let mut map = PlistMap::new();
/// map.insert(CommentedString::with_comment("K", "first"), "1");
/// assert!(map.insert(CommentedString::new("K"), "2").is_some());
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.get("K").and_then(|v| v.as_str()), Some("2"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlistMap(IndexMap<CommentedString, PlistValue>);

impl PlistMap {
    /// Creates an empty `PlistMap`.
    #[must_use]
    pub fn new() -> Self {
        PlistMap(IndexMap::new())
    }

    /// Creates an empty `PlistMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PlistMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map, returning the previous value for that key.
    pub fn insert(
        &mut self,
        key: impl Into<CommentedString>,
        value: impl Into<PlistValue>,
    ) -> Option<PlistValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns a reference to the value stored under the primary string `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PlistValue> {
        self.0.get(key)
    }

    /// Returns `true` if the map has an entry for the primary string `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, CommentedString, PlistValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, CommentedString, PlistValue> {
        self.0.values()
    }

    /// Returns an iterator over the entries of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, CommentedString, PlistValue> {
        self.0.iter()
    }

    /// Returns the entries in output order (see [`compare_keys`]).
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&CommentedString, &PlistValue)> {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
        entries
    }
}

impl<'a> IntoIterator for &'a PlistMap {
    type Item = (&'a CommentedString, &'a PlistValue);
    type IntoIter = indexmap::map::Iter<'a, CommentedString, PlistValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for PlistMap {
    type Item = (CommentedString, PlistValue);
    type IntoIter = indexmap::map::IntoIter<CommentedString, PlistValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for PlistMap
where
    K: Into<CommentedString>,
    V: Into<PlistValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        PlistMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
