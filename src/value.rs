//! Property-list value tree.
//!
//! [`PlistValue`] is the closed set of shapes a project file can contain:
//! annotated strings, arrays and dictionaries. Numbers and booleans have no
//! type of their own in this dialect; they are strings by the time they reach
//! the writer (`46`, `YES`).
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_pbxproj::{plist, CommentedString, PlistValue};
//!
//! let name = PlistValue::from("App");
//! let flag = PlistValue::from(true);
//! let file = PlistValue::from(CommentedString::with_comment("ABC123", "main.swift"));
//!
//! let group = plist!({
//!     "isa": "PBXGroup",
//!     "children": [file],
//!     "name": name,
//! });
//! assert!(group.is_dictionary());
//! assert_eq!(flag.as_str(), Some("YES"));
//! ```
//!
//! ## Display
//!
//! `Display` renders a value on one line the way a compact object is written:
//!
//! ```rust
//! use serde_pbxproj::plist;
//!
//! let value = plist!({ "path": "foo.swift", "isa": "PBXFileReference" });
//! assert_eq!(value.to_string(), "{isa = PBXFileReference; path = foo.swift; }");
//! ```

use crate::writer::Writer;
use crate::{CommentedString, PlistMap};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// A property-list value.
#[derive(Clone, Debug, PartialEq)]
pub enum PlistValue {
    String(CommentedString),
    Array(Vec<PlistValue>),
    Dictionary(PlistMap),
}

impl PlistValue {
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, PlistValue::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, PlistValue::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_dictionary(&self) -> bool {
        matches!(self, PlistValue::Dictionary(_))
    }

    /// Returns the primary string if this is a string value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pbxproj::{CommentedString, PlistValue};
    ///
    /// let value = PlistValue::from(CommentedString::with_comment("A1", "note"));
    /// assert_eq!(value.as_str(), Some("A1"));
    /// assert_eq!(PlistValue::Array(vec![]).as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PlistValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_commented_string(&self) -> Option<&CommentedString> {
        match self {
            PlistValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<PlistValue>> {
        match self {
            PlistValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_dictionary(&self) -> Option<&PlistMap> {
        match self {
            PlistValue::Dictionary(map) => Some(map),
            _ => None,
        }
    }

    /// Visits every annotated string in this tree, keys included.
    pub(crate) fn for_each_string<'a>(&'a self, f: &mut dyn FnMut(&'a CommentedString)) {
        match self {
            PlistValue::String(s) => f(s),
            PlistValue::Array(items) => {
                for item in items {
                    item.for_each_string(f);
                }
            }
            PlistValue::Dictionary(map) => {
                for (key, value) in map {
                    f(key);
                    value.for_each_string(f);
                }
            }
        }
    }
}

impl fmt::Display for PlistValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Writer::compact_value(self))
    }
}

impl Serialize for PlistValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PlistValue::String(s) => s.serialize(serializer),
            PlistValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            PlistValue::Dictionary(dict) => {
                let mut map = serializer.serialize_map(Some(dict.len()))?;
                for (key, value) in dict.sorted_entries() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl From<CommentedString> for PlistValue {
    fn from(value: CommentedString) -> Self {
        PlistValue::String(value)
    }
}

impl From<&str> for PlistValue {
    fn from(value: &str) -> Self {
        PlistValue::String(CommentedString::new(value))
    }
}

impl From<String> for PlistValue {
    fn from(value: String) -> Self {
        PlistValue::String(CommentedString::new(value))
    }
}

/// Booleans are spelled `YES` and `NO`.
impl From<bool> for PlistValue {
    fn from(value: bool) -> Self {
        PlistValue::from(if value { "YES" } else { "NO" })
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PlistValue {
                fn from(value: $ty) -> Self {
                    PlistValue::String(CommentedString::new(value.to_string()))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl<T: Into<PlistValue>> From<Vec<T>> for PlistValue {
    fn from(value: Vec<T>) -> Self {
        PlistValue::Array(value.into_iter().map(Into::into).collect())
    }
}

impl From<PlistMap> for PlistValue {
    fn from(value: PlistMap) -> Self {
        PlistValue::Dictionary(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(PlistValue::from(46u32).as_str(), Some("46"));
        assert_eq!(PlistValue::from(-1i64).as_str(), Some("-1"));
        assert_eq!(PlistValue::from(false).as_str(), Some("NO"));
        assert_eq!(PlistValue::from("x".to_string()).as_str(), Some("x"));
    }

    #[test]
    fn test_from_collections() {
        let value = PlistValue::from(vec!["a", "b"]);
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].as_str(), Some("b"));

        let mut map = PlistMap::new();
        map.insert("key", 1u8);
        let value = PlistValue::from(map.clone());
        assert_eq!(value.as_dictionary(), Some(&map));
    }

    #[test]
    fn test_type_predicates() {
        let s = PlistValue::from("x");
        assert!(s.is_string());
        assert!(!s.is_array());
        assert!(!s.is_dictionary());
        assert!(PlistValue::Array(vec![]).is_array());
        assert!(PlistValue::Dictionary(PlistMap::new()).is_dictionary());
    }

    #[test]
    fn test_display_is_single_line() {
        let value = PlistValue::from(vec![
            PlistValue::from(CommentedString::with_comment("A1", "a.swift")),
            PlistValue::from("B2"),
        ]);
        assert_eq!(value.to_string(), "(A1 /* a.swift */, B2, )");
    }

    #[test]
    fn test_serialize_to_json() {
        let mut map = PlistMap::new();
        map.insert("path", "foo.swift");
        map.insert("isa", "PBXFileReference");
        map.insert("tags", PlistValue::from(vec!["a"]));

        let json = serde_json::to_string(&PlistValue::from(map)).unwrap();
        assert_eq!(
            json,
            r#"{"isa":"PBXFileReference","path":"foo.swift","tags":["a"]}"#
        );
    }

    #[test]
    fn test_for_each_string_visits_keys() {
        let mut map = PlistMap::new();
        map.insert(CommentedString::with_comment("K", "key note"), "V");
        let value = PlistValue::from(map);

        let mut seen = Vec::new();
        value.for_each_string(&mut |s| seen.push(s.as_str()));
        assert_eq!(seen, vec!["K", "V"]);
    }
}
