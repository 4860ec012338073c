//! Annotated string scalars.
//!
//! [`CommentedString`] is the leaf of every property-list value and the key
//! type of every dictionary. The annotation is rendered as a trailing block
//! comment and never takes part in comparisons.
//!
//! ## Quoting
//!
//! A string is written bare only when it is non-empty and made of ASCII
//! letters, digits, `_`, `.` and `/`, and contains neither `//` nor `___`.
//! Anything else is written between double quotes with `\\`, `\"`, `\n` and
//! `\t` escaped.
//!
//! ```rust
//! use serde_pbxproj::CommentedString;
//!
//! assert_eq!(CommentedString::new("foo.swift").escaped(), "foo.swift");
//! assert_eq!(CommentedString::new("My App").escaped(), "\"My App\"");
//! assert_eq!(CommentedString::new("").escaped(), "\"\"");
//! ```

use serde::{Serialize, Serializer};
use std::borrow::{Borrow, Cow};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A string value with an optional annotation.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::CommentedString;
///
/// let a = CommentedString::with_comment("ABC123", "foo.swift");
/// let b = CommentedString::new("ABC123");
///
/// // Annotations are decorative
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "ABC123 /* foo.swift */");
/// ```
#[derive(Clone, Debug)]
pub struct CommentedString {
    pub string: String,
    pub comment: Option<String>,
}

impl CommentedString {
    /// Creates an unannotated string.
    #[must_use]
    pub fn new(string: impl Into<String>) -> Self {
        CommentedString {
            string: string.into(),
            comment: None,
        }
    }

    /// Creates a string annotated with `comment`.
    #[must_use]
    pub fn with_comment(string: impl Into<String>, comment: impl Into<String>) -> Self {
        CommentedString {
            string: string.into(),
            comment: Some(comment.into()),
        }
    }

    /// Returns the primary string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// Returns `true` if this is the type discriminator key.
    #[inline]
    #[must_use]
    pub fn is_isa(&self) -> bool {
        self.string == "isa"
    }

    /// Returns `true` if the primary string must be quoted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pbxproj::CommentedString;
    ///
    /// assert!(!CommentedString::new("Sources/main.swift").needs_quotes());
    /// assert!(CommentedString::new("$(inherited)").needs_quotes());
    /// assert!(CommentedString::new("a//b").needs_quotes());
    /// ```
    #[must_use]
    pub fn needs_quotes(&self) -> bool {
        needs_quotes(&self.string)
    }

    /// Returns the primary string as it appears in the output.
    #[must_use]
    pub fn escaped(&self) -> Cow<'_, str> {
        if !needs_quotes(&self.string) {
            return Cow::Borrowed(&self.string);
        }

        let mut out = String::with_capacity(self.string.len() + 2);
        out.push('"');
        for ch in self.string.chars() {
            match ch {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                _ => out.push(ch),
            }
        }
        out.push('"');
        Cow::Owned(out)
    }

    /// Returns `true` if the annotation can be written inside a block comment.
    #[must_use]
    pub fn has_valid_comment(&self) -> bool {
        self.comment.as_deref().map_or(true, |c| !c.contains("*/"))
    }
}

#[inline]
fn is_unquoted_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '/')
}

fn needs_quotes(s: &str) -> bool {
    s.is_empty() || !s.chars().all(is_unquoted_char) || s.contains("//") || s.contains("___")
}

impl fmt::Display for CommentedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escaped())?;
        if let Some(comment) = &self.comment {
            write!(f, " /* {} */", comment)?;
        }
        Ok(())
    }
}

impl PartialEq for CommentedString {
    fn eq(&self, other: &Self) -> bool {
        self.string == other.string
    }
}

impl Eq for CommentedString {}

impl Hash for CommentedString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.string.hash(state);
    }
}

impl PartialOrd for CommentedString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CommentedString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.string.cmp(&other.string)
    }
}

impl Borrow<str> for CommentedString {
    fn borrow(&self) -> &str {
        &self.string
    }
}

impl From<&str> for CommentedString {
    fn from(value: &str) -> Self {
        CommentedString::new(value)
    }
}

impl From<String> for CommentedString {
    fn from(value: String) -> Self {
        CommentedString::new(value)
    }
}

impl Serialize for CommentedString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bare_strings() {
        for s in ["isa", "PBXFileReference", "foo.swift", "Sources/App", "46", "_x.y/z"] {
            assert_eq!(CommentedString::new(s).escaped(), s, "{s} should stay bare");
        }
    }

    #[test]
    fn test_quoted_strings() {
        assert_eq!(CommentedString::new("My App").escaped(), "\"My App\"");
        assert_eq!(CommentedString::new("-ObjC").escaped(), "\"-ObjC\"");
        assert_eq!(CommentedString::new("a:b").escaped(), "\"a:b\"");
        assert_eq!(CommentedString::new("héllo").escaped(), "\"héllo\"");
        assert_eq!(
            CommentedString::new("___FILEHEADER___").escaped(),
            "\"___FILEHEADER___\""
        );
        assert_eq!(CommentedString::new("http//x").escaped(), "\"http//x\"");
    }

    #[test]
    fn test_escapes() {
        let s = CommentedString::new("say \"hi\"\n\tback\\slash");
        assert_eq!(s.escaped(), r#""say \"hi\"\n\tback\\slash""#);
    }

    #[test]
    fn test_comment_excluded_from_equality_and_hash() {
        let a = CommentedString::with_comment("K", "one");
        let b = CommentedString::with_comment("K", "two");
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display_with_comment() {
        let s = CommentedString::with_comment("ROOT1", "Project object");
        assert_eq!(s.to_string(), "ROOT1 /* Project object */");
        assert_eq!(CommentedString::new("a b").to_string(), "\"a b\"");
    }

    #[test]
    fn test_comment_validity() {
        assert!(CommentedString::new("x").has_valid_comment());
        assert!(CommentedString::with_comment("x", "fine").has_valid_comment());
        assert!(!CommentedString::with_comment("x", "bad */").has_valid_comment());
    }
}
