//! Error types for project property-list generation.
//!
//! Writing a well-formed [`Document`](crate::Document) cannot fail, so the
//! error type only covers the edges of the crate:
//!
//! - **Contract checks**: [`Document::validate`](crate::Document::validate)
//!   reports duplicate references and annotations that would break the output
//! - **Serde bridge**: [`to_value`](crate::to_value) reports Rust types that have
//!   no plist representation
//! - **I/O**: [`to_writer`](crate::to_writer) reports failures of the sink
//!
//! ## Examples
//!
//! ```rust
//! use serde_pbxproj::{Document, GenericObject, PlistMap, Section};
//!
//! let mut doc = Document::new("ROOT");
//! doc.push(GenericObject::new(Section::PBXGroup, "A1", PlistMap::new()));
//! doc.push(GenericObject::new(Section::PBXGroup, "A1", PlistMap::new()));
//!
//! let err = doc.validate().unwrap_err();
//! assert!(err.to_string().contains("A1"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all errors reported by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing to a sink
    #[error("IO error: {0}")]
    Io(String),

    /// Two objects of one section share a reference
    #[error("Duplicate reference {reference} in {section} section")]
    DuplicateReference { section: String, reference: String },

    /// An annotation would terminate its own block comment
    #[error("Invalid comment {comment:?} on {string}: comments must not contain \"*/\"")]
    InvalidComment { string: String, comment: String },

    /// Rust value with no property-list representation
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a duplicate reference error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pbxproj::Error;
    ///
    /// let err = Error::duplicate_reference("PBXGroup", "ABC");
    /// assert!(err.to_string().contains("PBXGroup section"));
    /// ```
    pub fn duplicate_reference(section: &str, reference: &str) -> Self {
        Error::DuplicateReference {
            section: section.to_string(),
            reference: reference.to_string(),
        }
    }

    /// Creates an invalid comment error for the annotated string `string`.
    pub fn invalid_comment(string: &str, comment: &str) -> Self {
        Error::InvalidComment {
            string: string.to_string(),
            comment: comment.to_string(),
        }
    }

    /// Creates an unsupported type error for values the serde bridge cannot represent.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pbxproj::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for sink write failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
