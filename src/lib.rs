//! # serde_pbxproj
//!
//! A deterministic writer for OpenStep-style property lists, the text format of
//! build-tool project description files (`project.pbxproj`).
//!
//! ## What does it guarantee?
//!
//! Build tools and version control both read these files, so the output has to
//! be byte-stable:
//!
//! - **Sorted dictionaries**: keys are written in lexicographic order with `isa`
//!   always first
//! - **Sorted sections**: objects are grouped by kind under `Begin`/`End`
//!   markers and ordered by reference within each group
//! - **Exact layout**: one tab per nesting level, a comma after every array
//!   item, a semicolon after every dictionary entry
//! - **Annotations**: any string can carry a `/* comment */` that never affects
//!   ordering or equality
//!
//! Writing the same document twice yields identical text, whatever order its
//! objects and entries were inserted in.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_pbxproj::{to_string, CommentedString, Document, GenericObject, PlistMap, Section};
//!
//! let mut body = PlistMap::new();
//! body.insert("path", "foo.swift");
//! body.insert("isa", "PBXFileReference");
//!
//! let mut doc = Document::new("ROOT1");
//! doc.push(
//!     GenericObject::new(Section::PBXFileReference, "ABC123", body)
//!         .with_comment("foo.swift")
//!         .compact(),
//! );
//!
//! let text = to_string(&doc);
//! assert!(text.contains(
//!     "\t\tABC123 /* foo.swift */ = {isa = PBXFileReference; path = foo.swift; };\n"
//! ));
//! assert!(text.ends_with("\trootObject = ROOT1 /* Project object */;\n}\n"));
//! ```
//!
//! ### Building Values with Serde
//!
//! ```rust
//! use serde::Serialize;
//! use serde_pbxproj::to_value;
//!
//! #[derive(Serialize)]
//! struct Settings {
//!     #[serde(rename = "SWIFT_VERSION")]
//!     swift_version: &'static str,
//!     #[serde(rename = "ENABLE_BITCODE")]
//!     enable_bitcode: bool,
//! }
//!
//! let value = to_value(&Settings { swift_version: "5.0", enable_bitcode: false }).unwrap();
//! assert_eq!(value.to_string(), "{ENABLE_BITCODE = NO; SWIFT_VERSION = 5.0; }");
//! ```
//!
//! ## Contracts
//!
//! The writer trusts its input. References must be unique within a section
//! and annotations must not contain `*/`. A duplicate reference makes the
//! writer panic rather than emit a file build tools would misread; call
//! [`Document::validate`] first when the document comes from untrusted input.
//!
//! ## Logging
//!
//! The writer emits `tracing` events at `debug` (per document and section) and
//! `trace` (per object) level. Install any subscriber to see them.

pub mod document;
pub mod error;
pub mod macros;
pub mod map;
pub mod object;
pub mod options;
pub mod ser;
pub mod string;
pub mod value;
pub mod writer;

pub use document::Document;
pub use error::{Error, Result};
pub use map::{compare_keys, PlistMap};
pub use object::{GenericObject, PlistObject, Section};
pub use options::{Indent, PlistOptions};
pub use ser::PlistValueSerializer;
pub use string::CommentedString;
pub use value::PlistValue;
pub use writer::Writer;

use serde::Serialize;
use std::io;

/// Writes a document as project-file text.
///
/// # Panics
///
/// Panics if two objects of one section share a reference, or if a comment
/// contains `*/`. [`Document::validate`] reports both as errors instead.
#[must_use]
pub fn to_string(document: &Document) -> String {
    to_string_with_options(document, PlistOptions::default())
}

/// Writes a document as project-file text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::{to_string_with_options, Document, Indent, PlistOptions};
///
/// let doc = Document::new("ROOT");
/// let text = to_string_with_options(&doc, PlistOptions::new().with_indent(Indent::Spaces(2)));
/// assert!(text.contains("\n  objectVersion = 46;\n"));
/// ```
///
/// # Panics
///
/// Panics if two objects of one section share a reference, or if a comment
/// contains `*/`. [`Document::validate`] reports both as errors instead.
#[must_use]
pub fn to_string_with_options(document: &Document, options: PlistOptions) -> String {
    let mut writer = Writer::new(options);
    writer.write_document(document);
    writer.into_inner()
}

/// Writes a document to an I/O sink.
///
/// The text is produced in full before anything reaches the sink.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::{to_writer, Document};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Document::new("ROOT")).unwrap();
/// assert!(buffer.starts_with(b"// !$*UTF8*$!\n{\n"));
/// ```
///
/// # Errors
///
/// Returns an error if writing to the sink fails.
///
/// # Panics
///
/// Panics on the same contract violations as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, document: &Document) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, document, PlistOptions::default())
}

/// Writes a document to an I/O sink with custom options.
///
/// # Errors
///
/// Returns an error if writing to the sink fails.
///
/// # Panics
///
/// Panics on the same contract violations as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, document: &Document, options: PlistOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(document, options);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Convert any `T: Serialize` to a [`PlistValue`].
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::to_value;
///
/// let value = to_value(&vec!["Debug", "Release"]).unwrap();
/// assert_eq!(value.to_string(), "(Debug, Release, )");
/// ```
///
/// # Errors
///
/// Returns an error if the value has no property-list representation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<PlistValue>
where
    T: ?Sized + Serialize,
{
    ser::to_plist_value(value)
}
