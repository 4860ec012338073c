//! Property-list text emission.
//!
//! This module provides the [`Writer`] that turns a [`Document`] into
//! project-file text.
//!
//! ## Overview
//!
//! The writer walks the value tree once, appending to a single buffer:
//!
//! - **Dictionaries** are written as `{ key = value; ... }` with keys sorted,
//!   `isa` first
//! - **Arrays** are written as `( item, ... )` in their given order, every item
//!   followed by a comma
//! - **Sections** group the document's objects under `Begin`/`End` markers,
//!   sorted by reference
//!
//! Each object picks its own line mode. Multiline objects get one entry per
//! line and one indentation level per nesting depth; compact objects replace
//! every line break with a space and drop indentation. The mode applies to the
//! object's value only and is restored once the entry is written.
//!
//! ## Direct Writer Usage
//!
//! Most callers should use [`to_string`](crate::to_string). The writer can also
//! be driven directly:
//!
//! ```rust
//! use serde_pbxproj::{plist, PlistOptions, Writer};
//!
//! let mut writer = Writer::new(PlistOptions::new());
//! writer.write_value(&plist!(["a", "b"]));
//! assert_eq!(writer.into_inner(), "(\n\ta,\n\tb,\n)");
//! ```

use crate::{CommentedString, Document, PlistObject, PlistOptions, PlistValue, Section};
use std::mem;

/// Marker line identifying the text encoding.
pub const HEADER: &str = "// !$*UTF8*$!";

/// Comment attached to the `rootObject` reference.
pub const ROOT_OBJECT_COMMENT: &str = "Project object";

/// The property-list writer.
///
/// A writer holds only transient formatting state: the output buffer, the
/// current indentation depth and the current line mode.
pub struct Writer {
    output: String,
    options: PlistOptions,
    indent_unit: String,
    indent_level: usize,
    multiline: bool,
}

impl Writer {
    /// Creates a writer with an empty buffer at the top level.
    pub fn new(options: PlistOptions) -> Self {
        Writer {
            output: String::with_capacity(4096),
            indent_unit: options.indent.unit(),
            options,
            indent_level: 0,
            multiline: true,
        }
    }

    /// Consumes the writer and returns the text written so far.
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Renders `value` on a single line.
    pub(crate) fn compact_value(value: &PlistValue) -> String {
        let mut writer = Writer::new(PlistOptions::default());
        writer.multiline = false;
        writer.write_value(value);
        writer.output
    }

    /// Writes a complete project file.
    ///
    /// # Panics
    ///
    /// Panics if two objects of one section share a reference, or if a comment
    /// contains `*/`. See [`Document::validate`] for a non-panicking check.
    #[tracing::instrument(skip_all, fields(root = %document.root_object, objects = document.len()))]
    pub fn write_document(&mut self, document: &Document) {
        tracing::debug!(
            archive_version = document.archive_version,
            object_version = document.object_version,
            "writing project document"
        );

        self.write_str(HEADER);
        self.write_newline();
        self.write_str("{");
        self.write_newline();
        self.increase_indent();

        self.write_field("archiveVersion", PlistValue::from(document.archive_version));
        self.write_field("classes", PlistValue::Array(Vec::new()));
        self.write_field("objectVersion", PlistValue::from(document.object_version));

        // Sections are written between the braces of `objects`
        self.write_indent();
        self.write_str("objects = {");
        self.increase_indent();
        self.write_newline();

        for section in Section::ALL {
            self.write_section(*section, document.objects(*section));
        }

        self.decrease_indent();
        self.write_indent();
        self.write_str("};");
        self.write_newline();

        self.write_field(
            "rootObject",
            PlistValue::from(CommentedString::with_comment(
                document.root_object.as_str(),
                ROOT_OBJECT_COMMENT,
            )),
        );

        self.decrease_indent();
        self.write_indent();
        self.write_str("}");
        self.write_newline();
    }

    /// Appends `value` using the current line mode.
    ///
    /// # Panics
    ///
    /// Panics if a comment inside `value` contains `*/`.
    pub fn write_value(&mut self, value: &PlistValue) {
        match value {
            PlistValue::String(s) => self.write_commented_string(s),
            PlistValue::Array(items) => self.write_array(items),
            PlistValue::Dictionary(map) => {
                self.write_str("{");
                self.write_newline();
                self.increase_indent();
                for (key, value) in map.sorted_entries() {
                    self.write_entry(key, value, self.multiline);
                }
                self.decrease_indent();
                self.write_indent();
                self.write_str("}");
            }
        }
    }

    fn write_section(&mut self, section: Section, objects: &[Box<dyn PlistObject>]) {
        if objects.is_empty() {
            return;
        }

        let mut sorted: Vec<&dyn PlistObject> = objects.iter().map(|object| &**object).collect();
        sorted.sort_by(|a, b| a.reference().cmp(b.reference()));
        if let Some(pair) = sorted
            .windows(2)
            .find(|pair| pair[0].reference() == pair[1].reference())
        {
            panic!(
                "duplicate reference {} in {} section",
                pair[0].reference(),
                section
            );
        }

        tracing::debug!(section = section.name(), count = sorted.len(), "writing section");

        self.write_newline();
        self.write_str("/* Begin ");
        self.write_str(section.name());
        self.write_str(" section */");
        self.write_newline();

        for object in sorted {
            let (key, value) = object.to_plist();
            let multiline = self.options.expand_all || object.is_multiline();
            tracing::trace!(reference = object.reference(), multiline, "writing object");
            self.write_entry(&key, &value, multiline);
        }

        self.write_str("/* End ");
        self.write_str(section.name());
        self.write_str(" section */");
        self.write_newline();
    }

    fn write_field(&mut self, key: &str, value: PlistValue) {
        self.write_entry(&CommentedString::new(key), &value, self.multiline);
    }

    /// Writes `key = value;` with `value` in the given line mode.
    fn write_entry(&mut self, key: &CommentedString, value: &PlistValue, multiline: bool) {
        self.write_indent();
        let previous = mem::replace(&mut self.multiline, multiline);
        self.write_commented_string(key);
        self.write_str(" = ");
        self.write_value(value);
        self.write_str(";");
        self.multiline = previous;
        self.write_newline();
    }

    fn write_array(&mut self, items: &[PlistValue]) {
        self.write_str("(");
        self.write_newline();
        self.increase_indent();
        for item in items {
            self.write_indent();
            self.write_value(item);
            self.write_str(",");
            self.write_newline();
        }
        self.decrease_indent();
        self.write_indent();
        self.write_str(")");
    }

    fn write_commented_string(&mut self, s: &CommentedString) {
        assert!(
            s.has_valid_comment(),
            "comment on {} contains \"*/\"",
            s.string
        );
        self.output.push_str(&s.escaped());
        if let Some(comment) = &s.comment {
            self.write_str(" /* ");
            self.write_str(comment);
            self.write_str(" */");
        }
    }

    #[inline]
    fn write_str(&mut self, s: &str) {
        self.output.push_str(s);
    }

    #[inline]
    fn write_newline(&mut self) {
        self.output.push(if self.multiline { '\n' } else { ' ' });
    }

    #[inline]
    fn write_indent(&mut self) {
        if self.multiline {
            for _ in 0..self.indent_level {
                self.output.push_str(&self.indent_unit);
            }
        }
    }

    #[inline]
    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    #[inline]
    fn decrease_indent(&mut self) {
        self.indent_level -= 1;
    }
}
