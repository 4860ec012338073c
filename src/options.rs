//! Configuration options for property-list output.
//!
//! - [`PlistOptions`]: Main configuration struct
//! - [`Indent`]: Indentation unit for multiline output
//!
//! The defaults produce the canonical project-file layout byte for byte. The
//! other settings exist for inspecting output and are not read back by build
//! tools in the same way.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pbxproj::{to_string_with_options, Document, Indent, PlistOptions};
//!
//! let doc = Document::new("ROOT");
//! let options = PlistOptions::new().with_indent(Indent::Spaces(4));
//! let text = to_string_with_options(&doc, options);
//! assert!(text.contains("    archiveVersion = 1;"));
//! ```

/// Indentation unit emitted once per nesting level.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::Indent;
///
/// assert_eq!(Indent::Tab.unit(), "\t");
/// assert_eq!(Indent::Spaces(2).unit(), "  ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    /// Returns the text of one indentation level.
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(*n),
        }
    }
}

/// Configuration options for the writer.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::{Indent, PlistOptions};
///
/// // Canonical output
/// let options = PlistOptions::new();
/// assert_eq!(options.indent, Indent::Tab);
/// assert!(!options.expand_all);
///
/// // Every object expanded, space indented
/// let options = PlistOptions::expanded().with_indent(Indent::Spaces(2));
/// assert!(options.expand_all);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlistOptions {
    pub indent: Indent,
    pub expand_all: bool,
}

impl PlistOptions {
    /// Creates the canonical options (tab indentation, per-object line mode).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that render every object multiline, ignoring compact flags.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pbxproj::PlistOptions;
    ///
    /// assert!(PlistOptions::expanded().expand_all);
    /// ```
    #[must_use]
    pub fn expanded() -> Self {
        PlistOptions {
            expand_all: true,
            ..Default::default()
        }
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Sets whether compact objects are expanded.
    #[must_use]
    pub fn with_expand_all(mut self, expand_all: bool) -> Self {
        self.expand_all = expand_all;
        self
    }
}
