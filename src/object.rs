//! Sectioned objects.
//!
//! Every entry of a project file's `objects` dictionary belongs to exactly one
//! [`Section`], named after its ISA. Types describing project entities
//! implement [`PlistObject`] to hand the writer their key, their body and their
//! preferred line mode.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pbxproj::{plist, CommentedString, PlistObject, PlistValue, Section};
//!
//! struct BuildFile {
//!     reference: String,
//!     file_ref: String,
//!     name: String,
//! }
//!
//! impl PlistObject for BuildFile {
//!     fn section(&self) -> Section {
//!         Section::PBXBuildFile
//!     }
//!
//!     fn reference(&self) -> &str {
//!         &self.reference
//!     }
//!
//!     fn to_plist(&self) -> (CommentedString, PlistValue) {
//!         let comment = format!("{} in Sources", self.name);
//!         let file_ref = CommentedString::with_comment(self.file_ref.as_str(), self.name.as_str());
//!         let body = plist!({ "isa": "PBXBuildFile", "fileRef": file_ref });
//!         (CommentedString::with_comment(self.reference.as_str(), comment), body)
//!     }
//!
//!     fn is_multiline(&self) -> bool {
//!         false
//!     }
//! }
//! ```

use crate::{CommentedString, Error, PlistMap, PlistValue};
use std::fmt;
use std::str::FromStr;

macro_rules! sections {
    ($($variant:ident),* $(,)?) => {
        /// Object kinds of a project file, in output order.
        ///
        /// The derived ordering is the declaration order, which is the order
        /// sections appear in the output.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Section {
            $($variant),*
        }

        impl Section {
            /// All sections in output order.
            pub const ALL: &'static [Section] = &[$(Section::$variant),*];

            /// Returns the ISA name used in `Begin`/`End` markers.
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Section::$variant => stringify!($variant)),*
                }
            }
        }

        impl FromStr for Section {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok(Section::$variant),)*
                    other => Err(Error::custom(format!("unknown section {other}"))),
                }
            }
        }
    };
}

sections! {
    PBXAggregateTarget,
    PBXBuildFile,
    PBXBuildRule,
    PBXContainerItemProxy,
    PBXCopyFilesBuildPhase,
    PBXFileReference,
    PBXFileSystemSynchronizedBuildFileExceptionSet,
    PBXFileSystemSynchronizedRootGroup,
    PBXFrameworksBuildPhase,
    PBXGroup,
    PBXHeadersBuildPhase,
    PBXLegacyTarget,
    PBXNativeTarget,
    PBXProject,
    PBXReferenceProxy,
    PBXResourcesBuildPhase,
    PBXRezBuildPhase,
    PBXShellScriptBuildPhase,
    PBXSourcesBuildPhase,
    PBXTargetDependency,
    PBXVariantGroup,
    XCBuildConfiguration,
    XCConfigurationList,
    XCLocalSwiftPackageReference,
    XCRemoteSwiftPackageReference,
    XCSwiftPackageProductDependency,
    XCVersionGroup,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An entity that is written as one entry of a section.
pub trait PlistObject {
    /// Section this object is grouped under.
    fn section(&self) -> Section;

    /// Unique identifier, used to order objects within their section.
    fn reference(&self) -> &str;

    /// The `key = value;` pair this object contributes.
    fn to_plist(&self) -> (CommentedString, PlistValue);

    /// Whether the value is written across several lines. Compact objects are
    /// written on a single line.
    fn is_multiline(&self) -> bool {
        true
    }
}

/// A [`PlistObject`] built directly from a dictionary.
///
/// The body is written as is; callers supply the `isa` entry themselves.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::{GenericObject, PlistMap, PlistObject, Section};
///
/// let mut body = PlistMap::new();
/// body.insert("isa", "PBXFileReference");
/// body.insert("path", "foo.swift");
///
/// let object = GenericObject::new(Section::PBXFileReference, "ABC123", body)
///     .with_comment("foo.swift")
///     .compact();
///
/// let (key, _) = object.to_plist();
/// assert_eq!(key.to_string(), "ABC123 /* foo.swift */");
/// assert!(!object.is_multiline());
/// ```
#[derive(Clone, Debug)]
pub struct GenericObject {
    pub section: Section,
    pub reference: String,
    pub comment: Option<String>,
    pub body: PlistMap,
    pub multiline: bool,
}

impl GenericObject {
    /// Creates a multiline object without a key comment.
    #[must_use]
    pub fn new(section: Section, reference: impl Into<String>, body: PlistMap) -> Self {
        GenericObject {
            section,
            reference: reference.into(),
            comment: None,
            body,
            multiline: true,
        }
    }

    /// Sets the comment written after the object's key.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Marks the object as single-line.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.multiline = false;
        self
    }
}

impl PlistObject for GenericObject {
    fn section(&self) -> Section {
        self.section
    }

    fn reference(&self) -> &str {
        &self.reference
    }

    fn to_plist(&self) -> (CommentedString, PlistValue) {
        let key = CommentedString {
            string: self.reference.clone(),
            comment: self.comment.clone(),
        };
        (key, PlistValue::Dictionary(self.body.clone()))
    }

    fn is_multiline(&self) -> bool {
        self.multiline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_in_declared_order() {
        let names: Vec<_> = Section::ALL.iter().map(Section::name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);

        assert!(Section::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!("PBXGroup".parse::<Section>().unwrap(), Section::PBXGroup);
        assert_eq!(Section::XCVersionGroup.to_string(), "XCVersionGroup");
        assert!("PBXWhatever".parse::<Section>().is_err());
    }

    #[test]
    fn test_generic_object_defaults() {
        let object = GenericObject::new(Section::PBXGroup, "G1", PlistMap::new());
        assert!(object.is_multiline());
        assert_eq!(object.reference(), "G1");

        let (key, value) = object.to_plist();
        assert!(key.comment.is_none());
        assert!(value.is_dictionary());
    }
}
