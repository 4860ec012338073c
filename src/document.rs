//! The root of a project file.
//!
//! A [`Document`] carries the format versions, the objects grouped by
//! [`Section`] and the reference of the project object. It is built up front
//! and handed to the writer read-only.

use crate::{Error, PlistObject, Result, Section};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Archive version written by current build tools.
pub const DEFAULT_ARCHIVE_VERSION: u32 = 1;

/// Object version written by current build tools.
pub const DEFAULT_OBJECT_VERSION: u32 = 46;

/// A project file ready to be written.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::{Document, GenericObject, PlistMap, Section};
///
/// let mut doc = Document::new("ROOT1").with_object_version(56);
/// doc.push(GenericObject::new(Section::PBXGroup, "G1", PlistMap::new()));
///
/// assert_eq!(doc.len(), 1);
/// assert_eq!(doc.objects(Section::PBXGroup).len(), 1);
/// assert!(doc.objects(Section::PBXProject).is_empty());
/// ```
pub struct Document {
    pub archive_version: u32,
    pub object_version: u32,
    pub root_object: String,
    objects: BTreeMap<Section, Vec<Box<dyn PlistObject>>>,
}

impl Document {
    /// Creates an empty document with the default versions.
    #[must_use]
    pub fn new(root_object: impl Into<String>) -> Self {
        Document {
            archive_version: DEFAULT_ARCHIVE_VERSION,
            object_version: DEFAULT_OBJECT_VERSION,
            root_object: root_object.into(),
            objects: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_archive_version(mut self, version: u32) -> Self {
        self.archive_version = version;
        self
    }

    #[must_use]
    pub fn with_object_version(mut self, version: u32) -> Self {
        self.object_version = version;
        self
    }

    /// Adds an object to the section it reports.
    pub fn push<O>(&mut self, object: O)
    where
        O: PlistObject + 'static,
    {
        self.push_boxed(Box::new(object));
    }

    /// Adds an already boxed object to the section it reports.
    pub fn push_boxed(&mut self, object: Box<dyn PlistObject>) {
        self.objects.entry(object.section()).or_default().push(object);
    }

    /// Returns the objects of `section` in insertion order.
    #[must_use]
    pub fn objects(&self, section: Section) -> &[Box<dyn PlistObject>] {
        self.objects.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the total number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks the caller contracts the writer relies on.
    ///
    /// Writing a document that fails this check panics; callers that build
    /// documents from untrusted input can run it first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateReference`] when two objects of one section
    /// share a reference and [`Error::InvalidComment`] when an annotation
    /// contains `*/`.
    pub fn validate(&self) -> Result<()> {
        for section in Section::ALL {
            let mut seen = HashSet::new();
            for object in self.objects(*section) {
                if !seen.insert(object.reference()) {
                    return Err(Error::duplicate_reference(section.name(), object.reference()));
                }

                let (key, value) = object.to_plist();
                let mut invalid = None;
                if !key.has_valid_comment() {
                    invalid = Some(key.clone());
                }
                value.for_each_string(&mut |s| {
                    if invalid.is_none() && !s.has_valid_comment() {
                        invalid = Some(s.clone());
                    }
                });

                if let Some(s) = invalid {
                    return Err(Error::invalid_comment(
                        &s.string,
                        s.comment.as_deref().unwrap_or_default(),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: BTreeMap<_, _> = self
            .objects
            .iter()
            .map(|(section, objects)| (section.name(), objects.len()))
            .collect();
        f.debug_struct("Document")
            .field("archive_version", &self.archive_version)
            .field("object_version", &self.object_version)
            .field("root_object", &self.root_object)
            .field("objects", &counts)
            .finish()
    }
}
