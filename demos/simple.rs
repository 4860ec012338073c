//! Writing a small project file with two sections.
//!
//! Run with: cargo run --example simple

use serde_pbxproj::{to_string, CommentedString, Document, GenericObject, PlistMap, Section};

fn main() {
    let mut doc = Document::new("ROOT");

    let mut file = PlistMap::new();
    file.insert("isa", "PBXFileReference");
    file.insert("lastKnownFileType", "sourcecode.swift");
    file.insert("path", "AppDelegate.swift");
    file.insert("sourceTree", "<group>");
    doc.push(
        GenericObject::new(Section::PBXFileReference, "F1", file)
            .with_comment("AppDelegate.swift")
            .compact(),
    );

    let mut group = PlistMap::new();
    group.insert("isa", "PBXGroup");
    group.insert(
        "children",
        vec![CommentedString::with_comment("F1", "AppDelegate.swift")],
    );
    group.insert("sourceTree", "<group>");
    doc.push(GenericObject::new(Section::PBXGroup, "G1", group));

    // Reports bad comments and duplicate references instead of panicking
    if let Err(err) = doc.validate() {
        eprintln!("invalid document: {}", err);
        return;
    }

    print!("{}", to_string(&doc));
}
