//! Customizing output with PlistOptions.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use serde_pbxproj::{
    to_string_with_options, to_value, to_writer, Document, GenericObject, Indent, PlistMap,
    PlistOptions, Section,
};
use std::error::Error;

#[derive(Serialize)]
struct BuildSettings {
    #[serde(rename = "PRODUCT_NAME")]
    product_name: &'static str,
    #[serde(rename = "SWIFT_VERSION")]
    swift_version: &'static str,
    #[serde(rename = "ENABLE_TESTABILITY")]
    enable_testability: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new("ROOT");

    let mut body = PlistMap::new();
    body.insert("isa", "XCBuildConfiguration");
    body.insert(
        "buildSettings",
        to_value(&BuildSettings {
            product_name: "$(TARGET_NAME)",
            swift_version: "5.0",
            enable_testability: true,
        })?,
    );
    body.insert("name", "Debug");
    doc.push(GenericObject::new(Section::XCBuildConfiguration, "C1", body).with_comment("Debug"));

    let mut build = PlistMap::new();
    build.insert("isa", "PBXBuildFile");
    build.insert("fileRef", "F1");
    doc.push(GenericObject::new(Section::PBXBuildFile, "B1", build).compact());

    // Default: tabs, compact objects stay on one line
    println!("Default:");
    to_writer(std::io::stdout(), &doc)?;

    // Two-space indentation
    println!("\nSpaces:");
    let spaces = PlistOptions::new().with_indent(Indent::Spaces(2));
    print!("{}", to_string_with_options(&doc, spaces));

    // Every object expanded, regardless of its own line mode
    println!("\nExpanded:");
    print!("{}", to_string_with_options(&doc, PlistOptions::expanded()));

    Ok(())
}
