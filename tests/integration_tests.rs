use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_pbxproj::{
    plist, to_string, to_value, CommentedString, Document, PlistObject, PlistValue, Section,
};

struct FileReference {
    reference: &'static str,
    path: &'static str,
    file_type: &'static str,
}

impl PlistObject for FileReference {
    fn section(&self) -> Section {
        Section::PBXFileReference
    }

    fn reference(&self) -> &str {
        self.reference
    }

    fn to_plist(&self) -> (CommentedString, PlistValue) {
        let body = plist!({
            "isa": "PBXFileReference",
            "lastKnownFileType": (self.file_type),
            "path": (self.path),
            "sourceTree": "<group>",
        });
        (CommentedString::with_comment(self.reference, self.path), body)
    }

    fn is_multiline(&self) -> bool {
        false
    }
}

struct BuildFile {
    reference: &'static str,
    file: &'static FileReference,
}

impl PlistObject for BuildFile {
    fn section(&self) -> Section {
        Section::PBXBuildFile
    }

    fn reference(&self) -> &str {
        self.reference
    }

    fn to_plist(&self) -> (CommentedString, PlistValue) {
        let file_ref = CommentedString::with_comment(self.file.reference, self.file.path);
        let body = plist!({ "isa": "PBXBuildFile", "fileRef": file_ref });
        let comment = format!("{} in Sources", self.file.path);
        (CommentedString::with_comment(self.reference, comment), body)
    }

    fn is_multiline(&self) -> bool {
        false
    }
}

struct Group {
    reference: &'static str,
    name: Option<&'static str>,
    children: Vec<&'static FileReference>,
}

impl PlistObject for Group {
    fn section(&self) -> Section {
        Section::PBXGroup
    }

    fn reference(&self) -> &str {
        self.reference
    }

    fn to_plist(&self) -> (CommentedString, PlistValue) {
        let children: Vec<PlistValue> = self
            .children
            .iter()
            .map(|f| CommentedString::with_comment(f.reference, f.path).into())
            .collect();

        let mut body = plist!({ "isa": "PBXGroup", "sourceTree": "<group>" });
        if let PlistValue::Dictionary(map) = &mut body {
            map.insert("children", children);
            if let Some(name) = self.name {
                map.insert("name", name);
            }
        }

        let key = match self.name {
            Some(name) => CommentedString::with_comment(self.reference, name),
            None => CommentedString::new(self.reference),
        };
        (key, body)
    }
}

#[derive(Serialize)]
struct BuildSettings {
    #[serde(rename = "PRODUCT_NAME")]
    product_name: &'static str,
    #[serde(rename = "SWIFT_VERSION")]
    swift_version: &'static str,
    #[serde(rename = "ENABLE_TESTABILITY")]
    enable_testability: bool,
}

struct BuildConfiguration {
    reference: &'static str,
    name: &'static str,
    settings: BuildSettings,
}

impl PlistObject for BuildConfiguration {
    fn section(&self) -> Section {
        Section::XCBuildConfiguration
    }

    fn reference(&self) -> &str {
        self.reference
    }

    fn to_plist(&self) -> (CommentedString, PlistValue) {
        let settings = to_value(&self.settings).expect("build settings are plain strings");
        let body = plist!({
            "isa": "XCBuildConfiguration",
            "buildSettings": settings,
            "name": (self.name),
        });
        (CommentedString::with_comment(self.reference, self.name), body)
    }
}

static MAIN_SWIFT: FileReference = FileReference {
    reference: "F0000000000000000000000A",
    path: "main.swift",
    file_type: "sourcecode.swift",
};

static APP_DELEGATE: FileReference = FileReference {
    reference: "F0000000000000000000000B",
    path: "App Delegate.swift",
    file_type: "sourcecode.swift",
};

fn project() -> Document {
    let mut doc = Document::new("P0000000000000000000000A");
    // Inserted out of order on purpose
    doc.push(Group {
        reference: "G0000000000000000000000B",
        name: Some("Sources"),
        children: vec![&MAIN_SWIFT, &APP_DELEGATE],
    });
    doc.push(BuildConfiguration {
        reference: "C0000000000000000000000A",
        name: "Debug",
        settings: BuildSettings {
            product_name: "$(TARGET_NAME)",
            swift_version: "5.0",
            enable_testability: true,
        },
    });
    doc.push(&APP_DELEGATE);
    doc.push(BuildFile {
        reference: "B0000000000000000000000A",
        file: &MAIN_SWIFT,
    });
    doc.push(&MAIN_SWIFT);
    doc.push(Group {
        reference: "G0000000000000000000000A",
        name: None,
        children: vec![],
    });
    doc
}

impl PlistObject for &'static FileReference {
    fn section(&self) -> Section {
        (**self).section()
    }

    fn reference(&self) -> &str {
        (**self).reference()
    }

    fn to_plist(&self) -> (CommentedString, PlistValue) {
        (**self).to_plist()
    }

    fn is_multiline(&self) -> bool {
        (**self).is_multiline()
    }
}

const EXPECTED: &str = "// !$*UTF8*$!
{
\tarchiveVersion = 1;
\tclasses = (
\t);
\tobjectVersion = 46;
\tobjects = {

/* Begin PBXBuildFile section */
\t\tB0000000000000000000000A /* main.swift in Sources */ = {isa = PBXBuildFile; fileRef = F0000000000000000000000A /* main.swift */; };
/* End PBXBuildFile section */

/* Begin PBXFileReference section */
\t\tF0000000000000000000000A /* main.swift */ = {isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = main.swift; sourceTree = \"<group>\"; };
\t\tF0000000000000000000000B /* App Delegate.swift */ = {isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = \"App Delegate.swift\"; sourceTree = \"<group>\"; };
/* End PBXFileReference section */

/* Begin PBXGroup section */
\t\tG0000000000000000000000A = {
\t\t\tisa = PBXGroup;
\t\t\tchildren = (
\t\t\t);
\t\t\tsourceTree = \"<group>\";
\t\t};
\t\tG0000000000000000000000B /* Sources */ = {
\t\t\tisa = PBXGroup;
\t\t\tchildren = (
\t\t\t\tF0000000000000000000000A /* main.swift */,
\t\t\t\tF0000000000000000000000B /* App Delegate.swift */,
\t\t\t);
\t\t\tname = Sources;
\t\t\tsourceTree = \"<group>\";
\t\t};
/* End PBXGroup section */

/* Begin XCBuildConfiguration section */
\t\tC0000000000000000000000A /* Debug */ = {
\t\t\tisa = XCBuildConfiguration;
\t\t\tbuildSettings = {
\t\t\t\tENABLE_TESTABILITY = YES;
\t\t\t\tPRODUCT_NAME = \"$(TARGET_NAME)\";
\t\t\t\tSWIFT_VERSION = 5.0;
\t\t\t};
\t\t\tname = Debug;
\t\t};
/* End XCBuildConfiguration section */
\t};
\trootObject = P0000000000000000000000A /* Project object */;
}
";

#[test]
fn test_full_project() {
    let doc = project();
    doc.validate().unwrap();
    assert_eq!(to_string(&doc), EXPECTED);
}

#[test]
fn test_idempotent() {
    let doc = project();
    assert_eq!(to_string(&doc), to_string(&doc));
}

#[test]
fn test_array_order_is_preserved() {
    let text = to_string(&project());
    let main = text.find("\t\t\t\tF0000000000000000000000A /* main.swift */,").unwrap();
    let delegate = text
        .find("\t\t\t\tF0000000000000000000000B /* App Delegate.swift */,")
        .unwrap();
    assert!(main < delegate);
}

#[test]
fn test_dangling_references_pass_through() {
    let doc = Document::new("DOES_NOT_EXIST");
    let text = to_string(&doc);
    assert!(text.contains("rootObject = DOES_NOT_EXIST /* Project object */;"));
}
