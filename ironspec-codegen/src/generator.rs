/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 7/2/26
******************************************************************************/

//! Artifact generation.
//!
//! Drives the renderers over one specification document in a fixed order
//! (header, messages, then the accumulated tags) and assembles the three
//! output artifacts with their deterministic file names.

use crate::render::{render_header, render_message, render_tag};
use crate::tagset::TagSet;
use ironspec_dictionary::SpecDocument;

/// The three generated declaration artifacts.
///
/// The header artifact is a single declaration; the messages artifact holds
/// one newline-terminated declaration per message in document order; the
/// tags artifact holds one newline-terminated declaration per referenced
/// tag in ascending tag-number order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Version string the artifact files are named after (e.g. `FIX.4.2`).
    pub version: String,
    /// Header declaration.
    pub header: String,
    /// Message declarations.
    pub messages: String,
    /// Tag declarations.
    pub tags: String,
}

impl Artifacts {
    /// Returns the artifacts as `(kind, file name, contents)` triples in
    /// emission order.
    #[must_use]
    pub fn outputs(&self) -> [(&'static str, String, &str); 3] {
        [
            ("header", artifact_file(&self.version, "header"), self.header.as_str()),
            (
                "messages",
                artifact_file(&self.version, "messages"),
                self.messages.as_str(),
            ),
            ("tags", artifact_file(&self.version, "tags"), self.tags.as_str()),
        ]
    }
}

/// Returns the deterministic artifact file name for a version and kind.
#[must_use]
pub fn artifact_file(version: &str, kind: &str) -> String {
    format!("{}.{}.txt", version, kind)
}

/// Declaration generator for one specification document.
#[derive(Debug)]
pub struct Generator<'a> {
    doc: &'a SpecDocument,
}

impl<'a> Generator<'a> {
    /// Creates a generator over a parsed specification document.
    #[must_use]
    pub fn new(doc: &'a SpecDocument) -> Self {
        Self { doc }
    }

    /// Generates the three declaration artifacts.
    ///
    /// The tag list is rendered last so it covers exactly the tags the
    /// header and message declarations referenced.
    #[must_use]
    pub fn generate(&self) -> Artifacts {
        let mut used = TagSet::new();

        let header = render_header(self.doc, &mut used);

        let mut messages = String::new();
        for msg in &self.doc.messages {
            messages.push_str(&render_message(msg, &mut used));
            messages.push('\n');
        }

        let mut tags = String::new();
        for tag in used.iter() {
            tags.push_str(&render_tag(tag));
            tags.push('\n');
        }

        Artifacts {
            version: self.doc.fix_version(),
            header,
            messages,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironspec_dictionary::parse_spec;

    const SPEC: &str = r#"
        <fix major="4" minor="2">
            <header>
                <field name="BeginString" required="Y"/>
                <field name="BodyLength" required="Y"/>
                <field name="MsgType" required="Y"/>
                <field name="OrderID" required="Y"/>
            </header>
            <messages>
                <message name="Allocation" msgtype="J">
                    <group name="NoAllocs" required="Y">
                        <field name="AllocAccount" required="N"/>
                    </group>
                </message>
            </messages>
            <fields>
                <field number="8" name="BeginString" type="STRING"/>
                <field number="9" name="BodyLength" type="INT"/>
                <field number="35" name="MsgType" type="STRING"/>
                <field number="11" name="OrderID" type="string"/>
                <field number="78" name="NoAllocs" type="INT"/>
                <field number="79" name="AllocAccount" type="STRING"/>
            </fields>
        </fix>
    "#;

    #[test]
    fn test_generate_round_trip_header_and_tags() {
        let doc = parse_spec(SPEC).unwrap();
        let artifacts = Generator::new(&doc).generate();

        assert_eq!(artifacts.version, "FIX.4.2");
        assert_eq!(
            artifacts.header,
            "using Header = MessageBase<Field, Required<Tag::OrderID>>;"
        );
        assert!(artifacts.tags.contains("using OrderID = TagT<11, Type::String>;"));
    }

    #[test]
    fn test_generate_nested_group_scenario() {
        let doc = parse_spec(SPEC).unwrap();
        let artifacts = Generator::new(&doc).generate();

        assert_eq!(
            artifacts.messages,
            "using Allocation = MessageV<Chars<'J'>, \
             Required<RepeatingGroup<Tag::NoAllocs, Tag::AllocAccount>>>;\n"
        );
        assert!(artifacts.tags.contains("using NoAllocs = TagT<78, Type::Int>;"));
        assert!(artifacts.tags.contains("using AllocAccount = TagT<79, Type::String>;"));
    }

    #[test]
    fn test_generate_tags_sorted_and_referenced_only() {
        let doc = parse_spec(SPEC).unwrap();
        let artifacts = Generator::new(&doc).generate();

        // Framing fields never reach the tag list; everything else that is
        // referenced does, in ascending tag-number order.
        let numbers: Vec<u32> = artifacts
            .tags
            .lines()
            .map(|line| {
                line.split("TagT<")
                    .nth(1)
                    .and_then(|rest| rest.split(',').next())
                    .and_then(|n| n.parse().ok())
                    .unwrap()
            })
            .collect();
        assert_eq!(numbers, vec![11, 78, 79]);
        assert!(!artifacts.tags.contains("BeginString"));
        assert!(!artifacts.tags.contains("BodyLength"));
        assert!(!artifacts.tags.contains("MsgType"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let doc = parse_spec(SPEC).unwrap();
        let first = Generator::new(&doc).generate();
        let second = Generator::new(&doc).generate();
        assert_eq!(first, second);

        let reparsed = parse_spec(SPEC).unwrap();
        assert_eq!(Generator::new(&reparsed).generate(), first);
    }

    #[test]
    fn test_artifact_file_names() {
        assert_eq!(artifact_file("FIX.4.2", "header"), "FIX.4.2.header.txt");
        let doc = parse_spec(SPEC).unwrap();
        let artifacts = Generator::new(&doc).generate();
        let names: Vec<String> = artifacts
            .outputs()
            .into_iter()
            .map(|(_, name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec![
                "FIX.4.2.header.txt".to_string(),
                "FIX.4.2.messages.txt".to_string(),
                "FIX.4.2.tags.txt".to_string(),
            ]
        );
    }
}
