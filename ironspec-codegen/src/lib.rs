/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 7/2/26
******************************************************************************/

//! # IronSpec Codegen
//!
//! Declaration generation from FIX specification documents.
//!
//! This crate renders a parsed specification into the three declaration
//! artifacts consumed by the downstream codec:
//! - the header declaration (framing fields elided)
//! - one message declaration per message, repeating groups nested
//! - the deduplicated tag list, sorted by tag number

pub mod error;
pub mod generator;
pub mod render;
pub mod tagset;

pub use error::CodegenError;
pub use generator::{Artifacts, Generator, artifact_file};
pub use tagset::TagSet;

use ironspec_dictionary::parse_spec;

/// Generates the declaration artifacts from a specification XML string.
///
/// # Arguments
/// * `xml` - Specification document content
///
/// # Returns
/// The generated artifacts.
///
/// # Errors
/// Returns `CodegenError` if the specification fails to parse or resolve.
pub fn generate_from_xml(xml: &str) -> Result<Artifacts, CodegenError> {
    let doc = parse_spec(xml)?;
    Ok(Generator::new(&doc).generate())
}

/// Generates the declaration artifacts from a specification file.
///
/// # Arguments
/// * `path` - Path to the specification XML file
///
/// # Returns
/// The generated artifacts.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or resolution fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<Artifacts, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_from_xml_minimal() {
        let xml = r#"
            <fix major="4" minor="2">
                <header>
                    <field name="OrderID" required="Y"/>
                </header>
                <messages/>
                <fields>
                    <field number="11" name="OrderID" type="STRING"/>
                </fields>
            </fix>
        "#;
        let artifacts = generate_from_xml(xml).unwrap();
        assert_eq!(
            artifacts.header,
            "using Header = MessageBase<Field, Required<Tag::OrderID>>;"
        );
        assert_eq!(artifacts.tags, "using OrderID = TagT<11, Type::String>;\n");
        assert!(artifacts.messages.is_empty());
    }

    #[test]
    fn test_generate_from_xml_propagates_parse_errors() {
        let err = generate_from_xml("<other/>").unwrap_err();
        assert!(matches!(err, CodegenError::Dictionary(_)));
    }

    #[test]
    fn test_generate_from_file_missing_path() {
        let err = generate_from_file(std::path::Path::new("/nonexistent/spec.xml")).unwrap_err();
        assert!(matches!(err, CodegenError::Io(_)));
    }
}
