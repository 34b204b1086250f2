/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 7/2/26
******************************************************************************/

//! Error types for FIX specification parsing.
//!
//! All specification defects are fatal: the parser reports the first one it
//! encounters and the run aborts. Every variant carries enough context (field
//! name, offending value) to locate the defect in the source document.

use thiserror::Error;

/// Result type alias using [`DictionaryError`] as the error type.
pub type Result<T> = std::result::Result<T, DictionaryError>;

/// Errors raised while reading a FIX specification document.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// Malformed XML in the specification document.
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Invalid UTF-8 in an element or attribute.
    #[error("invalid utf-8 in specification: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A required element is absent or unterminated.
    #[error("missing element: {name}")]
    MissingElement {
        /// Name of the expected element.
        name: String,
    },

    /// A required attribute is absent from an element.
    #[error("missing attribute `{attribute}` on element `{element}`")]
    MissingAttribute {
        /// Name of the element.
        element: String,
        /// Name of the expected attribute.
        attribute: String,
    },

    /// A field definition carries a non-numeric tag number.
    #[error("invalid tag number for field {field}: {value}")]
    InvalidTagNumber {
        /// Name of the field definition.
        field: String,
        /// The offending attribute value.
        value: String,
    },

    /// A field definition carries a type with no entry in the
    /// normalization table.
    #[error("unknown field type for field {field}: {type_name}")]
    UnknownFieldType {
        /// Name of the field definition.
        field: String,
        /// The offending type string.
        type_name: String,
    },

    /// The header or a message references a field name that is not in
    /// the field dictionary.
    #[error("unresolved field reference in {context}: {name}")]
    UnresolvedField {
        /// The unresolved field name.
        name: String,
        /// Where the reference appears (header or message name).
        context: String,
    },

    /// A required marker outside {Y, N}.
    #[error("invalid required flag for field {field}: expected Y or N, found {value}")]
    InvalidRequiredFlag {
        /// Name of the referenced field.
        field: String,
        /// The offending attribute value.
        value: String,
    },
}
