/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 7/2/26
******************************************************************************/

//! # IronSpec Dictionary
//!
//! FIX specification parsing and dictionary schema for the IronSpec compiler.
//!
//! This crate provides:
//! - **Schema definitions**: Tags, field types, field tables, and message
//!   layouts with recursive repeating groups
//! - **Specification parsing**: QuickFIX XML format parser
//! - **Strict normalization**: Every specification type string must map onto
//!   the closed [`FieldType`] set; unknown types are fatal

pub mod error;
pub mod parser;
pub mod schema;

pub use error::{DictionaryError, Result};
pub use parser::parse_spec;
pub use schema::{FieldRef, FieldTable, FieldType, MessageDef, SpecDocument, Tag};
