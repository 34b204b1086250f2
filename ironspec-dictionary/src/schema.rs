/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 7/2/26
******************************************************************************/

//! Schema definitions for FIX specification documents.
//!
//! This module defines the structures produced by the specification parser:
//! - [`FieldType`]: Normalized field data types
//! - [`Tag`]: The (number, name, type) identity of a field
//! - [`FieldTable`]: Field-name-to-tag lookup table
//! - [`FieldRef`]: Field and repeating-group references within a layout
//! - [`MessageDef`]: Message definitions with their ordered member lists
//! - [`SpecDocument`]: Complete parsed specification for one run

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::warn;

/// Normalized FIX field data type.
///
/// The specification declares types as free-form strings; [`FieldType::parse`]
/// maps them (case-insensitively) onto this closed set. Several specification
/// types collapse onto one variant: `PriceOffset` is carried as [`Float`],
/// `Length` as [`Int`], and `Currency`/`Exchange` as [`String`].
///
/// [`Float`]: FieldType::Float
/// [`Int`]: FieldType::Int
/// [`String`]: FieldType::String
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Single character.
    Char,
    /// Boolean (Y/N).
    Boolean,
    /// Raw data.
    Data,
    /// Floating point number.
    Float,
    /// Quantity.
    Qty,
    /// Amount (price * quantity).
    Amt,
    /// Price.
    Price,
    /// Integer value.
    Int,
    /// Day of month (1-31).
    DayOfMonth,
    /// String.
    String,
    /// Multiple string value (space-separated).
    MultipleValueString,
    /// Local market date.
    LocalMktDate,
    /// Month-year (YYYYMM).
    MonthYear,
    /// UTC date.
    UtcDate,
    /// UTC time only.
    UtcTimeOnly,
    /// UTC timestamp.
    UtcTimestamp,
}

impl FieldType {
    /// Normalizes a specification type string onto the closed type set.
    ///
    /// Matching is case-insensitive. Returns `None` for any string with no
    /// entry in the normalization table; callers treat that as a fatal
    /// specification defect.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_lowercase().as_str() {
            "char" => Self::Char,
            "boolean" => Self::Boolean,
            "data" => Self::Data,
            "float" => Self::Float,
            "qty" => Self::Qty,
            "amt" => Self::Amt,
            "price" => Self::Price,
            "priceoffset" => Self::Float,
            "int" => Self::Int,
            "dayofmonth" => Self::DayOfMonth,
            "length" => Self::Int,
            "string" => Self::String,
            "currency" => Self::String,
            "exchange" => Self::String,
            "multiplevaluestring" => Self::MultipleValueString,
            "localmktdate" => Self::LocalMktDate,
            "monthyear" => Self::MonthYear,
            "utcdate" => Self::UtcDate,
            "utctimeonly" => Self::UtcTimeOnly,
            "utctimestamp" => Self::UtcTimestamp,
            _ => return None,
        })
    }

    /// Returns the type name as spelled in the emitted declarations.
    #[must_use]
    pub const fn codec_name(&self) -> &'static str {
        match self {
            Self::Char => "Char",
            Self::Boolean => "Boolean",
            Self::Data => "Data",
            Self::Float => "Float",
            Self::Qty => "Qty",
            Self::Amt => "Amt",
            Self::Price => "Price",
            Self::Int => "Int",
            Self::DayOfMonth => "DayOfMonth",
            Self::String => "String",
            Self::MultipleValueString => "MultipleValueString",
            Self::LocalMktDate => "LocalMktDate",
            Self::MonthYear => "MonthYear",
            Self::UtcDate => "UTCDate",
            Self::UtcTimeOnly => "UTCTimeOnly",
            Self::UtcTimestamp => "UTCTimestamp",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.codec_name())
    }
}

/// The (number, name, type) identity of a FIX field.
///
/// Identity is the `(number, name)` pair: two tags are equal iff both match,
/// and the type is an attribute rather than part of the identity. Ordering is
/// by tag number; the name participates only to order distinct tags that
/// happen to share a number, which keeps sorted emission deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Field tag number.
    pub number: u32,
    /// Field name.
    pub name: String,
    /// Normalized field data type.
    pub field_type: FieldType,
}

impl Tag {
    /// Creates a new tag.
    ///
    /// # Arguments
    /// * `number` - The field tag number
    /// * `name` - The field name
    /// * `field_type` - The normalized field data type
    #[must_use]
    pub fn new(number: u32, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            number,
            name: name.into(),
            field_type,
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.name == other.name
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
        self.name.hash(state);
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number
            .cmp(&other.number)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Field-name-to-tag lookup table.
///
/// Built once per run from the `<fields>` dictionary and read-only afterwards.
/// Field names are assumed unique in well-formed input; a duplicate definition
/// overwrites the earlier one and logs a warning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldTable {
    by_name: HashMap<String, Tag>,
}

impl FieldTable {
    /// Creates an empty field table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tag keyed by its field name. Last write wins.
    pub fn insert(&mut self, tag: Tag) {
        let number = tag.number;
        if let Some(prev) = self.by_name.insert(tag.name.clone(), tag) {
            warn!(
                "duplicate field definition for {}: tag {} replaces tag {}",
                prev.name, number, prev.number
            );
        }
    }

    /// Looks up a tag by field name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.by_name.get(name)
    }

    /// Returns the number of field definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if the table holds no field definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// A field or repeating-group reference within a header or message layout.
///
/// Groups carry their own ordered member list, which may itself contain
/// groups to unbounded depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldRef {
    /// Reference to a plain field.
    Field {
        /// The referenced tag.
        tag: Tag,
        /// Whether absence of the field on the wire is an error.
        required: bool,
    },
    /// Reference to a repeating group, led by its counter field.
    Group {
        /// The group's counter tag.
        tag: Tag,
        /// Whether the group itself is required.
        required: bool,
        /// Ordered members of one group entry.
        members: Vec<FieldRef>,
    },
}

impl FieldRef {
    /// Returns the referenced tag (the counter tag for groups).
    #[must_use]
    pub fn tag(&self) -> &Tag {
        match self {
            Self::Field { tag, .. } | Self::Group { tag, .. } => tag,
        }
    }

    /// Returns the required/optional flag.
    #[must_use]
    pub fn required(&self) -> bool {
        match self {
            Self::Field { required, .. } | Self::Group { required, .. } => *required,
        }
    }
}

/// Definition of a FIX message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDef {
    /// Message name.
    pub name: String,
    /// Wire message-type code (tag 35 value).
    pub msg_type: String,
    /// Ordered top-level members.
    pub members: Vec<FieldRef>,
}

/// Complete parsed FIX specification document.
///
/// Source of truth for one run; read-only once built. The major and minor
/// version numbers are used only to name the output artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecDocument {
    /// Major protocol version.
    pub major: String,
    /// Minor protocol version.
    pub minor: String,
    /// Field dictionary keyed by name.
    pub field_table: FieldTable,
    /// Ordered header members.
    pub header: Vec<FieldRef>,
    /// Messages in document order.
    pub messages: Vec<MessageDef>,
}

impl SpecDocument {
    /// Returns the version string used to name output artifacts.
    #[must_use]
    pub fn fix_version(&self) -> String {
        format!("FIX.{}.{}", self.major, self.minor)
    }
}
