/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 7/2/26
******************************************************************************/

//! FIX specification XML parser.
//!
//! Reads a QuickFIX-style specification document into a [`SpecDocument`].
//! Parsing runs in two phases: a streaming pass collects the raw `<fields>`,
//! `<header>`, and `<messages>` sections, then a pure build phase constructs
//! the field table and resolves every header/message member against it. The
//! two phases are needed because the specification convention places the
//! `<fields>` dictionary after the messages that reference it.

use crate::error::{DictionaryError, Result};
use crate::schema::{FieldRef, FieldTable, FieldType, MessageDef, SpecDocument, Tag};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::warn;

/// Raw field definition as read from the `<fields>` dictionary.
#[derive(Debug)]
struct RawField {
    number: String,
    name: String,
    type_name: String,
}

/// Raw header/message member before name resolution.
#[derive(Debug)]
enum RawMember {
    Field {
        name: String,
        required: String,
    },
    Group {
        name: String,
        required: String,
        members: Vec<RawMember>,
    },
}

/// Raw message element with its unresolved member tree.
#[derive(Debug)]
struct RawMessage {
    name: String,
    msg_type: String,
    members: Vec<RawMember>,
}

/// Raw specification sections in document order.
#[derive(Debug)]
struct RawSpec {
    major: String,
    minor: String,
    fields: Vec<RawField>,
    header: Vec<RawMember>,
    messages: Vec<RawMessage>,
}

/// Parses a FIX specification document from an XML string.
///
/// # Arguments
/// * `xml` - Specification document content
///
/// # Returns
/// The fully resolved specification document.
///
/// # Errors
/// Returns [`DictionaryError`] if the XML is malformed or the specification
/// violates the input contract (unknown field type, non-numeric tag number,
/// unresolved field reference, required flag outside {Y, N}).
pub fn parse_spec(xml: &str) -> Result<SpecDocument> {
    let raw = read_document(xml)?;
    build_document(raw)
}

/// Streaming pass: collects the raw specification sections.
fn read_document(xml: &str) -> Result<RawSpec> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut raw: Option<RawSpec> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "fix" => {
                        raw = Some(read_root(e)?);
                    }
                    "fields" if raw.is_some() => {
                        read_fields(&mut reader, &mut raw.as_mut().unwrap().fields)?;
                    }
                    "header" if raw.is_some() => {
                        raw.as_mut().unwrap().header =
                            read_members(&mut reader, b"header", "header")?;
                    }
                    "message" if raw.is_some() => {
                        let msg = read_message(&mut reader, e)?;
                        raw.as_mut().unwrap().messages.push(msg);
                    }
                    // <messages> is a bare container; <trailer> and
                    // <components> are outside this tool's output.
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) if e.name().as_ref() == b"message" => {
                if let Some(raw) = raw.as_mut() {
                    raw.messages.push(RawMessage {
                        name: require_attr(e, "message", "name")?,
                        msg_type: require_attr(e, "message", "msgtype")?,
                        members: Vec::new(),
                    });
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(DictionaryError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    raw.ok_or_else(|| DictionaryError::MissingElement {
        name: "fix".to_string(),
    })
}

/// Reads the major/minor attributes off the root element.
fn read_root(e: &BytesStart<'_>) -> Result<RawSpec> {
    Ok(RawSpec {
        major: require_attr(e, "fix", "major")?,
        minor: require_attr(e, "fix", "minor")?,
        fields: Vec::new(),
        header: Vec::new(),
        messages: Vec::new(),
    })
}

/// Reads the `<fields>` dictionary. Enumerated `<value>` children are
/// irrelevant to tag metadata and skipped.
fn read_fields(reader: &mut Reader<&[u8]>, fields: &mut Vec<RawField>) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == b"field" {
                    fields.push(RawField {
                        number: require_attr(e, "field", "number")?,
                        name: require_attr(e, "field", "name")?,
                        type_name: require_attr(e, "field", "type")?,
                    });
                }
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"fields" => break,
            Ok(Event::End(_)) => {}
            Ok(Event::Eof) => {
                return Err(DictionaryError::MissingElement {
                    name: "fields".to_string(),
                });
            }
            Err(e) => return Err(DictionaryError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }
    Ok(())
}

/// Reads a `<message>` element and its member tree.
fn read_message(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<RawMessage> {
    let name = require_attr(e, "message", "name")?;
    let msg_type = require_attr(e, "message", "msgtype")?;
    let members = read_members(reader, b"message", &name)?;
    Ok(RawMessage {
        name,
        msg_type,
        members,
    })
}

/// Reads an ordered member list until the enclosing `end` tag closes.
///
/// Nested `<group>` elements recurse; each recursive call consumes the
/// closing tag of its own group, so sibling iteration stays aligned at
/// every depth.
fn read_members(
    reader: &mut Reader<&[u8]>,
    end: &[u8],
    context: &str,
) -> Result<Vec<RawMember>> {
    let mut members = Vec::new();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"field" => members.push(field_member(e)?),
                b"group" => members.push(RawMember::Group {
                    name: require_attr(e, "group", "name")?,
                    required: require_attr(e, "group", "required")?,
                    members: Vec::new(),
                }),
                other => {
                    warn!(
                        "ignoring unsupported element <{}> in {}",
                        String::from_utf8_lossy(other),
                        context
                    );
                }
            },
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"field" => members.push(field_member(e)?),
                b"group" => {
                    let name = require_attr(e, "group", "name")?;
                    let required = require_attr(e, "group", "required")?;
                    let inner = read_members(reader, b"group", context)?;
                    members.push(RawMember::Group {
                        name,
                        required,
                        members: inner,
                    });
                }
                other => {
                    warn!(
                        "ignoring unsupported element <{}> in {}",
                        String::from_utf8_lossy(other),
                        context
                    );
                    let end_tag = e.to_end().into_owned();
                    let mut skip = Vec::new();
                    reader.read_to_end_into(end_tag.name(), &mut skip)?;
                }
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == end => break,
            Ok(Event::End(_)) => {}
            Ok(Event::Eof) => {
                return Err(DictionaryError::MissingElement {
                    name: String::from_utf8_lossy(end).into_owned(),
                });
            }
            Err(e) => return Err(DictionaryError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }
    Ok(members)
}

/// Reads a member `<field>` reference.
fn field_member(e: &BytesStart<'_>) -> Result<RawMember> {
    Ok(RawMember::Field {
        name: require_attr(e, "field", "name")?,
        required: require_attr(e, "field", "required")?,
    })
}

/// Looks up an attribute by name, decoding it as UTF-8.
fn get_attr(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == name.as_bytes() {
            return Ok(Some(std::str::from_utf8(&attr.value)?.to_string()));
        }
    }
    Ok(None)
}

/// Looks up a mandatory attribute.
fn require_attr(e: &BytesStart<'_>, element: &str, name: &str) -> Result<String> {
    get_attr(e, name)?.ok_or_else(|| DictionaryError::MissingAttribute {
        element: element.to_string(),
        attribute: name.to_string(),
    })
}

/// Build pass: constructs the field table, then resolves every header and
/// message member against it.
fn build_document(raw: RawSpec) -> Result<SpecDocument> {
    let mut field_table = FieldTable::new();
    for field in &raw.fields {
        let number: u32 = field
            .number
            .parse()
            .map_err(|_| DictionaryError::InvalidTagNumber {
                field: field.name.clone(),
                value: field.number.clone(),
            })?;
        let field_type =
            FieldType::parse(&field.type_name).ok_or_else(|| DictionaryError::UnknownFieldType {
                field: field.name.clone(),
                type_name: field.type_name.clone(),
            })?;
        field_table.insert(Tag::new(number, field.name.clone(), field_type));
    }

    let header = resolve_members(&raw.header, &field_table, "header")?;

    let mut messages = Vec::with_capacity(raw.messages.len());
    for msg in raw.messages {
        let members = resolve_members(&msg.members, &field_table, &msg.name)?;
        messages.push(MessageDef {
            name: msg.name,
            msg_type: msg.msg_type,
            members,
        });
    }

    Ok(SpecDocument {
        major: raw.major,
        minor: raw.minor,
        field_table,
        header,
        messages,
    })
}

/// Resolves a raw member list into typed field references.
fn resolve_members(
    raw: &[RawMember],
    table: &FieldTable,
    context: &str,
) -> Result<Vec<FieldRef>> {
    raw.iter()
        .map(|member| resolve_member(member, table, context))
        .collect()
}

fn resolve_member(raw: &RawMember, table: &FieldTable, context: &str) -> Result<FieldRef> {
    match raw {
        RawMember::Field { name, required } => Ok(FieldRef::Field {
            tag: lookup(table, name, context)?,
            required: parse_required(name, required)?,
        }),
        RawMember::Group {
            name,
            required,
            members,
        } => Ok(FieldRef::Group {
            tag: lookup(table, name, context)?,
            required: parse_required(name, required)?,
            members: resolve_members(members, table, context)?,
        }),
    }
}

fn lookup(table: &FieldTable, name: &str, context: &str) -> Result<Tag> {
    table
        .get(name)
        .cloned()
        .ok_or_else(|| DictionaryError::UnresolvedField {
            name: name.to_string(),
            context: context.to_string(),
        })
}

fn parse_required(field: &str, value: &str) -> Result<bool> {
    match value {
        "Y" => Ok(true),
        "N" => Ok(false),
        other => Err(DictionaryError::InvalidRequiredFlag {
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}
