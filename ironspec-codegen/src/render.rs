/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 7/2/26
******************************************************************************/

//! Declaration rendering.
//!
//! Renders the parsed specification into the declaration grammar the
//! downstream codec consumes:
//! - field references: `Tag::Name`, or `Required<Tag::Name>` when required
//! - repeating groups: `RepeatingGroup<Tag::Counter, members...>`, wrapped
//!   in `Required<...>` when the group itself is required
//! - header: `using Header = MessageBase<Field, members...>;`
//! - messages: `using Name = MessageV<Chars<'X'>, members...>;`
//! - tags: `using Name = TagT<number, Type::FieldType>;`
//!
//! Sibling entries are always joined over the list of rendered entries, so
//! members skipped from the header can never leave a dangling separator.

use crate::tagset::TagSet;
use ironspec_dictionary::{FieldRef, MessageDef, SpecDocument, Tag};

/// Protocol-framing fields handled by the codec itself. They are skipped
/// when rendering the header and never enter the used-tag set.
const FRAMING_FIELDS: [&str; 3] = ["BeginString", "BodyLength", "MsgType"];

/// Renders a field reference as `Tag::Name` or `Required<Tag::Name>`.
fn tag_ref(name: &str, required: bool) -> String {
    if required {
        format!("Required<Tag::{}>", name)
    } else {
        format!("Tag::{}", name)
    }
}

/// Renders one header or message member, recording every referenced tag.
///
/// Group members recurse to unbounded depth. The group's counter tag is
/// rendered bare inside the group construct; the required flag wraps the
/// whole construct instead.
pub fn render_member(member: &FieldRef, used: &mut TagSet) -> String {
    match member {
        FieldRef::Field { tag, required } => {
            used.insert(tag);
            tag_ref(&tag.name, *required)
        }
        FieldRef::Group {
            tag,
            required,
            members,
        } => {
            used.insert(tag);
            let mut entries = vec![tag_ref(&tag.name, false)];
            entries.extend(members.iter().map(|m| render_member(m, used)));
            let group = format!("RepeatingGroup<{}>", entries.join(", "));
            if *required {
                format!("Required<{}>", group)
            } else {
                group
            }
        }
    }
}

/// Renders the header declaration, skipping the protocol-framing fields.
pub fn render_header(doc: &SpecDocument, used: &mut TagSet) -> String {
    let mut entries = vec!["Field".to_string()];
    for member in &doc.header {
        if FRAMING_FIELDS.contains(&member.tag().name.as_str()) {
            continue;
        }
        entries.push(render_member(member, used));
    }
    format!("using Header = MessageBase<{}>;", entries.join(", "))
}

/// Renders one message declaration.
pub fn render_message(msg: &MessageDef, used: &mut TagSet) -> String {
    let mut entries = vec![chars_literal(&msg.msg_type)];
    entries.extend(msg.members.iter().map(|m| render_member(m, used)));
    format!("using {} = MessageV<{}>;", msg.name, entries.join(", "))
}

/// Renders a wire-type code as a `Chars<...>` literal, one quoted
/// character per code character.
fn chars_literal(msg_type: &str) -> String {
    let quoted: Vec<String> = msg_type.chars().map(|c| format!("'{}'", c)).collect();
    format!("Chars<{}>", quoted.join(", "))
}

/// Renders one tag declaration.
pub fn render_tag(tag: &Tag) -> String {
    format!(
        "using {} = TagT<{}, Type::{}>;",
        tag.name, tag.number, tag.field_type
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironspec_dictionary::{FieldTable, FieldType};

    fn tag(number: u32, name: &str, field_type: FieldType) -> Tag {
        Tag::new(number, name, field_type)
    }

    fn field(number: u32, name: &str, required: bool) -> FieldRef {
        FieldRef::Field {
            tag: tag(number, name, FieldType::String),
            required,
        }
    }

    fn doc_with_header(header: Vec<FieldRef>) -> SpecDocument {
        SpecDocument {
            major: "4".to_string(),
            minor: "2".to_string(),
            field_table: FieldTable::new(),
            header,
            messages: Vec::new(),
        }
    }

    #[test]
    fn test_tag_ref_required_wrapping() {
        let mut used = TagSet::new();
        assert_eq!(
            render_member(&field(11, "ClOrdID", true), &mut used),
            "Required<Tag::ClOrdID>"
        );
        assert_eq!(
            render_member(&field(58, "Text", false), &mut used),
            "Tag::Text"
        );
        assert_eq!(used.len(), 2);
    }

    #[test]
    fn test_render_header_skips_framing_fields() {
        let mut used = TagSet::new();
        let doc = doc_with_header(vec![
            field(8, "BeginString", true),
            field(9, "BodyLength", true),
            field(35, "MsgType", true),
            field(49, "SenderCompID", true),
            field(50, "SenderSubID", false),
        ]);
        let header = render_header(&doc, &mut used);
        assert_eq!(
            header,
            "using Header = MessageBase<Field, Required<Tag::SenderCompID>, Tag::SenderSubID>;"
        );
        assert_eq!(used.len(), 2);
    }

    #[test]
    fn test_render_header_trailing_skipped_fields_leave_no_separator() {
        let mut used = TagSet::new();
        let doc = doc_with_header(vec![
            field(49, "SenderCompID", true),
            field(35, "MsgType", true),
        ]);
        let header = render_header(&doc, &mut used);
        assert_eq!(
            header,
            "using Header = MessageBase<Field, Required<Tag::SenderCompID>>;"
        );
    }

    #[test]
    fn test_render_header_all_fields_skipped() {
        let mut used = TagSet::new();
        let doc = doc_with_header(vec![field(8, "BeginString", true), field(35, "MsgType", true)]);
        let header = render_header(&doc, &mut used);
        assert_eq!(header, "using Header = MessageBase<Field>;");
        assert!(used.is_empty());
    }

    #[test]
    fn test_render_message_plain_fields() {
        let mut used = TagSet::new();
        let msg = MessageDef {
            name: "Heartbeat".to_string(),
            msg_type: "0".to_string(),
            members: vec![field(112, "TestReqID", false)],
        };
        assert_eq!(
            render_message(&msg, &mut used),
            "using Heartbeat = MessageV<Chars<'0'>, Tag::TestReqID>;"
        );
    }

    #[test]
    fn test_render_message_multichar_msgtype() {
        let mut used = TagSet::new();
        let msg = MessageDef {
            name: "UserRequest".to_string(),
            msg_type: "BE".to_string(),
            members: vec![field(923, "UserRequestID", true)],
        };
        assert_eq!(
            render_message(&msg, &mut used),
            "using UserRequest = MessageV<Chars<'B', 'E'>, Required<Tag::UserRequestID>>;"
        );
    }

    #[test]
    fn test_render_required_group_with_bare_counter() {
        let mut used = TagSet::new();
        let group = FieldRef::Group {
            tag: tag(78, "NoAllocs", FieldType::Int),
            required: true,
            members: vec![field(79, "AllocAccount", false)],
        };
        assert_eq!(
            render_member(&group, &mut used),
            "Required<RepeatingGroup<Tag::NoAllocs, Tag::AllocAccount>>"
        );
        assert_eq!(used.len(), 2);
    }

    #[test]
    fn test_render_nested_groups() {
        let mut used = TagSet::new();
        let inner = FieldRef::Group {
            tag: tag(136, "NoMiscFees", FieldType::Int),
            required: false,
            members: vec![field(137, "MiscFeeAmt", false)],
        };
        let outer = FieldRef::Group {
            tag: tag(78, "NoAllocs", FieldType::Int),
            required: false,
            members: vec![field(79, "AllocAccount", true), inner],
        };
        assert_eq!(
            render_member(&outer, &mut used),
            "RepeatingGroup<Tag::NoAllocs, Required<Tag::AllocAccount>, \
             RepeatingGroup<Tag::NoMiscFees, Tag::MiscFeeAmt>>"
        );
        assert_eq!(used.len(), 4);
    }

    #[test]
    fn test_render_tag_declaration() {
        assert_eq!(
            render_tag(&tag(52, "SendingTime", FieldType::UtcTimestamp)),
            "using SendingTime = TagT<52, Type::UTCTimestamp>;"
        );
    }
}
