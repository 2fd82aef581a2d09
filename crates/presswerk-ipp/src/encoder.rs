// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stream encoder: serializes a message into the RFC 8010 binary form.
//
// The encoder streams the message in small pieces; it never buffers the
// whole wire image.  Short writes are absorbed by `write_all`.  An encode
// error is fatal to the call; bytes already written are the caller's to
// discard.

use std::io::Write;

use tracing::trace;

use crate::attr::{Attribute, Attributes};
use crate::error::{IppError, Result};
use crate::message::Message;
use crate::tag::Tag;
use crate::value::{Value, ValueType};

pub(crate) struct Encoder<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> Encoder<'a, W> {
    pub(crate) fn new(out: &'a mut W) -> Encoder<'a, W> {
        Encoder { out }
    }

    /// Wire layout:
    ///
    /// ```text
    /// 2 bytes:  version
    /// 2 bytes:  code (operation or status)
    /// 4 bytes:  request id
    /// variable: groups, each a delimiter tag followed by attributes
    /// 1 byte:   end-of-attributes-tag
    /// ```
    pub(crate) fn encode(&mut self, msg: &Message) -> Result<()> {
        trace!(
            version = %msg.version,
            code = msg.code.0,
            request_id = msg.request_id,
            groups = msg.groups.len(),
            "encoding message"
        );

        self.put_u16(msg.version.as_u16())?;
        self.put_u16(msg.code.0)?;
        self.put_u32(msg.request_id)?;

        for group in msg.groups.iter() {
            self.put_u8(group.tag.code() as u8)?;
            for attr in group.attrs.iter() {
                if attr.name.is_empty() {
                    return Err(IppError::UnnamedAttribute);
                }
                self.put_attribute(attr)?;
            }
        }

        self.put_u8(Tag::END.code() as u8)
    }

    /// One attribute record per value:
    ///
    /// ```text
    /// 1 byte:   tag
    /// 2 bytes:  name length, then the name
    /// 2 bytes:  value length, then the value
    /// ```
    ///
    /// The first record carries the attribute name; every additional
    /// value is emitted as a nameless continuation record.
    fn put_attribute(&mut self, attr: &Attribute) -> Result<()> {
        if attr.values.is_empty() {
            return Err(IppError::EmptyAttribute(attr.name.clone()));
        }

        let mut name: &str = &attr.name;
        for (tag, value) in attr.values.iter() {
            self.put_wire_tag(*tag)?;
            self.put_name(name)?;
            self.put_value(*tag, value)?;
            name = "";
        }

        Ok(())
    }

    /// The one-byte wire tag.  Tags beyond the octet space are escaped
    /// through the 0x7f extension envelope; `put_value` then prefixes the
    /// real 32-bit tag to the payload.
    fn put_wire_tag(&mut self, tag: Tag) -> Result<()> {
        let code = tag.code();
        if !(0..=0x7fff_ffff).contains(&code) {
            return Err(IppError::ExtensionOutOfRange);
        }

        if code > 0xff {
            self.put_u8(Tag::EXTENSION.code() as u8)
        } else {
            self.put_u8(code as u8)
        }
    }

    fn put_name(&mut self, name: &str) -> Result<()> {
        if name.len() > usize::from(u16::MAX) {
            return Err(IppError::FieldTooLong("attribute name"));
        }

        self.put_u16(name.len() as u16)?;
        self.put_raw(name.as_bytes())
    }

    fn put_value(&mut self, tag: Tag, value: &Value) -> Result<()> {
        let required = tag.value_type();
        let data = match required {
            ValueType::Invalid => return Err(IppError::UnexpectedTag(tag)),
            // Out-of-band tags carry no payload; the supplied value is
            // overridden.
            ValueType::Void => Vec::new(),
            _ => {
                if required != value.value_type() {
                    return Err(IppError::TagTypeMismatch {
                        tag,
                        required,
                        present: value.value_type(),
                    });
                }
                value.encode()?
            }
        };

        if tag.code() > 0xff {
            // Extension envelope: the real tag rides in the first four
            // value bytes.
            if data.len() + 4 > usize::from(u16::MAX) {
                return Err(IppError::FieldTooLong("attribute value"));
            }
            self.put_u16((data.len() + 4) as u16)?;
            self.put_u32(tag.code() as u32)?;
            self.put_raw(&data)?;
        } else {
            if data.len() > usize::from(u16::MAX) {
                return Err(IppError::FieldTooLong("attribute value"));
            }
            self.put_u16(data.len() as u16)?;
            self.put_raw(&data)?;
        }

        if required == ValueType::Collection {
            if let Value::Collection(members) = value {
                self.put_collection(members)?;
            }
        }

        Ok(())
    }

    /// The collection body follows the (empty-valued) beginCollection
    /// attribute: for each member, a nameless memberAttrName record whose
    /// value is the member's name, then the member's values as nameless
    /// records.  A nameless endCollection record closes the body.
    fn put_collection(&mut self, members: &Attributes) -> Result<()> {
        for member in members.iter() {
            if member.name.is_empty() {
                return Err(IppError::UnnamedCollectionMember);
            }

            self.put_attribute(&Attribute::new(
                "",
                Tag::MEMBER_NAME,
                Value::String(member.name.clone()),
            ))?;
            self.put_attribute(&Attribute {
                name: String::new(),
                values: member.values.clone(),
            })?;
        }

        self.put_attribute(&Attribute::new("", Tag::END_COLLECTION, Value::Void))
    }

    fn put_u8(&mut self, v: u8) -> Result<()> {
        self.put_raw(&[v])
    }

    fn put_u16(&mut self, v: u16) -> Result<()> {
        self.put_raw(&v.to_be_bytes())
    }

    fn put_u32(&mut self, v: u32) -> Result<()> {
        self.put_raw(&v.to_be_bytes())
    }

    fn put_raw(&mut self, data: &[u8]) -> Result<()> {
        self.out.write_all(data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Message, Version};
    use crate::op::Op;
    use crate::value::{Range, TextWithLang};

    fn empty_request() -> Message {
        Message::new_request(Version::V1_1, Op::PRINT_JOB, 1)
    }

    fn request_with(attr: Attribute) -> Message {
        let mut msg = empty_request();
        let mut group = crate::group::Group::new(Tag::OPERATION_GROUP);
        group.add(attr);
        msg.groups.add(group);
        msg
    }

    #[test]
    fn continuation_values_are_nameless() {
        let mut attr = Attribute::new(
            "notify-lease-duration-supported",
            Tag::INTEGER,
            Value::Integer(1),
        );
        attr.add_value(Tag::RANGE, Value::Range(Range { lower: 0x10, upper: 0x20 }));

        let wire = request_with(attr).encode_bytes().expect("encode");

        let mut expected: Vec<u8> = vec![
            0x01, 0x01, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01, // header
            0x01, // operation group
            0x21, 0x00, 0x1f, // integer, name length 31
        ];
        expected.extend_from_slice(b"notify-lease-duration-supported");
        expected.extend_from_slice(&[0x00, 0x04, 0x00, 0x00, 0x00, 0x01]);
        expected.extend_from_slice(&[
            0x33, 0x00, 0x00, // rangeOfInteger, no name
            0x00, 0x08, // value length 8
            0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x20,
        ]);
        expected.push(0x03);

        assert_eq!(wire, expected);

        let decoded = Message::decode_bytes(&wire).expect("decode");
        let values = &decoded.groups[0].attrs[0].values;
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].0, Tag::INTEGER);
        assert_eq!(values[1].0, Tag::RANGE);
    }

    #[test]
    fn attribute_without_values_is_rejected() {
        let attr = Attribute {
            name: "copies".into(),
            values: crate::value::Values::new(),
        };
        let err = request_with(attr).encode_bytes().expect_err("must fail");
        assert!(matches!(err, IppError::EmptyAttribute(ref name) if name == "copies"));
    }

    #[test]
    fn top_level_attribute_needs_a_name() {
        let attr = Attribute::new("", Tag::KEYWORD, Value::String("draft".into()));
        let err = request_with(attr).encode_bytes().expect_err("must fail");
        assert!(matches!(err, IppError::UnnamedAttribute));
    }

    #[test]
    fn overlong_name_is_rejected() {
        let attr = Attribute::new(
            "x".repeat(0x1_0000),
            Tag::KEYWORD,
            Value::String("draft".into()),
        );
        let err = request_with(attr).encode_bytes().expect_err("must fail");
        assert_eq!(err.to_string(), "attribute name exceeds 65535 bytes");
    }

    #[test]
    fn overlong_value_is_rejected() {
        let attr = Attribute::new(
            "job-data",
            Tag::OCTET_STRING,
            Value::Binary(vec![0; 0x1_0000]),
        );
        let err = request_with(attr).encode_bytes().expect_err("must fail");
        assert_eq!(err.to_string(), "attribute value exceeds 65535 bytes");
    }

    #[test]
    fn tag_and_value_type_must_agree() {
        let attr = Attribute::new("copies", Tag::INTEGER, Value::String("three".into()));
        let err = request_with(attr).encode_bytes().expect_err("must fail");
        assert_eq!(
            err.to_string(),
            "tag integer: Integer value required, String present"
        );
    }

    #[test]
    fn delimiter_tags_cannot_carry_values() {
        let attr = Attribute::new("bad", Tag::END, Value::Void);
        let err = request_with(attr).encode_bytes().expect_err("must fail");
        assert!(matches!(err, IppError::UnexpectedTag(Tag::END)));
    }

    #[test]
    fn out_of_band_tags_override_the_value() {
        let attr = Attribute::new("job-hold", Tag::NO_VALUE, Value::Integer(5));
        let wire = request_with(attr).encode_bytes().expect("encode");

        let decoded = Message::decode_bytes(&wire).expect("decode");
        assert_eq!(decoded.groups[0].attrs[0].values[0].1, Value::Void);
    }

    #[test]
    fn collection_members_need_names() {
        let mut members = Attributes::new();
        members.add(Attribute::new("", Tag::INTEGER, Value::Integer(1)));
        let attr = Attribute::new("media-col", Tag::BEGIN_COLLECTION, Value::Collection(members));
        let err = request_with(attr).encode_bytes().expect_err("must fail");
        assert!(matches!(err, IppError::UnnamedCollectionMember));
    }

    #[test]
    fn extension_tags_use_the_envelope() {
        let attr = Attribute::new(
            "vendor-blob",
            Tag::new(0x4000_0002),
            Value::Binary(vec![0xde, 0xad]),
        );
        let wire = request_with(attr).encode_bytes().expect("encode");

        let mut expected: Vec<u8> = vec![
            0x01, 0x01, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01, // header
            0x01, // operation group
            0x7f, 0x00, 0x0b, // extension tag, name length 11
        ];
        expected.extend_from_slice(b"vendor-blob");
        expected.extend_from_slice(&[0x00, 0x06]); // 4 tag bytes + 2 payload bytes
        expected.extend_from_slice(&[0x40, 0x00, 0x00, 0x02, 0xde, 0xad]);
        expected.push(0x03);

        assert_eq!(wire, expected);
    }

    #[test]
    fn text_with_lang_encodes_both_lengths() {
        let attr = Attribute::new(
            "printer-name",
            Tag::NAME_LANG,
            Value::TextWithLang(TextWithLang {
                lang: "de".into(),
                text: "Drucker".into(),
            }),
        );
        let wire = request_with(attr).encode_bytes().expect("encode");
        let decoded = Message::decode_bytes(&wire).expect("decode");
        assert_eq!(decoded.groups[0].attrs[0].values[0].0, Tag::NAME_LANG);
    }
}
