// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stream decoder: parses the RFC 8010 binary form into a message.
//
// The decoder is a synchronous state machine driven by the calling
// thread.  It tracks the byte offset of the last tag read and stamps it
// onto whatever error surfaces, so inner routines stay composable and the
// rendered error ends with ` at 0x<offset>`.  Any failure is fatal for
// the message; there is no partial-message recovery.

use std::io::Read;

use tracing::trace;

use crate::attr::{Attribute, Attributes};
use crate::error::{IppError, Result};
use crate::group::{Group, Groups};
use crate::message::{Code, Message, Version};
use crate::tag::Tag;
use crate::value::{Value, ValueType, Values};

pub(crate) struct Decoder<'a, R: Read> {
    input: &'a mut R,
    /// Bytes consumed so far.
    cnt: u64,
    /// Offset of the last tag byte read.
    tag_off: u64,
}

impl<'a, R: Read> Decoder<'a, R> {
    pub(crate) fn new(input: &'a mut R) -> Decoder<'a, R> {
        Decoder {
            input,
            cnt: 0,
            tag_off: 0,
        }
    }

    pub(crate) fn decode(&mut self) -> Result<Message> {
        self.get_message().map_err(|err| err.at(self.tag_off))
    }

    fn get_message(&mut self) -> Result<Message> {
        let version = Version::from(self.get_u16()?);
        let code = Code(self.get_u16()?);
        let request_id = self.get_u32()?;

        trace!(%version, code = code.0, request_id, "decoding message");

        let mut groups = Groups::new();
        // A nameless record may only continue the attribute that
        // immediately precedes it; any delimiter resets that.
        let mut have_prev = false;

        loop {
            let tag = self.get_tag()?;
            if tag.is_delimiter() {
                have_prev = false;
            }

            if tag == Tag::ZERO {
                return Err(IppError::InvalidTag);
            } else if tag == Tag::END {
                break;
            } else if tag.is_group() {
                groups.add(Group::new(tag));
            } else if tag == Tag::MEMBER_NAME || tag == Tag::END_COLLECTION {
                // Only legal inside a collection body.
                return Err(IppError::UnexpectedTag(tag));
            } else {
                let (name, vtag, value) = self.get_attribute(tag)?;
                let value = if tag == Tag::BEGIN_COLLECTION {
                    Value::Collection(self.get_collection()?)
                } else {
                    value
                };

                if name.is_empty() {
                    let prev = groups
                        .last_mut()
                        .and_then(|g| g.attrs.last_mut())
                        .filter(|_| have_prev);
                    match prev {
                        Some(prev) => prev.add_value(vtag, value),
                        None => return Err(IppError::OrphanValue),
                    }
                } else {
                    match groups.last_mut() {
                        Some(group) => {
                            let mut values = Values::new();
                            values.add(vtag, value);
                            group.add(Attribute { name, values });
                            have_prev = true;
                        }
                        None => return Err(IppError::UngroupedAttribute),
                    }
                }
            }
        }

        Ok(Message {
            version,
            code,
            request_id,
            groups,
        })
    }

    /// The collection body: member names and member values until the
    /// closing endCollection record.
    fn get_collection(&mut self) -> Result<Attributes> {
        let mut members = Attributes::new();
        let mut member: Option<Attribute> = None;

        loop {
            let tag = self.get_tag()?;

            if tag == Tag::END_COLLECTION {
                self.get_attribute(tag)?;
                if let Some(done) = member.take() {
                    if done.values.is_empty() {
                        return Err(IppError::MissingValue(done.name));
                    }
                    members.add(done);
                }
                return Ok(members);
            }

            if tag == Tag::MEMBER_NAME {
                let (_, _, value) = self.get_attribute(tag)?;
                if let Some(done) = member.take() {
                    if done.values.is_empty() {
                        return Err(IppError::MissingValue(done.name));
                    }
                    members.add(done);
                }

                let name = match value {
                    Value::String(name) => name,
                    _ => String::new(),
                };
                if name.is_empty() {
                    return Err(IppError::EmptyMemberName);
                }
                member = Some(Attribute {
                    name,
                    values: Values::new(),
                });
                continue;
            }

            if tag.is_delimiter() {
                return Err(IppError::UnexpectedTag(tag));
            }

            // A member value.  Several values per member are legal, as
            // are nested collections.
            match member.as_mut() {
                None => return Err(IppError::UnexpectedTag(tag)),
                Some(current) => {
                    let (_, vtag, value) = self.get_attribute(tag)?;
                    if tag == Tag::BEGIN_COLLECTION {
                        let nested = self.get_collection()?;
                        current.add_value(vtag, Value::Collection(nested));
                    } else {
                        current.add_value(vtag, value);
                    }
                }
            }
        }
    }

    /// One attribute record: name, then the raw value bytes, decoded per
    /// the tag's type.  An extension (0x7f) record resolves the real tag
    /// from the first four value bytes first.
    ///
    /// A beginCollection record decodes here as an empty `Binary`; the
    /// caller replaces it after parsing the framed collection body.
    fn get_attribute(&mut self, wire_tag: Tag) -> Result<(String, Tag, Value)> {
        let name = self.get_string()?;
        let mut data = self.get_bytes()?;

        let mut tag = wire_tag;
        if wire_tag == Tag::EXTENSION {
            if data.len() < 4 {
                return Err(IppError::ExtensionTruncated);
            }
            let real = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
            if real > 0x7fff_ffff {
                return Err(IppError::ExtensionOutOfRange);
            }
            tag = Tag::new(real as i32);
            data.drain(..4);
        }

        let value = match tag.value_type() {
            ValueType::Collection | ValueType::Invalid => Value::Binary(data),
            kind => Value::decode(kind, &data)?,
        };

        Ok((name, tag, value))
    }

    fn get_tag(&mut self) -> Result<Tag> {
        self.tag_off = self.cnt;
        Ok(Tag::from(self.get_u8()?))
    }

    fn get_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read(&mut buf)?;
        Ok(buf[0])
    }

    fn get_u16(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.read(&mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    fn get_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    /// A 16-bit length prefix followed by that many bytes.  Allocation is
    /// bounded by the prefix width: at most 65535 bytes.
    fn get_bytes(&mut self) -> Result<Vec<u8>> {
        let len = usize::from(self.get_u16()?);
        let mut data = vec![0u8; len];
        self.read(&mut data)?;
        Ok(data)
    }

    fn get_string(&mut self) -> Result<String> {
        let data = self.get_bytes()?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }

    /// Fill `buf` completely.  `read_exact` retries short reads and turns
    /// a premature end of input into an error.
    fn read(&mut self, buf: &mut [u8]) -> Result<()> {
        self.input.read_exact(buf)?;
        self.cnt += buf.len() as u64;
        Ok(())
    }
}
