// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// IPP protocol messages.

use std::fmt;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Result;
use crate::group::Groups;
use crate::op::Op;
use crate::status::Status;

/// A protocol version: major and minor parts packed into one 16-bit word.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Version(u16);

impl Version {
    /// IPP 2.0, a sensible default for new requests.
    pub const DEFAULT: Version = Version(0x0200);

    /// IPP 1.1, still spoken by most printers.
    pub const V1_1: Version = Version(0x0101);

    /// Pack major and minor parts.  The major part occupies the high
    /// byte of the wire word.
    pub fn make(major: u8, minor: u8) -> Version {
        Version((u16::from(major) << 8) | u16::from(minor))
    }

    pub fn major(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn minor(self) -> u8 {
        self.0 as u8
    }

    /// The packed 16-bit wire word.
    pub fn as_u16(self) -> u16 {
        self.0
    }
}

impl From<u16> for Version {
    fn from(word: u16) -> Version {
        Version(word)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}

/// The 16-bit message code: an operation in a request, a status in a
/// response.  The codec itself treats it as opaque.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Code(pub u16);

impl From<Op> for Code {
    fn from(op: Op) -> Code {
        Code(op.0)
    }
}

impl From<Status> for Code {
    fn from(status: Status) -> Code {
        Code(status.0)
    }
}

/// A single IPP message: either a client request or a server response.
///
/// A message owns its groups, which own their attributes, which own their
/// values; collections nest as a tree.  On the wire, groups, attributes
/// and values all appear in insertion order, and decoding reconstructs
/// the same orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub version: Version,
    /// Operation for a request, status for a response.
    pub code: Code,
    /// Set in a request, echoed back in the response.
    pub request_id: u32,
    pub groups: Groups,
}

impl Message {
    /// A new request message.
    ///
    /// Use [`Version::DEFAULT`] unless the peer requires otherwise.
    pub fn new_request(version: Version, op: Op, request_id: u32) -> Message {
        Message {
            version,
            code: Code::from(op),
            request_id,
            groups: Groups::new(),
        }
    }

    /// A new response message.  The request id should echo the request.
    pub fn new_response(version: Version, status: Status, request_id: u32) -> Message {
        Message {
            version,
            code: Code::from(status),
            request_id,
            groups: Groups::new(),
        }
    }

    /// Return the message to its zero state.
    pub fn reset(&mut self) {
        *self = Message::default();
    }

    /// Logical equality: the same header, with groups compared by the
    /// reordering rules of [`Groups::similar`].  Strict equality is the
    /// derived `==`, which compares everything in order.
    pub fn similar(&self, other: &Message) -> bool {
        self.version == other.version
            && self.code == other.code
            && self.request_id == other.request_id
            && self.groups.similar(&other.groups)
    }

    /// Serialize to a byte sink.
    pub fn encode<W: Write>(&self, out: &mut W) -> Result<()> {
        Encoder::new(out).encode(self)
    }

    /// Serialize to an owned buffer.
    pub fn encode_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.encode(&mut buf)?;
        Ok(buf)
    }

    /// Deserialize from a byte source.
    pub fn decode<R: Read>(input: &mut R) -> Result<Message> {
        Decoder::new(input).decode()
    }

    /// Deserialize from a byte slice.
    pub fn decode_bytes(mut data: &[u8]) -> Result<Message> {
        Message::decode(&mut data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::{Attribute, Attributes};
    use crate::group::Group;
    use crate::tag::Tag;
    use crate::value::Value;

    #[test]
    fn version_packs_major_into_the_high_byte() {
        let v = Version::make(2, 1);
        assert_eq!(v.as_u16(), 0x0201);
        assert_eq!(v.major(), 2);
        assert_eq!(v.minor(), 1);
        assert_eq!(v.to_string(), "2.1");
        assert_eq!(Version::DEFAULT, Version::make(2, 0));
    }

    fn print_job_request() -> Message {
        let mut msg = Message::new_request(Version::V1_1, Op::PRINT_JOB, 1);
        let mut op = Group::new(Tag::OPERATION_GROUP);
        op.add(Attribute::new(
            "attributes-charset",
            Tag::CHARSET,
            Value::String("utf-8".into()),
        ));
        op.add(Attribute::new(
            "attributes-natural-language",
            Tag::LANGUAGE,
            Value::String("en".into()),
        ));
        op.add(Attribute::new(
            "printer-uri",
            Tag::URI,
            Value::String("ipp://localhost/printers/foo".into()),
        ));
        msg.groups.add(op);
        msg
    }

    #[test]
    fn minimal_request_wire_layout() {
        let mut expected: Vec<u8> = vec![
            0x01, 0x01, // version 1.1
            0x00, 0x02, // Print-Job
            0x00, 0x00, 0x00, 0x01, // request id
            0x01, // operation group
        ];
        expected.extend_from_slice(&[0x47, 0x00, 0x12]);
        expected.extend_from_slice(b"attributes-charset");
        expected.extend_from_slice(&[0x00, 0x05]);
        expected.extend_from_slice(b"utf-8");
        expected.extend_from_slice(&[0x48, 0x00, 0x1b]);
        expected.extend_from_slice(b"attributes-natural-language");
        expected.extend_from_slice(&[0x00, 0x02]);
        expected.extend_from_slice(b"en");
        expected.extend_from_slice(&[0x45, 0x00, 0x0b]);
        expected.extend_from_slice(b"printer-uri");
        expected.extend_from_slice(&[0x00, 0x1c]);
        expected.extend_from_slice(b"ipp://localhost/printers/foo");
        expected.push(0x03);

        let wire = print_job_request().encode_bytes().expect("encode");
        assert_eq!(wire, expected);

        let decoded = Message::decode_bytes(&wire).expect("decode");
        assert_eq!(decoded, print_job_request());
    }

    #[test]
    fn round_trip_preserves_structure() {
        let mut msg = print_job_request();

        let mut job = Group::new(Tag::JOB_GROUP);
        let mut copies = Attribute::new("copies", Tag::INTEGER, Value::Integer(3));
        copies.add_value(Tag::INTEGER, Value::Integer(4));
        job.add(copies);
        job.add(Attribute::new(
            "job-hold",
            Tag::NO_VALUE,
            Value::Void,
        ));
        msg.groups.add(job);

        let wire = msg.encode_bytes().expect("encode");
        let decoded = Message::decode_bytes(&wire).expect("decode");
        assert_eq!(decoded, msg);
        assert!(decoded.similar(&msg));
    }

    #[test]
    fn nested_collection_round_trip() {
        let mut size = Attributes::new();
        size.add(Attribute::new(
            "x-dimension",
            Tag::INTEGER,
            Value::Integer(21590),
        ));
        size.add(Attribute::new(
            "y-dimension",
            Tag::INTEGER,
            Value::Integer(27940),
        ));

        let mut media_col = Attributes::new();
        media_col.add(Attribute::new(
            "media-size",
            Tag::BEGIN_COLLECTION,
            Value::Collection(size),
        ));

        let mut msg = Message::new_request(Version::V1_1, Op::PRINT_JOB, 7);
        let mut job = Group::new(Tag::JOB_GROUP);
        job.add(Attribute::new(
            "media-col",
            Tag::BEGIN_COLLECTION,
            Value::Collection(media_col),
        ));
        msg.groups.add(job);

        let wire = msg.encode_bytes().expect("encode");
        let decoded = Message::decode_bytes(&wire).expect("decode");
        assert_eq!(decoded, msg);

        // The tags survive exactly.
        let attr = &decoded.groups[0].attrs[0];
        assert_eq!(attr.name, "media-col");
        assert_eq!(attr.values[0].0, Tag::BEGIN_COLLECTION);
        let Value::Collection(outer) = &attr.values[0].1 else {
            panic!("expected a collection value");
        };
        assert_eq!(outer[0].name, "media-size");
        assert_eq!(outer[0].values[0].0, Tag::BEGIN_COLLECTION);
    }

    #[test]
    fn swapping_distinct_groups_breaks_equal_but_not_similar() {
        let mut a = Message::new_request(Version::DEFAULT, Op::GET_JOBS, 2);
        let mut op = Group::new(Tag::OPERATION_GROUP);
        op.add(Attribute::new(
            "attributes-charset",
            Tag::CHARSET,
            Value::String("utf-8".into()),
        ));
        let mut job = Group::new(Tag::JOB_GROUP);
        job.add(Attribute::new("job-id", Tag::INTEGER, Value::Integer(5)));

        a.groups.add(op.clone());
        a.groups.add(job.clone());

        let mut b = Message::new_request(Version::DEFAULT, Op::GET_JOBS, 2);
        b.groups.add(job);
        b.groups.add(op);

        assert_ne!(a, b);
        assert!(a.similar(&b));
        assert!(a.similar(&a.clone()));
    }

    #[test]
    fn header_differences_break_similarity() {
        let a = Message::new_request(Version::DEFAULT, Op::PRINT_JOB, 1);
        let mut b = a.clone();
        b.request_id = 2;
        assert!(!a.similar(&b));
    }

    #[test]
    fn reset_returns_the_zero_message() {
        let mut msg = print_job_request();
        msg.reset();
        assert_eq!(msg, Message::default());
        assert_eq!(msg.version.as_u16(), 0);
        assert!(msg.groups.is_empty());
    }
}
