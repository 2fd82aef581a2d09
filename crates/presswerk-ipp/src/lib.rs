// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// presswerk-ipp -- IPP (RFC 8010) wire-format codec.

//! Encoding and decoding of Internet Printing Protocol messages, as
//! defined by RFC 8010.
//!
//! The crate is strictly a wire-format codec: it turns a [`Message`] into
//! the exact byte sequence an IPP peer expects, and parses such a byte
//! stream back into an equivalent [`Message`].  It does not speak HTTP
//! and it does not implement operations such as "print a document";
//! transports and operation semantics layer on top.
//!
//! ```
//! use presswerk_ipp::{Attribute, Group, Message, Op, Tag, Value, Version};
//!
//! let mut msg = Message::new_request(Version::V1_1, Op::PRINT_JOB, 1);
//! let mut op = Group::new(Tag::OPERATION_GROUP);
//! op.add(Attribute::new(
//!     "attributes-charset",
//!     Tag::CHARSET,
//!     Value::String("utf-8".into()),
//! ));
//! msg.groups.add(op);
//!
//! let wire = msg.encode_bytes().expect("encode");
//! let back = Message::decode_bytes(&wire).expect("decode");
//! assert_eq!(back, msg);
//! ```

mod decoder;
mod encoder;

pub mod attr;
pub mod error;
pub mod format;
pub mod group;
pub mod message;
pub mod op;
pub mod status;
pub mod tag;
pub mod value;

pub use attr::{Attribute, Attributes};
pub use error::{IppError, Result};
pub use format::{format_request, format_response};
pub use group::{Group, Groups};
pub use message::{Code, Message, Version};
pub use op::Op;
pub use status::Status;
pub use tag::Tag;
pub use value::{DateTime, Range, Resolution, TextWithLang, Units, Value, ValueType, Values};

/// MIME content type of IPP messages carried over HTTP.
pub const CONTENT_TYPE: &str = "application/ipp";
