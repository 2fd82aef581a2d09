// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// IPP tags (RFC 8010 SS3.5).
//
// A tag is the one-byte token that structures the binary message: delimiter
// tags open attribute groups, value tags prefix attribute values.  The tag
// space is open-ended -- the 0x7f extension envelope escapes into 32-bit
// tags -- so `Tag` wraps a signed integer rather than enumerating a closed
// set.  `Tag::ZERO` doubles as the reserved 0x00 wire byte and the "no tag"
// sentinel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::ValueType;

/// A delimiter or value tag from the binary encoding of an IPP message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Tag(i32);

impl Tag {
    // -- Delimiter tags (0x00..=0x0f) --
    pub const ZERO: Tag = Tag(0x00);
    pub const OPERATION_GROUP: Tag = Tag(0x01);
    pub const JOB_GROUP: Tag = Tag(0x02);
    pub const END: Tag = Tag(0x03);
    pub const PRINTER_GROUP: Tag = Tag(0x04);
    pub const UNSUPPORTED_GROUP: Tag = Tag(0x05);
    pub const SUBSCRIPTION_GROUP: Tag = Tag(0x06);
    pub const EVENT_NOTIFICATION_GROUP: Tag = Tag(0x07);
    pub const RESOURCE_GROUP: Tag = Tag(0x08);
    pub const DOCUMENT_GROUP: Tag = Tag(0x09);
    pub const SYSTEM_GROUP: Tag = Tag(0x0a);
    pub const FUTURE11_GROUP: Tag = Tag(0x0b);
    pub const FUTURE12_GROUP: Tag = Tag(0x0c);
    pub const FUTURE13_GROUP: Tag = Tag(0x0d);
    pub const FUTURE14_GROUP: Tag = Tag(0x0e);
    pub const FUTURE15_GROUP: Tag = Tag(0x0f);

    // -- Out-of-band value tags (0x10..=0x1f) --
    pub const UNSUPPORTED_VALUE: Tag = Tag(0x10);
    pub const DEFAULT: Tag = Tag(0x11);
    pub const UNKNOWN: Tag = Tag(0x12);
    pub const NO_VALUE: Tag = Tag(0x13);
    pub const NOT_SETTABLE: Tag = Tag(0x15);
    pub const DELETE_ATTR: Tag = Tag(0x16);
    pub const ADMIN_DEFINE: Tag = Tag(0x17);

    // -- Typed value tags (0x21..=0x4a) --
    pub const INTEGER: Tag = Tag(0x21);
    pub const BOOLEAN: Tag = Tag(0x22);
    pub const ENUM: Tag = Tag(0x23);
    pub const OCTET_STRING: Tag = Tag(0x30);
    pub const DATE_TIME: Tag = Tag(0x31);
    pub const RESOLUTION: Tag = Tag(0x32);
    pub const RANGE: Tag = Tag(0x33);
    pub const BEGIN_COLLECTION: Tag = Tag(0x34);
    pub const TEXT_LANG: Tag = Tag(0x35);
    pub const NAME_LANG: Tag = Tag(0x36);
    pub const END_COLLECTION: Tag = Tag(0x37);
    pub const TEXT: Tag = Tag(0x41);
    pub const NAME: Tag = Tag(0x42);
    pub const RESERVED_STRING: Tag = Tag(0x43);
    pub const KEYWORD: Tag = Tag(0x44);
    pub const URI: Tag = Tag(0x45);
    pub const URI_SCHEME: Tag = Tag(0x46);
    pub const CHARSET: Tag = Tag(0x47);
    pub const LANGUAGE: Tag = Tag(0x48);
    pub const MIME_TYPE: Tag = Tag(0x49);
    pub const MEMBER_NAME: Tag = Tag(0x4a);

    /// Extension point: the value carries the real 32-bit tag in its
    /// first four bytes.
    pub const EXTENSION: Tag = Tag(0x7f);

    /// A tag with an arbitrary code, including codes beyond the one-byte
    /// wire space (encoded through the extension envelope).
    pub fn new(code: i32) -> Tag {
        Tag(code)
    }

    /// The numeric tag code.
    pub fn code(self) -> i32 {
        self.0
    }

    /// True for delimiter tags, which structure the stream rather than
    /// carrying a payload.
    pub fn is_delimiter(self) -> bool {
        self.0 < 0x10
    }

    /// True for begin-of-group delimiter tags.  `ZERO` and `END` are
    /// delimiters but do not open a group.
    pub fn is_group(self) -> bool {
        self.is_delimiter() && self != Tag::ZERO && self != Tag::END
    }

    /// The semantic type of values carried under this tag.
    ///
    /// Total over all tags: delimiters map to `Invalid`, the out-of-band
    /// range maps to `Void`, and tags with no registered type map to
    /// `Binary` so their payload survives a decode/encode round trip.
    pub fn value_type(self) -> ValueType {
        if self.is_delimiter() {
            return ValueType::Invalid;
        }

        match self {
            Tag::INTEGER | Tag::ENUM => ValueType::Integer,

            Tag::BOOLEAN => ValueType::Boolean,

            // The whole out-of-band range carries no payload.
            Tag(0x10..=0x1f) => ValueType::Void,

            Tag::TEXT
            | Tag::NAME
            | Tag::RESERVED_STRING
            | Tag::KEYWORD
            | Tag::URI
            | Tag::URI_SCHEME
            | Tag::CHARSET
            | Tag::LANGUAGE
            | Tag::MIME_TYPE
            | Tag::MEMBER_NAME => ValueType::String,

            Tag::DATE_TIME => ValueType::DateTime,

            Tag::RESOLUTION => ValueType::Resolution,

            Tag::RANGE => ValueType::Range,

            Tag::TEXT_LANG | Tag::NAME_LANG => ValueType::TextWithLang,

            Tag::BEGIN_COLLECTION => ValueType::Collection,

            Tag::END_COLLECTION => ValueType::Void,

            _ => ValueType::Binary,
        }
    }
}

impl From<u8> for Tag {
    fn from(octet: u8) -> Tag {
        Tag(i32::from(octet))
    }
}

impl fmt::Display for Tag {
    /// The tag name as defined by RFC 8010, or `0x%02x` where no name is
    /// registered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Tag::ZERO => "zero",
            Tag::OPERATION_GROUP => "operation-attributes-tag",
            Tag::JOB_GROUP => "job-attributes-tag",
            Tag::END => "end-of-attributes-tag",
            Tag::PRINTER_GROUP => "printer-attributes-tag",
            Tag::UNSUPPORTED_GROUP => "unsupported-attributes-tag",
            Tag::SUBSCRIPTION_GROUP => "subscription-attributes-tag",
            Tag::EVENT_NOTIFICATION_GROUP => "event-notification-attributes-tag",
            Tag::RESOURCE_GROUP => "resource-attributes-tag",
            Tag::DOCUMENT_GROUP => "document-attributes-tag",
            Tag::SYSTEM_GROUP => "system-attributes-tag",

            Tag::UNSUPPORTED_VALUE => "unsupported",
            Tag::DEFAULT => "default",
            Tag::UNKNOWN => "unknown",
            Tag::NO_VALUE => "no-value",
            Tag::NOT_SETTABLE => "not-settable",
            Tag::DELETE_ATTR => "delete-attribute",
            Tag::ADMIN_DEFINE => "admin-define",
            Tag::INTEGER => "integer",
            Tag::BOOLEAN => "boolean",
            Tag::ENUM => "enum",
            Tag::OCTET_STRING => "octetString",
            Tag::DATE_TIME => "dateTime",
            Tag::RESOLUTION => "resolution",
            Tag::RANGE => "rangeOfInteger",
            Tag::BEGIN_COLLECTION => "collection",
            Tag::TEXT_LANG => "textWithLanguage",
            Tag::NAME_LANG => "nameWithLanguage",
            Tag::END_COLLECTION => "endCollection",
            Tag::TEXT => "textWithoutLanguage",
            Tag::NAME => "nameWithoutLanguage",
            Tag::KEYWORD => "keyword",
            Tag::URI => "uri",
            Tag::URI_SCHEME => "uriScheme",
            Tag::CHARSET => "charset",
            Tag::LANGUAGE => "naturalLanguage",
            Tag::MIME_TYPE => "mimeMediaType",
            Tag::MEMBER_NAME => "memberAttrName",

            _ => return write!(f, "0x{:02x}", self.0),
        };

        f.write_str(name)
    }
}
