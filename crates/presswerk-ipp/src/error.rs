// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error type for IPP encoding and decoding.

use thiserror::Error;

use crate::tag::Tag;
use crate::value::ValueType;

/// Errors produced while encoding or decoding an IPP message.
///
/// Errors surfaced from a decode call are stamped with the byte offset of
/// the last tag read, so their rendered form ends with ` at 0x<offset>`.
/// No error is recoverable; the message being processed must be discarded.
#[derive(Debug, Error)]
pub enum IppError {
    // -- Decode errors --
    #[error("invalid tag 0")]
    InvalidTag,

    #[error("unexpected tag {0}")]
    UnexpectedTag(Tag),

    #[error("additional value without preceding attribute")]
    OrphanValue,

    #[error("attribute without a group")]
    UngroupedAttribute,

    /// A value payload failed to decode; the reason is per value kind.
    #[error("{0}")]
    BadValue(String),

    #[error("member {0:?} has no values")]
    MissingValue(String),

    #[error("empty member name")]
    EmptyMemberName,

    #[error("extension tag truncated")]
    ExtensionTruncated,

    #[error("extension tag out of range")]
    ExtensionOutOfRange,

    // -- Encode errors --
    #[error("{0} exceeds 65535 bytes")]
    FieldTooLong(&'static str),

    #[error("attribute {0:?} has no values")]
    EmptyAttribute(String),

    #[error("attribute without name")]
    UnnamedAttribute,

    #[error("collection member without name")]
    UnnamedCollectionMember,

    #[error("tag {tag}: {required} value required, {present} present")]
    TagTypeMismatch {
        tag: Tag,
        required: ValueType,
        present: ValueType,
    },

    // -- Byte source / sink --
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A decode error stamped with the offset of the last tag byte read.
    #[error("{source} at {offset:#x}")]
    Offset {
        #[source]
        source: Box<IppError>,
        offset: u64,
    },
}

impl IppError {
    /// Stamp the error with a byte offset, unless already stamped.
    pub(crate) fn at(self, offset: u64) -> IppError {
        match self {
            IppError::Offset { .. } => self,
            other => IppError::Offset {
                source: Box::new(other),
                offset,
            },
        }
    }
}

/// Alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IppError>;
