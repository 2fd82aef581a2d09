// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Attribute values and their payload encodings.
//
// The value model is a closed set of ten kinds.  Each kind owns the binary
// layout of the bytes that follow an attribute header on the wire; the
// framing around those bytes (tag, name length, value length) belongs to
// the stream encoder and decoder.

use std::fmt;
use std::fmt::Write as _;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::attr::Attributes;
use crate::error::{IppError, Result};
use crate::tag::Tag;

/// Semantic categories of attribute values.
///
/// Many tags share one type: ten string-shaped tags all map to `String`,
/// and the whole out-of-band tag range maps to `Void`.  `Invalid` is
/// produced only for delimiter tags, which carry no value at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Void,
    Integer,
    Boolean,
    String,
    DateTime,
    Resolution,
    Range,
    TextWithLang,
    Binary,
    Collection,
    Invalid,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueType::Void => "Void",
            ValueType::Integer => "Integer",
            ValueType::Boolean => "Boolean",
            ValueType::String => "String",
            ValueType::DateTime => "DateTime",
            ValueType::Resolution => "Resolution",
            ValueType::Range => "Range",
            ValueType::TextWithLang => "TextWithLang",
            ValueType::Binary => "Binary",
            ValueType::Collection => "Collection",
            ValueType::Invalid => "Invalid",
        })
    }
}

/// Resolution units.
///
/// Unregistered unit bytes are preserved as-is; they render in hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Units(pub u8);

impl Units {
    /// Dots per inch.
    pub const DPI: Units = Units(3);
    /// Dots per centimeter.
    pub const DPCM: Units = Units(4);
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Units::DPI => f.write_str("dpi"),
            Units::DPCM => f.write_str("dpcm"),
            Units(other) => write!(f, "0x{other:02x}"),
        }
    }
}

/// A printer resolution: X and Y density plus units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub xres: i32,
    pub yres: i32,
    pub units: Units,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}{}", self.xres, self.yres, self.units)
    }
}

/// A range of integers.  The codec does not require `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub lower: i32,
    pub upper: i32,
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lower, self.upper)
    }
}

/// A string paired with the name of its natural language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextWithLang {
    pub lang: String,
    pub text: String,
}

impl TextWithLang {
    /// Wire layout: 2-byte language length, language, 2-byte text length,
    /// text.
    fn encode(&self) -> Result<Vec<u8>> {
        if self.lang.len() > usize::from(u16::MAX) {
            return Err(IppError::FieldTooLong("language"));
        }
        if self.text.len() > usize::from(u16::MAX) {
            return Err(IppError::FieldTooLong("text"));
        }

        let mut data = Vec::with_capacity(4 + self.lang.len() + self.text.len());
        data.extend_from_slice(&(self.lang.len() as u16).to_be_bytes());
        data.extend_from_slice(self.lang.as_bytes());
        data.extend_from_slice(&(self.text.len() as u16).to_be_bytes());
        data.extend_from_slice(self.text.as_bytes());
        Ok(data)
    }

    fn decode(data: &[u8]) -> Result<TextWithLang> {
        if data.len() < 2 {
            return Err(IppError::BadValue("truncated language length".into()));
        }
        let lang_len = usize::from(u16::from_be_bytes([data[0], data[1]]));
        let rest = &data[2..];

        if rest.len() < lang_len {
            return Err(IppError::BadValue("truncated language name".into()));
        }
        let (lang, rest) = rest.split_at(lang_len);

        if rest.len() < 2 {
            return Err(IppError::BadValue("truncated text length".into()));
        }
        let text_len = usize::from(u16::from_be_bytes([rest[0], rest[1]]));
        let rest = &rest[2..];

        if rest.len() < text_len {
            return Err(IppError::BadValue("truncated text string".into()));
        }
        let (text, rest) = rest.split_at(text_len);

        if !rest.is_empty() {
            return Err(IppError::BadValue(format!(
                "extra {} bytes at the end of value",
                rest.len()
            )));
        }

        let lang = String::from_utf8(lang.to_vec())
            .map_err(|_| IppError::BadValue("invalid UTF-8 language".into()))?;
        let text = String::from_utf8(text.to_vec())
            .map_err(|_| IppError::BadValue("invalid UTF-8 text".into()))?;

        Ok(TextWithLang { lang, text })
    }
}

impl fmt::Display for TextWithLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.text, self.lang)
    }
}

/// A date and time with a UTC offset, as carried on the wire.
///
/// The fields mirror the RFC 2579 DateAndTime layout byte for byte, so a
/// decoded value re-encodes identically: the zone is kept as sign, hours
/// and minutes rather than being folded into an instant.  Use
/// [`DateTime::to_chrono`] and the `From` conversions to interoperate with
/// calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    /// 0..=60; 60 is a leap second.
    pub second: u8,
    pub decisecond: u8,
    /// Direction from UTC, `b'+'` or `b'-'`.
    pub utc_dir: u8,
    pub utc_hours: u8,
    pub utc_minutes: u8,
}

impl DateTime {
    fn encode(&self) -> [u8; 11] {
        let year = self.year.to_be_bytes();
        [
            year[0],
            year[1],
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.decisecond,
            self.utc_dir,
            self.utc_hours,
            self.utc_minutes,
        ]
    }

    /// Decode the 11-byte DateAndTime layout, or the 9-byte short form,
    /// which is taken as UTC with zero deciseconds.
    fn decode(data: &[u8]) -> Result<DateTime> {
        if data.len() != 9 && data.len() != 11 {
            return Err(IppError::BadValue("value must be 9 or 11 bytes".into()));
        }

        let year = u16::from_be_bytes([data[0], data[1]]);
        let month = field("month", data[2], 1, 12)?;
        let day = field("day", data[3], 1, 31)?;
        let hour = field("hour", data[4], 0, 23)?;
        let minute = field("minute", data[5], 0, 59)?;
        let second = field("second", data[6], 0, 60)?;

        if data.len() == 9 {
            return Ok(DateTime {
                year,
                month,
                day,
                hour,
                minute,
                second,
                decisecond: 0,
                utc_dir: b'+',
                utc_hours: 0,
                utc_minutes: 0,
            });
        }

        let decisecond = field("decisecond", data[7], 0, 9)?;
        let utc_dir = data[8];
        if utc_dir != b'+' && utc_dir != b'-' {
            return Err(IppError::BadValue("bad UTC sign".into()));
        }
        let utc_hours = field("UTC hours", data[9], 0, 13)?;
        let utc_minutes = field("UTC minutes", data[10], 0, 59)?;

        Ok(DateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            decisecond,
            utc_dir,
            utc_hours,
            utc_minutes,
        })
    }

    /// Convert to calendar time.  `None` if the fields do not name a real
    /// instant (the wire validation is per-field only, so February 31
    /// decodes but does not convert).
    pub fn to_chrono(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        let mut offset =
            i32::from(self.utc_hours) * 3600 + i32::from(self.utc_minutes) * 60;
        if self.utc_dir == b'-' {
            offset = -offset;
        }
        let zone = chrono::FixedOffset::east_opt(offset)?;

        // chrono carries a leap second as nanoseconds beyond 10^9.
        let (second, leap) = if self.second == 60 {
            (59, 1_000_000_000)
        } else {
            (self.second, 0)
        };
        let nanos = u32::from(self.decisecond) * 100_000_000 + leap;

        chrono::NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )?
        .and_hms_nano_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(second),
            nanos,
        )?
        .and_local_timezone(zone)
        .single()
    }
}

impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for DateTime {
    fn from(t: chrono::DateTime<Tz>) -> DateTime {
        use chrono::{Datelike, Offset, Timelike};

        let mut offset = t.offset().fix().local_minus_utc();
        let utc_dir = if offset < 0 {
            offset = -offset;
            b'-'
        } else {
            b'+'
        };

        let mut nanos = t.nanosecond();
        let mut second = t.second() as u8;
        if nanos >= 1_000_000_000 {
            // Leap second.
            nanos -= 1_000_000_000;
            second += 1;
        }

        DateTime {
            year: t.year() as u16,
            month: t.month() as u8,
            day: t.day() as u8,
            hour: t.hour() as u8,
            minute: t.minute() as u8,
            second,
            decisecond: (nanos / 100_000_000) as u8,
            utc_dir,
            utc_hours: (offset / 3600) as u8,
            utc_minutes: ((offset / 60) % 60) as u8,
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.decisecond != 0 {
            write!(f, ".{}", self.decisecond)?;
        }
        write!(
            f,
            "{}{:02}:{:02}",
            char::from(self.utc_dir),
            self.utc_hours,
            self.utc_minutes
        )
    }
}

/// An attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// No payload; carried by out-of-band tags.
    Void,
    Integer(i32),
    Boolean(bool),
    String(String),
    DateTime(DateTime),
    Resolution(Resolution),
    Range(Range),
    TextWithLang(TextWithLang),
    /// Opaque bytes; also the decoding of tags with no registered type.
    Binary(Vec<u8>),
    /// Nested named attributes.  The payload on the wire is empty; the
    /// members are framed by the surrounding attribute grammar.
    Collection(Attributes),
}

impl Value {
    /// The semantic type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Void => ValueType::Void,
            Value::Integer(_) => ValueType::Integer,
            Value::Boolean(_) => ValueType::Boolean,
            Value::String(_) => ValueType::String,
            Value::DateTime(_) => ValueType::DateTime,
            Value::Resolution(_) => ValueType::Resolution,
            Value::Range(_) => ValueType::Range,
            Value::TextWithLang(_) => ValueType::TextWithLang,
            Value::Binary(_) => ValueType::Binary,
            Value::Collection(_) => ValueType::Collection,
        }
    }

    /// Encode the payload bytes that follow the attribute header.
    /// Multibyte integers are big-endian.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Value::Void => Ok(Vec::new()),
            Value::Integer(v) => Ok(v.to_be_bytes().to_vec()),
            Value::Boolean(v) => Ok(vec![u8::from(*v)]),
            Value::String(s) => Ok(s.as_bytes().to_vec()),
            Value::DateTime(t) => Ok(t.encode().to_vec()),
            Value::Resolution(r) => {
                let mut data = Vec::with_capacity(9);
                data.extend_from_slice(&r.xres.to_be_bytes());
                data.extend_from_slice(&r.yres.to_be_bytes());
                data.push(r.units.0);
                Ok(data)
            }
            Value::Range(r) => {
                let mut data = Vec::with_capacity(8);
                data.extend_from_slice(&r.lower.to_be_bytes());
                data.extend_from_slice(&r.upper.to_be_bytes());
                Ok(data)
            }
            Value::TextWithLang(t) => t.encode(),
            Value::Binary(b) => Ok(b.clone()),
            Value::Collection(_) => Ok(Vec::new()),
        }
    }

    /// Decode a payload of the given type.
    ///
    /// `Collection` payloads never reach the value codec: the stream
    /// decoder parses the framed member grammar itself.  Likewise
    /// `Invalid`, since delimiter tags have no attribute body.
    pub fn decode(value_type: ValueType, data: &[u8]) -> Result<Value> {
        match value_type {
            // Out-of-band values ignore whatever payload was sent.
            ValueType::Void => Ok(Value::Void),
            ValueType::Integer => {
                if data.len() != 4 {
                    return Err(IppError::BadValue("value must be 4 bytes".into()));
                }
                Ok(Value::Integer(i32::from_be_bytes([
                    data[0], data[1], data[2], data[3],
                ])))
            }
            ValueType::Boolean => {
                if data.len() != 1 {
                    return Err(IppError::BadValue("value must be 1 byte".into()));
                }
                Ok(Value::Boolean(data[0] != 0))
            }
            // Strict: substituting replacement characters would change
            // the octets on a decode/encode round trip.
            ValueType::String => match String::from_utf8(data.to_vec()) {
                Ok(s) => Ok(Value::String(s)),
                Err(_) => Err(IppError::BadValue("invalid UTF-8 string".into())),
            },
            ValueType::DateTime => DateTime::decode(data).map(Value::DateTime),
            ValueType::Resolution => {
                if data.len() != 9 {
                    return Err(IppError::BadValue("value must be 9 bytes".into()));
                }
                Ok(Value::Resolution(Resolution {
                    xres: i32::from_be_bytes([data[0], data[1], data[2], data[3]]),
                    yres: i32::from_be_bytes([data[4], data[5], data[6], data[7]]),
                    units: Units(data[8]),
                }))
            }
            ValueType::Range => {
                if data.len() != 8 {
                    return Err(IppError::BadValue("value must be 8 bytes".into()));
                }
                Ok(Value::Range(Range {
                    lower: i32::from_be_bytes([data[0], data[1], data[2], data[3]]),
                    upper: i32::from_be_bytes([data[4], data[5], data[6], data[7]]),
                }))
            }
            ValueType::TextWithLang => TextWithLang::decode(data).map(Value::TextWithLang),
            ValueType::Binary => Ok(Value::Binary(data.to_vec())),
            ValueType::Collection | ValueType::Invalid => {
                unreachable!("{value_type} payloads are not decoded by the value codec")
            }
        }
    }

    /// Equality modulo representation: `String` and `Binary` values
    /// compare equal when they carry the same octets, and collections
    /// compare member-wise with the same allowance.
    pub fn similar(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(s), Value::Binary(b)) | (Value::Binary(b), Value::String(s)) => {
                s.as_bytes() == &b[..]
            }
            (Value::Collection(a), Value::Collection(b)) => a.similar(b),
            _ => self == other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Void => Ok(()),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::String(s) => f.write_str(s),
            Value::DateTime(t) => write!(f, "{t}"),
            Value::Resolution(r) => write!(f, "{r}"),
            Value::Range(r) => write!(f, "{r}"),
            Value::TextWithLang(t) => write!(f, "{t}"),
            Value::Binary(b) => {
                for octet in b {
                    write!(f, "{octet:02x}")?;
                }
                Ok(())
            }
            Value::Collection(members) => {
                f.write_char('{')?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{}={}", member.name, member.values)?;
                }
                f.write_char('}')
            }
        }
    }
}

/// The ordered values of an attribute, each with its own tag.
///
/// The wire format spreads a multi-valued attribute over nameless
/// continuation records; in memory the values collapse into one sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Values(Vec<(Tag, Value)>);

impl Values {
    pub fn new() -> Values {
        Values(Vec::new())
    }

    /// Append a tagged value.
    pub fn add(&mut self, tag: Tag, value: Value) {
        self.0.push((tag, value));
    }

    /// Pairwise value similarity; tags are not compared, so a `String`
    /// and an `octetString` rendition of the same bytes are similar.
    pub fn similar(&self, other: &Values) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|((_, a), (_, b))| a.similar(b))
    }
}

impl Deref for Values {
    type Target = [(Tag, Value)];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Values {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<(Tag, Value)>> for Values {
    fn from(values: Vec<(Tag, Value)>) -> Values {
        Values(values)
    }
}

impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() == 1 {
            return write!(f, "{}", self.0[0].1);
        }

        f.write_char('[')?;
        for (i, (_, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write!(f, "{value}")?;
        }
        f.write_char(']')
    }
}

/// Range-check a DateAndTime field.
fn field(name: &str, value: u8, lo: u8, hi: u8) -> Result<u8> {
    if (lo..=hi).contains(&value) {
        Ok(value)
    } else {
        Err(IppError::BadValue(format!("bad {name} {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A valid 11-byte DateAndTime: 2015-03-14 09:26:53.5 +01:30.
    const DATETIME_WIRE: [u8; 11] = [0x07, 0xdf, 3, 14, 9, 26, 53, 5, b'+', 1, 30];

    fn decode_err(value_type: ValueType, data: &[u8]) -> String {
        Value::decode(value_type, data)
            .expect_err("decode must fail")
            .to_string()
    }

    #[test]
    fn integer_is_four_bytes() {
        let value = Value::Integer(-2);
        let data = value.encode().expect("encode");
        assert_eq!(data, [0xff, 0xff, 0xff, 0xfe]);
        assert_eq!(Value::decode(ValueType::Integer, &data).expect("decode"), value);

        assert_eq!(
            decode_err(ValueType::Integer, &[0, 1, 2]),
            "value must be 4 bytes"
        );
    }

    #[test]
    fn boolean_is_one_byte() {
        let data = Value::Boolean(true).encode().expect("encode");
        assert_eq!(data, [1]);
        assert_eq!(
            Value::decode(ValueType::Boolean, &[0]).expect("decode"),
            Value::Boolean(false)
        );
        // Any non-zero octet is true.
        assert_eq!(
            Value::decode(ValueType::Boolean, &[7]).expect("decode"),
            Value::Boolean(true)
        );
        assert_eq!(decode_err(ValueType::Boolean, &[]), "value must be 1 byte");
    }

    #[test]
    fn void_ignores_any_payload() {
        assert_eq!(Value::Void.encode().expect("encode"), Vec::<u8>::new());
        assert_eq!(
            Value::decode(ValueType::Void, &[1, 2, 3]).expect("decode"),
            Value::Void
        );
    }

    #[test]
    fn datetime_round_trip() {
        let value = Value::decode(ValueType::DateTime, &DATETIME_WIRE).expect("decode");
        let Value::DateTime(t) = value.clone() else {
            panic!("expected a DateTime value");
        };
        assert_eq!(t.year, 2015);
        assert_eq!(t.decisecond, 5);
        assert_eq!(t.utc_dir, b'+');
        assert_eq!(t.utc_minutes, 30);
        assert_eq!(value.encode().expect("encode"), DATETIME_WIRE);
    }

    #[test]
    fn datetime_short_form_is_utc() {
        let wire = [0x07, 0xdf, 3, 14, 9, 26, 53, 9, b'?'];
        let value = Value::decode(ValueType::DateTime, &wire).expect("decode");
        let Value::DateTime(t) = value else {
            panic!("expected a DateTime value");
        };
        // Only the fields through the seconds are read.
        assert_eq!(t.second, 53);
        assert_eq!(t.decisecond, 0);
        assert_eq!(t.utc_dir, b'+');
        assert_eq!(t.utc_hours, 0);
        assert_eq!(t.utc_minutes, 0);
    }

    #[test]
    fn datetime_rejects_out_of_range_fields() {
        let mut wire = DATETIME_WIRE;
        wire[2] = 0;
        assert_eq!(decode_err(ValueType::DateTime, &wire), "bad month 0");

        let mut wire = DATETIME_WIRE;
        wire[3] = 32;
        assert_eq!(decode_err(ValueType::DateTime, &wire), "bad day 32");

        let mut wire = DATETIME_WIRE;
        wire[8] = b'?';
        assert_eq!(decode_err(ValueType::DateTime, &wire), "bad UTC sign");

        let mut wire = DATETIME_WIRE;
        wire[9] = 14;
        assert_eq!(decode_err(ValueType::DateTime, &wire), "bad UTC hours 14");

        assert_eq!(
            decode_err(ValueType::DateTime, &DATETIME_WIRE[..8]),
            "value must be 9 or 11 bytes"
        );
    }

    #[test]
    fn datetime_converts_to_chrono_and_back() {
        let value = Value::decode(ValueType::DateTime, &DATETIME_WIRE).expect("decode");
        let Value::DateTime(t) = value else {
            panic!("expected a DateTime value");
        };
        let instant = t.to_chrono().expect("a real instant");
        assert_eq!(instant.offset().local_minus_utc(), 5400);
        assert_eq!(chrono::Timelike::nanosecond(&instant), 500_000_000);
        assert_eq!(DateTime::from(instant), t);
    }

    #[test]
    fn datetime_with_impossible_date_does_not_convert() {
        // February 31 passes the per-field wire validation only.
        let t = DateTime {
            year: 2020,
            month: 2,
            day: 31,
            hour: 0,
            minute: 0,
            second: 0,
            decisecond: 0,
            utc_dir: b'+',
            utc_hours: 0,
            utc_minutes: 0,
        };
        assert!(t.to_chrono().is_none());
    }

    #[test]
    fn resolution_is_nine_bytes() {
        let value = Value::Resolution(Resolution {
            xres: 600,
            yres: 1200,
            units: Units::DPI,
        });
        let data = value.encode().expect("encode");
        assert_eq!(data.len(), 9);
        assert_eq!(Value::decode(ValueType::Resolution, &data).expect("decode"), value);
        assert_eq!(
            decode_err(ValueType::Resolution, &data[..8]),
            "value must be 9 bytes"
        );
    }

    #[test]
    fn unknown_units_decode_and_render_as_hex() {
        let data = [0, 0, 0, 75, 0, 0, 0, 75, 5];
        let value = Value::decode(ValueType::Resolution, &data).expect("decode");
        assert_eq!(value.to_string(), "75x750x05");
        assert_eq!(Units::DPCM.to_string(), "dpcm");
    }

    #[test]
    fn range_is_eight_bytes() {
        let value = Value::Range(Range {
            lower: 0x10,
            upper: 0x20,
        });
        let data = value.encode().expect("encode");
        assert_eq!(data, [0, 0, 0, 0x10, 0, 0, 0, 0x20]);
        assert_eq!(Value::decode(ValueType::Range, &data).expect("decode"), value);
        assert_eq!(decode_err(ValueType::Range, &data[..7]), "value must be 8 bytes");
    }

    #[test]
    fn text_with_lang_round_trip() {
        let value = Value::TextWithLang(TextWithLang {
            lang: "en".into(),
            text: "hello".into(),
        });
        let data = value.encode().expect("encode");
        assert_eq!(&data[..2], [0, 2]);
        assert_eq!(
            Value::decode(ValueType::TextWithLang, &data).expect("decode"),
            value
        );
    }

    #[test]
    fn text_with_lang_truncations() {
        assert_eq!(
            decode_err(ValueType::TextWithLang, &[0]),
            "truncated language length"
        );
        assert_eq!(
            decode_err(ValueType::TextWithLang, &[0, 2]),
            "truncated language name"
        );
        assert_eq!(
            decode_err(ValueType::TextWithLang, &[0, 2, b'e', b'n']),
            "truncated text length"
        );
        assert_eq!(
            decode_err(ValueType::TextWithLang, &[0, 2, b'e', b'n', 0, 5, b'h', b'i']),
            "truncated text string"
        );
    }

    #[test]
    fn text_with_lang_rejects_trailing_bytes() {
        let mut data = Value::TextWithLang(TextWithLang {
            lang: "en".into(),
            text: "hi".into(),
        })
        .encode()
        .expect("encode");
        data.extend_from_slice(&[0, 0, 0]);
        assert_eq!(
            decode_err(ValueType::TextWithLang, &data),
            "extra 3 bytes at the end of value"
        );
    }

    #[test]
    fn text_with_lang_length_bound() {
        let value = Value::TextWithLang(TextWithLang {
            lang: "x".repeat(0x1_0000),
            text: "hi".into(),
        });
        let err = value.encode().expect_err("must not encode");
        assert_eq!(err.to_string(), "language exceeds 65535 bytes");
    }

    #[test]
    fn invalid_utf8_string_payloads_are_rejected() {
        assert_eq!(
            decode_err(ValueType::String, &[0xff, 0xfe]),
            "invalid UTF-8 string"
        );
        // Octets that are not valid UTF-8 still travel under octetString.
        assert_eq!(
            Value::decode(ValueType::Binary, &[0xff, 0xfe]).expect("decode"),
            Value::Binary(vec![0xff, 0xfe])
        );
    }

    #[test]
    fn invalid_utf8_language_or_text_is_rejected() {
        assert_eq!(
            decode_err(ValueType::TextWithLang, &[0, 1, 0xff, 0, 0]),
            "invalid UTF-8 language"
        );
        assert_eq!(
            decode_err(ValueType::TextWithLang, &[0, 2, b'e', b'n', 0, 1, 0xff]),
            "invalid UTF-8 text"
        );
    }

    #[test]
    fn string_and_binary_are_similar_not_equal() {
        let s = Value::String("utf-8".into());
        let b = Value::Binary(b"utf-8".to_vec());
        assert!(s.similar(&b));
        assert!(b.similar(&s));
        assert_ne!(s, b);
        assert!(!s.similar(&Value::Binary(b"utf-16".to_vec())));
    }

    #[test]
    fn decoded_type_matches_the_tag_type() {
        let samples = [
            (Tag::INTEGER, Value::Integer(42)),
            (Tag::ENUM, Value::Integer(9)),
            (Tag::BOOLEAN, Value::Boolean(true)),
            (Tag::NO_VALUE, Value::Void),
            (Tag::KEYWORD, Value::String("plain".into())),
            (Tag::TEXT, Value::String("hello".into())),
            (
                Tag::DATE_TIME,
                Value::decode(ValueType::DateTime, &DATETIME_WIRE).expect("decode"),
            ),
            (
                Tag::RESOLUTION,
                Value::Resolution(Resolution {
                    xres: 300,
                    yres: 300,
                    units: Units::DPCM,
                }),
            ),
            (Tag::RANGE, Value::Range(Range { lower: 1, upper: 2 })),
            (
                Tag::TEXT_LANG,
                Value::TextWithLang(TextWithLang {
                    lang: "en".into(),
                    text: "hi".into(),
                }),
            ),
            (Tag::OCTET_STRING, Value::Binary(vec![1, 2, 3])),
        ];

        for (tag, value) in samples {
            let data = value.encode().expect("encode");
            let decoded = Value::decode(tag.value_type(), &data).expect("decode");
            assert_eq!(decoded.value_type(), tag.value_type(), "tag {tag}");
        }
    }

    #[test]
    fn values_keep_insertion_order() {
        let mut values = Values::new();
        values.add(Tag::INTEGER, Value::Integer(1));
        values.add(Tag::RANGE, Value::Range(Range { lower: 0, upper: 9 }));
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].0, Tag::INTEGER);
        assert_eq!(values[1].0, Tag::RANGE);
        assert_eq!(values.to_string(), "[1,0-9]");
    }

    #[test]
    fn values_similarity_ignores_tags() {
        let a = Values::from(vec![(Tag::KEYWORD, Value::String("draft".into()))]);
        let b = Values::from(vec![(Tag::OCTET_STRING, Value::Binary(b"draft".to_vec()))]);
        assert!(a.similar(&b));
        assert_ne!(a, b);
    }
}
