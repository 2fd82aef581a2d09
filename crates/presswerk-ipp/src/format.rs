// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable rendering of messages, for logs and diagnostics.

use std::fmt::Write as _;

use crate::attr::Attribute;
use crate::message::Message;
use crate::op::Op;
use crate::status::Status;
use crate::tag::Tag;
use crate::value::Value;

const INDENT: &str = "    ";

/// Render a message, interpreting its code as an operation.
pub fn format_request(msg: &Message) -> String {
    format_message(msg, true)
}

/// Render a message, interpreting its code as a status.
pub fn format_response(msg: &Message) -> String {
    format_message(msg, false)
}

fn format_message(msg: &Message, request: bool) -> String {
    let mut out = String::new();

    out.push_str("{\n");
    let _ = writeln!(out, "{INDENT}VERSION {}", msg.version);
    if request {
        let _ = writeln!(out, "{INDENT}OPERATION {}", Op::from(msg.code));
    } else {
        let _ = writeln!(out, "{INDENT}STATUS {}", Status::from(msg.code));
    }

    for group in msg.groups.iter() {
        let _ = writeln!(out, "\n{INDENT}GROUP {}", group.tag);
        for attr in group.attrs.iter() {
            format_attribute(&mut out, attr, 1);
            out.push('\n');
        }
    }

    out.push_str("}\n");
    out
}

/// One `ATTR` line; collection values recurse with deeper indentation.
fn format_attribute(out: &mut String, attr: &Attribute, indent: usize) {
    push_indent(out, indent);
    let _ = write!(out, "ATTR {:?}", attr.name);

    // Values print their tag once per run of equal tags.
    let mut last_tag = Tag::ZERO;
    for (tag, value) in attr.values.iter() {
        if *tag != last_tag {
            let _ = write!(out, " {tag}:");
            last_tag = *tag;
        }

        match value {
            Value::Collection(members) => {
                out.push_str(" {\n");
                for member in members.iter() {
                    format_attribute(out, member, indent + 1);
                    out.push('\n');
                }
                push_indent(out, indent);
                out.push('}');
            }
            other => {
                let _ = write!(out, " {other}");
            }
        }
    }
}

fn push_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::Attributes;
    use crate::group::Group;
    use crate::message::Version;
    use crate::value::{Range, Values};

    #[test]
    fn request_rendering() {
        let mut msg = Message::new_request(Version::V1_1, Op::PRINT_JOB, 1);
        let mut op = Group::new(Tag::OPERATION_GROUP);
        op.add(Attribute::new(
            "attributes-charset",
            Tag::CHARSET,
            Value::String("utf-8".into()),
        ));
        let mut lease = Attribute::new("lease", Tag::INTEGER, Value::Integer(1));
        lease.add_value(Tag::RANGE, Value::Range(Range { lower: 1, upper: 9 }));
        op.add(lease);
        msg.groups.add(op);

        let text = format_request(&msg);
        assert!(text.starts_with("{\n    VERSION 1.1\n    OPERATION Print-Job\n"));
        assert!(text.contains("GROUP operation-attributes-tag"));
        assert!(text.contains("ATTR \"attributes-charset\" charset: utf-8"));
        assert!(text.contains("ATTR \"lease\" integer: 1 rangeOfInteger: 1-9"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn response_rendering_uses_status_names() {
        let msg = Message::new_response(Version::DEFAULT, Status::ERROR_BUSY, 9);
        let text = format_response(&msg);
        assert!(text.contains("STATUS server-error-busy"));
    }

    #[test]
    fn collections_render_recursively() {
        let mut size = Attributes::new();
        size.add(Attribute::new("x-dimension", Tag::INTEGER, Value::Integer(100)));

        let mut msg = Message::new_request(Version::V1_1, Op::PRINT_JOB, 1);
        let mut job = Group::new(Tag::JOB_GROUP);
        job.add(Attribute {
            name: "media-col".into(),
            values: Values::from(vec![(Tag::BEGIN_COLLECTION, Value::Collection(size))]),
        });
        msg.groups.add(job);

        let text = format_request(&msg);
        assert!(text.contains("ATTR \"media-col\" collection: {\n"));
        assert!(text.contains("        ATTR \"x-dimension\" integer: 100\n"));
    }
}
