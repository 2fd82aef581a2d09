// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Message attributes.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::tag::Tag;
use crate::value::{Value, Values};

/// A named attribute with one or more tagged values.
///
/// The name is empty only transiently, for the nameless continuation
/// records of the wire format; every attribute held by a group or a
/// collection carries a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub values: Values,
}

impl Attribute {
    /// An attribute with a single initial value.
    pub fn new(name: impl Into<String>, tag: Tag, value: Value) -> Attribute {
        let mut values = Values::new();
        values.add(tag, value);
        Attribute {
            name: name.into(),
            values,
        }
    }

    /// Append a value.  Additional values may carry a different tag than
    /// the first one; the codec does not enforce uniformity.
    pub fn add_value(&mut self, tag: Tag, value: Value) {
        self.values.add(tag, value);
    }

    /// Same name and similar values.
    pub fn similar(&self, other: &Attribute) -> bool {
        self.name == other.name && self.values.similar(&other.values)
    }
}

/// An ordered sequence of attributes, as held by a group or a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    pub fn new() -> Attributes {
        Attributes(Vec::new())
    }

    /// Append an attribute.
    pub fn add(&mut self, attr: Attribute) {
        self.0.push(attr);
    }

    /// Same multiset of attributes, ignoring order entirely.
    ///
    /// Attributes are matched by name; same-named attributes on the two
    /// sides may pair up in any order, so each name bucket is checked
    /// for a perfect value-wise matching.
    pub fn similar(&self, other: &Attributes) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }

        let mut buckets: BTreeMap<&str, (Vec<&Attribute>, Vec<&Attribute>)> = BTreeMap::new();
        for attr in self.0.iter() {
            buckets.entry(attr.name.as_str()).or_default().0.push(attr);
        }
        for attr in other.0.iter() {
            buckets.entry(attr.name.as_str()).or_default().1.push(attr);
        }

        buckets.values().all(|(ours, theirs)| {
            if ours.len() != theirs.len() {
                return false;
            }
            let mut unmatched: Vec<Option<&Attribute>> =
                theirs.iter().copied().map(Some).collect();
            match_bucket(ours, &mut unmatched)
        })
    }
}

/// Perfect matching between two equal-size sets of same-named attributes,
/// with [`Attribute::similar`] as the edge relation.  Backtracking is fine
/// here: a bucket only holds the attributes sharing one name, and those
/// are rare and small.
fn match_bucket(ours: &[&Attribute], theirs: &mut [Option<&Attribute>]) -> bool {
    let (first, rest) = match ours.split_first() {
        Some(split) => split,
        None => return true,
    };

    for i in 0..theirs.len() {
        let candidate = match theirs[i] {
            Some(candidate) if first.similar(candidate) => candidate,
            _ => continue,
        };

        theirs[i] = None;
        if match_bucket(rest, theirs) {
            return true;
        }
        theirs[i] = Some(candidate);
    }

    false
}

impl Deref for Attributes {
    type Target = [Attribute];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Attributes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Attribute>> for Attributes {
    fn from(attrs: Vec<Attribute>) -> Attributes {
        Attributes(attrs)
    }
}
