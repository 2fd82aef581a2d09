// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Groups of attributes.
//
// Groups are an ordered sequence, not a map keyed by tag: a message may
// lawfully repeat a group tag, and the repetition order is meaningful.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::attr::{Attribute, Attributes};
use crate::tag::Tag;

/// A run of attributes introduced by a group delimiter tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub tag: Tag,
    pub attrs: Attributes,
}

impl Group {
    /// An empty group with the given delimiter tag.
    pub fn new(tag: Tag) -> Group {
        Group {
            tag,
            attrs: Attributes::new(),
        }
    }

    /// Append an attribute.
    pub fn add(&mut self, attr: Attribute) {
        self.attrs.add(attr);
    }

    /// Same tag, similar attributes.
    pub fn similar(&self, other: &Group) -> bool {
        self.tag == other.tag && self.attrs.similar(&other.attrs)
    }
}

/// The ordered groups of a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Groups(Vec<Group>);

impl Groups {
    pub fn new() -> Groups {
        Groups(Vec::new())
    }

    /// Append a group.
    pub fn add(&mut self, group: Group) {
        self.0.push(group);
    }

    /// Logical equality: groups with distinct tags may be reordered
    /// between each other, groups sharing a tag may not, and the
    /// attributes of corresponding groups compare order-insensitively.
    ///
    /// Both sides are stable-sorted by tag, which lines up equal-tag runs
    /// without disturbing their internal order.
    pub fn similar(&self, other: &Groups) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }

        let mut a: Vec<&Group> = self.0.iter().collect();
        let mut b: Vec<&Group> = other.0.iter().collect();
        a.sort_by_key(|g| g.tag);
        b.sort_by_key(|g| g.tag);

        a.iter().zip(b).all(|(x, y)| x.similar(y))
    }
}

impl Deref for Groups {
    type Target = [Group];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Groups {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Group>> for Groups {
    fn from(groups: Vec<Group>) -> Groups {
        Groups(groups)
    }
}
