// Copyright (c) 2022, MaidSafe.
// All rights reserved.
//
// This SAFE Network Software is licensed under the BSD-3-Clause license.
// Please see the LICENSE file for more details.

use crdts::quickcheck::{Arbitrary, Gen};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::{Path, Side, Site};

/// Implements a position identifier: a `Path` plus the `Site` that created the node.
///
/// Position identifiers are totally ordered by `before`, and that order is
/// the order in which atoms appear in the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PosId<S: Site> {
    path: Path,
    disambiguator: S,
}

/// How one position identifier sits relative to another in the tree.
///
/// Exactly one relation holds for any pair, see `PosId::relation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// identical path and disambiguator
    Same,
    /// identical path; the disambiguators decide
    Disambiguate(Ordering),
    /// the other id lies in this id's `Side` subtree
    Ancestor(Side),
    /// this id lies in the other id's `Side` subtree
    Descendant(Side),
    /// neither is above the other; this id branches off to `Side`
    Diverge(Side),
}

impl Relation {
    /// true if the first id of the pair comes first in the document
    pub fn is_before(self) -> bool {
        match self {
            Relation::Same => false,
            Relation::Disambiguate(ord) => ord == Ordering::Less,
            Relation::Ancestor(side) => side == Side::Right,
            Relation::Descendant(side) | Relation::Diverge(side) => side == Side::Left,
        }
    }
}

impl<S: Site> PosId<S> {
    /// create a new PosId instance
    pub fn new(path: Path, disambiguator: S) -> Self {
        Self {
            path,
            disambiguator,
        }
    }

    /// returns path reference
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// returns disambiguator reference
    #[inline]
    pub fn disambiguator(&self) -> &S {
        &self.disambiguator
    }

    /// classifies the position of `self` relative to `other`.
    ///
    /// ```text
    ///              c            for ids on the paths shown:
    ///           /     \           c  vs l : Ancestor(Left)
    ///          l       r          l  vs c : Descendant(Left)
    ///                             l  vs r : Diverge(Left)
    /// ```
    pub fn relation(&self, other: &Self) -> Relation {
        let i = self.path.common_prefix(&other.path);
        match (self.path.side(i), other.path.side(i)) {
            (None, Some(side)) => Relation::Ancestor(side),
            (Some(side), None) => Relation::Descendant(side),
            (Some(side), Some(other_side)) if side != other_side => Relation::Diverge(side),
            // equal paths.  (equal bits at i cannot occur, i is the first disagreement.)
            _ => match self.disambiguator.cmp(&other.disambiguator) {
                Ordering::Equal => Relation::Same,
                ord => Relation::Disambiguate(ord),
            },
        }
    }

    /// true if `self` comes strictly before `other` in the document.
    ///
    /// Left subtrees come before a node, right subtrees after it, and
    /// nodes sharing a path are ordered by disambiguator.
    pub fn before(&self, other: &Self) -> bool {
        self.relation(other).is_before()
    }

    /// true if `other` is exactly one step below `self`
    pub fn is_parent_of(&self, other: &Self) -> bool {
        other.path.len() == self.path.len() + 1 && self.path.is_prefix_of(&other.path)
    }

    /// true if `other` lies anywhere below `self`.  The root is an
    /// ancestor of every other path.
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.path.len() < other.path.len() && self.path.is_prefix_of(&other.path)
    }

    /// true if `other` shares the path but was created by another site
    pub fn is_mini_sibling_of(&self, other: &Self) -> bool {
        self.path == other.path && self.disambiguator != other.disambiguator
    }
}

impl<S: Site> Ord for PosId<S> {
    /// document order, see `before`
    fn cmp(&self, other: &Self) -> Ordering {
        match self.relation(other) {
            Relation::Same => Ordering::Equal,
            r if r.is_before() => Ordering::Less,
            _ => Ordering::Greater,
        }
    }
}

impl<S: Site> PartialOrd for PosId<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Site> fmt::Display for PosId<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?}", self.path, self.disambiguator)
    }
}

/// A bound used while generating identifiers: a real id or one of the
/// two virtual ends of the document.
///
/// `Start` precedes every id and `End` follows every id.  For ancestry
/// both ends sit at the root, so they are ancestors of every real id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound<S: Site> {
    /// negative infinity
    Start,
    /// an existing position identifier
    Id(PosId<S>),
    /// positive infinity
    End,
}

impl<S: Site> Bound<S> {
    /// true if this bound comes strictly before `id`
    pub fn is_before(&self, id: &PosId<S>) -> bool {
        match self {
            Bound::Start => true,
            Bound::Id(p) => p.before(id),
            Bound::End => false,
        }
    }

    /// true if this bound comes strictly after `id`
    pub fn is_after(&self, id: &PosId<S>) -> bool {
        match self {
            Bound::Start => false,
            Bound::Id(f) => id.before(f),
            Bound::End => true,
        }
    }

    /// true if this bound comes strictly before `other`
    pub fn before(&self, other: &Self) -> bool {
        match (self, other) {
            (Bound::Start, Bound::Start) | (Bound::End, _) => false,
            (Bound::Start, _) | (_, Bound::End) => true,
            (Bound::Id(_), Bound::Start) => false,
            (Bound::Id(p), Bound::Id(q)) => p.before(q),
        }
    }

    /// true if `id` lies below this bound
    pub fn is_ancestor_of(&self, id: &PosId<S>) -> bool {
        match self {
            Bound::Start | Bound::End => true,
            Bound::Id(p) => p.is_ancestor_of(id),
        }
    }
}

impl<S: Site> fmt::Display for Bound<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Start => write!(f, "-inf"),
            Bound::Id(id) => write!(f, "{}", id),
            Bound::End => write!(f, "+inf"),
        }
    }
}

// Generate arbitrary (random) ids.  needed by quickcheck.
impl<S: Site + Arbitrary> Arbitrary for PosId<S> {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        Self::new(Path::arbitrary(g), S::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let disambiguator = self.disambiguator.clone();
        Box::new(
            self.path
                .shrink()
                .map(move |path| Self::new(path, disambiguator.clone())),
        )
    }
}
