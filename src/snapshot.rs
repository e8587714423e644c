// Copyright (c) 2022, MaidSafe.
// All rights reserved.
//
// This SAFE Network Software is licensed under the BSD-3-Clause license.
// Please see the LICENSE file for more details.

//! Flat forms of a Treedoc, for handing whole articles to a transport
//! or to local storage.

use serde::{Deserialize, Serialize};

use super::{Atom, LogOp, Node, Path, PosId, Result, Site, State, Treedoc};

/// One node of a Treedoc, flattened: (value, path, disambiguator, tombstone).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<V: Atom, S: Site> {
    /// content of the node
    pub value: V,
    /// path from the root
    pub path: Path,
    /// site that created the node
    pub disambiguator: S,
    /// true if the node has been deleted
    pub tombstone: bool,
}

impl<V: Atom, S: Site> From<&Node<V, S>> for Record<V, S> {
    fn from(n: &Node<V, S>) -> Self {
        Self {
            value: n.value().clone(),
            path: n.id().path().clone(),
            disambiguator: n.id().disambiguator().clone(),
            tombstone: n.is_tombstone(),
        }
    }
}

impl<V: Atom, S: Site> From<Record<V, S>> for Node<V, S> {
    fn from(r: Record<V, S>) -> Self {
        let mut n = Node::new(r.value, PosId::new(r.path, r.disambiguator));
        if r.tombstone {
            n.set_tombstone();
        }
        n
    }
}

/// A whole article: its flattened nodes plus the operation log.
///
/// This is the only form a tree is read back from.  Restoring goes
/// through `Treedoc::from_records`, so records that would break the
/// tree (a root path, a missing ancestor, a repeated id) are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<V: Atom, S: Site> {
    /// every node, tombstones included, in document order
    pub records: Vec<Record<V, S>>,
    /// local edits not yet acknowledged
    pub log: Vec<LogOp<V, S>>,
}

impl<V: Atom, S: Site> Default for Snapshot<V, S> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            log: Vec::new(),
        }
    }
}

impl<V: Atom, S: Site> Treedoc<V, S> {
    /// flattens the tree into records, in document order
    pub fn flatten(&self) -> Vec<Record<V, S>> {
        self.nodes().into_iter().map(Record::from).collect()
    }

    /// Rebuilds a tree from records given in any order.
    ///
    /// Shorter paths are attached first, so every ancestor present in
    /// `records` exists before its descendants.
    pub fn from_records(mut records: Vec<Record<V, S>>) -> Result<Self> {
        records.sort_by_key(|r| r.path.len());
        let mut treedoc = Self::new();
        for r in records {
            treedoc.attach(Node::from(r))?;
        }
        Ok(treedoc)
    }
}

impl<V: Atom, S: Site> State<V, S> {
    /// flattens this state into a snapshot
    pub fn snapshot(&self) -> Snapshot<V, S> {
        Snapshot {
            records: self.treedoc().flatten(),
            log: self.log().clone(),
        }
    }

    /// restores a state from a snapshot
    pub fn from_snapshot(snapshot: Snapshot<V, S>) -> Result<Self> {
        let treedoc = Treedoc::from_records(snapshot.records)?;
        Ok(Self::from((snapshot.log, treedoc)))
    }
}
