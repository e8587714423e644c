// Copyright (c) 2022, MaidSafe.
// All rights reserved.
//
// This SAFE Network Software is licensed under the BSD-3-Clause license.
// Please see the LICENSE file for more details.

use serde::Serialize;

use super::{Atom, LogOp, Node, Op, Result, Site, Treedoc};
use crdts::CmRDT;
use log::{debug, warn};

/// Holds Treedoc CRDT state: the tree plus the log of local edits.
///
/// `State` is not tied to any site.  Local edits name their site on
/// each call; remote edits are replayed with `apply_op`.  Two states
/// that have applied the same ops (in any causal order) have equal
/// contents.
///
/// `State` may be instantiated directly or alternatively the higher
/// level `Replica` may be used.
///
/// For usage/examples, see:
///   tests/treedoc.rs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State<V: Atom, S: Site> {
    // local edits, oldest first, not yet acknowledged by the transport.
    log_op_list: Vec<LogOp<V, S>>,

    // the document tree.
    treedoc: Treedoc<V, S>,
}

impl<V: Atom, S: Site> State<V, S> {
    /// create a new State
    pub fn new() -> Self {
        Self {
            log_op_list: Vec::<LogOp<V, S>>::default(),
            treedoc: Treedoc::<V, S>::new(),
        }
    }

    /// returns treedoc reference
    #[inline]
    pub fn treedoc(&self) -> &Treedoc<V, S> {
        &self.treedoc
    }

    /// returns log reference
    #[inline]
    pub fn log(&self) -> &Vec<LogOp<V, S>> {
        &self.log_op_list
    }

    /// returns visible contents, in document order
    pub fn contents(&self) -> Vec<V> {
        self.treedoc.contents()
    }

    /// add_log_entry
    pub fn add_log_entry(&mut self, entry: LogOp<V, S>) {
        // oldest first, so entries are pushed in the order they happened.
        self.log_op_list.push(entry);
    }

    /// removes the `count` oldest log entries, once the transport has
    /// replayed them.  returns the number removed.
    pub fn acknowledge(&mut self, count: usize) -> usize {
        let count = count.min(self.log_op_list.len());
        self.log_op_list.drain(..count);
        count
    }

    /// inserts `atom` at logical position `pos` on behalf of `site`,
    /// logging and returning the resulting op.
    pub fn insert(&mut self, atom: V, pos: usize, site: S) -> Result<Op<V, S>> {
        let id = self.treedoc.insert(atom.clone(), pos, site.clone())?;
        let op = Op::Insert { id, value: atom };
        self.add_log_entry(LogOp::new(op.clone(), pos, site));
        Ok(op)
    }

    /// deletes the atom at logical position `pos` on behalf of `site`,
    /// logging and returning the resulting op.
    pub fn delete(&mut self, pos: usize, site: S) -> Result<Op<V, S>> {
        let id = self.treedoc.delete(pos)?;
        let op = Op::Delete { id };
        self.add_log_entry(LogOp::new(op.clone(), pos, site));
        Ok(op)
    }

    /// Applies an op produced by this or another replica.
    ///
    /// Replaying an insert that is already present, or a delete of a
    /// node that is already a tombstone, changes nothing.  Ops are not
    /// logged: the log holds local edits only.
    pub fn apply_op(&mut self, op: Op<V, S>) -> Result<()> {
        match op {
            Op::Insert { id, value } => {
                if self.treedoc.find(&id).is_some() {
                    warn!("insert of existing node {} ignored (not applied).", id);
                    return Ok(());
                }
                self.treedoc.attach(Node::new(value, id))
            }
            Op::Delete { id } => {
                if !self.treedoc.tombstone(&id)? {
                    debug!("node {} already deleted", id);
                }
                Ok(())
            }
        }
    }

    /// applies a list of operations and consume them. (no cloning)
    ///
    /// stops at the first op that fails; earlier ops stay applied.
    pub fn apply_ops_into(&mut self, ops: Vec<Op<V, S>>) -> Result<()> {
        for op in ops {
            self.apply_op(op)?;
        }
        Ok(())
    }

    /// applies a list of operations reference, cloning each op.
    pub fn apply_ops(&mut self, ops: &[Op<V, S>]) -> Result<()> {
        self.apply_ops_into(ops.to_vec())
    }
}

impl<V: Atom, S: Site> Default for State<V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Atom, S: Site> From<(Vec<LogOp<V, S>>, Treedoc<V, S>)> for State<V, S> {
    /// creates State from tuple `(Vec<LogOp>, Treedoc)`
    fn from(e: (Vec<LogOp<V, S>>, Treedoc<V, S>)) -> Self {
        Self {
            log_op_list: e.0,
            treedoc: e.1,
        }
    }
}

impl<V: Atom, S: Site> CmRDT for State<V, S> {
    type Op = Op<V, S>;

    /// Apply an operation to a `State` instance.
    ///
    /// ops that cannot be applied are logged and dropped.
    fn apply(&mut self, op: Self::Op) {
        let id = op.id().clone();
        if let Err(e) = self.apply_op(op) {
            warn!("op on {} dropped: {}", id, e);
        }
    }
}

// See <root>/tests/treedoc.rs for tests
