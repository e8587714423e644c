// Copyright (c) 2022, MaidSafe.
// All rights reserved.
//
// This SAFE Network Software is licensed under the BSD-3-Clause license.
// Please see the LICENSE file for more details.

use serde::Serialize;

use super::{Atom, LogOp, Op, Result, Site, Snapshot, State, Treedoc};
use log::debug;

/// `Replica` holds Treedoc `State` plus the site id of this peer.
///
/// `Replica` is a higher-level interface to the Treedoc CRDT and is tied
/// to a particular site.  Local edits are stamped with that site and
/// logged until acknowledged.
///
/// `State` is a lower-level interface to the Treedoc CRDT and is not
/// tied to any site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replica<V: Atom, S: Site> {
    state: State<V, S>, // Treedoc state
    site: S,            // disambiguator for nodes created here.
}

impl<V: Atom, S: Site> Replica<V, S> {
    /// returns new Replica
    pub fn new(site: S) -> Self {
        Self {
            state: State::new(),
            site,
        }
    }

    /// restores a Replica for `site` from a snapshot
    pub fn from_snapshot(site: S, snapshot: Snapshot<V, S>) -> Result<Self> {
        Ok(Self {
            state: State::from_snapshot(snapshot)?,
            site,
        })
    }

    /// Returns site id for this replica
    #[inline]
    pub fn site(&self) -> &S {
        &self.site
    }

    /// Returns Treedoc State reference
    #[inline]
    pub fn state(&self) -> &State<V, S> {
        &self.state
    }

    /// Returns Treedoc reference
    #[inline]
    pub fn treedoc(&self) -> &Treedoc<V, S> {
        self.state.treedoc()
    }

    /// Returns the visible contents
    pub fn contents(&self) -> Vec<V> {
        self.state.contents()
    }

    /// Returns local edits not yet acknowledged, oldest first
    #[inline]
    pub fn log(&self) -> &[LogOp<V, S>] {
        self.state.log()
    }

    /// Inserts `atom` at 1-based logical position `pos`.
    ///
    /// Returns the op to send to other replicas.
    pub fn insert(&mut self, atom: V, pos: usize) -> Result<Op<V, S>> {
        self.state.insert(atom, pos, self.site.clone())
    }

    /// Deletes the atom at 1-based logical position `pos`.
    ///
    /// Returns the op to send to other replicas.
    pub fn delete(&mut self, pos: usize) -> Result<Op<V, S>> {
        self.state.delete(pos, self.site.clone())
    }

    /// Applies single operation received from another replica
    pub fn apply_op(&mut self, op: Op<V, S>) -> Result<()> {
        self.state.apply_op(op)
    }

    /// Applies list of operations
    pub fn apply_ops(&mut self, ops: Vec<Op<V, S>>) -> Result<()> {
        self.state.apply_ops_into(ops)
    }

    /// Applies list of operations without taking ownership
    pub fn apply_ops_byref(&mut self, ops: &[Op<V, S>]) -> Result<()> {
        self.state.apply_ops(ops)
    }

    /// applies op from a log.  useful for log replay.
    pub fn apply_log_op(&mut self, log_op: LogOp<V, S>) -> Result<()> {
        self.apply_op(log_op.into())
    }

    /// applies ops from a log.  useful for log replay.
    pub fn apply_log_ops(&mut self, log_ops: Vec<LogOp<V, S>>) -> Result<()> {
        for log_op in log_ops {
            self.apply_log_op(log_op)?;
        }
        Ok(())
    }

    /// drops the `count` oldest log entries after a successful push.
    /// returns the number dropped.
    pub fn acknowledge(&mut self, count: usize) -> usize {
        let dropped = self.state.acknowledge(count);
        debug!(
            "{:?}: {} log entries acknowledged, {} pending",
            self.site,
            dropped,
            self.state.log().len()
        );
        dropped
    }

    /// flattens this replica into a snapshot
    pub fn snapshot(&self) -> Snapshot<V, S> {
        self.state.snapshot()
    }
}
