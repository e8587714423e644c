// Copyright 2020 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under the MIT license <LICENSE-MIT
// http://opensource.org/licenses/MIT> or the Modified BSD license <LICENSE-BSD
// https://opensource.org/licenses/BSD-3-Clause>, at your option. This file may not be copied,
// modified, or distributed except according to those terms. Please review the Licences for the
// specific language governing permissions and limitations relating to use of the SAFE Network
// Software.

//! Implements Op, the replayable form of an edit.
//!
//! Local edits address atoms by logical position, which means different
//! things on different replicas.  An Op instead carries the position
//! identifier the edit resolved to, so replaying it anywhere touches
//! exactly the same node.
//!
//! Ops are applied via State::apply_op()

use serde::{Deserialize, Serialize};

use super::{Atom, LogOp, PosId, Site};

/// The kind of an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    /// a node was inserted
    Insert,
    /// a node was tombstoned
    Delete,
}

/// An edit, addressed by position identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op<V: Atom, S: Site> {
    /// create the node `id` holding `value`
    Insert {
        /// identifier of the new node
        id: PosId<S>,
        /// content of the new node
        value: V,
    },
    /// tombstone the node `id`
    Delete {
        /// identifier of the deleted node
        id: PosId<S>,
    },
}

impl<V: Atom, S: Site> Op<V, S> {
    /// returns the identifier this op touches
    pub fn id(&self) -> &PosId<S> {
        match self {
            Op::Insert { id, .. } | Op::Delete { id } => id,
        }
    }

    /// returns the inserted value, None for a delete
    pub fn value(&self) -> Option<&V> {
        match self {
            Op::Insert { value, .. } => Some(value),
            Op::Delete { .. } => None,
        }
    }

    /// returns the op kind
    pub fn kind(&self) -> OpKind {
        match self {
            Op::Insert { .. } => OpKind::Insert,
            Op::Delete { .. } => OpKind::Delete,
        }
    }
}

impl<V: Atom, S: Site> From<LogOp<V, S>> for Op<V, S> {
    /// creates Op from a LogOp
    fn from(l: LogOp<V, S>) -> Self {
        l.op_into()
    }
}
