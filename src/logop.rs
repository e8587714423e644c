// Copyright (c) 2022, MaidSafe.
// All rights reserved.
//
// This SAFE Network Software is licensed under the BSD-3-Clause license.
// Please see the LICENSE file for more details.

use serde::{Deserialize, Serialize};

use super::{Atom, Op, OpKind, PosId, Site};

/// Implements `LogOp`, an operation log entry recorded by `State`
/// for every successful local edit.
///
/// It records enough to replay the edit elsewhere: the atom (for an
/// insert), the logical position and site given at call time, the kind
/// of edit and the identifier it resolved to.  Only the `Op` is needed
/// to replay; the position and site are kept for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogOp<V: Atom, S: Site> {
    // the resolved operation.
    op: Op<V, S>,

    // 1-based logical position passed to insert/delete.
    position: usize,

    // site that performed the edit.
    site: S,
}

impl<V: Atom, S: Site> LogOp<V, S> {
    /// create a new instance of `LogOp`
    pub fn new(op: Op<V, S>, position: usize, site: S) -> Self {
        Self { op, position, site }
    }

    /// returns `op` reference
    #[inline]
    pub fn op(&self) -> &Op<V, S> {
        &self.op
    }

    /// returns the inserted atom, None for a delete
    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.op.value()
    }

    /// returns the logical position given at call time
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// returns `site` reference
    #[inline]
    pub fn site(&self) -> &S {
        &self.site
    }

    /// returns the op kind
    #[inline]
    pub fn kind(&self) -> OpKind {
        self.op.kind()
    }

    /// returns the resulting position identifier
    #[inline]
    pub fn id(&self) -> &PosId<S> {
        self.op.id()
    }

    /// converts `LogOp` into an `Op`
    #[inline]
    pub fn op_into(self) -> Op<V, S> {
        self.op
    }
}
