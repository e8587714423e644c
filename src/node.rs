// Copyright 2020 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under the MIT license <LICENSE-MIT
// http://opensource.org/licenses/MIT> or the Modified BSD license <LICENSE-BSD
// https://opensource.org/licenses/BSD-3-Clause>, at your option. This file may not be copied,
// modified, or distributed except according to those terms. Please review the Licences for the
// specific language governing permissions and limitations relating to use of the SAFE Network
// Software.

//! Implements Node, ie one atom of content stored in a Treedoc.
//!
//! For usage/examples, see:
//!   tests/treedoc.rs

use serde::{Deserialize, Serialize};

use super::{Atom, PosId, Site};

/// Represents one atom in a Treedoc.
///
/// A node is never removed once inserted.  Deleting it only sets the
/// tombstone flag, so its `PosId` stays valid for every replica that
/// still refers to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<V: Atom, S: Site> {
    value: V,
    id: PosId<S>,
    tombstone: bool,
}

impl<V: Atom, S: Site> Node<V, S> {
    /// creates a new (visible) Node instance
    pub fn new(value: V, id: PosId<S>) -> Self {
        Self {
            value,
            id,
            tombstone: false,
        }
    }

    /// returns value reference
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// returns position identifier reference
    #[inline]
    pub fn id(&self) -> &PosId<S> {
        &self.id
    }

    /// true if the node has been deleted
    #[inline]
    pub fn is_tombstone(&self) -> bool {
        self.tombstone
    }

    /// marks the node deleted.  returns false if it already was.
    pub fn set_tombstone(&mut self) -> bool {
        let changed = !self.tombstone;
        self.tombstone = true;
        changed
    }
}
