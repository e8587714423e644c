// Copyright 2020 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under the MIT license <LICENSE-MIT
// http://opensource.org/licenses/MIT> or the Modified BSD license <LICENSE-BSD
// https://opensource.org/licenses/BSD-3-Clause>, at your option. This file may not be copied,
// modified, or distributed except according to those terms. Please review the Licences for the
// specific language governing permissions and limitations relating to use of the SAFE Network
// Software.

//! Implements the Treedoc sequence Conflict-Free Replicated Data Type (CRDT).
//!
//! For usage/examples, see:
//!   tests/treedoc.rs
//!   tests/article.rs
//!
//! A Treedoc stores a document (here: the paragraphs of a wiki article)
//! as a binary tree.  Each atom is identified by its path from the root
//! plus the site that created it, and the infix order of the tree is the
//! order of the document.  New identifiers are generated between two
//! neighbours without any coordination, so replicas can edit concurrently
//! and still converge.  Deleted atoms are kept as tombstones.
//!
//! The design follows the Treedoc CRDT described in:
//!
//! "A commutative replicated data type for cooperative editing"
//! by Nuno Preguiça, et al. (ICDCS 2009).
#![deny(missing_docs)]

/// This module contains `Atom`.
pub mod atom;

/// This module contains `Site`.
pub mod site;

/// This module contains `Error`.
pub mod error;

/// This module contains `Path`.
pub mod path;

/// This module contains `PosId`.
pub mod posid;

/// This module contains `Node`.
pub mod node;

/// This module contains `TreeNode`.
pub mod treenode;

/// This module contains a Treedoc.
pub mod treedoc;

/// This module contains Op.
pub mod op;

/// This module contains `LogOp`.
pub mod logop;

/// This module contains State.
pub mod state;

/// This module contains `Replica`.
pub mod replica;

/// This module contains `Snapshot` and `Record`.
pub mod snapshot;

/// This module contains `Article`.
pub mod article;

pub use self::{
    article::{Article, Paragraph, SiteId, Transport},
    atom::Atom,
    error::{Error, Result},
    logop::LogOp,
    node::Node,
    op::{Op, OpKind},
    path::{Path, Side},
    posid::{Bound, PosId, Relation},
    replica::Replica,
    site::Site,
    snapshot::{Record, Snapshot},
    state::State,
    treedoc::Treedoc,
    treenode::TreeNode,
};
