// Copyright (c) 2022, MaidSafe.
// All rights reserved.
//
// This SAFE Network Software is licensed under the BSD-3-Clause license.
// Please see the LICENSE file for more details.

use thiserror::Error;

/// Errors returned by Treedoc operations.
///
/// Every failing operation leaves the tree exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// logical position outside the visible content
    #[error("Invalid position {position}: {visible} visible atoms")]
    InvalidPosition {
        /// the 1-based position requested
        position: usize,
        /// number of visible atoms at the time of the call
        visible: usize,
    },

    /// bounds passed to identifier generation are not strictly ordered
    #[error("Position identifiers out of order: {lower} is not before {upper}")]
    OrderingViolation {
        /// lower bound
        lower: String,
        /// upper bound
        upper: String,
    },

    /// a node with the same path and disambiguator is already in the tree
    #[error("Duplicate identifier: {id}")]
    DuplicateIdentifier {
        /// the offending position identifier
        id: String,
    },

    /// the root path cannot hold a node
    #[error("Malformed path for {id}: the root path cannot hold a node")]
    MalformedPath {
        /// the offending position identifier
        id: String,
    },

    /// a tree node on the way to the insertion point does not exist
    #[error("Missing ancestor {path} for {id}")]
    MissingAncestor {
        /// path of the absent tree node
        path: String,
        /// the position identifier being attached
        id: String,
    },

    /// no node carries the given position identifier
    #[error("Unknown identifier: {id}")]
    UnknownIdentifier {
        /// the position identifier looked up
        id: String,
    },

    /// a transport implementation failed
    #[error("Transport failed: {reason}")]
    Transport {
        /// reason reported by the transport
        reason: String,
    },
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
