// Copyright 2020 MaidSafe.net limited.
//
// This SAFE Network Software is licensed to you under the MIT license <LICENSE-MIT
// http://opensource.org/licenses/MIT> or the Modified BSD license <LICENSE-BSD
// https://opensource.org/licenses/BSD-3-Clause>, at your option. This file may not be copied,
// modified, or distributed except according to those terms. Please review the Licences for the
// specific language governing permissions and limitations relating to use of the SAFE Network
// Software.

//! Implements Atom, a trait for the content stored in each Treedoc node.
//!
//! For a wiki article an atom is one paragraph of text, but any
//! cloneable value will do.

/// Atom trait. Atoms are application-defined pieces of content that are
/// stored, one per node, in the Treedoc.
pub trait Atom: Clone {}
impl<V: Clone> Atom for V {}
