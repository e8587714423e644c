// Copyright (c) 2022, MaidSafe.
// All rights reserved.
//
// This SAFE Network Software is licensed under the BSD-3-Clause license.
// Please see the LICENSE file for more details.

use crdts::Actor;
use std::fmt::Debug;

/// `Site` trait. A `Site` identifies the replica that created a node and is
/// used as the disambiguator between nodes sharing one path.
pub trait Site: Actor + Debug {}
impl<S: Actor + Debug> Site for S {}
