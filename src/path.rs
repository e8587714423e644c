// Copyright (c) 2022, MaidSafe.
// All rights reserved.
//
// This SAFE Network Software is licensed under the BSD-3-Clause license.
// Please see the LICENSE file for more details.

//! Implements Path, the position of a tree node relative to the root.

use crdts::quickcheck::{Arbitrary, Gen};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which child of a tree node a path step descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// the left child, stored as `false`
    Left,
    /// the right child, stored as `true`
    Right,
}

impl From<bool> for Side {
    fn from(bit: bool) -> Self {
        if bit {
            Side::Right
        } else {
            Side::Left
        }
    }
}

impl From<Side> for bool {
    fn from(side: Side) -> Self {
        side == Side::Right
    }
}

/// A bitstring naming a position in the binary tree, read from the root.
///
/// `false` descends left and `true` descends right.  The root is the
/// empty path.  Once assigned to a node a path never changes.
///
/// Equality (`equals`) is the derived `PartialEq`: same length and the
/// same bit at every position.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path(Vec<bool>);

impl Path {
    /// returns the root (empty) path
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// true for the root path
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// number of steps from the root
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// same as `is_root()`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// returns the raw bits
    #[inline]
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    /// returns the step taken at depth `i`, if the path is that long
    #[inline]
    pub fn side(&self, i: usize) -> Option<Side> {
        self.0.get(i).map(|b| Side::from(*b))
    }

    /// returns a new path one step below this one
    pub fn child(&self, side: Side) -> Self {
        let mut bits = self.0.clone();
        bits.push(side.into());
        Self(bits)
    }

    /// returns the path of the parent tree node, or None for the root
    pub fn parent(&self) -> Option<Self> {
        self.split_last().map(|(_, rest)| Self(rest.to_vec()))
    }

    /// splits off the last step: (last step, path to the parent)
    pub fn split_last(&self) -> Option<(Side, &[bool])> {
        self.0
            .split_last()
            .map(|(last, rest)| (Side::from(*last), rest))
    }

    /// true if `self` is the root, or `self` and `other` agree on every
    /// bit of `self`.  A path is a prefix of itself.
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.common_prefix(other) == self.len()
    }

    /// length of the longest shared prefix, ie the first index at which
    /// the paths disagree, or the shorter length if one is a prefix of the other.
    pub fn common_prefix(&self, other: &Self) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }
}

impl From<Vec<bool>> for Path {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "ε");
        }
        for bit in &self.0 {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

// Generate short arbitrary paths, so that generated ids share prefixes often.
impl Arbitrary for Path {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let len: usize = g.gen_range(0, 5);
        Self((0..len).map(|_| bool::arbitrary(g)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.parent().into_iter())
    }
}
