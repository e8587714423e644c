// Copyright (c) 2022, MaidSafe.
// All rights reserved.
//
// This SAFE Network Software is licensed under the BSD-3-Clause license.
// Please see the LICENSE file for more details.

use log::debug;
use serde::Serialize;
use std::fmt;
use std::fmt::Debug;

use super::{Atom, Bound, Error, Node, Path, PosId, Result, Side, Site, TreeNode};

/// Implements `Treedoc`, a binary tree whose infix order is the document.
///
/// Normally this `Treedoc` struct should not be instantiated directly.
/// Instead instantiate `State` (lower-level) or `Replica` (higher-level)
/// and invoke operations on them, so that edits are logged for replay.
///
/// Each position in the tree may hold several nodes ("mini-nodes")
/// created concurrently by different sites.  Deleted nodes are kept as
/// tombstones and are never garbage-collected.
///
/// A `Treedoc` serializes but does not deserialize: it is restored from a
/// `Snapshot` via `from_records`, which rebuilds the tree with `attach`.
/// Serializing, cloning and dropping recurse once per tree level.
///
/// ```text
///               (root)               paths:   B = 00      C = 001
///              /                              A = 0       D = 1
///             A        D             document: B C A D
///            /
///           B
///            \
///             C
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Treedoc<V: Atom, S: Site> {
    root: TreeNode<V, S>,
}

impl<V: Atom, S: Site> Treedoc<V, S> {
    /// create a new, empty Treedoc
    pub fn new() -> Self {
        Self {
            root: TreeNode::new(),
        }
    }

    /// returns all tree nodes in infix order, including empty ones.
    ///
    /// uses a non-recursive walk, so a deep tree will not
    /// cause stack overflow.
    fn tree_nodes(&self) -> Vec<&TreeNode<V, S>> {
        let mut out = Vec::new();
        let mut stack: Vec<&TreeNode<V, S>> = Vec::new();
        let mut cur = Some(&self.root);
        loop {
            while let Some(t) = cur {
                stack.push(t);
                cur = t.child(Side::Left);
            }
            match stack.pop() {
                Some(t) => {
                    out.push(t);
                    cur = t.child(Side::Right);
                }
                None => break,
            }
        }
        out
    }

    /// returns the mini-node lists of all non-empty tree nodes, in infix order.
    pub fn groups(&self) -> Vec<&[Node<V, S>]> {
        self.tree_nodes()
            .into_iter()
            .map(|t| t.mini_nodes())
            .filter(|g| !g.is_empty())
            .collect()
    }

    /// returns every node, tombstones included, in document order
    pub fn nodes(&self) -> Vec<&Node<V, S>> {
        self.groups().into_iter().flatten().collect()
    }

    /// returns the values of visible nodes, in document order
    pub fn contents(&self) -> Vec<V> {
        self.nodes()
            .into_iter()
            .filter(|n| !n.is_tombstone())
            .map(|n| n.value().clone())
            .collect()
    }

    /// number of visible nodes
    pub fn visible_len(&self) -> usize {
        self.nodes().iter().filter(|n| !n.is_tombstone()).count()
    }

    /// total number of nodes, tombstones included
    pub fn num_nodes(&self) -> usize {
        self.nodes().len()
    }

    /// true if no node was ever inserted
    pub fn is_empty(&self) -> bool {
        self.groups().is_empty()
    }

    /// returns the node carrying `id`, or None.
    pub fn find(&self, id: &PosId<S>) -> Option<&Node<V, S>> {
        self.root
            .descendant(id.path().bits())
            .and_then(|t| t.mini_node(id.disambiguator()))
    }

    /// Inserts `atom` so that it becomes visible at 1-based `pos`.
    ///
    /// A `pos` of 0 or 1 inserts at the start; a `pos` past the
    /// visible length inserts at the end.  Returns the identifier
    /// generated for the new node.
    pub fn insert(&mut self, atom: V, pos: usize, site: S) -> Result<PosId<S>> {
        let path = self.new_path(pos)?;
        let id = PosId::new(path, site);
        self.attach(Node::new(atom, id.clone()))?;
        debug!("inserted {} at position {}", id, pos);
        Ok(id)
    }

    /// Deletes the atom visible at 1-based `pos` by setting its tombstone.
    ///
    /// Returns the identifier of the deleted node.
    pub fn delete(&mut self, pos: usize) -> Result<PosId<S>> {
        let visible = self.visible_len();
        let id = match pos
            .checked_sub(1)
            .and_then(|i| self.nodes().into_iter().filter(|n| !n.is_tombstone()).nth(i))
        {
            Some(n) => n.id().clone(),
            None => return Err(Error::InvalidPosition { position: pos, visible }),
        };
        self.tombstone(&id)?;
        debug!("deleted {} at position {}", id, pos);
        Ok(id)
    }

    /// sets the tombstone of the node carrying `id`.
    /// returns false if it was already deleted.
    pub fn tombstone(&mut self, id: &PosId<S>) -> Result<bool> {
        self.root
            .descendant_mut(id.path().bits())
            .and_then(|t| t.mini_node_mut(id.disambiguator()))
            .map(|n| n.set_tombstone())
            .ok_or_else(|| Error::UnknownIdentifier { id: id.to_string() })
    }

    /// Attaches `node` at the position named by its identifier.
    ///
    /// Every tree node above the new one must already exist.  This
    /// holds for identifiers produced by `insert`, and for remote ones
    /// delivered in causal order.
    pub fn attach(&mut self, node: Node<V, S>) -> Result<()> {
        let (side, parent) = match node.id().path().split_last() {
            Some((side, parent)) => (side, parent.to_vec()),
            None => {
                return Err(Error::MalformedPath {
                    id: node.id().to_string(),
                })
            }
        };
        match self.root.descendant_mut(&parent) {
            Some(t) => t.attach_child(side, node),
            None => Err(Error::MissingAncestor {
                path: Path::from(parent).to_string(),
                id: node.id().to_string(),
            }),
        }
    }

    /// Generates a path strictly between `lower` and `upper`.
    ///
    /// Nodes already between the bounds narrow the upper bound until the
    /// bounds are adjacent.  The new path then hangs left of the upper
    /// bound if that lies below the lower one, else right of the lower bound.
    pub fn new_uid(&self, lower: &Bound<S>, upper: &Bound<S>) -> Result<Path> {
        Self::uid_between(&self.groups(), lower, upper)
    }

    fn uid_between(groups: &[&[Node<V, S>]], lower: &Bound<S>, upper: &Bound<S>) -> Result<Path> {
        if !lower.before(upper) {
            return Err(Error::OrderingViolation {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }

        // no path falls strictly between two mini-nodes of one group.
        if let (Bound::Id(p), Bound::Id(f)) = (lower, upper) {
            if p.path() == f.path() {
                return Err(Error::OrderingViolation {
                    lower: lower.to_string(),
                    upper: upper.to_string(),
                });
            }
        }

        // the first mini-node of each group stands for the group.
        let mut upper = upper.clone();
        loop {
            let between = groups
                .iter()
                .map(|g| g[0].id())
                .find(|m| lower.is_before(m) && upper.is_after(m));
            match between {
                Some(m) => upper = Bound::Id(m.clone()),
                None => break,
            }
        }

        let path = match (lower, &upper) {
            (_, Bound::Id(f)) if lower.is_ancestor_of(f) => f.path().child(Side::Left),
            // p below f, or p and f in disjoint subtrees
            (Bound::Id(p), _) => p.path().child(Side::Right),
            // nothing at all between the two ends of the document
            _ => Path::root().child(Side::Left),
        };
        Ok(path)
    }

    // picks the bounds for inserting at logical position `pos`.
    fn new_path(&self, pos: usize) -> Result<Path> {
        let groups = self.groups();
        if groups.is_empty() {
            let side = if pos <= 1 { Side::Left } else { Side::Right };
            return Ok(Path::root().child(side));
        }

        let gap = if pos <= 1 {
            0
        } else {
            Self::group_holding(&groups, pos).unwrap_or(groups.len())
        };
        let lower = match gap {
            0 => Bound::Start,
            _ => Bound::Id(groups[gap - 1][0].id().clone()),
        };
        let upper = match groups.get(gap) {
            Some(g) => Bound::Id(g[0].id().clone()),
            None => Bound::End,
        };
        Self::uid_between(&groups, &lower, &upper)
    }

    // index of the group holding the `pos`-th visible node
    fn group_holding(groups: &[&[Node<V, S>]], pos: usize) -> Option<usize> {
        let mut seen = 0;
        for (i, g) in groups.iter().enumerate() {
            seen += g.iter().filter(|n| !n.is_tombstone()).count();
            if seen >= pos {
                return Some(i);
            }
        }
        None
    }
}

impl<V: Atom, S: Site> Default for Treedoc<V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Atom + Debug, S: Site> fmt::Display for Treedoc<V, S> {
    /// prints each tree node on its own line, indented by depth, in
    /// pre-order.  uses an explicit stack like `tree_nodes`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(&self.root, Path::root())];
        while let Some((t, path)) = stack.pop() {
            write!(f, "{:indent$}{}", "", path, indent = path.len() * 2)?;
            for n in t.mini_nodes() {
                let mark = if n.is_tombstone() { "x" } else { "" };
                write!(f, " {}{:?}@{:?}", mark, n.value(), n.id().disambiguator())?;
            }
            writeln!(f)?;

            // right is pushed first so the left subtree prints first.
            for side in [Side::Right, Side::Left].iter() {
                if let Some(child) = t.child(*side) {
                    stack.push((child, path.child(*side)));
                }
            }
        }
        Ok(())
    }
}

// See <root>/tests/treedoc.rs for tests
