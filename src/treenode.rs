// Copyright (c) 2022, MaidSafe.
// All rights reserved.
//
// This SAFE Network Software is licensed under the BSD-3-Clause license.
// Please see the LICENSE file for more details.

use serde::Serialize;

use super::{Atom, Error, Node, Result, Side, Site};

/// Represents one position in the binary tree.
///
/// A `TreeNode` holds every node whose path ends here ("mini-nodes",
/// created concurrently by different sites, kept sorted by disambiguator)
/// plus its owned left and right subtrees.
///
/// The root `TreeNode` of a Treedoc holds no mini-nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode<V: Atom, S: Site> {
    mini_nodes: Vec<Node<V, S>>,
    left: Option<Box<TreeNode<V, S>>>,
    right: Option<Box<TreeNode<V, S>>>,
}

impl<V: Atom, S: Site> TreeNode<V, S> {
    /// creates an empty TreeNode
    pub fn new() -> Self {
        Self {
            mini_nodes: Vec::new(),
            left: None,
            right: None,
        }
    }

    /// creates a TreeNode holding a single node
    pub fn with_node(node: Node<V, S>) -> Self {
        Self {
            mini_nodes: vec![node],
            left: None,
            right: None,
        }
    }

    /// returns the mini-nodes, sorted by disambiguator
    #[inline]
    pub fn mini_nodes(&self) -> &[Node<V, S>] {
        &self.mini_nodes
    }

    /// returns the child on `side`, if any
    pub fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    /// returns a mutable reference to the child on `side`, if any
    pub fn child_mut(&mut self, side: Side) -> Option<&mut Self> {
        match side {
            Side::Left => self.left.as_deref_mut(),
            Side::Right => self.right.as_deref_mut(),
        }
    }

    /// walks `bits` down from this tree node.
    /// returns None if any tree node along the way is missing.
    pub fn descendant(&self, bits: &[bool]) -> Option<&Self> {
        let mut cur = self;
        for bit in bits {
            cur = cur.child(Side::from(*bit))?;
        }
        Some(cur)
    }

    /// mutable version of `descendant`
    pub fn descendant_mut(&mut self, bits: &[bool]) -> Option<&mut Self> {
        let mut cur = self;
        for bit in bits {
            cur = cur.child_mut(Side::from(*bit))?;
        }
        Some(cur)
    }

    /// finds the mini-node created by `site`
    pub fn mini_node(&self, site: &S) -> Option<&Node<V, S>> {
        self.position_of(site).ok().map(|i| &self.mini_nodes[i])
    }

    /// mutable version of `mini_node`
    pub fn mini_node_mut(&mut self, site: &S) -> Option<&mut Node<V, S>> {
        match self.position_of(site) {
            Ok(i) => self.mini_nodes.get_mut(i),
            Err(_) => None,
        }
    }

    /// adds a node whose path ends at this tree node, keeping the
    /// mini-nodes sorted by disambiguator.
    pub fn insert_mini_node(&mut self, node: Node<V, S>) -> Result<()> {
        match self.position_of(node.id().disambiguator()) {
            Ok(_) => Err(Error::DuplicateIdentifier {
                id: node.id().to_string(),
            }),
            Err(i) => {
                self.mini_nodes.insert(i, node);
                Ok(())
            }
        }
    }

    /// adds a node one step below this tree node, creating the child
    /// tree node if the slot is empty.
    pub fn attach_child(&mut self, side: Side, node: Node<V, S>) -> Result<()> {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        if let Some(child) = slot.as_mut() {
            return child.insert_mini_node(node);
        }
        *slot = Some(Box::new(Self::with_node(node)));
        Ok(())
    }

    // binary search by disambiguator
    fn position_of(&self, site: &S) -> std::result::Result<usize, usize> {
        self.mini_nodes
            .binary_search_by(|n| n.id().disambiguator().cmp(site))
    }
}

impl<V: Atom, S: Site> Default for TreeNode<V, S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Path, PosId};

    fn node(value: &'static str, bits: Vec<bool>, site: u8) -> Node<&'static str, u8> {
        Node::new(value, PosId::new(Path::from(bits), site))
    }

    #[test]
    fn mini_nodes_stay_sorted_by_disambiguator() {
        let mut t = TreeNode::with_node(node("b", vec![true], 5));
        t.insert_mini_node(node("c", vec![true], 9)).unwrap();
        t.insert_mini_node(node("a", vec![true], 1)).unwrap();

        let values: Vec<_> = t.mini_nodes().iter().map(|n| *n.value()).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
        assert_eq!(t.mini_node(&9).map(|n| *n.value()), Some("c"));
        assert!(t.mini_node(&2).is_none());
    }

    #[test]
    fn duplicate_disambiguator_is_rejected() {
        let mut t = TreeNode::with_node(node("a", vec![true], 1));
        let err = t.insert_mini_node(node("x", vec![true], 1)).unwrap_err();
        assert!(matches!(err, Error::DuplicateIdentifier { .. }));
        assert_eq!(t.mini_nodes().len(), 1);
    }

    #[test]
    fn attach_child_creates_then_appends() {
        let mut root = TreeNode::new();
        root.attach_child(Side::Left, node("a", vec![false], 1)).unwrap();
        root.attach_child(Side::Left, node("b", vec![false], 2)).unwrap();
        assert!(root.child(Side::Right).is_none());
        assert_eq!(root.descendant(&[false]).map(|t| t.mini_nodes().len()), Some(2));
        assert!(root.descendant(&[false, true]).is_none());
    }
}
