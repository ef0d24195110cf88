//! Ancestor-chain containment for outside-click detection.
//!
//! A widget owns a root node in the host's element tree. When the host
//! reports a pointer press anywhere in the document, the widget walks the
//! target's parent chain looking for that root. The walk tolerates targets
//! that were detached between dispatch and handling: a missing parent simply
//! ends the chain.
//!
//! # Examples
//!
//! ```
//! use selectsearch_core::{contains, ArenaTree};
//!
//! let mut tree = ArenaTree::new();
//! let body = tree.insert_root();
//! let widget = tree.insert(body);
//! let item = tree.insert(widget);
//! let elsewhere = tree.insert(body);
//!
//! assert!(contains(&tree, &widget, Some(&item)));
//! assert!(!contains(&tree, &widget, Some(&elsewhere)));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parent lookup over a host element tree.
pub trait NodeTree {
    /// Handle to one node in the tree.
    type Node: Clone + PartialEq;

    /// Parent of `node`, or `None` at the document root or for detached nodes.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
}

/// Whether `target` is `root` or one of its descendants.
///
/// A `None` target (the host could not resolve the event target) is never
/// inside.
pub fn contains<T: NodeTree + ?Sized>(tree: &T, root: &T::Node, target: Option<&T::Node>) -> bool {
    let mut current = target.cloned();
    while let Some(node) = current {
        if node == *root {
            return true;
        }
        current = tree.parent(&node);
    }
    false
}

/// Identifier of a node in an [`ArenaTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// In-memory element tree.
///
/// Stands in for the document in tests and in hosts that keep their own
/// scene graph.
#[derive(Debug, Clone, Default)]
pub struct ArenaTree {
    parents: HashMap<NodeId, Option<NodeId>>,
    next_id: u32,
}

impl ArenaTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node without a parent.
    pub fn insert_root(&mut self) -> NodeId {
        self.alloc(None)
    }

    /// Insert a child of `parent`.
    pub fn insert(&mut self, parent: NodeId) -> NodeId {
        self.alloc(Some(parent))
    }

    /// Detach `node` from its parent. Its descendants keep pointing at it,
    /// so they become part of a detached chain.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.parents.get_mut(&node) {
            *parent = None;
        }
    }

    /// Remove `node` entirely. Children are left dangling.
    pub fn remove(&mut self, node: NodeId) {
        self.parents.remove(&node);
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Check if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    fn alloc(&mut self, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.parents.insert(id, parent);
        id
    }
}

impl NodeTree for ArenaTree {
    type Node = NodeId;

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.parents.get(node).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> (ArenaTree, NodeId, NodeId, NodeId) {
        let mut tree = ArenaTree::new();
        let body = tree.insert_root();
        let container = tree.insert(body);
        let sibling = tree.insert(body);
        (tree, body, container, sibling)
    }

    #[test]
    fn test_root_contains_itself() {
        let (tree, _, container, _) = document();
        assert!(contains(&tree, &container, Some(&container)));
    }

    #[test]
    fn test_deep_descendant_is_inside() {
        let (mut tree, _, container, _) = document();
        let modal = tree.insert(container);
        let list = tree.insert(modal);
        let item = tree.insert(list);
        assert!(contains(&tree, &container, Some(&item)));
    }

    #[test]
    fn test_sibling_is_outside() {
        let (tree, _, container, sibling) = document();
        assert!(!contains(&tree, &container, Some(&sibling)));
    }

    #[test]
    fn test_ancestor_is_outside() {
        let (tree, body, container, _) = document();
        assert!(!contains(&tree, &container, Some(&body)));
    }

    #[test]
    fn test_missing_target_is_outside() {
        let (tree, _, container, _) = document();
        assert!(!contains(&tree, &container, None));
    }

    #[test]
    fn test_detached_target_is_outside() {
        let (mut tree, _, container, _) = document();
        let item = tree.insert(container);
        let label = tree.insert(item);
        tree.detach(item);
        assert!(!contains(&tree, &container, Some(&label)));
    }

    #[test]
    fn test_removed_parent_ends_chain() {
        let (mut tree, _, container, _) = document();
        let item = tree.insert(container);
        let label = tree.insert(item);
        tree.remove(item);
        assert!(!contains(&tree, &container, Some(&label)));
    }

    #[test]
    fn test_unknown_node_is_outside() {
        let (tree, _, container, _) = document();
        assert!(!contains(&tree, &container, Some(&NodeId(999))));
    }

    #[test]
    fn test_arena_len() {
        let (tree, ..) = document();
        assert_eq!(tree.len(), 3);
        assert!(!tree.is_empty());
        assert!(ArenaTree::new().is_empty());
    }
}
