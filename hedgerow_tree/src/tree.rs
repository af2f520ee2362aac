// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element tree: slot storage, structure queries, and traversal.

use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::types::{Element, NodeFlags, NodeId};

const NO_CHILDREN: &[NodeId] = &[];

#[derive(Clone, Debug)]
struct NodeData {
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    element: Element,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    data: Option<NodeData>,
}

/// A hierarchy of elements with generational handles.
///
/// The tree tracks parent/child structure and per-node [`Element`] metadata.
/// Document order is depth-first pre-order: a parent precedes its children,
/// and siblings appear in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    roots: Vec<NodeId>,
}

impl Tree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under `parent`, or as a new root when `parent` is `None`.
    ///
    /// The new node is appended after its siblings, i.e. it comes last among
    /// them in document order. A stale `parent` is treated as `None`.
    pub fn insert(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let parent = parent.filter(|&p| self.is_alive(p));
        let id = self.alloc(NodeData {
            parent,
            children: SmallVec::new(),
            element,
        });
        match parent {
            Some(p) => {
                // Alive per the filter above.
                self.data_mut(p).children.push(id);
            }
            None => self.roots.push(id),
        }
        id
    }

    /// Remove a node and its entire subtree.
    ///
    /// Returns `false` (and does nothing) when `id` is stale.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        match self.data(id).parent {
            Some(p) => {
                let children = &mut self.data_mut(p).children;
                children.retain(|c| *c != id);
            }
            None => self.roots.retain(|&r| r != id),
        }
        // Free the subtree with an explicit stack; ids become stale once the
        // slot generation no longer matches.
        let mut stack: Vec<NodeId> = Vec::new();
        stack.push(id);
        while let Some(node) = stack.pop() {
            if let Some(data) = self.slots[node.idx()].data.take() {
                stack.extend(data.children);
                self.free.push(node.0);
            }
        }
        true
    }

    /// Whether `id` refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.slots
            .get(id.idx())
            .is_some_and(|s| s.generation == id.1 && s.data.is_some())
    }

    /// The parent of a node, or `None` for roots and stale ids.
    #[must_use]
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        self.data(id).parent
    }

    /// The children of a node in document order. Empty for stale ids.
    #[must_use]
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        if !self.is_alive(id) {
            return NO_CHILDREN;
        }
        &self.data(id).children
    }

    /// The root of the subtree containing `id`.
    #[must_use]
    pub fn root_of(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        let mut node = id;
        while let Some(parent) = self.data(node).parent {
            node = parent;
        }
        Some(node)
    }

    /// The roots of the tree in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The element metadata of a node.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        if !self.is_alive(id) {
            return None;
        }
        Some(&self.data(id).element)
    }

    /// Mutable element metadata of a node.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        if !self.is_alive(id) {
            return None;
        }
        Some(&mut self.data_mut(id).element)
    }

    /// The flags of a node.
    #[must_use]
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.element(id).map(|e| e.flags)
    }

    /// Replace the flags of a node. Returns `false` for stale ids.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) -> bool {
        match self.element_mut(id) {
            Some(element) => {
                element.flags = flags;
                true
            }
            None => false,
        }
    }

    /// Ancestor-or-self containment: whether `node` is inside the subtree
    /// rooted at `ancestor`. A node contains itself.
    ///
    /// Returns `false` when either id is stale.
    #[must_use]
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        if !self.is_alive(ancestor) || !self.is_alive(node) {
            return false;
        }
        let mut current = node;
        loop {
            if current == ancestor {
                return true;
            }
            match self.data(current).parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// The next node in depth-first (document) order, staying within the
    /// subtree of the node's root. `None` at the end of the subtree or for
    /// stale ids.
    #[must_use]
    pub fn next_depth_first(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        if let Some(&first) = self.data(id).children.first() {
            return Some(first);
        }
        // No children: go to the next sibling, climbing up as needed.
        let mut node = id;
        loop {
            let parent = self.data(node).parent?;
            let siblings = &self.data(parent).children;
            let at = siblings.iter().position(|&c| c == node)?;
            if let Some(&next) = siblings.get(at + 1) {
                return Some(next);
            }
            node = parent;
        }
    }

    /// The previous node in depth-first (document) order, staying within the
    /// subtree of the node's root. `None` at the subtree root or for stale ids.
    #[must_use]
    pub fn prev_depth_first(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        let parent = self.data(id).parent?;
        let siblings = &self.data(parent).children;
        let at = siblings.iter().position(|&c| c == id)?;
        if at == 0 {
            return Some(parent);
        }
        let mut node = siblings[at - 1];
        while let Some(&last) = self.data(node).children.last() {
            node = last;
        }
        Some(node)
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                slot.generation += 1;
                slot.data = Some(data);
                NodeId::new(idx, slot.generation)
            }
            None => {
                let idx = u32::try_from(self.slots.len()).expect("tree slot index overflow");
                self.slots.push(Slot {
                    generation: 1,
                    data: Some(data),
                });
                NodeId::new(idx, 1)
            }
        }
    }

    fn data(&self, id: NodeId) -> &NodeData {
        self.slots[id.idx()]
            .data
            .as_ref()
            .expect("liveness checked by caller")
    }

    fn data_mut(&mut self, id: NodeId) -> &mut NodeData {
        self.slots[id.idx()]
            .data
            .as_mut()
            .expect("liveness checked by caller")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focusable() -> Element {
        Element {
            flags: NodeFlags::FOCUSABLE,
            ..Element::default()
        }
    }

    #[test]
    fn insert_and_structure() {
        let mut tree = Tree::new();
        let root = tree.insert(None, Element::default());
        let a = tree.insert(Some(root), focusable());
        let b = tree.insert(Some(root), focusable());

        assert_eq!(tree.roots(), &[root]);
        assert_eq!(tree.children_of(root), &[a, b]);
        assert_eq!(tree.parent_of(a), Some(root));
        assert_eq!(tree.parent_of(root), None);
        assert_eq!(tree.root_of(b), Some(root));
    }

    #[test]
    fn remove_frees_subtree() {
        let mut tree = Tree::new();
        let root = tree.insert(None, Element::default());
        let a = tree.insert(Some(root), Element::default());
        let a1 = tree.insert(Some(a), focusable());

        assert!(tree.remove(a));
        assert!(!tree.is_alive(a));
        assert!(!tree.is_alive(a1));
        assert!(tree.is_alive(root));
        assert!(tree.children_of(root).is_empty());

        // Double remove is a no-op.
        assert!(!tree.remove(a));
    }

    #[test]
    fn slot_reuse_bumps_generation() {
        let mut tree = Tree::new();
        let root = tree.insert(None, Element::default());
        let a = tree.insert(Some(root), focusable());
        tree.remove(a);

        let b = tree.insert(Some(root), focusable());
        // The slot is reused, but the old handle stays stale.
        assert_ne!(a, b);
        assert!(!tree.is_alive(a));
        assert!(tree.is_alive(b));
        assert!(tree.element(a).is_none());
    }

    #[test]
    fn contains_is_inclusive() {
        let mut tree = Tree::new();
        let root = tree.insert(None, Element::default());
        let a = tree.insert(Some(root), Element::default());
        let a1 = tree.insert(Some(a), focusable());
        let b = tree.insert(Some(root), focusable());

        assert!(tree.contains(root, a1));
        assert!(tree.contains(a, a1));
        assert!(tree.contains(a, a));
        assert!(!tree.contains(a, b));
        assert!(!tree.contains(a1, a));
    }

    #[test]
    fn depth_first_traversal() {
        let mut tree = Tree::new();
        // root -> [a -> [a1, a2], b]
        let root = tree.insert(None, Element::default());
        let a = tree.insert(Some(root), Element::default());
        let a1 = tree.insert(Some(a), focusable());
        let a2 = tree.insert(Some(a), focusable());
        let b = tree.insert(Some(root), focusable());

        assert_eq!(tree.next_depth_first(root), Some(a));
        assert_eq!(tree.next_depth_first(a), Some(a1));
        assert_eq!(tree.next_depth_first(a1), Some(a2));
        assert_eq!(tree.next_depth_first(a2), Some(b));
        assert_eq!(tree.next_depth_first(b), None);

        assert_eq!(tree.prev_depth_first(b), Some(a2));
        assert_eq!(tree.prev_depth_first(a2), Some(a1));
        assert_eq!(tree.prev_depth_first(a1), Some(a));
        assert_eq!(tree.prev_depth_first(a), Some(root));
        assert_eq!(tree.prev_depth_first(root), None);
    }

    #[test]
    fn traversal_stays_within_one_root() {
        let mut tree = Tree::new();
        let root1 = tree.insert(None, Element::default());
        let leaf1 = tree.insert(Some(root1), focusable());
        let root2 = tree.insert(None, Element::default());

        assert_eq!(tree.next_depth_first(leaf1), None);
        assert_eq!(tree.prev_depth_first(root2), None);
    }

    #[test]
    fn stale_parent_inserts_as_root() {
        let mut tree = Tree::new();
        let root = tree.insert(None, Element::default());
        tree.remove(root);

        let orphan = tree.insert(Some(root), focusable());
        assert_eq!(tree.parent_of(orphan), None);
        assert_eq!(tree.roots(), &[orphan]);
    }
}
