// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree adapter: drive containment from a [`hedgerow_tree::Tree`].
//!
//! [`FocusTree`] is implemented directly on [`Tree`], mapping
//! [`NodeFlags`] and tab indexes onto [`FocusCandidate`] values in document
//! (depth-first) order. [`FocusDocument`] wraps a tree together with the live
//! focus cursor so it can also serve as the [`FocusHost`] for actuation.
//!
//! ## Example
//!
//! ```
//! use hedgerow_tree::{Element, NodeFlags, Tree};
//! use hedgerow_trap::adapters::tree::FocusDocument;
//! use hedgerow_trap::{FocusTrap, Verdict};
//!
//! let mut tree = Tree::new();
//! let root = tree.insert(None, Element::default());
//! let dialog = tree.insert(Some(root), Element::default());
//! let ok = tree.insert(
//!     Some(dialog),
//!     Element {
//!         flags: NodeFlags::FOCUSABLE | NodeFlags::BUTTON,
//!         ..Element::default()
//!     },
//! );
//! let stray = tree.insert(
//!     Some(root),
//!     Element {
//!         flags: NodeFlags::FOCUSABLE,
//!         ..Element::default()
//!     },
//! );
//!
//! let mut doc = FocusDocument::new(tree);
//! let mut trap = FocusTrap::new();
//! let token = trap.contain(&doc, dialog);
//!
//! // A focus change escaping the dialog is pulled back in and applied.
//! assert_eq!(trap.resolve_on(&mut doc, stray), Verdict::Redirect(ok));
//! trap.release(token);
//! ```

use alloc::vec::Vec;

use hashbrown::HashSet;
use hedgerow_tree::{NodeFlags, NodeId, Tree};

use crate::types::{ControlKind, FocusCandidate, FocusHost, FocusTree};

fn candidate_of(tree: &Tree, id: NodeId) -> Option<FocusCandidate<NodeId>> {
    let element = tree.element(id)?;
    let focusable = element.flags.contains(NodeFlags::FOCUSABLE) || element.tab_index.is_some();
    if !focusable {
        return None;
    }
    let kind = if element.flags.contains(NodeFlags::FIELD) {
        ControlKind::Field
    } else if element.flags.contains(NodeFlags::BUTTON) {
        ControlKind::Button
    } else {
        ControlKind::Other
    };
    Some(FocusCandidate {
        id,
        kind,
        tab_index: element.tab_index,
        disabled: element.flags.contains(NodeFlags::DISABLED),
        autofocus: element.flags.contains(NodeFlags::AUTOFOCUS),
    })
}

impl FocusTree<NodeId> for Tree {
    fn contains(&self, region: NodeId, element: NodeId) -> bool {
        Tree::contains(self, region, element)
    }

    fn parent_of(&self, element: NodeId) -> Option<NodeId> {
        Tree::parent_of(self, element)
    }

    fn focusables_in(&self, region: NodeId, out: &mut Vec<FocusCandidate<NodeId>>) {
        out.clear();
        if !self.is_alive(region) {
            return;
        }
        // Depth-first with an explicit stack; children pushed in reverse so
        // the visit order matches document order.
        let mut stack: Vec<NodeId> = Vec::new();
        stack.extend(self.children_of(region).iter().rev());
        while let Some(id) = stack.pop() {
            if let Some(candidate) = candidate_of(self, id) {
                out.push(candidate);
            }
            stack.extend(self.children_of(id).iter().rev());
        }
    }
}

/// A tree paired with the live focus cursor.
///
/// This is the host-side object containment operates on: structure queries
/// come from the tree, and [`FocusHost`] actuation mutates the cursor. It can
/// also suppress priority default focus per region, the host-side switch the
/// out-of-scope enable/disable layer drives: candidates inside a suppressed
/// region lose their autofocus marker, so autofocus-only queries skip them
/// while containment is unaffected.
#[derive(Clone, Debug, Default)]
pub struct FocusDocument {
    /// The element tree.
    pub tree: Tree,
    active: Option<NodeId>,
    selected: Option<NodeId>,
    autofocus_suppressed: HashSet<NodeId>,
}

impl FocusDocument {
    /// Wrap a tree with an empty focus cursor.
    #[must_use]
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            active: None,
            selected: None,
            autofocus_suppressed: HashSet::new(),
        }
    }

    /// The currently focused node, if any.
    #[must_use]
    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    /// The node whose contents were last selected via
    /// [`FocusHost::select_contents`], if focus has not moved since.
    #[must_use]
    pub fn selection(&self) -> Option<NodeId> {
        self.selected
    }

    /// Toggle autofocus suppression for the subtree rooted at `region`.
    pub fn suppress_autofocus(&mut self, region: NodeId, suppressed: bool) {
        if suppressed {
            self.autofocus_suppressed.insert(region);
        } else {
            self.autofocus_suppressed.remove(&region);
        }
    }

    fn autofocus_suppressed_for(&self, region: NodeId, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if self.autofocus_suppressed.contains(&current) {
                return true;
            }
            if current == region {
                return false;
            }
            match Tree::parent_of(&self.tree, current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }
}

impl FocusTree<NodeId> for FocusDocument {
    fn contains(&self, region: NodeId, element: NodeId) -> bool {
        self.tree.contains(region, element)
    }

    fn parent_of(&self, element: NodeId) -> Option<NodeId> {
        Tree::parent_of(&self.tree, element)
    }

    fn focusables_in(&self, region: NodeId, out: &mut Vec<FocusCandidate<NodeId>>) {
        FocusTree::focusables_in(&self.tree, region, out);
        if self.autofocus_suppressed.is_empty() {
            return;
        }
        for candidate in out.iter_mut() {
            if candidate.autofocus && self.autofocus_suppressed_for(region, candidate.id) {
                candidate.autofocus = false;
            }
        }
    }
}

impl FocusHost<NodeId> for FocusDocument {
    fn active(&self) -> Option<NodeId> {
        self.active
    }

    fn focus(&mut self, element: NodeId) {
        self.active = Some(element);
        self.selected = None;
    }

    fn blur(&mut self) {
        self.active = None;
    }

    fn select_contents(&mut self, element: NodeId) {
        self.selected = Some(element);
    }
}
