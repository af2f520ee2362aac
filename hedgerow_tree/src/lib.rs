// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hedgerow_tree --heading-base-level=0

//! Hedgerow Tree: a minimal element tree for focus management.
//!
//! This crate represents a hierarchy of UI elements with just enough metadata
//! to answer the questions focus containment asks: which elements can receive
//! focus, how elements nest, and what the document order of a subtree is.
//!
//! - [`Tree`]: container managing nodes, liveness, and structure queries.
//! - [`Element`]: per-node focus metadata (flags and tab index).
//! - [`NodeFlags`]: focusability, disablement, and control-class flags.
//! - [`NodeId`]: generational handle of a node.
//!
//! Key operations:
//! - [`Tree::insert`] → [`NodeId`], [`Tree::remove`] (frees the whole subtree).
//! - [`Tree::contains`]: the ancestor-or-self containment predicate.
//! - [`Tree::next_depth_first`] / [`Tree::prev_depth_first`]: document-order
//!   traversal within one root's subtree.
//!
//! ## Not a layout engine
//!
//! There is no geometry here: no bounds, transforms, z-order, or hit testing.
//! Containment decisions are purely structural, and hosts that need spatial
//! focus policies should pair this tree with their own geometry layer.
//!
//! ## Minimal example
//!
//! ```
//! use hedgerow_tree::{Element, NodeFlags, Tree};
//!
//! let mut tree = Tree::new();
//! let root = tree.insert(None, Element::default());
//! let button = tree.insert(
//!     Some(root),
//!     Element {
//!         flags: NodeFlags::FOCUSABLE | NodeFlags::BUTTON,
//!         ..Element::default()
//!     },
//! );
//!
//! assert!(tree.contains(root, button));
//! assert_eq!(tree.next_depth_first(root), Some(button));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::Tree;
pub use types::{Element, NodeFlags, NodeId};
