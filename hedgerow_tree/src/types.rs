// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the element tree: node identifiers, flags, and focus metadata.

/// Identifier for a node in the tree.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check whether a `NodeId` still refers to a
/// live node. Stale `NodeId`s never alias a different live node because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling focus eligibility.
    ///
    /// `FOCUSABLE` is the master gate: a node participates in focus queries when
    /// it carries this flag or an explicit tab index. `FIELD` and `BUTTON`
    /// classify interactive controls for class-based query filtering; they do
    /// not imply `FOCUSABLE` on their own.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is inherently able to receive focus (an interactive control).
        const FOCUSABLE = 0b0000_0001;
        /// Node is disabled and must be skipped by focus queries.
        const DISABLED  = 0b0000_0010;
        /// Node is explicitly marked for priority default focus.
        const AUTOFOCUS = 0b0000_0100;
        /// Node is a text-entry style control.
        const FIELD     = 0b0000_1000;
        /// Node is a button-style control.
        const BUTTON    = 0b0001_0000;
    }
}

/// Focus metadata for a node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    /// Focus eligibility flags.
    pub flags: NodeFlags,
    /// Explicit tab index. `Some(t)` with `t < 0` removes the node from
    /// sequential focus; `Some(t)` with `t >= 0` makes the node focusable even
    /// without [`NodeFlags::FOCUSABLE`].
    pub tab_index: Option<i16>,
}
