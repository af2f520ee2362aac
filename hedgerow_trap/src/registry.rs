// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The trap registry: an ordered collection of active trap regions.
//!
//! Entries are kept in outer-to-inner order: for any two entries at positions
//! `i < j`, the region at `i` is never strictly contained by the region at
//! `j`. A new region is inserted immediately before the first existing entry
//! whose region does not contain it, or appended when every existing entry's
//! region encloses it. The invariant makes "closest enclosing trap" a reverse
//! linear scan.

use alloc::vec::Vec;

use crate::types::FocusTree;

/// What an active trap region demands of the focus cursor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrapMode {
    /// Focus must stay inside the region.
    Contain,
    /// Focus must stay outside the region.
    Exclude,
}

/// Handle to one registered entry, minted by
/// [`TrapRegistry::insert`] and consumed by [`TrapRegistry::release`].
///
/// Tokens are never reused, so releasing one twice is detectable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrapToken(u64);

/// One active trap region.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TrapEntry<K> {
    token: TrapToken,
    /// The trapped region.
    pub region: K,
    /// The demand this entry places on focus.
    pub mode: TrapMode,
}

impl<K> TrapEntry<K> {
    /// The release token of this entry.
    pub fn token(&self) -> TrapToken {
        self.token
    }
}

/// Ordered collection of active trap regions.
#[derive(Clone, Debug, Default)]
pub struct TrapRegistry<K> {
    entries: Vec<TrapEntry<K>>,
    next_token: u64,
}

impl<K: Copy + Eq> TrapRegistry<K> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_token: 0,
        }
    }

    /// Whether no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The entries in outer-to-inner order.
    #[must_use]
    pub fn entries(&self) -> &[TrapEntry<K>] {
        &self.entries
    }

    /// Register `region` with the given mode, preserving outer-to-inner order.
    ///
    /// O(n) in the number of entries.
    pub fn insert<T: FocusTree<K>>(&mut self, tree: &T, region: K, mode: TrapMode) -> TrapToken {
        let token = TrapToken(self.next_token);
        self.next_token += 1;
        let at = self
            .entries
            .iter()
            .position(|e| !tree.contains(e.region, region))
            .unwrap_or(self.entries.len());
        self.entries.insert(at, TrapEntry { token, region, mode });
        token
    }

    /// Remove the entry minted with `token`.
    ///
    /// Returns `false` (and mutates nothing) when no such entry exists: the
    /// token was already released or never minted. Callers report that case as
    /// a non-fatal diagnostic; it must not tear down the host UI.
    pub fn release(&mut self, token: TrapToken) -> bool {
        match self.entries.iter().position(|e| e.token == token) {
            Some(at) => {
                self.entries.remove(at);
                true
            }
            None => false,
        }
    }

    /// The innermost entry whose region contains `element`, found by scanning
    /// from the end.
    #[must_use]
    pub fn closest_enclosing<T: FocusTree<K>>(
        &self,
        tree: &T,
        element: K,
    ) -> Option<&TrapEntry<K>> {
        self.entries
            .iter()
            .rev()
            .find(|e| tree.contains(e.region, element))
    }

    /// Whether any entry is in [`TrapMode::Contain`].
    #[must_use]
    pub fn any_contain(&self) -> bool {
        self.entries.iter().any(|e| e.mode == TrapMode::Contain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TestTree;

    // Registered inner-after-outer: insertion order already matches nesting.
    #[test]
    fn nested_insert_in_order() {
        let mut tree = TestTree::new();
        let outer = tree.container(None);
        let inner = tree.container(Some(outer));

        let mut registry = TrapRegistry::new();
        let t_outer = registry.insert(&tree, outer, TrapMode::Contain);
        let t_inner = registry.insert(&tree, inner, TrapMode::Contain);

        let regions: Vec<usize> = registry.entries().iter().map(|e| e.region).collect();
        assert_eq!(regions, [outer, inner]);
        assert_ne!(t_outer, t_inner);
    }

    // Registered outer-after-inner: the outer region must end up first anyway.
    #[test]
    fn nested_insert_out_of_order() {
        let mut tree = TestTree::new();
        let outer = tree.container(None);
        let inner = tree.container(Some(outer));

        let mut registry = TrapRegistry::new();
        registry.insert(&tree, inner, TrapMode::Contain);
        registry.insert(&tree, outer, TrapMode::Contain);

        let regions: Vec<usize> = registry.entries().iter().map(|e| e.region).collect();
        assert_eq!(regions, [outer, inner]);
    }

    #[test]
    fn invariant_holds_for_arbitrary_sequences() {
        let mut tree = TestTree::new();
        let a = tree.container(None);
        let b = tree.container(Some(a));
        let c = tree.container(Some(b));
        let d = tree.container(Some(a));

        let mut registry = TrapRegistry::new();
        for &region in &[c, d, a, b] {
            registry.insert(&tree, region, TrapMode::Contain);
        }

        // No entry may be strictly contained by a later entry's region.
        let entries = registry.entries();
        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                let outer_inside_inner = tree.contains(entries[j].region, entries[i].region)
                    && entries[i].region != entries[j].region;
                assert!(
                    !outer_inside_inner,
                    "entry {i} is contained by later entry {j}"
                );
            }
        }
    }

    #[test]
    fn release_removes_exactly_one_entry() {
        let mut tree = TestTree::new();
        let region = tree.container(None);

        let mut registry = TrapRegistry::new();
        let first = registry.insert(&tree, region, TrapMode::Contain);
        let second = registry.insert(&tree, region, TrapMode::Contain);

        assert!(registry.release(first));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.entries()[0].token(), second);

        // Double release reports failure and mutates nothing.
        assert!(!registry.release(first));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn closest_enclosing_prefers_innermost() {
        let mut tree = TestTree::new();
        let outer = tree.container(None);
        let inner = tree.container(Some(outer));
        let leaf = tree.leaf(Some(inner));

        let mut registry = TrapRegistry::new();
        registry.insert(&tree, outer, TrapMode::Contain);
        registry.insert(&tree, inner, TrapMode::Exclude);

        let hit = registry.closest_enclosing(&tree, leaf).unwrap();
        assert_eq!(hit.region, inner);
        assert_eq!(hit.mode, TrapMode::Exclude);
    }
}
