// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared test fixtures: a tiny flat tree keyed by `usize`.
//!
//! Document order is node-index order; nodes are either plain containers or
//! focusable leaves carrying candidate metadata.

use alloc::vec::Vec;

use crate::types::{FocusCandidate, FocusHost, FocusTree};

struct TestNode {
    parent: Option<usize>,
    candidate: Option<FocusCandidate<usize>>,
}

pub(crate) struct TestTree {
    nodes: Vec<TestNode>,
}

impl TestTree {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a non-focusable container node.
    pub(crate) fn container(&mut self, parent: Option<usize>) -> usize {
        self.push(parent, None)
    }

    /// Add a focusable leaf node.
    pub(crate) fn leaf(&mut self, parent: Option<usize>) -> usize {
        let id = self.nodes.len();
        self.push(parent, Some(FocusCandidate::new(id)))
    }

    /// Candidate metadata of a leaf, for tweaking in tests.
    pub(crate) fn candidate_mut(&mut self, id: usize) -> &mut FocusCandidate<usize> {
        self.nodes[id]
            .candidate
            .as_mut()
            .expect("node is not a focusable leaf")
    }

    /// Every node id, in document order.
    pub(crate) fn all_nodes(&self) -> Vec<usize> {
        (0..self.nodes.len()).collect()
    }

    fn push(&mut self, parent: Option<usize>, candidate: Option<FocusCandidate<usize>>) -> usize {
        let id = self.nodes.len();
        self.nodes.push(TestNode { parent, candidate });
        id
    }
}

impl FocusTree<usize> for TestTree {
    fn contains(&self, region: usize, element: usize) -> bool {
        let mut node = element;
        loop {
            if node == region {
                return true;
            }
            match self.nodes[node].parent {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    fn parent_of(&self, element: usize) -> Option<usize> {
        self.nodes[element].parent
    }

    fn focusables_in(&self, region: usize, out: &mut Vec<FocusCandidate<usize>>) {
        out.clear();
        out.extend(
            self.nodes
                .iter()
                .enumerate()
                .filter(|&(id, node)| {
                    id != region && node.candidate.is_some() && self.contains(region, id)
                })
                .filter_map(|(_, node)| node.candidate),
        );
    }
}

pub(crate) struct TestHost {
    pub(crate) tree: TestTree,
    pub(crate) active: Option<usize>,
    pub(crate) selected: Option<usize>,
}

impl TestHost {
    pub(crate) fn new(tree: TestTree) -> Self {
        Self {
            tree,
            active: None,
            selected: None,
        }
    }
}

impl FocusTree<usize> for TestHost {
    fn contains(&self, region: usize, element: usize) -> bool {
        self.tree.contains(region, element)
    }

    fn parent_of(&self, element: usize) -> Option<usize> {
        self.tree.parent_of(element)
    }

    fn focusables_in(&self, region: usize, out: &mut Vec<FocusCandidate<usize>>) {
        self.tree.focusables_in(region, out);
    }
}

impl FocusHost<usize> for TestHost {
    fn active(&self) -> Option<usize> {
        self.active
    }

    fn focus(&mut self, element: usize) {
        self.active = Some(element);
        self.selected = None;
    }

    fn blur(&mut self) {
        self.active = None;
    }

    fn select_contents(&mut self, element: usize) {
        self.selected = Some(element);
    }
}
