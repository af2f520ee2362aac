// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing types: tree traits, focus candidates, and interception verdicts.

use alloc::vec::Vec;

/// Classification of a focusable control, used by class-based query filters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// A text-entry style control.
    Field,
    /// A button-style control.
    Button,
    /// Anything else that can receive focus.
    #[default]
    Other,
}

/// A focusable element reported by the host tree, before filtering.
///
/// Candidates are produced fresh on every enumeration; the engine never caches
/// them because the tree can mutate between queries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FocusCandidate<K> {
    /// The element's key.
    pub id: K,
    /// Control classification.
    pub kind: ControlKind,
    /// Explicit tab index, if any. Negative values remove the element from
    /// sequential focus.
    pub tab_index: Option<i16>,
    /// Whether the element is disabled.
    pub disabled: bool,
    /// Whether the element is explicitly marked for priority default focus.
    pub autofocus: bool,
}

impl<K> FocusCandidate<K> {
    /// A plain enabled candidate with no tab index and no markers.
    pub fn new(id: K) -> Self {
        Self {
            id,
            kind: ControlKind::Other,
            tab_index: None,
            disabled: false,
            autofocus: false,
        }
    }
}

/// Structure queries the containment engine needs from the host tree.
///
/// Hosts implement this over their element tree or DOM. All methods must be
/// cheap enough to call from inside a synchronous event handler; the engine
/// performs no caching of its own.
pub trait FocusTree<K> {
    /// Ancestor-or-self containment: whether `element` lies inside the subtree
    /// rooted at `region`. A region contains itself.
    fn contains(&self, region: K, element: K) -> bool;

    /// The parent of `element`, or `None` at a tree root.
    fn parent_of(&self, element: K) -> Option<K>;

    /// Collect the focusable candidates strictly inside `region`, in document
    /// order, into `out`. The region node itself is not a candidate. `out` is
    /// cleared first.
    fn focusables_in(&self, region: K, out: &mut Vec<FocusCandidate<K>>);
}

/// Focus actuation on top of [`FocusTree`]: the live focus cursor.
pub trait FocusHost<K>: FocusTree<K> {
    /// The currently focused element, if any.
    fn active(&self) -> Option<K>;

    /// Move focus to `element`.
    fn focus(&mut self, element: K);

    /// Remove focus from the tree entirely.
    fn blur(&mut self);

    /// Select the contents of `element` (text-entry controls). Optional.
    fn select_contents(&mut self, element: K) {
        let _ = element;
    }
}

/// The interceptor's decision about one observed focus change.
///
/// [`Verdict::Redirect`] and [`Verdict::Blur`] require the host to cancel the
/// observed event outright — including stopping other same-phase observers —
/// before applying the replacement, so the disallowed focus is never rendered.
/// Hosts must therefore observe focus changes in the earliest dispatch phase
/// available to them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict<K> {
    /// The focus change is allowed; the default focus stands.
    Allow,
    /// The focus change is disallowed; focus the given element instead.
    Redirect(K),
    /// The focus change is disallowed and no allowed target exists; remove
    /// focus from the tree.
    Blur,
}

impl<K> Verdict<K> {
    /// Whether the host must cancel the observed event.
    pub fn consumes_event(&self) -> bool {
        !matches!(self, Self::Allow)
    }
}
