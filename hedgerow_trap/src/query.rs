// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focusable queries: enumerate eligible elements and move focus to the edges
//! of a region.
//!
//! Enumeration asks the host tree for the raw candidates of a region in
//! document order and applies the fixed eligibility rules: disabled elements
//! and elements with a negative tab index are out, and optional class filters
//! restrict by control kind. Results are recomputed on every call; nothing is
//! cached because the tree can mutate between queries.

use alloc::vec::Vec;

use crate::types::{ControlKind, FocusCandidate, FocusHost, FocusTree};

/// Filtering options for [`focusables`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    /// Restrict results to candidates explicitly marked for priority default
    /// focus. Used by default-focus placement, never by containment.
    pub autofocus_only: bool,
    /// Include [`ControlKind::Field`] candidates.
    pub fields: bool,
    /// Include [`ControlKind::Button`] candidates.
    pub buttons: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            autofocus_only: false,
            fields: true,
            buttons: true,
        }
    }
}

/// Behavior options for [`focus_first`] and [`focus_last`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FocusOptions {
    /// Candidate filtering.
    pub query: QueryOptions,
    /// Do not move focus when it is already inside the region. On by default.
    pub skip_if_focused: bool,
    /// Also select the focused element's contents (text-entry controls).
    pub select: bool,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            query: QueryOptions::default(),
            skip_if_focused: true,
            select: false,
        }
    }
}

/// Enumerate the eligible focusable elements of `region` in document order.
///
/// `out` is cleared and reused. An empty result simply means the region has no
/// eligible descendants; callers fall back rather than fail.
pub fn focusables<K, T>(tree: &T, region: K, opts: &QueryOptions, out: &mut Vec<FocusCandidate<K>>)
where
    K: Copy + Eq,
    T: FocusTree<K>,
{
    tree.focusables_in(region, out);
    out.retain(|c| eligible(c, opts));
}

fn eligible<K>(candidate: &FocusCandidate<K>, opts: &QueryOptions) -> bool {
    if candidate.disabled {
        return false;
    }
    if candidate.tab_index.is_some_and(|t| t < 0) {
        return false;
    }
    match candidate.kind {
        ControlKind::Field if !opts.fields => return false,
        ControlKind::Button if !opts.buttons => return false,
        _ => {}
    }
    if opts.autofocus_only && !candidate.autofocus {
        return false;
    }
    true
}

/// Move focus to the first eligible element of `region`.
///
/// Returns `true` when focus ends up inside the region: either it already was
/// (with `skip_if_focused` set) or it was moved. Returns `false` when the
/// region has no eligible element, so callers can chain a fallback.
pub fn focus_first<K, H>(host: &mut H, region: K, opts: &FocusOptions) -> bool
where
    K: Copy + Eq,
    H: FocusHost<K>,
{
    focus_edge(host, region, opts, false)
}

/// Move focus to the last eligible element of `region`.
///
/// Mirror of [`focus_first`].
pub fn focus_last<K, H>(host: &mut H, region: K, opts: &FocusOptions) -> bool
where
    K: Copy + Eq,
    H: FocusHost<K>,
{
    focus_edge(host, region, opts, true)
}

fn focus_edge<K, H>(host: &mut H, region: K, opts: &FocusOptions, last: bool) -> bool
where
    K: Copy + Eq,
    H: FocusHost<K>,
{
    if opts.skip_if_focused
        && host
            .active()
            .is_some_and(|active| host.contains(region, active))
    {
        return true;
    }

    let mut candidates = Vec::new();
    focusables(host, region, &opts.query, &mut candidates);
    let target = if last {
        candidates.last()
    } else {
        candidates.first()
    };
    let Some(target) = target.map(|c| c.id) else {
        return false;
    };

    host.focus(target);
    if opts.select {
        host.select_contents(target);
    }
    true
}
