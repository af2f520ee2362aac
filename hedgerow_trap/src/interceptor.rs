// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The focus interceptor: decide whether a focus change is allowed and, when
//! it is not, compute the replacement target.
//!
//! ## Decision rule
//!
//! For a focus change onto `target`, the active trap is the innermost
//! registered entry whose region contains `target` (a reverse scan of the
//! registry, which is kept in outer-to-inner order).
//!
//! - No active trap: the change is allowed only when no
//!   [`TrapMode::Contain`] entry exists anywhere — focus outside every region
//!   is fine while only exclusions are active.
//! - Active trap in [`TrapMode::Exclude`]: denied.
//! - Active trap in [`TrapMode::Contain`]: allowed, unless a contain-mode
//!   entry nested inside the active region does not itself contain `target`.
//!   A nested contain trap demands focus move further inward, so the
//!   innermost trap wins even for targets its outer trap would accept.
//!
//! ## Redirection
//!
//! A denied target is replaced by stepping through the redirection scope's
//! candidates cyclically in the current traversal direction, starting from
//! the target's own position (or the scope boundary when the target is not a
//! candidate), and accepting the first candidate that would itself be allowed
//! under the decision rule. Accepted candidates are therefore fixed points:
//! the focus change produced by applying a [`Verdict::Redirect`] always
//! evaluates to [`Verdict::Allow`], so re-entrant interception terminates and
//! two regions can never redirect into each other forever. When a full cycle
//! finds nothing, the verdict is [`Verdict::Blur`].

use alloc::vec::Vec;

use crate::direction::Direction;
use crate::query::{self, QueryOptions};
use crate::registry::{TrapMode, TrapRegistry};
use crate::types::{FocusTree, Verdict};

/// Whether a focus change onto `target` is allowed under the current
/// registry.
#[must_use]
pub fn evaluate<K, T>(registry: &TrapRegistry<K>, tree: &T, target: K) -> bool
where
    K: Copy + Eq,
    T: FocusTree<K>,
{
    let Some(active) = registry.closest_enclosing(tree, target) else {
        return !registry.any_contain();
    };
    match active.mode {
        TrapMode::Exclude => false,
        TrapMode::Contain => !registry.entries().iter().any(|inner| {
            inner.mode == TrapMode::Contain
                && inner.token() != active.token()
                && tree.contains(active.region, inner.region)
                && !tree.contains(inner.region, target)
        }),
    }
}

/// Evaluate a focus change and compute the replacement target when denied.
#[must_use]
pub fn resolve<K, T>(
    registry: &TrapRegistry<K>,
    tree: &T,
    direction: Direction,
    target: K,
) -> Verdict<K>
where
    K: Copy + Eq,
    T: FocusTree<K>,
{
    if evaluate(registry, tree, target) {
        return Verdict::Allow;
    }
    redirect(registry, tree, direction, target)
}

/// Compute the replacement for a denied focus change.
fn redirect<K, T>(
    registry: &TrapRegistry<K>,
    tree: &T,
    direction: Direction,
    target: K,
) -> Verdict<K>
where
    K: Copy + Eq,
    T: FocusTree<K>,
{
    // The scope is the nearest contain-mode region enclosing the target, or
    // the target's whole root tree as the global fallback.
    let scope = registry
        .entries()
        .iter()
        .rev()
        .find(|e| e.mode == TrapMode::Contain && tree.contains(e.region, target))
        .map(|e| e.region)
        .unwrap_or_else(|| root_of(tree, target));

    // The full eligible set is fair game for redirection; autofocus-only
    // filtering applies to default-focus placement, not containment.
    let mut candidates = Vec::new();
    query::focusables(tree, scope, &QueryOptions::default(), &mut candidates);
    if candidates.is_empty() {
        return Verdict::Blur;
    }

    let len = candidates.len();
    let step = |i: usize| -> usize {
        match direction {
            Direction::Forward => {
                if i + 1 == len {
                    0
                } else {
                    i + 1
                }
            }
            Direction::Backward => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
        }
    };

    // Start at the target's position, or just past the scope boundary in the
    // current direction when the target is not itself a candidate.
    let start = candidates.iter().position(|c| c.id == target);
    let first = match (start, direction) {
        (Some(at), _) => step(at),
        (None, Direction::Forward) => 0,
        (None, Direction::Backward) => len - 1,
    };

    let mut at = first;
    loop {
        let candidate = candidates[at].id;
        if evaluate(registry, tree, candidate) {
            return Verdict::Redirect(candidate);
        }
        at = step(at);
        let cycled = match start {
            Some(origin) => at == origin,
            None => at == first,
        };
        if cycled {
            return Verdict::Blur;
        }
    }
}

fn root_of<K, T>(tree: &T, element: K) -> K
where
    K: Copy + Eq,
    T: FocusTree<K>,
{
    let mut node = element;
    while let Some(parent) = tree.parent_of(node) {
        node = parent;
    }
    node
}
