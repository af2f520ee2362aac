// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The containment service: registry, direction tracking, and interception
//! behind one constructible object.
//!
//! Every operation completes synchronously within the host's dispatch of one
//! event. The registry is mutated only by [`FocusTrap::contain`],
//! [`FocusTrap::exclude`], and [`FocusTrap::release`] — never from inside
//! interception — so there is no re-entrant mutation to guard against.
//!
//! ## Usage
//!
//! 1) Construct one service per UI root ([`FocusTrap::new`], or
//!    [`FocusTrap::with_trace`] to observe lifecycle transitions).
//! 2) Acquire a trap when a region becomes active; keep the returned
//!    [`TrapToken`] and release it unconditionally on teardown.
//! 3) Forward traversal key presses to [`FocusTrap::on_traversal_key`] and
//!    focus changes to [`FocusTrap::on_focus_change`], applying the returned
//!    [`Verdict`] (or let [`FocusTrap::resolve_on`] apply it for you).
//!
//! ## Minimal example
//!
//! ```
//! use hedgerow_trap::{FocusCandidate, FocusTrap, FocusTree, Verdict};
//! # struct Flat { parents: Vec<Option<usize>>, leaves: Vec<usize> }
//! # impl FocusTree<usize> for Flat {
//! #     fn contains(&self, region: usize, element: usize) -> bool {
//! #         let mut node = element;
//! #         loop {
//! #             if node == region { return true; }
//! #             match self.parents[node] { Some(p) => node = p, None => return false }
//! #         }
//! #     }
//! #     fn parent_of(&self, element: usize) -> Option<usize> { self.parents[element] }
//! #     fn focusables_in(&self, region: usize, out: &mut Vec<FocusCandidate<usize>>) {
//! #         out.clear();
//! #         out.extend(
//! #             self.leaves.iter().copied()
//! #                 .filter(|&leaf| leaf != region && self.contains(region, leaf))
//! #                 .map(FocusCandidate::new),
//! #         );
//! #     }
//! # }
//! // Node 0 is the root; region 1 holds the focusable leaf 2; leaf 3 is outside.
//! let tree = Flat {
//!     parents: vec![None, Some(0), Some(1), Some(0)],
//!     leaves: vec![2, 3],
//! };
//!
//! let mut trap = FocusTrap::new();
//! let token = trap.contain(&tree, 1);
//!
//! // Focus trying to land outside the trap is pulled to its first element.
//! assert_eq!(trap.on_focus_change(&tree, 3), Verdict::Redirect(2));
//!
//! trap.release(token);
//! assert_eq!(trap.on_focus_change(&tree, 3), Verdict::Allow);
//! ```

use crate::direction::{Direction, DirectionTracker};
use crate::interceptor;
use crate::registry::{TrapMode, TrapRegistry, TrapToken};
use crate::trace::TrapTrace;
use crate::types::{FocusHost, FocusTree, Verdict};

/// Keyboard-focus containment over a host tree.
///
/// The service owns no reference to the tree; hosts pass it to each call so
/// the engine always sees the live structure. Listener lifetime is derived
/// state: the service observes events exactly while at least one entry is
/// registered, and reports the 0→1 / 1→0 transitions through its
/// [`TrapTrace`].
#[derive(Clone, Debug, Default)]
pub struct FocusTrap<K, S: TrapTrace = ()> {
    registry: TrapRegistry<K>,
    direction: DirectionTracker,
    trace: S,
}

impl<K: Copy + Eq> FocusTrap<K, ()> {
    /// A service with no trace sink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_trace(())
    }
}

impl<K: Copy + Eq, S: TrapTrace> FocusTrap<K, S> {
    /// A service reporting lifecycle transitions and diagnostics to `trace`.
    #[must_use]
    pub fn with_trace(trace: S) -> Self {
        Self {
            registry: TrapRegistry::new(),
            direction: DirectionTracker::new(),
            trace,
        }
    }

    /// Begin containing focus inside `region`.
    ///
    /// The returned token must be released exactly once, when the region
    /// deactivates or is torn down.
    pub fn contain<T: FocusTree<K>>(&mut self, tree: &T, region: K) -> TrapToken {
        self.acquire(tree, region, TrapMode::Contain)
    }

    /// Begin excluding focus from `region`.
    ///
    /// Same contract as [`FocusTrap::contain`].
    pub fn exclude<T: FocusTree<K>>(&mut self, tree: &T, region: K) -> TrapToken {
        self.acquire(tree, region, TrapMode::Exclude)
    }

    fn acquire<T: FocusTree<K>>(&mut self, tree: &T, region: K, mode: TrapMode) -> TrapToken {
        let was_empty = self.registry.is_empty();
        let token = self.registry.insert(tree, region, mode);
        if was_empty {
            self.trace.listeners_attached();
        }
        token
    }

    /// Release the entry minted with `token`.
    ///
    /// Safe to call at any time, including during teardown. A token that was
    /// already released (or never minted) is reported through
    /// [`TrapTrace::release_out_of_sync`] and otherwise ignored.
    pub fn release(&mut self, token: TrapToken) {
        if !self.registry.release(token) {
            self.trace.release_out_of_sync(token);
            return;
        }
        if self.registry.is_empty() {
            self.trace.listeners_detached();
        }
    }

    /// Whether the service is currently observing events, i.e. whether any
    /// entry is registered.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        !self.registry.is_empty()
    }

    /// The current traversal direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction.current()
    }

    /// The registered entries, outermost first.
    #[must_use]
    pub fn registry(&self) -> &TrapRegistry<K> {
        &self.registry
    }

    /// Observe a traversal key press. `reverse` is the direction-reversing
    /// modifier state at the time of the press.
    ///
    /// Ignored while not listening — the key observer is only attached while
    /// containment is active. The tracked direction persists across
    /// attach/detach cycles.
    pub fn on_traversal_key(&mut self, reverse: bool) {
        if self.is_listening() {
            self.direction.observe_traversal(reverse);
        }
    }

    /// Evaluate a focus change onto `target`.
    ///
    /// Runs synchronously; the host must apply the verdict before yielding
    /// back to its event loop (see [`Verdict`]). While not listening, every
    /// change is allowed.
    #[must_use]
    pub fn on_focus_change<T: FocusTree<K>>(&mut self, tree: &T, target: K) -> Verdict<K> {
        if !self.is_listening() {
            return Verdict::Allow;
        }
        interceptor::resolve(&self.registry, tree, self.direction.current(), target)
    }

    /// Evaluate a focus change and apply the verdict through the host.
    ///
    /// Applies [`Verdict::Redirect`] via [`FocusHost::focus`] and
    /// [`Verdict::Blur`] via [`FocusHost::blur`]; the verdict is also
    /// returned so the host can cancel the originating event.
    pub fn resolve_on<H: FocusHost<K>>(&mut self, host: &mut H, target: K) -> Verdict<K> {
        let verdict = self.on_focus_change(&*host, target);
        match verdict {
            Verdict::Allow => {}
            Verdict::Redirect(next) => host.focus(next),
            Verdict::Blur => host.blur(),
        }
        verdict
    }
}
