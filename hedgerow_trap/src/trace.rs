// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics and lifecycle hooks for the containment service.
//!
//! The core is `no_std` and does not link a logger. Developer-facing,
//! non-fatal conditions are reported through a callback sink instead, and the
//! same sink carries the listener lifecycle so hosts can subscribe their real
//! event sources exactly while containment is active.

use crate::registry::TrapToken;

/// A callback sink for containment lifecycle transitions and diagnostics.
///
/// `()` implements every method as a no-op; tests and hosts that care provide
/// a recording or forwarding implementation.
pub trait TrapTrace {
    /// The registry transitioned from empty to non-empty: the host should
    /// attach its focus-change and key observers, in the earliest dispatch
    /// phase available.
    fn listeners_attached(&mut self) {}

    /// The registry transitioned back to empty: the host should detach the
    /// observers attached by [`TrapTrace::listeners_attached`].
    fn listeners_detached(&mut self) {}

    /// A release was requested for a token with no matching entry: it was
    /// already released, or never minted by this service. This is a logic
    /// error in the caller, reported here and otherwise ignored.
    fn release_out_of_sync(&mut self, token: TrapToken) {
        let _ = token;
    }
}

impl TrapTrace for () {}
