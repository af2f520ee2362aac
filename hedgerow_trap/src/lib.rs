// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hedgerow_trap --heading-base-level=0

//! Hedgerow Trap: keyboard-focus containment for UI trees.
//!
//! ## Overview
//!
//! While one or more regions of a UI tree declare themselves focus traps
//! ("contain") or focus exclusions ("exclude"), this crate guarantees the
//! focus cursor never lands on, or tabs through, a disallowed element, and
//! that navigation wraps predictably when the natural traversal order would
//! escape a boundary.
//!
//! The engine is a composition of four small parts:
//!
//! - [`TrapRegistry`]: the ordered collection of active trap regions, kept in
//!   outer-to-inner order so the closest enclosing trap is a reverse scan.
//! - [`DirectionTracker`]: the current traversal direction, derived from the
//!   traversal key's modifier state.
//! - [`query`]: focusable enumeration in document order, plus
//!   [`focus_first`] / [`focus_last`] for moving focus to a region's edges.
//! - [`interceptor`]: the decision procedure run against every focus change,
//!   producing a [`Verdict`] — allow, redirect, or blur.
//!
//! [`FocusTrap`] ties them together behind the public operations `contain`,
//! `exclude`, and `release`.
//!
//! ## Integration
//!
//! The crate does not assume any particular UI framework or scene graph.
//! Hosts implement [`FocusTree`] (structure: containment, parents, candidate
//! enumeration) and optionally [`FocusHost`] (actuation: the live focus
//! cursor), then forward two event streams while containment is active: focus
//! changes and traversal key presses, both observed in the earliest dispatch
//! phase available so a disallowed focus is never rendered. The
//! [`TrapTrace`] sink reports exactly when those observers are needed: it
//! fires on the registry's empty↔non-empty transitions.
//!
//! Decisions are synchronous and allocation-light; every operation completes
//! within the host's dispatch of a single event. Redirection only ever
//! chooses targets the interceptor itself would allow, so applying a verdict
//! cannot trigger a second redirection.
//!
//! ## Adapters
//!
//! The [`adapters`] module integrates with other Hedgerow crates:
//!
//! - **Tree adapter** (`tree_adapter` feature): [`FocusTree`] for
//!   [`hedgerow_tree::Tree`] and the [`adapters::tree::FocusDocument`] host.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod direction;
pub mod interceptor;
pub mod query;
pub mod registry;
pub mod trace;
pub mod trap;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use direction::{Direction, DirectionTracker};
pub use query::{focus_first, focus_last, focusables, FocusOptions, QueryOptions};
pub use registry::{TrapEntry, TrapMode, TrapRegistry, TrapToken};
pub use trace::TrapTrace;
pub use trap::FocusTrap;
pub use types::{ControlKind, FocusCandidate, FocusHost, FocusTree, Verdict};
