// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration helpers for other Hedgerow crates.
//!
//! Modules in this file are behind feature flags so `hedgerow_trap` can
//! remain usable in contexts that do not depend on those crates.
//!
//! - [`tree`] (`tree_adapter` feature): [`crate::FocusTree`] /
//!   [`crate::FocusHost`] implementations for [`hedgerow_tree::Tree`].

#[cfg(feature = "tree_adapter")]
pub mod tree;
