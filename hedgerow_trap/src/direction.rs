// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal-direction tracking from keyboard input.

/// The direction sequential focus traversal is heading.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Toward later elements in document order.
    #[default]
    Forward,
    /// Toward earlier elements in document order.
    Backward,
}

/// Tracks the current traversal direction.
///
/// The tracker is updated exclusively from observations of the traversal key:
/// the reverse modifier held sets [`Direction::Backward`], otherwise
/// [`Direction::Forward`]. There is no buffering; the most recent observation
/// wins, even across rapid repeated presses. All other components read the
/// value at the moment they evaluate a focus change.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectionTracker {
    current: Direction,
}

impl DirectionTracker {
    /// A tracker starting out [`Direction::Forward`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current direction.
    #[must_use]
    pub fn current(&self) -> Direction {
        self.current
    }

    /// Observe a traversal key press. `reverse` is the state of the
    /// direction-reversing modifier at the time of the press.
    pub fn observe_traversal(&mut self, reverse: bool) {
        self.current = if reverse {
            Direction::Backward
        } else {
            Direction::Forward
        };
    }
}
