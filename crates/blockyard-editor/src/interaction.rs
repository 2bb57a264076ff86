//! Two-phase click interaction state.

use blockyard_core::GridPos;
use blockyard_world::{propose_region, ObjectType};
use serde::Serialize;

/// Phase of the two-click placement workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum InteractionState {
    /// No placement in progress
    #[default]
    Idle,
    /// First corner chosen; waiting for the confirming click
    AwaitingConfirmation {
        /// The first confirmed corner of the pending region
        anchor: GridPos,
    },
}

/// Tracks the click workflow and the live pointer cell.
///
/// The two pieces are independent: pointer motion only ever updates the
/// preview cell, and clicks only ever move the phase. The machine cycles
/// `Idle` and `AwaitingConfirmation` for the life of the session; it has
/// no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    state: InteractionState,
    preview: Option<GridPos>,
}

impl Interaction {
    /// Start idle, with no pointer cell known yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current workflow phase.
    #[must_use]
    pub const fn state(&self) -> InteractionState {
        self.state
    }

    /// The pending anchor, if a first corner has been confirmed.
    #[must_use]
    pub const fn anchor(&self) -> Option<GridPos> {
        match self.state {
            InteractionState::Idle => None,
            InteractionState::AwaitingConfirmation { anchor } => Some(anchor),
        }
    }

    /// The cell currently under the pointer, if any.
    #[must_use]
    pub const fn preview(&self) -> Option<GridPos> {
        self.preview
    }

    /// Update the pointer cell. Never changes the phase.
    pub fn pointer_moved(&mut self, pos: GridPos) {
        self.preview = Some(pos);
    }

    /// Forget the pointer cell (pointer left the ground plane).
    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Confirm the first corner: `Idle -> AwaitingConfirmation`.
    ///
    /// A no-op when a corner is already pending; the input layer cannot
    /// perfectly order events against the logic thread, so a stray first
    /// click must not be a fault.
    pub fn begin(&mut self, anchor: GridPos) {
        if self.state == InteractionState::Idle {
            self.state = InteractionState::AwaitingConfirmation { anchor };
        }
    }

    /// Abandon any in-progress placement and forget the pointer cell.
    ///
    /// Used for cancellation, tool changes, object-type changes, and
    /// after a successful placement. Idempotent.
    pub fn reset(&mut self) {
        self.state = InteractionState::Idle;
        self.preview = None;
    }

    /// Cells the current pointer state would cover, for highlighting.
    ///
    /// While awaiting confirmation this is the full region the second
    /// click would claim (which collapses to the cursor cell for unique
    /// types); otherwise it is just the cursor cell. Empty when the
    /// pointer is off the grid.
    #[must_use]
    pub fn preview_region(&self, ty: &ObjectType) -> Vec<GridPos> {
        match (self.state, self.preview) {
            (InteractionState::AwaitingConfirmation { anchor }, Some(cursor)) => {
                propose_region(anchor, cursor, ty)
            }
            (_, Some(cursor)) => vec![cursor],
            (_, None) => Vec::new(),
        }
    }
}
