//! Pure state transition function.
//!
//! `transition` and `draft_transition` compute the next state for a single
//! row from its current state and an incoming event, together with the
//! effects that should be carried out as a result. They perform no I/O; the
//! caller is responsible for executing the effects and feeding any result
//! events back in.
//!
//! Each state's handling lives in its own module:
//! - [`viewing`]: the rest state of a row
//! - [`editing`]: an inline edit in progress
//! - [`saving`]: a rename request in flight
//! - [`confirming_delete`]: waiting for the user to confirm a deletion
//! - [`deleting`]: a delete request in flight
//! - [`draft`]: the single new-feed draft machine

mod confirming_delete;
mod deleting;
mod draft;
mod editing;
mod saving;
mod viewing;

use crate::state_machine::effect::Effect;
use crate::state_machine::event::{DraftEvent, FeedEvent};
use crate::state_machine::state::{DraftState, FeedState};

/// Result of a transition: the new state and any effects to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub state: FeedState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: FeedState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }

    /// A transition that keeps the state and does nothing.
    pub fn no_change(state: FeedState) -> Self {
        Self {
            state,
            effects: vec![],
        }
    }
}

/// Result of a draft transition: the new draft state and any effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftTransitionResult {
    pub state: DraftState,
    pub effects: Vec<Effect>,
}

impl DraftTransitionResult {
    pub fn new(state: DraftState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }

    /// A transition that keeps the state and does nothing.
    pub fn no_change(state: DraftState) -> Self {
        Self {
            state,
            effects: vec![],
        }
    }
}

/// Compute the next state of a row and the effects to execute.
pub fn transition(state: FeedState, event: FeedEvent) -> TransitionResult {
    match &state {
        FeedState::Viewing { .. } => viewing::handle(state, event),
        FeedState::Editing { .. } => editing::handle(state, event),
        FeedState::Saving { .. } => saving::handle(state, event),
        FeedState::ConfirmingDelete { .. } => confirming_delete::handle(state, event),
        FeedState::Deleting { .. } => deleting::handle(state, event),
    }
}

/// Compute the next state of the draft machine and the effects to execute.
pub fn draft_transition(state: DraftState, event: DraftEvent) -> DraftTransitionResult {
    draft::handle(state, event)
}
