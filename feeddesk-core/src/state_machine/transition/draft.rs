//! Draft (new feed) state transitions.

use super::DraftTransitionResult;
use crate::state_machine::effect::{Effect, LogLevel};
use crate::state_machine::event::DraftEvent;
use crate::state_machine::state::DraftState;

/// Handle transitions of the single draft machine.
///
/// The draft has no server-confirmed value to fall back to, so cancelling
/// simply discards it. A successful creation never reaches this machine:
/// the store inserts the new row and resets the draft to Idle itself.
pub fn handle(state: DraftState, event: DraftEvent) -> DraftTransitionResult {
    match (&state, event) {
        // Open a blank draft form
        (DraftState::Idle, DraftEvent::AddRequested) => {
            DraftTransitionResult::new(DraftState::editing(), vec![])
        }

        // Submit: enter Saving and issue the request
        (DraftState::Editing { info, .. }, DraftEvent::SaveRequested) => {
            DraftTransitionResult::new(
                DraftState::Saving { info: info.clone() },
                vec![Effect::CreateFeed { info: info.clone() }],
            )
        }

        // Discard the draft entirely
        (DraftState::Editing { .. }, DraftEvent::CancelRequested) => {
            DraftTransitionResult::new(DraftState::Idle, vec![])
        }

        (DraftState::Editing { error, info }, DraftEvent::NameChanged(name)) => {
            DraftTransitionResult::new(
                DraftState::Editing {
                    error: error.clone(),
                    info: info.with_name(name),
                },
                vec![],
            )
        }

        (DraftState::Editing { error, info }, DraftEvent::UrlChanged(url)) => {
            DraftTransitionResult::new(
                DraftState::Editing {
                    error: error.clone(),
                    info: info.with_url(url),
                },
                vec![],
            )
        }

        // Create rejected: back to the form with the failure message
        (DraftState::Saving { info }, DraftEvent::CreateFailed(error)) => {
            DraftTransitionResult::new(
                DraftState::Editing {
                    error,
                    info: info.clone(),
                },
                vec![],
            )
        }

        // Catch-all for unhandled events - log and return state unchanged
        (_, event) => DraftTransitionResult::new(
            state.clone(),
            vec![Effect::Log {
                level: LogLevel::Warn,
                message: format!("Unhandled event {:?} in state {:?}", event, state),
            }],
        ),
    }
}
