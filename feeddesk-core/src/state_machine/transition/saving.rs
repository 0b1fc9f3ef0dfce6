//! Saving state transitions.

use super::TransitionResult;
use crate::state_machine::effect::{Effect, LogLevel};
use crate::state_machine::event::FeedEvent;
use crate::state_machine::state::FeedState;

/// Handle transitions from the Saving state.
///
/// Saving is a busy state: the only way out is the resolution of the
/// in-flight PUT. User actions arriving here are stale clicks against a
/// disabled row and are dropped.
pub fn handle(state: FeedState, event: FeedEvent) -> TransitionResult {
    match (&state, event) {
        // Save confirmed: the edited value is now the saved value
        (FeedState::Saving { new_info, .. }, FeedEvent::SaveSucceeded) => {
            TransitionResult::new(FeedState::viewing(new_info.clone()), vec![])
        }

        // Save rejected: back to editing with the failure message
        (
            FeedState::Saving {
                new_info, old_info, ..
            },
            FeedEvent::SaveFailed(error),
        ) => TransitionResult::new(
            FeedState::Editing {
                error,
                new_info: new_info.clone(),
                old_info: old_info.clone(),
            },
            vec![],
        ),

        // Catch-all for unhandled events - log and return state unchanged
        (_, event) => TransitionResult::new(
            state.clone(),
            vec![Effect::Log {
                level: LogLevel::Warn,
                message: format!("Unhandled event {:?} in state {:?}", event, state),
            }],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedInfo;

    fn saving() -> (FeedInfo, FeedInfo, FeedState) {
        let old = FeedInfo::new("BBC", "http://bbc.com/rss");
        let new = old.with_name("BBC News");
        let state = FeedState::Saving {
            new_info: new.clone(),
            old_info: old.clone(),
        };
        (old, new, state)
    }

    #[test]
    fn test_save_succeeded_commits_new_value() {
        let (_, new, state) = saving();

        let result = handle(state, FeedEvent::SaveSucceeded);

        assert_eq!(result.state, FeedState::viewing(new));
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_save_failed_returns_to_editing_with_message() {
        let (old, new, state) = saving();

        let result = handle(state, FeedEvent::SaveFailed("server returned 500".to_string()));

        assert_eq!(
            result.state,
            FeedState::Editing {
                error: "server returned 500".to_string(),
                new_info: new,
                old_info: old,
            }
        );
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_second_save_request_is_dropped_while_busy() {
        let (_, _, state) = saving();

        let result = handle(state.clone(), FeedEvent::SaveRequested);

        assert_eq!(result.state, state);
        assert!(result.effects.iter().all(|e| !e.is_request()));
    }

    #[test]
    fn test_edits_while_saving_are_dropped() {
        let (_, _, state) = saving();

        let result = handle(state.clone(), FeedEvent::NameChanged("late".to_string()));

        assert_eq!(result.state, state);
        assert!(result.effects.iter().all(|e| !e.is_request()));
    }
}
