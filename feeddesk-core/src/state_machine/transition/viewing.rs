//! Viewing state transitions.

use super::TransitionResult;
use crate::state_machine::effect::{Effect, LogLevel};
use crate::state_machine::event::FeedEvent;
use crate::state_machine::state::FeedState;

/// Handle transitions from the Viewing state.
///
/// Viewing is the rest state. From here the user can start an inline edit
/// or ask for a deletion; everything else is a stale leftover from an
/// earlier state and is dropped.
pub fn handle(state: FeedState, event: FeedEvent) -> TransitionResult {
    match (&state, event) {
        // Start an inline edit; both copies begin at the saved value
        (FeedState::Viewing { info, .. }, FeedEvent::EditRequested) => {
            TransitionResult::new(
                FeedState::Editing {
                    error: String::new(),
                    new_info: info.clone(),
                    old_info: info.clone(),
                },
                vec![],
            )
        }

        // Ask for confirmation before deleting
        (FeedState::Viewing { info, .. }, FeedEvent::DeleteRequested) => {
            TransitionResult::new(FeedState::ConfirmingDelete { info: info.clone() }, vec![])
        }

        // =====================================================================
        // Stale Events in Viewing State
        // These are results from requests issued in a previous state. If the
        // row is back at rest, the originating operation was already resolved
        // or abandoned, so ignore them.
        // =====================================================================
        (FeedState::Viewing { .. }, FeedEvent::SaveSucceeded) => TransitionResult::new(
            state.clone(),
            vec![Effect::Log {
                level: LogLevel::Info,
                message: "Ignoring stale SaveSucceeded event in Viewing state".to_string(),
            }],
        ),

        (FeedState::Viewing { .. }, FeedEvent::SaveFailed(_)) => TransitionResult::new(
            state.clone(),
            vec![Effect::Log {
                level: LogLevel::Info,
                message: "Ignoring stale SaveFailed event in Viewing state".to_string(),
            }],
        ),

        (FeedState::Viewing { .. }, FeedEvent::DeleteFailed(_)) => TransitionResult::new(
            state.clone(),
            vec![Effect::Log {
                level: LogLevel::Info,
                message: "Ignoring stale DeleteFailed event in Viewing state".to_string(),
            }],
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

    #[test]
    fn test_edit_requested_starts_editing() {
        let info = FeedInfo::new("BBC", "http://bbc.com/rss");
        let state = FeedState::viewing(info.clone());

        let result = handle(state, FeedEvent::EditRequested);

        let FeedState::Editing {
            error,
            new_info,
            old_info,
        } = result.state
        else {
            panic!("expected Editing");
        };
        assert!(error.is_empty());
        assert_eq!(new_info, info);
        assert_eq!(old_info, info);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_edit_requested_clears_previous_error() {
        let info = FeedInfo::new("BBC", "http://bbc.com/rss");
        let state = FeedState::Viewing {
            error: "server returned 500".to_string(),
            info,
        };

        let result = handle(state, FeedEvent::EditRequested);

        assert!(matches!(result.state, FeedState::Editing { ref error, .. } if error.is_empty()));
    }

    #[test]
    fn test_delete_requested_asks_for_confirmation() {
        let info = FeedInfo::new("BBC", "http://bbc.com/rss");
        let state = FeedState::viewing(info.clone());

        let result = handle(state, FeedEvent::DeleteRequested);

        assert_eq!(result.state, FeedState::ConfirmingDelete { info });
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_stale_save_succeeded_is_dropped() {
        let state = FeedState::viewing(FeedInfo::new("BBC", "http://bbc.com/rss"));

        let result = handle(state.clone(), FeedEvent::SaveSucceeded);

        assert_eq!(result.state, state);
        assert!(result.effects.iter().all(|e| !e.is_request()));
    }

    #[test]
    fn test_typing_without_edit_is_dropped() {
        let state = FeedState::viewing(FeedInfo::new("BBC", "http://bbc.com/rss"));

        let result = handle(state.clone(), FeedEvent::NameChanged("x".to_string()));

        assert_eq!(result.state, state);
        assert!(result.effects.iter().all(|e| !e.is_request()));
    }
}
