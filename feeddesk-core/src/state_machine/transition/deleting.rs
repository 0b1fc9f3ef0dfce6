//! Deleting state transitions.

use super::TransitionResult;
use crate::state_machine::effect::{Effect, LogLevel};
use crate::state_machine::event::FeedEvent;
use crate::state_machine::state::FeedState;

/// Handle transitions from the Deleting state.
///
/// Deleting is a busy state. A successful deletion never reaches this
/// machine - the store removes the row from the collection instead - so the
/// only transition here is the failure path.
pub fn handle(state: FeedState, event: FeedEvent) -> TransitionResult {
    match (&state, event) {
        // Delete rejected: the row stays, showing the failure message
        (FeedState::Deleting { info }, FeedEvent::DeleteFailed(error)) => TransitionResult::new(
            FeedState::Viewing {
                error,
                info: info.clone(),
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

    #[test]
    fn test_delete_failed_surfaces_message() {
        let info = FeedInfo::new("BBC", "http://bbc.com/rss");
        let state = FeedState::Deleting { info: info.clone() };

        let result = handle(state, FeedEvent::DeleteFailed("server returned 404".to_string()));

        assert_eq!(
            result.state,
            FeedState::Viewing {
                error: "server returned 404".to_string(),
                info,
            }
        );
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_duplicate_confirm_is_dropped_while_busy() {
        let info = FeedInfo::new("BBC", "http://bbc.com/rss");
        let state = FeedState::Deleting { info };

        let result = handle(state.clone(), FeedEvent::DeleteConfirmed);

        assert_eq!(result.state, state);
        assert!(result.effects.iter().all(|e| !e.is_request()));
    }
}
