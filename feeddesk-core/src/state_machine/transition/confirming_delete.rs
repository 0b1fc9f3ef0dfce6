//! ConfirmingDelete state transitions.

use super::TransitionResult;
use crate::state_machine::effect::{Effect, LogLevel};
use crate::state_machine::event::FeedEvent;
use crate::state_machine::state::FeedState;

/// Handle transitions from the ConfirmingDelete state.
///
/// Nothing has been sent yet; the row is waiting for the user to confirm or
/// dismiss the deletion.
pub fn handle(state: FeedState, event: FeedEvent) -> TransitionResult {
    match (&state, event) {
        // Confirmed: enter Deleting and issue the request
        (FeedState::ConfirmingDelete { info }, FeedEvent::DeleteConfirmed) => {
            TransitionResult::new(
                FeedState::Deleting { info: info.clone() },
                vec![Effect::DeleteFeed],
            )
        }

        // Dismissed: back to rest, unchanged
        (FeedState::ConfirmingDelete { info }, FeedEvent::DeleteDismissed) => {
            TransitionResult::new(FeedState::viewing(info.clone()), vec![])
        }

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
    fn test_confirmed_enters_deleting_with_request() {
        let info = FeedInfo::new("BBC", "http://bbc.com/rss");
        let state = FeedState::ConfirmingDelete { info: info.clone() };

        let result = handle(state, FeedEvent::DeleteConfirmed);

        assert_eq!(result.state, FeedState::Deleting { info });
        assert_eq!(result.effects, vec![Effect::DeleteFeed]);
    }

    #[test]
    fn test_dismissed_returns_to_viewing_unchanged() {
        let info = FeedInfo::new("BBC", "http://bbc.com/rss");
        let state = FeedState::ConfirmingDelete { info: info.clone() };

        let result = handle(state, FeedEvent::DeleteDismissed);

        assert_eq!(result.state, FeedState::viewing(info));
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_edit_while_confirming_is_dropped() {
        let info = FeedInfo::new("BBC", "http://bbc.com/rss");
        let state = FeedState::ConfirmingDelete { info };

        let result = handle(state.clone(), FeedEvent::EditRequested);

        assert_eq!(result.state, state);
        assert!(result.effects.iter().all(|e| !e.is_request()));
    }
}
