//! Editing state transitions.

use super::TransitionResult;
use crate::state_machine::effect::{Effect, LogLevel};
use crate::state_machine::event::FeedEvent;
use crate::state_machine::state::FeedState;

/// Handle transitions from the Editing state.
///
/// `new_info` follows the input fields keystroke by keystroke; `old_info`
/// holds the last server-confirmed value so cancelling restores it exactly.
pub fn handle(state: FeedState, event: FeedEvent) -> TransitionResult {
    match (&state, event) {
        // Submit: enter Saving and issue the request
        (
            FeedState::Editing {
                new_info, old_info, ..
            },
            FeedEvent::SaveRequested,
        ) => TransitionResult::new(
            FeedState::Saving {
                new_info: new_info.clone(),
                old_info: old_info.clone(),
            },
            vec![Effect::SaveFeed {
                info: new_info.clone(),
            }],
        ),

        // Abandon the edit: back to rest with the saved value
        (FeedState::Editing { old_info, .. }, FeedEvent::CancelRequested) => {
            TransitionResult::new(FeedState::viewing(old_info.clone()), vec![])
        }

        (
            FeedState::Editing {
                error,
                new_info,
                old_info,
            },
            FeedEvent::NameChanged(name),
        ) => TransitionResult::new(
            FeedState::Editing {
                error: error.clone(),
                new_info: new_info.with_name(name),
                old_info: old_info.clone(),
            },
            vec![],
        ),

        (
            FeedState::Editing {
                error,
                new_info,
                old_info,
            },
            FeedEvent::UrlChanged(url),
        ) => TransitionResult::new(
            FeedState::Editing {
                error: error.clone(),
                new_info: new_info.with_url(url),
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

    fn editing(new_info: FeedInfo, old_info: FeedInfo) -> FeedState {
        FeedState::Editing {
            error: String::new(),
            new_info,
            old_info,
        }
    }

    #[test]
    fn test_save_requested_enters_saving_with_request() {
        let old = FeedInfo::new("BBC", "http://bbc.com/rss");
        let new = old.with_name("BBC News");

        let result = handle(editing(new.clone(), old.clone()), FeedEvent::SaveRequested);

        assert_eq!(
            result.state,
            FeedState::Saving {
                new_info: new.clone(),
                old_info: old
            }
        );
        assert_eq!(result.effects, vec![Effect::SaveFeed { info: new }]);
    }

    #[test]
    fn test_cancel_restores_saved_value() {
        let old = FeedInfo::new("BBC", "http://bbc.com/rss");
        let new = old.with_name("half-typed");

        let result = handle(editing(new, old.clone()), FeedEvent::CancelRequested);

        assert_eq!(result.state, FeedState::viewing(old));
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_name_changed_updates_only_name() {
        let old = FeedInfo::new("BBC", "http://bbc.com/rss");

        let result = handle(
            editing(old.clone(), old.clone()),
            FeedEvent::NameChanged("BBC News".to_string()),
        );

        let FeedState::Editing {
            new_info, old_info, ..
        } = result.state
        else {
            panic!("expected Editing");
        };
        assert_eq!(new_info.name, "BBC News");
        assert_eq!(new_info.url, "http://bbc.com/rss");
        assert_eq!(old_info, old);
    }

    #[test]
    fn test_url_changed_keeps_error_visible() {
        let old = FeedInfo::new("BBC", "http://bbc.com/rss");
        let state = FeedState::Editing {
            error: "server returned 500".to_string(),
            new_info: old.clone(),
            old_info: old,
        };

        let result = handle(state, FeedEvent::UrlChanged("http://new.example".to_string()));

        let FeedState::Editing { error, new_info, .. } = result.state else {
            panic!("expected Editing");
        };
        assert_eq!(error, "server returned 500");
        assert_eq!(new_info.url, "http://new.example");
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let old = FeedInfo::new("BBC", "http://bbc.com/rss");
        let state = editing(old.clone(), old);

        let result = handle(state.clone(), FeedEvent::SaveSucceeded);

        assert_eq!(result.state, state);
        assert!(result.effects.iter().all(|e| !e.is_request()));
    }
}
