//! Effects (side effects as data).
//!
//! Effects describe what should happen as a result of a state transition.
//! They are pure data - the interpreter executes them against the real HTTP
//! API. This separation enables testing the transition logic without mocking
//! HTTP.

use serde::{Deserialize, Serialize};

use crate::feed::FeedInfo;

/// All effects that can be produced by state transitions.
///
/// Request effects are addressed by the store when it forwards them: a
/// `SaveFeed`/`DeleteFeed` emitted by a row is executed against that row's
/// id, and `CreateFeed` against the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// `PUT` the given fields to the originating row's resource.
    SaveFeed { info: FeedInfo },

    /// `DELETE` the originating row's resource.
    DeleteFeed,

    /// `POST` the given fields to create a new feed.
    CreateFeed { info: FeedInfo },

    /// Log a message (for debugging/tracing).
    Log { level: LogLevel, message: String },
}

impl Effect {
    /// Returns true if this effect turns into an HTTP request.
    ///
    /// A transition emits at most one request effect, and only from a
    /// non-busy state; that is what guarantees a single in-flight request
    /// per row.
    pub fn is_request(&self) -> bool {
        !matches!(self, Effect::Log { .. })
    }
}

/// Log level for logging effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_request() {
        assert!(Effect::DeleteFeed.is_request());
        assert!(Effect::SaveFeed {
            info: FeedInfo::default()
        }
        .is_request());
        assert!(Effect::CreateFeed {
            info: FeedInfo::default()
        }
        .is_request());
        assert!(!Effect::Log {
            level: LogLevel::Info,
            message: "hello".to_string()
        }
        .is_request());
    }
}
