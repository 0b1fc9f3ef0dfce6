//! State types for the feed row state machines.
//!
//! Following the principle of "make illegal states unrepresentable", each
//! variant carries exactly the data that is meaningful in that state. The
//! `old_info` field of `Editing`/`Saving` always holds the last value the
//! server confirmed, so cancelling an edit can restore it exactly.

use serde::{Deserialize, Serialize};

use crate::feed::FeedInfo;

/// The state machine for a single persisted feed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedState {
    /// At rest, displaying the feed. `error` is empty unless the last
    /// operation on this row failed.
    Viewing { error: String, info: FeedInfo },

    /// Inline edit in progress. `new_info` tracks the input fields,
    /// `old_info` the last server-confirmed value.
    Editing {
        error: String,
        new_info: FeedInfo,
        old_info: FeedInfo,
    },

    /// A save request is in flight.
    Saving {
        new_info: FeedInfo,
        old_info: FeedInfo,
    },

    /// Waiting for the user to confirm the deletion.
    ConfirmingDelete { info: FeedInfo },

    /// A delete request is in flight.
    Deleting { info: FeedInfo },
}

impl FeedState {
    /// Creates a rest state with no error.
    pub fn viewing(info: FeedInfo) -> Self {
        Self::Viewing {
            error: String::new(),
            info,
        }
    }

    /// The info the row currently displays.
    pub fn display_info(&self) -> &FeedInfo {
        match self {
            Self::Viewing { info, .. } => info,
            Self::Editing { new_info, .. } => new_info,
            Self::Saving { new_info, .. } => new_info,
            Self::ConfirmingDelete { info } => info,
            Self::Deleting { info } => info,
        }
    }

    /// The error message to display, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Viewing { error, .. } | Self::Editing { error, .. } => {
                (!error.is_empty()).then_some(error.as_str())
            }
            _ => None,
        }
    }

    /// Returns true while a request for this row is in flight.
    ///
    /// Busy rows never emit another request effect; the view disables the
    /// triggering controls while this is true.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Saving { .. } | Self::Deleting { .. })
    }
}

/// The state machine for the single draft (not-yet-created) row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DraftState {
    /// No draft being composed.
    #[default]
    Idle,

    /// Composing a new feed.
    Editing { error: String, info: FeedInfo },

    /// A create request is in flight.
    Saving { info: FeedInfo },
}

impl DraftState {
    /// Creates an editing state with empty fields and no error.
    pub fn editing() -> Self {
        Self::Editing {
            error: String::new(),
            info: FeedInfo::default(),
        }
    }

    /// Returns true while the create request is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Saving { .. })
    }
}
