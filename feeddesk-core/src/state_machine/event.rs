//! Events that trigger state transitions.
//!
//! Events represent things that happened - user clicks, input edits, and the
//! resolutions of in-flight HTTP requests. They are inputs to the pure
//! transition functions.
//!
//! Two results are deliberately absent: a confirmed deletion removes the row
//! from the collection, and a confirmed creation inserts one, so both are
//! handled by the store rather than by a per-row machine.

/// Events addressed to a persisted feed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    // =========================================================================
    // User Actions
    // =========================================================================
    /// User asked to edit this row inline.
    EditRequested,

    /// User asked to delete this row.
    DeleteRequested,

    /// User submitted the edited fields.
    SaveRequested,

    /// User abandoned the edit; the row shows the last saved value again.
    CancelRequested,

    /// User typed in the name field.
    NameChanged(String),

    /// User typed in the url field.
    UrlChanged(String),

    /// User confirmed the pending deletion.
    DeleteConfirmed,

    /// User dismissed the pending deletion.
    DeleteDismissed,

    // =========================================================================
    // Request Results
    // =========================================================================
    /// The save request resolved successfully.
    SaveSucceeded,

    /// The save request failed; the row returns to editing with the message.
    SaveFailed(String),

    /// The delete request failed; the row stays in the collection with the
    /// message. (Delete success is handled by the store.)
    DeleteFailed(String),
}

impl FeedEvent {
    /// Returns a short description of the event suitable for logging.
    pub fn log_summary(&self) -> String {
        match self {
            Self::EditRequested => "EditRequested".to_string(),
            Self::DeleteRequested => "DeleteRequested".to_string(),
            Self::SaveRequested => "SaveRequested".to_string(),
            Self::CancelRequested => "CancelRequested".to_string(),
            Self::NameChanged(name) => format!("NameChanged {{ name: {} }}", name),
            Self::UrlChanged(url) => format!("UrlChanged {{ url: {} }}", url),
            Self::DeleteConfirmed => "DeleteConfirmed".to_string(),
            Self::DeleteDismissed => "DeleteDismissed".to_string(),
            Self::SaveSucceeded => "SaveSucceeded".to_string(),
            Self::SaveFailed(error) => format!("SaveFailed {{ error: {} }}", error),
            Self::DeleteFailed(error) => format!("DeleteFailed {{ error: {} }}", error),
        }
    }
}

/// Events addressed to the singleton draft row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEvent {
    /// User asked to compose a new feed.
    AddRequested,

    /// User submitted the draft.
    SaveRequested,

    /// User abandoned the draft.
    CancelRequested,

    /// User typed in the name field.
    NameChanged(String),

    /// User typed in the url field.
    UrlChanged(String),

    /// The create request failed; the draft returns to editing with the
    /// message. (Create success is handled by the store.)
    CreateFailed(String),
}

impl DraftEvent {
    /// Returns a short description of the event suitable for logging.
    pub fn log_summary(&self) -> String {
        match self {
            Self::AddRequested => "AddRequested".to_string(),
            Self::SaveRequested => "SaveRequested".to_string(),
            Self::CancelRequested => "CancelRequested".to_string(),
            Self::NameChanged(name) => format!("NameChanged {{ name: {} }}", name),
            Self::UrlChanged(url) => format!("UrlChanged {{ url: {} }}", url),
            Self::CreateFailed(error) => format!("CreateFailed {{ error: {} }}", error),
        }
    }
}
