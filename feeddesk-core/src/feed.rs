//! Core value types for feed records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype for a server-assigned feed identifier.
///
/// Ids are opaque strings and are never reused within a session. The derived
/// ordering gives the collection a stable display order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FeedId(pub String);

impl fmt::Display for FeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FeedId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FeedId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A feed's user-visible fields.
///
/// Immutable value: edits produce a new copy, never mutate in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedInfo {
    pub name: String,
    pub url: String,
}

impl FeedInfo {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Returns a copy with the name replaced.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: self.url.clone(),
        }
    }

    /// Returns a copy with the url replaced.
    pub fn with_url(&self, url: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            url: url.into(),
        }
    }
}
