//! Wire representation of feeds as the HTTP API speaks them.
//!
//! The server calls the name `title` and the url `origin`. This module is the
//! only place that mapping lives: decode turns `title`/`origin` into
//! [`FeedInfo`]'s `name`/`url`, encode does the reverse.

use serde::{Deserialize, Serialize};

use crate::feed::{FeedId, FeedInfo};

/// A feed record as returned by `GET /feeds` and `POST /feeds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerFeed {
    pub id: String,
    pub title: String,
    pub origin: String,
}

impl ServerFeed {
    /// Splits the wire record into the id and the client-side value type.
    pub fn into_parts(self) -> (FeedId, FeedInfo) {
        (FeedId(self.id), FeedInfo::new(self.title, self.origin))
    }
}

/// Request body for `POST /feeds` and `PUT /feeds/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPayload {
    pub title: String,
    pub origin: String,
}

impl From<&FeedInfo> for FeedPayload {
    fn from(info: &FeedInfo) -> Self {
        Self {
            title: info.name.clone(),
            origin: info.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_maps_title_and_origin() {
        let json = r#"{"id":"7","title":"BBC","origin":"http://bbc.com/rss"}"#;
        let feed: ServerFeed = serde_json::from_str(json).unwrap();
        let (id, info) = feed.into_parts();
        assert_eq!(id, FeedId::from("7"));
        assert_eq!(info.name, "BBC");
        assert_eq!(info.url, "http://bbc.com/rss");
    }

    #[test]
    fn test_encode_maps_name_and_url() {
        let info = FeedInfo::new("BBC", "http://bbc.com/rss");
        let payload = FeedPayload::from(&info);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "BBC", "origin": "http://bbc.com/rss"})
        );
    }

    #[test]
    fn test_decode_list() {
        let json = r#"[
            {"id":"1","title":"A","origin":"http://a.example/rss"},
            {"id":"2","title":"B","origin":"http://b.example/rss"}
        ]"#;
        let feeds: Vec<ServerFeed> = serde_json::from_str(json).unwrap();
        assert_eq!(feeds.len(), 2);
        assert_eq!(feeds[1].title, "B");
    }
}
