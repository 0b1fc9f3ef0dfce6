//! HTTP client for the feeds API.

use std::fmt;

use async_trait::async_trait;
use feeddesk_core::feed::{FeedId, FeedInfo};
use feeddesk_core::wire::{FeedPayload, ServerFeed};

/// Why an API call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    Network { error: String },
    /// The server answered with a non-success status.
    Status { code: u16 },
    /// The response body could not be decoded.
    Decode { error: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network { error } => write!(f, "network error: {}", error),
            ApiError::Status { code } => write!(f, "server returned {}", code),
            ApiError::Decode { error } => write!(f, "invalid response body: {}", error),
        }
    }
}

impl std::error::Error for ApiError {}

/// The server operations the interpreter needs.
///
/// Implemented by [`HttpFeedsApi`] for production and by in-memory fakes in
/// tests.
#[async_trait]
pub trait FeedsApi: Send + Sync {
    /// GET /feeds
    async fn list_feeds(&self) -> Result<Vec<(FeedId, FeedInfo)>, ApiError>;

    /// POST /feeds, returning the server-assigned record.
    async fn create_feed(&self, info: &FeedInfo) -> Result<(FeedId, FeedInfo), ApiError>;

    /// PUT /feeds/{id}
    async fn update_feed(&self, id: &FeedId, info: &FeedInfo) -> Result<(), ApiError>;

    /// DELETE /feeds/{id}
    async fn delete_feed(&self, id: &FeedId) -> Result<(), ApiError>;
}

/// Client for the real feeds API.
pub struct HttpFeedsApi {
    client: reqwest::Client,
    api_base: String,
}

impl HttpFeedsApi {
    /// `api_base` is the server root, without a trailing slash.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }

    fn feeds_url(&self) -> String {
        format!("{}/feeds", self.api_base)
    }

    fn feed_url(&self, id: &FeedId) -> String {
        format!("{}/feeds/{}", self.api_base, id)
    }
}

fn send_error(error: reqwest::Error) -> ApiError {
    ApiError::Network {
        error: error.to_string(),
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), ApiError> {
    if !response.status().is_success() {
        return Err(ApiError::Status {
            code: response.status().as_u16(),
        });
    }
    Ok(())
}

#[async_trait]
impl FeedsApi for HttpFeedsApi {
    async fn list_feeds(&self) -> Result<Vec<(FeedId, FeedInfo)>, ApiError> {
        let response = self
            .client
            .get(self.feeds_url())
            .send()
            .await
            .map_err(send_error)?;
        check_status(&response)?;

        let feeds: Vec<ServerFeed> = response.json().await.map_err(|e| ApiError::Decode {
            error: e.to_string(),
        })?;

        Ok(feeds.into_iter().map(ServerFeed::into_parts).collect())
    }

    async fn create_feed(&self, info: &FeedInfo) -> Result<(FeedId, FeedInfo), ApiError> {
        let response = self
            .client
            .post(self.feeds_url())
            .json(&FeedPayload::from(info))
            .send()
            .await
            .map_err(send_error)?;
        check_status(&response)?;

        let feed: ServerFeed = response.json().await.map_err(|e| ApiError::Decode {
            error: e.to_string(),
        })?;

        Ok(feed.into_parts())
    }

    async fn update_feed(&self, id: &FeedId, info: &FeedInfo) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.feed_url(id))
            .json(&FeedPayload::from(info))
            .send()
            .await
            .map_err(send_error)?;
        check_status(&response)
    }

    async fn delete_feed(&self, id: &FeedId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.feed_url(id))
            .send()
            .await
            .map_err(send_error)?;
        check_status(&response)
    }
}
