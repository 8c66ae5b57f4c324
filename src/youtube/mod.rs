//! Video listing collaborators.
//!
//! The keyword core never talks to the network; it consumes an ordered batch
//! of video records supplied by a `VideoLister`. Two providers are available:
//! the YouTube Data API v3 (needs an API key) and the public channel Atom
//! feed (keyless, titles only). Upstream failures are explicit error
//! variants, never panics, so the service layer can translate them into
//! user-visible responses before the core is invoked.

pub mod data_api;
pub mod feed;

// Re-export main types
pub use data_api::DataApiLister;
pub use feed::FeedLister;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Video listing provider types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListerProvider {
    DataApi,
    Feed,
}

/// Configuration for the video listing collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeConfig {
    /// Which provider backs the lister
    pub provider: ListerProvider,

    /// Data API key. Required for the `data_api` provider, carried here and
    /// handed to the lister at construction time.
    pub api_key: Option<String>,

    /// Data API base endpoint override
    pub api_endpoint: Option<String>,

    /// Atom feed base endpoint override
    pub feed_endpoint: Option<String>,

    /// Upper bound on fetched videos (the Data API caps one page at 50)
    pub max_videos: u32,

    /// Also fetch per-video view counts (Data API only, one extra call)
    pub fetch_view_counts: bool,

    /// HTTP request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            provider: ListerProvider::Feed,
            api_key: None,
            api_endpoint: None,
            feed_endpoint: None,
            max_videos: 50,
            fetch_view_counts: false,
            timeout_seconds: 30,
        }
    }
}

/// One video record as supplied by a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoItem {
    pub video_id: String,
    pub title: String,
    pub description: Option<String>,
    pub view_count: Option<u64>,
    pub thumbnail_url: Option<String>,
}

impl VideoItem {
    /// A record carrying only a title, the minimum every provider supplies.
    pub fn from_title(video_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            description: None,
            view_count: None,
            thumbnail_url: None,
        }
    }
}

/// Failures of the video listing collaborator.
#[derive(Debug, Error)]
pub enum ListerError {
    #[error("channel not found: {0}")]
    ChannelNotFound(String),

    #[error("no videos found for channel: {0}")]
    NoVideos(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse provider response: {0}")]
    Parse(String),
}

/// Trait for video listing providers
#[async_trait]
pub trait VideoLister: Send + Sync {
    /// Fetch the channel's most recent videos, newest first.
    async fn list_videos(&self, channel_id: &str) -> Result<Vec<VideoItem>, ListerError>;

    fn provider_type(&self) -> ListerProvider;
}

/// Create a lister instance based on configuration
pub fn create_lister(config: &YouTubeConfig) -> Result<Box<dyn VideoLister>> {
    match config.provider {
        ListerProvider::DataApi => Ok(Box::new(DataApiLister::new(config.clone())?)),
        ListerProvider::Feed => Ok(Box::new(FeedLister::new(config.clone())?)),
    }
}
