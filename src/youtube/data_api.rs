use super::{ListerError, ListerProvider, VideoItem, VideoLister, YouTubeConfig};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const DEFAULT_API_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API v3 provider implementation.
///
/// One `search` call per request (single page, `maxResults` capped at 50 by
/// the API), optionally followed by one `videos` call to hydrate view
/// counts. Pagination is out of scope.
pub struct DataApiLister {
    config: YouTubeConfig,
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    description: Option<String>,
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    #[serde(default)]
    items: Vec<StatsItem>,
}

#[derive(Debug, Deserialize)]
struct StatsItem {
    id: String,
    statistics: Statistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    // The API returns counts as strings
    view_count: Option<String>,
}

impl DataApiLister {
    /// Create a Data API lister. The API key comes from configuration and is
    /// bound here at construction; there is no process-wide key.
    pub fn new(config: YouTubeConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| anyhow!("Data API provider requires an API key"))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let endpoint = config
            .api_endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        Ok(Self {
            config,
            client,
            api_key,
            endpoint,
        })
    }

    fn search_url(&self, channel_id: &str) -> Result<Url, ListerError> {
        let max = self.config.max_videos.min(50).to_string();
        Url::parse_with_params(
            &format!("{}/search", self.endpoint),
            &[
                ("key", self.api_key.as_str()),
                ("channelId", channel_id),
                ("part", "snippet"),
                ("order", "date"),
                ("type", "video"),
                ("maxResults", max.as_str()),
            ],
        )
        .map_err(|e| ListerError::Parse(format!("invalid search URL: {}", e)))
    }

    fn stats_url(&self, video_ids: &[String]) -> Result<Url, ListerError> {
        Url::parse_with_params(
            &format!("{}/videos", self.endpoint),
            &[
                ("key", self.api_key.as_str()),
                ("part", "statistics"),
                ("id", video_ids.join(",").as_str()),
            ],
        )
        .map_err(|e| ListerError::Parse(format!("invalid videos URL: {}", e)))
    }

    /// Fetch view counts for the given videos and annotate the items.
    ///
    /// A missing or unparsable count leaves the item's `view_count` as
    /// `None`; statistics are best-effort and never fail the listing.
    async fn hydrate_view_counts(
        &self,
        items: &mut [VideoItem],
    ) -> Result<(), ListerError> {
        let ids: Vec<String> = items.iter().map(|v| v.video_id.clone()).collect();
        if ids.is_empty() {
            return Ok(());
        }

        let response = self.client.get(self.stats_url(&ids)?).send().await?;
        if !response.status().is_success() {
            warn!("⚠️ View count lookup failed with {}", response.status());
            return Ok(());
        }

        let stats: StatsResponse = response
            .json()
            .await
            .map_err(|e| ListerError::Parse(format!("statistics response: {}", e)))?;

        let counts: HashMap<String, u64> = stats
            .items
            .into_iter()
            .filter_map(|item| {
                let count = item.statistics.view_count?.parse().ok()?;
                Some((item.id, count))
            })
            .collect();

        for item in items.iter_mut() {
            item.view_count = counts.get(&item.video_id).copied();
        }
        Ok(())
    }
}

#[async_trait]
impl VideoLister for DataApiLister {
    async fn list_videos(&self, channel_id: &str) -> Result<Vec<VideoItem>, ListerError> {
        let url = self.search_url(channel_id)?;
        debug!("Fetching video list from Data API for channel {}", channel_id);

        let response = self.client.get(url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(ListerError::ChannelNotFound(channel_id.to_string()));
            }
            status if !status.is_success() => {
                let text = response.text().await.unwrap_or_default();
                return Err(ListerError::Provider(format!(
                    "Data API error {}: {}",
                    status, text
                )));
            }
            _ => {}
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| ListerError::Parse(format!("search response: {}", e)))?;

        let mut items: Vec<VideoItem> = search
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some(VideoItem {
                    video_id,
                    title: item.snippet.title,
                    description: item.snippet.description,
                    view_count: None,
                    thumbnail_url: item
                        .snippet
                        .thumbnails
                        .and_then(|t| t.default)
                        .map(|t| t.url),
                })
            })
            .collect();

        if items.is_empty() {
            return Err(ListerError::NoVideos(channel_id.to_string()));
        }

        if self.config.fetch_view_counts {
            self.hydrate_view_counts(&mut items).await?;
        }

        info!("📺 Fetched {} videos for channel {}", items.len(), channel_id);
        Ok(items)
    }

    fn provider_type(&self) -> ListerProvider {
        ListerProvider::DataApi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lister() -> DataApiLister {
        DataApiLister::new(YouTubeConfig {
            provider: ListerProvider::DataApi,
            api_key: Some("test-key".to_string()),
            max_videos: 25,
            ..YouTubeConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_search_url_carries_key_channel_and_cap() {
        let url = lister().search_url("UCabc").unwrap();
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert!(query.contains(&("key".to_string(), "test-key".to_string())));
        assert!(query.contains(&("channelId".to_string(), "UCabc".to_string())));
        assert!(query.contains(&("maxResults".to_string(), "25".to_string())));
        assert!(query.contains(&("type".to_string(), "video".to_string())));
    }

    #[test]
    fn test_max_videos_is_clamped_to_api_page_limit() {
        let lister = DataApiLister::new(YouTubeConfig {
            provider: ListerProvider::DataApi,
            api_key: Some("k".to_string()),
            max_videos: 500,
            ..YouTubeConfig::default()
        })
        .unwrap();

        let url = lister.search_url("UCabc").unwrap();
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "maxResults" && v == "50"));
    }

    #[test]
    fn test_search_response_parsing() {
        let json = r#"{
            "items": [
                {
                    "id": {"videoId": "abc123"},
                    "snippet": {
                        "title": "Sourdough basics",
                        "description": "An intro",
                        "thumbnails": {"default": {"url": "https://img/x.jpg"}}
                    }
                },
                {
                    "id": {},
                    "snippet": {"title": "A playlist, no videoId"}
                }
            ]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.items[0].id.video_id.as_deref(), Some("abc123"));
        assert!(parsed.items[1].id.video_id.is_none());
    }

    #[test]
    fn test_statistics_counts_parse_from_strings() {
        let json = r#"{
            "items": [
                {"id": "abc123", "statistics": {"viewCount": "1024"}},
                {"id": "def456", "statistics": {}}
            ]
        }"#;
        let parsed: StatsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.items[0].statistics.view_count.as_deref(),
            Some("1024")
        );
        assert!(parsed.items[1].statistics.view_count.is_none());
    }
}
