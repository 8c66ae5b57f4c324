use super::{ListerError, ListerProvider, VideoItem, VideoLister, YouTubeConfig};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info};

const DEFAULT_FEED_ENDPOINT: &str = "https://www.youtube.com/feeds/videos.xml";

/// Channel Atom feed provider implementation.
///
/// Keyless fallback: YouTube publishes the latest ~15 uploads of every
/// channel as an Atom feed. Only titles (and watch links) are available, so
/// descriptions and view counts stay `None`.
pub struct FeedLister {
    config: YouTubeConfig,
    client: reqwest::Client,
    endpoint: String,
}

impl FeedLister {
    /// Create a feed lister instance
    pub fn new(config: YouTubeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let endpoint = config
            .feed_endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_FEED_ENDPOINT.to_string());

        Ok(Self {
            config,
            client,
            endpoint,
        })
    }

    /// Pull (video_id, title) pairs out of the feed document.
    fn parse_feed(document: &str) -> Vec<VideoItem> {
        let html = Html::parse_document(document);
        let entry_selector = Selector::parse("entry").unwrap();
        let title_selector = Selector::parse("title").unwrap();
        let link_selector = Selector::parse("link").unwrap();

        let mut items = Vec::new();
        for entry in html.select(&entry_selector) {
            let title = match entry.select(&title_selector).next() {
                Some(el) => el.text().collect::<String>().trim().to_string(),
                None => continue,
            };
            if title.is_empty() {
                continue;
            }

            let video_id = entry
                .select(&link_selector)
                .filter_map(|el| el.value().attr("href"))
                .find_map(Self::video_id_from_watch_url)
                .unwrap_or_default();

            items.push(VideoItem::from_title(video_id, title));
        }
        items
    }

    /// Extract the v= parameter from a watch URL.
    fn video_id_from_watch_url(href: &str) -> Option<String> {
        let url = url::Url::parse(href).ok()?;
        if !url.path().contains("watch") {
            return None;
        }
        url.query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.to_string())
    }
}

#[async_trait]
impl VideoLister for FeedLister {
    async fn list_videos(&self, channel_id: &str) -> Result<Vec<VideoItem>, ListerError> {
        let url = format!("{}?channel_id={}", self.endpoint, channel_id);
        debug!("Fetching channel feed from {}", url);

        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(ListerError::ChannelNotFound(channel_id.to_string()));
            }
            status if !status.is_success() => {
                return Err(ListerError::Provider(format!(
                    "feed request failed with {}",
                    status
                )));
            }
            _ => {}
        }

        let body = response.text().await?;
        let mut items = Self::parse_feed(&body);

        if items.is_empty() {
            return Err(ListerError::NoVideos(channel_id.to_string()));
        }
        items.truncate(self.config.max_videos as usize);

        info!("📺 Fetched {} videos from channel feed", items.len());
        Ok(items)
    }

    fn provider_type(&self) -> ListerProvider {
        ListerProvider::Feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Channel title, not an entry</title>
  <entry>
    <title>Sourdough starter day one</title>
    <link rel="alternate" href="https://www.youtube.com/watch?v=vid001"/>
  </entry>
  <entry>
    <title>Overnight focaccia basics</title>
    <link rel="alternate" href="https://www.youtube.com/watch?v=vid002"/>
  </entry>
</feed>"#;

    #[test]
    fn test_feed_parsing_extracts_entry_titles() {
        let items = FeedLister::parse_feed(FEED);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Sourdough starter day one");
        assert_eq!(items[0].video_id, "vid001");
        assert_eq!(items[1].title, "Overnight focaccia basics");
        assert!(items[0].description.is_none());
        assert!(items[0].view_count.is_none());
    }

    #[test]
    fn test_channel_level_title_is_not_a_video() {
        let items = FeedLister::parse_feed(FEED);
        assert!(!items.iter().any(|v| v.title.contains("Channel title")));
    }

    #[test]
    fn test_empty_feed_parses_to_no_items() {
        let items = FeedLister::parse_feed("<feed></feed>");
        assert!(items.is_empty());
    }

    #[test]
    fn test_video_id_from_watch_url() {
        assert_eq!(
            FeedLister::video_id_from_watch_url("https://www.youtube.com/watch?v=abc"),
            Some("abc".to_string())
        );
        assert_eq!(
            FeedLister::video_id_from_watch_url("https://www.youtube.com/channel/UC1"),
            None
        );
        assert_eq!(FeedLister::video_id_from_watch_url("not a url"), None);
    }
}
