use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::keywords::{classify, AnalysisConfig, KeywordReport};
use crate::trends::{trend_links_for, TrendLink};
use crate::youtube::{ListerError, VideoItem, VideoLister};

/// Full analysis result for one channel request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelAnalysis {
    pub channel_id: String,

    /// Videos the text batch was built from
    pub video_count: usize,

    /// Keyword tiers and phrase candidates
    pub keywords: KeywordReport,

    /// Trends exploration links for the primary tier
    pub trends: Vec<TrendLink>,

    pub analyzed_at: DateTime<Utc>,
}

/// Orchestrates one analysis request: fetch videos, run the keyword core,
/// attach trend links.
///
/// The core is only invoked once the lister has produced a valid batch;
/// lister failures propagate to the caller untouched.
pub struct ChannelAnalyzer {
    lister: Box<dyn VideoLister>,
    config: AnalysisConfig,
}

impl ChannelAnalyzer {
    /// Create an analyzer around a video lister
    pub fn new(lister: Box<dyn VideoLister>, config: AnalysisConfig) -> Self {
        Self { lister, config }
    }

    /// Analyze a channel's recent uploads.
    pub async fn analyze(&self, channel_id: &str) -> Result<ChannelAnalysis, ListerError> {
        let videos = self.lister.list_videos(channel_id).await?;
        info!(
            "🔍 Analyzing {} videos from channel {}",
            videos.len(),
            channel_id
        );

        let texts = batch_texts(&videos, self.config.include_descriptions);
        let keywords = classify(&texts, &self.config);
        let trends =
            trend_links_for(keywords.tiers.primary.iter().map(|e| e.token.as_str()));

        info!(
            "✅ Extracted {} keywords and {} phrases for channel {}",
            keywords.tiers.len(),
            keywords.phrases.len(),
            channel_id
        );

        Ok(ChannelAnalysis {
            channel_id: channel_id.to_string(),
            video_count: videos.len(),
            keywords,
            trends,
            analyzed_at: Utc::now(),
        })
    }
}

/// One text per title; descriptions are appended as separate units so phrase
/// windows never run from a title into its description.
fn batch_texts(videos: &[VideoItem], include_descriptions: bool) -> Vec<String> {
    let mut texts: Vec<String> = Vec::with_capacity(videos.len());
    for video in videos {
        texts.push(video.title.clone());
        if include_descriptions {
            if let Some(description) = &video.description {
                if !description.is_empty() {
                    texts.push(description.clone());
                }
            }
        }
    }
    texts
}
