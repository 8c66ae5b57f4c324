/// YouTube Keyword Analyzer - Rust Implementation
///
/// Extracts tiered keywords and phrase candidates from a YouTube channel's
/// recent video titles. The keyword core is a pure, synchronous pipeline;
/// video listing, trend links and the HTTP API sit around it as thin
/// collaborators.

pub mod analysis;
pub mod config;
pub mod keywords;
pub mod trends;
pub mod youtube;

#[cfg(feature = "api")]
pub mod api;

// Re-export main types for easy access
pub use crate::analysis::{ChannelAnalysis, ChannelAnalyzer};
pub use crate::config::{Config, ConfigBuilder, OutputConfig, ServerConfig};
pub use crate::keywords::{
    classify, AnalysisConfig, FrequencyTable, KeywordEntry, KeywordReport, KeywordTiers,
    PhraseScope, StopwordFilter, TierPolicy, TierThresholds, Tokenizer,
};
pub use crate::trends::{trend_links_for, trend_url, TrendLink};
pub use crate::youtube::{
    create_lister, DataApiLister, FeedLister, ListerError, ListerProvider, VideoItem,
    VideoLister, YouTubeConfig,
};

#[cfg(feature = "api")]
pub use crate::api::ApiServer;
