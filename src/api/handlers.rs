//! API request handlers

use anyhow::Result;
use serde_json::Value;

use crate::analysis::{ChannelAnalysis, ChannelAnalyzer};
use crate::config::Config;
use crate::youtube::ListerError;

/// Handle health check requests
pub async fn health_check() -> Result<Value> {
    Ok(serde_json::json!({
        "status": "healthy",
        "service": "yt-keyword-analyzer",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle channel analysis requests.
///
/// Lister failures come back as `ListerError` so the server layer can map
/// them to status codes; the keyword core itself cannot fail.
pub async fn analyze_channel(
    analyzer: &ChannelAnalyzer,
    channel_id: &str,
) -> Result<ChannelAnalysis, ListerError> {
    analyzer.analyze(channel_id).await
}

/// Expose the non-secret parts of the running configuration.
pub fn config_summary(config: &Config) -> Value {
    serde_json::json!({
        "provider": config.youtube.provider,
        "max_videos": config.youtube.max_videos,
        "tier_policy": config.analysis.tier_policy,
        "top_n": config.analysis.top_n,
        "thresholds": config.analysis.thresholds,
        "use_stopwords": config.analysis.use_stopwords,
        "phrase_window": config.analysis.phrase_window,
        "phrase_scope": config.analysis.phrase_scope,
        "include_descriptions": config.analysis.include_descriptions,
    })
}
