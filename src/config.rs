use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::keywords::{AnalysisConfig, TierPolicy};
use crate::youtube::{ListerProvider, YouTubeConfig};

/// Configuration for the YouTube Keyword Analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Keyword extraction settings
    pub analysis: AnalysisConfig,

    /// Video listing provider settings
    pub youtube: YouTubeConfig,

    /// HTTP API settings
    pub server: ServerConfig,

    /// Output settings
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the API server binds to
    pub port: u16,

    /// Allow cross-origin browser access
    pub enable_cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Log level
    pub log_level: String,

    /// Pretty-print JSON written by the CLI
    pub pretty_json: bool,
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        // Try to load from various locations
        let config_paths = [
            "yt-keyword-analyzer.toml",
            "config/yt-keyword-analyzer.toml",
            "~/.config/yt-keyword-analyzer/config.toml",
            "/etc/yt-keyword-analyzer/config.toml",
        ];

        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str(&config_str) {
                    Ok(config) => {
                        tracing::info!("📄 Loaded configuration from: {}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        // Fall back to defaults plus environment overrides
        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(api_key) = std::env::var("YT_ANALYZER_API_KEY") {
            config.youtube.api_key = Some(api_key);
        }

        if let Ok(provider) = std::env::var("YT_ANALYZER_PROVIDER") {
            config.youtube.provider = match provider.to_lowercase().as_str() {
                "data_api" | "data-api" => ListerProvider::DataApi,
                _ => ListerProvider::Feed,
            };
        }

        if let Ok(max_videos) = std::env::var("YT_ANALYZER_MAX_VIDEOS") {
            config.youtube.max_videos = max_videos.parse().unwrap_or(50);
        }

        if let Ok(port) = std::env::var("YT_ANALYZER_PORT") {
            config.server.port = port.parse().unwrap_or(8080);
        }

        if let Ok(log_level) = std::env::var("YT_ANALYZER_LOG_LEVEL") {
            config.output.log_level = log_level;
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        std::fs::write(path, config_str)?;
        tracing::info!("💾 Configuration saved to: {}", path);
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.youtube.max_videos == 0 {
            return Err(anyhow!("max_videos must be greater than 0"));
        }

        if self.analysis.tier_policy == TierPolicy::TopN && self.analysis.top_n == 0 {
            return Err(anyhow!("top_n must be greater than 0 for the top_n policy"));
        }

        if self.analysis.thresholds.secondary_floor == 0 {
            return Err(anyhow!("secondary_floor must be at least 1"));
        }

        if self.analysis.thresholds.primary_floor < self.analysis.thresholds.secondary_floor {
            return Err(anyhow!("primary_floor must not be below secondary_floor"));
        }

        if self.analysis.phrase_window < 2 {
            return Err(anyhow!("phrase_window must be at least 2"));
        }

        if self.youtube.provider == ListerProvider::DataApi && self.youtube.api_key.is_none() {
            return Err(anyhow!("API key required for the data_api provider"));
        }

        tracing::info!("✅ Configuration validation passed");
        Ok(())
    }

    /// Get runtime configuration summary
    pub fn summary(&self) -> String {
        format!(
            "YouTube Keyword Analyzer Configuration:\n\
            - Provider: {:?}\n\
            - Max Videos: {}\n\
            - Tier Policy: {:?}\n\
            - Top N: {}\n\
            - Thresholds: primary >= {}, secondary >= {}\n\
            - Stopword Filtering: {}\n\
            - Phrase Window: {} ({:?})\n\
            - Server Port: {}",
            self.youtube.provider,
            self.youtube.max_videos,
            self.analysis.tier_policy,
            self.analysis.top_n,
            self.analysis.thresholds.primary_floor,
            self.analysis.thresholds.secondary_floor,
            self.analysis.use_stopwords,
            self.analysis.phrase_window,
            self.analysis.phrase_scope,
            self.server.port
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            youtube: YouTubeConfig::default(),
            server: ServerConfig {
                port: 8080,
                enable_cors: true,
            },
            output: OutputConfig {
                log_level: "info".to_string(),
                pretty_json: true,
            },
        }
    }
}

/// Configuration builder for programmatic config creation
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_provider(mut self, provider: ListerProvider) -> Self {
        self.config.youtube.provider = provider;
        self
    }

    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.config.youtube.api_key = Some(api_key);
        self
    }

    pub fn with_max_videos(mut self, max_videos: u32) -> Self {
        self.config.youtube.max_videos = max_videos;
        self
    }

    pub fn with_tier_policy(mut self, policy: TierPolicy) -> Self {
        self.config.analysis.tier_policy = policy;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.config.analysis.top_n = top_n;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    pub fn use_stopwords(mut self, enable: bool) -> Self {
        self.config.analysis.use_stopwords = enable;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
