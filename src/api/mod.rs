//! API module for the YouTube Keyword Analyzer
//!
//! Provides REST API endpoints for external integrations. Built only with
//! the `api` cargo feature.

use anyhow::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::analysis::ChannelAnalyzer;
use crate::config::Config;

pub mod handlers;
pub mod models;
pub mod server;

/// API Server for handling REST requests
pub struct ApiServer {
    analyzer: Arc<ChannelAnalyzer>,
    config: Arc<Config>,
    port: u16,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(analyzer: Arc<ChannelAnalyzer>, config: Arc<Config>, port: u16) -> Self {
        Self {
            analyzer,
            config,
            port,
        }
    }

    /// Start the API server in the background
    pub fn start_background(self) -> JoinHandle<Result<()>> {
        tokio::spawn(async move { self.start().await })
    }

    /// Start the API server
    pub async fn start(self) -> Result<()> {
        info!("🚀 Starting API server on port {}", self.port);

        server::start_http_server(self.analyzer, self.config, self.port).await
    }
}
