//! HTTP server implementation for the API

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::analysis::{ChannelAnalysis, ChannelAnalyzer};
use crate::config::Config;
use crate::youtube::ListerError;

use super::{
    handlers,
    models::{AnalyzeRequest, ApiResponse},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<ChannelAnalyzer>,
    pub config: Arc<Config>,
}

/// Configure and start the HTTP server
pub async fn start_http_server(
    analyzer: Arc<ChannelAnalyzer>,
    config: Arc<Config>,
    port: u16,
) -> Result<()> {
    info!("🚀 Starting HTTP server on port {}", port);

    let enable_cors = config.server.enable_cors;
    let app_state = AppState { analyzer, config };

    // Build the application with routes
    let mut app = Router::new()
        // Health check endpoints (both paths for compatibility)
        .route("/health", get(health_handler))
        .route("/api/health", get(health_handler))
        // Analysis endpoints
        .route("/api/analyze", post(analyze_handler))
        .route("/api/config", get(config_handler))
        // Add state and middleware
        .with_state(app_state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if enable_cors {
        // Configure CORS to allow browser access
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);
        app = app.layer(cors);
    }

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("🌐 API server listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    match handlers::health_check().await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => {
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            (status, Json(serde_json::json!({"error": e.to_string()}))).into_response()
        }
    }
}

/// Channel analysis handler
async fn analyze_handler(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    match handlers::analyze_channel(&state.analyzer, &payload.channel_id).await {
        Ok(analysis) => {
            (StatusCode::OK, Json(ApiResponse::success(analysis))).into_response()
        }
        Err(e) => {
            let status = status_for(&e);
            (
                status,
                Json(ApiResponse::<ChannelAnalysis>::error(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Config summary handler
async fn config_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(handlers::config_summary(&state.config)),
    )
        .into_response()
}

/// Map lister failures to response codes. The keyword core never errors;
/// everything here is an upstream condition.
fn status_for(err: &ListerError) -> StatusCode {
    match err {
        ListerError::ChannelNotFound(_) | ListerError::NoVideos(_) => StatusCode::NOT_FOUND,
        ListerError::Provider(_) | ListerError::Http(_) => StatusCode::BAD_GATEWAY,
        ListerError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
