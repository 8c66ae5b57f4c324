use anyhow::Result;
use clap::{Arg, Command};
use tracing::{info, warn};

use yt_keyword_analyzer::config::Config;
use yt_keyword_analyzer::keywords::TierPolicy;
use yt_keyword_analyzer::youtube::{create_lister, ListerProvider};
use yt_keyword_analyzer::ChannelAnalyzer;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("YouTube Keyword Analyzer (Rust)")
        .version("0.1.0")
        .author("TigreRoll")
        .about("Tiered keyword extraction from a YouTube channel's recent uploads")
        .arg(
            Arg::new("channel")
                .short('c')
                .long("channel")
                .value_name("CHANNEL_ID")
                .help("Channel id to analyze (e.g. UCxxxxxxxx)"),
        )
        .arg(
            Arg::new("provider")
                .short('p')
                .long("provider")
                .value_name("PROVIDER")
                .help("Video listing provider: data-api or feed"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("YouTube Data API key (data-api provider only)"),
        )
        .arg(
            Arg::new("max-videos")
                .short('m')
                .long("max-videos")
                .value_name("NUM")
                .help("Upper bound on fetched videos (max 50)"),
        )
        .arg(
            Arg::new("policy")
                .long("policy")
                .value_name("POLICY")
                .help("Tiering policy: top-n or threshold-band"),
        )
        .arg(
            Arg::new("serve")
                .short('s')
                .long("serve")
                .help("Run the HTTP API server instead of a one-shot analysis")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .value_name("PORT")
                .help("Port for the HTTP API server"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");

    // Initialize logging
    let default_filter = if verbose {
        "yt_keyword_analyzer=debug,info"
    } else {
        "yt_keyword_analyzer=info,warn"
    };
    tracing_subscriber::fmt().with_env_filter(default_filter).init();

    // Load configuration
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    // Apply command-line overrides
    if let Some(provider) = matches.get_one::<String>("provider") {
        config.youtube.provider = match provider.as_str() {
            "data-api" | "data_api" => ListerProvider::DataApi,
            "feed" => ListerProvider::Feed,
            other => {
                return Err(anyhow::anyhow!("unknown provider: {}", other));
            }
        };
    }
    if let Some(api_key) = matches.get_one::<String>("api-key") {
        config.youtube.api_key = Some(api_key.clone());
    }
    if let Some(max_videos) = matches.get_one::<String>("max-videos") {
        config.youtube.max_videos = max_videos.parse()?;
    }
    if let Some(policy) = matches.get_one::<String>("policy") {
        config.analysis.tier_policy = match policy.as_str() {
            "top-n" | "top_n" => TierPolicy::TopN,
            "threshold-band" | "threshold_band" => TierPolicy::ThresholdBand,
            other => {
                return Err(anyhow::anyhow!("unknown tier policy: {}", other));
            }
        };
    }
    if let Some(port) = matches.get_one::<String>("port") {
        config.server.port = port.parse()?;
    }

    config.validate()?;
    info!("🚀 YouTube Keyword Analyzer (Rust) starting...");
    info!("🔧 Provider: {:?}", config.youtube.provider);

    if matches.get_flag("serve") {
        return serve(config).await;
    }

    let channel_id = matches
        .get_one::<String>("channel")
        .ok_or_else(|| anyhow::anyhow!("--channel is required unless --serve is given"))?;

    let lister = create_lister(&config.youtube)?;
    let analyzer = ChannelAnalyzer::new(lister, config.analysis.clone());

    let start_time = std::time::Instant::now();
    let analysis = analyzer.analyze(channel_id).await?;
    let duration = start_time.elapsed();

    info!("🎉 Analysis completed in {:.2}s", duration.as_secs_f64());
    info!("📺 Videos analyzed: {}", analysis.video_count);
    info!(
        "🔑 Keywords: {} primary, {} secondary, {} extended",
        analysis.keywords.tiers.primary.len(),
        analysis.keywords.tiers.secondary.len(),
        analysis.keywords.tiers.extended.len()
    );

    let json = if config.output.pretty_json {
        serde_json::to_string_pretty(&analysis)?
    } else {
        serde_json::to_string(&analysis)?
    };
    println!("{}", json);

    Ok(())
}

#[cfg(feature = "api")]
async fn serve(config: Config) -> Result<()> {
    use std::sync::Arc;
    use yt_keyword_analyzer::ApiServer;

    let lister = create_lister(&config.youtube)?;
    let analyzer = Arc::new(ChannelAnalyzer::new(lister, config.analysis.clone()));
    let port = config.server.port;

    ApiServer::new(analyzer, Arc::new(config), port).start().await
}

#[cfg(not(feature = "api"))]
async fn serve(_config: Config) -> Result<()> {
    Err(anyhow::anyhow!(
        "server mode requires building with the 'api' feature"
    ))
}
