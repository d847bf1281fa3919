use speakbox_backend::controllers::tts::TtsController;
use speakbox_backend::domain::tts::TtsService;
use speakbox_backend::infrastructure::config::{Config, LogFormat};
use speakbox_backend::infrastructure::engine::{EspeakSynthesizer, SpeechSynthesizer};
use speakbox_backend::infrastructure::http::start_http_server;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Speakbox Backend on {}:{}",
        config.host,
        config.port
    );

    // Make sure the artifact scratch directory exists before the first request
    std::fs::create_dir_all(&config.work_dir)?;

    let engine = Arc::new(EspeakSynthesizer::new(
        config.engine_binary.clone(),
        config.work_dir.clone(),
        Duration::from_secs(config.synthesis_timeout_secs),
    ));

    // The synthesizer is a runtime dependency; missing it only fails requests,
    // not startup, so surface it loudly here
    if engine.probe().await {
        tracing::info!(binary = %config.engine_binary, "Synthesizer binary available");
    } else {
        tracing::warn!(
            binary = %config.engine_binary,
            "Synthesizer binary not responding; POST /api/tts will fail until it is installed"
        );
    }

    let config = Arc::new(config);

    // Instantiate service and controller
    let tts_service = Arc::new(TtsService::new(engine));
    let tts_controller = Arc::new(TtsController::new(tts_service.clone()));

    // Start HTTP server with all routes
    start_http_server(config, tts_service, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "speakbox_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "speakbox_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
