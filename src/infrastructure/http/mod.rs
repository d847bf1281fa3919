use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, home, tts::TtsController};
use crate::domain::tts::TtsService;
use crate::infrastructure::config::Config;

mod request_id;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router with all routes configured
pub fn build_router(tts_service: Arc<TtsService>, tts_controller: Arc<TtsController>) -> Router {
    // TTS routes: descriptor + synthesis on the same path
    let tts_routes = Router::new()
        .route(
            "/api/tts",
            get(TtsController::capabilities).post(TtsController::synthesize),
        )
        .with_state(tts_controller);

    // Health routes probe the synthesizer for readiness
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(tts_service);

    Router::new()
        .route("/", get(home::home))
        .merge(health_routes)
        .merge(tts_routes)
        .layer(middleware::from_fn(request_id_middleware))
        // Cross-origin requests are permitted from any origin on all routes
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    tts_service: Arc<TtsService>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(tts_service, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
