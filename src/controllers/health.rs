use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::tts::TtsService;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(tts_service): State<Arc<TtsService>>) -> impl IntoResponse {
    if tts_service.probe().await {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "synthesizer": "available"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "synthesizer": "unavailable"
            })),
        )
    }
}
