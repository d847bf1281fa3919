use axum::{
    body::Body,
    extract::rejection::JsonRejection,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    domain::tts::{SynthesizeRequest, TtsService, TtsServiceApi},
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/tts - Convert text to speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        payload: Result<Json<SynthesizeRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let Json(request) = payload.map_err(reject_payload)?;

        let result = controller.tts_service.synthesize(request).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/wav"));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment; filename=\"speech.wav\""),
        );
        headers.insert("X-Voice-Used", HeaderValue::from_static(result.voice));
        headers.insert(
            "X-Character-Count",
            result.char_count.to_string().parse().unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from(result.audio)))
    }

    /// GET /api/tts - Describe the endpoint's accepted parameters
    pub async fn capabilities() -> Json<Value> {
        Json(json!({
            "message": "TTS API endpoint",
            "method": "POST",
            "parameters": {
                "text": "Text to convert to speech (required)",
                "voice": "Voice gender: 'male' or 'female' (optional, default: 'female')",
                "pitch": "Voice pitch 0-99 (optional, auto-set based on voice)",
                "speed": "Speech speed 80-450 wpm (optional, default: 160)",
                "volume": "Volume 0-200 (optional, default: 100)",
                "gap": "Gap between words in ms (optional, default: 10)"
            },
            "example": {
                "text": "Hello world, this is a test of the improved text to speech system",
                "voice": "female",
                "pitch": 60,
                "speed": 160,
                "volume": 100,
                "gap": 10
            }
        }))
    }
}

/// Map body-extraction rejections onto the documented 400 contract.
/// Field-level type errors keep the deserializer's detail; everything else
/// (absent body, syntax error, wrong content type) is "No JSON data provided".
fn reject_payload(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => AppError::BadRequest(err.body_text()),
        _ => AppError::BadRequest("No JSON data provided".to_string()),
    }
}
