use super::dto::{InvocationPlan, SynthesizeRequest};
use super::error::TtsServiceError;
use crate::infrastructure::engine::SpeechSynthesizer;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SynthesisOutput {
    pub audio: Vec<u8>,
    /// Synthesizer voice identifier that produced the audio
    pub voice: &'static str,
    pub char_count: usize,
}

pub struct TtsService {
    engine: Arc<dyn SpeechSynthesizer>,
}

impl TtsService {
    pub fn new(engine: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { engine }
    }

    /// Readiness check for the underlying synthesizer
    pub async fn probe(&self) -> bool {
        self.engine.probe().await
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text to speech
    ///
    /// This operation:
    /// - Rejects empty text before any subprocess is spawned
    /// - Resolves the voice profile and parameter defaults
    /// - Invokes the synthesizer engine once
    ///
    /// Returns the audio bytes along with metadata (voice used, char count)
    async fn synthesize(
        &self,
        request: SynthesizeRequest,
    ) -> Result<SynthesisOutput, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        request: SynthesizeRequest,
    ) -> Result<SynthesisOutput, TtsServiceError> {
        if request.text.is_empty() {
            return Err(TtsServiceError::Invalid("No text provided".to_string()));
        }

        let plan = InvocationPlan::from_request(&request);

        tracing::info!(
            voice = plan.voice,
            pitch = plan.pitch,
            speed = plan.speed,
            volume = plan.volume,
            gap = plan.gap,
            text_length = plan.text.len(),
            "TTS synthesis request"
        );

        let audio = self.engine.synthesize(&plan).await?;

        tracing::info!(
            voice = plan.voice,
            audio_size = audio.len(),
            "TTS synthesis complete"
        );

        Ok(SynthesisOutput {
            audio,
            voice: plan.voice,
            char_count: request.text.len(),
        })
    }
}
