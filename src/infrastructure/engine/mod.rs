use crate::domain::tts::InvocationPlan;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

mod espeak;

pub use espeak::EspeakSynthesizer;

/// Engine for speech synthesis.
/// Abstracts the underlying synthesizer program (espeak-ng, flite, etc.)
///
/// Implementations are responsible for:
/// - Running one synthesis per call with a bounded wait
/// - Owning the output artifact for the duration of the call
/// - Cleaning up the artifact on every exit path
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize one invocation plan into audio bytes (WAV)
    ///
    /// # Errors
    /// Returns `EngineError` distinguishing spawn failure, non-zero exit,
    /// timeout, and a missing output artifact
    async fn synthesize(&self, plan: &InvocationPlan) -> Result<Vec<u8>, EngineError>;

    /// Cheap availability check, used by the readiness endpoint
    async fn probe(&self) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("synthesizer binary not found: {0}")]
    NotFound(String),

    #[error("synthesizer exited with status {}: {}", display_status(.status), .stderr)]
    Failed {
        status: Option<i32>,
        stderr: String,
    },

    #[error("synthesis timed out after {}s", .0.as_secs())]
    TimedOut(Duration),

    #[error("no audio artifact produced at {}", .0.display())]
    MissingOutput(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        // Unix: the child was killed by a signal
        None => "signal".to_string(),
    }
}
