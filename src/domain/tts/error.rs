use crate::error::AppError;
use crate::infrastructure::engine::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Engine(engine) => match engine {
                EngineError::Failed { .. } | EngineError::TimedOut(_) => {
                    AppError::SynthesisFailed(engine.to_string())
                }
                EngineError::MissingOutput(_) => AppError::AudioMissing,
                EngineError::NotFound(_) | EngineError::Io(_) => {
                    AppError::Internal(engine.to_string())
                }
            },
        }
    }
}
