pub mod dto;
pub mod error;
pub mod service;
pub mod voice;

pub use dto::{InvocationPlan, SynthesizeRequest};
pub use error::TtsServiceError;
pub use service::{SynthesisOutput, TtsService, TtsServiceApi};
pub use voice::{VoiceGender, VoiceProfile};
