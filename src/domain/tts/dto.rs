use serde::{Deserialize, Serialize};

use super::voice::VoiceGender;

fn default_speed() -> u32 {
    160
}

fn default_volume() -> u32 {
    100
}

fn default_gap() -> u32 {
    10
}

/// Request for POST /api/tts
///
/// `text` defaults to empty so a missing key and an explicit "" are rejected
/// the same way, after deserialization. Numeric fields are typed but their
/// ranges are not enforced server-side; the synthesizer interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub voice: VoiceGender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<u32>,
    #[serde(default = "default_speed")]
    pub speed: u32,
    #[serde(default = "default_volume")]
    pub volume: u32,
    #[serde(default = "default_gap")]
    pub gap: u32,
}

/// Fully-resolved synthesizer arguments for one invocation.
///
/// Derivation from a request is the only place voice defaults are applied;
/// an explicit pitch always wins over the gender default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationPlan {
    pub voice: &'static str,
    pub pitch: u32,
    pub speed: u32,
    pub volume: u32,
    pub gap: u32,
    pub text: String,
}

impl InvocationPlan {
    pub fn from_request(request: &SynthesizeRequest) -> Self {
        let profile = request.voice.profile();
        Self {
            voice: profile.identifier,
            pitch: request.pitch.unwrap_or(profile.default_pitch),
            speed: request.speed,
            volume: request.volume,
            gap: request.gap,
            text: request.text.clone(),
        }
    }
}
