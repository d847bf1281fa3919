use serde::{de, Deserialize, Deserializer, Serialize};

/// Voice gender selector accepted on the wire.
///
/// Matching is case-insensitive; anything other than "male" or "female" is a
/// deserialization error rather than a silent fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    Male,
    #[default]
    Female,
}

impl<'de> Deserialize<'de> for VoiceGender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(de::Error::unknown_variant(other, &["male", "female"])),
        }
    }
}

/// Synthesizer voice variant paired with its default pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceProfile {
    pub identifier: &'static str,
    pub default_pitch: u32,
}

impl VoiceGender {
    pub fn profile(self) -> VoiceProfile {
        match self {
            Self::Male => VoiceProfile {
                identifier: "en+m3",
                default_pitch: 40,
            },
            Self::Female => VoiceProfile {
                identifier: "en+f3",
                default_pitch: 60,
            },
        }
    }
}
