//! Translation and speech.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioHealthResponse {
    /// `live` when the speech service is reachable.
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub sentence: String,
    /// Source language code, e.g. `en`.
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub sentence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextToSpeechRequest {
    pub text: String,
    /// BCP 47 tag, e.g. `fr-FR`.
    pub language_code: String,
    pub voice_name: String,
    /// Use the natural voice tier, which counts against the usage limit.
    #[serde(default)]
    pub natural: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextToSpeechResponse {
    /// Base64-encoded audio.
    pub audio_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechToTextRequest {
    /// Base64-encoded audio.
    pub audio_content: String,
    pub language_code: String,
    #[serde(default)]
    pub premium: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechToTextResponse {
    pub transcript: String,
}
