//! Translation and speech.

use tracing::instrument;

use squeak_core::models::{
    AudioHealthResponse, Empty, SpeechToTextRequest, SpeechToTextResponse, TextToSpeechRequest,
    TextToSpeechResponse, TranslateRequest, TranslateResponse,
};
use squeak_core::{ApiResult, Result};

use crate::endpoints::{AUDIO_HEALTH, SPEECH_TO_TEXT, TEXT_TO_SPEECH, TRANSLATE};
use crate::gate::AccessGate;

/// Health and translation return `Result`; speech synthesis and recognition
/// return [`ApiResult`] so usage-limit and `NO_TRANSCRIPT` failures come back
/// inline.
#[derive(Debug, Clone, Copy)]
pub struct AudioApi<'a> {
    gate: &'a AccessGate,
}

impl<'a> AudioApi<'a> {
    pub(crate) fn new(gate: &'a AccessGate) -> Self {
        Self { gate }
    }

    #[instrument(skip(self))]
    pub async fn ping_audio(&self) -> Result<AudioHealthResponse> {
        self.gate.call(&AUDIO_HEALTH, &Empty {}).await
    }

    #[instrument(skip(self))]
    pub async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse> {
        self.gate.call(&TRANSLATE, request).await
    }

    #[instrument(skip(self, request), fields(natural = request.natural))]
    pub async fn text_to_speech(
        &self,
        request: &TextToSpeechRequest,
    ) -> ApiResult<TextToSpeechResponse> {
        self.gate.call_with_errors(&TEXT_TO_SPEECH, request).await
    }

    #[instrument(skip(self, request), fields(premium = request.premium))]
    pub async fn speech_to_text(
        &self,
        request: &SpeechToTextRequest,
    ) -> ApiResult<SpeechToTextResponse> {
        self.gate.call_with_errors(&SPEECH_TO_TEXT, request).await
    }
}
