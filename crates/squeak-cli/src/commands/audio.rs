//! Translation and speech commands.

use anyhow::{Context, Result};
use clap::Subcommand;

use squeak_core::models::{SpeechToTextRequest, TextToSpeechRequest, TranslateRequest};
use squeak_http::SqueakClient;

use crate::output;

#[derive(Subcommand, Debug)]
pub enum AudioCommand {
    /// Check that the speech service is up
    Ping,

    /// Translate a sentence
    Translate {
        sentence: String,

        /// Source language code, e.g. en
        #[arg(long)]
        source: String,

        /// Target language code, e.g. fr
        #[arg(long)]
        target: String,
    },

    /// Synthesize speech; prints base64 audio
    Tts {
        text: String,

        /// e.g. fr-FR
        #[arg(long)]
        language_code: String,

        #[arg(long)]
        voice: String,

        /// Use the natural voice tier
        #[arg(long)]
        natural: bool,
    },

    /// Transcribe base64-encoded audio
    Stt {
        #[arg(long)]
        audio_content: String,

        #[arg(long)]
        language_code: String,

        /// Use the premium recognizer
        #[arg(long)]
        premium: bool,
    },
}

pub async fn run(cmd: AudioCommand, client: &SqueakClient) -> Result<()> {
    let audio = client.audio();
    match cmd {
        AudioCommand::Ping => {
            let health = audio
                .ping_audio()
                .await
                .context("Failed to reach audio service")?;
            output::json_pretty(&health)
        }
        AudioCommand::Translate {
            sentence,
            source,
            target,
        } => {
            let request = TranslateRequest {
                sentence,
                source,
                target,
            };
            let translated = audio
                .translate(&request)
                .await
                .context("Failed to translate")?;
            output::json_pretty(&translated)
        }
        AudioCommand::Tts {
            text,
            language_code,
            voice,
            natural,
        } => {
            let request = TextToSpeechRequest {
                text,
                language_code,
                voice_name: voice,
                natural,
            };
            output::api_result(audio.text_to_speech(&request).await)
        }
        AudioCommand::Stt {
            audio_content,
            language_code,
            premium,
        } => {
            let request = SpeechToTextRequest {
                audio_content,
                language_code,
                premium,
            };
            output::api_result(audio.speech_to_text(&request).await)
        }
    }
}
