//! Google Speech Provider
//!
//! Implements `SpeechToText` against the Google Web Speech API and
//! `TextToSpeech` against the Google Translate TTS endpoint.
//!
//! # Wire formats
//!
//! ## STT
//! The recognition endpoint takes the raw waveform body and answers with
//! newline-separated JSON objects. The first object usually carries an
//! empty `result` list; a later one carries the hypotheses.
//!
//! ## TTS
//! The synthesis endpoint is host-selected by the regional accent tag
//! (`translate.google.com`, `translate.google.co.uk`, ...) and returns
//! MP3 bytes directly.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::{SpeechToText, TextToSpeech};
use crate::types::{AudioFormat, SynthesizedAudio, Transcription};

/// Google speech provider implementing both STT and TTS
#[derive(Debug, Clone)]
pub struct GoogleSpeechProvider {
    client: Client,
    config: SpeechConfig,
}

impl GoogleSpeechProvider {
    /// Create a new Google speech provider
    ///
    /// # Arguments
    ///
    /// * `config` - Speech configuration
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Build the recognition endpoint URL
    fn recognize_url(&self) -> String {
        format!(
            "{}/speech-api/v2/recognize",
            self.config.recognizer_base_url
        )
    }

    /// Build the synthesis endpoint URL for a regional accent
    fn synthesis_url(&self, accent: &str) -> String {
        let host = self.config.synthesis_host_template.replace("{accent}", accent);
        format!("{host}/translate_tts")
    }

    /// Pull the first hypothesis out of a newline-separated response body
    fn parse_hypothesis(body: &str) -> Result<RecognizeAlternative, SpeechError> {
        let mut saw_result = false;

        for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let Ok(parsed) = serde_json::from_str::<RecognizeResponse>(line) else {
                continue;
            };
            saw_result = true;

            if let Some(alternative) = parsed
                .result
                .into_iter()
                .flat_map(|r| r.alternative)
                .next()
            {
                return Ok(alternative);
            }
        }

        if saw_result {
            // The service answered but produced no hypothesis
            Err(SpeechError::Unintelligible)
        } else {
            Err(SpeechError::Unexpected(
                "unrecognized response from recognition service".to_string(),
            ))
        }
    }
}

/// One line of the recognition response
#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    result: Vec<RecognizeResult>,
}

#[derive(Debug, Deserialize)]
struct RecognizeResult {
    #[serde(default)]
    alternative: Vec<RecognizeAlternative>,
}

#[derive(Debug, Deserialize)]
struct RecognizeAlternative {
    transcript: String,
    #[serde(default)]
    confidence: Option<f32>,
}

#[async_trait]
impl SpeechToText for GoogleSpeechProvider {
    #[instrument(skip(self, audio), fields(language = %language))]
    async fn transcribe(
        &self,
        audio: &Path,
        language: &str,
    ) -> Result<Transcription, SpeechError> {
        let data = tokio::fs::read(audio).await.map_err(|e| {
            SpeechError::Unexpected(format!("failed to read staged audio: {e}"))
        })?;

        debug!(audio_size = data.len(), "Sending audio to recognizer");

        let mut query: Vec<(&str, &str)> = vec![("client", "chromium"), ("lang", language)];
        if let Some(key) = self.config.recognizer_api_key.as_deref() {
            query.push(("key", key));
        }

        let response = self
            .client
            .post(self.recognize_url())
            .query(&query)
            .header(CONTENT_TYPE, AudioFormat::Wav.mime_type())
            .body(data)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::RequestFailed(format!(
                "recognition service returned HTTP {status}"
            )));
        }

        let body = response.text().await.map_err(|e| {
            SpeechError::Unexpected(format!("failed to read recognition response: {e}"))
        })?;

        let alternative = Self::parse_hypothesis(&body)?;

        debug!(
            text_len = alternative.transcript.len(),
            confidence = ?alternative.confidence,
            "Transcription complete"
        );

        let mut transcription =
            Transcription::new(alternative.transcript).with_language(language);

        if let Some(confidence) = alternative.confidence {
            transcription = transcription.with_confidence(confidence);
        }

        Ok(transcription)
    }
}

#[async_trait]
impl TextToSpeech for GoogleSpeechProvider {
    #[instrument(skip(self, text), fields(text_len = text.len(), language = %language, accent = %accent))]
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        accent: &str,
    ) -> Result<SynthesizedAudio, SpeechError> {
        debug!("Requesting speech synthesis");

        // Any fault around the synthesis call collapses into one reported
        // reason; the caller only distinguishes success from failure here.
        let response = self
            .client
            .get(self.synthesis_url(accent))
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", language),
                ("client", "tw-ob"),
            ])
            .send()
            .await
            .map_err(|e| SpeechError::SynthesisFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::SynthesisFailed(format!(
                "synthesis service returned HTTP {status}"
            )));
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| SpeechError::SynthesisFailed(e.to_string()))?;

        debug!(audio_size = data.len(), "Synthesis complete");

        Ok(SynthesizedAudio::new(data.to_vec(), AudioFormat::Mp3))
    }
}
