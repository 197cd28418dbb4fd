//! Port definitions for speech processing
//!
//! Defines the traits (ports) that speech processing adapters must implement.

use std::path::Path;

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::{SynthesizedAudio, Transcription};

/// Port for Speech-to-Text (STT) implementations
///
/// Implementations of this trait convert a staged audio file to a text
/// transcription. The caller owns the file and its lifetime; the
/// implementation only reads it.
///
/// # Example
///
/// ```ignore
/// use speech::SpeechToText;
///
/// async fn transcribe_upload(
///     stt: &dyn SpeechToText,
///     staged: &std::path::Path,
/// ) -> Result<String, SpeechError> {
///     let transcription = stt.transcribe(staged, "en-US").await?;
///     Ok(transcription.text)
/// }
/// ```
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe a staged audio file to text
    ///
    /// # Arguments
    ///
    /// * `audio` - Path to the staged audio file (waveform container)
    /// * `language` - BCP-47 language tag (e.g., "en-US", "de-DE")
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Unintelligible` when the recognizer produced
    /// no hypothesis, `SpeechError::RequestFailed` when the service was
    /// unreachable or rejected the request, and `SpeechError::Unexpected`
    /// for any other fault.
    async fn transcribe(
        &self,
        audio: &Path,
        language: &str,
    ) -> Result<Transcription, SpeechError>;
}

/// Port for Text-to-Speech (TTS) implementations
///
/// Implementations of this trait convert text to encoded speech audio.
/// Empty text is passed through to the provider unvalidated; what empty
/// input means is the provider's decision.
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// # Arguments
    ///
    /// * `text` - Text to synthesize
    /// * `language` - Synthesis language tag (e.g., "en", "de")
    /// * `accent` - Regional accent selector for the synthesis voice
    ///   (e.g., "com", "co.uk")
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::SynthesisFailed` when the provider call
    /// fails for any reason.
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        accent: &str,
    ) -> Result<SynthesizedAudio, SpeechError>;
}
