//! Types for speech processing
//!
//! Contains data structures for audio payloads and transcription results.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Audio formats handled by this service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// WAV format (uncompressed), the upload container the recognizer accepts
    Wav,
    /// MP3 format, what the synthesis service returns
    Mp3,
}

impl AudioFormat {
    /// Get the MIME type for this audio format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
        }
    }

    /// Get the file extension for this audio format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
        }
    }
}

/// Result of speech-to-text transcription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    /// Transcribed text
    pub text: String,
    /// Language the recognizer was asked to use (BCP-47 tag)
    pub language: Option<String>,
    /// Confidence score reported by the recognizer (0.0 - 1.0)
    pub confidence: Option<f32>,
}

impl Transcription {
    /// Create a simple transcription with just text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            confidence: None,
        }
    }

    /// Set the language tag
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the confidence score
    #[must_use]
    pub const fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Check if transcription is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Encoded audio returned by a text-to-speech provider
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// Raw audio bytes
    data: Vec<u8>,
    /// Audio format
    format: AudioFormat,
}

impl SynthesizedAudio {
    /// Create new synthesized audio
    #[must_use]
    pub const fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Get the raw audio bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw audio bytes
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the audio format
    #[must_use]
    pub const fn format(&self) -> AudioFormat {
        self.format
    }

    /// Get the size of the audio data in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Check if the audio data is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the MIME type for this audio
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Encode the audio as a base64 string for JSON transport
    ///
    /// JSON cannot carry arbitrary binary safely, so responses ship the
    /// audio payload as standard base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }
}
