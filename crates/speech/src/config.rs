//! Configuration for speech processing

use serde::{Deserialize, Serialize};

/// Configuration for speech processing services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Base URL of the speech recognition service
    #[serde(default = "default_recognizer_base_url")]
    pub recognizer_base_url: String,

    /// API key for the recognition service (optional)
    #[serde(default)]
    pub recognizer_api_key: Option<String>,

    /// Host template for the synthesis service
    ///
    /// The `{accent}` placeholder is replaced with the regional accent
    /// tag of the request (e.g. `com`, `co.uk`).
    #[serde(default = "default_synthesis_host_template")]
    pub synthesis_host_template: String,

    /// Default recognition language (BCP-47 tag)
    #[serde(default = "default_stt_language")]
    pub stt_language: String,

    /// Default synthesis language
    #[serde(default = "default_tts_language")]
    pub tts_language: String,

    /// Default regional accent for the synthesis voice
    #[serde(default = "default_accent")]
    pub accent: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl SpeechConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a human-readable message for the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.recognizer_base_url.trim().is_empty() {
            return Err("recognizer_base_url must not be empty".to_string());
        }
        if !self.synthesis_host_template.contains("{accent}") {
            return Err(
                "synthesis_host_template must contain an {accent} placeholder".to_string(),
            );
        }
        if self.timeout_ms == 0 {
            return Err("timeout_ms must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            recognizer_base_url: default_recognizer_base_url(),
            recognizer_api_key: None,
            synthesis_host_template: default_synthesis_host_template(),
            stt_language: default_stt_language(),
            tts_language: default_tts_language(),
            accent: default_accent(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_recognizer_base_url() -> String {
    "http://www.google.com".to_string()
}

fn default_synthesis_host_template() -> String {
    "https://translate.google.{accent}".to_string()
}

fn default_stt_language() -> String {
    "en-US".to_string()
}

fn default_tts_language() -> String {
    "en".to_string()
}

fn default_accent() -> String {
    "com".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}
