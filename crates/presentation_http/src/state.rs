//! Application state shared across handlers

use std::sync::Arc;

use document_text::DocumentTextExtractor;
use speech::{SpeechToText, TextToSpeech};

use crate::config::AppConfig;

/// Shared application state
///
/// Everything in here is read-only after startup; handlers are stateless
/// and reentrant across concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// Speech-to-text provider
    pub transcriber: Arc<dyn SpeechToText>,
    /// Text-to-speech provider
    pub synthesizer: Arc<dyn TextToSpeech>,
    /// Document text extractor
    pub extractor: Arc<DocumentTextExtractor>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
