//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during speech processing
///
/// Every external call site converts its failure into one of these
/// variants; nothing from a provider crosses the handler boundary as a
/// panic.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// The recognizer answered but produced no hypothesis
    #[error("Could not understand audio")]
    Unintelligible,

    /// Request to the recognition service failed or was rejected
    #[error("Could not request results: {0}")]
    RequestFailed(String),

    /// Synthesis request failed
    #[error("Error generating speech: {0}")]
    SynthesisFailed(String),

    /// Any other fault around a recognition call
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unintelligible_error_message() {
        let err = SpeechError::Unintelligible;
        assert_eq!(err.to_string(), "Could not understand audio");
    }

    #[test]
    fn request_failed_error_message() {
        let err = SpeechError::RequestFailed("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Could not request results: connection refused"
        );
    }

    #[test]
    fn synthesis_failed_error_message() {
        let err = SpeechError::SynthesisFailed("HTTP 500".to_string());
        assert_eq!(err.to_string(), "Error generating speech: HTTP 500");
    }

    #[test]
    fn unexpected_error_message() {
        let err = SpeechError::Unexpected("truncated body".to_string());
        assert_eq!(
            err.to_string(),
            "An unexpected error occurred: truncated body"
        );
    }

    #[test]
    fn configuration_error_message() {
        let err = SpeechError::Configuration("missing base URL".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing base URL");
    }
}
