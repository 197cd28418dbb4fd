//! Document extraction errors

use thiserror::Error;

/// Errors that can occur during document text extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file extension is not in the supported format set
    #[error("Unsupported file format")]
    UnsupportedFormat {
        /// The extension that was rejected (lower-cased)
        extension: String,
    },

    /// Reading the staged file failed
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be parsed
    #[error("Failed to parse document: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_error_message() {
        let err = ExtractError::UnsupportedFormat {
            extension: "xyz".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported file format");
    }

    #[test]
    fn parse_error_message() {
        let err = ExtractError::Parse("bad zip".to_string());
        assert_eq!(err.to_string(), "Failed to parse document: bad zip");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ExtractError = io.into();
        assert!(matches!(err, ExtractError::Io(_)));
    }
}
