//! Extraction dispatch

use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::error::ExtractError;
use crate::format::DocumentFormat;
use crate::readers;

/// Extracts plain text from uploaded documents
///
/// Consulted, never mutated, at request time; cheap to clone and share.
#[derive(Debug, Clone)]
pub struct DocumentTextExtractor {
    /// Executable used for legacy `.doc` files
    doc_tool: PathBuf,
}

impl Default for DocumentTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTextExtractor {
    /// Create an extractor using `antiword` from `PATH` for `.doc` files
    #[must_use]
    pub fn new() -> Self {
        Self {
            doc_tool: PathBuf::from("antiword"),
        }
    }

    /// Create an extractor with an explicit legacy-tool path
    #[must_use]
    pub fn with_doc_tool(tool: impl Into<PathBuf>) -> Self {
        Self {
            doc_tool: tool.into(),
        }
    }

    /// Extract plain text from a staged document
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the staged file
    /// * `extension` - Declared file extension (with or without dot)
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::UnsupportedFormat` for extensions outside
    /// the supported set, before any file I/O. Parse and I/O failures
    /// for `.docx`/`.pdf` surface as `Parse`/`Io`; the legacy `.doc`
    /// path is best-effort and degrades to descriptive text instead.
    #[instrument(skip(self, path), fields(extension = %extension))]
    pub async fn extract(&self, path: &Path, extension: &str) -> Result<String, ExtractError> {
        let Some(format) = DocumentFormat::from_extension(extension) else {
            return Err(ExtractError::UnsupportedFormat {
                extension: extension.trim_start_matches('.').to_ascii_lowercase(),
            });
        };

        match format {
            DocumentFormat::Docx => readers::docx::extract(path),
            DocumentFormat::Pdf => readers::pdf::extract(path),
            DocumentFormat::Doc => readers::doc::extract(path, &self.doc_tool).await,
        }
    }
}
