//! Document text extraction
//!
//! Turns uploaded documents into plain text for speech synthesis. The
//! supported format set is closed and small (`.docx`, `.doc`, `.pdf`);
//! dispatch happens over the `DocumentFormat` enum, not a plugin registry.
//!
//! Extraction never panics: every failure is captured per file and
//! surfaced as an error value (or, for the best-effort legacy `.doc`
//! path, as descriptive text).

pub mod error;
pub mod extractor;
pub mod format;
pub mod readers;

pub use error::ExtractError;
pub use extractor::DocumentTextExtractor;
pub use format::DocumentFormat;
