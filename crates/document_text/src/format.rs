//! Supported document formats

/// The closed set of document formats this service can extract text from
///
/// The format set is fixed and small, so dispatch is an exhaustive match
/// rather than an extensible registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Office Open XML word processing document
    Docx,
    /// Legacy binary Word document (best-effort extraction)
    Doc,
    /// Portable Document Format
    Pdf,
}

impl DocumentFormat {
    /// Look up a format by file extension
    ///
    /// Matching is case-insensitive and tolerates a leading dot, so
    /// `".DOCX"`, `"docx"` and `".docx"` all resolve the same way.
    /// Unknown extensions resolve to `None` before any file I/O happens.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension
            .trim_start_matches('.')
            .to_ascii_lowercase()
            .as_str()
        {
            "docx" => Some(Self::Docx),
            "doc" => Some(Self::Doc),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// Canonical extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Docx => "docx",
            Self::Doc => "doc",
            Self::Pdf => "pdf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_resolve() {
        assert_eq!(
            DocumentFormat::from_extension("docx"),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(
            DocumentFormat::from_extension("doc"),
            Some(DocumentFormat::Doc)
        );
        assert_eq!(
            DocumentFormat::from_extension("pdf"),
            Some(DocumentFormat::Pdf)
        );
    }

    #[test]
    fn leading_dot_is_tolerated() {
        assert_eq!(
            DocumentFormat::from_extension(".docx"),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(
            DocumentFormat::from_extension(".pdf"),
            Some(DocumentFormat::Pdf)
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_extension(".DOCX"),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(
            DocumentFormat::from_extension("Pdf"),
            Some(DocumentFormat::Pdf)
        );
    }

    #[test]
    fn unknown_extensions_resolve_to_none() {
        assert_eq!(DocumentFormat::from_extension(".xyz"), None);
        assert_eq!(DocumentFormat::from_extension("txt"), None);
        assert_eq!(DocumentFormat::from_extension(""), None);
    }

    #[test]
    fn canonical_extensions() {
        assert_eq!(DocumentFormat::Docx.extension(), "docx");
        assert_eq!(DocumentFormat::Doc.extension(), "doc");
        assert_eq!(DocumentFormat::Pdf.extension(), "pdf");
    }
}
