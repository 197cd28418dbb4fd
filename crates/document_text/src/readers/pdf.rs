//! PDF page text extraction

use std::path::Path;

use crate::error::ExtractError;

/// Extract the text of every page in page order
///
/// Each page's text is followed by a newline; a page whose extractor
/// returns no text contributes an empty line.
pub fn extract(path: &Path) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_by_pages(path)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;

    Ok(join_pages(&pages))
}

fn join_pages(pages: &[String]) -> String {
    let mut text = String::new();
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_joined_with_trailing_newlines() {
        let pages = vec!["Page1".to_string(), "Page2".to_string()];
        assert_eq!(join_pages(&pages), "Page1\nPage2\n");
    }

    #[test]
    fn empty_page_contributes_empty_line() {
        let pages = vec!["Page1".to_string(), String::new(), "Page3".to_string()];
        assert_eq!(join_pages(&pages), "Page1\n\nPage3\n");
    }

    #[test]
    fn no_pages_yield_empty_text() {
        assert_eq!(join_pages(&[]), "");
    }

    #[test]
    fn extract_rejects_non_pdf_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".pdf").unwrap();
        std::io::Write::write_all(&mut file, b"plain text, not a PDF").unwrap();

        let result = extract(file.path());
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }
}
