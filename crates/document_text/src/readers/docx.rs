//! docx paragraph text extraction
//!
//! A docx file is a zip archive; the body text lives in
//! `word/document.xml` as `<w:p>` paragraphs containing `<w:t>` text
//! runs. Extraction concatenates every paragraph's runs in document
//! order and joins paragraphs with newlines, preserving paragraph
//! structure but not formatting. Empty paragraphs contribute empty
//! lines.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::error::ExtractError;

/// Extract the paragraph text of a docx file
pub fn extract(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| ExtractError::Parse(format!("not a docx archive: {e}")))?;

    let mut document = archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Parse(format!("missing word/document.xml: {e}")))?;

    let mut xml = String::new();
    document.read_to_string(&mut xml)?;

    paragraph_text(&xml)
}

/// Collect paragraph text from the document XML
fn paragraph_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    current.clear();
                },
                b"w:t" => in_text = in_paragraph,
                _ => {},
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                },
                b"w:t" => in_text = false,
                _ => {},
            },
            // Self-closing <w:p/> is an empty paragraph
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"w:p" {
                    paragraphs.push(String::new());
                }
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractError::Parse(format!("invalid document XML: {e}")))?;
                current.push_str(&text);
            },
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => {
                return Err(ExtractError::Parse(format!("invalid document XML: {e}")));
            },
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use zip::write::SimpleFileOptions;

    use super::*;

    const DOCUMENT_XML: &str = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>",
        "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">",
        "<w:body>",
        "<w:p><w:r><w:t>Hello</w:t></w:r></w:p>",
        "<w:p/>",
        "<w:p><w:r><w:t>World</w:t></w:r></w:p>",
        "</w:body>",
        "</w:document>",
    );

    fn docx_fixture(document_xml: &str) -> NamedTempFile {
        let file = NamedTempFile::with_suffix(".docx").unwrap();
        let mut writer = zip::ZipWriter::new(file.reopen().unwrap());
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap();
        file
    }

    #[test]
    fn paragraphs_join_with_newlines_preserving_empty_lines() {
        let text = paragraph_text(DOCUMENT_XML).unwrap();
        assert_eq!(text, "Hello\n\nWorld");
    }

    #[test]
    fn explicit_empty_paragraph_contributes_empty_line() {
        let xml = concat!(
            "<w:document xmlns:w=\"x\"><w:body>",
            "<w:p><w:r><w:t>Hello</w:t></w:r></w:p>",
            "<w:p></w:p>",
            "<w:p><w:r><w:t>World</w:t></w:r></w:p>",
            "</w:body></w:document>",
        );
        assert_eq!(paragraph_text(xml).unwrap(), "Hello\n\nWorld");
    }

    #[test]
    fn split_runs_concatenate_within_a_paragraph() {
        let xml = concat!(
            "<w:document xmlns:w=\"x\"><w:body>",
            "<w:p><w:r><w:t>Hel</w:t></w:r><w:r><w:t>lo</w:t></w:r></w:p>",
            "</w:body></w:document>",
        );
        assert_eq!(paragraph_text(xml).unwrap(), "Hello");
    }

    #[test]
    fn entities_are_unescaped() {
        let xml = concat!(
            "<w:document xmlns:w=\"x\"><w:body>",
            "<w:p><w:r><w:t>a &amp; b</w:t></w:r></w:p>",
            "</w:body></w:document>",
        );
        assert_eq!(paragraph_text(xml).unwrap(), "a & b");
    }

    #[test]
    fn extract_reads_paragraphs_from_archive() {
        let fixture = docx_fixture(DOCUMENT_XML);
        let text = extract(fixture.path()).unwrap();
        assert_eq!(text, "Hello\n\nWorld");
    }

    #[test]
    fn extract_rejects_non_zip_file() {
        let mut file = NamedTempFile::with_suffix(".docx").unwrap();
        file.write_all(b"this is not a zip archive").unwrap();

        let result = extract(file.path());
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }

    #[test]
    fn extract_rejects_zip_without_document_part() {
        let file = NamedTempFile::with_suffix(".docx").unwrap();
        let mut writer = zip::ZipWriter::new(file.reopen().unwrap());
        writer
            .start_file("other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        writer.finish().unwrap();

        let result = extract(file.path());
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }
}
