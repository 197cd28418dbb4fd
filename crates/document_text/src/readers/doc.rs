//! Legacy `.doc` text extraction
//!
//! Delegates to the `antiword` executable, which handles the legacy
//! binary Word format. This path is best-effort: environments without
//! the tool get a descriptive error string as the extracted text rather
//! than a failed request.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::ExtractError;

/// Extract text from a legacy `.doc` file
///
/// Tool absence or a nonzero exit does not fail the extraction; the
/// human-readable reason is returned as the text so the caller still
/// produces a response.
pub async fn extract(path: &Path, tool: &Path) -> Result<String, ExtractError> {
    match run_tool(path, tool).await {
        Ok(text) => Ok(text),
        Err(reason) => {
            warn!(%reason, "Legacy .doc extraction degraded");
            Ok(format!(
                "Error extracting text from .doc: {reason} (try installing antiword)"
            ))
        },
    }
}

/// Run the extraction tool and capture its stdout
async fn run_tool(path: &Path, tool: &Path) -> Result<String, String> {
    let mut cmd = Command::new(tool);
    cmd.arg(path).stdout(Stdio::piped()).stderr(Stdio::piped());

    debug!("Running legacy document tool: {:?}", cmd);

    let output = cmd.output().await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            format!("'{}' not found", tool.display())
        } else {
            e.to_string()
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!(
            "{} exited with status {}: {}",
            tool.display(),
            output.status,
            stderr.trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_tool_yields_descriptive_text() {
        let doc = tempfile::NamedTempFile::with_suffix(".doc").unwrap();

        let text = extract(doc.path(), Path::new("/nonexistent/antiword"))
            .await
            .unwrap();

        assert!(text.starts_with("Error extracting text from .doc:"));
        assert!(text.contains("not found"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_tool_yields_descriptive_text() {
        let doc = tempfile::NamedTempFile::with_suffix(".doc").unwrap();

        // `false` exists on any unix box and always exits nonzero
        let text = extract(doc.path(), Path::new("/bin/false")).await.unwrap();

        assert!(text.starts_with("Error extracting text from .doc:"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn successful_tool_output_is_returned_verbatim() {
        let doc = tempfile::NamedTempFile::with_suffix(".doc").unwrap();

        // `cat` stands in for the real tool: it echoes the file content
        std::fs::write(doc.path(), b"legacy document body").unwrap();
        let text = extract(doc.path(), Path::new("/bin/cat")).await.unwrap();

        assert_eq!(text, "legacy document body");
    }
}
