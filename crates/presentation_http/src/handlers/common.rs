//! Shared helper functions for HTTP handlers

use tempfile::NamedTempFile;

use crate::error::ApiError;

/// Stage uploaded bytes into scoped temporary storage
///
/// The returned handle owns the file; dropping it removes the file from
/// disk, so release is guaranteed on every exit path of the owning
/// request — success, validation failure, or error.
pub async fn stage_upload(data: &[u8], suffix: &str) -> Result<NamedTempFile, ApiError> {
    let staged = NamedTempFile::with_suffix(suffix)
        .map_err(|e| ApiError::Internal(format!("Error processing file: {e}")))?;

    tokio::fs::write(staged.path(), data)
        .await
        .map_err(|e| ApiError::Internal(format!("Error processing file: {e}")))?;

    Ok(staged)
}

/// File extension of an uploaded filename, without the dot
///
/// A filename with no extension yields an empty string, which the format
/// registry rejects as unsupported.
pub fn file_extension(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or_default()
        .to_string()
}
