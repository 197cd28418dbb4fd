//! Text-to-speech endpoint
//!
//! Accepts a multipart form with either a direct `text` field or an
//! uploaded document `file`; optional `language` and `tld` fields select
//! the synthesis voice. Text source precedence is fixed: a `text` field
//! wins and any uploaded file is ignored. Uploaded documents are staged
//! in scoped temporary storage for extraction and removed on every exit
//! path. The synthesized audio ships base64-encoded in the JSON body.

use axum::{
    Json,
    extract::{Multipart, State},
};
use bytes::Bytes;
use serde::Serialize;
use tracing::instrument;

use crate::{
    error::ApiError,
    handlers::common::{file_extension, stage_upload},
    state::AppState,
};

/// Synthesis response body
#[derive(Debug, Serialize)]
pub struct SynthesizeResponse {
    /// Base64-encoded audio payload
    pub audio: String,
    /// The text that was synthesized
    pub text: String,
}

/// An uploaded document before staging
#[derive(Debug)]
struct Upload {
    filename: String,
    data: Bytes,
}

/// Handle a text-to-speech request
#[instrument(skip_all)]
pub async fn text_to_speech(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SynthesizeResponse>, ApiError> {
    let mut text: Option<String> = None;
    let mut upload: Option<Upload> = None;
    let mut language: Option<String> = None;
    let mut tld: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        match name.as_str() {
            "text" => text = Some(field.text().await.map_err(invalid_multipart)?),
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(invalid_multipart)?;
                upload = Some(Upload { filename, data });
            },
            "language" => language = Some(field.text().await.map_err(invalid_multipart)?),
            "tld" => tld = Some(field.text().await.map_err(invalid_multipart)?),
            _ => {},
        }
    }

    let language = language.unwrap_or_else(|| state.config.speech.tts_language.clone());
    let accent = tld.unwrap_or_else(|| state.config.speech.accent.clone());

    let text = match (text, upload) {
        // Direct text wins; any uploaded file is ignored
        (Some(text), _) => text,
        (None, Some(upload)) => extract_upload_text(&state, upload).await?,
        (None, None) => {
            return Err(ApiError::BadRequest("No text or file provided".to_string()));
        },
    };

    // Empty text is passed through unvalidated; the provider decides
    let audio = state.synthesizer.synthesize(&text, &language, &accent).await?;

    Ok(Json(SynthesizeResponse {
        audio: audio.to_base64(),
        text,
    }))
}

/// Stage an uploaded document and extract its text
async fn extract_upload_text(state: &AppState, upload: Upload) -> Result<String, ApiError> {
    if upload.filename.is_empty() || upload.data.is_empty() {
        return Err(ApiError::BadRequest(
            "No file selected or invalid file".to_string(),
        ));
    }

    let extension = file_extension(&upload.filename);

    // Staged document lives exactly as long as the extraction.
    let staged = stage_upload(&upload.data, ".upload").await?;

    let text = state.extractor.extract(staged.path(), &extension).await?;

    Ok(text)
}

fn invalid_multipart(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::BadRequest(format!("Invalid multipart payload: {err}"))
}
