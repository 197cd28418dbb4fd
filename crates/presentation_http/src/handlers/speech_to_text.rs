//! Speech-to-text endpoint
//!
//! Accepts a multipart form with a required `audio_data` file field and
//! an optional `language` field, stages the clip in scoped temporary
//! storage, and hands it to the transcription provider. The staged file
//! is removed on every exit path.

use axum::{
    Json,
    extract::{Multipart, State},
};
use bytes::Bytes;
use serde::Serialize;
use tracing::instrument;

use crate::{
    error::ApiError,
    handlers::common::stage_upload,
    state::AppState,
};

/// Transcription response body
#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    /// Recognized text
    pub text: String,
}

/// Handle a speech-to-text request
#[instrument(skip_all)]
pub async fn speech_to_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let mut audio: Option<Bytes> = None;
    let mut language: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        match name.as_str() {
            "audio_data" => audio = Some(field.bytes().await.map_err(invalid_multipart)?),
            "language" => language = Some(field.text().await.map_err(invalid_multipart)?),
            _ => {},
        }
    }

    let Some(audio) = audio else {
        return Err(ApiError::BadRequest("No audio file provided".to_string()));
    };

    let language =
        language.unwrap_or_else(|| state.config.speech.stt_language.clone());

    // Staged clip lives exactly as long as this handler invocation.
    let staged = stage_upload(&audio, ".wav").await?;

    let transcription = state.transcriber.transcribe(staged.path(), &language).await?;

    Ok(Json(TranscribeResponse {
        text: transcription.text,
    }))
}

fn invalid_multipart(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::BadRequest(format!("Invalid multipart payload: {err}"))
}
