//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let index = ServeFile::new(state.config.server.index_page());
    let assets = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        // Static recorder page and its assets
        .route_service("/", index)
        .nest_service("/static", assets)
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Conversion endpoints
        .route(
            "/speech-to-text",
            post(handlers::speech_to_text::speech_to_text),
        )
        .route(
            "/text-to-speech",
            post(handlers::text_to_speech::text_to_speech),
        )
        // Attach state
        .with_state(state)
}
