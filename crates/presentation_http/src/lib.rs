//! VoiceBridge HTTP presentation layer
//!
//! This crate provides the HTTP API for VoiceBridge: the speech-to-text
//! and text-to-speech endpoints, plus the static recorder page.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ServerConfig};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
