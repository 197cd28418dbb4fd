//! Speech - Speech-to-Text and Text-to-Speech abstractions
//!
//! Provides traits and implementations for speech processing:
//! - `SpeechToText` - Transcribe audio to text (STT)
//! - `TextToSpeech` - Synthesize speech from text (TTS)
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Supported Providers
//!
//! - Google Web Speech API (STT) and Google Translate TTS
//!
//! # Example
//!
//! ```ignore
//! use speech::{GoogleSpeechProvider, SpeechToText, TextToSpeech};
//!
//! let provider = GoogleSpeechProvider::new(config)?;
//!
//! // Transcribe a staged audio file
//! let transcription = provider.transcribe(path, "en-US").await?;
//! println!("Transcribed: {}", transcription.text);
//!
//! // Synthesize speech
//! let audio = provider.synthesize("Hello, world!", "en", "com").await?;
//! let encoded = audio.to_base64();
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::{SpeechToText, TextToSpeech};
pub use providers::google::GoogleSpeechProvider;
pub use types::{AudioFormat, SynthesizedAudio, Transcription};
