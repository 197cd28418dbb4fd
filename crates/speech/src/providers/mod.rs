//! Speech provider implementations (adapters)

pub mod google;

pub use google::GoogleSpeechProvider;
