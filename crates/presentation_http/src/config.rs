//! Application configuration

use serde::{Deserialize, Serialize};
use speech::SpeechConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Speech processing configuration
    #[serde(default)]
    pub speech: SpeechConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the static page and its assets
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl ServerConfig {
    /// Path of the page served at the root route
    #[must_use]
    pub fn index_page(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.static_dir).join("index.html")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Precedence, lowest to highest: built-in defaults, an optional
    /// `config.toml` next to the binary, then `VOICEBRIDGE_*`
    /// environment variables (e.g. `VOICEBRIDGE_SERVER_PORT`).
    ///
    /// # Errors
    ///
    /// Returns `config::ConfigError` if a source is malformed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix("VOICEBRIDGE")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    fn index_page_lives_in_static_dir() {
        let config = ServerConfig::default();
        assert_eq!(
            config.index_page(),
            std::path::PathBuf::from("static/index.html")
        );
    }

    #[test]
    fn app_config_default_has_valid_speech_config() {
        let config = AppConfig::default();
        assert!(config.speech.validate().is_ok());
    }

    #[test]
    fn deserializes_partial_toml() {
        let toml = "[server]\nport = 8080\n";
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
