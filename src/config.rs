//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::assistant::ChatOptions;
use crate::nexra::{NexraConfig, PollPolicy};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub nexra: NexraSection,

    #[serde(default)]
    pub chat: ChatSection,

    #[serde(default)]
    pub explainer: ExplainerSection,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built UI (index.html + wasm bundle)
    #[serde(default)]
    pub static_dir: Option<String>,

    /// Allowed browser origins; an explicit empty list allows any
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8081".to_string(),
        "http://127.0.0.1:8081".to_string(),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
            cors_origins: default_cors_origins(),
        }
    }
}

/// Completion API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NexraSection {
    #[serde(default = "default_nexra_url")]
    pub url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default)]
    pub markdown: bool,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_nexra_url() -> String {
    "https://nexra.aryahcr.cc".to_string()
}

fn default_model() -> String {
    "GPT-4".to_string()
}

fn default_request_timeout() -> u64 {
    15_000
}

impl Default for NexraSection {
    fn default() -> Self {
        Self {
            url: default_nexra_url(),
            model: default_model(),
            markdown: false,
            request_timeout_ms: default_request_timeout(),
        }
    }
}

/// Chat pipeline tuning
#[derive(Debug, Clone, Deserialize)]
pub struct ChatSection {
    #[serde(default = "default_chat_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_interval")]
    pub poll_interval_ms: u64,

    #[serde(default = "default_error_backoff")]
    pub error_backoff_ms: u64,

    #[serde(default = "default_chart_delay")]
    pub chart_delay_ms: u64,
}

fn default_chat_attempts() -> u32 {
    10
}

fn default_interval() -> u64 {
    1000
}

fn default_error_backoff() -> u64 {
    2000
}

fn default_chart_delay() -> u64 {
    1500
}

impl Default for ChatSection {
    fn default() -> Self {
        Self {
            max_attempts: default_chat_attempts(),
            poll_interval_ms: default_interval(),
            error_backoff_ms: default_error_backoff(),
            chart_delay_ms: default_chart_delay(),
        }
    }
}

/// Code explainer tuning
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainerSection {
    #[serde(default = "default_explainer_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_interval")]
    pub poll_interval_ms: u64,

    #[serde(default = "default_slow_interval")]
    pub slow_interval_ms: u64,

    #[serde(default = "default_slow_after")]
    pub slow_after: u32,

    #[serde(default = "default_error_backoff")]
    pub error_backoff_ms: u64,
}

fn default_explainer_attempts() -> u32 {
    40
}

fn default_slow_interval() -> u64 {
    2000
}

fn default_slow_after() -> u32 {
    10
}

impl Default for ExplainerSection {
    fn default() -> Self {
        Self {
            max_attempts: default_explainer_attempts(),
            poll_interval_ms: default_interval(),
            slow_interval_ms: default_slow_interval(),
            slow_after: default_slow_after(),
            error_backoff_ms: default_error_backoff(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("forza").join("config.toml")),
            Some(PathBuf::from("/etc/forza/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `FORZA_*` overrides read through `lookup`
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("FORZA_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("FORZA_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid FORZA_PORT"),
            }
        }
        if let Some(dir) = lookup("FORZA_STATIC_DIR") {
            self.server.static_dir = Some(dir);
        }

        if let Some(url) = lookup("FORZA_NEXRA_URL") {
            self.nexra.url = url;
        }
        if let Some(model) = lookup("FORZA_NEXRA_MODEL") {
            self.nexra.model = model;
        }

        if let Some(level) = lookup("FORZA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("FORZA_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn nexra_client_config(&self) -> NexraConfig {
        NexraConfig {
            base_url: self.nexra.url.clone(),
            model: self.nexra.model.clone(),
            markdown: self.nexra.markdown,
            request_timeout_ms: self.nexra.request_timeout_ms,
        }
    }

    pub fn chat_options(&self) -> ChatOptions {
        ChatOptions {
            policy: PollPolicy {
                max_attempts: self.chat.max_attempts,
                interval: Duration::from_millis(self.chat.poll_interval_ms),
                slow_interval: None,
                slow_after: 0,
                error_backoff: Duration::from_millis(self.chat.error_backoff_ms),
                final_check: false,
            },
            chart_delay: Duration::from_millis(self.chat.chart_delay_ms),
        }
    }

    pub fn explainer_policy(&self) -> PollPolicy {
        PollPolicy {
            max_attempts: self.explainer.max_attempts,
            interval: Duration::from_millis(self.explainer.poll_interval_ms),
            slow_interval: Some(Duration::from_millis(self.explainer.slow_interval_ms)),
            slow_after: self.explainer.slow_after,
            error_backoff: Duration::from_millis(self.explainer.error_backoff_ms),
            final_check: true,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Forza AI Configuration
#
# Environment variables override these settings:
# - FORZA_HOST
# - FORZA_PORT
# - FORZA_STATIC_DIR
# - FORZA_NEXRA_URL
# - FORZA_NEXRA_MODEL
# - FORZA_LOG_LEVEL
# - FORZA_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 8080

# Directory with the built UI; the API alone is served when unset
# static_dir = "./forza-ui/dist"

# Allowed CORS origins (for a UI served by `trunk serve`)
cors_origins = ["http://localhost:8081", "http://127.0.0.1:8081"]

[nexra]
# Completion API base URL
url = "https://nexra.aryahcr.cc"

# Model requested for every completion
model = "GPT-4"

# Ask for markdown output
markdown = false

# Timeout of a single HTTP request (ms)
request_timeout_ms = 15000

[chat]
# Status checks before giving up on a reply
max_attempts = 10

# Wait before each status check (ms)
poll_interval_ms = 1000

# Extra wait after a failed status check (ms)
error_backoff_ms = 2000

# Pause before a mock chart is returned (ms)
chart_delay_ms = 1500

[explainer]
max_attempts = 40
poll_interval_ms = 1000

# Interval used once more than `slow_after` checks were made (ms)
slow_interval_ms = 2000
slow_after = 10

error_backoff_ms = 2000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_generated_config_matches_defaults() {
        let parsed: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(parsed.bind_addr(), defaults.bind_addr());
        assert_eq!(parsed.server.static_dir, None);
        assert_eq!(parsed.nexra.url, defaults.nexra.url);
        assert_eq!(parsed.chat_options().policy, PollPolicy::chat());
        assert_eq!(parsed.explainer_policy(), PollPolicy::explainer());
        assert_eq!(parsed.chat_options().chart_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[nexra]\nmodel = \"GPT-3.5\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.nexra.model, "GPT-3.5");
        assert_eq!(config.chat.max_attempts, 10);
        assert_eq!(config.server.cors_origins, Config::default().server.cors_origins);
    }

    #[test]
    fn test_explicit_empty_cors_list() {
        let config: Config = toml::from_str("[server]\ncors_origins = []").unwrap();
        assert!(config.server.cors_origins.is_empty());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[server\nport = ").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FORZA_PORT", "7070"),
            ("FORZA_STATIC_DIR", "/srv/forza"),
            ("FORZA_NEXRA_URL", "http://127.0.0.1:9999"),
            ("FORZA_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 7070);
        assert_eq!(config.server.static_dir.as_deref(), Some("/srv/forza"));
        assert_eq!(config.nexra_client_config().base_url, "http://127.0.0.1:9999");
        assert!(config.logging.is_json());
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "FORZA_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 8080);
    }
}
