use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the schedule service (e.g., "http://localhost:8080/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds. Unset means a call may wait forever.
    #[serde(default)]
    pub request_timeout_seconds: Option<u32>,
    /// Bearer token sent with every request.
    #[serde(default)]
    pub token: Option<String>,
}

/// Localization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Active locale (e.g., "en", "uk").
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Extra dictionary merged over the built-in one.
    #[serde(default)]
    pub dictionary_path: Option<PathBuf>,
}

/// Coordinator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Capacity of the ordered intent queue (default: 64).
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_queue_capacity() -> usize {
    64
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: None,
            token: None,
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            dictionary_path: None,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            queue_capacity: default_queue_capacity(),
        }
    }
}
