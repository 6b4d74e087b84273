// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

use crate::gate::{AddressingMode, PolicyConfig};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub assets: AssetsConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// Asset gate configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AssetsConfig {
    /// Real filesystem directory holding the assets
    pub root: String,
    /// Token marking the asset namespace in request paths (e.g. "/assets/")
    pub prefix: String,
    #[serde(default)]
    pub mode: AddressingMode,
    /// Query parameter carrying the identifier in query mode
    #[serde(default = "default_query_key")]
    pub query_key: String,
    #[serde(default)]
    pub policy: PolicyConfig,
}

#[allow(clippy::missing_const_for_fn)]
fn default_query_key() -> String {
    "asset".to_string()
}

/// What the host does with requests the gate passes through
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FallbackConfig {
    /// Plain 404
    #[default]
    NotFound,
    /// HTTP redirect
    Redirect {
        target: String,
        #[serde(default = "default_redirect_code")]
        code: u16,
    },
    /// Fixed response
    Direct {
        status: u16,
        #[serde(default)]
        body: Option<String>,
        #[serde(default)]
        content_type: Option<String>,
    },
}

#[allow(clippy::missing_const_for_fn)]
fn default_redirect_code() -> u16 {
    302
}
