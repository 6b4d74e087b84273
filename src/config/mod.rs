// Configuration module entry point
// Loads the static configuration and holds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{
    AssetsConfig, Config, FallbackConfig, LoggingConfig, PerformanceConfig, ServerConfig,
};

/// Config file used when no path is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (extension optional)
    ///
    /// Environment variables prefixed with `SERVER` override file values,
    /// e.g. `SERVER_ASSETS__ROOT=/srv/static`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SERVER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("assets.root", "./assets")?
            .set_default("assets.prefix", "/assets/")?
            .set_default("assets.mode", "path")?
            .set_default("assets.query_key", "asset")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{AddressingMode, PolicyMode};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let cfg = Config::load_from(missing.to_str().unwrap()).unwrap();

        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.assets.root, "./assets");
        assert_eq!(cfg.assets.prefix, "/assets/");
        assert_eq!(cfg.assets.mode, AddressingMode::Path);
        assert_eq!(cfg.assets.query_key, "asset");
        assert_eq!(cfg.assets.policy.mode, PolicyMode::Allow);
        assert_eq!(cfg.assets.policy.files, None);
        assert_eq!(cfg.fallback, FallbackConfig::NotFound);
        assert_eq!(cfg.get_socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gate.toml");
        fs::write(
            &path,
            r#"
[server]
port = 9090

[assets]
root = "/srv/plugin"
prefix = "/plugin/assets/"
mode = "query"

[assets.policy]
mode = "deny"
files = ["secret.pdf"]

[fallback]
type = "redirect"
target = "/"
"#,
        )
        .unwrap();

        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.assets.root, "/srv/plugin");
        assert_eq!(cfg.assets.mode, AddressingMode::Query);
        assert_eq!(cfg.assets.policy.mode, PolicyMode::Deny);
        assert_eq!(cfg.assets.policy.files, Some(vec!["secret.pdf".to_string()]));
        assert_eq!(
            cfg.fallback,
            FallbackConfig::Redirect {
                target: "/".to_string(),
                code: 302
            }
        );
    }

    #[test]
    fn test_invalid_address() {
        let dir = tempdir().unwrap();
        let mut cfg = Config::load_from(dir.path().join("x").to_str().unwrap()).unwrap();
        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
