use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const CONFIG_PATH_ENV: &str = "FIBONACCI_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>, // actix picks one per core when unset
    pub data_dir: PathBuf,
    pub sequence_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
            data_dir: PathBuf::from("."),
            sequence_file_name: "fibonacci.txt".to_string(),
        }
    }
}

/// Loads `config.yaml` (or the file named by `FIBONACCI_CONFIG`).
pub fn load_config() -> Config {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config_from(Path::new(&path))
}

/// A missing or unparsable file falls back to defaults with a warning.
pub fn load_config_from(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(config_content) => match serde_yaml::from_str::<Config>(&config_content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), "failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(_) => {
            warn!(path = %path.display(), "config not found, using defaults");
            Config::default()
        }
    }
}

/// `RUST_LOG` overrides the default filter.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fibonacci_service=info,actix_web=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.yaml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "port: 9000\nsequence_file_name: seq.txt\n").unwrap();
        let config = load_config_from(&path);
        assert_eq!(config.port, 9000);
        assert_eq!(config.sequence_file_name, "seq.txt");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.workers, None);
    }

    #[test]
    fn test_malformed_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "port: [not, a, number]\n").unwrap();
        assert_eq!(load_config_from(&path), Config::default());
    }
}
