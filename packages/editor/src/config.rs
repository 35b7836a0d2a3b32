use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CONFIG_NAME: &str = "canvas.config.json";

/// Overrides `apiHost` when set
pub const API_HOST_ENV: &str = "CANVAS_API_HOST";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Editor configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Host serving `/api/uploadMedia`
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Deepest nesting level rendered
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Quiet period before a properties edit is committed
    #[serde(default = "default_commit_delay_ms")]
    pub commit_delay_ms: u64,
}

fn default_api_host() -> String {
    "http://localhost:3000".to_string()
}

fn default_max_depth() -> usize {
    canvas_tree::MAX_DEPTH
}

fn default_commit_delay_ms() -> u64 {
    1000
}

impl EditorConfig {
    /// Load config from a directory, falling back to defaults when the
    /// file does not exist
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(DEFAULT_CONFIG_NAME);

        let mut config = if config_path.exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        if let Ok(host) = std::env::var(API_HOST_ENV) {
            if !host.is_empty() {
                config.api_host = host;
            }
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn commit_delay(&self) -> Duration {
        Duration::from_millis(self.commit_delay_ms)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            api_host: default_api_host(),
            max_depth: default_max_depth(),
            commit_delay_ms: default_commit_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "apiHost": "https://media.example.com",
            "maxDepth": 4,
            "commitDelayMs": 250
        }"#;

        let config: EditorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.api_host, "https://media.example.com");
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.commit_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_default_config() {
        let config: EditorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.max_depth, 6);
        assert_eq!(config.commit_delay_ms, 1000);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "maxDepth": 3 }"#).unwrap();

        let config = EditorConfig::load(dir.path()).unwrap();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.commit_delay_ms, 1000);
    }

    #[test]
    fn test_load_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ nope").unwrap();

        assert!(matches!(
            EditorConfig::load(dir.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
