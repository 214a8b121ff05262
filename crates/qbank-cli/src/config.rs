//! `qbank.toml` configuration.
//!
//! Every key is optional. A missing or unreadable file yields the defaults;
//! command line flags override whatever is loaded.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use qbank_persistence::DEFAULT_MAX_UPLOAD_BYTES;
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILENAME: &str = "qbank.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QbankConfig {
    /// Where uploads are staged before import.
    pub staging_dir: PathBuf,
    /// JSON-lines question store.
    pub store_path: PathBuf,
    pub max_upload_bytes: u64,
    /// Staged files older than this are removed by `sweep`.
    pub stale_after_hours: u64,
    /// Records shown by `inspect`.
    pub preview_rows: usize,
}

impl Default for QbankConfig {
    fn default() -> Self {
        Self {
            staging_dir: PathBuf::from("uploads"),
            store_path: PathBuf::from("questions.jsonl"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            stale_after_hours: 24,
            preview_rows: 5,
        }
    }
}

impl QbankConfig {
    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.stale_after_hours.saturating_mul(60 * 60))
    }
}

/// Loads configuration from `path`, or from `qbank.toml` when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> QbankConfig {
    let path = path.map_or_else(|| PathBuf::from(CONFIG_FILENAME), Path::to_path_buf);

    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded configuration");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse configuration, using defaults");
                QbankConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            QbankConfig::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read configuration, using defaults");
            QbankConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: QbankConfig = toml::from_str("preview_rows = 10\n").unwrap();
        assert_eq!(config.preview_rows, 10);
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(config.stale_after(), Duration::from_secs(24 * 3600));
    }

    #[test]
    fn test_round_trip() {
        let config = QbankConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: QbankConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_unparsable_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("qbank.toml");
        fs::write(&path, "preview_rows = \"many\"").unwrap();
        assert_eq!(load_config(Some(&path)), QbankConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempdir().unwrap();
        assert_eq!(
            load_config(Some(&dir.path().join("absent.toml"))),
            QbankConfig::default()
        );
    }

    #[test]
    fn test_file_values_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("qbank.toml");
        fs::write(
            &path,
            "staging_dir = \"/srv/uploads\"\nstale_after_hours = 6\n",
        )
        .unwrap();
        let config = load_config(Some(&path));
        assert_eq!(config.staging_dir, PathBuf::from("/srv/uploads"));
        assert_eq!(config.stale_after_hours, 6);
    }
}
