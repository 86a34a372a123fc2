use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use jobsee_engine::{ApiSettings, CommandShareSheet};
use jobsee_logging::{jobsee_debug, jobsee_info, jobsee_warn};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE: &str = "jobsee.ron";
pub const API_KEY_ENV: &str = "JOBSEE_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Contents of `jobsee.ron`. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub max_bytes: u64,
    /// Program the share action pipes into, e.g. `"wl-copy"`. Unset prints
    /// to stdout.
    pub share_command: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api = ApiSettings::default();
        Self {
            base_url: api.base_url,
            api_key: api.api_key,
            connect_timeout_secs: None,
            request_timeout_secs: None,
            max_bytes: api.max_bytes,
            share_command: None,
        }
    }
}

impl AppConfig {
    /// A non-blank key replaces the configured one.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|key| !key.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_bytes: self.max_bytes,
        }
    }

    pub fn share_command(&self) -> Option<CommandShareSheet> {
        self.share_command
            .as_deref()
            .and_then(CommandShareSheet::from_command_line)
    }
}

/// Reads `path`. `Ok(None)` when the file does not exist.
pub fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(ron::from_str(&content)?))
}

/// Loads the config, falling back to defaults with a warning when the file is
/// unreadable or malformed, then applies the environment override.
pub(crate) fn load_config(path: &Path) -> AppConfig {
    let config = match read_config(path) {
        Ok(Some(config)) => {
            jobsee_info!("Loaded config from {:?}", path);
            config
        }
        Ok(None) => {
            jobsee_debug!("No config at {:?}; using defaults", path);
            AppConfig::default()
        }
        Err(err) => {
            jobsee_warn!("Ignoring config at {:?}: {}", path, err);
            AppConfig::default()
        }
    };
    config.with_api_key_override(std::env::var(API_KEY_ENV).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobsee_engine::DEFAULT_BASE_URL;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(read_config(&temp.path().join(CONFIG_FILE)).unwrap().is_none());
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"(api_key: Some("k"), request_timeout_secs: Some(15), share_command: Some("wl-copy"))"#,
        )
        .unwrap();

        let config = read_config(&path).unwrap().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key.as_deref(), Some("k"));

        let api = config.api_settings();
        assert_eq!(api.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(api.connect_timeout, None);
        assert_eq!(
            config.share_command(),
            Some(CommandShareSheet::new("wl-copy", Vec::new()))
        );
    }

    #[test]
    fn malformed_file_is_an_error_and_load_falls_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "(base_url: 42").unwrap();

        assert!(matches!(read_config(&path), Err(ConfigError::Parse(_))));
        let loaded = load_config(&path);
        assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn blank_env_key_does_not_override() {
        let config = AppConfig {
            api_key: Some("file".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(
            config.clone().with_api_key_override(Some("  ".to_string())).api_key.as_deref(),
            Some("file")
        );
        assert_eq!(
            config.with_api_key_override(Some("env".to_string())).api_key.as_deref(),
            Some("env")
        );
    }
}
