//! Startup configuration.
//!
//! Resolved once from the process environment and injected into the client.
//! Nothing reads the environment at call time.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

/// FoxESS Cloud OpenAPI host
pub const DEFAULT_DOMAIN: &str = "https://www.foxesscloud.com";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "FOXESS_API_KEY";

/// Environment variable naming the log file (stderr when unset)
pub const LOG_FILE_ENV: &str = "LOG_FILE";

/// Configuration for the bridge, immutable after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key proving the caller's identity to the remote API.
    ///
    /// Absence is a valid state: the server still runs and every dispatch
    /// reports it as an ApiResult error instead.
    pub api_key: Option<String>,

    /// Base URL that request paths are appended to.
    pub domain: String,

    /// Log destination, stderr when unset.
    pub log_file: Option<PathBuf>,

    /// Per-request timeout. None leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            domain: DEFAULT_DOMAIN.to_string(),
            log_file: None,
            timeout: None,
        }
    }
}

impl Config {
    /// Build configuration from the process environment.
    ///
    /// A missing or empty `FOXESS_API_KEY` is not fatal; the caller decides
    /// how loudly to complain.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        let log_file = std::env::var(LOG_FILE_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Self {
            api_key,
            log_file,
            ..Default::default()
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Point at a different host (stub servers in tests)
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set an explicit request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Open a log file for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.domain, DEFAULT_DOMAIN);
        assert!(config.log_file.is_none());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_config_builders() {
        let config = Config::default()
            .with_api_key("test-key")
            .with_domain("http://127.0.0.1:9999")
            .with_timeout(Duration::from_millis(250));

        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.domain, "http://127.0.0.1:9999");
        assert_eq!(config.timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_from_env_roundtrip() {
        let original_key = std::env::var(API_KEY_ENV).ok();
        let original_log = std::env::var(LOG_FILE_ENV).ok();

        // SAFETY: this test sets and restores process env vars; the suite
        // does not rely on them elsewhere
        unsafe {
            std::env::set_var(API_KEY_ENV, "env-key");
            std::env::set_var(LOG_FILE_ENV, "/tmp/foxess-mcp.log");
        }

        let config = Config::from_env();
        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert_eq!(
            config.log_file.as_deref(),
            Some(Path::new("/tmp/foxess-mcp.log"))
        );
        assert_eq!(config.domain, DEFAULT_DOMAIN);

        // An empty key counts as absent
        // SAFETY: still inside this test's set/restore window
        unsafe {
            std::env::set_var(API_KEY_ENV, "");
        }
        let config = Config::from_env();
        assert!(config.api_key.is_none());

        // SAFETY: restoring prior state
        unsafe {
            match original_key {
                Some(v) => std::env::set_var(API_KEY_ENV, v),
                None => std::env::remove_var(API_KEY_ENV),
            }
            match original_log {
                Some(v) => std::env::set_var(LOG_FILE_ENV, v),
                None => std::env::remove_var(LOG_FILE_ENV),
            }
        }
    }

    #[test]
    fn test_open_log_file_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bridge.log");

        let file = open_log_file(&path).unwrap();
        drop(file);
        assert!(path.exists());

        // Opening again must not truncate
        std::fs::write(&path, "existing\n").unwrap();
        let file = open_log_file(&path).unwrap();
        drop(file);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "existing\n");
    }

    #[test]
    fn test_open_log_file_bad_path() {
        let result = open_log_file(Path::new("/nonexistent-dir/bridge.log"));
        assert!(result.is_err());
    }
}
