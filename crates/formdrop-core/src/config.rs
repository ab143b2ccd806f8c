//! Configuration module
//!
//! Every setting has a compiled-in default matching the historical deployment
//! (bind `0.0.0.0:8080`, store under `requests/`). Environment variables, or a
//! `.env` file picked up by `dotenvy`, override them.

use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_HOST, DEFAULT_MAX_SUBMISSION_SIZE_MB, DEFAULT_PORT, DEFAULT_REQUESTS_DIR,
};

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub server_port: u16,
    /// Storage root; submissions, request logs and the archive all live below it.
    pub requests_dir: PathBuf,
    pub environment: String,
    pub max_submission_size_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            requests_dir: PathBuf::from(DEFAULT_REQUESTS_DIR),
            environment: "development".to_string(),
            max_submission_size_bytes: DEFAULT_MAX_SUBMISSION_SIZE_MB * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or(defaults.environment);

        let server_port = match env::var("PORT") {
            Ok(port) => port
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            Err(_) => defaults.server_port,
        };

        let max_submission_size_bytes = match env::var("MAX_SUBMISSION_SIZE_MB") {
            Ok(mb) => mb_to_bytes(&mb)?,
            Err(_) => defaults.max_submission_size_bytes,
        };

        let config = Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            server_port,
            requests_dir: env::var("REQUESTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.requests_dir),
            environment,
            max_submission_size_bytes,
        };

        config.validate()?;
        Ok(config)
    }

    /// Configuration rooted at `requests_dir`, everything else defaulted.
    pub fn with_requests_dir(requests_dir: impl Into<PathBuf>) -> Self {
        Self {
            requests_dir: requests_dir.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.requests_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("REQUESTS_DIR cannot be empty"));
        }
        if self.max_submission_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_SUBMISSION_SIZE_MB must be greater than 0"));
        }
        if self.host.trim().is_empty() {
            return Err(anyhow::anyhow!("HOST cannot be empty"));
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.server_port)
    }

    pub fn requests_dir(&self) -> &Path {
        &self.requests_dir
    }
}

/// Parse a size in megabytes, refusing values that do not fit in `usize` bytes.
fn mb_to_bytes(mb: &str) -> Result<usize, anyhow::Error> {
    mb.trim()
        .parse::<usize>()
        .map_err(|_| anyhow::anyhow!("MAX_SUBMISSION_SIZE_MB must be a valid number"))?
        .checked_mul(1024 * 1024)
        .ok_or_else(|| anyhow::anyhow!("MAX_SUBMISSION_SIZE_MB is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_historical_deployment() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.requests_dir(), Path::new("requests"));
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_requests_dir() {
        let config = Config::with_requests_dir("/tmp/formdrop");
        assert_eq!(config.requests_dir(), Path::new("/tmp/formdrop"));
        assert_eq!(config.server_port, DEFAULT_PORT);
    }

    #[test]
    fn test_validate_rejects_empty_root() {
        let config = Config::with_requests_dir("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_body_limit() {
        let config = Config {
            max_submission_size_bytes: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_mb_to_bytes() {
        assert_eq!(mb_to_bytes("10").unwrap(), 10 * 1024 * 1024);
        assert_eq!(mb_to_bytes(" 1 ").unwrap(), 1024 * 1024);
    }

    #[test]
    fn test_mb_to_bytes_rejects_garbage_and_overflow() {
        let err = mb_to_bytes("ten").unwrap_err();
        assert!(err.to_string().contains("valid number"));

        let err = mb_to_bytes(&usize::MAX.to_string()).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_is_production() {
        let mut config = Config::default();
        config.environment = "PROD".to_string();
        assert!(config.is_production());
        config.environment = "production".to_string();
        assert!(config.is_production());
        config.environment = "staging".to_string();
        assert!(!config.is_production());
    }
}
