// src/config/models.rs
use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Environment variable that overrides the backend base URL.
pub const BASE_URL_ENV: &str = "BACKEND_URL";

/// Fallback base URL when neither the environment nor a config file sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_reachability_timeout_secs")]
    pub reachability_timeout_secs: u64,
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_reachability_timeout_secs() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            reachability_timeout_secs: default_reachability_timeout_secs(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.base_url.scheme() == "http" || self.base_url.scheme() == "https",
            "base_url must be an http(s) URL, got: {}",
            self.base_url
        );
        anyhow::ensure!(
            self.request_timeout_secs > 0 && self.reachability_timeout_secs > 0,
            "timeouts must be non-zero"
        );
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn reachability_timeout(&self) -> Duration {
        Duration::from_secs(self.reachability_timeout_secs)
    }

    /// Resolve an endpoint path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.reachability_timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn endpoint_joins_relative_to_base() {
        let config = Config {
            base_url: Url::parse("http://backend:9000").unwrap(),
            ..Config::default()
        };
        assert_eq!(
            config.endpoint("/api/status").unwrap().as_str(),
            "http://backend:9000/api/status"
        );
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = Config {
            base_url: Url::parse("ftp://backend:21").unwrap(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
