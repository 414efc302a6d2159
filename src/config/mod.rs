// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};
use url::Url;

const CONFIG_FILE_CANDIDATES: [&str; 2] = ["probe.yaml", "probe.json"];

/// Load configuration from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .context("Failed to read config file")?;

    let config: Config = if path.extension().and_then(|s| s.to_str()) == Some("yaml")
        || path.extension().and_then(|s| s.to_str()) == Some("yml") {
        serde_yaml::from_str(&contents).context("Failed to parse YAML config")?
    } else {
        serde_json::from_str(&contents).context("Failed to parse JSON config")?
    };

    config.validate()?;
    Ok(config)
}

/// Resolve the effective configuration: defaults, then an optional config
/// file in the working directory, then the environment variable override.
pub async fn resolve_config() -> Result<Config> {
    let mut config = Config::default();

    for candidate in CONFIG_FILE_CANDIDATES {
        if Path::new(candidate).is_file() {
            info!("Loading configuration from: {}", candidate);
            config = load_config(candidate).await?;
            break;
        }
    }

    if let Ok(value) = std::env::var(BASE_URL_ENV) {
        debug!("{} set, overriding base URL", BASE_URL_ENV);
        config.base_url = Url::parse(&value)
            .with_context(|| format!("Invalid {} value: {}", BASE_URL_ENV, value))?;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_yaml_config() {
        let config: Config = serde_yaml::from_str("base_url: http://probe-target:8000\n").unwrap();
        assert_eq!(config.base_url.as_str(), "http://probe-target:8000/");
        // Unset fields fall back to defaults
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn parses_json_config() {
        let config: Config = serde_json::from_str(
            r#"{"base_url": "https://probe-target", "request_timeout_secs": 3}"#,
        )
        .unwrap();
        assert_eq!(config.base_url.scheme(), "https");
        assert_eq!(config.request_timeout_secs, 3);
    }

    #[tokio::test]
    async fn env_var_overrides_base_url() {
        std::env::set_var(BASE_URL_ENV, "http://from-env:1234");
        let config = resolve_config().await.unwrap();
        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(config.base_url.as_str(), "http://from-env:1234/");
    }
}
