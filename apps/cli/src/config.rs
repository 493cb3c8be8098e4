use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables. The API
/// base URL is the single environment-driven behavior switch: local
/// development endpoint by default, deployed endpoint via `PATHIO_API_URL`.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub state_dir: PathBuf,
    pub rust_log: String,
}

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_STATE_DIR: &str = ".pathio";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_base_url = std::env::var("PATHIO_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let state_dir = std::env::var("PATHIO_STATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATE_DIR));

        if api_base_url.is_empty() {
            return Err(anyhow::anyhow!("PATHIO_API_URL must not be empty"))
                .context("invalid configuration");
        }

        Ok(Config {
            api_base_url,
            state_dir,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url_has_no_trailing_slash() {
        assert!(!DEFAULT_API_URL.ends_with('/'));
    }
}
