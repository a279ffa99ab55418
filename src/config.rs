// src/config.rs
use gloo::net::http::Request;
use thiserror::Error;

use crate::gesture::GestureConfig;

/// Resolves next to index.html, e.g. /church-swipe/swipe-config.json
pub const CONFIG_URL: &str = "./swipe-config.json";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("failed fetching {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("failed parsing swipe config: {0}")]
    Parse(String),

    #[error("invalid swipe config: {0}")]
    Invalid(String),
}

pub fn parse_config(json: &str) -> Result<GestureConfig, ConfigError> {
    let cfg: GestureConfig =
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &GestureConfig) -> Result<(), ConfigError> {
    if !cfg.fallback_card_width.is_finite() || cfg.fallback_card_width <= 0.0 {
        return Err(ConfigError::Invalid(format!(
            "fallback_card_width must be positive, got {}",
            cfg.fallback_card_width
        )));
    }
    Ok(())
}

pub async fn fetch_config(url: &str) -> Result<GestureConfig, ConfigError> {
    let fetch_err = |message: String| ConfigError::Fetch {
        url: url.to_string(),
        message,
    };

    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| fetch_err(e.to_string()))?;
    if !resp.ok() {
        return Err(fetch_err(format!("HTTP {}", resp.status())));
    }
    let body = resp.text().await.map_err(|e| fetch_err(e.to_string()))?;
    parse_config(&body)
}

/// Config from `url`, or defaults with a warning.
pub async fn load_config(url: &str) -> GestureConfig {
    match fetch_config(url).await {
        Ok(cfg) => {
            log::info!("loaded swipe config from {url}: {cfg:?}");
            cfg
        }
        Err(e) => {
            log::warn!("{e}; using default swipe config");
            GestureConfig::default()
        }
    }
}
