use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
/// The AI collaborator is enabled only when `ANTHROPIC_API_KEY` is set.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub anthropic_base_url: String,
    pub llm_timeout_secs: u64,
    pub llm_max_retries: u32,
    pub catalog_path: String,
    pub default_top_n: i64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            anthropic_base_url: optional_env("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120)?,
            llm_max_retries: parse_env("LLM_MAX_RETRIES", 3)?,
            catalog_path: optional_env("COURSE_CATALOG_PATH")
                .unwrap_or_else(|| "Coursera.csv".to_string()),
            default_top_n: parse_env("DEFAULT_TOP_N", 5)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn ai_enabled(&self) -> bool {
        self.anthropic_api_key.is_some()
    }
}

/// Blank values count as unset so an empty `ANTHROPIC_API_KEY=` line disables AI.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        anthropic_api_key: None,
        anthropic_base_url: DEFAULT_BASE_URL.to_string(),
        llm_timeout_secs: 5,
        llm_max_retries: 1,
        catalog_path: "unused.csv".to_string(),
        default_top_n: 5,
        port: 0,
        rust_log: "info".to_string(),
    }
}
