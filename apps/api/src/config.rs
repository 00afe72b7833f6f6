use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if a provided value cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    /// When unset, the in-memory demo store is used.
    pub database_url: Option<String>,
    pub run_migrations: bool,
    /// Empty means permissive CORS.
    pub cors_allowed_origins: Vec<String>,
    /// Applied when the requirement has no "top N" / "first N".
    pub default_result_limit: Option<u32>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            run_migrations: match optional_env("RUN_MIGRATIONS") {
                Some(v) => parse_bool(&v).context("RUN_MIGRATIONS must be true or false")?,
                None => true,
            },
            cors_allowed_origins: optional_env("CORS_ALLOWED_ORIGINS")
                .map(|v| split_list(&v))
                .unwrap_or_default(),
            default_result_limit: optional_env("DEFAULT_RESULT_LIMIT")
                .map(|v| v.parse::<u32>())
                .transpose()
                .context("DEFAULT_RESULT_LIMIT must be a positive integer")?
                .filter(|n| *n > 0),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean '{other}'"),
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
