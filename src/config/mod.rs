use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Quote API client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetcherConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_lookback_years")]
    pub lookback_years: u32,

    #[serde(default = "default_row_limit")]
    pub row_limit: u32,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    #[serde(default = "default_accept_encoding")]
    pub accept_encoding: String,

    /// Unset keeps the HTTP client's own default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Output file configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

// ── Defaults ─────────────────────────────────────────────────────────────────

fn default_base_url() -> String {
    "https://api.nasdaq.com".to_string()
}
fn default_lookback_years() -> u32 {
    5
}
fn default_row_limit() -> u32 {
    9999
}
fn default_user_agent() -> String {
    "Java-http-client/".to_string()
}
fn default_accept_language() -> String {
    "en-US,en;q=0.9".to_string()
}
fn default_accept_encoding() -> String {
    "gzip, deflate, br".to_string()
}
fn default_output_path() -> PathBuf {
    PathBuf::from("stocks.json")
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            lookback_years: default_lookback_years(),
            row_limit: default_row_limit(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
            accept_encoding: default_accept_encoding(),
            timeout_secs: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

// ── Loader ───────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration from file + environment overrides
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(
                config::File::with_name("config/default")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(
                config::File::with_name("config/local")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(config::Environment::with_prefix("STOCKS").separator("__"))
            .build()?;

        let app_cfg = cfg.try_deserialize().unwrap_or_else(|e| {
            warn!("Ignoring invalid configuration ({}), using defaults", e);
            AppConfig::default()
        });
        Ok(app_cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_nasdaq_endpoint() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.fetcher.base_url, "https://api.nasdaq.com");
        assert_eq!(cfg.fetcher.lookback_years, 5);
        assert_eq!(cfg.fetcher.row_limit, 9999);
        assert_eq!(cfg.fetcher.user_agent, "Java-http-client/");
        assert_eq!(cfg.fetcher.timeout_secs, None);
        assert_eq!(cfg.output.path, PathBuf::from("stocks.json"));
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(
                "[fetcher]\nrow_limit = 10\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let app: AppConfig = cfg.try_deserialize().unwrap();
        assert_eq!(app.fetcher.row_limit, 10);
        assert_eq!(app.fetcher.base_url, "https://api.nasdaq.com");
        assert_eq!(app.output.path, PathBuf::from("stocks.json"));
    }
}
