// src/config.rs

use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gpt-5-nano";
pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the text-generation service. Generation is disabled when unset.
    pub openai_api_key: Option<String>,
    /// Alternate OpenAI-compatible endpoint, e.g. a self-hosted gateway.
    pub openai_base_url: Option<String>,
    pub openai_model: String,
    /// Development only: accept self-signed certificates from the generation endpoint.
    pub openai_insecure_skip_verify: bool,
    pub rust_log: String,
    pub log_dir: String,
    pub port: u16,
    /// Bound on the notifier's outbound POST.
    pub notify_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let openai_api_key = non_empty_var("OPENAI_API_KEY");
        let openai_base_url = non_empty_var("OPENAI_BASE_URL");

        let openai_model =
            non_empty_var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let openai_insecure_skip_verify = env::var("OPENAI_INSECURE_SKIP_VERIFY")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let log_dir = non_empty_var("LOG_DIR").unwrap_or_else(|| "logs".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let notify_timeout = env::var("NOTIFY_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_NOTIFY_TIMEOUT_SECS));

        Self {
            openai_api_key,
            openai_base_url,
            openai_model,
            openai_insecure_skip_verify,
            rust_log,
            log_dir,
            port,
            notify_timeout,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Accepts `1`, `true` and `yes` in any case.
fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
