use anyhow::{bail, Context, Result};

const DEFAULT_MODEL: &str = "llama3-8b-8192";
const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Application configuration loaded from environment variables.
/// Startup fails if the LLM API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_model: String,
    pub groq_api_base: String,
    pub llm_timeout_secs: u64,
    /// Unset means no explicit output cap is sent to the provider.
    pub llm_max_tokens: Option<u32>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            groq_model: optional_env("GROQ_MODEL", DEFAULT_MODEL),
            groq_api_base: optional_env("GROQ_API_BASE", DEFAULT_API_BASE),
            llm_timeout_secs: optional_env("LLM_TIMEOUT_SECS", "60")
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            llm_max_tokens: std::env::var("LLM_MAX_TOKENS")
                .ok()
                .map(|v| v.parse::<u32>())
                .transpose()
                .context("LLM_MAX_TOKENS must be a positive whole number")?,
            port: optional_env("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value =
        std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
