use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::extract::ExtractionMode;

/// Application configuration loaded from environment variables.
///
/// Every AI endpoint degrades to its fallback payload when `GEMINI_API_KEY`
/// is unset, so the only hard failures at startup are unparsable values.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    /// Upper bound on a single model call, including connect and body read.
    pub llm_timeout: Duration,
    pub json_extraction: ExtractionMode,
    /// When set, fallbacks echo the requested role instead of the canned one.
    pub personalized_fallbacks: bool,
    pub supabase: Option<SupabaseConfig>,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    /// Upper bound on one sign-in round trip.
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_timeout = parse_timeout(
            "LLM_TIMEOUT_SECS",
            &optional_env("LLM_TIMEOUT_SECS").unwrap_or_else(|| "30".to_string()),
        )?;
        let auth_timeout = parse_timeout(
            "AUTH_TIMEOUT_SECS",
            &optional_env("AUTH_TIMEOUT_SECS").unwrap_or_else(|| "10".to_string()),
        )?;

        let json_extraction = match optional_env("JSON_EXTRACTION") {
            Some(raw) => raw.parse::<ExtractionMode>()?,
            None => ExtractionMode::default(),
        };

        let personalized_fallbacks = match optional_env("PERSONALIZED_FALLBACKS") {
            Some(raw) => parse_flag("PERSONALIZED_FALLBACKS", &raw)?,
            None => false,
        };

        let supabase = match (optional_env("SUPABASE_URL"), optional_env("SUPABASE_ANON_KEY")) {
            (Some(url), Some(anon_key)) => Some(SupabaseConfig {
                url: url.trim_end_matches('/').to_string(),
                anon_key,
                timeout: auth_timeout,
            }),
            (None, None) => None,
            _ => bail!("SUPABASE_URL and SUPABASE_ANON_KEY must be set together"),
        };

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            llm_timeout,
            json_extraction,
            personalized_fallbacks,
            supabase,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Empty values are treated the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Whole seconds, at least one.
fn parse_timeout(key: &str, raw: &str) -> Result<Duration> {
    let secs = raw
        .parse::<u64>()
        .with_context(|| format!("{key} must be a whole number of seconds"))?;
    if secs == 0 {
        bail!("{key} must be at least 1 second");
    }
    Ok(Duration::from_secs(secs))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key} must be a boolean, got '{other}'"),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: Some("test-key".to_string()),
            llm_timeout: Duration::from_secs(5),
            json_extraction: ExtractionMode::FirstLast,
            personalized_fallbacks: false,
            supabase: None,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
