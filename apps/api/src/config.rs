use anyhow::{bail, Context, Result};

use crate::scoring::policy::{ResumePolicy, DEFAULT_RESUME_CEILING};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub resume_score_ceiling: u32,
    pub resume_strict_format: bool,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            resume_score_ceiling: parse_ceiling(optional_env("RESUME_SCORE_CEILING").as_deref())?,
            resume_strict_format: parse_flag(
                "RESUME_STRICT_FORMAT",
                optional_env("RESUME_STRICT_FORMAT").as_deref(),
            )?,
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        })
    }

    pub fn resume_policy(&self) -> ResumePolicy {
        ResumePolicy {
            score_ceiling: self.resume_score_ceiling,
            strict_format: self.resume_strict_format,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_ceiling(raw: Option<&str>) -> Result<u32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_RESUME_CEILING);
    };
    let ceiling = raw
        .trim()
        .parse::<u32>()
        .with_context(|| format!("RESUME_SCORE_CEILING must be an integer, got '{raw}'"))?;
    if !(1..=100).contains(&ceiling) {
        bail!("RESUME_SCORE_CEILING must be between 1 and 100, got {ceiling}");
    }
    Ok(ceiling)
}

fn parse_flag(key: &str, raw: Option<&str>) -> Result<bool> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None => Ok(false),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => bail!("{key} must be a boolean, got '{other}'"),
    }
}
