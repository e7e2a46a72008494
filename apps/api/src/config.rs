use anyhow::{bail, Context, Result};

use crate::layout::geometry::DEFAULT_CONTENT_HEIGHT_PX;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Unset means documents live in process memory only.
    pub database_url: Option<String>,
    /// HTML-to-PDF renderer endpoint. Unset disables export.
    pub pdf_renderer_url: Option<String>,
    /// Archive for exported PDFs. Requires all S3 settings to be present.
    pub s3: Option<S3Config>,
    pub page_content_height_px: f32,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let s3 = match optional_env("S3_BUCKET") {
            Some(bucket) => Some(S3Config {
                bucket,
                endpoint: require_env("S3_ENDPOINT")?,
                access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
                secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            }),
            None => None,
        };

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            pdf_renderer_url: optional_env("PDF_RENDERER_URL"),
            s3,
            page_content_height_px: parse_content_height(optional_env("PAGE_CONTENT_HEIGHT_PX"))?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_content_height(raw: Option<String>) -> Result<f32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_CONTENT_HEIGHT_PX);
    };
    let value = raw
        .trim()
        .parse::<f32>()
        .context("PAGE_CONTENT_HEIGHT_PX must be a number")?;
    if !(value.is_finite() && value > 0.0) {
        bail!("PAGE_CONTENT_HEIGHT_PX must be positive, got {value}");
    }
    Ok(value)
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_height_defaults() {
        assert_eq!(parse_content_height(None).unwrap(), DEFAULT_CONTENT_HEIGHT_PX);
    }

    #[test]
    fn test_content_height_parses() {
        assert_eq!(parse_content_height(Some(" 980 ".to_string())).unwrap(), 980.0);
    }

    #[test]
    fn test_content_height_rejects_non_positive() {
        assert!(parse_content_height(Some("0".to_string())).is_err());
        assert!(parse_content_height(Some("-20".to_string())).is_err());
        assert!(parse_content_height(Some("tall".to_string())).is_err());
        assert!(parse_content_height(Some("NaN".to_string())).is_err());
    }
}
