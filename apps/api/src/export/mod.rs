//! PDF export — hands the print-mode page tree to an external HTML-to-PDF renderer.
//!
//! The renderer receives one standalone HTML document whose sheets are already
//! A4-sized and paginated; it must not re-paginate. Export never writes to the
//! document store.

use std::time::Duration;

use anyhow::Context as _;
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

const MAX_RETRIES: u32 = 3;
const RENDER_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF export is not configured (PDF_RENDERER_URL is unset)")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Renderer error (status {status}): {message}")]
    Renderer { status: u16, message: String },

    #[error("Renderer returned an empty document")]
    Empty,

    #[error("Archive upload failed: {0}")]
    Archive(String),
}

#[async_trait]
pub trait PdfExporter: Send + Sync {
    /// Renders `html` to PDF bytes. `filename` is used for archiving only.
    async fn export(&self, document_id: Uuid, filename: &str, html: String) -> Result<Bytes, ExportError>;
}

/// Download name for a document title: whitespace runs become `_`, then `_CV.pdf`.
pub fn export_filename(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + 7);
    let mut in_space = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(ch);
            in_space = false;
        }
    }
    name.push_str("_CV.pdf");
    name
}

/// `Content-Disposition` value with an ASCII fallback and an RFC 5987 UTF-8 name.
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let mut encoded = String::new();
    for byte in filename.bytes() {
        if byte.is_ascii_alphanumeric() || b"-._~".contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP renderer backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderRequest<'a> {
    html: &'a str,
    format: &'a str,
    print_background: bool,
    prefer_css_page_size: bool,
    margin: RenderMargin,
}

#[derive(Debug, Serialize)]
struct RenderMargin {
    top: &'static str,
    right: &'static str,
    bottom: &'static str,
    left: &'static str,
}

const ZERO_MARGIN: RenderMargin = RenderMargin {
    top: "0",
    right: "0",
    bottom: "0",
    left: "0",
};

/// Optional S3 archive for exported PDFs.
#[derive(Clone)]
pub struct PdfArchive {
    pub s3: S3Client,
    pub bucket: String,
}

/// Posts documents to an HTML-to-PDF service.
/// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
#[derive(Clone)]
pub struct HttpPdfExporter {
    client: Client,
    endpoint: String,
    archive: Option<PdfArchive>,
    base_delay: Duration,
}

impl HttpPdfExporter {
    pub fn new(endpoint: String, archive: Option<PdfArchive>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(RENDER_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint,
            archive,
            base_delay: Duration::from_millis(500),
        })
    }

    async fn render(&self, html: &str) -> Result<Bytes, ExportError> {
        let request_body = RenderRequest {
            html,
            format: "A4",
            print_background: true,
            prefer_css_page_size: true,
            margin: ZERO_MARGIN,
        };

        let mut last_error: Option<ExportError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1x, 2x, 4x the base delay
                let delay = self.base_delay * (1 << (attempt - 1));
                warn!(
                    "PDF render attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(&self.endpoint)
                .header("accept", "application/pdf")
                .json(&request_body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(ExportError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("PDF renderer returned {}: {}", status, body);
                last_error = Some(ExportError::Renderer {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ExportError::Renderer {
                    status: status.as_u16(),
                    message: body,
                });
            }

            let pdf = response.bytes().await?;
            if pdf.is_empty() {
                return Err(ExportError::Empty);
            }
            return Ok(pdf);
        }

        Err(last_error.unwrap_or(ExportError::Renderer {
            status: 0,
            message: format!("gave up after {MAX_RETRIES} attempts"),
        }))
    }
}

#[async_trait]
impl PdfExporter for HttpPdfExporter {
    async fn export(&self, document_id: Uuid, filename: &str, html: String) -> Result<Bytes, ExportError> {
        let pdf = self.render(&html).await?;
        info!(document_id = %document_id, bytes = pdf.len(), "Rendered PDF");

        if let Some(archive) = &self.archive {
            let key = format!("exports/{document_id}/{filename}");
            archive
                .s3
                .put_object()
                .bucket(&archive.bucket)
                .key(&key)
                .body(ByteStream::from(pdf.clone()))
                .content_type("application/pdf")
                .send()
                .await
                .map_err(|e| ExportError::Archive(e.to_string()))?;
            info!("Archived PDF to s3://{}/{}", archive.bucket, key);
        }

        Ok(pdf)
    }
}

/// Stand-in used when no renderer is configured. Every export fails.
pub struct DisabledPdfExporter;

#[async_trait]
impl PdfExporter for DisabledPdfExporter {
    async fn export(&self, _document_id: Uuid, _filename: &str, _html: String) -> Result<Bytes, ExportError> {
        Err(ExportError::NotConfigured)
    }
}
