mod config;
mod cv;
mod db;
mod errors;
mod export;
mod layout;
mod models;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, S3Config};
use crate::db::create_pool;
use crate::export::{DisabledPdfExporter, HttpPdfExporter, PdfArchive, PdfExporter};
use crate::layout::PageGeometry;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{DocumentStore, MemoryDocumentStore, PgDocumentStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Forge API v{}", env!("CARGO_PKG_VERSION"));

    // Document store: PostgreSQL when configured, otherwise in-memory
    let store: Arc<dyn DocumentStore> = match &config.database_url {
        Some(url) => Arc::new(PgDocumentStore::new(create_pool(url).await?)),
        None => {
            warn!("DATABASE_URL is not set; documents are kept in memory only");
            Arc::new(MemoryDocumentStore::default())
        }
    };

    // PDF exporter, with an optional S3 / MinIO archive
    let exporter: Arc<dyn PdfExporter> = match &config.pdf_renderer_url {
        Some(url) => {
            let archive = match &config.s3 {
                Some(s3) => {
                    let client = build_s3_client(s3).await;
                    info!("S3 client initialized (bucket: {})", s3.bucket);
                    Some(PdfArchive {
                        s3: client,
                        bucket: s3.bucket.clone(),
                    })
                }
                None => None,
            };
            info!("PDF renderer: {url}");
            Arc::new(HttpPdfExporter::new(url.clone(), archive)?)
        }
        None => {
            warn!("PDF_RENDERER_URL is not set; export is disabled");
            Arc::new(DisabledPdfExporter)
        }
    };

    let geometry = PageGeometry::a4(config.page_content_height_px);
    info!(
        "Page geometry: {}x{}px, content budget {}px",
        geometry.width_px(),
        geometry.height_px(),
        geometry.content_height_px
    );

    // Build app state
    let state = AppState {
        store,
        exporter,
        geometry,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &S3Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.access_key_id,
        &config.secret_access_key,
        None,
        None,
        "cvforge-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
