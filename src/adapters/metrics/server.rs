//! Exporter HTTP Server - Landing Page and Metrics Endpoint
//!
//! Serves `GET /` (HTML landing page linking to the metrics path) and
//! `GET <metrics path>` (Prometheus text exposition) via axum 0.7.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::sync::broadcast;
use tracing::{error, info, instrument};

use super::MetricsRegistry;

/// Shared state for the exporter routes.
#[derive(Clone)]
struct ExporterState {
    registry: Arc<MetricsRegistry>,
    landing_page: Arc<str>,
}

/// Build the exporter router.
///
/// `metrics_path` must start with `/` and must not be `/` itself; the
/// config loader validates this before the router is built.
pub fn router(registry: Arc<MetricsRegistry>, metrics_path: &str) -> Router {
    let state = ExporterState {
        registry,
        landing_page: landing_page(metrics_path).into(),
    };

    Router::new()
        .route("/", get(landing))
        .route(metrics_path, get(metrics))
        .with_state(state)
}

/// HTML served on `/`.
pub fn landing_page(metrics_path: &str) -> String {
    let href = escape_html(metrics_path);
    format!(
        "<html>\n\
         <head><title>File Last Modified Exporter</title></head>\n\
         <body>\n\
         <h1>File Last Modified Exporter</h1>\n\
         <p><a href='{href}'>Metrics</a></p>\n\
         </body>\n\
         </html>\n"
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

async fn landing(State(state): State<ExporterState>) -> Html<String> {
    Html(state.landing_page.to_string())
}

async fn metrics(State(state): State<ExporterState>) -> Response {
    match state.registry.gather_text() {
        Ok(body) => (
            [(header::CONTENT_TYPE, state.registry.content_type())],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{e:#}")).into_response()
        }
    }
}

/// Axum-based exporter server.
pub struct ExporterServer {
    /// Registry rendered on every scrape.
    registry: Arc<MetricsRegistry>,
    /// Socket address to bind, e.g. `0.0.0.0:9121`.
    listen_address: String,
    /// Path of the metrics endpoint.
    metrics_path: String,
}

impl ExporterServer {
    /// Create a new exporter server.
    pub const fn new(
        registry: Arc<MetricsRegistry>,
        listen_address: String,
        metrics_path: String,
    ) -> Self {
        Self {
            registry,
            listen_address,
            metrics_path,
        }
    }

    /// Bind and serve until `shutdown_rx` fires.
    ///
    /// # Errors
    /// Fails if the listen address cannot be bound or serving fails.
    #[instrument(skip(self, shutdown_rx), fields(address = %self.listen_address))]
    pub async fn run(self, mut shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        let app = router(self.registry, &self.metrics_path);

        let listener = tokio::net::TcpListener::bind(&self.listen_address)
            .await
            .with_context(|| format!("Failed to bind {}", self.listen_address))?;

        info!(
            address = %self.listen_address,
            path = %self.metrics_path,
            "Providing metrics"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await
            .context("Exporter server failed")?;

        info!("Exporter server stopped");
        Ok(())
    }
}
