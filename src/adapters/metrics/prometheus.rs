//! Prometheus Metrics Registry - Exporter Exposition
//!
//! Owns a private `Registry` (never the process-wide default, so no
//! process/runtime collectors leak into the output) holding the file
//! mtime collector, and renders it in the text exposition format.

use anyhow::{Context, Result};
use prometheus::core::Collector;
use prometheus::{Encoder, Registry, TextEncoder};

/// Registry handed to the HTTP layer.
pub struct MetricsRegistry {
    /// Prometheus registry.
    registry: Registry,
}

impl MetricsRegistry {
    /// Create a registry containing `collector`.
    ///
    /// # Errors
    /// Fails if the collector's descriptors are rejected by the registry.
    pub fn new(collector: impl Collector + 'static) -> Result<Self> {
        let registry = Registry::new();
        registry
            .register(Box::new(collector))
            .context("Failed to register file mtime collector")?;
        Ok(Self { registry })
    }

    /// `Content-Type` of [`Self::gather_text`] output.
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }

    /// Run one collection pass and encode it as Prometheus text.
    ///
    /// # Errors
    /// Fails only if text encoding fails.
    pub fn gather_text(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .context("Failed to encode metrics")?;
        String::from_utf8(buffer).context("Metrics output is not valid UTF-8")
    }
}
