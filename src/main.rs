//! File Last-Modified Exporter — Entry Point
//!
//! Wiring sequence:
//! 1. Parse flags (CLI + env)
//! 2. Init tracing
//! 3. Load the JSON file list + validate (fatal on error, before binding)
//! 4. Build the collector and its private Prometheus registry
//! 5. Serve `/` and the metrics path until SIGINT/SIGTERM

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tokio::sync::broadcast;
use tracing::info;
use tracing_subscriber::EnvFilter;

use file_mtime_exporter::adapters::fs::StdFileStat;
use file_mtime_exporter::adapters::metrics::{ExporterServer, FileMtimeCollector, MetricsRegistry};
use file_mtime_exporter::config::{loader, ExporterArgs, LogFormat};
use file_mtime_exporter::usecases::FileCollector;

#[tokio::main]
async fn main() -> Result<()> {
    let args = ExporterArgs::parse();

    init_tracing(&args);

    let config = loader::load_config(&args).context("Failed to load configuration")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        files = config.files.len(),
        "Starting file mtime exporter"
    );

    let collector = Arc::new(FileCollector::new(
        Arc::new(StdFileStat::new()),
        config.files,
    ));
    let registry = Arc::new(MetricsRegistry::new(
        FileMtimeCollector::new(collector).context("Invalid metric descriptor")?,
    )?);

    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    tokio::spawn(async move {
        wait_for_signal().await;
        let _ = shutdown_tx.send(());
    });

    ExporterServer::new(registry, config.listen_address, config.metrics_path)
        .run(shutdown_rx)
        .await?;

    info!("Shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins over `--log.level`.
fn init_tracing(args: &ExporterArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match args.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

async fn wait_for_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal as unix_signal, SignalKind};

        match unix_signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = signal::ctrl_c() => info!("SIGINT received, initiating graceful shutdown"),
                    _ = sigterm.recv() => info!("SIGTERM received, initiating graceful shutdown"),
                }
                return;
            }
            Err(e) => tracing::warn!(error = %e, "Cannot install SIGTERM handler"),
        }
    }

    if signal::ctrl_c().await.is_ok() {
        info!("SIGINT received, initiating graceful shutdown");
    }
}
