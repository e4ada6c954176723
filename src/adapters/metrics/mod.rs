//! Metrics Adapters
//!
//! Bridges the file collector into a Prometheus registry and serves it
//! over HTTP via axum 0.7.

pub mod collector;
pub mod prometheus;
pub mod server;

pub use collector::FileMtimeCollector;
pub use self::prometheus::MetricsRegistry;
pub use server::ExporterServer;
