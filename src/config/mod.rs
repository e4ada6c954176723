//! Configuration Module - Startup Flags and File List
//!
//! Flags come from the command line (with environment variable
//! fallbacks); the list of monitored files comes from a JSON file
//! named by `--config`. Everything is resolved once at startup and is
//! immutable afterwards.

pub mod loader;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::domain::FileList;

/// Command-line flags.
#[derive(Debug, Clone, Parser)]
#[command(
  name = "file-mtime-exporter",
  about = "Prometheus exporter for file last-modified times",
  version
)]
pub struct ExporterArgs {
  /// Address to listen on for web interface and telemetry.
  #[arg(
    long = "web.listen-address",
    env = "FILE_EXPORTER_LISTEN_ADDRESS",
    default_value = ":9121"
  )]
  pub listen_address: String,

  /// Path under which to expose metrics.
  #[arg(
    long = "web.telemetry-path",
    env = "FILE_EXPORTER_TELEMETRY_PATH",
    default_value = "/metrics"
  )]
  pub telemetry_path: String,

  /// Config file location (JSON array of file paths).
  #[arg(long = "config", env = "FILE_EXPORTER_CONFIG", default_value = "./config.json")]
  pub config: PathBuf,

  /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
  #[arg(long = "log.level", env = "FILE_EXPORTER_LOG_LEVEL", default_value = "info")]
  pub log_level: String,

  /// Log output format.
  #[arg(long = "log.format", value_enum, default_value_t = LogFormat::Text)]
  pub log_format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
  /// Human-readable lines.
  Text,
  /// One JSON object per event.
  Json,
}

/// Fully resolved exporter configuration.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
  /// Socket address to bind (host always present).
  pub listen_address: String,
  /// Path of the metrics endpoint.
  pub metrics_path: String,
  /// Files to monitor.
  pub files: FileList,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let args = ExporterArgs::try_parse_from(["file-mtime-exporter"]).unwrap();
    assert_eq!(args.listen_address, ":9121");
    assert_eq!(args.telemetry_path, "/metrics");
    assert_eq!(args.config, PathBuf::from("./config.json"));
    assert_eq!(args.log_format, LogFormat::Text);
  }

  #[test]
  fn test_dotted_flags() {
    let args = ExporterArgs::try_parse_from([
      "file-mtime-exporter",
      "--web.listen-address",
      "127.0.0.1:9999",
      "--web.telemetry-path",
      "/probe",
      "--config",
      "/etc/files.json",
      "--log.format",
      "json",
    ])
    .unwrap();
    assert_eq!(args.listen_address, "127.0.0.1:9999");
    assert_eq!(args.telemetry_path, "/probe");
    assert_eq!(args.config, PathBuf::from("/etc/files.json"));
    assert_eq!(args.log_format, LogFormat::Json);
  }

  #[test]
  fn test_clap_definition_is_valid() {
    use clap::CommandFactory;
    ExporterArgs::command().debug_assert();
  }
}
