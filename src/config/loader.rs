//! Configuration Loader - File List Loading and Validation
//!
//! Reads the JSON file list, validates the flags, and produces an
//! `ExporterConfig`. Every failure here is fatal at startup.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::{ExporterArgs, ExporterConfig};
use crate::domain::FileList;

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// Config file missing or unreadable.
  #[error("cannot open config file {}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Config file is not a JSON array of strings.
  #[error("config file {} is not a JSON array of file paths", .path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  /// Metrics path unusable as a route.
  #[error(
    "telemetry path {0:?} must start with '/', must not be '/', and must not contain : * {{ }} ' \" < > &"
  )]
  InvalidTelemetryPath(String),
}

/// Resolve flags into a validated configuration, loading the file list.
///
/// # Errors
/// Returns [`ConfigError`] if the file list cannot be read or parsed,
/// or if the telemetry path is invalid.
pub fn load_config(args: &ExporterArgs) -> Result<ExporterConfig, ConfigError> {
  validate_telemetry_path(&args.telemetry_path)?;
  let files = load_file_list(&args.config)?;

  Ok(ExporterConfig {
    listen_address: resolve_listen_address(&args.listen_address),
    metrics_path: args.telemetry_path.clone(),
    files,
  })
}

/// Load the monitored file list from a JSON array of strings.
///
/// # Errors
/// [`ConfigError::Read`] if the file can't be read,
/// [`ConfigError::Parse`] if it isn't a JSON array of strings.
pub fn load_file_list(path: &Path) -> Result<FileList, ConfigError> {
  let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  let files: FileList =
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })?;

  info!(
    path = %path.display(),
    files = files.len(),
    "Configuration loaded successfully"
  );

  Ok(files)
}

/// Route syntax plus HTML-significant characters.
const FORBIDDEN_PATH_CHARS: &[char] = &[':', '*', '{', '}', '\'', '"', '<', '>', '&'];

/// Check that the telemetry path can be mounted next to the landing page.
///
/// # Errors
/// [`ConfigError::InvalidTelemetryPath`] unless the path starts with `/`,
/// is not the root, and is a plain literal route (no `:param`, `*wildcard`
/// or `{}` segments, no characters that break the landing page link).
pub fn validate_telemetry_path(path: &str) -> Result<(), ConfigError> {
  if !path.starts_with('/') || path == "/" || path.contains(FORBIDDEN_PATH_CHARS) {
    return Err(ConfigError::InvalidTelemetryPath(path.to_string()));
  }
  Ok(())
}

/// Normalize a listen address for binding.
///
/// A host-less `:port` binds all interfaces.
pub fn resolve_listen_address(address: &str) -> String {
  if address.starts_with(':') {
    format!("0.0.0.0{address}")
  } else {
    address.to_string()
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use clap::Parser;

  use super::*;

  fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
  }

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_file_list(Path::new("nonexistent.json"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
  }

  #[test]
  fn test_load_file_list() {
    let file = config_file(r#"["./a.txt", "./missing.txt"]"#);
    let files = load_file_list(file.path()).unwrap();
    assert_eq!(files.iter().collect::<Vec<_>>(), vec!["./a.txt", "./missing.txt"]);
  }

  #[test]
  fn test_load_empty_array() {
    let file = config_file("[]");
    assert!(load_file_list(file.path()).unwrap().is_empty());
  }

  #[test]
  fn test_malformed_json_is_parse_error() {
    for bad in [r#"["a.txt""#, r#"{"files": ["a"]}"#, "[1, 2]", ""] {
      let file = config_file(bad);
      let result = load_file_list(file.path());
      assert!(
        matches!(result, Err(ConfigError::Parse { .. })),
        "expected parse error for {bad:?}"
      );
    }
  }

  #[test]
  fn test_telemetry_path_validation() {
    assert!(validate_telemetry_path("/metrics").is_ok());
    assert!(validate_telemetry_path("/a/b").is_ok());
    assert!(validate_telemetry_path("/").is_err());
    assert!(validate_telemetry_path("metrics").is_err());
    assert!(validate_telemetry_path("").is_err());
  }

  #[test]
  fn test_telemetry_path_rejects_route_syntax() {
    for path in ["/a/*", "/a/*rest", "/:x", "/metrics/:id", "/{x}", "/a}"] {
      assert!(
        matches!(
          validate_telemetry_path(path),
          Err(ConfigError::InvalidTelemetryPath(_))
        ),
        "expected rejection of {path:?}"
      );
    }
  }

  #[test]
  fn test_telemetry_path_rejects_html_breaking_chars() {
    for path in ["/a'b", "/<script>", "/a\"b", "/a&b", "/a>b"] {
      assert!(validate_telemetry_path(path).is_err(), "expected rejection of {path:?}");
    }
    assert!(validate_telemetry_path("/metrics-v2/prom_text.txt").is_ok());
  }

  #[test]
  fn test_load_config_rejects_wildcard_path() {
    let file = config_file("[]");
    let args = ExporterArgs::try_parse_from([
      "file-mtime-exporter",
      "--web.telemetry-path",
      "/a/*",
      "--config",
      file.path().to_str().unwrap(),
    ])
    .unwrap();
    assert!(matches!(
      load_config(&args),
      Err(ConfigError::InvalidTelemetryPath(_))
    ));
  }

  #[test]
  fn test_resolve_listen_address() {
    assert_eq!(resolve_listen_address(":9121"), "0.0.0.0:9121");
    assert_eq!(resolve_listen_address("127.0.0.1:8080"), "127.0.0.1:8080");
    assert_eq!(resolve_listen_address("[::1]:9121"), "[::1]:9121");
  }

  #[test]
  fn test_load_config_resolves_everything() {
    let file = config_file(r#"["/etc/hosts"]"#);
    let args = ExporterArgs::try_parse_from([
      "file-mtime-exporter",
      "--config",
      file.path().to_str().unwrap(),
    ])
    .unwrap();

    let config = load_config(&args).unwrap();
    assert_eq!(config.listen_address, "0.0.0.0:9121");
    assert_eq!(config.metrics_path, "/metrics");
    assert_eq!(config.files.len(), 1);
  }

  #[test]
  fn test_load_config_rejects_bad_path_before_reading() {
    let args = ExporterArgs::try_parse_from([
      "file-mtime-exporter",
      "--web.telemetry-path",
      "/",
      "--config",
      "nonexistent.json",
    ])
    .unwrap();
    assert!(matches!(
      load_config(&args),
      Err(ConfigError::InvalidTelemetryPath(_))
    ));
  }
}
