//! File Collector - One Collection Pass Per Scrape
//!
//! For every configured path, in configured order:
//! - stat the file through the `FileStat` port
//! - use the mtime (Unix seconds) as the gauge value, or 0 on any error
//! - label the sample with the cleaned path
//!
//! Stat errors are swallowed on purpose: a missing file shows up as a
//! zero timestamp, never as a failed scrape and never as a log line.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::{clean_path, FileList, MetricDescriptor, Sample, MISSING_VALUE};
use crate::ports::FileStat;

/// Produces one `file_last_modified_time` sample per configured file.
///
/// Holds only immutable state, so `collect` can run from any number of
/// scrape tasks concurrently without locking.
pub struct FileCollector<S: FileStat> {
  /// Filesystem metadata port.
  stat: Arc<S>,
  /// Paths to monitor, in configured order.
  files: FileList,
  /// Descriptor shared by every pass.
  descriptor: MetricDescriptor,
}

impl<S: FileStat> FileCollector<S> {
  /// Create a collector over a fixed file list.
  pub fn new(stat: Arc<S>, files: FileList) -> Self {
    Self {
      stat,
      files,
      descriptor: MetricDescriptor::file_last_modified(),
    }
  }

  /// The single metric this collector emits.
  pub fn describe(&self) -> &MetricDescriptor {
    &self.descriptor
  }

  /// Run one collection pass.
  ///
  /// Always returns exactly one sample per configured file, in configured order.
  #[instrument(skip(self), fields(files = self.files.len()))]
  pub fn collect(&self) -> Vec<Sample> {
    let samples: Vec<Sample> = self
      .files
      .iter()
      .map(|path| {
        let value = self
          .stat
          .modified_unix_seconds(path)
          .unwrap_or(MISSING_VALUE);
        Sample::new(clean_path(path), value)
      })
      .collect();

    debug!(samples = samples.len(), "Collection pass complete");
    samples
  }
}
