//! Exporter data model: the monitored file list, the static metric
//! descriptor and the per-scrape samples.

use serde::Deserialize;

/// Metric name exposed for every monitored file.
pub const METRIC_NAME: &str = "file_last_modified_time";

/// Help text attached to the metric.
pub const METRIC_HELP: &str = "Last Modified Time";

/// Label carrying the cleaned file path.
pub const FILENAME_LABEL: &str = "filename";

/// Value emitted when a file cannot be stat'ed.
pub const MISSING_VALUE: i64 = 0;

/// Ordered list of paths to monitor.
///
/// Deserialized from a bare JSON array of strings. Built once at
/// startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FileList(Vec<String>);

impl FileList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Paths in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for FileList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Static metadata describing the exported gauge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDescriptor {
    /// Fully qualified metric name.
    pub name: &'static str,
    /// Help text shown in the exposition.
    pub help: &'static str,
    /// Single variable label name.
    pub label: &'static str,
}

impl MetricDescriptor {
    /// The `file_last_modified_time{filename=...}` gauge.
    pub const fn file_last_modified() -> Self {
        Self {
            name: METRIC_NAME,
            help: METRIC_HELP,
            label: FILENAME_LABEL,
        }
    }
}

impl Default for MetricDescriptor {
    fn default() -> Self {
        Self::file_last_modified()
    }
}

/// One gauge observation produced during a collection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Cleaned path used as the `filename` label value.
    pub filename: String,
    /// Modification time in Unix seconds, or [`MISSING_VALUE`].
    pub value: i64,
}

impl Sample {
    pub fn new(filename: impl Into<String>, value: i64) -> Self {
        Self {
            filename: filename.into(),
            value,
        }
    }
}
