//! File Stat Port - Filesystem Metadata Interface
//!
//! The collector only needs one fact per path: when it was last
//! modified. Keeping that behind a trait lets collection be tested
//! without touching the real filesystem.

use std::io;

/// Source of file modification times.
///
/// Implementations must be callable from many scrape tasks at once.
pub trait FileStat: Send + Sync + 'static {
    /// Modification time of `path` in whole seconds since the Unix epoch.
    ///
    /// Symlinks are followed. Times before the epoch are negative.
    ///
    /// # Errors
    /// Any failure to read metadata (missing file, permission denied, ...).
    fn modified_unix_seconds(&self, path: &str) -> io::Result<i64>;
}
