//! Filesystem Adapter - `std::fs` Implementation of `FileStat`
//!
//! Follows symlinks like `stat(2)`. Each call is independent; a failure
//! on one path has no effect on the others.

use std::fs;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ports::FileStat;

/// Reads modification times from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileStat;

impl StdFileStat {
    pub const fn new() -> Self {
        Self
    }
}

impl FileStat for StdFileStat {
    fn modified_unix_seconds(&self, path: &str) -> io::Result<i64> {
        let modified = fs::metadata(path)?.modified()?;
        Ok(unix_seconds(modified))
    }
}

/// Whole seconds since the Unix epoch, rounded toward negative infinity.
pub fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(before) => {
            let before = before.duration();
            let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            if before.subsec_nanos() > 0 {
                -secs - 1
            } else {
                -secs
            }
        }
    }
}
