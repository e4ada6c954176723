//! Use Cases Layer - Application Logic
//!
//! Orchestrates the domain model through the ports:
//! - `FileCollector`: per-scrape mtime collection over the file list

pub mod collect;

pub use collect::FileCollector;
