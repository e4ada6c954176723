//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Interfaces the collection use case requires from the outside world.
//! Adapters implement these traits.
//!
//! Port categories:
//! - `FileStat`: modification-time lookup for a path

pub mod file_stat;

pub use file_stat::FileStat;
