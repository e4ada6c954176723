//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies.
//!
//! Adapter categories:
//! - `fs`: modification times from the local filesystem
//! - `metrics`: Prometheus collector bridge, registry and HTTP server

pub mod fs;
pub mod metrics;
