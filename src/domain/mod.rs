//! Domain layer - Exporter data model and path normalization.
//!
//! Pure logic with no I/O (hexagonal architecture inner ring).

pub mod path;
pub mod sample;

pub use path::clean_path;
pub use sample::{FileList, MetricDescriptor, Sample, MISSING_VALUE};
