//! Shared utilities for geoview-countries CLI binaries.
//!
//! Log level parsing, logging setup and summary formatting used by `gv-enrich`.

pub mod args;
pub mod format;
pub mod logging;

pub use args::LogLevel;
pub use format::{format_number, format_percent};
pub use logging::init_logging;
