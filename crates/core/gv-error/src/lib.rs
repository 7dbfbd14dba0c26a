//! Error types and classification for geoview-countries.
//!
//! This crate provides:
//! - [`GvError`] - Top-level error enum for loading, parsing and writing datasets
//! - Domain-specific errors ([`SourceError`], [`DatasetError`])
//! - [`ErrorCategory`] for retry decisions when fetching remote datasets
//!
//! The enrichment engine itself never fails: an unmatched feature is reported,
//! not raised. Everything here belongs to the I/O collaborators around it.

use thiserror::Error;

/// Top-level error type for geoview-countries.
#[derive(Error, Debug)]
pub enum GvError {
    /// Source errors (file access, HTTP fetch)
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Dataset errors (JSON parsing, missing members)
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Failed to write the enriched result
    #[error("Sink error: {0}")]
    Sink(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors raised while retrieving a dataset.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Local file not found
    #[error("File not found: {0}")]
    NotFound(String),

    /// I/O error during read
    #[error("I/O error: {0}")]
    Io(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// Request could not be completed (connect, timeout, body)
    #[error("Request failed: {0}")]
    Request(String),

    /// Location is neither a path nor an http(s) URL
    #[error("Invalid URI: {0}")]
    InvalidUri(String),
}

/// Errors raised while turning fetched bytes into datasets.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Document is not valid JSON
    #[error("Parse error in {source_id}: {message}")]
    Parse { source_id: String, message: String },

    /// A required top-level member is absent
    #[error("Missing member '{member}' in {source_id}")]
    MissingMember { source_id: String, member: String },

    /// Document parsed but has the wrong shape
    #[error("Unexpected shape in {source_id}: {message}")]
    UnexpectedShape { source_id: String, message: String },
}

/// Error classification for retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transient error - retry with exponential backoff
    ///
    /// Examples: connection reset, timeout, HTTP 503, HTTP 429
    Transient,

    /// Permanent error - never retry
    ///
    /// Examples: file not found, HTTP 404, malformed JSON
    Permanent,
}

/// Classifies an error to determine retry behavior.
pub fn classify_error(error: &GvError) -> ErrorCategory {
    match error {
        GvError::Source(e) => classify_source_error(e),
        GvError::Dataset(_) => ErrorCategory::Permanent,
        GvError::Sink(_) => ErrorCategory::Permanent,
        GvError::Config(_) => ErrorCategory::Permanent,
    }
}

fn classify_source_error(error: &SourceError) -> ErrorCategory {
    match error {
        SourceError::NotFound(_) => ErrorCategory::Permanent,
        SourceError::Io(_) => ErrorCategory::Permanent,
        SourceError::Http { status, .. } => classify_status(*status),
        SourceError::Request(_) => ErrorCategory::Transient,
        SourceError::InvalidUri(_) => ErrorCategory::Permanent,
    }
}

fn classify_status(status: u16) -> ErrorCategory {
    match status {
        408 | 429 => ErrorCategory::Transient,
        500..=599 => ErrorCategory::Transient,
        _ => ErrorCategory::Permanent,
    }
}

/// Result type alias using GvError.
pub type Result<T> = std::result::Result<T, GvError>;
