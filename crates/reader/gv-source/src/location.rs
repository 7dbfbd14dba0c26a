//! Dataset locations.

use gv_error::{Result, SourceError};
use std::fmt;
use std::path::PathBuf;

/// Where a dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    /// Local file
    File(PathBuf),
    /// http:// or https:// URL
    Url(String),
}

impl DatasetLocation {
    /// Parses a path or URL.
    ///
    /// `http://` and `https://` become [`DatasetLocation::Url`]; `file://` and
    /// bare paths become [`DatasetLocation::File`]. Any other `scheme://` is
    /// rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(SourceError::InvalidUri("empty location".to_string()).into());
        }

        if let Some(path) = raw.strip_prefix("file://") {
            if path.is_empty() {
                return Err(SourceError::InvalidUri(format!("Missing path in {raw}")).into());
            }
            return Ok(Self::File(PathBuf::from(path)));
        }

        match raw.split_once("://") {
            Some((scheme, rest)) => {
                let scheme = scheme.to_ascii_lowercase();
                if scheme != "http" && scheme != "https" {
                    return Err(
                        SourceError::InvalidUri(format!("Unsupported scheme: {raw}")).into(),
                    );
                }
                if rest.is_empty() {
                    return Err(SourceError::InvalidUri(format!("Missing host in {raw}")).into());
                }
                Ok(Self::Url(raw.to_string()))
            }
            None => Ok(Self::File(PathBuf::from(raw))),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl fmt::Display for DatasetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}
