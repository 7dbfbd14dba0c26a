//! Output sink for the enriched collection.

use gv_error::{GvError, Result};
use gv_types::FeatureCollection;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the enriched document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file, creating parent directories
    File(PathBuf),
}

impl OutputTarget {
    /// `-` or no path means stdout.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => Self::File(p.to_path_buf()),
            _ => Self::Stdout,
        }
    }
}

/// Serializes a collection to JSON bytes.
pub fn to_json(collection: &FeatureCollection, pretty: bool) -> Result<Vec<u8>> {
    let result = if pretty {
        serde_json::to_vec_pretty(collection)
    } else {
        serde_json::to_vec(collection)
    };
    result.map_err(|e| GvError::Sink(format!("Failed to serialize collection: {e}")))
}

/// Writes the collection as UTF-8 JSON. Returns the number of bytes written.
pub async fn write_collection(
    collection: &FeatureCollection,
    target: &OutputTarget,
    pretty: bool,
) -> Result<usize> {
    let mut bytes = to_json(collection, pretty)?;
    bytes.push(b'\n');

    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&bytes)
                .and_then(|_| stdout.flush())
                .map_err(|e| GvError::Sink(format!("Failed to write stdout: {e}")))?;
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    GvError::Sink(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
            tokio::fs::write(path, &bytes)
                .await
                .map_err(|e| GvError::Sink(format!("Failed to write {}: {}", path.display(), e)))?;

            info!(
                path = %path.display(),
                bytes = bytes.len(),
                features = collection.len(),
                "Wrote enriched collection"
            );
        }
    }

    Ok(bytes.len())
}
