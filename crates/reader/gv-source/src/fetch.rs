//! Raw dataset retrieval.

use crate::{with_retry, DatasetLocation, SourceConfig};
use gv_error::{GvError, Result, SourceError};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Reads the bytes behind a location.
///
/// Local files are read directly. URLs are fetched with the configured
/// timeout and User-Agent; non-success statuses are errors, and transient
/// failures are retried.
pub async fn fetch_bytes(location: &DatasetLocation, config: &SourceConfig) -> Result<Vec<u8>> {
    let bytes = match location {
        DatasetLocation::File(path) => read_file(path).await?,
        DatasetLocation::Url(url) => {
            let client = build_client(config)?;
            with_retry(&config.retry, "fetch_dataset", || fetch_url(&client, url)).await?
        }
    };

    info!(
        source = %location,
        bytes = bytes.len(),
        "Fetched dataset"
    );

    Ok(bytes)
}

fn build_client(config: &SourceConfig) -> Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| GvError::Config(format!("Failed to create HTTP client: {e}")))
}

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.display().to_string()).into());
    }

    tokio::fs::read(path)
        .await
        .map_err(|e| SourceError::Io(format!("Failed to read {}: {}", path.display(), e)).into())
}

async fn fetch_url(client: &Client, url: &str) -> Result<Vec<u8>> {
    debug!(url = %url, "Requesting dataset");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SourceError::Request(format!("GET {url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Http {
            status: status.as_u16(),
            url: url.to_string(),
        }
        .into());
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| SourceError::Request(format!("Failed to read body from {url}: {e}")))?;

    Ok(body.to_vec())
}
