//! Native HTTP client for the temperature dataset.
//!
//! Compiled only with the `api` feature; the WASM apps fetch through the
//! browser instead.

use log::{info, warn};
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::dataset::{DatasetError, TemperatureDataset};

/// Errors raised while fetching the dataset.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("dataset request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("dataset request returned status {0}")]
    BadStatus(StatusCode),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Fetch and validate the dataset from `url` with a single GET request.
pub async fn fetch_dataset(client: &Client, url: &str) -> Result<TemperatureDataset, FetchError> {
    info!("Fetching temperature dataset from {url}");

    let response = client.get(url).send().await?;
    if response.status() != StatusCode::OK {
        warn!("Bad response status for {url}: {}", response.status());
        return Err(FetchError::BadStatus(response.status()));
    }

    let body = response.text().await?;
    let dataset = TemperatureDataset::from_json(&body)?;
    info!(
        "Fetched {} readings, base temperature {}°C",
        dataset.monthly_variance.len(),
        dataset.base_temperature
    );
    Ok(dataset)
}
