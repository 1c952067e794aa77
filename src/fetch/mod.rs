// src/fetch/mod.rs
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// The swisstopo PLZ/locality directory, published as a zipped CSV.
pub static DATASET_URL: &str = "https://data.geo.admin.ch/ch.swisstopo-vd.ortschaftenverzeichnis_plz/ortschaftenverzeichnis_plz/ortschaftenverzeichnis_plz_4326.csv.zip";

/// Overall bound on the single download request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Download the given ZIP URL into memory. Any non-success status, connection
/// failure or timeout aborts the run; there is no retry.
pub async fn download_zip(client: &Client, url_str: &str) -> Result<Vec<u8>> {
    let url = Url::parse(url_str).with_context(|| format!("invalid dataset URL: {url_str}"))?;
    let resp = client
        .get(url.as_str())
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?
        .error_for_status()?;
    let bytes = resp.bytes().await?;
    Ok(bytes.to_vec())
}
