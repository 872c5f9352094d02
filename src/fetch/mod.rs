//! HTTP retrieval of pre-generated weather documents.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Fetches a URL and deserializes the JSON body.
///
/// Non-2xx statuses are errors, so a missing optional dataset fails its
/// own fetch instead of deserializing an error page.
pub async fn fetch_json<C: HttpClient, T: DeserializeOwned>(client: &C, url: &str) -> Result<T> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?.error_for_status()?;
    let bytes = resp.bytes().await?;

    serde_json::from_slice(&bytes).with_context(|| format!("malformed JSON from {url}"))
}
