//! HTTP fetcher implementation
//!
//! Both network calls of a run go through here: the robots.txt GET and the
//! page GET. Each is a single attempt; there is no retry or redirect logic
//! beyond reqwest's defaults.

use crate::FetchError;
use reqwest::Client;

/// Builds the HTTP client shared by the robots check and the page fetch
///
/// No custom headers and no timeout override are set; reqwest's defaults
/// apply.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client (TLS backend unavailable)
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().gzip(true).brotli(true).build()
}

/// Fetches a URL and returns its body as text
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | `Ok(body)` |
/// | Any other status | `FetchError::Status` |
/// | Connection, TLS, timeout, body decode | `FetchError::Network` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    tracing::debug!("GET {} -> {}", url, status.as_u16());

    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await?;

    tracing::debug!("Read {} bytes from {}", body.len(), url);
    Ok(body)
}
