use std::time::Duration;

use crate::error::FetchError;

/// Builds the shared HTTP client used for every fetch. A single client is
/// reused across a cycle so connection pooling actually helps.
pub fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent("setu-newsbot/0.1")
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Fetches `url` as text, mapping transport and status failures onto the
/// §4.2 error taxonomy. A request that runs past `client`'s configured
/// timeout surfaces as [`FetchError::Timeout`] rather than [`FetchError::Network`].
pub async fn fetch_text(client: &reqwest::Client, url: &str, timeout_secs: u64) -> Result<String, FetchError> {
    let response = client.get(url).send().await.map_err(|source| {
        if source.is_timeout() {
            FetchError::Timeout { url: url.to_string(), timeout_secs }
        } else {
            FetchError::Network { url: url.to_string(), source }
        }
    })?;

    if !response.status().is_success() {
        return Err(FetchError::HttpStatus { url: url.to_string(), status: response.status().as_u16() });
    }

    response.text().await.map_err(|source| FetchError::Network { url: url.to_string(), source })
}
