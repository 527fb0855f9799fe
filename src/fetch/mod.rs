//! C2 — Fetcher.
//!
//! Retrieves the raw payload for each configured source with bounded
//! parallelism and a per-request timeout. One attempt per cycle per source;
//! a failing source is logged at WARN and excluded from this cycle's
//! results, never propagated to the scheduler.

pub mod client;

use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use tracing::warn;

use crate::error::FetchError;
use crate::model::SourceConfig;

/// One source's fetch outcome: the raw payload on success, or the error
/// that ended this source's attempt.
pub struct FetchOutcome {
    pub source: SourceConfig,
    pub result: Result<String, FetchError>,
}

/// Fetches every source in `sources` concurrently, bounded by
/// `concurrency`, each capped at `timeout`. Returns one [`FetchOutcome`] per
/// source — a failure on one source never prevents the others from
/// completing.
pub async fn fetch_all(sources: &[SourceConfig], concurrency: usize, timeout: Duration) -> Vec<FetchOutcome> {
    let client = Arc::new(client::build_client(timeout));
    let timeout_secs = timeout.as_secs();

    stream::iter(sources.iter().cloned())
        .map(|source| {
            let client = Arc::clone(&client);
            async move {
                let result = client::fetch_text(&client, &source.url, timeout_secs).await;
                if let Err(e) = &result {
                    warn!(source = %source.name, url = %source.url, error = %e, "fetch failed");
                }
                FetchOutcome { source, result }
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceKind;

    fn source(name: &str, url: &str) -> SourceConfig {
        SourceConfig {
            name: name.to_string(),
            url: url.to_string(),
            kind: SourceKind::Rss,
            language: "en".to_string(),
            script: None,
            region: None,
        }
    }

    #[tokio::test]
    async fn unreachable_host_yields_network_error_not_panic() {
        let sources = vec![source("bad", "http://127.0.0.1:1/nonexistent-setu-test-port")];
        let outcomes = fetch_all(&sources, 5, Duration::from_millis(200)).await;
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].result.is_err());
    }

    #[tokio::test]
    async fn empty_source_list_yields_empty_results() {
        let outcomes = fetch_all(&[], 5, Duration::from_secs(1)).await;
        assert!(outcomes.is_empty());
    }
}
