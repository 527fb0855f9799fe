//! C15 — Result Cache.
//!
//! A key-value store keyed on a hash of the input text plus a per-operation
//! prefix, with a TTL per operation class. Missing or unreachable cache is
//! non-fatal: every caller treats a miss (including "cache unreachable") the
//! same way — compute directly. An always-present in-process tier keeps the
//! pipeline correct with zero external dependencies; the optional
//! `redis-cache` feature layers a Redis-backed tier in front of it when
//! `REDIS_URL` is configured.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};

/// TTL for sentiment, translation and classification cache entries.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);
/// TTL for scheme-detection entries — scheme names rarely change.
pub const SCHEME_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

fn hash_key(prefix: &str, parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update(b"\0");
    }
    format!("{prefix}:{:x}", hasher.finalize())
}

/// Shared contract for a result cache, implemented by the in-process tier
/// and (behind `redis-cache`) a Redis-backed decorator over it.
pub trait ResultCache: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String, ttl: Duration);
}

struct Entry {
    value: String,
    expires_at: Instant,
}

/// Always-available in-process cache. A plain `HashMap` behind an
/// `RwLock` — this pipeline's cache traffic is read-heavy and the lock is
/// held only long enough to clone a `String`.
#[derive(Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        InMemoryCache {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl ResultCache for InMemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap();
        let entry = entries.get(key)?;
        if Instant::now() >= entry.expires_at {
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&self, key: &str, value: String, ttl: Duration) {
        let mut entries = self.entries.write().unwrap();
        entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
        // Opportunistic sweep so a long-running process doesn't accumulate
        // unbounded expired entries between reads of the same key.
        if entries.len() > 10_000 {
            let now = Instant::now();
            entries.retain(|_, e| e.expires_at > now);
        }
    }
}

/// Convenience helpers used by callers throughout the pipeline, covering the
/// per-operation key conventions from the source this was distilled from.
pub struct NewsCache {
    backend: Box<dyn ResultCache>,
}

impl NewsCache {
    pub fn in_process() -> Self {
        NewsCache {
            backend: Box::new(InMemoryCache::new()),
        }
    }

    #[cfg(feature = "redis-cache")]
    pub fn with_backend(backend: Box<dyn ResultCache>) -> Self {
        NewsCache { backend }
    }

    pub fn get_sentiment(&self, text: &str) -> Option<String> {
        self.backend.get(&hash_key("sentiment", &[text]))
    }

    pub fn set_sentiment(&self, text: &str, result: String) {
        self.backend
            .set(&hash_key("sentiment", &[text]), result, DEFAULT_TTL);
    }

    pub fn get_translation(&self, text: &str, src: &str, tgt: &str) -> Option<String> {
        self.backend.get(&hash_key("translate", &[text, src, tgt]))
    }

    pub fn set_translation(&self, text: &str, src: &str, tgt: &str, translation: String) {
        self.backend
            .set(&hash_key("translate", &[text, src, tgt]), translation, DEFAULT_TTL);
    }

    pub fn get_classification(&self, text: &str) -> Option<String> {
        self.backend.get(&hash_key("classify", &[text]))
    }

    pub fn set_classification(&self, text: &str, result: String) {
        self.backend
            .set(&hash_key("classify", &[text]), result, DEFAULT_TTL);
    }

    pub fn get_scheme_detection(&self, text: &str, language: &str) -> Option<String> {
        self.backend.get(&hash_key("schemes", &[text, language]))
    }

    pub fn set_scheme_detection(&self, text: &str, language: &str, schemes: String) {
        self.backend
            .set(&hash_key("schemes", &[text, language]), schemes, SCHEME_TTL);
    }
}

#[cfg(feature = "redis-cache")]
pub mod redis_backend;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_on_empty_cache() {
        let cache = InMemoryCache::new();
        assert!(cache.get("sentiment:abc").is_none());
    }

    #[test]
    fn hit_after_set() {
        let cache = InMemoryCache::new();
        cache.set("sentiment:abc", "positive".to_string(), DEFAULT_TTL);
        assert_eq!(cache.get("sentiment:abc"), Some("positive".to_string()));
    }

    #[test]
    fn expired_entry_is_a_miss() {
        let cache = InMemoryCache::new();
        cache.set("sentiment:abc", "positive".to_string(), Duration::from_millis(0));
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.get("sentiment:abc").is_none());
    }

    #[test]
    fn news_cache_round_trips_sentiment() {
        let cache = NewsCache::in_process();
        assert!(cache.get_sentiment("hello world").is_none());
        cache.set_sentiment("hello world", "{\"label\":\"positive\"}".to_string());
        assert_eq!(
            cache.get_sentiment("hello world"),
            Some("{\"label\":\"positive\"}".to_string())
        );
    }

    #[test]
    fn different_keys_do_not_collide() {
        let cache = NewsCache::in_process();
        cache.set_translation("hello", "hi", "en", "hello".to_string());
        assert!(cache.get_translation("hello", "mr", "en").is_none());
    }
}
