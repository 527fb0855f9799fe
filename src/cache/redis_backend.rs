//! Optional Redis-backed cache tier, wired in only when the `redis-cache`
//! feature is enabled and `REDIS_URL` is configured. A connection failure at
//! construction, or at any point afterward, degrades silently to the
//! in-process tier — logged once at WARN, not on every miss.

use std::sync::Mutex;
use std::time::Duration;

use redis::{Client, Commands};
use tracing::warn;

use super::{InMemoryCache, ResultCache};

/// Tries Redis first, falling back to an owned in-process cache on any
/// error. Once a connection failure is observed the backend stops retrying
/// Redis for the remainder of the process — flipping back live is not worth
/// the complexity for a cache.
pub struct RedisCache {
    client: Mutex<Option<redis::Connection>>,
    fallback: InMemoryCache,
    warned: Mutex<bool>,
}

impl RedisCache {
    pub fn connect(redis_url: &str) -> Self {
        let conn = Client::open(redis_url)
            .and_then(|c| c.get_connection())
            .ok();
        RedisCache {
            client: Mutex::new(conn),
            fallback: InMemoryCache::new(),
            warned: Mutex::new(false),
        }
    }

    fn warn_once(&self, err: impl std::fmt::Display) {
        let mut warned = self.warned.lock().unwrap();
        if !*warned {
            warn!(error = %err, "redis cache unreachable, degrading to in-process cache");
            *warned = true;
        }
    }
}

impl ResultCache for RedisCache {
    fn get(&self, key: &str) -> Option<String> {
        let mut guard = self.client.lock().unwrap();
        if let Some(conn) = guard.as_mut() {
            match conn.get::<_, Option<String>>(key) {
                Ok(value) => return value.or_else(|| self.fallback.get(key)),
                Err(e) => {
                    self.warn_once(e);
                    *guard = None;
                }
            }
        }
        drop(guard);
        self.fallback.get(key)
    }

    fn set(&self, key: &str, value: String, ttl: Duration) {
        let mut guard = self.client.lock().unwrap();
        if let Some(conn) = guard.as_mut() {
            let result: redis::RedisResult<()> = conn.set_ex(key, &value, ttl.as_secs().max(1));
            if let Err(e) = result {
                self.warn_once(e);
                *guard = None;
            }
        }
        drop(guard);
        self.fallback.set(key, value, ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_redis_degrades_to_fallback() {
        let cache = RedisCache::connect("redis://127.0.0.1:1/nonexistent-setu-test-port");
        assert!(cache.client.lock().unwrap().is_none());

        cache.set("sentiment:abc", "positive".to_string(), Duration::from_secs(60));
        assert_eq!(cache.get("sentiment:abc"), Some("positive".to_string()));
    }

    #[test]
    fn invalid_url_degrades_to_fallback() {
        let cache = RedisCache::connect("not-a-valid-url");
        assert!(cache.client.lock().unwrap().is_none());
        assert!(cache.get("anything").is_none());
    }
}
