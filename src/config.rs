//! C16 — Config Loader.
//!
//! Loads a single immutable [`Config`] at process startup from environment
//! variables (optionally backed by a `.env` file), with typed fields and
//! documented defaults. Missing required variables are a [`ConfigError`] and
//! abort startup; missing optional variables fall back to their default.
//! Every other component receives this struct by reference — nothing
//! re-reads the environment directly.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub feeds_file: PathBuf,
    pub scraping_sources_file: PathBuf,

    pub collect_interval_min: u64,

    pub nlp_enabled: bool,
    pub translation_enabled: bool,
    pub rule_based_adjuster_enabled: bool,
    pub indicbert_sentiment_enabled: bool,

    pub batch_size: usize,
    pub max_length: usize,

    pub alert_enabled: bool,
    pub alert_negative_threshold: f64,
    pub smtp_enabled: bool,
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_use_tls: bool,
    pub smtp_username: String,
    pub smtp_password: String,
    pub smtp_from_email: String,
    pub pib_alert_email: String,
    pub frontend_url: String,

    pub database_url: String,
    pub redis_url: Option<String>,

    pub sentiment_boost_threshold: f64,

    pub fetch_concurrency: usize,
    pub fetch_timeout: Duration,
    pub nlp_batch_flush: Duration,
    pub nlp_queue_capacity: usize,
    pub db_pool_size: u32,
    pub db_pool_overflow: u32,
    pub db_statement_timeout: Duration,
    pub smtp_timeout: Duration,
    pub shutdown_grace: Duration,
}

fn env_str(key: &'static str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_bool(key: &'static str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(default)
}

fn env_parsed<T: std::str::FromStr>(key: &'static str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

impl Config {
    /// Loads configuration from the process environment. Reads a `.env` file
    /// from the current directory first if present (development convenience);
    /// a missing `.env` is not an error.
    pub fn load() -> Result<Config, ConfigError> {
        let _ = dotenvy::dotenv();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        Ok(Config {
            feeds_file: PathBuf::from(env_str("FEEDS_FILE", "config/feeds.yaml")),
            scraping_sources_file: PathBuf::from(env_str(
                "SCRAPING_SOURCES_FILE",
                "config/scraping_sources.yaml",
            )),

            collect_interval_min: env_parsed("COLLECT_INTERVAL_MIN", 60),

            nlp_enabled: env_bool("NLP_ENABLED", true),
            translation_enabled: env_bool("TRANSLATION_ENABLED", true),
            rule_based_adjuster_enabled: env_bool("RULE_BASED_ADJUSTER_ENABLED", true),
            indicbert_sentiment_enabled: env_bool("INDICBERT_SENTIMENT_ENABLED", true),

            batch_size: env_parsed("BATCH_SIZE", 20),
            max_length: env_parsed("MAX_LENGTH", 512),

            alert_enabled: env_bool("ALERT_ENABLED", true),
            alert_negative_threshold: env_parsed("ALERT_NEGATIVE_THRESHOLD", 0.6),
            smtp_enabled: env_bool("SMTP_ENABLED", true),
            smtp_server: env_str("SMTP_SERVER", "smtp.gmail.com"),
            smtp_port: env_parsed("SMTP_PORT", 587),
            smtp_use_tls: env_bool("SMTP_USE_TLS", true),
            smtp_username: env_str("SMTP_USERNAME", ""),
            smtp_password: env_str("SMTP_PASSWORD", ""),
            smtp_from_email: env_str("SMTP_FROM_EMAIL", "alerts@setu.example"),
            pib_alert_email: env_str("PIB_ALERT_EMAIL", ""),
            frontend_url: env_str("FRONTEND_URL", "http://localhost:5173"),

            database_url,
            redis_url: env::var("REDIS_URL").ok(),

            sentiment_boost_threshold: env_parsed("SENTIMENT_BOOST_THRESHOLD", 0.15),

            fetch_concurrency: env_parsed("FETCH_CONCURRENCY", 10),
            fetch_timeout: Duration::from_secs(env_parsed("FETCH_TIMEOUT_SECS", 30)),
            nlp_batch_flush: Duration::from_millis(env_parsed("NLP_BATCH_FLUSH_MS", 250)),
            nlp_queue_capacity: env_parsed("NLP_QUEUE_CAPACITY", 500),
            db_pool_size: env_parsed("DB_POOL_SIZE", 5),
            db_pool_overflow: env_parsed("DB_POOL_OVERFLOW", 10),
            db_statement_timeout: Duration::from_secs(env_parsed("DB_STATEMENT_TIMEOUT_SECS", 30)),
            smtp_timeout: Duration::from_secs(env_parsed("SMTP_TIMEOUT_SECS", 30)),
            shutdown_grace: Duration::from_secs(env_parsed("SHUTDOWN_GRACE_SECS", 60)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn missing_database_url_is_config_error() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::remove_var("DATABASE_URL");
        }
        let result = Config::load();
        assert!(matches!(result, Err(ConfigError::MissingVar("DATABASE_URL"))));
    }

    #[test]
    fn defaults_applied_when_optional_vars_absent() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::set_var("DATABASE_URL", "postgres://localhost/test");
            env::remove_var("COLLECT_INTERVAL_MIN");
            env::remove_var("BATCH_SIZE");
        }
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.collect_interval_min, 60);
        assert_eq!(cfg.batch_size, 20);
        assert_eq!(cfg.alert_negative_threshold, 0.6);
        unsafe {
            env::remove_var("DATABASE_URL");
        }
    }
}
