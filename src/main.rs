use std::sync::Arc;

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use setu::cache::NewsCache;
#[cfg(feature = "redis-cache")]
use setu::cache::redis_backend::RedisCache;
use setu::cli::{Cli, Command};
use setu::config::Config;
use setu::error::{ConfigError, PipelineError};
use setu::pipeline::Pipeline;
use setu::registry::SourceRegistry;
use setu::scheduler;

#[tokio::main]
async fn main() -> Result<(), PipelineError> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    let registry = SourceRegistry::load(&config.feeds_file, &config.scraping_sources_file)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_pool_size + config.db_pool_overflow)
        .acquire_timeout(config.db_statement_timeout)
        .connect(&config.database_url)
        .await
        .map_err(ConfigError::Database)?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| PipelineError::Other(format!("migration failed: {e}")))?;

    let cache = Arc::new(build_cache(&config));
    let config = Arc::new(config);
    let registry = Arc::new(registry);
    let pipeline = Arc::new(Pipeline::new(Arc::clone(&config), Arc::clone(&registry), pool, cache));

    match cli.command {
        Command::Run => run_forever(config, pipeline).await,
        Command::CollectNow(args) => {
            let cancel = CancellationToken::new();
            let report = pipeline.run_cycle(args.source.as_deref(), cancel).await;
            info!(?report, "collect-now cycle complete");
            Ok(())
        }
    }
}

/// Connects the result cache to Redis when `REDIS_URL` is configured and the
/// crate was built with the `redis-cache` feature; falls back to the
/// in-process tier otherwise (unconfigured, or feature not compiled in).
#[cfg(feature = "redis-cache")]
fn build_cache(config: &Config) -> NewsCache {
    match &config.redis_url {
        Some(url) => {
            info!("result cache backed by redis");
            NewsCache::with_backend(Box::new(RedisCache::connect(url)))
        }
        None => NewsCache::in_process(),
    }
}

#[cfg(not(feature = "redis-cache"))]
fn build_cache(config: &Config) -> NewsCache {
    if config.redis_url.is_some() {
        warn!("REDIS_URL is set but the redis-cache feature was not enabled at build time; using in-process cache");
    }
    NewsCache::in_process()
}

async fn run_forever(config: Arc<Config>, pipeline: Arc<Pipeline>) -> Result<(), PipelineError> {
    let cancel = CancellationToken::new();
    let (_trigger_handle, trigger_rx) = scheduler::trigger_channel();

    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received, draining in-flight cycle");
            ctrl_c_cancel.cancel();
        }
    });

    let period = std::time::Duration::from_secs(config.collect_interval_min * 60);
    let grace = config.shutdown_grace;

    let cycle_cancel = cancel.clone();
    scheduler::run(period, grace, cancel, trigger_rx, move |filters| {
        let pipeline = Arc::clone(&pipeline);
        let cycle_cancel = cycle_cancel.clone();
        async move {
            let report = pipeline.run_cycle(filters.as_deref(), cycle_cancel).await;
            info!(?report, "cycle complete");
        }
    })
    .await;

    Ok(())
}
