//! Orchestration — wires C1–C13 into the per-cycle execution described in
//! §5: a fetch pool that does its own early-filter work (parse, language
//! detection, translation, rejection) feeding a bounded channel, and a
//! dedicated batcher task that does the heavier per-item work (NLP,
//! relevance, categorization, region, confidence, persistence, alert
//! dispatch) in chunks.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use futures_util::stream::{self, StreamExt};
use sqlx::PgPool;
use tokio::sync::{mpsc, Semaphore};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use crate::alert;
use crate::cache::NewsCache;
use crate::categorize;
use crate::confidence;
use crate::config::Config;
use crate::fetch::{self, client};
use crate::lang;
use crate::model::{EnrichedItem, RawItem, SourceConfig, SourceKind, StoredArticle};
use crate::nlp;
use crate::parse;
use crate::region;
use crate::registry::SourceRegistry;
use crate::reject;
use crate::relevance;
use crate::store;
use crate::translate::{self, TranslationProvider};

/// Summary of one completed cycle, returned to the scheduler/CLI caller for
/// logging. Counts, not error collections — per-item failures are logged at
/// their originating stage and never bubble up.
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    pub sources_attempted: usize,
    pub items_fetched: usize,
    pub items_early_rejected: usize,
    pub stored_created: u64,
    pub stored_updated: u64,
    pub stored_rejected: u64,
    pub alerts_dispatched: u64,
    pub store_errors: u64,
}

pub struct Pipeline {
    config: Arc<Config>,
    registry: Arc<SourceRegistry>,
    pool: PgPool,
    cache: Arc<NewsCache>,
    translation_chain: Arc<Vec<Box<dyn TranslationProvider>>>,
}

impl Pipeline {
    pub fn new(config: Arc<Config>, registry: Arc<SourceRegistry>, pool: PgPool, cache: Arc<NewsCache>) -> Self {
        let translation_chain = Arc::new(translate::default_chain(&config));
        Pipeline {
            config,
            registry,
            pool,
            cache,
            translation_chain,
        }
    }

    fn filtered_sources(&self, filters: Option<&str>) -> Vec<SourceConfig> {
        let sources = self.registry.sources();
        match filters {
            Some(substr) => sources.iter().filter(|s| s.name.contains(substr)).cloned().collect(),
            None => sources.as_ref().clone(),
        }
    }

    /// Runs one full collection cycle: fetch, enrich, classify, persist,
    /// alert. Returns once every fetched item has either been dropped,
    /// stored, or has failed with a logged error.
    pub async fn run_cycle(&self, filters: Option<&str>, cancel: CancellationToken) -> CycleReport {
        let sources = self.filtered_sources(filters);
        let sources_attempted = sources.len();
        let (rss_sources, scraper_sources): (Vec<_>, Vec<_>) =
            sources.into_iter().partition(|s| s.kind == SourceKind::Rss);

        let (tx, rx) = mpsc::channel::<EnrichedItem>(self.config.nlp_queue_capacity);

        let report = Arc::new(Mutex::new(CycleReport {
            sources_attempted,
            ..Default::default()
        }));

        let fetch_handle = tokio::spawn(run_fetch_stage(
            rss_sources,
            scraper_sources,
            Arc::clone(&self.config),
            Arc::clone(&self.cache),
            Arc::clone(&self.translation_chain),
            tx,
            cancel.clone(),
            Arc::clone(&report),
        ));

        let enrich_handle = tokio::spawn(run_enrichment_stage(
            rx,
            Arc::clone(&self.config),
            Arc::clone(&self.cache),
            self.pool.clone(),
            Arc::clone(&report),
            cancel,
        ));

        if let Err(e) = fetch_handle.await {
            error!(error = %e, "fetch stage task panicked");
        }
        if let Err(e) = enrich_handle.await {
            error!(error = %e, "enrichment stage task panicked");
        }

        Arc::try_unwrap(report)
            .map(|m| m.into_inner().unwrap())
            .unwrap_or_else(|arc| arc.lock().unwrap().clone())
    }
}

/// Runs language detection, translation and early rejection for one raw
/// item. `None` means the item was dropped and should not reach NLP.
async fn prepare_item(
    raw: RawItem,
    config: &Config,
    cache: &NewsCache,
    chain: &[Box<dyn TranslationProvider>],
) -> Option<EnrichedItem> {
    let detection = lang::detect(&format!("{} {}", raw.title, raw.summary));
    let mut item = EnrichedItem::from_raw(raw);
    item.detected_language = detection.code;
    item.detected_script = detection.script;
    item.language_confidence = detection.confidence;

    if config.translation_enabled && item.detected_language != "en" {
        item.translated_title = translate::translate(&item.title, &item.detected_language, chain, cache).await;
        item.translated_summary = translate::translate(&item.summary, &item.detected_language, chain, cache).await;
    }

    item.text_for_nlp = item
        .translated_summary
        .clone()
        .or_else(|| item.translated_title.clone())
        .unwrap_or_else(|| item.title_and_summary());

    let outcome = reject::check(&item.title, &item.summary, &item.detected_language);
    if outcome.rejected {
        debug!(url = %item.url, reason = ?outcome.reason, "early rejector dropped item");
        return None;
    }

    Some(item)
}

async fn run_fetch_stage(
    rss_sources: Vec<SourceConfig>,
    scraper_sources: Vec<SourceConfig>,
    config: Arc<Config>,
    cache: Arc<NewsCache>,
    chain: Arc<Vec<Box<dyn TranslationProvider>>>,
    tx: mpsc::Sender<EnrichedItem>,
    cancel: CancellationToken,
    report: Arc<Mutex<CycleReport>>,
) {
    if !cancel.is_cancelled() {
        let outcomes = fetch::fetch_all(&rss_sources, config.fetch_concurrency, config.fetch_timeout).await;
        for outcome in outcomes {
            if cancel.is_cancelled() {
                break;
            }
            let Ok(payload) = outcome.result else { continue };
            let Ok(raw_items) = parse::parse_payload(&outcome.source, &payload) else { continue };
            for raw in raw_items {
                report.lock().unwrap().items_fetched += 1;
                match prepare_item(raw, &config, &cache, chain.as_slice()).await {
                    Some(item) => {
                        if tx.send(item).await.is_err() {
                            return;
                        }
                    }
                    None => report.lock().unwrap().items_early_rejected += 1,
                }
            }
        }
    }

    if cancel.is_cancelled() || scraper_sources.is_empty() {
        return;
    }

    let semaphore = Arc::new(Semaphore::new(config.fetch_concurrency.max(1)));
    let client = client::build_client(config.fetch_timeout);
    let timeout_secs = config.fetch_timeout.as_secs();

    let mut scraped = stream::iter(scraper_sources.into_iter().map(|source| {
        let semaphore = Arc::clone(&semaphore);
        let client = client.clone();
        async move {
            let _permit = semaphore.acquire_owned().await.ok()?;
            match parse::scrape::scrape_source(&source, &client, timeout_secs).await {
                Ok(items) => Some(items),
                Err(e) => {
                    warn!(source = %source.name, error = %e, "scrape failed");
                    None
                }
            }
        }
    }))
    .buffer_unordered(config.fetch_concurrency.max(1));

    while let Some(result) = scraped.next().await {
        if cancel.is_cancelled() {
            break;
        }
        let Some(raw_items) = result else { continue };
        for raw in raw_items {
            report.lock().unwrap().items_fetched += 1;
            match prepare_item(raw, &config, &cache, chain.as_slice()).await {
                Some(item) => {
                    if tx.send(item).await.is_err() {
                        return;
                    }
                }
                None => report.lock().unwrap().items_early_rejected += 1,
            }
        }
    }
}

async fn run_enrichment_stage(
    mut rx: mpsc::Receiver<EnrichedItem>,
    config: Arc<Config>,
    cache: Arc<NewsCache>,
    pool: PgPool,
    report: Arc<Mutex<CycleReport>>,
    cancel: CancellationToken,
) {
    let batch_size = config.batch_size.max(1);
    let flush = config.nlp_batch_flush;
    let mut batch: Vec<EnrichedItem> = Vec::with_capacity(batch_size);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                process_batch(std::mem::take(&mut batch), &config, &cache, &pool, &report).await;
                break;
            }
            maybe_item = rx.recv() => {
                match maybe_item {
                    Some(item) => {
                        batch.push(item);
                        if batch.len() >= batch_size {
                            process_batch(std::mem::take(&mut batch), &config, &cache, &pool, &report).await;
                        }
                    }
                    None => {
                        process_batch(std::mem::take(&mut batch), &config, &cache, &pool, &report).await;
                        break;
                    }
                }
            }
            _ = tokio::time::sleep(flush), if !batch.is_empty() => {
                process_batch(std::mem::take(&mut batch), &config, &cache, &pool, &report).await;
            }
        }
    }
}

async fn process_batch(
    batch: Vec<EnrichedItem>,
    config: &Config,
    cache: &NewsCache,
    pool: &PgPool,
    report: &Mutex<CycleReport>,
) {
    for mut item in batch {
        let nlp_outcome = nlp::enrich(&item.text_for_nlp, &item.detected_language, config, cache);
        item.sentiment_label = nlp_outcome.sentiment_label;
        item.sentiment_score = nlp_outcome.sentiment_score;
        item.sentiment_polarity = nlp_outcome.sentiment_polarity;
        item.original_sentiment_label = nlp_outcome.original_sentiment_label;
        item.original_sentiment_score = nlp_outcome.original_sentiment_score;
        item.adjustment_reason = nlp_outcome.adjustment_reason;
        item.topic_labels = nlp_outcome.topic_labels;
        item.entities = nlp_outcome.entities;

        let relevance_outcome = relevance::classify(&item.title_and_summary(), &item.detected_language);
        relevance::apply(&mut item, relevance_outcome);

        let categorize_outcome = categorize::classify(&item.title, &item.summary, &item.detected_language);
        categorize::apply(&mut item, categorize_outcome);

        region::apply(&mut item);

        let confidence_outcome = confidence::score(&item).unwrap_or_else(|e| {
            warn!(url = %item.url, error = %e, "confidence scoring failed, using fallback");
            confidence::fallback_outcome()
        });
        item.confidence_score = confidence_outcome.score;
        item.confidence_level = confidence_outcome.level;
        item.contributing_factors = confidence_outcome.contributing_factors;
        item.auto_approved = confidence_outcome.auto_approved;
        item.auto_rejected = confidence_outcome.auto_rejected;
        item.needs_verification = confidence_outcome.needs_verification;
        item.anomalies = confidence_outcome.anomalies;

        persist_and_alert(item, config, pool, report).await;
    }
}

async fn persist_and_alert(mut item: EnrichedItem, config: &Config, pool: &PgPool, report: &Mutex<CycleReport>) {
    match store::upsert(pool, &mut item).await {
        Ok(store::UpsertOutcome::Created(id)) => {
            report.lock().unwrap().stored_created += 1;
            let article = StoredArticle::from_enriched(&item, id, Utc::now());
            if alert::should_alert(&article, config) {
                dispatch_alert(pool.clone(), config.clone(), article, report);
            }
        }
        Ok(store::UpsertOutcome::Updated(_)) => {
            report.lock().unwrap().stored_updated += 1;
        }
        Ok(store::UpsertOutcome::Rejected) => {
            report.lock().unwrap().stored_rejected += 1;
        }
        Err(e) => {
            error!(url = %item.url, error = %e, "store upsert failed");
            report.lock().unwrap().store_errors += 1;
        }
    }
}

/// Spawns alert delivery fire-and-forget — SMTP I/O can block up to
/// `smtp_timeout` and must never hold up the next item's persistence.
fn dispatch_alert(pool: PgPool, config: Config, article: StoredArticle, report: &Mutex<CycleReport>) {
    report.lock().unwrap().alerts_dispatched += 1;
    tokio::spawn(async move {
        if let Err(e) = alert::dispatch(&pool, &config, &article).await {
            error!(article_id = %article.id, error = %e, "alert dispatch failed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceKind;

    fn raw_item(title: &str, summary: &str) -> RawItem {
        RawItem {
            url: "https://pib.gov.in/press/1".to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            content: String::new(),
            source_name: "pib.gov.in".to_string(),
            source_kind: SourceKind::Rss,
            declared_language: "en".to_string(),
            declared_region: None,
            published_at: Utc::now(),
        }
    }

    fn test_config() -> Config {
        unsafe {
            std::env::set_var("DATABASE_URL", "postgres://localhost/test");
        }
        let cfg = Config::load().unwrap();
        unsafe {
            std::env::remove_var("DATABASE_URL");
        }
        cfg
    }

    #[tokio::test]
    async fn prepare_item_drops_entertainment_news() {
        let config = test_config();
        let cache = NewsCache::in_process();
        let raw = raw_item("Bollywood actor praises new film release", "Box office numbers strong");
        let result = prepare_item(raw, &config, &cache, &[]).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn prepare_item_accepts_government_news() {
        let config = test_config();
        let cache = NewsCache::in_process();
        let raw = raw_item(
            "Ministry of Health launches Ayushman Bharat expansion",
            "Government announces coverage for 10 crore families",
        );
        let result = prepare_item(raw, &config, &cache, &[]).await;
        assert!(result.is_some());
        let item = result.unwrap();
        assert_eq!(item.detected_language, "en");
    }
}
