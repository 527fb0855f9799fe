//! C7 — NLP Enricher.
//!
//! Batched sentiment classification (model routed by language) followed
//! unconditionally by the rule-based adjuster, then optional topic and
//! entity extraction. The batching mechanics (queue, flush timer) live in
//! [`crate::pipeline`]; this module is the per-item enrichment step the
//! batcher calls once per accumulated batch.

pub mod adjuster;
pub mod entities;
pub mod sentiment;
pub mod topics;

use crate::cache::NewsCache;
use crate::config::Config;
use crate::model::SentimentLabel;

pub struct NlpOutcome {
    pub sentiment_label: SentimentLabel,
    pub sentiment_score: f64,
    pub sentiment_polarity: f64,
    pub original_sentiment_label: Option<SentimentLabel>,
    pub original_sentiment_score: Option<f64>,
    pub adjustment_reason: Option<String>,
    pub topic_labels: Vec<String>,
    pub entities: Vec<crate::model::Entity>,
}

fn polarity_of(label: SentimentLabel, score: f64) -> f64 {
    match label {
        SentimentLabel::Positive => score,
        SentimentLabel::Negative => -score,
        SentimentLabel::Neutral => 0.0,
    }
}

/// Runs the full §4.7 pipeline for one item's `text_for_nlp`. Checks the
/// result cache first (sentiment key); only a miss invokes the routed
/// classifier. The rule-based adjuster always runs afterward when
/// `rule_based_adjuster_enabled`.
pub fn enrich(text: &str, language: &str, config: &Config, cache: &NewsCache) -> NlpOutcome {
    let raw = if let Some(cached) = cache.get_sentiment(text) {
        parse_cached_sentiment(&cached)
    } else {
        let classifier = sentiment::route(language);
        let result = classifier
            .classify(text)
            .unwrap_or(sentiment::RawSentiment { label: SentimentLabel::Neutral, score: 0.5 });
        cache.set_sentiment(text, format!("{}:{}", result.label, result.score));
        result
    };

    let (label, score, original_label, original_score, reason) = if config.rule_based_adjuster_enabled {
        let adjusted = adjuster::adjust(text, raw.label, raw.score, config.sentiment_boost_threshold);
        (
            adjusted.label,
            adjusted.score,
            Some(adjusted.original_label),
            Some(adjusted.original_score),
            Some(adjusted.reason),
        )
    } else {
        (raw.label, raw.score, None, None, None)
    };

    let polarity = polarity_of(label, score);

    let topic_labels = if config.nlp_enabled {
        topics::classify_topics(text)
    } else {
        Vec::new()
    };

    let entities = if config.nlp_enabled {
        entities::extract_entities(text, Some(language))
    } else {
        Vec::new()
    };

    NlpOutcome {
        sentiment_label: label,
        sentiment_score: score,
        sentiment_polarity: polarity,
        original_sentiment_label: original_label,
        original_sentiment_score: original_score,
        adjustment_reason: reason,
        topic_labels,
        entities,
    }
}

fn parse_cached_sentiment(cached: &str) -> sentiment::RawSentiment {
    let mut parts = cached.splitn(2, ':');
    let label = match parts.next() {
        Some("positive") => SentimentLabel::Positive,
        Some("negative") => SentimentLabel::Negative,
        _ => SentimentLabel::Neutral,
    };
    let score = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0.5);
    sentiment::RawSentiment { label, score }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn test_config() -> Config {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::set_var("DATABASE_URL", "postgres://localhost/test");
        }
        let cfg = Config::load().unwrap();
        unsafe {
            env::remove_var("DATABASE_URL");
        }
        cfg
    }

    #[test]
    fn polarity_matches_label_sign() {
        assert_eq!(polarity_of(SentimentLabel::Positive, 0.8), 0.8);
        assert_eq!(polarity_of(SentimentLabel::Negative, 0.8), -0.8);
        assert_eq!(polarity_of(SentimentLabel::Neutral, 0.8), 0.0);
    }

    #[test]
    fn enrich_produces_bounded_score() {
        let config = test_config();
        let cache = NewsCache::in_process();
        let outcome = enrich("Major achievement: government scheme launch", "en", &config, &cache);
        assert!(outcome.sentiment_score >= 0.0 && outcome.sentiment_score <= 1.0);
    }

    #[test]
    fn enrich_caches_raw_sentiment() {
        let config = test_config();
        let cache = NewsCache::in_process();
        let _ = enrich("Severe crisis unfolding nationwide", "en", &config, &cache);
        assert!(cache.get_sentiment("Severe crisis unfolding nationwide").is_some());
    }
}
