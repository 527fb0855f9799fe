use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enriched_item::{ConfidenceLevel, ContentCategory, Entity, EnrichedItem, SentimentLabel};
use super::source_config::SourceKind;

/// The persisted shape of an article. `hash` is UNIQUE; `url` is indexed but
/// not unique (a source may legitimately republish under the same URL with a
/// different title/date, which hashes differently).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredArticle {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub source: String,
    pub source_type: SourceKind,
    pub region: Option<String>,
    pub language: String,
    pub detected_language: String,
    pub detected_script: String,
    pub language_confidence: f64,
    pub translated_title: Option<String>,
    pub translated_summary: Option<String>,
    pub published_at: DateTime<Utc>,
    pub collected_at: DateTime<Utc>,
    pub sentiment_label: SentimentLabel,
    pub sentiment_score: f64,
    pub sentiment_polarity: f64,
    pub topic_labels: Vec<String>,
    pub entities: Vec<Entity>,
    pub hash: String,
    pub is_goi: bool,
    pub relevance_score: f64,
    pub goi_ministries: Vec<String>,
    pub goi_schemes: Vec<String>,
    pub goi_entities: Vec<String>,
    pub goi_matched_terms: Vec<String>,
    pub content_category: ContentCategory,
    pub content_sub_category: String,
    pub classification_confidence: f64,
    pub classification_keywords: Vec<String>,
    pub should_show_pib: bool,
    pub filter_reason: Option<String>,
}

impl StoredArticle {
    /// Builds the persisted shape from an accepted `EnrichedItem`. Transient
    /// confidence-scoring fields (`confidence_score`, `confidence_level`,
    /// `contributing_factors`, routing booleans, `anomalies`) are not part of
    /// the persisted schema and are stripped here, per §4.11.
    pub fn from_enriched(item: &EnrichedItem, id: Uuid, collected_at: DateTime<Utc>) -> Self {
        StoredArticle {
            id,
            url: item.url.clone(),
            title: item.title.clone(),
            summary: item.summary.clone(),
            content: item.content.clone(),
            source: item.source_name.clone(),
            source_type: item.source_kind,
            region: item.region.clone(),
            language: item.declared_language.clone(),
            detected_language: item.detected_language.clone(),
            detected_script: item.detected_script.clone(),
            language_confidence: item.language_confidence,
            translated_title: item.translated_title.clone(),
            translated_summary: item.translated_summary.clone(),
            published_at: item.published_at,
            collected_at,
            sentiment_label: item.sentiment_label,
            sentiment_score: item.sentiment_score,
            sentiment_polarity: item.sentiment_polarity,
            topic_labels: item.topic_labels.clone(),
            entities: item.entities.clone(),
            hash: item.hash.clone(),
            is_goi: item.is_goi,
            relevance_score: item.relevance_score,
            goi_ministries: item.goi_ministries.clone(),
            goi_schemes: item.goi_schemes.clone(),
            goi_entities: item.goi_entities.clone(),
            goi_matched_terms: item.goi_matched_terms.clone(),
            content_category: item.content_category,
            content_sub_category: item.content_sub_category.clone(),
            classification_confidence: item.classification_confidence,
            classification_keywords: item.classification_keywords.clone(),
            should_show_pib: item.should_show_pib,
            filter_reason: item.filter_reason.clone(),
        }
    }
}
