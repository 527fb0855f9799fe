//! C12 — Deduplicator & Store.
//!
//! Computes the stable content hash, applies the §4.11 acceptance rule, and
//! upserts accepted items by `(url OR hash)`. `collected_at` is preserved on
//! update; every other mutable enrichment field is overwritten.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::confidence;
use crate::error::StorageError;
use crate::model::{ContentCategory, EnrichedItem, SentimentLabel, SourceKind, StoredArticle};

/// Computes `H = SHA-256(url | title | iso(published_at_or_empty))`.
pub fn compute_hash(url: &str, title: &str, published_at: Option<DateTime<Utc>>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hasher.update(b"|");
    hasher.update(title.as_bytes());
    hasher.update(b"|");
    hasher.update(published_at.map(|d| d.to_rfc3339()).unwrap_or_default().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Runs the §4.11 acceptance rule over a fully-scored item.
pub fn is_acceptable(item: &EnrichedItem) -> bool {
    let trusted = confidence::is_trusted_source(&item.url);
    let has_schemes = item.has_schemes();
    let has_ministries = item.has_ministries();

    if trusted && (has_schemes || has_ministries) {
        return true;
    }

    let general_rule = item.content_category == ContentCategory::Government
        && item.should_show_pib
        && (item.relevance_score >= 0.4 || item.confidence_score >= 0.7 || has_schemes || has_ministries);
    if general_rule {
        return true;
    }

    // Regional-language exception: non-English items get a looser bar, since
    // translation/NLP confidence is weaker off the English-tuned paths.
    if item.detected_language != "en" {
        return item.content_category == ContentCategory::Government || item.should_show_pib || item.is_goi;
    }

    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new row was inserted.
    Created(Uuid),
    /// An existing row (matched by url or hash) was refreshed in place.
    Updated(Uuid),
    /// The item failed the §4.11 acceptance rule and was not persisted.
    Rejected,
}

/// Upserts `item` if it passes [`is_acceptable`]. `item.hash` is recomputed
/// here regardless of what the caller set, since it's this stage's
/// responsibility per §4.11.
pub async fn upsert(pool: &PgPool, item: &mut EnrichedItem) -> Result<UpsertOutcome, StorageError> {
    item.hash = compute_hash(&item.url, &item.title, Some(item.published_at));

    if !is_acceptable(item) {
        return Ok(UpsertOutcome::Rejected);
    }

    let existing = sqlx::query(
        "SELECT id, collected_at FROM articles WHERE url = $1 OR hash = $2 ORDER BY collected_at ASC LIMIT 1",
    )
    .bind(&item.url)
    .bind(&item.hash)
    .fetch_optional(pool)
    .await?;

    match existing {
        Some(row) => {
            let id: Uuid = row.try_get("id")?;
            let collected_at: DateTime<Utc> = row.try_get("collected_at")?;
            let article = StoredArticle::from_enriched(item, id, collected_at);
            update_article(pool, &article).await?;
            Ok(UpsertOutcome::Updated(id))
        }
        None => {
            let id = Uuid::new_v4();
            let article = StoredArticle::from_enriched(item, id, Utc::now());
            insert_article(pool, &article).await?;
            Ok(UpsertOutcome::Created(id))
        }
    }
}

async fn insert_article(pool: &PgPool, a: &StoredArticle) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        INSERT INTO articles (
            id, url, title, summary, content, source, source_type, region, language,
            detected_language, detected_script, language_confidence, translated_title,
            translated_summary, published_at, collected_at, sentiment_label, sentiment_score,
            sentiment_polarity, topic_labels, entities, hash, is_goi, relevance_score,
            goi_ministries, goi_schemes, goi_entities, goi_matched_terms, content_category,
            content_sub_category, classification_confidence, classification_keywords,
            should_show_pib, filter_reason
        ) VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18,
            $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29, $30, $31, $32, $33, $34
        )
        "#,
    )
    .bind(a.id)
    .bind(&a.url)
    .bind(&a.title)
    .bind(&a.summary)
    .bind(&a.content)
    .bind(&a.source)
    .bind(source_kind_str(a.source_type))
    .bind(&a.region)
    .bind(&a.language)
    .bind(&a.detected_language)
    .bind(&a.detected_script)
    .bind(a.language_confidence)
    .bind(&a.translated_title)
    .bind(&a.translated_summary)
    .bind(a.published_at)
    .bind(a.collected_at)
    .bind(sentiment_label_str(a.sentiment_label))
    .bind(a.sentiment_score)
    .bind(a.sentiment_polarity)
    .bind(&a.topic_labels)
    .bind(sqlx::types::Json(&a.entities))
    .bind(&a.hash)
    .bind(a.is_goi)
    .bind(a.relevance_score)
    .bind(&a.goi_ministries)
    .bind(&a.goi_schemes)
    .bind(sqlx::types::Json(&a.goi_entities))
    .bind(&a.goi_matched_terms)
    .bind(content_category_str(a.content_category))
    .bind(&a.content_sub_category)
    .bind(a.classification_confidence)
    .bind(&a.classification_keywords)
    .bind(a.should_show_pib)
    .bind(&a.filter_reason)
    .execute(pool)
    .await?;
    Ok(())
}

async fn update_article(pool: &PgPool, a: &StoredArticle) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        UPDATE articles SET
            url = $2, title = $3, summary = $4, content = $5, source = $6, source_type = $7,
            region = $8, language = $9, detected_language = $10, detected_script = $11,
            language_confidence = $12, translated_title = $13, translated_summary = $14,
            published_at = $15, sentiment_label = $16, sentiment_score = $17,
            sentiment_polarity = $18, topic_labels = $19, entities = $20, hash = $21,
            is_goi = $22, relevance_score = $23, goi_ministries = $24, goi_schemes = $25,
            goi_entities = $26, goi_matched_terms = $27, content_category = $28,
            content_sub_category = $29, classification_confidence = $30,
            classification_keywords = $31, should_show_pib = $32, filter_reason = $33
        WHERE id = $1
        "#,
    )
    .bind(a.id)
    .bind(&a.url)
    .bind(&a.title)
    .bind(&a.summary)
    .bind(&a.content)
    .bind(&a.source)
    .bind(source_kind_str(a.source_type))
    .bind(&a.region)
    .bind(&a.language)
    .bind(&a.detected_language)
    .bind(&a.detected_script)
    .bind(a.language_confidence)
    .bind(&a.translated_title)
    .bind(&a.translated_summary)
    .bind(a.published_at)
    .bind(sentiment_label_str(a.sentiment_label))
    .bind(a.sentiment_score)
    .bind(a.sentiment_polarity)
    .bind(&a.topic_labels)
    .bind(sqlx::types::Json(&a.entities))
    .bind(&a.hash)
    .bind(a.is_goi)
    .bind(a.relevance_score)
    .bind(&a.goi_ministries)
    .bind(&a.goi_schemes)
    .bind(sqlx::types::Json(&a.goi_entities))
    .bind(&a.goi_matched_terms)
    .bind(content_category_str(a.content_category))
    .bind(&a.content_sub_category)
    .bind(a.classification_confidence)
    .bind(&a.classification_keywords)
    .bind(a.should_show_pib)
    .bind(&a.filter_reason)
    .execute(pool)
    .await?;
    Ok(())
}

fn source_kind_str(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Rss => "rss",
        SourceKind::Scraper => "scraper",
    }
}

fn sentiment_label_str(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "positive",
        SentimentLabel::Neutral => "neutral",
        SentimentLabel::Negative => "negative",
    }
}

fn content_category_str(category: ContentCategory) -> &'static str {
    match category {
        ContentCategory::Government => "Government",
        ContentCategory::Political => "Political",
        ContentCategory::Entertainment => "Entertainment",
        ContentCategory::Sports => "Sports",
        ContentCategory::Crime => "Crime",
        ContentCategory::Business => "Business",
        ContentCategory::International => "International",
        ContentCategory::Other => "Other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawItem;

    fn make_test_item(url: &str, trusted: bool, schemes: Vec<String>) -> EnrichedItem {
        let raw = RawItem {
            url: url.to_string(),
            title: "Ministry announces new policy".to_string(),
            summary: "Details of the policy".to_string(),
            content: String::new(),
            source_name: if trusted { "pib.gov.in".to_string() } else { "example.com".to_string() },
            source_kind: SourceKind::Rss,
            declared_language: "en".to_string(),
            declared_region: None,
            published_at: Utc::now(),
        };
        let mut item = EnrichedItem::from_raw(raw);
        item.url = if trusted { "https://pib.gov.in/press/1".to_string() } else { url.to_string() };
        item.goi_schemes = schemes;
        item
    }

    #[test]
    fn hash_is_deterministic() {
        let h1 = compute_hash("https://x.com/a", "Title", None);
        let h2 = compute_hash("https://x.com/a", "Title", None);
        assert_eq!(h1, h2);
    }

    #[test]
    fn hash_differs_on_title_change() {
        let h1 = compute_hash("https://x.com/a", "Title One", None);
        let h2 = compute_hash("https://x.com/a", "Title Two", None);
        assert_ne!(h1, h2);
    }

    #[test]
    fn trusted_source_with_scheme_is_acceptable() {
        let item = make_test_item("https://example.com/a", true, vec!["Ayushman Bharat".to_string()]);
        assert!(is_acceptable(&item));
    }

    #[test]
    fn untrusted_non_government_is_rejected() {
        let item = make_test_item("https://example.com/a", false, vec![]);
        assert!(!is_acceptable(&item));
    }

    #[test]
    fn government_category_with_relevance_is_acceptable() {
        let mut item = make_test_item("https://example.com/a", false, vec![]);
        item.content_category = ContentCategory::Government;
        item.should_show_pib = true;
        item.relevance_score = 0.5;
        assert!(is_acceptable(&item));
    }

    #[test]
    fn government_category_without_signal_is_rejected() {
        let mut item = make_test_item("https://example.com/a", false, vec![]);
        item.content_category = ContentCategory::Government;
        item.should_show_pib = true;
        item.relevance_score = 0.1;
        item.confidence_score = 0.2;
        assert!(!is_acceptable(&item));
    }
}
