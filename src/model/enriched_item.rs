use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::raw_item::RawItem;
use super::source_config::SourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ContentCategory {
    Government,
    Political,
    Entertainment,
    Sports,
    Crime,
    Business,
    International,
    Other,
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ContentCategory::Government => "Government",
            ContentCategory::Political => "Political",
            ContentCategory::Entertainment => "Entertainment",
            ContentCategory::Sports => "Sports",
            ContentCategory::Crime => "Crime",
            ContentCategory::Business => "Business",
            ContentCategory::International => "International",
            ContentCategory::Other => "Other",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
    pub confidence: f64,
    #[serde(rename = "type")]
    pub entity_type: String,
}

/// The accumulating record passed through every pipeline stage. A superset
/// of [`RawItem`] — each stage reads what it needs and writes its own fields,
/// never mutating an earlier stage's output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedItem {
    // RawItem fields
    pub url: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub source_name: String,
    pub source_kind: SourceKind,
    pub declared_language: String,
    pub declared_region: Option<String>,
    pub published_at: DateTime<Utc>,

    // C4 Language Detector
    pub detected_language: String,
    pub detected_script: String,
    pub language_confidence: f64,

    // C5 Translator
    pub translated_title: Option<String>,
    pub translated_summary: Option<String>,
    pub text_for_nlp: String,

    // C7 NLP Enricher
    pub sentiment_label: SentimentLabel,
    pub sentiment_score: f64,
    pub sentiment_polarity: f64,
    pub original_sentiment_label: Option<SentimentLabel>,
    pub original_sentiment_score: Option<f64>,
    pub adjustment_reason: Option<String>,
    pub topic_labels: Vec<String>,
    pub entities: Vec<Entity>,

    // C8 Relevance Classifier
    pub goi_ministries: Vec<String>,
    pub goi_schemes: Vec<String>,
    pub goi_matched_terms: Vec<String>,
    pub goi_entities: Vec<String>,
    pub relevance_score: f64,
    pub is_goi: bool,

    // C9 Content Categorizer
    pub content_category: ContentCategory,
    pub content_sub_category: String,
    pub classification_confidence: f64,
    pub classification_keywords: Vec<String>,
    pub should_show_pib: bool,
    pub filter_reason: Option<String>,

    // C10 Region Classifier
    pub region: Option<String>,

    // C11 Confidence Scorer
    pub confidence_score: f64,
    pub confidence_level: ConfidenceLevel,
    pub contributing_factors: Vec<String>,
    pub auto_approved: bool,
    pub auto_rejected: bool,
    pub needs_verification: bool,
    pub anomalies: Option<Vec<String>>,

    // C12 Deduplicator
    pub hash: String,
}

impl EnrichedItem {
    /// Seeds an `EnrichedItem` from a freshly-parsed `RawItem`. Every field a
    /// later stage owns is initialized to the "nothing has happened yet"
    /// value so a partially-processed item (one dropped mid-pipeline) is
    /// still a well-formed value for logging.
    pub fn from_raw(raw: RawItem) -> Self {
        EnrichedItem {
            url: raw.url,
            title: raw.title,
            summary: raw.summary,
            content: raw.content,
            source_name: raw.source_name,
            source_kind: raw.source_kind,
            declared_language: raw.declared_language,
            declared_region: raw.declared_region,
            published_at: raw.published_at,

            detected_language: "unknown".to_string(),
            detected_script: "unknown".to_string(),
            language_confidence: 0.0,

            translated_title: None,
            translated_summary: None,
            text_for_nlp: String::new(),

            sentiment_label: SentimentLabel::Neutral,
            sentiment_score: 0.0,
            sentiment_polarity: 0.0,
            original_sentiment_label: None,
            original_sentiment_score: None,
            adjustment_reason: None,
            topic_labels: Vec::new(),
            entities: Vec::new(),

            goi_ministries: Vec::new(),
            goi_schemes: Vec::new(),
            goi_matched_terms: Vec::new(),
            goi_entities: Vec::new(),
            relevance_score: 0.0,
            is_goi: false,

            content_category: ContentCategory::Other,
            content_sub_category: String::new(),
            classification_confidence: 0.0,
            classification_keywords: Vec::new(),
            should_show_pib: false,
            filter_reason: None,

            region: None,

            confidence_score: 0.0,
            confidence_level: ConfidenceLevel::Low,
            contributing_factors: Vec::new(),
            auto_approved: false,
            auto_rejected: false,
            needs_verification: false,
            anomalies: None,

            hash: String::new(),
        }
    }

    pub fn title_and_summary(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }

    pub fn has_schemes(&self) -> bool {
        !self.goi_schemes.is_empty()
    }

    pub fn has_ministries(&self) -> bool {
        !self.goi_ministries.is_empty()
    }
}
