use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::source_config::SourceKind;

/// Produced by the Parser (C3). Invariants: `url` and `title` are non-empty;
/// `published_at` is never `None` downstream — callers fall back to ingest
/// time when a feed doesn't declare one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawItem {
    pub url: String,
    pub title: String,
    pub summary: String,
    /// May be empty for RSS entries that don't carry full body text.
    pub content: String,
    pub source_name: String,
    pub source_kind: SourceKind,
    pub declared_language: String,
    pub declared_region: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl RawItem {
    pub fn is_valid(&self) -> bool {
        !self.url.trim().is_empty() && !self.title.trim().is_empty()
    }
}
