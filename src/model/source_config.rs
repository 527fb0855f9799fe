use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Rss,
    Scraper,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Rss => write!(f, "rss"),
            SourceKind::Scraper => write!(f, "scraper"),
        }
    }
}

/// Raw shape of one entry in `feeds:` / `sources:` — `kind` is implied by
/// which top-level list the entry came from, so it isn't encoded in YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceEntry {
    pub name: String,
    pub url: String,
    pub language: String,
    pub script: Option<String>,
    pub region: Option<String>,
}

/// A configured ingestion source with its kind resolved. This is the shape
/// every downstream component (fetcher, parser, confidence scorer) consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    pub url: String,
    pub kind: SourceKind,
    pub language: String,
    pub script: Option<String>,
    pub region: Option<String>,
}

impl SourceConfig {
    pub fn from_entry(entry: SourceEntry, kind: SourceKind) -> Self {
        SourceConfig {
            name: entry.name,
            url: entry.url,
            kind,
            language: entry.language,
            script: entry.script,
            region: entry.region,
        }
    }

    pub fn is_trusted(&self) -> bool {
        crate::confidence::is_trusted_source(&self.url)
    }
}
