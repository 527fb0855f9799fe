//! C1 — Source Registry.
//!
//! Loads the two configured source lists (RSS feeds, scraped sites) from the
//! YAML files named by `FEEDS_FILE` / `SCRAPING_SOURCES_FILE`. A missing file
//! at startup is a [`ConfigError`] (fatal); a malformed file after that is
//! logged and treated as an empty list — `reload()` must never crash a
//! caller holding a stale registry.

use std::path::Path;
use std::sync::{Arc, RwLock};

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;
use crate::model::{SourceConfig, SourceEntry, SourceKind};

#[derive(Debug, Deserialize, Default)]
struct FeedsFile {
    #[serde(default)]
    feeds: Vec<SourceEntry>,
}

#[derive(Debug, Deserialize, Default)]
struct ScrapingSourcesFile {
    #[serde(default)]
    sources: Vec<SourceEntry>,
}

/// Holds the current source list behind a lock so `reload()` can atomically
/// publish a fresh snapshot without readers ever observing a torn list.
pub struct SourceRegistry {
    feeds_path: std::path::PathBuf,
    scraping_path: std::path::PathBuf,
    sources: RwLock<Arc<Vec<SourceConfig>>>,
}

impl SourceRegistry {
    /// Loads both lists at startup. Fails with `ConfigError` if either file
    /// is missing; a malformed (but present) file degrades to an empty list
    /// for that file and is logged, not propagated.
    pub fn load(feeds_path: &Path, scraping_path: &Path) -> Result<Self, ConfigError> {
        let feeds = read_required_file(feeds_path)?;
        let scraping = read_required_file(scraping_path)?;

        let feed_entries = parse_or_empty::<FeedsFile>(&feeds, feeds_path)
            .map(|f| f.feeds)
            .unwrap_or_default();
        let scraping_entries = parse_or_empty::<ScrapingSourcesFile>(&scraping, scraping_path)
            .map(|f| f.sources)
            .unwrap_or_default();

        let sources = merge(feed_entries, scraping_entries);

        Ok(SourceRegistry {
            feeds_path: feeds_path.to_path_buf(),
            scraping_path: scraping_path.to_path_buf(),
            sources: RwLock::new(Arc::new(sources)),
        })
    }

    /// Returns a cheap snapshot of the current source list.
    pub fn sources(&self) -> Arc<Vec<SourceConfig>> {
        self.sources.read().unwrap().clone()
    }

    /// Re-reads both files from disk and atomically swaps the in-memory
    /// list. A read failure or malformed file at reload time is logged and
    /// that half of the list is left unchanged rather than emptied, so a
    /// transient filesystem hiccup doesn't wipe out a working registry.
    pub fn reload(&self) {
        let feed_entries = match std::fs::read_to_string(&self.feeds_path) {
            Ok(text) => parse_or_empty::<FeedsFile>(&text, &self.feeds_path).map(|f| f.feeds),
            Err(e) => {
                warn!(path = %self.feeds_path.display(), error = %e, "reload: could not read feeds file");
                None
            }
        };
        let scraping_entries = match std::fs::read_to_string(&self.scraping_path) {
            Ok(text) => {
                parse_or_empty::<ScrapingSourcesFile>(&text, &self.scraping_path).map(|f| f.sources)
            }
            Err(e) => {
                warn!(path = %self.scraping_path.display(), error = %e, "reload: could not read scraping sources file");
                None
            }
        };

        let current = self.sources();
        let (old_feeds, old_scraping) = split_by_kind(&current);

        let merged = merge(
            feed_entries.unwrap_or(old_feeds),
            scraping_entries.unwrap_or(old_scraping),
        );

        *self.sources.write().unwrap() = Arc::new(merged);
    }
}

fn read_required_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::SourceFile {
        path: path.display().to_string(),
        source,
    })
}

fn parse_or_empty<T: for<'de> Deserialize<'de> + Default>(text: &str, path: &Path) -> Option<T> {
    match serde_yaml::from_str::<T>(text) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed source list, treating as empty");
            None
        }
    }
}

fn merge(feeds: Vec<SourceEntry>, scraping: Vec<SourceEntry>) -> Vec<SourceConfig> {
    let mut sources: Vec<SourceConfig> = feeds
        .into_iter()
        .map(|e| SourceConfig::from_entry(e, SourceKind::Rss))
        .collect();
    sources.extend(
        scraping
            .into_iter()
            .map(|e| SourceConfig::from_entry(e, SourceKind::Scraper)),
    );
    sources
}

fn split_by_kind(sources: &[SourceConfig]) -> (Vec<SourceEntry>, Vec<SourceEntry>) {
    let to_entry = |s: &SourceConfig| SourceEntry {
        name: s.name.clone(),
        url: s.url.clone(),
        language: s.language.clone(),
        script: s.script.clone(),
        region: s.region.clone(),
    };
    let feeds = sources
        .iter()
        .filter(|s| s.kind == SourceKind::Rss)
        .map(to_entry)
        .collect();
    let scraping = sources
        .iter()
        .filter(|s| s.kind == SourceKind::Scraper)
        .map(to_entry)
        .collect();
    (feeds, scraping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_feeds_and_scraping_sources() {
        let feeds = write_temp(
            "feeds:\n  - name: PIB\n    url: https://pib.gov.in/rss.xml\n    language: en\n",
        );
        let scraping = write_temp(
            "sources:\n  - name: Some Site\n    url: https://example.com\n    language: hi\n",
        );
        let registry = SourceRegistry::load(feeds.path(), scraping.path()).unwrap();
        let sources = registry.sources();
        assert_eq!(sources.len(), 2);
        assert!(sources.iter().any(|s| s.kind == SourceKind::Rss));
        assert!(sources.iter().any(|s| s.kind == SourceKind::Scraper));
    }

    #[test]
    fn missing_file_is_config_error() {
        let missing = std::path::PathBuf::from("/nonexistent/feeds.yaml");
        let scraping = write_temp("sources: []\n");
        let result = SourceRegistry::load(&missing, scraping.path());
        assert!(matches!(result, Err(ConfigError::SourceFile { .. })));
    }

    #[test]
    fn malformed_file_degrades_to_empty_list() {
        let feeds = write_temp("not: [valid, yaml, {structure");
        let scraping = write_temp("sources: []\n");
        let registry = SourceRegistry::load(feeds.path(), scraping.path()).unwrap();
        assert_eq!(registry.sources().len(), 0);
    }

    #[test]
    fn reload_picks_up_changes() {
        let mut feeds = write_temp("feeds: []\n");
        let scraping = write_temp("sources: []\n");
        let registry = SourceRegistry::load(feeds.path(), scraping.path()).unwrap();
        assert_eq!(registry.sources().len(), 0);

        feeds
            .as_file_mut()
            .set_len(0)
            .unwrap();
        use std::io::Seek;
        feeds.as_file_mut().seek(std::io::SeekFrom::Start(0)).unwrap();
        feeds
            .write_all(b"feeds:\n  - name: PIB\n    url: https://pib.gov.in/rss.xml\n    language: en\n")
            .unwrap();
        feeds.flush().unwrap();

        registry.reload();
        assert_eq!(registry.sources().len(), 1);
    }
}
