//! C3 — Parser.
//!
//! Converts a fetched payload into zero or more [`RawItem`]s. RSS/Atom
//! sources go through [`feed`]; scraped sources go through [`scrape`], which
//! re-fetches each candidate article page itself (the landing-page payload
//! alone isn't the article).

pub mod feed;
pub mod scrape;

use crate::error::ParseError;
use crate::model::{RawItem, SourceConfig, SourceKind};

/// Parses a feed payload already fetched for `source`. Only meaningful for
/// [`SourceKind::Rss`] — scraped sources are parsed via [`scrape::scrape_source`]
/// instead, since scraping needs to issue its own follow-up requests.
pub fn parse_payload(source: &SourceConfig, payload: &str) -> Result<Vec<RawItem>, ParseError> {
    match source.kind {
        SourceKind::Rss => feed::parse_feed(source, payload),
        SourceKind::Scraper => Ok(Vec::new()),
    }
}
