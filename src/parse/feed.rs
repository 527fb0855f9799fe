//! RSS/Atom parsing via `feed-rs`. One feed payload in, zero or more
//! `RawItem`s out — a malformed entry is skipped, never the whole feed.

use chrono::Utc;

use crate::error::ParseError;
use crate::model::{RawItem, SourceConfig};

/// Parses an RSS/Atom payload into `RawItem`s attributed to `source`.
/// Entries missing both `title` and a usable link are skipped.
pub fn parse_feed(source: &SourceConfig, payload: &str) -> Result<Vec<RawItem>, ParseError> {
    let feed = feed_rs::parser::parse(payload.as_bytes())
        .map_err(|e| ParseError::Feed(e.to_string()))?;

    let items = feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let url = entry.links.first().map(|l| l.href.clone())?;
            let title = entry.title.map(|t| t.content).unwrap_or_default();
            if title.trim().is_empty() {
                return None;
            }
            let summary = entry.summary.map(|s| s.content).unwrap_or_default();
            let content = entry
                .content
                .and_then(|c| c.body)
                .unwrap_or_else(|| summary.clone());
            let published_at = entry.published.or(entry.updated).unwrap_or_else(Utc::now);

            Some(RawItem {
                url,
                title,
                summary,
                content,
                source_name: source.name.clone(),
                source_kind: source.kind,
                declared_language: source.language.clone(),
                declared_region: source.region.clone(),
                published_at,
            })
        })
        .collect();

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceKind;

    fn source() -> SourceConfig {
        SourceConfig {
            name: "PIB".to_string(),
            url: "https://pib.gov.in/rss.xml".to_string(),
            kind: SourceKind::Rss,
            language: "en".to_string(),
            script: None,
            region: None,
        }
    }

    const SAMPLE_RSS: &str = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>PIB Releases</title>
    <item>
      <title>Ministry launches new scheme</title>
      <link>https://pib.gov.in/press/123</link>
      <description>A new government scheme was announced today.</description>
      <pubDate>Mon, 01 Jan 2024 10:00:00 GMT</pubDate>
    </item>
    <item>
      <link>https://pib.gov.in/press/124</link>
      <description>No title here</description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_well_formed_items() {
        let items = parse_feed(&source(), SAMPLE_RSS).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Ministry launches new scheme");
        assert_eq!(items[0].url, "https://pib.gov.in/press/123");
    }

    #[test]
    fn malformed_payload_is_parse_error() {
        let result = parse_feed(&source(), "not xml at all");
        assert!(result.is_err());
    }

    #[test]
    fn empty_feed_yields_empty_items() {
        let empty = r#"<?xml version="1.0"?><rss version="2.0"><channel><title>Empty</title></channel></rss>"#;
        let items = parse_feed(&source(), empty).unwrap();
        assert!(items.is_empty());
    }
}
