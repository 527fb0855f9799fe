//! Scraped-source article discovery. Extracts candidate article links from
//! a source's landing page by same-host + URL-shape heuristics, then probes
//! each candidate page for a plausible article body.

use reqwest::Url;
use scraper::{Html, Selector};

use crate::error::{FetchError, ParseError};
use crate::fetch::client;
use crate::model::{RawItem, SourceConfig};

const MAX_CANDIDATES: usize = 10;
const MAX_ACCEPTED: usize = 3;
const MIN_TITLE_LEN: usize = 10;
const MIN_TEXT_LEN: usize = 100;

const ARTICLE_PATH_MARKERS: &[&str] = &["/news/", "/article/", "/story/", "/posts/"];
const NON_ARTICLE_MARKERS: &[&str] = &[
    "/login", "/signin", "/signup", "/search", "/tag/", "/tags/", "/category/",
    "/categories/", "mailto:", "/about", "/contact", "/privacy", "/terms", "#",
];

fn looks_like_year(segment: &str) -> bool {
    segment.len() == 4 && segment.chars().all(|c| c.is_ascii_digit()) && segment.starts_with("20")
}

fn is_non_article(path: &str) -> bool {
    let lower = path.to_lowercase();
    NON_ARTICLE_MARKERS.iter().any(|m| lower.contains(m))
}

fn looks_like_article(url: &Url) -> bool {
    let path = url.path().to_lowercase();
    if is_non_article(&path) {
        return false;
    }
    if ARTICLE_PATH_MARKERS.iter().any(|m| path.contains(m)) {
        return true;
    }
    path.split('/').any(looks_like_year)
}

/// Extracts up to [`MAX_CANDIDATES`] same-host article-shaped links from a
/// landing page's HTML, relative to `base_url`.
pub fn extract_candidate_links(base_url: &str, html: &str) -> Vec<String> {
    let Ok(base) = Url::parse(base_url) else { return Vec::new() };
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("a[href]") else { return Vec::new() };

    let mut seen = std::collections::HashSet::new();
    let mut candidates = Vec::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else { continue };
        let Ok(resolved) = base.join(href) else { continue };

        if resolved.host_str() != base.host_str() {
            continue;
        }
        if !looks_like_article(&resolved) {
            continue;
        }

        let normalized = resolved.to_string();
        if seen.insert(normalized.clone()) {
            candidates.push(normalized);
        }
        if candidates.len() >= MAX_CANDIDATES {
            break;
        }
    }

    candidates
}

/// Extracts a title and body text from a candidate article page's HTML.
fn extract_article(html: &str) -> Result<(String, String), ParseError> {
    let document = Html::parse_document(html);

    let title = Selector::parse("h1")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
        .filter(|t| !t.is_empty())
        .or_else(|| {
            Selector::parse("title")
                .ok()
                .and_then(|sel| document.select(&sel).next())
                .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
        })
        .unwrap_or_default();

    let text = Selector::parse("article, p")
        .ok()
        .map(|sel| {
            document
                .select(&sel)
                .map(|el| el.text().collect::<Vec<_>>().join(" "))
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string()
        })
        .unwrap_or_default();

    if title.len() < MIN_TITLE_LEN {
        return Err(ParseError::RejectedCandidate { url: String::new(), reason: "title too short" });
    }
    if text.len() < MIN_TEXT_LEN {
        return Err(ParseError::RejectedCandidate { url: String::new(), reason: "text too short" });
    }

    Ok((title, text))
}

/// Fetches `source`'s landing page, discovers candidates, and probes up to
/// [`MAX_CANDIDATES`] of them, accepting the first [`MAX_ACCEPTED`] that
/// clear the title/text length gates. A candidate fetch failure is skipped,
/// not propagated — one bad link must not stop the rest of the batch.
pub async fn scrape_source(
    source: &SourceConfig,
    client: &reqwest::Client,
    timeout_secs: u64,
) -> Result<Vec<RawItem>, FetchError> {
    let landing_page = client::fetch_text(client, &source.url, timeout_secs).await?;
    let candidates = extract_candidate_links(&source.url, &landing_page);

    let mut accepted = Vec::new();
    for url in candidates.into_iter().take(MAX_CANDIDATES) {
        if accepted.len() >= MAX_ACCEPTED {
            break;
        }
        let Ok(page) = client::fetch_text(client, &url, timeout_secs).await else {
            continue;
        };
        let Ok((title, text)) = extract_article(&page) else {
            continue;
        };

        accepted.push(RawItem {
            url,
            title,
            summary: text.chars().take(300).collect(),
            content: text,
            source_name: source.name.clone(),
            source_kind: source.kind,
            declared_language: source.language.clone(),
            declared_region: source.region.clone(),
            published_at: chrono::Utc::now(),
        });
    }

    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_same_host_article_links() {
        let html = r#"
            <html><body>
              <a href="/news/2024/scheme-launched">Scheme</a>
              <a href="/login">Login</a>
              <a href="https://other-host.example/news/foo">Other host</a>
              <a href="/tag/politics">Tag</a>
            </body></html>
        "#;
        let links = extract_candidate_links("https://example.com", html);
        assert_eq!(links, vec!["https://example.com/news/2024/scheme-launched"]);
    }

    #[test]
    fn year_segment_counts_as_article_shape() {
        let html = r#"<html><body><a href="/2024/05/big-story">Story</a></body></html>"#;
        let links = extract_candidate_links("https://example.com", html);
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn caps_at_max_candidates() {
        let mut html = String::from("<html><body>");
        for i in 0..20 {
            html.push_str(&format!(r#"<a href="/news/article-{i}">Article {i}</a>"#));
        }
        html.push_str("</body></html>");
        let links = extract_candidate_links("https://example.com", &html);
        assert_eq!(links.len(), MAX_CANDIDATES);
    }

    #[test]
    fn short_title_is_rejected() {
        let html = "<html><body><h1>Hi</h1><p>Some long enough body text that clears the minimum threshold easily by padding with extra words here.</p></body></html>";
        assert!(extract_article(html).is_err());
    }

    #[test]
    fn well_formed_article_is_accepted() {
        let html = "<html><body><h1>Ministry launches major new welfare scheme today</h1><article><p>Officials announced the rollout of a nationwide welfare scheme targeting millions of beneficiaries across every state and union territory starting next month.</p></article></body></html>";
        let (title, text) = extract_article(html).unwrap();
        assert!(title.len() >= MIN_TITLE_LEN);
        assert!(text.len() >= MIN_TEXT_LEN);
    }
}
