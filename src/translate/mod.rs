//! C5 — Translator.
//!
//! Produces English text for non-English articles through an ordered
//! fallback chain of [`TranslationProvider`]s, each tried in turn until one
//! returns a usable (non-empty, length > 10) result. HTML is stripped first
//! with a real parser, the input capped at 5 000 characters, and the result
//! cached by `H(text, src, "en")`.

use scraper::Html;

use crate::cache::NewsCache;
use crate::config::Config;
use crate::error::TranslationError;

const MAX_TRANSLATE_CHARS: usize = 5_000;
const MIN_RESULT_LEN: usize = 10;

/// One tier of the translation fallback chain.
#[async_trait::async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(&self, text: &str, src: &str) -> Result<Option<String>, TranslationError>;
    fn name(&self) -> &'static str;
}

/// Strips HTML tags from `text` using a real DOM parser, returning the
/// concatenated text nodes.
fn strip_html(text: &str) -> String {
    let fragment = Html::parse_fragment(text);
    fragment.root_element().text().collect::<Vec<_>>().join(" ")
}

fn is_usable(result: &Option<String>) -> bool {
    matches!(result, Some(s) if !s.trim().is_empty() && s.trim().len() > MIN_RESULT_LEN)
}

/// An in-process tier standing in for a dedicated Indian-language-to-English
/// model: recognizes a handful of common Devanagari/administrative phrases
/// verbatim so entirely offline runs still translate the highest-frequency
/// government boilerplate. Anything it doesn't recognize returns `None` so
/// the chain falls through to an HTTP provider.
pub struct IndicPhrasebookProvider;

const PHRASEBOOK: &[(&str, &str)] = &[
    ("प्रधानमंत्री", "Prime Minister"),
    ("प्रेस विज्ञप्ति", "Press Release"),
    ("केंद्र सरकार", "Central Government"),
    ("मंत्रालय", "Ministry"),
];

#[async_trait::async_trait]
impl TranslationProvider for IndicPhrasebookProvider {
    async fn translate(&self, text: &str, _src: &str) -> Result<Option<String>, TranslationError> {
        let mut translated = text.to_string();
        let mut hit = false;
        for (from, to) in PHRASEBOOK {
            if translated.contains(from) {
                translated = translated.replace(from, to);
                hit = true;
            }
        }
        Ok(if hit { Some(translated) } else { None })
    }

    fn name(&self) -> &'static str {
        "indic_phrasebook"
    }
}

/// An HTTP-backed provider against a configured translation endpoint. All
/// three HTTP tiers (primary/secondary/tertiary) share this shape; only the
/// endpoint and request format differ. The tertiary tier defaults to a free
/// public MyMemory-compatible endpoint that requires no API key.
pub struct HttpTranslationProvider {
    name: &'static str,
    endpoint: String,
    client: reqwest::Client,
}

impl HttpTranslationProvider {
    pub fn new(name: &'static str, endpoint: impl Into<String>, timeout: std::time::Duration) -> Self {
        HttpTranslationProvider {
            name,
            endpoint: endpoint.into(),
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    pub fn free_tertiary(timeout: std::time::Duration) -> Self {
        HttpTranslationProvider::new("mymemory_free", "https://api.mymemory.translated.net/get", timeout)
    }
}

#[derive(serde::Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: MyMemoryData,
}

#[derive(serde::Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[async_trait::async_trait]
impl TranslationProvider for HttpTranslationProvider {
    async fn translate(&self, text: &str, src: &str) -> Result<Option<String>, TranslationError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", text), ("langpair", &format!("{src}|en"))])
            .send()
            .await
            .map_err(|source| TranslationError::Http { provider: self.name, source })?;

        if !response.status().is_success() {
            return Err(TranslationError::ProviderFailed {
                provider: self.name,
                reason: format!("HTTP {}", response.status()),
            });
        }

        let parsed: MyMemoryResponse = response
            .json()
            .await
            .map_err(|source| TranslationError::Http { provider: self.name, source })?;

        Ok(Some(parsed.response_data.translated_text))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Builds the default fallback chain: in-process phrasebook, then the free
/// public HTTP tier. Primary/secondary provider slots are left for
/// operator-configured endpoints (set via future config fields) and are
/// intentionally absent here rather than pointed at a placeholder URL.
pub fn default_chain(config: &Config) -> Vec<Box<dyn TranslationProvider>> {
    vec![
        Box::new(IndicPhrasebookProvider),
        Box::new(HttpTranslationProvider::free_tertiary(config.fetch_timeout)),
    ]
}

/// Runs the §4.5 translation contract over `text` through `chain`,
/// consulting and populating the cache. `src == "en"` returns the input
/// unchanged without invoking any provider; empty input returns `None`.
pub async fn translate(
    text: &str,
    src: &str,
    chain: &[Box<dyn TranslationProvider>],
    cache: &NewsCache,
) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    if src == "en" {
        return Some(text.to_string());
    }

    if let Some(cached) = cache.get_translation(text, src, "en") {
        return Some(cached);
    }

    let stripped = strip_html(text);
    let capped: String = stripped.chars().take(MAX_TRANSLATE_CHARS).collect();

    for provider in chain {
        match provider.translate(&capped, src).await {
            Ok(result) if is_usable(&result) => {
                let translated = result.unwrap();
                cache.set_translation(text, src, "en", translated.clone());
                return Some(translated);
            }
            Ok(_) => {
                tracing::debug!(provider = provider.name(), "translation result too short, trying next tier");
            }
            Err(e) => {
                tracing::warn!(provider = provider.name(), error = %e, "translation provider failed");
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFails;
    #[async_trait::async_trait]
    impl TranslationProvider for AlwaysFails {
        async fn translate(&self, _text: &str, _src: &str) -> Result<Option<String>, TranslationError> {
            Err(TranslationError::ProviderFailed { provider: "always_fails", reason: "nope".into() })
        }
        fn name(&self) -> &'static str {
            "always_fails"
        }
    }

    struct AlwaysSucceeds;
    #[async_trait::async_trait]
    impl TranslationProvider for AlwaysSucceeds {
        async fn translate(&self, _text: &str, _src: &str) -> Result<Option<String>, TranslationError> {
            Ok(Some("a perfectly good translation".to_string()))
        }
        fn name(&self) -> &'static str {
            "always_succeeds"
        }
    }

    #[tokio::test]
    async fn english_source_passes_through_unchanged() {
        let cache = NewsCache::in_process();
        let result = translate("hello world", "en", &[], &cache).await;
        assert_eq!(result, Some("hello world".to_string()));
    }

    #[tokio::test]
    async fn empty_input_is_none() {
        let cache = NewsCache::in_process();
        let result = translate("", "hi", &[], &cache).await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn falls_through_failing_tiers_to_success() {
        let cache = NewsCache::in_process();
        let chain: Vec<Box<dyn TranslationProvider>> = vec![Box::new(AlwaysFails), Box::new(AlwaysSucceeds)];
        let result = translate("कुछ पाठ यहाँ है", "hi", &chain, &cache).await;
        assert_eq!(result, Some("a perfectly good translation".to_string()));
    }

    #[tokio::test]
    async fn exhausted_chain_returns_none() {
        let cache = NewsCache::in_process();
        let chain: Vec<Box<dyn TranslationProvider>> = vec![Box::new(AlwaysFails)];
        let result = translate("कुछ पाठ यहाँ है", "hi", &chain, &cache).await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn successful_translation_is_cached() {
        let cache = NewsCache::in_process();
        let chain: Vec<Box<dyn TranslationProvider>> = vec![Box::new(AlwaysSucceeds)];
        let _ = translate("कुछ पाठ यहाँ है", "hi", &chain, &cache).await;
        assert!(cache.get_translation("कुछ पाठ यहाँ है", "hi", "en").is_some());
    }

    #[test]
    fn strip_html_removes_tags() {
        let stripped = strip_html("<p>Hello <b>World</b></p>");
        assert!(stripped.contains("Hello"));
        assert!(!stripped.contains('<'));
    }
}
