//! C11 — Confidence Scorer.
//!
//! A deterministic additive model: start from 0.0, add bounded bonuses for
//! positive signals, subtract penalties for negative ones, clamp to `[0,1]`
//! and round to two decimals. The level/routing discretization and anomaly
//! detection are both pure functions over the resulting score plus the
//! already-computed [`EnrichedItem`] fields — no network or model calls.

use chrono::Utc;

use crate::error::ConfidenceError;
use crate::gazetteer::ministries::MINISTRY_MARKERS;
use crate::model::{ConfidenceLevel, ContentCategory, EnrichedItem};

/// Host substrings treated as an authoritative Government-of-India source.
/// Matched case-insensitively against the article's URL/source string.
pub const TRUSTED_GOV_SOURCES: &[&str] = &[
    "pib.gov.in",
    "mygov.in",
    "india.gov.in",
    "pmindia.gov.in",
    "pmjay.gov.in",
    "pmkisan.gov.in",
    "swachhbharat.mygov.in",
    "digitalindia.gov.in",
    "makeinindia.com",
    "startupindia.gov.in",
    "uidai.gov.in",
    "epfindia.gov.in",
    "pfrda.org.in",
];

const ENTERTAINMENT_KEYWORDS: &[&str] = &[
    "bollywood",
    "बॉलीवुड",
    "cricket",
    "ipl",
    "match",
    "film",
    "फिल्म",
    "actor",
    "अभिनेता",
    "actress",
    "movie",
    "सिनेमा",
    "celebrity",
    "सेलिब्रिटी",
    "sports",
    "खेल",
    "ಕ್ರೀಡೆ",
    "championship",
    "tournament",
];

const TRIBUTE_KEYWORDS: &[&str] = &[
    "paid tribute",
    "श्रद्धांजलि",
    "condolence",
    "शोक",
    "death anniversary",
    "पुण्यतिथि",
    "remembering",
    "स्मरण",
    "demise",
    "निधन",
    "passed away",
    "गुजर गए",
];

const INTERNATIONAL_EXCLUSION_KEYWORDS: &[&str] = &[
    "bangladesh",
    "dhaka",
    "pakistan",
    "islamabad",
    "china",
    "beijing",
    "nepal",
    "kathmandu",
    "sri lanka",
    "colombo",
    "afghanistan",
    "kabul",
];

/// English GOI keyword set used for the density bands below. A focused
/// subset of the relevance classifier's fuller dictionary — this scorer only
/// needs a density count, not full match provenance.
const GOI_DENSITY_KEYWORDS: &[&str] = &[
    "government",
    "ministry",
    "minister",
    "scheme",
    "yojana",
    "policy",
    "pm modi",
    "prime minister",
    "cabinet",
    "parliament",
    "lok sabha",
    "rajya sabha",
    "centre",
    "union government",
    "pib",
];

const MAX_AGE_DAYS: i64 = 30;

fn count_matches(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}

fn any_match(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(*k))
}

/// Matches a URL/source string against [`TRUSTED_GOV_SOURCES`] as a
/// case-insensitive substring.
pub fn is_trusted_source(url: &str) -> bool {
    let lower = url.to_lowercase();
    TRUSTED_GOV_SOURCES.iter().any(|host| lower.contains(host))
}

/// One scored factor, positive or negative, with the tag the routing and
/// anomaly logic key off of.
#[derive(Debug, Clone)]
struct Factor {
    tag: String,
    delta: f64,
}

/// Computes the confidence score, level and routing flags for `item`. Never
/// fails in practice — [`ConfidenceError`] exists for the orchestration
/// layer's documented fallback path, not because this function has a
/// fallible branch of its own.
pub fn score(item: &EnrichedItem) -> Result<ConfidenceOutcome, ConfidenceError> {
    let text = item.title_and_summary().to_lowercase();

    let mut factors: Vec<Factor> = Vec::new();
    let mut score: f64 = 0.0;

    let keyword_density = count_matches(&text, GOI_DENSITY_KEYWORDS);
    if keyword_density >= 5 {
        push(&mut score, &mut factors, 0.25, format!("strong_keyword_match_{keyword_density}"));
    } else if keyword_density >= 3 {
        push(&mut score, &mut factors, 0.20, format!("good_keyword_match_{keyword_density}"));
    } else if keyword_density >= 1 {
        push(&mut score, &mut factors, 0.10, format!("moderate_keyword_match_{keyword_density}"));
    }

    let scheme_count = item.goi_schemes.len();
    if scheme_count >= 3 {
        push(&mut score, &mut factors, 0.30, format!("multiple_schemes_{scheme_count}"));
    } else if scheme_count == 2 {
        push(&mut score, &mut factors, 0.25, "two_schemes".to_string());
    } else if scheme_count == 1 {
        push(&mut score, &mut factors, 0.20, "single_scheme".to_string());
    }

    if is_trusted_source(&item.url) || is_trusted_source(&item.source_name) {
        push(&mut score, &mut factors, 0.20, "trusted_source".to_string());
    }

    let ministry_hit = any_match(&text, MINISTRY_MARKERS);
    if ministry_hit {
        push(
            &mut score,
            &mut factors,
            0.15,
            format!("ministry_mentioned_{}", item.goi_ministries.len().min(5)),
        );
    }

    if item.classification_confidence > 0.9 {
        push(&mut score, &mut factors, 0.10, "high_nlp_confidence".to_string());
    } else if item.classification_confidence > 0.7 {
        push(&mut score, &mut factors, 0.05, "medium_nlp_confidence".to_string());
    }

    if item.is_goi {
        push(&mut score, &mut factors, 0.10, "goi_filter_positive".to_string());
    }

    let entertainment_hit = any_match(&text, ENTERTAINMENT_KEYWORDS);
    if entertainment_hit {
        push(&mut score, &mut factors, -0.40, "entertainment_keywords_detected".to_string());
    }

    let tribute_hit = any_match(&text, TRIBUTE_KEYWORDS);
    if tribute_hit {
        push(&mut score, &mut factors, -0.30, "tribute_keywords_detected".to_string());
    }

    let international_hit = any_match(&text, INTERNATIONAL_EXCLUSION_KEYWORDS);
    if international_hit {
        push(&mut score, &mut factors, -0.60, "international_keywords_detected".to_string());
    }

    if keyword_density == 0 {
        push(&mut score, &mut factors, -0.20, "no_government_keywords".to_string());
    }

    let age_days = (Utc::now() - item.published_at).num_days();
    if age_days > MAX_AGE_DAYS {
        push(&mut score, &mut factors, -0.10, format!("old_article_{age_days}days"));
    }

    let clamped = score.clamp(0.0, 1.0);
    let rounded = (clamped * 100.0).round() / 100.0;

    let level = if rounded >= 0.80 {
        ConfidenceLevel::High
    } else if rounded >= 0.50 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    };

    let mut auto_approved = matches!(level, ConfidenceLevel::High);
    let mut needs_verification = matches!(level, ConfidenceLevel::Medium);
    let auto_rejected = matches!(level, ConfidenceLevel::Low);

    let anomalies = detect_anomalies(item, &text, keyword_density, international_hit, entertainment_hit);
    if !anomalies.is_empty() {
        needs_verification = true;
        auto_approved = false;
    }

    Ok(ConfidenceOutcome {
        score: rounded,
        level,
        contributing_factors: factors.into_iter().map(|f| f.tag).collect(),
        auto_approved,
        auto_rejected,
        needs_verification,
        anomalies: if anomalies.is_empty() { None } else { Some(anomalies) },
    })
}

fn push(score: &mut f64, factors: &mut Vec<Factor>, delta: f64, tag: String) {
    *score += delta;
    factors.push(Factor { tag, delta });
}

fn detect_anomalies(
    item: &EnrichedItem,
    text: &str,
    keyword_density: usize,
    international_hit: bool,
    entertainment_hit: bool,
) -> Vec<String> {
    let mut anomalies = Vec::new();

    if keyword_density >= 2 && entertainment_hit {
        anomalies.push("government_keywords_with_entertainment".to_string());
    }
    if is_trusted_source(&item.url) && entertainment_hit {
        anomalies.push("trusted_source_with_entertainment".to_string());
    }
    if item.sentiment_score > 0.95 {
        anomalies.push("extreme_sentiment_score".to_string());
    }
    if !item.goi_schemes.is_empty() && item.content_category != ContentCategory::Government {
        anomalies.push("scheme_present_non_government_category".to_string());
    }
    if item.title.chars().count() > 200 {
        anomalies.push("title_too_long".to_string());
    }
    if item.detected_language == "unknown" {
        anomalies.push("missing_detected_language".to_string());
    }
    if keyword_density >= 2 && international_hit {
        anomalies.push("goi_keywords_with_international".to_string());
    }

    let _ = text;
    anomalies
}

/// The full §4.10 output: score, discretized level, routing flags and any
/// anomaly tags.
#[derive(Debug, Clone)]
pub struct ConfidenceOutcome {
    pub score: f64,
    pub level: ConfidenceLevel,
    pub contributing_factors: Vec<String>,
    pub auto_approved: bool,
    pub auto_rejected: bool,
    pub needs_verification: bool,
    pub anomalies: Option<Vec<String>>,
}

/// The documented fallback for a failed confidence calculation (§7).
pub fn fallback_outcome() -> ConfidenceOutcome {
    ConfidenceOutcome {
        score: 0.5,
        level: ConfidenceLevel::Medium,
        contributing_factors: Vec::new(),
        auto_approved: false,
        auto_rejected: false,
        needs_verification: true,
        anomalies: Some(vec!["confidence_calculation_error".to_string()]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RawItem, SourceKind};
    use chrono::{Duration, Utc};

    fn make_test_item(title: &str, summary: &str, source_name: &str, url: &str) -> EnrichedItem {
        let raw = RawItem {
            url: url.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            content: String::new(),
            source_name: source_name.to_string(),
            source_kind: SourceKind::Rss,
            declared_language: "en".to_string(),
            declared_region: None,
            published_at: Utc::now(),
        };
        let mut item = EnrichedItem::from_raw(raw);
        item.detected_language = "en".to_string();
        item
    }

    #[test]
    fn trusted_source_matches_substring() {
        assert!(is_trusted_source("https://pib.gov.in/PressReleasePage.aspx"));
        assert!(!is_trusted_source("https://example.com/news"));
    }

    #[test]
    fn strong_keyword_density_and_trusted_source_yields_high() {
        let mut item = make_test_item(
            "Ministry announces new scheme for pension and welfare",
            "Government cabinet policy centre parliament scheme yojana",
            "PIB",
            "https://pib.gov.in/story",
        );
        item.is_goi = true;
        item.goi_schemes = vec!["PM-KISAN".to_string()];
        item.classification_confidence = 0.95;
        let outcome = score(&item).unwrap();
        assert_eq!(outcome.level, ConfidenceLevel::High);
        assert!(outcome.auto_approved);
    }

    #[test]
    fn zero_keywords_penalized() {
        let item = make_test_item("Local bakery opens new branch", "Nothing governmental here", "Random Blog", "https://example.com/bakery");
        let outcome = score(&item).unwrap();
        assert!(outcome.contributing_factors.contains(&"no_government_keywords".to_string()));
        assert_eq!(outcome.level, ConfidenceLevel::Low);
        assert!(outcome.auto_rejected);
    }

    #[test]
    fn entertainment_with_gov_keywords_flags_anomaly() {
        let mut item = make_test_item(
            "Ministry minister government scheme praises Bollywood actor film",
            "cricket match celebrity",
            "Random Blog",
            "https://example.com/story",
        );
        item.classification_confidence = 0.5;
        let outcome = score(&item).unwrap();
        let anomalies = outcome.anomalies.unwrap();
        assert!(anomalies.contains(&"government_keywords_with_entertainment".to_string()));
        assert!(outcome.needs_verification);
    }

    #[test]
    fn old_article_incurs_age_penalty() {
        let mut item = make_test_item("Government scheme update", "ministry policy", "PIB", "https://pib.gov.in/x");
        item.published_at = Utc::now() - Duration::days(60);
        let outcome = score(&item).unwrap();
        assert!(outcome.contributing_factors.iter().any(|f| f.starts_with("old_article_")));
    }

    #[test]
    fn score_is_clamped_and_rounded() {
        let mut item = make_test_item(
            "Ministry government scheme policy centre parliament cabinet pm modi",
            "yojana union government prime minister lok sabha rajya sabha pib",
            "PIB",
            "https://pib.gov.in/a",
        );
        item.is_goi = true;
        item.goi_schemes = vec!["a".into(), "b".into(), "c".into()];
        item.classification_confidence = 0.99;
        let outcome = score(&item).unwrap();
        assert!(outcome.score <= 1.0);
        assert_eq!((outcome.score * 100.0).round(), outcome.score * 100.0);
    }

    #[test]
    fn fallback_outcome_needs_verification() {
        let outcome = fallback_outcome();
        assert_eq!(outcome.level, ConfidenceLevel::Medium);
        assert!(outcome.needs_verification);
        assert!(outcome.anomalies.is_some());
    }
}
