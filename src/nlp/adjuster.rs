//! Rule-based sentiment adjuster, applied unconditionally after the model
//! stage. Ported algorithm-for-algorithm from the source this was distilled
//! from: curated positive/negative/neutral keyword sets plus stronger phrase
//! sets, a net-signal adjustment scaled by `boost_threshold` (doubled for
//! strong phrases), diluted by neutral-term density.

use crate::model::SentimentLabel;

const POSITIVE_KEYWORDS: &[&str] = &[
    "achievement", "progress", "success", "growth", "development", "improvement",
    "innovation", "reform", "benefit", "welfare", "opportunity", "initiative",
    "launch", "inaugurate", "approval", "sanction", "allocation", "boost",
    "enhance", "strengthen", "expand", "accelerate", "facilitate", "promote",
    "empowerment", "inclusive", "sustainable", "transparent", "efficient",
    "vikas", "pragati", "safalta", "sudhar", "kalyan", "yojana",
    "shubharambh", "nirmaan", "vikasit", "unnati", "labh",
    "ayushman", "ujjwala", "swachh", "bharatmala", "sagarmala",
    "digital india", "make in india", "skill india", "smart city",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "crisis", "decline", "failure", "corruption", "scam", "scandal",
    "protest", "strike", "controversy", "criticism", "opposition",
    "delay", "cancellation", "shortage", "problem", "issue",
    "concern", "challenge", "dispute", "conflict", "tension",
    "violation", "breach", "negligence", "mismanagement", "inefficiency",
    "samasya", "mushkil", "virodh", "bhrashtachar", "ghotala",
    "sangharsh", "vivad", "kathinai",
];

const NEUTRAL_KEYWORDS: &[&str] = &[
    "meeting", "discussion", "conference", "statement", "report",
    "review", "assessment", "survey", "data", "statistics",
    "announcement", "notification", "circular", "guideline",
    "session", "parliament", "assembly", "cabinet", "committee",
];

const STRONG_POSITIVE_PHRASES: &[&str] = &[
    "major achievement", "significant progress", "record growth",
    "historic decision", "landmark initiative", "game changer",
    "transformative reform", "revolutionary step", "milestone reached",
    "unprecedented success", "remarkable improvement",
];

const STRONG_NEGATIVE_PHRASES: &[&str] = &[
    "major setback", "serious concern", "grave situation",
    "alarming development", "critical issue", "severe crisis",
    "massive corruption", "widespread protest", "violent clashes",
];

#[derive(Debug, Clone)]
pub struct AdjustedSentiment {
    pub label: SentimentLabel,
    pub score: f64,
    pub reason: String,
    pub original_label: SentimentLabel,
    pub original_score: f64,
}

/// Adjusts `(original_label, original_score)` against `text`, mirroring the
/// source's `RuleBasedSentimentAdjuster.adjust_sentiment` exactly.
pub fn adjust(
    text: &str,
    original_label: SentimentLabel,
    original_score: f64,
    boost_threshold: f64,
) -> AdjustedSentiment {
    if text.trim().is_empty() {
        return AdjustedSentiment {
            label: original_label,
            score: original_score,
            reason: "no_text".to_string(),
            original_label,
            original_score,
        };
    }

    let text_lower = text.to_lowercase();
    let strong_boost_threshold = boost_threshold * 2.0;

    let strong_pos_count = STRONG_POSITIVE_PHRASES.iter().filter(|p| text_lower.contains(**p)).count();
    let strong_neg_count = STRONG_NEGATIVE_PHRASES.iter().filter(|p| text_lower.contains(**p)).count();

    let pos_count = POSITIVE_KEYWORDS.iter().filter(|k| text_lower.contains(**k)).count();
    let neg_count = NEGATIVE_KEYWORDS.iter().filter(|k| text_lower.contains(**k)).count();
    let neutral_count = NEUTRAL_KEYWORDS.iter().filter(|k| text_lower.contains(**k)).count();

    let total_keywords = pos_count + neg_count + neutral_count;
    if total_keywords == 0 {
        return AdjustedSentiment {
            label: original_label,
            score: original_score,
            reason: "no_keywords_found".to_string(),
            original_label,
            original_score,
        };
    }

    let mut adjustment = 0.0_f64;
    let mut reasons: Vec<String> = Vec::new();

    if strong_pos_count > 0 {
        adjustment += strong_boost_threshold * strong_pos_count as f64;
        reasons.push(format!("+{strong_pos_count}_strong_positive"));
    }
    if strong_neg_count > 0 {
        adjustment -= strong_boost_threshold * strong_neg_count as f64;
        reasons.push(format!("-{strong_neg_count}_strong_negative"));
    }

    if pos_count > neg_count {
        let net_positive = (pos_count - neg_count) as f64;
        adjustment += boost_threshold * (net_positive / total_keywords as f64);
        reasons.push(format!("+{pos_count}_positive_keywords"));
    } else if neg_count > pos_count {
        let net_negative = (neg_count - pos_count) as f64;
        adjustment -= boost_threshold * (net_negative / total_keywords as f64);
        reasons.push(format!("-{neg_count}_negative_keywords"));
    }

    if neutral_count > 0 {
        let dilution_factor = neutral_count as f64 / total_keywords as f64;
        adjustment *= 1.0 - dilution_factor * 0.5;
        reasons.push(format!("~{neutral_count}_neutral_keywords"));
    }

    let adjusted_score = (original_score + adjustment).clamp(0.0, 1.0);

    let adjusted_label = if adjusted_score >= 0.6 {
        SentimentLabel::Positive
    } else if adjusted_score <= 0.4 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    let reason = if reasons.is_empty() {
        "no_adjustment".to_string()
    } else {
        reasons.join(" | ")
    };

    AdjustedSentiment {
        label: adjusted_label,
        score: adjusted_score,
        reason,
        original_label,
        original_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_no_text() {
        let result = adjust("", SentimentLabel::Neutral, 0.5, 0.15);
        assert_eq!(result.reason, "no_text");
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn no_keywords_leaves_score_unchanged() {
        let result = adjust("The sky is blue today", SentimentLabel::Neutral, 0.5, 0.15);
        assert_eq!(result.reason, "no_keywords_found");
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn strong_positive_phrase_boosts_score() {
        let result = adjust("This is a major achievement for the ministry", SentimentLabel::Neutral, 0.5, 0.15);
        assert!(result.score > 0.5);
        assert!(result.reason.contains("strong_positive"));
    }

    #[test]
    fn strong_negative_phrase_lowers_score_to_negative() {
        let result = adjust("A severe crisis and massive corruption scandal", SentimentLabel::Neutral, 0.5, 0.15);
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn neutral_keywords_dilute_adjustment() {
        let diluted = adjust("progress meeting discussion statement report review", SentimentLabel::Neutral, 0.5, 0.15);
        let undiluted = adjust("progress", SentimentLabel::Neutral, 0.5, 0.15);
        assert!(diluted.score - 0.5 < undiluted.score - 0.5);
    }

    #[test]
    fn score_is_clamped() {
        let result = adjust(
            "major achievement significant progress record growth historic decision landmark initiative",
            SentimentLabel::Neutral,
            0.95,
            0.15,
        );
        assert!(result.score <= 1.0);
    }
}
