//! Ministry/department detection, used by the Relevance Classifier (C8) and
//! Confidence Scorer (C11). Grounded on the source's `MINISTRY_KEYWORDS` —
//! generic role words ("ministry", "minister", "department") rather than a
//! closed list of ministry names, since new ministries are renamed/merged
//! more often than the scheme catalogue changes.

/// Generic markers that indicate a ministry/department/minister is being
/// discussed, across English, transliterated Hindi, and Kannada — the three
/// the source carries explicitly.
pub const MINISTRY_MARKERS: &[&str] = &[
    "ministry",
    "mantralaya",
    "मंत्रालय",
    "ಮಂತ್ರಾಲಯ",
    "minister",
    "mantri",
    "मंत्री",
    "ಮಂತ್ರಿ",
    "department",
    "vibhag",
    "विभाग",
    "ವಿಭಾಗ",
];

const MAX_MINISTRIES: usize = 5;

/// Extracts up to `MAX_MINISTRIES` unique ministry mentions from `text`,
/// each as the up-to-3-preceding-words phrase ending in a marker (mirrors
/// the source's `(\w+\s+){0,3}marker` regex).
pub fn detect_ministries(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let mut found = std::collections::HashSet::new();

    for (i, word) in words.iter().enumerate() {
        for marker in MINISTRY_MARKERS {
            if word.contains(marker) {
                let start = i.saturating_sub(3);
                let phrase = words[start..=i].join(" ");
                found.insert(phrase);
            }
        }
    }

    let mut result: Vec<String> = found.into_iter().collect();
    result.sort();
    result.truncate(MAX_MINISTRIES);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_ministry_of_health() {
        let result = detect_ministries("The Ministry of Health announced new guidelines today");
        assert!(result.iter().any(|m| m.contains("ministry")));
    }

    #[test]
    fn detects_hindi_marker() {
        let result = detect_ministries("स्वास्थ्य मंत्रालय ने नई योजना की घोषणा की");
        assert!(!result.is_empty());
    }

    #[test]
    fn caps_at_five_unique_ministries() {
        let text = "ministry one ministry two ministry three ministry four ministry five ministry six";
        let result = detect_ministries(text);
        assert!(result.len() <= 5);
    }

    #[test]
    fn no_markers_yields_empty() {
        assert!(detect_ministries("Stock markets rallied today").is_empty());
    }
}
