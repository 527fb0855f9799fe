//! Hindi/Marathi disambiguation for Devanagari text (§4.4 step 3).
//!
//! No general-purpose statistical language-identification crate is part of
//! the adopted dependency stack, so this is a from-scratch frequency
//! classifier over short diagnostic token lists distinctive to each
//! language: postpositions, copulas, and common function words that differ
//! between Hindi and Marathi in their Devanagari spelling. It is
//! deterministic and testable, scored in the same `[0,1]` confidence space
//! as the script heuristic, and wired through the same agreement/disagreement
//! rule as every other script.

/// Tokens that strongly indicate Hindi over Marathi.
const HINDI_MARKERS: &[&str] = &[
    "है", "हैं", "था", "थी", "थे", "और", "नहीं", "में", "के", "की", "का",
    "यह", "वह", "कर", "रहा", "रही", "रहे", "किया", "गया",
];

/// Tokens that strongly indicate Marathi over Hindi.
const MARATHI_MARKERS: &[&str] = &[
    "आहे", "आहेत", "होता", "होती", "होते", "आणि", "नाही", "मध्ये", "चा", "ची", "चे",
    "हे", "ते", "करून", "राहिला", "राहिली", "झाला", "झाली",
];

/// Scores `text` against both marker lists and returns `(language, confidence)`
/// when one language's signal dominates. `confidence` is the fraction of
/// matched markers attributable to the winning language, bounded to `[0,1]`.
pub fn disambiguate(text: &str) -> Option<(&'static str, f64)> {
    let hindi_hits = HINDI_MARKERS.iter().filter(|m| text.contains(*m)).count();
    let marathi_hits = MARATHI_MARKERS
        .iter()
        .filter(|m| text.contains(*m))
        .count();

    let total = hindi_hits + marathi_hits;
    if total == 0 {
        return None;
    }

    if hindi_hits > marathi_hits {
        Some(("hi", hindi_hits as f64 / total as f64))
    } else if marathi_hits > hindi_hits {
        Some(("mr", marathi_hits as f64 / total as f64))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_hindi_markers() {
        let (lang, confidence) = disambiguate("यह हिंदी पाठ है और यह अच्छा है").unwrap();
        assert_eq!(lang, "hi");
        assert!(confidence > 0.5);
    }

    #[test]
    fn detects_marathi_markers() {
        let (lang, confidence) = disambiguate("हे मराठी आहे आणि ते चांगले आहे").unwrap();
        assert_eq!(lang, "mr");
        assert!(confidence > 0.5);
    }

    #[test]
    fn no_markers_returns_none() {
        assert!(disambiguate("नमस्ते").is_none());
    }

    #[test]
    fn tied_markers_returns_none() {
        // One marker from each list, evenly matched.
        assert!(disambiguate("है आहे").is_none());
    }
}
