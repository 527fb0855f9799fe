//! Unicode script-range heuristics (§4.4 step 1). Ranges are taken verbatim
//! from the source this was distilled from.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Odia,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Arabic,
    Latin,
}

impl Script {
    pub fn as_str(&self) -> &'static str {
        match self {
            Script::Devanagari => "Devanagari",
            Script::Bengali => "Bengali",
            Script::Gurmukhi => "Gurmukhi",
            Script::Gujarati => "Gujarati",
            Script::Odia => "Odia",
            Script::Tamil => "Tamil",
            Script::Telugu => "Telugu",
            Script::Kannada => "Kannada",
            Script::Malayalam => "Malayalam",
            Script::Arabic => "Arabic",
            Script::Latin => "Latin",
        }
    }

    /// The language code this script maps to when it is unambiguous
    /// (everything except Devanagari, which is shared by Hindi and Marathi).
    pub fn unambiguous_language(&self) -> Option<&'static str> {
        match self {
            Script::Bengali => Some("bn"),
            Script::Gurmukhi => Some("pa"),
            Script::Gujarati => Some("gu"),
            Script::Odia => Some("or"),
            Script::Tamil => Some("ta"),
            Script::Telugu => Some("te"),
            Script::Kannada => Some("kn"),
            Script::Malayalam => Some("ml"),
            Script::Arabic => Some("ur"),
            Script::Latin => Some("en"),
            Script::Devanagari => None,
        }
    }

    fn range(&self) -> (u32, u32) {
        match self {
            Script::Devanagari => (0x0900, 0x097F),
            Script::Bengali => (0x0980, 0x09FF),
            Script::Gurmukhi => (0x0A00, 0x0A7F),
            Script::Gujarati => (0x0A80, 0x0AFF),
            Script::Odia => (0x0B00, 0x0B7F),
            Script::Tamil => (0x0B80, 0x0BFF),
            Script::Telugu => (0x0C00, 0x0C7F),
            Script::Kannada => (0x0C80, 0x0CFF),
            Script::Malayalam => (0x0D00, 0x0D7F),
            Script::Arabic => (0x0600, 0x06FF),
            // The source's Latin range is ASCII letters only (U+0041-U+005A,
            // U+0061-U+007A); it checks each char against every script range
            // in turn and Latin's bound happens to span both cases as one
            // inclusive range in its implementation. We keep that exact
            // behavior rather than widening it.
            Script::Latin => (0x0041, 0x007A),
        }
    }

    pub const ALL: [Script; 11] = [
        Script::Devanagari,
        Script::Bengali,
        Script::Gurmukhi,
        Script::Gujarati,
        Script::Odia,
        Script::Tamil,
        Script::Telugu,
        Script::Kannada,
        Script::Malayalam,
        Script::Arabic,
        Script::Latin,
    ];
}

/// Detects the dominant script in `text` by per-character codepoint range,
/// first-matching-range-wins per character (mirrors the source's scan order).
pub fn detect_dominant_script(text: &str) -> Option<Script> {
    if text.is_empty() {
        return None;
    }

    let mut counts: [usize; 11] = [0; 11];

    for ch in text.chars() {
        let code = ch as u32;
        for (i, script) in Script::ALL.iter().enumerate() {
            let (start, end) = script.range();
            if code >= start && code <= end {
                counts[i] += 1;
                break;
            }
        }
    }

    let (max_idx, max_count) = counts
        .iter()
        .enumerate()
        .max_by_key(|(_, c)| **c)
        .unwrap();

    if *max_count == 0 {
        None
    } else {
        Some(Script::ALL[max_idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_kannada() {
        let script = detect_dominant_script("ಇದು ಕನ್ನಡ ಪಠ್ಯ").unwrap();
        assert_eq!(script, Script::Kannada);
        assert_eq!(script.unambiguous_language(), Some("kn"));
    }

    #[test]
    fn detects_tamil() {
        let script = detect_dominant_script("இது தமிழ் உரை").unwrap();
        assert_eq!(script, Script::Tamil);
    }

    #[test]
    fn detects_latin_for_english() {
        let script = detect_dominant_script("This is English text").unwrap();
        assert_eq!(script, Script::Latin);
    }

    #[test]
    fn devanagari_is_ambiguous_between_hindi_and_marathi() {
        let script = detect_dominant_script("यह हिंदी पाठ है").unwrap();
        assert_eq!(script, Script::Devanagari);
        assert_eq!(script.unambiguous_language(), None);
    }

    #[test]
    fn empty_text_has_no_dominant_script() {
        assert!(detect_dominant_script("").is_none());
    }
}
