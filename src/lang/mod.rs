//! C4 — Language Detector.
//!
//! Assigns `(code, script, confidence)` to raw text using script heuristics
//! plus the from-scratch Hindi/Marathi frequency classifier for the one
//! genuinely ambiguous script. See [`scripts`] and [`hi_mr`].

pub mod hi_mr;
pub mod scripts;

use scripts::Script;

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageDetection {
    pub code: String,
    pub script: String,
    pub confidence: f64,
}

const MIN_TEXT_LEN: usize = 10;
const UNAMBIGUOUS_CONFIDENCE: f64 = 0.9;
const AGREEMENT_CONFIDENCE: f64 = 0.95;
const DEVANAGARI_DEFAULT_CONFIDENCE: f64 = 0.9;
const DETECTOR_OVERRIDE_THRESHOLD: f64 = 0.85;

/// Runs the full §4.4 algorithm. Texts shorter than 10 characters return
/// `{unknown, unknown, 0.0}` without invoking any detector.
pub fn detect(text: &str) -> LanguageDetection {
    if text.trim().chars().count() < MIN_TEXT_LEN {
        return LanguageDetection {
            code: "unknown".to_string(),
            script: "unknown".to_string(),
            confidence: 0.0,
        };
    }

    let Some(script) = scripts::detect_dominant_script(text) else {
        return LanguageDetection {
            code: "unknown".to_string(),
            script: "unknown".to_string(),
            confidence: 0.0,
        };
    };

    if let Some(code) = script.unambiguous_language() {
        return LanguageDetection {
            code: code.to_string(),
            script: script.as_str().to_string(),
            confidence: UNAMBIGUOUS_CONFIDENCE,
        };
    }

    debug_assert_eq!(script, Script::Devanagari);
    detect_devanagari(text)
}

/// Devanagari defaults to Hindi (the majority language of the two sharing
/// this script) unless the marker-based detector's signal is strong enough
/// to override it in favor of Marathi, or confirms Hindi outright.
fn detect_devanagari(text: &str) -> LanguageDetection {
    let script = Script::Devanagari.as_str().to_string();

    match hi_mr::disambiguate(text) {
        Some(("mr", confidence)) if confidence > DETECTOR_OVERRIDE_THRESHOLD => {
            LanguageDetection {
                code: "mr".to_string(),
                script,
                confidence,
            }
        }
        Some(("hi", _)) => LanguageDetection {
            code: "hi".to_string(),
            script,
            confidence: AGREEMENT_CONFIDENCE,
        },
        _ => LanguageDetection {
            code: "hi".to_string(),
            script,
            confidence: DEVANAGARI_DEFAULT_CONFIDENCE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unknown() {
        let result = detect("hi");
        assert_eq!(result.code, "unknown");
        assert_eq!(result.script, "unknown");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn english_is_latin() {
        let result = detect("This is a sufficiently long English sentence");
        assert_eq!(result.code, "en");
        assert_eq!(result.script, "Latin");
        assert!((result.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn kannada_is_unambiguous() {
        let result = detect("ಇದು ಕನ್ನಡ ಭಾಷೆಯ ಪಠ್ಯವಾಗಿದೆ");
        assert_eq!(result.code, "kn");
        assert_eq!(result.script, "Kannada");
    }

    #[test]
    fn devanagari_with_hindi_markers_confirms_hindi() {
        let result = detect("यह एक हिंदी समाचार है और यह महत्वपूर्ण है");
        assert_eq!(result.code, "hi");
        assert_eq!(result.script, "Devanagari");
        assert!((result.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn devanagari_with_marathi_markers_overrides_to_marathi() {
        let result = detect("हे एक मराठी बातमी आहे आणि ते महत्त्वाचे आहे");
        assert_eq!(result.code, "mr");
        assert_eq!(result.script, "Devanagari");
        assert!(result.confidence > 0.85);
    }

    #[test]
    fn devanagari_with_no_markers_defaults_to_hindi() {
        let result = detect("सरकार योजना घोषणा प्रधानमंत्री");
        assert_eq!(result.code, "hi");
        assert!((result.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn confidence_always_in_unit_range() {
        let samples = [
            "This is an English sentence for testing purposes",
            "यह एक हिंदी समाचार है",
            "ಇದು ಕನ್ನಡ ಭಾಷೆಯ ಪಠ್ಯವಾಗಿದೆ",
            "",
            "short",
        ];
        for sample in samples {
            let result = detect(sample);
            assert!(result.confidence >= 0.0 && result.confidence <= 1.0);
        }
    }
}
