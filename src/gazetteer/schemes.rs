//! Central Government schemes gazetteer, used by the Relevance Classifier
//! (C8) and the Confidence Scorer (C11) for scheme detection. Canonical
//! names plus regional aliases are the matching unit — see §GLOSSARY
//! "Scheme". Only a representative subset of the full scheme catalogue is
//! carried here; extending coverage is a matter of appending entries.

use once_cell::sync::Lazy;

use crate::model::Scheme;

fn scheme(
    canonical_name: &str,
    ministry: &str,
    english_aliases: &[&str],
    regional: &[(&str, &[&str])],
    tags: &[&str],
) -> Scheme {
    Scheme {
        canonical_name: canonical_name.to_string(),
        ministry: ministry.to_string(),
        english_aliases: english_aliases.iter().map(|s| s.to_string()).collect(),
        regional_aliases: regional
            .iter()
            .map(|(lang, names)| {
                (
                    lang.to_string(),
                    names.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}

/// Central schemes catalogue. Ordered roughly by PIB mention frequency.
pub static SCHEMES: Lazy<Vec<Scheme>> = Lazy::new(|| {
    vec![
        scheme(
            "PM-KISAN",
            "Ministry of Agriculture and Farmers Welfare",
            &["pm-kisan", "pm kisan", "pradhan mantri kisan samman nidhi", "kisan samman nidhi"],
            &[
                ("hi", &["पीएम किसान", "प्रधानमंत्री किसान सम्मान निधि", "किसान सम्मान निधि"]),
                ("kn", &["ಪಿಎಂ ಕಿಸಾನ್"]),
                ("ta", &["பிஎம் கிசான்"]),
                ("te", &["పిఎమ్ కిసాన్"]),
                ("mr", &["पीएम किसान"]),
            ],
            &["Agriculture", "Farmers", "Income Support"],
        ),
        scheme(
            "Ayushman Bharat",
            "Ministry of Health and Family Welfare",
            &["ayushman bharat", "pm-jay", "pm jay", "ayushman bharat yojana"],
            &[
                ("hi", &["आयुष्मान भारत", "पीएम जय", "आयुष्मान योजना"]),
                ("kn", &["ಆಯುಷ್ಮಾನ್ ಭಾರತ್"]),
                ("ta", &["ஆயுஷ்மான் பாரத்"]),
                ("te", &["ఆయుష్మాన్ భారత్"]),
                ("bn", &["আয়ুষ্মান ভারত"]),
            ],
            &["Health", "Insurance"],
        ),
        scheme(
            "Pradhan Mantri Ujjwala Yojana",
            "Ministry of Petroleum and Natural Gas",
            &["ujjwala yojana", "pradhan mantri ujjwala yojana", "ujjwala"],
            &[
                ("hi", &["उज्ज्वला योजना", "प्रधानमंत्री उज्ज्वला योजना"]),
                ("mr", &["उज्ज्वला योजना"]),
                ("gu", &["ઉજ્જવલા યોજના"]),
            ],
            &["LPG", "Women Empowerment", "BPL"],
        ),
        scheme(
            "Pradhan Mantri Awas Yojana",
            "Ministry of Housing and Urban Affairs",
            &["pradhan mantri awas yojana", "pmay", "pm awas yojana"],
            &[
                ("hi", &["प्रधानमंत्री आवास योजना", "पीएम आवास"]),
                ("ta", &["பிரதமர் ஆவாஸ் திட்டம்"]),
                ("te", &["ప్రధానమంత్రి ఆవాస్ యోజన"]),
            ],
            &["Housing", "Urban Development", "Rural Development"],
        ),
        scheme(
            "Jal Jeevan Mission",
            "Ministry of Jal Shakti",
            &["jal jeevan mission", "har ghar jal"],
            &[
                ("hi", &["जल जीवन मिशन", "हर घर जल"]),
                ("kn", &["ಜಲ ಜೀವನ್ ಮಿಷನ್"]),
                ("bn", &["জল জীবন মিশন"]),
            ],
            &["Water Supply", "Rural Development", "Infrastructure"],
        ),
        scheme(
            "Pradhan Mantri Mudra Yojana",
            "Ministry of Finance",
            &["pradhan mantri mudra yojana", "pmmy", "mudra yojana", "pm mudra"],
            &[
                ("hi", &["मुद्रा योजना", "प्रधानमंत्री मुद्रा योजना"]),
                ("gu", &["મુદ્રા યોજના"]),
            ],
            &["MSME", "Loans", "Entrepreneurship"],
        ),
        scheme(
            "Swachh Bharat Mission",
            "Ministry of Jal Shakti",
            &["swachh bharat", "swachh bharat mission", "clean india mission"],
            &[
                ("hi", &["स्वच्छ भारत", "स्वच्छ भारत मिशन"]),
                ("ta", &["சுவச் பாரத்"]),
            ],
            &["Sanitation", "Public Health"],
        ),
        scheme(
            "Digital India",
            "Ministry of Electronics and Information Technology",
            &["digital india"],
            &[("hi", &["डिजिटल इंडिया"]), ("te", &["డిజిటల్ ఇండియా"])],
            &["e-Governance", "Technology"],
        ),
        scheme(
            "Mahatma Gandhi National Rural Employment Guarantee Scheme",
            "Ministry of Rural Development",
            &["mgnrega", "nrega", "mahatma gandhi nrega"],
            &[
                ("hi", &["मनरेगा", "नरेगा", "महात्मा गांधी नरेगा"]),
                ("ta", &["மனரேகா"]),
                ("te", &["మనరేగా"]),
                ("bn", &["মনরেগা"]),
            ],
            &["Employment", "Rural Development"],
        ),
        scheme(
            "Pradhan Mantri Jan Dhan Yojana",
            "Ministry of Finance",
            &["pradhan mantri jan dhan yojana", "jan dhan yojana", "pmjdy"],
            &[("hi", &["जन धन योजना", "प्रधानमंत्री जन धन योजना"])],
            &["Financial Inclusion", "Banking"],
        ),
        scheme(
            "Beti Bachao Beti Padhao",
            "Ministry of Women and Child Development",
            &["beti bachao beti padhao"],
            &[("hi", &["बेटी बचाओ बेटी पढ़ाओ"])],
            &["Women Empowerment", "Education"],
        ),
        scheme(
            "Khelo India",
            "Ministry of Youth Affairs and Sports",
            &["khelo india"],
            &[("hi", &["खेलो इंडिया"])],
            &["Sports", "Youth"],
        ),
        scheme(
            "Atal Pension Yojana",
            "Ministry of Finance",
            &["atal pension yojana", "apy"],
            &[("hi", &["अटल पेंशन योजना"])],
            &["Pension", "Financial Security"],
        ),
        scheme(
            "Sukanya Samriddhi Yojana",
            "Ministry of Finance",
            &["sukanya samriddhi yojana", "ssy"],
            &[("hi", &["सुकन्या समृद्धि योजना"])],
            &["Girl Child", "Savings"],
        ),
        scheme(
            "PM Fasal Bima Yojana",
            "Ministry of Agriculture and Farmers Welfare",
            &["pm fasal bima yojana", "fasal bima", "crop insurance scheme"],
            &[("hi", &["फसल बीमा", "प्रधानमंत्री फसल बीमा योजना"])],
            &["Agriculture", "Insurance"],
        ),
        scheme(
            "PM Gati Shakti",
            "Ministry of Commerce and Industry",
            &["pm gati shakti", "gati shakti"],
            &[("hi", &["पीएम गति शक्ति"])],
            &["Infrastructure", "Logistics"],
        ),
        scheme(
            "Namami Gange",
            "Ministry of Jal Shakti",
            &["namami gange", "clean ganga mission"],
            &[("hi", &["नमामि गंगे"])],
            &["River Conservation", "Environment"],
        ),
        scheme(
            "Skill India Mission",
            "Ministry of Skill Development and Entrepreneurship",
            &["skill india", "pmkvy", "pradhan mantri kaushal vikas yojana"],
            &[("hi", &["स्किल इंडिया", "कौशल विकास"])],
            &["Skill Development", "Employment"],
        ),
        scheme(
            "PM Garib Kalyan Anna Yojana",
            "Ministry of Consumer Affairs, Food and Public Distribution",
            &["pm garib kalyan", "garib kalyan anna yojana", "one nation one ration"],
            &[("hi", &["गरीब कल्याण अन्न योजना", "एक राष्ट्र एक राशन"])],
            &["Food Security", "Welfare"],
        ),
        scheme(
            "Startup India",
            "Department for Promotion of Industry and Internal Trade",
            &["startup india", "stand up india"],
            &[("hi", &["स्टार्टअप इंडिया"])],
            &["Entrepreneurship", "MSME"],
        ),
    ]
});

/// One scheme match against a body of text, with the matched surface form
/// preserved for alert reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeMatch {
    pub scheme: Scheme,
    pub matched_alias: String,
}

/// Finds every scheme mentioned in `text` (title + summary, typically),
/// trying the canonical name, a significant word from it (mirrors the
/// source's `len(word) > 4` partial-match rule for names like "PM-KISAN"),
/// and — when a detected language is known — that language's regional
/// aliases first, then all other languages' aliases.
pub fn find_schemes_in_text(text: &str, detected_language: Option<&str>) -> Vec<SchemeMatch> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();
    let mut matches = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for s in SCHEMES.iter() {
        if let Some(alias) = s
            .english_aliases
            .iter()
            .find(|a| text_lower.contains(&a.to_lowercase()))
        {
            if seen.insert(s.canonical_name.clone()) {
                matches.push(SchemeMatch {
                    scheme: s.clone(),
                    matched_alias: alias.clone(),
                });
            }
            continue;
        }

        let name_lower = s.canonical_name.to_lowercase();
        if let Some(word) = name_lower
            .split_whitespace()
            .find(|w| w.len() > 4 && text_lower.contains(w))
        {
            if seen.insert(s.canonical_name.clone()) {
                matches.push(SchemeMatch {
                    scheme: s.clone(),
                    matched_alias: word.to_string(),
                });
            }
            continue;
        }

        if let Some(lang) = detected_language {
            if let Some(names) = s.regional_aliases.get(lang) {
                if let Some(alias) = names.iter().find(|n| text_lower.contains(&n.to_lowercase())) {
                    if seen.insert(s.canonical_name.clone()) {
                        matches.push(SchemeMatch {
                            scheme: s.clone(),
                            matched_alias: alias.clone(),
                        });
                    }
                    continue;
                }
            }
        }

        for names in s.regional_aliases.values() {
            if let Some(alias) = names.iter().find(|n| text_lower.contains(&n.to_lowercase())) {
                if seen.insert(s.canonical_name.clone()) {
                    matches.push(SchemeMatch {
                        scheme: s.clone(),
                        matched_alias: alias.clone(),
                    });
                }
                break;
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_scheme_by_english_alias() {
        let matches = find_schemes_in_text("PM Modi launches Ayushman Bharat expansion", None);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].scheme.canonical_name, "Ayushman Bharat");
    }

    #[test]
    fn finds_scheme_by_hindi_alias() {
        let matches = find_schemes_in_text("सरकार ने मनरेगा के तहत मजदूरी बढ़ाई", Some("hi"));
        assert!(matches
            .iter()
            .any(|m| m.scheme.canonical_name.contains("National Rural Employment")));
    }

    #[test]
    fn partial_word_match_for_hyphenated_name() {
        let matches = find_schemes_in_text("The mudra scheme disbursed crores in loans", None);
        assert!(matches.iter().any(|m| m.scheme.canonical_name.contains("Mudra")));
    }

    #[test]
    fn no_matches_on_unrelated_text() {
        let matches = find_schemes_in_text("Stock markets rallied today on strong earnings", None);
        assert!(matches.is_empty());
    }

    #[test]
    fn empty_text_yields_no_matches() {
        assert!(find_schemes_in_text("", None).is_empty());
    }
}
