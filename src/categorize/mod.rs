//! C9 — Content Categorizer.
//!
//! Scores each category by weighted keyword occurrence, applies
//! official-source/scheme priority boosts, picks the argmax as the primary
//! category, and resolves a sub-category plus the `should_show_pib`
//! decision table. International status is checked first, ahead of
//! category scoring, by the same word lists C6 uses.

use crate::model::{ContentCategory, EnrichedItem};
use crate::reject::international_match;

struct CategoryKeywords {
    category: ContentCategory,
    weight: i32,
    en: &'static [&'static str],
    hi: &'static [&'static str],
    /// Extra per-language keyword arrays, `(language_code, keywords)` — only
    /// populated for categories that need coverage beyond English/Hindi.
    other: &'static [(&'static str, &'static [&'static str])],
}

const GOVERNMENT_KEYWORDS_EN: &[&str] = &[
    "pm awas yojana", "pradhan mantri awas yojana", "pmay", "ayushman bharat", "pm jay",
    "pm kisan", "pm kisan samman nidhi", "kisan samman", "ujjwala", "ujjwala yojana",
    "swachh bharat", "swachh bharat mission", "digital india", "make in india",
    "skill india", "pmkvy", "startup india", "stand up india",
    "mudra yojana", "pm mudra", "jal jeevan mission", "har ghar jal", "smart cities",
    "namami gange", "clean ganga", "beti bachao beti padhao", "jan dhan yojana", "pmjdy",
    "mgnrega", "nrega", "pm garib kalyan", "garib kalyan anna yojana",
    "one nation one ration", "atal pension yojana", "sukanya samriddhi yojana",
    "pm fasal bima", "crop insurance", "kisan credit card", "pmgsy",
    "national health mission", "national pension scheme", "employees provident fund",
];
const GOVERNMENT_KEYWORDS_HI: &[&str] = &[
    "प्रधानमंत्री आवास योजना", "आयुष्मान भारत", "पीएम किसान", "उज्ज्वला योजना",
    "स्वच्छ भारत", "डिजिटल इंडिया", "स्किल इंडिया", "स्टार्टअप इंडिया",
    "मुद्रा योजना", "जल जीवन मिशन", "नमामि गंगे", "जन धन योजना", "मनरेगा",
];
const GOVERNMENT_KEYWORDS_KN: &[&str] = &[
    "ಪಿಎಂ ಕಿಸಾನ್", "ಆಯುಷ್ಮಾನ್ ಭಾರತ್", "ಜಲ ಜೀವನ್ ಮಿಷನ್", "ಪ್ರಧಾನಮಂತ್ರಿ ಆವಾಸ್ ಯೋಜನೆ", "ಮಂತ್ರಾಲಯ",
];
const GOVERNMENT_KEYWORDS_TA: &[&str] = &[
    "பிஎம் கிசான்", "ஆயுஷ்மான் பாரத்", "பிரதமர் ஆவாஸ் திட்டம்", "சுவச் பாரத்", "மனரேகா",
];
const GOVERNMENT_KEYWORDS_TE: &[&str] = &[
    "పిఎమ్ కిసాన్", "ఆయుష్మాన్ భారత్", "ప్రధానమంత్రి ఆవాస్ యోజన", "డిజిటల్ ఇండియా", "మనరేగా",
];
const GOVERNMENT_KEYWORDS_BN: &[&str] = &[
    "আয়ুষ্মান ভারত", "জল জীবন মিশন", "মনরেগা", "প্রধানমন্ত্রী আবাস যোজনা",
];
const GOVERNMENT_KEYWORDS_ML: &[&str] = &[
    "ആയുഷ്മാൻ ഭാരത്", "പ്രധാനമന്ത്രി ആവാസ് യോജന", "ജൽ ജീവൻ മിഷൻ", "സ്വച്ഛ് ഭാരത്",
];
const GOVERNMENT_KEYWORDS_MR: &[&str] = &[
    "प्रधानमंत्री आवास योजना", "उज्ज्वला योजना", "पीएम किसान", "स्वच्छ भारत मिशन",
];
const GOVERNMENT_KEYWORDS_GU: &[&str] = &[
    "ઉજ્જવલા યોજના", "મુદ્રા યોજના", "પ્રધાનમંત્રી આવાસ યોજના", "ડિજિટલ ઇન્ડિયા",
];
const GOVERNMENT_KEYWORDS_PA: &[&str] = &[
    "ਪ੍ਰਧਾਨ ਮੰਤਰੀ ਆਵਾਸ ਯੋਜਨਾ", "ਆਯੁਸ਼ਮਾਨ ਭਾਰਤ", "ਜਲ ਜੀਵਨ ਮਿਸ਼ਨ", "ਸਵੱਛ ਭਾਰਤ ਮਿਸ਼ਨ",
];
const GOVERNMENT_KEYWORDS_OR: &[&str] = &[
    "ଆୟୁଷ୍ମାନ ଭାରତ", "ପ୍ରଧାନମନ୍ତ୍ରୀ ଆବାସ ଯୋଜନା", "ଜଳ ଜୀବନ ମିଶନ", "ସ୍ୱଚ୍ଛ ଭାରତ ମିଶନ",
];

const GOVERNMENT_OTHER_LANGUAGES: &[(&str, &[&str])] = &[
    ("kn", GOVERNMENT_KEYWORDS_KN),
    ("ta", GOVERNMENT_KEYWORDS_TA),
    ("te", GOVERNMENT_KEYWORDS_TE),
    ("bn", GOVERNMENT_KEYWORDS_BN),
    ("ml", GOVERNMENT_KEYWORDS_ML),
    ("mr", GOVERNMENT_KEYWORDS_MR),
    ("gu", GOVERNMENT_KEYWORDS_GU),
    ("pa", GOVERNMENT_KEYWORDS_PA),
    ("or", GOVERNMENT_KEYWORDS_OR),
];

const POLITICAL_KEYWORDS_EN: &[&str] = &[
    "bjp", "congress", "aap", "tmc", "dmk", "shiv sena", "ncp", "political party",
    "election", "voting", "voter turnout", "election results", "exit poll",
    "rally", "political rally", "party convention", "opposition attacks",
    "party infighting", "slams", "blasts", "coalition", "political alliance",
];
const POLITICAL_KEYWORDS_HI: &[&str] = &[
    "भाजपा", "कांग्रेस", "चुनाव", "मतदान", "रैली", "गठबंधन",
];

const ENTERTAINMENT_KEYWORDS_EN: &[&str] = &[
    "bollywood", "hollywood", "movie", "film", "cinema", "actor", "actress",
    "celebrity", "box office", "trailer", "film festival", "web series", "ott platform",
];
const ENTERTAINMENT_KEYWORDS_HI: &[&str] = &[
    "बॉलीवुड", "फिल्म", "सिनेमा", "अभिनेता", "सेलिब्रिटी",
];

const SPORTS_KEYWORDS_EN: &[&str] = &[
    "cricket", "football", "hockey", "badminton", "tennis", "kabaddi", "olympics",
    "world cup", "ipl", "test match", "tournament", "championship", "medal", "trophy",
];
const SPORTS_KEYWORDS_HI: &[&str] = &["क्रिकेट", "फुटबॉल", "ओलंपिक", "खेल"];

const CRIME_KEYWORDS_EN: &[&str] = &[
    "murder", "robbery", "theft", "assault", "kidnapping",
    "accident", "road accident", "crime", "criminal", "fir", "arrest", "investigation",
];
const CRIME_KEYWORDS_HI: &[&str] = &["हत्या", "लूट", "चोरी", "दुर्घटना", "अपराध", "गिरफ्तारी"];

const BUSINESS_KEYWORDS_EN: &[&str] = &[
    "company", "startup", "business", "corporate", "ceo", "investment", "funding",
    "ipo", "stock market", "shares", "profit", "merger", "acquisition",
];
const BUSINESS_KEYWORDS_HI: &[&str] = &["कंपनी", "स्टार्टअप", "निवेश", "शेयर बाजार"];

fn category_table() -> [CategoryKeywords; 5] {
    [
        CategoryKeywords { category: ContentCategory::Government, weight: 2, en: GOVERNMENT_KEYWORDS_EN, hi: GOVERNMENT_KEYWORDS_HI, other: GOVERNMENT_OTHER_LANGUAGES },
        CategoryKeywords { category: ContentCategory::Political, weight: 2, en: POLITICAL_KEYWORDS_EN, hi: POLITICAL_KEYWORDS_HI, other: &[] },
        CategoryKeywords { category: ContentCategory::Entertainment, weight: 2, en: ENTERTAINMENT_KEYWORDS_EN, hi: ENTERTAINMENT_KEYWORDS_HI, other: &[] },
        CategoryKeywords { category: ContentCategory::Sports, weight: 2, en: SPORTS_KEYWORDS_EN, hi: SPORTS_KEYWORDS_HI, other: &[] },
        CategoryKeywords { category: ContentCategory::Crime, weight: 1, en: CRIME_KEYWORDS_EN, hi: CRIME_KEYWORDS_HI, other: &[] },
    ]
}

const OFFICIAL_SOURCE_MARKERS: &[&str] = &[" pib", "press information bureau", "pib.gov.in", "ministry of", "government of india", "भारत सरकार"];
const GOVERNMENT_INDICATOR_MARKERS: &[&str] = &["government scheme", "सरकारी योजना", "yojana", "योजना", "scheme", "pm ", "pradhan mantri", "प्रधानमंत्री"];

#[derive(Debug, Clone)]
pub struct CategorizeOutcome {
    pub category: ContentCategory,
    pub sub_category: String,
    pub confidence: f64,
    pub matched_keywords: Vec<String>,
    pub should_show_pib: bool,
    pub filter_reason: Option<String>,
}

/// Runs the §4.8/§4.9 content categorization over `title + summary`.
pub fn classify(title: &str, summary: &str, language: &str) -> CategorizeOutcome {
    let combined = format!("{title} {summary}").to_lowercase();

    if combined.trim().is_empty() {
        return CategorizeOutcome {
            category: ContentCategory::Other,
            sub_category: "Unknown".to_string(),
            confidence: 0.0,
            matched_keywords: Vec::new(),
            should_show_pib: false,
            filter_reason: Some("No content to classify".to_string()),
        };
    }

    if let Some(reason) = international_match(&combined) {
        return CategorizeOutcome {
            category: ContentCategory::International,
            sub_category: "Foreign News".to_string(),
            confidence: 1.0,
            matched_keywords: vec![reason.clone()],
            should_show_pib: false,
            filter_reason: Some(format!("International news: {reason}")),
        };
    }

    let mut scores: std::collections::HashMap<ContentCategory, i32> = std::collections::HashMap::new();
    let mut matched_keywords: Vec<String> = Vec::new();

    if OFFICIAL_SOURCE_MARKERS.iter().any(|m| combined.contains(m)) {
        *scores.entry(ContentCategory::Government).or_insert(0) += 20;
        matched_keywords.push("official_source".to_string());
    }
    if GOVERNMENT_INDICATOR_MARKERS.iter().any(|m| combined.contains(m)) {
        *scores.entry(ContentCategory::Government).or_insert(0) += 10;
        matched_keywords.push("government_indicator".to_string());
    }

    for entry in category_table() {
        let mut keywords: Vec<&str> = entry.en.to_vec();
        if language == "hi" {
            keywords.extend(entry.hi.iter().copied());
        }
        if let Some((_, extra)) = entry.other.iter().find(|(code, _)| *code == language) {
            keywords.extend(extra.iter().copied());
        }
        for keyword in keywords {
            if combined.contains(&keyword.to_lowercase()) {
                *scores.entry(entry.category).or_insert(0) += entry.weight;
                matched_keywords.push(keyword.to_string());
            }
        }
    }

    let (category, max_score) = scores
        .iter()
        .max_by_key(|(_, score)| **score)
        .map(|(c, s)| (*c, *s))
        .unwrap_or((ContentCategory::Other, 0));

    let (category, confidence) = if max_score <= 0 {
        (ContentCategory::Other, 0.0)
    } else {
        (category, (max_score as f64 / 10.0).min(1.0))
    };

    let sub_category = sub_category(category, &combined);
    let (should_show_pib, filter_reason) = should_show_pib(category, &sub_category, &combined);

    matched_keywords.truncate(10);

    CategorizeOutcome {
        category,
        sub_category,
        confidence,
        matched_keywords,
        should_show_pib,
        filter_reason,
    }
}

fn sub_category(category: ContentCategory, text: &str) -> String {
    match category {
        ContentCategory::Government => {
            if ["scheme", "योजना", "yojana"].iter().any(|k| text.contains(k)) {
                "Scheme Implementation"
            } else if ["policy", "नीति", "announcement", "घोषणा"].iter().any(|k| text.contains(k)) {
                "Policy Announcement"
            } else if ["delay", "देरी", "grievance", "शिकायत", "complaint"].iter().any(|k| text.contains(k)) {
                "Public Grievance"
            } else if ["project", "परियोजना", "infrastructure", "बुनियादी"].iter().any(|k| text.contains(k)) {
                "Infrastructure Project"
            } else if ["fake", "misinformation", "false", "गलत"].iter().any(|k| text.contains(k)) {
                "Misinformation Alert"
            } else {
                "Government Services"
            }
        }
        ContentCategory::Political => {
            if ["election", "चुनाव", "voting", "मतदान"].iter().any(|k| text.contains(k)) {
                "Election Coverage"
            } else if ["rally", "रैली", "campaign", "प्रचार"].iter().any(|k| text.contains(k)) {
                "Campaign Activity"
            } else if ["criticize", "आलोचना", "slam", "attack", "हमला"].iter().any(|k| text.contains(k)) {
                "Party Criticism"
            } else if ["alliance", "गठबंधन", "coalition"].iter().any(|k| text.contains(k)) {
                "Coalition Politics"
            } else {
                "Party Activity"
            }
        }
        ContentCategory::Entertainment => {
            if ["movie", "film", "फिल्म", "cinema"].iter().any(|k| text.contains(k)) {
                "Movies"
            } else if ["tv", "web series", "ott"].iter().any(|k| text.contains(k)) {
                "TV/OTT"
            } else if ["celebrity", "actor", "actress", "अभिनेता"].iter().any(|k| text.contains(k)) {
                "Celebrity News"
            } else {
                "Entertainment"
            }
        }
        ContentCategory::Sports => {
            if ["cricket", "क्रिकेट"].iter().any(|k| text.contains(k)) {
                "Cricket"
            } else if ["football", "फुटबॉल"].iter().any(|k| text.contains(k)) {
                "Football"
            } else if ["olympics", "ओलंपिक", "medal", "पदक"].iter().any(|k| text.contains(k)) {
                "Olympics/International"
            } else {
                "Sports"
            }
        }
        ContentCategory::Crime => {
            if ["accident", "दुर्घटना"].iter().any(|k| text.contains(k)) {
                "Accident"
            } else if ["murder", "हत्या", "crime", "अपराध"].iter().any(|k| text.contains(k)) {
                "Crime"
            } else {
                "Crime/Accident"
            }
        }
        ContentCategory::Business => {
            if ["startup", "स्टार्टअप"].iter().any(|k| text.contains(k)) {
                "Startup"
            } else if ["stock", "share", "शेयर"].iter().any(|k| text.contains(k)) {
                "Stock Market"
            } else {
                "Corporate"
            }
        }
        ContentCategory::International => "Foreign News",
        ContentCategory::Other => "Uncategorized",
    }
    .to_string()
}

fn should_show_pib(category: ContentCategory, sub_category: &str, text: &str) -> (bool, Option<String>) {
    match category {
        ContentCategory::Government => (true, None),
        ContentCategory::Political => {
            let exceptions = ["government response", "ministry statement", "official response", "सरकार प्रतिक्रिया", "मंत्रालय बयान"];
            if exceptions.iter().any(|k| text.contains(k)) {
                (true, None)
            } else {
                (false, Some(format!("Political content: {sub_category}")))
            }
        }
        ContentCategory::Entertainment => (false, Some(format!("Entertainment content: {sub_category}"))),
        ContentCategory::Sports => {
            if ["khelo india", "खेलो इंडिया", "sports ministry", "खेल मंत्रालय"].iter().any(|k| text.contains(k)) {
                (true, None)
            } else {
                (false, Some(format!("Sports content: {sub_category}")))
            }
        }
        ContentCategory::Crime => {
            let exceptions = ["minister announces", "government compensation", "official statement", "मंत्री घोषणा", "सरकार मुआवजा", "आधिकारिक बयान"];
            if exceptions.iter().any(|k| text.contains(k)) {
                (true, None)
            } else {
                (false, Some(format!("Crime/Accident: {sub_category}")))
            }
        }
        ContentCategory::Business => {
            let exceptions = ["government regulation", "ministry approval", "government policy", "सरकार नियमन", "मंत्रालय अनुमोदन"];
            if exceptions.iter().any(|k| text.contains(k)) {
                (true, None)
            } else {
                (false, Some(format!("Business content: {sub_category}")))
            }
        }
        ContentCategory::International => (false, Some("Foreign News".to_string())),
        ContentCategory::Other => (false, Some(format!("Uncategorized: {sub_category}"))),
    }
}

/// Applies a [`CategorizeOutcome`] onto an [`EnrichedItem`]'s C9 fields.
pub fn apply(item: &mut EnrichedItem, outcome: CategorizeOutcome) {
    item.content_category = outcome.category;
    item.content_sub_category = outcome.sub_category;
    item.classification_confidence = outcome.confidence;
    item.classification_keywords = outcome.matched_keywords;
    item.should_show_pib = outcome.should_show_pib;
    item.filter_reason = outcome.filter_reason;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn official_source_is_government() {
        let outcome = classify("Ministry of Health announces new scheme", "PIB press release", "en");
        assert_eq!(outcome.category, ContentCategory::Government);
        assert!(outcome.should_show_pib);
    }

    #[test]
    fn international_news_is_rejected_first() {
        let outcome = classify("Bangladesh PM Sheikh Hasina addresses rally in Dhaka", "", "en");
        assert_eq!(outcome.category, ContentCategory::International);
        assert!(!outcome.should_show_pib);
    }

    #[test]
    fn entertainment_is_filtered() {
        let outcome = classify("Bollywood actor praises new film release", "Box office numbers strong", "en");
        assert_eq!(outcome.category, ContentCategory::Entertainment);
        assert!(!outcome.should_show_pib);
    }

    #[test]
    fn sports_with_khelo_india_is_shown() {
        let outcome = classify("Khelo India games inaugurated by sports ministry", "cricket tournament begins", "en");
        assert!(outcome.should_show_pib);
    }

    #[test]
    fn crime_with_minister_announcement_is_shown() {
        let outcome = classify("Minister announces government compensation after accident", "road accident victims helped", "en");
        assert!(outcome.should_show_pib);
    }

    #[test]
    fn kannada_government_keyword_is_recognized() {
        let outcome = classify("ಆಯುಷ್ಮಾನ್ ಭಾರತ್ ಯೋಜನೆ ವಿಸ್ತರಣೆ", "", "kn");
        assert_eq!(outcome.category, ContentCategory::Government);
    }

    #[test]
    fn empty_text_is_uncategorized() {
        let outcome = classify("", "", "en");
        assert_eq!(outcome.category, ContentCategory::Other);
        assert_eq!(outcome.confidence, 0.0);
    }
}
