//! C6 — Early Rejector.
//!
//! Runs ahead of any NLP work, scanning `title + summary` for three classes
//! of content PIB officers never need to see: international news, pure
//! entertainment/sports, and personal tributes. A cheap GOI-keyword pre-gate
//! also lives here — an article with zero keyword hits in its detected
//! language is dropped before it reaches the NLP batcher at all, mirroring
//! the two-stage filter (fast keyword gate, then the accurate C8 classifier
//! downstream) this was distilled from.

use tracing::debug;

/// Neighboring-country / foreign-power keyword groups, each carrying its own
/// India-government exception carve-out, grounded on the source's
/// `is_international_news`.
struct IntlGroup {
    label: &'static str,
    keywords: &'static [&'static str],
    exceptions: &'static [&'static str],
}

const INTL_GROUPS: &[IntlGroup] = &[
    IntlGroup {
        label: "Bangladesh news",
        keywords: &[
            "bangladesh", "dhaka", "sheikh hasina", "khaleda zia", "rohingya",
            "cox's bazar", "chittagong", "sylhet", "awami league",
            "বাংলাদেশ", "ঢাকা", "শেখ হাসিনা",
        ],
        exceptions: &["ministry", "government scheme", "pm modi", "indian pm", "प्रधानमंत्री", "मंत्रालय"],
    },
    IntlGroup {
        label: "Pakistan news",
        keywords: &["pakistan", "islamabad", "imran khan", "nawaz sharif", "karachi", "lahore", "peshawar"],
        exceptions: &["ministry", "government", "pm modi"],
    },
    IntlGroup {
        label: "Sri Lanka news",
        keywords: &["sri lanka", "colombo", "gotabaya", "mahinda rajapaksa"],
        exceptions: &["ministry", "government scheme"],
    },
    IntlGroup {
        label: "Neighboring country news",
        keywords: &["nepal", "kathmandu", "bhutan", "thimphu", "myanmar", "yangon", "afghanistan", "kabul", "taliban"],
        exceptions: &["ministry", "government", "pm modi"],
    },
    IntlGroup {
        label: "International conflict",
        keywords: &[
            "russia ukraine", "israel palestine", "gaza", "west bank", "china taiwan",
            "north korea", "iran nuclear", "syria war", "ukraine", "zelensky", "putin",
            "israel", "hamas", "netanyahu",
        ],
        exceptions: &["india condemns", "india supports", "india's stand", "indian government", "mea statement"],
    },
    IntlGroup {
        label: "Foreign leader",
        keywords: &[
            "donald trump", "joe biden", "xi jinping", "erdogan", "macron",
            "justin trudeau", "boris johnson", "kim jong", "anthony blinken",
        ],
        exceptions: &["pm modi", "indian pm", "india visit", "bilateral", "भारत दौरा"],
    },
];

const ENTERTAINMENT_SPORTS_KEYWORDS: &[&str] = &[
    "bollywood", "hollywood", "tollywood", "movie", "film", "cinema", "actor", "actress",
    "celebrity", "box office", "trailer", "film festival", "web series", "ott platform",
    "बॉलीवुड", "फिल्म", "सिनेमा", "अभिनेता", "सेलिब्रिटी",
    "cricket", "football", "hockey", "badminton", "tennis", "kabaddi", "olympics", "ipl",
    "tournament", "championship", "क्रिकेट", "खेल", "टूर्नामेंट",
];

const TRIBUTE_IDIOMS: &[&str] = &[
    "paid tribute", "श्रद्धांजलि", "condolence", "शोक", "death anniversary", "पुण्यतिथि",
    "remembering", "स्मरण", "demise", "निधन", "passed away", "गुजर गए",
];

/// Minimal per-language GOI keyword sets for the pre-gate. A focused subset
/// of C8's fuller dictionary — this stage only needs to know "zero or more",
/// not which term matched.
const PRE_GATE_KEYWORDS_EN: &[&str] = &[
    "government", "ministry", "minister", "scheme", "yojana", "policy", "pm modi",
    "prime minister", "cabinet", "parliament", "centre", "pib", "sarkar",
];
const PRE_GATE_KEYWORDS_HI: &[&str] = &[
    "सरकार", "मंत्रालय", "मंत्री", "योजना", "नीति", "प्रधानमंत्री", "कैबिनेट", "संसद",
];

fn pre_gate_keywords(language: &str) -> &'static [&'static str] {
    match language {
        "hi" | "mr" => PRE_GATE_KEYWORDS_HI,
        _ => PRE_GATE_KEYWORDS_EN,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RejectOutcome {
    pub rejected: bool,
    pub reason: Option<String>,
}

fn accept() -> RejectOutcome {
    RejectOutcome { rejected: false, reason: None }
}

fn reject(reason: String) -> RejectOutcome {
    RejectOutcome { rejected: true, reason: Some(reason) }
}

/// Checks `title + summary` against the international-news word lists, with
/// each group's own India-government exception. Used both here and by C9
/// (categorization checks international status first, same rule).
pub fn international_match(text: &str) -> Option<String> {
    for group in INTL_GROUPS {
        for keyword in group.keywords {
            if text.contains(keyword) {
                if group.exceptions.iter().any(|e| text.contains(e)) {
                    continue;
                }
                return Some(format!("{}: {keyword}", group.label));
            }
        }
    }
    None
}

/// Runs the full §4.6 early-rejection pipeline over `title + summary`
/// (already lowercased by the caller's text normalization upstream — this
/// function lowercases defensively so callers don't have to coordinate).
pub fn check(title: &str, summary: &str, detected_language: &str) -> RejectOutcome {
    let combined = format!("{title} {summary}").to_lowercase();

    if let Some(reason) = international_match(&combined) {
        debug!(reason = %reason, "early rejector: international news");
        return reject(format!("International news: {reason}"));
    }

    if let Some(keyword) = TRIBUTE_IDIOMS.iter().find(|k| combined.contains(**k)) {
        debug!(keyword, "early rejector: tribute");
        return reject(format!("Personal tribute: {keyword}"));
    }

    if let Some(keyword) = ENTERTAINMENT_SPORTS_KEYWORDS.iter().find(|k| combined.contains(**k)) {
        debug!(keyword, "early rejector: entertainment/sports");
        return reject(format!("Entertainment/Sports: {keyword}"));
    }

    let keywords = pre_gate_keywords(detected_language);
    if !keywords.iter().any(|k| combined.contains(k)) {
        debug!("early rejector: no GOI keywords in detected language");
        return reject("No GOI keywords found".to_string());
    }

    accept()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_international_news() {
        let outcome = check("Bangladesh PM Sheikh Hasina addresses rally in Dhaka", "", "en");
        assert!(outcome.rejected);
        assert!(outcome.reason.unwrap().contains("Bangladesh"));
    }

    #[test]
    fn allows_india_bangladesh_government_relations() {
        let outcome = check(
            "Indian government ministry discusses India-Bangladesh relations with PM Modi",
            "External affairs ministry statement",
            "en",
        );
        assert!(!outcome.rejected);
    }

    #[test]
    fn rejects_entertainment() {
        let outcome = check("Bollywood actor praises new film release", "", "en");
        assert!(outcome.rejected);
    }

    #[test]
    fn rejects_tribute() {
        let outcome = check("Nation pays tribute on death anniversary of leader", "remembering his legacy", "en");
        assert!(outcome.rejected);
    }

    #[test]
    fn rejects_when_no_goi_keywords_present() {
        let outcome = check("Local bakery wins award for best bread", "Community celebrates the achievement", "en");
        assert!(outcome.rejected);
        assert_eq!(outcome.reason, Some("No GOI keywords found".to_string()));
    }

    #[test]
    fn accepts_government_scheme_news() {
        let outcome = check(
            "Ministry of Health launches new Ayushman Bharat scheme expansion",
            "Government announces coverage for 10 crore families",
            "en",
        );
        assert!(!outcome.rejected);
    }

    #[test]
    fn accepts_hindi_government_news() {
        let outcome = check("सरकार ने मनरेगा के तहत मजदूरी बढ़ाई", "मंत्रालय ने योजना की घोषणा की", "hi");
        assert!(!outcome.rejected);
    }
}
