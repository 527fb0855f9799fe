//! Zero-shot topic labeling (§4.7). Optional: when disabled (`NLP_ENABLED`
//! false, or the caller opts out), emits an empty list. When enabled, scores
//! a fixed label set by keyword co-occurrence — standing in for the
//! zero-shot classifier the source used, since no zero-shot model-runtime
//! crate is part of the adopted dependency stack — and keeps the top 5
//! labels clearing a 0.35 threshold.

pub const TOPIC_LABELS: &[&str] = &[
    "Economy", "Politics", "Health", "Education", "Agriculture", "Defense",
    "Infrastructure", "Environment", "Technology", "Sports", "Entertainment",
    "Crime", "International Relations", "Social Welfare", "Employment", "Energy",
    "Transportation", "Judiciary", "Disaster Management", "Women and Child Development",
];

const THRESHOLD: f64 = 0.35;
const MAX_TOPICS: usize = 5;

fn topic_keywords(label: &str) -> &'static [&'static str] {
    match label {
        "Economy" => &["economy", "gdp", "inflation", "fiscal", "budget", "finance"],
        "Politics" => &["government", "parliament", "minister", "cabinet", "policy"],
        "Health" => &["health", "hospital", "vaccine", "disease", "ayushman", "medical"],
        "Education" => &["education", "school", "university", "scholarship", "student"],
        "Agriculture" => &["agriculture", "farmer", "crop", "irrigation", "kisan"],
        "Defense" => &["defense", "defence", "army", "military", "border security"],
        "Infrastructure" => &["infrastructure", "highway", "railway", "port", "bridge"],
        "Environment" => &["environment", "pollution", "climate", "forest", "river"],
        "Technology" => &["technology", "digital", "internet", "software", "startup"],
        "Sports" => &["sports", "cricket", "olympics", "tournament", "athlete"],
        "Entertainment" => &["film", "bollywood", "celebrity", "movie", "cinema"],
        "Crime" => &["crime", "arrest", "police", "investigation", "fir"],
        "International Relations" => &["bilateral", "diplomatic", "foreign", "embassy", "summit"],
        "Social Welfare" => &["welfare", "pension", "subsidy", "beneficiary", "scheme"],
        "Employment" => &["employment", "job", "unemployment", "recruitment", "mgnrega"],
        "Energy" => &["energy", "power", "electricity", "solar", "coal"],
        "Transportation" => &["transport", "metro", "airport", "road", "railway"],
        "Judiciary" => &["court", "judge", "verdict", "judiciary", "tribunal"],
        "Disaster Management" => &["disaster", "flood", "earthquake", "relief", "cyclone"],
        "Women and Child Development" => &["women", "child", "beti", "anganwadi", "maternity"],
        _ => &[],
    }
}

/// Scores `text` against [`TOPIC_LABELS`] and returns up to 5 labels whose
/// keyword-density score clears [`THRESHOLD`].
pub fn classify_topics(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut scored: Vec<(&str, f64)> = TOPIC_LABELS
        .iter()
        .map(|label| {
            let keywords = topic_keywords(label);
            let hits = keywords.iter().filter(|k| lower.contains(**k)).count();
            let score = if keywords.is_empty() {
                0.0
            } else {
                hits as f64 / keywords.len() as f64
            };
            (*label, score)
        })
        .filter(|(_, score)| *score >= THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
    scored.truncate(MAX_TOPICS);
    scored.into_iter().map(|(label, _)| label.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_health_topic() {
        let topics = classify_topics("New health scheme launched for hospital and vaccine coverage");
        assert!(topics.contains(&"Health".to_string()));
    }

    #[test]
    fn unrelated_text_yields_no_topics() {
        assert!(classify_topics("A quiet afternoon in the park").is_empty());
    }

    #[test]
    fn caps_at_five_topics() {
        let text = "economy gdp inflation fiscal budget finance government parliament minister \
                    cabinet policy health hospital vaccine disease ayushman medical education school \
                    university scholarship student agriculture farmer crop irrigation kisan";
        let topics = classify_topics(text);
        assert!(topics.len() <= 5);
    }
}
