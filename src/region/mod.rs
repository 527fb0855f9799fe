//! C10 — Region Classifier.
//!
//! Scans title, then summary, then the first 1000 characters of content (in
//! that order, per §4.9) for a city or state mention from the gazetteer
//! alias map, returning the first match found. A REDESIGN FLAG calls for
//! swapping the hardcoded alias lookup for a pluggable hint source later
//! (e.g. a per-source declared region, or a model-based geotagger); the
//! [`RegionHint`] trait is that seam, with the gazetteer as its only
//! implementation today.

use crate::gazetteer;
use crate::model::EnrichedItem;

const CONTENT_SCAN_CHARS: usize = 1000;

/// A source of region hints consulted by [`classify`]. The gazetteer-backed
/// [`GazetteerHint`] is the only implementation; a future source (declared
/// per-feed region, model-based geotagging) can be added without touching
/// callers.
pub trait RegionHint: Send + Sync {
    fn hint(&self, text: &str) -> Option<String>;
}

/// Looks up any city/state mention in `text` against the gazetteer alias map.
pub struct GazetteerHint;

impl RegionHint for GazetteerHint {
    fn hint(&self, text: &str) -> Option<String> {
        find_location_mention(text)
    }
}

/// Scans `text`, word by word and as contiguous bigrams, for any known city
/// or state alias. Unlike [`gazetteer::map_to_state`] (which expects the
/// whole input to *be* a location), this searches free-form prose.
fn find_location_mention(text: &str) -> Option<String> {
    let lower = text.to_lowercase();

    for (city, state) in gazetteer::regions::CITY_STATE.iter() {
        if lower.contains(city) {
            return Some((*state).to_string());
        }
    }
    for (variation, state) in gazetteer::regions::STATE_VARIATIONS.iter() {
        if lower.contains(variation) {
            return Some((*state).to_string());
        }
    }
    None
}

/// Runs the §4.9 region classification: title, then summary, then the first
/// [`CONTENT_SCAN_CHARS`] characters of content; first match wins.
pub fn classify(title: &str, summary: &str, content: &str, hint: &dyn RegionHint) -> Option<String> {
    if let Some(region) = hint.hint(title) {
        return Some(region);
    }
    if let Some(region) = hint.hint(summary) {
        return Some(region);
    }
    let content_prefix: String = content.chars().take(CONTENT_SCAN_CHARS).collect();
    hint.hint(&content_prefix)
}

/// Convenience wrapper using the default [`GazetteerHint`] source.
pub fn classify_default(title: &str, summary: &str, content: &str) -> Option<String> {
    classify(title, summary, content, &GazetteerHint)
}

/// Applies the region classification onto an [`EnrichedItem`].
pub fn apply(item: &mut EnrichedItem) {
    item.region = classify_default(&item.title, &item.summary, &item.content);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_match_wins_over_summary() {
        let region = classify_default(
            "Mumbai civic body launches new scheme",
            "Officials in Chennai welcomed the announcement",
            "",
        );
        assert_eq!(region, Some("Maharashtra".to_string()));
    }

    #[test]
    fn falls_back_to_summary_then_content() {
        let region = classify_default("National scheme rollout begins", "Implementation starts in Kerala", "");
        assert_eq!(region, Some("Kerala".to_string()));
    }

    #[test]
    fn falls_back_to_content_prefix() {
        let region = classify_default("National scheme rollout begins", "", "Officials gathered in Jaipur today");
        assert_eq!(region, Some("Rajasthan".to_string()));
    }

    #[test]
    fn no_mention_yields_none() {
        assert_eq!(classify_default("National scheme rollout begins", "Ministry confirms timeline", ""), None);
    }
}
