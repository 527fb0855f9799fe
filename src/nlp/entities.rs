//! Named-entity extraction (§4.7, §9 Open Question). The source carries two
//! conflicting `EntityExtractor` definitions; only the stub — returning an
//! empty list — is reliably exercised. Per §9 this is treated as optional
//! with an empty-default contract: gazetteer phrase matches (schemes,
//! ministries) supersede with confidence 1.0 when present, since those are
//! already fully implemented elsewhere in this crate; no general NER model
//! is wired in.

use crate::gazetteer;
use crate::model::Entity;

/// Extracts entities from `text` by gazetteer phrase matching only. Returns
/// an empty list when nothing matches — never an error.
pub fn extract_entities(text: &str, detected_language: Option<&str>) -> Vec<Entity> {
    let mut entities = Vec::new();

    for m in gazetteer::find_schemes_in_text(text, detected_language) {
        if let Some(start) = text.to_lowercase().find(&m.matched_alias.to_lowercase()) {
            entities.push(Entity {
                text: m.matched_alias.clone(),
                label: "SCHEME".to_string(),
                start,
                end: start + m.matched_alias.len(),
                confidence: 1.0,
                entity_type: "scheme".to_string(),
            });
        }
    }

    for ministry in gazetteer::detect_ministries(text) {
        if let Some(start) = text.to_lowercase().find(&ministry) {
            entities.push(Entity {
                text: ministry.clone(),
                label: "MINISTRY".to_string(),
                start,
                end: start + ministry.len(),
                confidence: 1.0,
                entity_type: "ministry".to_string(),
            });
        }
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_scheme_entity() {
        let entities = extract_entities("PM Modi launches Ayushman Bharat expansion", None);
        assert!(entities.iter().any(|e| e.entity_type == "scheme"));
    }

    #[test]
    fn no_matches_yields_empty() {
        assert!(extract_entities("The weather was pleasant today", None).is_empty());
    }
}
