use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named central-government program. Canonical name plus per-language
/// aliases are the matching unit for relevance (§C8) and for PIB-alert
/// reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scheme {
    pub canonical_name: String,
    pub ministry: String,
    pub english_aliases: Vec<String>,
    pub regional_aliases: HashMap<String, Vec<String>>,
    pub tags: Vec<String>,
}

impl Scheme {
    /// All surface forms (English and regional) this scheme can be matched
    /// on, lowercased for case-insensitive comparison.
    pub fn all_aliases_lower(&self) -> Vec<String> {
        let mut aliases: Vec<String> = self
            .english_aliases
            .iter()
            .map(|a| a.to_lowercase())
            .collect();
        for regional in self.regional_aliases.values() {
            aliases.extend(regional.iter().map(|a| a.to_lowercase()));
        }
        aliases
    }
}
