//! City/state alias map backing the Region Classifier (C10). Grounded on
//! the source's `CITY_STATE_MAP` / `STATE_VARIATIONS` tables — a curated
//! list of major Indian cities and alternate state-name spellings, each
//! mapped to its canonical state/UT.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// City (lowercase) → state/UT. Not exhaustive — covers state capitals and
/// major metros, which is where the overwhelming majority of India-datelined
/// government news is filed from.
pub static CITY_STATE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("bangalore", "Karnataka"),
        ("bengaluru", "Karnataka"),
        ("mysore", "Karnataka"),
        ("mysuru", "Karnataka"),
        ("mangalore", "Karnataka"),
        ("hubli", "Karnataka"),
        ("mumbai", "Maharashtra"),
        ("pune", "Maharashtra"),
        ("nagpur", "Maharashtra"),
        ("thane", "Maharashtra"),
        ("nashik", "Maharashtra"),
        ("chennai", "Tamil Nadu"),
        ("coimbatore", "Tamil Nadu"),
        ("madurai", "Tamil Nadu"),
        ("tiruchirappalli", "Tamil Nadu"),
        ("salem", "Tamil Nadu"),
        ("delhi", "Delhi"),
        ("new delhi", "Delhi"),
        ("newdelhi", "Delhi"),
        ("kolkata", "West Bengal"),
        ("calcutta", "West Bengal"),
        ("howrah", "West Bengal"),
        ("siliguri", "West Bengal"),
        ("ahmedabad", "Gujarat"),
        ("surat", "Gujarat"),
        ("vadodara", "Gujarat"),
        ("rajkot", "Gujarat"),
        ("gandhinagar", "Gujarat"),
        ("jaipur", "Rajasthan"),
        ("jodhpur", "Rajasthan"),
        ("udaipur", "Rajasthan"),
        ("kota", "Rajasthan"),
        ("lucknow", "Uttar Pradesh"),
        ("kanpur", "Uttar Pradesh"),
        ("agra", "Uttar Pradesh"),
        ("varanasi", "Uttar Pradesh"),
        ("noida", "Uttar Pradesh"),
        ("ghaziabad", "Uttar Pradesh"),
        ("prayagraj", "Uttar Pradesh"),
        ("bhopal", "Madhya Pradesh"),
        ("indore", "Madhya Pradesh"),
        ("gwalior", "Madhya Pradesh"),
        ("jabalpur", "Madhya Pradesh"),
        ("patna", "Bihar"),
        ("gaya", "Bihar"),
        ("bhagalpur", "Bihar"),
        ("hyderabad", "Telangana"),
        ("warangal", "Telangana"),
        ("visakhapatnam", "Andhra Pradesh"),
        ("vijayawada", "Andhra Pradesh"),
        ("amaravati", "Andhra Pradesh"),
        ("thiruvananthapuram", "Kerala"),
        ("kochi", "Kerala"),
        ("cochin", "Kerala"),
        ("kozhikode", "Kerala"),
        ("bhubaneswar", "Odisha"),
        ("cuttack", "Odisha"),
        ("chandigarh", "Chandigarh"),
        ("ludhiana", "Punjab"),
        ("amritsar", "Punjab"),
        ("jalandhar", "Punjab"),
        ("faridabad", "Haryana"),
        ("gurugram", "Haryana"),
        ("gurgaon", "Haryana"),
        ("panipat", "Haryana"),
        ("ranchi", "Jharkhand"),
        ("jamshedpur", "Jharkhand"),
        ("dhanbad", "Jharkhand"),
        ("guwahati", "Assam"),
        ("dispur", "Assam"),
        ("dehradun", "Uttarakhand"),
        ("haridwar", "Uttarakhand"),
        ("shimla", "Himachal Pradesh"),
        ("dharamshala", "Himachal Pradesh"),
        ("srinagar", "Jammu and Kashmir"),
        ("jammu", "Jammu and Kashmir"),
        ("panaji", "Goa"),
        ("margao", "Goa"),
        ("raipur", "Chhattisgarh"),
        ("bhilai", "Chhattisgarh"),
        ("agartala", "Tripura"),
        ("shillong", "Meghalaya"),
        ("imphal", "Manipur"),
        ("kohima", "Nagaland"),
        ("itanagar", "Arunachal Pradesh"),
        ("aizawl", "Mizoram"),
        ("gangtok", "Sikkim"),
        ("puducherry", "Puducherry"),
        ("pondicherry", "Puducherry"),
        ("leh", "Ladakh"),
        ("kargil", "Ladakh"),
        ("kavaratti", "Lakshadweep"),
        ("port blair", "Andaman and Nicobar Islands"),
        ("silvassa", "Dadra and Nagar Haveli and Daman and Diu"),
        ("daman", "Dadra and Nagar Haveli and Daman and Diu"),
    ])
});

/// Alternate spellings of state names that don't already appear as a
/// `CITY_STATE` value.
pub static STATE_VARIATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("karnataka", "Karnataka"),
        ("maharashtra", "Maharashtra"),
        ("tamil nadu", "Tamil Nadu"),
        ("tamilnadu", "Tamil Nadu"),
        ("west bengal", "West Bengal"),
        ("westbengal", "West Bengal"),
        ("gujarat", "Gujarat"),
        ("rajasthan", "Rajasthan"),
        ("uttar pradesh", "Uttar Pradesh"),
        ("uttarpradesh", "Uttar Pradesh"),
        ("madhya pradesh", "Madhya Pradesh"),
        ("madhyapradesh", "Madhya Pradesh"),
        ("bihar", "Bihar"),
        ("telangana", "Telangana"),
        ("andhra pradesh", "Andhra Pradesh"),
        ("andhrapradesh", "Andhra Pradesh"),
        ("kerala", "Kerala"),
        ("odisha", "Odisha"),
        ("orissa", "Odisha"),
        ("punjab", "Punjab"),
        ("haryana", "Haryana"),
        ("jharkhand", "Jharkhand"),
        ("assam", "Assam"),
        ("chandigarh", "Chandigarh"),
        ("ladakh", "Ladakh"),
        ("lakshadweep", "Lakshadweep"),
        ("andaman and nicobar islands", "Andaman and Nicobar Islands"),
        ("andaman and nicobar", "Andaman and Nicobar Islands"),
        ("dadra and nagar haveli and daman and diu", "Dadra and Nagar Haveli and Daman and Diu"),
    ])
});

/// Maps a free-form location string (city or state, any case) to its
/// canonical state/UT. Tries exact lookups first, then a substring match
/// against the city table for partial mentions ("greater Mumbai region").
pub fn map_to_state(location: &str) -> Option<&'static str> {
    let lower = location.to_lowercase();
    let trimmed = lower.trim();

    if let Some(state) = CITY_STATE.get(trimmed) {
        return Some(state);
    }
    if let Some(state) = STATE_VARIATIONS.get(trimmed) {
        return Some(state);
    }
    CITY_STATE
        .iter()
        .find(|(city, _)| trimmed.contains(*city) || city.contains(trimmed.as_str()))
        .map(|(_, state)| *state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_city_to_state() {
        assert_eq!(map_to_state("Bengaluru"), Some("Karnataka"));
        assert_eq!(map_to_state("mumbai"), Some("Maharashtra"));
    }

    #[test]
    fn maps_state_variation() {
        assert_eq!(map_to_state("Orissa"), Some("Odisha"));
    }

    #[test]
    fn unknown_location_is_none() {
        assert_eq!(map_to_state("Atlantis"), None);
    }

    #[test]
    fn chandigarh_maps_to_its_own_union_territory() {
        assert_eq!(map_to_state("Chandigarh"), Some("Chandigarh"));
    }

    #[test]
    fn all_eight_union_territories_are_covered() {
        for ut in [
            "delhi",
            "jammu and kashmir",
            "puducherry",
            "chandigarh",
            "ladakh",
            "lakshadweep",
            "andaman and nicobar islands",
            "dadra and nagar haveli and daman and diu",
        ] {
            assert!(map_to_state(ut).is_some(), "no mapping for {ut}");
        }
    }
}
