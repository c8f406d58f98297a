//! Locating the skills payload inside the push fragments.
//!
//! Data fragments look like `<tag>:<json>`, where the tag is a per-chunk
//! index and the JSON is an arbitrary RSC tree. Somewhere inside one of
//! those trees sits an object carrying both skill collections; the walk
//! below finds the first one.

use serde_json::{Map, Value};

/// Key for the all-time skill listing.
pub const ALL_TIME_KEY: &str = "allTimeSkills";
/// Key for the trending skill listing.
pub const TRENDING_KEY: &str = "trendingSkills";

const REQUIRED_KEYS: [&str; 2] = [ALL_TIME_KEY, TRENDING_KEY];

/// Find the first object carrying both skill collections across all
/// fragments.
///
/// Fragments are pre-filtered textually before paying for a JSON parse:
/// both key names must appear as substrings, and the chunk separator colon
/// must be present. Fragments that fail to parse are skipped, not fatal.
/// `None` means no fragment qualified, which is distinct from finding a
/// payload whose listings are empty.
pub fn find_skills_payload<I>(fragments: I) -> Option<Map<String, Value>>
where
    I: IntoIterator<Item = String>,
{
    for (index, fragment) in fragments.into_iter().enumerate() {
        if !(fragment.contains(ALL_TIME_KEY) && fragment.contains(TRENDING_KEY)) {
            continue;
        }
        let Some((_, body)) = fragment.split_once(':') else {
            continue;
        };
        let Ok(data) = serde_json::from_str::<Value>(body) else {
            tracing::debug!("fragment {index} is not valid JSON, skipping");
            continue;
        };
        if let Some(object) = find_object_with_keys(&data, &REQUIRED_KEYS) {
            tracing::debug!("skills payload located in fragment {index}");
            return Some(object.clone());
        }
    }
    None
}

/// Depth-first search for the first object containing every required key.
///
/// Objects recurse into their values in document key order, arrays into
/// their elements in order; the first qualifying object wins and the search
/// stops there.
pub fn find_object_with_keys<'a>(
    value: &'a Value,
    required: &[&str],
) -> Option<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => {
            if required.iter().all(|key| map.contains_key(*key)) {
                return Some(map);
            }
            for child in map.values() {
                if let Some(found) = find_object_with_keys(child, required) {
                    return Some(found);
                }
            }
            None
        }
        Value::Array(items) => {
            for item in items {
                if let Some(found) = find_object_with_keys(item, required) {
                    return Some(found);
                }
            }
            None
        }
        _ => None,
    }
}
