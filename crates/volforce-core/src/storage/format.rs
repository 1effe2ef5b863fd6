use serde_json::Value as JsonValue;
use tracing::{info, warn};

use crate::config::seed;
use crate::error::Result;
use crate::play::{Play, PlayFields};

/// The collection a fresh store starts with.
pub fn seed_plays() -> Vec<Play> {
    vec![Play::new(
        PlayFields::new()
            .name(seed::NAME)
            .level(seed::LEVEL)
            .score(seed::SCORE)
            .clear(seed::CLEAR),
    )]
}

/// Rebuild plays from the contents of a store slot.
///
/// Absent, empty, or unreadable contents yield [`seed_plays`]. Each element
/// of the stored array goes through the default-filling constructor, so a
/// missing or malformed field only loses that field.
pub fn decode_plays(contents: Option<&str>) -> Vec<Play> {
    let Some(contents) = contents.filter(|c| !c.trim().is_empty()) else {
        info!("No saved plays, starting from the seed play");
        return seed_plays();
    };

    let records = match serde_json::from_str::<JsonValue>(contents) {
        Ok(JsonValue::Array(records)) => records,
        Ok(other) => {
            warn!("Saved plays are not a JSON array (found {}), starting over", json_kind(&other));
            return seed_plays();
        }
        Err(e) => {
            warn!("Failed to parse saved plays: {}, starting over", e);
            return seed_plays();
        }
    };

    if records.is_empty() {
        return seed_plays();
    }

    records
        .iter()
        .map(|record| Play::new(PlayFields::from_json_lossy(record)))
        .collect()
}

/// Serialize plays to the stored `[{name, level, score, clear}, ...]` form.
pub fn encode_plays(plays: &[Play]) -> Result<String> {
    Ok(serde_json::to_string_pretty(plays)?)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
