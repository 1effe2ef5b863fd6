use serde_json::Value as JsonValue;
use std::str::FromStr;

use crate::score::Clear;

/// A partial set of play fields.
///
/// Absent fields are filled with defaults when a [`Play`](super::Play) is
/// built from it, or keep their previous value when it is applied as a change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayFields {
    pub name: Option<String>,
    pub level: Option<u32>,
    pub score: Option<u32>,
    pub clear: Option<Clear>,
}

impl PlayFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn score(mut self, score: u32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn clear(mut self, clear: Clear) -> Self {
        self.clear = Some(clear);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.level.is_none() && self.score.is_none() && self.clear.is_none()
    }

    /// Read fields from an untrusted JSON value.
    ///
    /// Each field is taken only if it is present and has a usable type;
    /// anything else is left unset. Non-object values yield an empty set.
    pub fn from_json_lossy(value: &JsonValue) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self {
            name: object
                .get("name")
                .and_then(JsonValue::as_str)
                .map(str::to_string),
            level: object.get("level").and_then(json_to_u32),
            score: object.get("score").and_then(json_to_u32),
            clear: object
                .get("clear")
                .and_then(JsonValue::as_str)
                .and_then(|label| Clear::from_str(label).ok()),
        }
    }
}

/// Non-negative JSON numbers, truncated and saturated to `u32`.
fn json_to_u32(value: &JsonValue) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return Some(u32::try_from(n).unwrap_or(u32::MAX));
    }
    value
        .as_f64()
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_sets_fields() {
        let fields = PlayFields::new()
            .name("Lachryma")
            .level(20)
            .score(989)
            .clear(Clear::ExcessiveComplete);

        assert_eq!(fields.name.as_deref(), Some("Lachryma"));
        assert_eq!(fields.level, Some(20));
        assert_eq!(fields.score, Some(989));
        assert_eq!(fields.clear, Some(Clear::ExcessiveComplete));
        assert!(!fields.is_empty());
        assert!(PlayFields::new().is_empty());
    }

    #[test]
    fn test_from_json_lossy_well_formed() {
        let fields = PlayFields::from_json_lossy(&json!({
            "name": "Lachryma",
            "level": 20,
            "score": 989,
            "clear": "EXC"
        }));

        assert_eq!(
            fields,
            PlayFields::new()
                .name("Lachryma")
                .level(20)
                .score(989)
                .clear(Clear::ExcessiveComplete)
        );
    }

    #[test]
    fn test_from_json_lossy_drops_bad_fields() {
        let fields = PlayFields::from_json_lossy(&json!({
            "name": 42,
            "level": "nineteen",
            "score": -5,
            "clear": "FULL COMBO"
        }));

        assert!(fields.is_empty());
    }

    #[test]
    fn test_from_json_lossy_numbers() {
        let fields = PlayFields::from_json_lossy(&json!({
            "level": 18.0,
            "score": 99_999_999_999u64
        }));

        assert_eq!(fields.level, Some(18));
        assert_eq!(fields.score, Some(u32::MAX));
    }

    #[test]
    fn test_from_json_lossy_legacy_clear() {
        let fields = PlayFields::from_json_lossy(&json!({ "clear": "PLAYED" }));
        assert_eq!(fields.clear, Some(Clear::Played));
    }

    #[test]
    fn test_from_json_lossy_non_object() {
        assert!(PlayFields::from_json_lossy(&json!("Lachryma")).is_empty());
        assert!(PlayFields::from_json_lossy(&json!(null)).is_empty());
    }
}
