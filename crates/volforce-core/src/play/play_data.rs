use serde::Serialize;
use uuid::Uuid;

use crate::config::{defaults, score::COMPACT_DIVISOR, volforce::FORCE_MULTIPLIER};
use crate::play::PlayFields;
use crate::score::{Clear, Grade, frac_score, long_score, short_score};

/// Identity of a play within a running session.
///
/// Regenerated on every load; only used to tell plays apart in a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayId(Uuid);

impl PlayId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recorded attempt.
///
/// A `Play` is an immutable snapshot: an edit produces a new value through
/// [`Play::with_changes`]. Everything other than the four stored fields is
/// derived on read. Serializes to the stored `{name, level, score, clear}`
/// record; the id is not part of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Play {
    #[serde(skip)]
    id: PlayId,
    name: String,
    level: u32,
    score: u32,
    clear: Clear,
}

impl Play {
    /// Build a new play with a fresh id, filling unset fields with defaults.
    pub fn new(fields: PlayFields) -> Self {
        Self {
            id: PlayId::new(),
            name: fields.name.unwrap_or_else(|| defaults::NAME.to_string()),
            level: fields.level.unwrap_or(defaults::LEVEL),
            score: fields.score.unwrap_or(defaults::SCORE),
            clear: fields.clear.unwrap_or(defaults::CLEAR),
        }
    }

    /// A copy of this play with `changes` applied over its fields.
    /// The id is kept.
    pub fn with_changes(&self, changes: &PlayFields) -> Self {
        Self {
            id: self.id,
            name: changes.name.clone().unwrap_or_else(|| self.name.clone()),
            level: changes.level.unwrap_or(self.level),
            score: changes.score.unwrap_or(self.score),
            clear: changes.clear.unwrap_or(self.clear),
        }
    }

    /// The stored fields as a complete field-set.
    pub fn fields(&self) -> PlayFields {
        PlayFields {
            name: Some(self.name.clone()),
            level: Some(self.level),
            score: Some(self.score),
            clear: Some(self.clear),
        }
    }

    pub fn id(&self) -> PlayId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// The raw score as entered.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn clear(&self) -> Clear {
        self.clear
    }

    /// Score as a fraction of the maximum, in `[0, 1]`.
    pub fn frac_score(&self) -> f64 {
        frac_score(self.score)
    }

    /// Score at full precision (e.g. `989` becomes `9890000`).
    pub fn long_score(&self) -> u32 {
        long_score(self.score)
    }

    /// Score without trailing zeros (e.g. `9890000` becomes `989`).
    pub fn short_score(&self) -> u32 {
        short_score(self.score)
    }

    /// Score as shown in tables: full precision, or in thousands when compact.
    pub fn display_score(&self, compact: bool) -> u32 {
        if compact {
            self.long_score() / COMPACT_DIVISOR
        } else {
            self.long_score()
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_frac_score(self.frac_score())
    }

    pub fn grade_coef(&self) -> f64 {
        self.grade().coefficient()
    }

    pub fn clear_coef(&self) -> f64 {
        self.clear.coefficient()
    }

    /// This play's contribution to the aggregate:
    /// `floor(level * frac_score * grade_coef * clear_coef * 20)`.
    pub fn force(&self) -> u32 {
        let force = f64::from(self.level)
            * self.frac_score()
            * self.grade_coef()
            * self.clear_coef()
            * FORCE_MULTIPLIER;
        force.floor() as u32
    }
}

impl Default for Play {
    fn default() -> Self {
        Self::new(PlayFields::default())
    }
}

impl From<PlayFields> for Play {
    fn from(fields: PlayFields) -> Self {
        Self::new(fields)
    }
}
