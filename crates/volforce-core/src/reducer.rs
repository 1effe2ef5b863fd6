//! State transitions of the play collection.
//!
//! [`reduce`] is a pure function from the current plays and an [`Action`] to
//! the next plays. It never leaves the collection empty.

use strum::IntoStaticStr;
use tracing::debug;

use crate::error::{Error, Result};
use crate::play::{Play, PlayFields};
use crate::ranking::sorted_plays;

/// A mutation of the play collection. Indices refer to stored order.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    /// Insert a new play right after `index`.
    Add { index: usize, fields: PlayFields },
    /// Replace the play at `index` with its fields overridden by `fields`.
    Change { index: usize, fields: PlayFields },
    /// Remove the play at `index`.
    Delete { index: usize },
    /// Reorder the collection by rank.
    Sort,
    /// Discard the collection and build a ranked one from `plays`.
    Replace { plays: Vec<PlayFields> },
}

impl Action {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Apply `action` to `plays`, returning the new collection.
///
/// Out-of-range indices yield [`Error::IndexOutOfRange`]; `plays` itself is
/// never modified.
pub fn reduce(plays: &[Play], action: &Action) -> Result<Vec<Play>> {
    debug!("Reducing '{}' over {} plays", action.name(), plays.len());

    let next = match action {
        Action::Add { index, fields } => {
            check_index(*index, plays.len())?;
            let mut next = Vec::with_capacity(plays.len() + 1);
            next.extend_from_slice(&plays[..=*index]);
            next.push(Play::new(fields.clone()));
            next.extend_from_slice(&plays[*index + 1..]);
            next
        }
        Action::Change { index, fields } => {
            check_index(*index, plays.len())?;
            let mut next = plays.to_vec();
            next[*index] = plays[*index].with_changes(fields);
            next
        }
        Action::Delete { index } => {
            check_index(*index, plays.len())?;
            let mut next = plays.to_vec();
            next.remove(*index);
            next
        }
        Action::Sort => sorted_plays(plays),
        Action::Replace { plays } => {
            let built: Vec<Play> = plays.iter().cloned().map(Play::new).collect();
            sorted_plays(&built)
        }
    };

    Ok(ensure_not_empty(next))
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// The collection always holds at least one play.
fn ensure_not_empty(plays: Vec<Play>) -> Vec<Play> {
    if plays.is_empty() {
        vec![Play::default()]
    } else {
        plays
    }
}
