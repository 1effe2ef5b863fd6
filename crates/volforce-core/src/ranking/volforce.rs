use crate::config::volforce::{FORCE_SCALE, TOP_PLAYS};
use crate::play::Play;
use crate::ranking::ranked;

/// The aggregate skill score: the summed force of the best plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Volforce {
    total_force: u64,
}

impl Volforce {
    /// Aggregate of a collection in any order.
    pub fn of(plays: &[Play]) -> Self {
        Self::from_ranked(ranked(plays))
    }

    /// Aggregate of plays already in ranking order; only the first
    /// [`TOP_PLAYS`] are counted.
    pub fn from_ranked<'a, I>(ranked: I) -> Self
    where
        I: IntoIterator<Item = &'a Play>,
    {
        let total_force = ranked
            .into_iter()
            .take(TOP_PLAYS)
            .map(|play| u64::from(play.force()))
            .sum();
        Self { total_force }
    }

    /// Integer sum of the counted forces.
    pub fn total_force(&self) -> u64 {
        self.total_force
    }

    /// The displayed skill number (`total_force / 1000`).
    pub fn value(&self) -> f64 {
        self.total_force as f64 / FORCE_SCALE
    }
}

impl std::fmt::Display for Volforce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.value())
    }
}
