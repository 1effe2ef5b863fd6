//! The state holder around [`reduce`].
//!
//! A `Tracker` owns the current plays and a [`PlayStore`]. Every successful
//! dispatch replaces the plays, saves them, and notifies subscribers.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::play::Play;
use crate::ranking::{Volforce, positions, ranked};
use crate::reducer::{Action, reduce};
use crate::storage::PlayStore;

type Observer = Box<dyn FnMut(&[Play])>;

pub struct Tracker<S: PlayStore> {
    plays: Vec<Play>,
    store: S,
    observers: Vec<Observer>,
}

impl<S: PlayStore> Tracker<S> {
    /// Load the collection from `store`.
    pub fn open(store: S) -> Result<Self> {
        let plays = store.load()?;
        info!("Loaded {} plays", plays.len());
        Ok(Self {
            plays,
            store,
            observers: Vec::new(),
        })
    }

    /// Register a callback run with the new plays after every transition.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&[Play]) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Apply `action`, then save and notify.
    ///
    /// An invalid action leaves the plays untouched and returns the error.
    /// A failed save is logged; the new plays are kept either way.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let next = reduce(&self.plays, &action)?;
        debug!(
            "Applied '{}': {} -> {} plays",
            action.name(),
            self.plays.len(),
            next.len()
        );
        self.plays = next;

        if let Err(e) = self.store.save(&self.plays) {
            warn!("Failed to save plays: {}", e);
        }

        for observer in &mut self.observers {
            observer(&self.plays);
        }

        Ok(())
    }

    /// Plays in stored order.
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Plays in ranking order.
    pub fn ranked(&self) -> Vec<&Play> {
        ranked(&self.plays)
    }

    /// Ranking position of each play, indexed by stored position.
    pub fn positions(&self) -> Vec<usize> {
        positions(&self.plays)
    }

    pub fn volforce(&self) -> Volforce {
        Volforce::from_ranked(self.ranked())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
