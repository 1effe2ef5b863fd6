//! Sort command for storing the plays in ranking order.

use anyhow::Result;
use volforce_core::ranking::is_sorted;
use volforce_core::{Action, PlayStore, Tracker};

pub fn run<S: PlayStore>(tracker: &mut Tracker<S>) -> Result<()> {
    if is_sorted(tracker.plays()) {
        println!("Already in ranking order");
        return Ok(());
    }

    tracker.dispatch(Action::Sort)?;
    println!("Sorted {} plays", tracker.plays().len());
    Ok(())
}
