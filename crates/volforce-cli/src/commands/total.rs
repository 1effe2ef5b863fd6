//! Total command for printing the volforce value alone.

use anyhow::Result;
use volforce_core::{PlayStore, Tracker};

pub fn run<S: PlayStore>(tracker: &Tracker<S>) -> Result<()> {
    println!("{}", tracker.volforce());
    Ok(())
}
