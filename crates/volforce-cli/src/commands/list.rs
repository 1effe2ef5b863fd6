//! List command for showing the plays table.

use anyhow::Result;
use volforce_core::{PlayStore, TableOptions, Tracker, format_play_table};

pub fn run<S: PlayStore>(tracker: &Tracker<S>, options: &TableOptions) -> Result<()> {
    print!("{}", format_play_table(tracker.plays(), options));
    Ok(())
}
