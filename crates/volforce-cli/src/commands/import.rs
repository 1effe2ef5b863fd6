//! Import command for replacing the plays with a score export.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use volforce_core::{Action, PlayStore, Tracker, load_score_export};

pub fn run<S: PlayStore>(tracker: &mut Tracker<S>, file: &Path) -> Result<()> {
    let plays = load_score_export(file)
        .with_context(|| format!("Failed to read score export {}", file.display()))?;
    info!("Parsed {} rows from {}", plays.len(), file.display());

    tracker.dispatch(Action::Replace { plays })?;

    eprintln!("Imported {} plays", tracker.plays().len());
    println!("VOLFORCE {}", tracker.volforce());
    Ok(())
}
