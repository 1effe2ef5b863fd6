//! Edit command for changing fields of a stored play.

use anyhow::{Result, bail};
use volforce_core::{Action, PlayFields, PlayStore, Tracker, format_play_summary};

pub fn run<S: PlayStore>(tracker: &mut Tracker<S>, index: usize, fields: PlayFields) -> Result<()> {
    if fields.is_empty() {
        bail!("Nothing to change (use --name, --level, --score or --clear)");
    }

    tracker.dispatch(Action::Change { index, fields })?;

    println!("Changed #{}: {}", index, format_play_summary(&tracker.plays()[index]));
    println!("VOLFORCE {}", tracker.volforce());
    Ok(())
}
