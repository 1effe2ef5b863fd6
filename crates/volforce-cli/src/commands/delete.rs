//! Delete command for removing a stored play.

use anyhow::Result;
use volforce_core::{Action, PlayStore, Tracker, format_play_summary};

pub fn run<S: PlayStore>(tracker: &mut Tracker<S>, index: usize) -> Result<()> {
    let removed = tracker.plays().get(index).map(format_play_summary);

    tracker.dispatch(Action::Delete { index })?;

    if let Some(summary) = removed {
        println!("Deleted #{}: {}", index, summary);
    }
    println!("VOLFORCE {}", tracker.volforce());
    Ok(())
}
