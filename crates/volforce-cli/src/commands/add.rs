//! Add command for inserting a play after a stored index.

use anyhow::{Result, bail};
use volforce_core::{Action, PlayFields, PlayStore, Tracker, format_play_summary};

/// Insert a play after `after` (the last play when omitted).
///
/// Level and clear type default to those of the play at `after`.
pub fn run<S: PlayStore>(
    tracker: &mut Tracker<S>,
    after: Option<usize>,
    fields: PlayFields,
) -> Result<()> {
    let len = tracker.plays().len();
    let index = after.unwrap_or(len.saturating_sub(1));
    let Some(anchor) = tracker.plays().get(index) else {
        bail!("No play at index {} (have {})", index, len);
    };

    let fields = PlayFields {
        level: fields.level.or(Some(anchor.level())),
        clear: fields.clear.or(Some(anchor.clear())),
        ..fields
    };

    tracker.dispatch(Action::Add { index, fields })?;

    let added = &tracker.plays()[index + 1];
    println!("Added #{}: {}", index + 1, format_play_summary(added));
    println!("VOLFORCE {}", tracker.volforce());
    Ok(())
}
