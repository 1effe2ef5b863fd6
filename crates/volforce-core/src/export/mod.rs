//! Export formats for the play collection.

mod console;

pub use console::*;

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::play::Play;
use crate::ranking::ranked;
use crate::storage::encode_plays;

pub fn format_tsv_header() -> String {
    [
        "position", "name", "level", "score", "clear", "grade", "force",
    ]
    .join("\t")
}

/// Format one play as a TSV row at the given 1-based position.
pub fn format_tsv_row(position: usize, play: &Play) -> String {
    [
        position.to_string(),
        play.name().replace(['\t', '\n'], " "),
        play.level().to_string(),
        play.long_score().to_string(),
        play.clear().short_name().to_string(),
        play.grade().short_name().to_string(),
        play.force().to_string(),
    ]
    .join("\t")
}

/// Generate a TSV of the plays in ranking order, with derived columns
pub fn generate_plays_tsv(plays: &[Play]) -> String {
    let mut lines = vec![format_tsv_header()];
    for (position, play) in ranked(plays).into_iter().enumerate() {
        lines.push(format_tsv_row(position + 1, play));
    }
    lines.join("\n")
}

/// Generate the stored JSON records of the plays, in stored order
pub fn generate_plays_json(plays: &[Play]) -> Result<String> {
    encode_plays(plays)
}

pub fn export_plays_tsv<P: AsRef<Path>>(path: P, plays: &[Play]) -> Result<()> {
    fs::write(path, generate_plays_tsv(plays))?;
    Ok(())
}

pub fn export_plays_json<P: AsRef<Path>>(path: P, plays: &[Play]) -> Result<()> {
    fs::write(path, generate_plays_json(plays)?)?;
    Ok(())
}
