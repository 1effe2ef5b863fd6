//! Export command for writing the plays as TSV or JSON.

use anyhow::{Context, Result};
use volforce_core::{
    PlayStore, Tracker, export_plays_json, export_plays_tsv, generate_plays_json,
    generate_plays_tsv,
};

use crate::cli::ExportFormat;

pub fn run<S: PlayStore>(
    tracker: &Tracker<S>,
    output: Option<&str>,
    format: ExportFormat,
) -> Result<()> {
    let plays = tracker.plays();

    if let Some(output_path) = output {
        match format {
            ExportFormat::Tsv => export_plays_tsv(output_path, plays),
            ExportFormat::Json => export_plays_json(output_path, plays),
        }
        .with_context(|| format!("Failed to write {}", output_path))?;
        eprintln!("Exported to: {}", output_path);
    } else {
        let content = match format {
            ExportFormat::Tsv => generate_plays_tsv(plays),
            ExportFormat::Json => generate_plays_json(plays)?,
        };
        println!("{}", content);
    }

    Ok(())
}
