//! CLI argument definitions for volforce.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use volforce_core::{Clear, PlayFields};

#[derive(Parser)]
#[command(name = "volforce")]
#[command(about = "Volforce calculator for recorded plays", version)]
pub struct Args {
    /// Config file (default: <config dir>/volforce/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Plays file (overrides the config file)
    #[arg(long, value_name = "FILE", env = "VOLFORCE_STORE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show plays with their rank, grade and force
    List {
        /// List in ranking order instead of stored order
        #[arg(long)]
        ranked: bool,
        /// Disable colors
        #[arg(long)]
        plain: bool,
        /// Show scores in thousands
        #[arg(long)]
        compact: bool,
    },
    /// Print the volforce total
    Total,
    /// Add a play after a stored index
    Add {
        /// Stored index to insert after (default: the last play)
        #[arg(long, value_name = "INDEX")]
        after: Option<usize>,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Change fields of the play at a stored index
    Edit {
        /// Stored index of the play
        index: usize,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete the play at a stored index
    Delete {
        /// Stored index of the play
        index: usize,
    },
    /// Reorder the stored plays by rank
    Sort,
    /// Replace all plays with the rows of a score export (CSV)
    Import {
        /// Score export file
        file: PathBuf,
    },
    /// Export the plays
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "tsv")]
        format: ExportFormat,
    },
}

/// Play fields given on the command line.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Song name
    #[arg(long)]
    pub name: Option<String>,
    /// Difficulty level
    #[arg(long)]
    pub level: Option<u32>,
    /// Score, at any precision (989, 9890000, ...)
    #[arg(long)]
    pub score: Option<u32>,
    /// Clear type (PUC, UC, EXC, C, P)
    #[arg(long, value_parser = parse_clear)]
    pub clear: Option<Clear>,
}

impl FieldArgs {
    pub fn into_fields(self) -> PlayFields {
        PlayFields {
            name: self.name,
            level: self.level,
            score: self.score,
            clear: self.clear,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Tsv,
    Json,
}

fn parse_clear(value: &str) -> Result<Clear, String> {
    Clear::from_str(&value.to_uppercase())
        .map_err(|_| format!("unknown clear type '{}' (expected PUC, UC, EXC, C or P)", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_clear() {
        assert_eq!(parse_clear("puc"), Ok(Clear::PerfectUltimateChain));
        assert_eq!(parse_clear("EXC"), Ok(Clear::ExcessiveComplete));
        assert_eq!(parse_clear("cleared"), Ok(Clear::Complete));
        assert!(parse_clear("FC").is_err());
    }

    #[test]
    fn test_field_args_into_fields() {
        let fields = FieldArgs {
            name: Some("Lachryma".to_string()),
            score: Some(989),
            ..Default::default()
        }
        .into_fields();

        assert_eq!(fields.name.as_deref(), Some("Lachryma"));
        assert_eq!(fields.score, Some(989));
        assert_eq!(fields.level, None);
        assert_eq!(fields.clear, None);
    }
}
