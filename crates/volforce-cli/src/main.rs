mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;
use volforce_core::TableOptions;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("volforce=warn,volforce_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(args.config.as_deref())?;
    let store = cli_utils::store_path(args.store.as_deref(), &config);
    let mut tracker = cli_utils::open_tracker(&store)?;

    match args.command {
        None => commands::list::run(
            &tracker,
            &TableOptions {
                color: config.display.color,
                compact_score: config.display.compact_score,
                ranked: false,
            },
        ),
        Some(Command::List {
            ranked,
            plain,
            compact,
        }) => commands::list::run(
            &tracker,
            &TableOptions {
                color: config.display.color && !plain,
                compact_score: config.display.compact_score || compact,
                ranked,
            },
        ),
        Some(Command::Total) => commands::total::run(&tracker),
        Some(Command::Add { after, fields }) => {
            commands::add::run(&mut tracker, after, fields.into_fields())
        }
        Some(Command::Edit { index, fields }) => {
            commands::edit::run(&mut tracker, index, fields.into_fields())
        }
        Some(Command::Delete { index }) => commands::delete::run(&mut tracker, index),
        Some(Command::Sort) => commands::sort::run(&mut tracker),
        Some(Command::Import { file }) => commands::import::run(&mut tracker, &file),
        Some(Command::Export { output, format }) => {
            commands::export::run(&tracker, output.as_deref(), format)
        }
    }
}
