pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod play;
pub mod ranking;
pub mod reducer;
pub mod score;
pub mod storage;
pub mod tracker;

pub use config::Config;
pub use error::{Error, Result};
pub use export::{
    TableOptions, export_plays_json, export_plays_tsv, format_play_summary, format_play_table,
    generate_plays_json, generate_plays_tsv,
};
pub use import::{load_score_export, parse_score_export, safe_integer};
pub use play::{Play, PlayFields, PlayId};
pub use ranking::{Volforce, is_counted, positions, ranked, sorted_plays};
pub use reducer::{Action, reduce};
pub use score::{Clear, Grade};
pub use storage::{JsonFileStore, MemoryStore, PlayStore};
pub use tracker::Tracker;
