//! Configuration and tuning constants.
//!
//! This module contains:
//! - `Config` - the user configuration file (`config.toml`)
//! - Scoring, aggregation, and default-value constants

mod loader;

pub use loader::*;

/// Aggregate (volforce) configuration.
pub mod volforce {
    /// Number of best plays that count toward the aggregate.
    pub const TOP_PLAYS: usize = 50;

    /// Divisor turning the integer force sum into the displayed skill number.
    pub const FORCE_SCALE: f64 = 1000.0;

    /// Per-play force multiplier.
    pub const FORCE_MULTIPLIER: f64 = 20.0;
}

/// Raw score configuration.
pub mod score {
    /// Maximum score, i.e. a fraction of 1.0 at full precision.
    pub const MAX_SCORE: u32 = 10_000_000;

    /// Divisor applied to the full-precision score on compact displays.
    pub const COMPACT_DIVISOR: u32 = 1000;
}

/// Values a new play starts with.
pub mod defaults {
    use crate::score::Clear;

    pub const NAME: &str = "";
    pub const LEVEL: u32 = 17;
    pub const SCORE: u32 = 0;
    pub const CLEAR: Clear = Clear::Complete;
}

/// The play a fresh store is seeded with.
pub mod seed {
    use crate::score::Clear;

    pub const NAME: &str = "Lachryma";
    pub const LEVEL: u32 = 20;
    pub const SCORE: u32 = 989;
    pub const CLEAR: Clear = Clear::ExcessiveComplete;
}
