//! Ranking and aggregation.
//!
//! - `sorted_plays`, `ranked`, `positions` - the canonical play order
//! - `Volforce` - the aggregate over the top 50 of that order

mod order;
mod volforce;

pub use order::*;
pub use volforce::*;
