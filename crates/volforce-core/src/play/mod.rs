//! Play-related types.
//!
//! This module contains the value types for recorded attempts:
//! - `Play` - one recorded attempt and its derived metrics (grade, force, ...)
//! - `PlayId` - UI identity of a play, never persisted
//! - `PlayFields` - a partial field-set used to create or change plays

mod fields;
mod play_data;

pub use fields::*;
pub use play_data::*;
