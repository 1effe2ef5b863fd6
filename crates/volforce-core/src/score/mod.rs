//! Score-related types and formulas.
//!
//! This module contains the tables that turn a play's raw fields into force:
//! - `Clear` - clear types (PUC, UC, EXC, C, P) and their coefficients
//! - `Grade` - score bands (S down to D) and their coefficients
//! - `frac_score`, `long_score`, `short_score` - raw score normalization

mod clear;
mod grade;
mod scale;

pub use clear::*;
pub use grade::*;
pub use scale::*;
