//! CLI command implementations.
//!
//! Each command works on a [`Tracker`](volforce_core::Tracker) opened by `main`.

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod sort;
pub mod total;
