//! Read-only MongoDB database exploration.
//!
//! This crate provides:
//! - `explorer`: the [`Explorer`] handle and its inspection operations
//! - `report`: console reporting built on top of the explorer's pure reads
//! - `cli`: argument parsing for the `mongoscope` binary
//! - `error`: the crate-wide error type

pub mod cli;
pub mod error;
pub mod explorer;
pub mod report;

// Re-export commonly used items at the crate level
pub use error::{Error, Result};
pub use explorer::{CollectionStats, DEFAULT_SAMPLE_SIZE, Explorer};
