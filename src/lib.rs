//! mingzi — deterministic Chinese given-name generation.
//!
//! Maps a free-text seed plus two categorical selectors (group, style) to a
//! fixed-size set of structured name records. The base record is derived
//! deterministically from the seed; sibling variants and padding are random;
//! internal faults degrade to canned per-group fallback data instead of
//! surfacing.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub use crate::config::{AppConfig, GenerationConfig};
pub use crate::core::{
    GenerateError, GeneratedRecord, GenerationOutcome, GroupSelector, MingziError, NameForge,
    NameTables, OutcomeSource, Result, StyleSelector, TableError,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
