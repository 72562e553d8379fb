//! Core generation pipeline.
//!
//! Linear flow: resolver → synthesizer → expander, orchestrated by
//! [`pipeline::NameForge`] over the static tables in [`tables`].

pub mod assets;
pub mod errors;
pub mod expander;
pub mod pipeline;
pub mod record;
pub mod resolver;
pub mod selectors;
pub mod synthesizer;
pub mod tables;

pub use errors::{GenerateError, MingziError, Result, TableError};
pub use pipeline::{GenerationOutcome, NameForge, OutcomeSource};
pub use record::GeneratedRecord;
pub use selectors::{GroupSelector, StyleSelector};
pub use tables::NameTables;
