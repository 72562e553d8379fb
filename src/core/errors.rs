//! Generation Pipeline Error Types
//!
//! Uses thiserror for ergonomic error handling with rich context fields.
//! Two families matter at the boundary: `GenerateError` is the single checked
//! error callers must handle (blank seed); `TableError` covers static-data
//! faults, which the orchestrator recovers from by substituting fallback
//! records and never surfaces.

use thiserror::Error;

use super::selectors::{GroupSelector, StyleSelector};

// ============================================================================
// Table Errors
// ============================================================================

/// Errors that can occur when loading or consulting the static tables.
#[derive(Error, Debug)]
pub enum TableError {
    /// Failed to parse a bundled asset file.
    #[error("Failed to parse bundled asset '{asset}': {source}")]
    ParseFailed {
        asset: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A (group, style) cell is missing from the pool table.
    #[error("Character pool cell ({group}, {style}) is missing")]
    MissingCell {
        group: GroupSelector,
        style: StyleSelector,
    },

    /// A (group, style) cell exists but holds no symbols.
    #[error("Character pool cell ({group}, {style}) is empty")]
    EmptyCell {
        group: GroupSelector,
        style: StyleSelector,
    },

    /// A phrase table entry is missing for a selector.
    #[error("Phrase table has no entry for '{key}'")]
    MissingPhrase { key: String },

    /// The fallback table for a group is missing or under-populated.
    #[error("Fallback table for group '{group}' is invalid: {reason}")]
    InvalidFallback {
        group: GroupSelector,
        reason: String,
    },
}

impl TableError {
    /// Create a ParseFailed error.
    pub fn parse_failed(asset: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::ParseFailed {
            asset: asset.into(),
            source,
        }
    }

    /// Create an InvalidFallback error.
    pub fn invalid_fallback(group: GroupSelector, reason: impl Into<String>) -> Self {
        Self::InvalidFallback {
            group,
            reason: reason.into(),
        }
    }

    /// Check if this error is recoverable (the orchestrator can continue
    /// with fallback data).
    ///
    /// A broken fallback table is the one fault with nothing left to
    /// degrade to; everything else degrades.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidFallback { .. })
    }
}

// ============================================================================
// Generate Errors
// ============================================================================

/// The checked error surface of the pipeline.
///
/// `EmptySeed` is the only failure that crosses the boundary; it is raised
/// before any stage runs and is never retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Seed was empty or whitespace-only after trimming.
    #[error("Seed must be non-empty after trimming")]
    EmptySeed,
}

// ============================================================================
// Unified Error
// ============================================================================

/// Unified error type for engine construction and generation.
#[derive(Error, Debug)]
pub enum MingziError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Type alias for Result with MingziError.
pub type Result<T> = std::result::Result<T, MingziError>;

// ============================================================================
// Tests
// ============================================================================
