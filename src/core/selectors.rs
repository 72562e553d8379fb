//! Group and Style Selectors
//!
//! The two independent categorical axes used to pick a character pool.
//! Selectors are plain enums; leniency toward unknown textual input lives in
//! `from_param`, which maps anything unrecognised to the documented default
//! rather than failing. Typed callers cannot construct an invalid selector.

use serde::{Deserialize, Serialize};

// ============================================================================
// Group Selector
// ============================================================================

/// Target-group axis; selects a row-group in the character-pool tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GroupSelector {
    Male,
    Female,
    #[default]
    Neutral,
}

impl GroupSelector {
    /// All groups, in table order.
    pub fn all() -> &'static [GroupSelector] {
        &[Self::Male, Self::Female, Self::Neutral]
    }

    /// Stable lowercase token, matching the asset files and serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Neutral => "neutral",
        }
    }

    /// Parse a request-level token leniently.
    ///
    /// Unknown values fall back to `Neutral`. This mirrors the upstream
    /// policy of defaulting rather than rejecting a bad selector.
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "male" | "boy" | "m" => Self::Male,
            "female" | "girl" | "f" => Self::Female,
            _ => Self::Neutral,
        }
    }
}

impl std::fmt::Display for GroupSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Style Selector
// ============================================================================

/// Style axis; selects a column in the character-pool tables, orthogonal to
/// [`GroupSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StyleSelector {
    #[default]
    Traditional,
    Modern,
    Business,
    Cute,
    Neutral,
}

impl StyleSelector {
    /// All styles, in table order.
    pub fn all() -> &'static [StyleSelector] {
        &[
            Self::Traditional,
            Self::Modern,
            Self::Business,
            Self::Cute,
            Self::Neutral,
        ]
    }

    /// Stable lowercase token, matching the asset files and serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Traditional => "traditional",
            Self::Modern => "modern",
            Self::Business => "business",
            Self::Cute => "cute",
            Self::Neutral => "neutral",
        }
    }

    /// Parse a request-level token leniently.
    ///
    /// Unknown values fall back to `Traditional`, the documented default.
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "modern" => Self::Modern,
            "business" | "professional" => Self::Business,
            "cute" => Self::Cute,
            "neutral" => Self::Neutral,
            _ => Self::Traditional,
        }
    }
}

impl std::fmt::Display for StyleSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
