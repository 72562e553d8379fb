//! Generated Record Model
//!
//! The output unit of the pipeline and the shared builders that assemble a
//! record's transliteration and description from the static tables. Both the
//! synthesizer and the expander create records through [`GeneratedRecord::from_symbols`]
//! so every path renders the two derived strings identically.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::TableError;
use super::selectors::{GroupSelector, StyleSelector};
use super::tables::NameTables;

/// One generated name.
///
/// Owned by the caller once returned; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedRecord {
    /// Opaque identifier, unique per record, assigned at creation time.
    pub id: Uuid,
    /// Ordered composed symbols (2 or 3 units).
    pub symbols: Vec<String>,
    /// Space-joined pinyin for the composed symbols.
    pub transliteration: String,
    /// Meaning fragments plus the style/group phrase clause.
    pub description: String,
    /// Copy of the request's group selector.
    pub group: GroupSelector,
    pub created_at: DateTime<Utc>,
}

impl GeneratedRecord {
    /// Build a record from composed symbols, deriving transliteration and
    /// description from the tables.
    pub fn from_symbols(
        symbols: Vec<String>,
        group: GroupSelector,
        style: StyleSelector,
        tables: &NameTables,
    ) -> Result<Self, TableError> {
        let transliteration = transliteration_for(&symbols, tables);
        let description = description_for(&symbols, group, style, tables)?;
        Ok(Self {
            id: Uuid::new_v4(),
            symbols,
            transliteration,
            description,
            group,
            created_at: Utc::now(),
        })
    }

    /// Build a pre-baked record that carries its own derived strings
    /// (the degraded path must not consult the metadata maps).
    pub fn pre_baked(
        symbols: Vec<String>,
        transliteration: impl Into<String>,
        description: impl Into<String>,
        group: GroupSelector,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbols,
            transliteration: transliteration.into(),
            description: description.into(),
            group,
            created_at: Utc::now(),
        }
    }

    /// The display form: symbols joined into a single string.
    pub fn rendered(&self) -> String {
        self.symbols.concat()
    }
}

/// Join per-symbol pinyin with a single space.
///
/// A symbol absent from the map falls back to the symbol itself; this never
/// fails.
pub(crate) fn transliteration_for(symbols: &[String], tables: &NameTables) -> String {
    symbols
        .iter()
        .map(|s| tables.pinyin(s).unwrap_or(s).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join per-symbol meaning fragments with ", ", then append the style and
/// group phrase clause.
///
/// Missing meanings fall back to the symbol itself; a missing phrase is a
/// table fault and surfaces as an error for the orchestrator to recover.
pub(crate) fn description_for(
    symbols: &[String],
    group: GroupSelector,
    style: StyleSelector,
    tables: &NameTables,
) -> Result<String, TableError> {
    let fragments = symbols
        .iter()
        .map(|s| tables.meaning(s).unwrap_or(s).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let style_phrase = tables.style_phrase(style)?;
    let group_phrase = tables.group_phrase(group)?;
    Ok(format!("{fragments}; {style_phrase}, {group_phrase}"))
}

// ============================================================================
// Tests
// ============================================================================
