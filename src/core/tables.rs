//! Static Generation Tables
//!
//! The in-memory, read-only table set consulted by every pipeline stage:
//! character pools keyed by (group, style), the symbol metadata maps, the
//! phrase tables, the curated starter list and the per-group fallback data.
//!
//! Tables are populated once (normally from the bundled assets) and never
//! mutated afterwards, so a shared reference is safe under arbitrary
//! concurrency with no locking.

use std::collections::HashMap;

use super::assets::{AssetLoader, CuratedEntry, FallbackGroup};
use super::errors::TableError;
use super::selectors::{GroupSelector, StyleSelector};

/// The complete static table set.
#[derive(Debug, Clone)]
pub struct NameTables {
    pools: HashMap<(GroupSelector, StyleSelector), Vec<String>>,
    pinyin: HashMap<String, String>,
    meanings: HashMap<String, String>,
    style_phrases: HashMap<StyleSelector, String>,
    group_phrases: HashMap<GroupSelector, String>,
    curated: Vec<CuratedEntry>,
    fallback: HashMap<GroupSelector, FallbackGroup>,
}

impl NameTables {
    /// Load and validate the bundled table set.
    ///
    /// Fails fast on any parse error or under-populated cell; an engine must
    /// not come up with a partial table (the fatal-configuration analogue).
    pub fn load_embedded() -> Result<Self, TableError> {
        let mut pools = HashMap::new();
        for file in AssetLoader::load_pools()? {
            for (style, symbols) in file.styles {
                pools.insert((file.group, style), symbols);
            }
        }

        let symbol_file = AssetLoader::load_symbols()?;
        let mut pinyin = HashMap::with_capacity(symbol_file.symbols.len());
        let mut meanings = HashMap::with_capacity(symbol_file.symbols.len());
        for (symbol, entry) in symbol_file.symbols {
            pinyin.insert(symbol.clone(), entry.pinyin);
            meanings.insert(symbol, entry.meaning);
        }

        let phrases = AssetLoader::load_phrases()?;
        let curated = AssetLoader::load_curated()?.names;
        let fallback = AssetLoader::load_fallback()?.groups;

        let tables = Self {
            pools,
            pinyin,
            meanings,
            style_phrases: phrases.styles,
            group_phrases: phrases.groups,
            curated,
            fallback,
        };
        tables.validate()?;
        Ok(tables)
    }

    /// Assemble tables from already-built parts, skipping validation.
    ///
    /// Intended for tests (including deliberately corrupted tables to
    /// exercise the fallback path) and for future non-bundled data sources;
    /// such callers run [`NameTables::validate`] themselves when they want
    /// the fail-fast guarantee.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        pools: HashMap<(GroupSelector, StyleSelector), Vec<String>>,
        pinyin: HashMap<String, String>,
        meanings: HashMap<String, String>,
        style_phrases: HashMap<StyleSelector, String>,
        group_phrases: HashMap<GroupSelector, String>,
        curated: Vec<CuratedEntry>,
        fallback: HashMap<GroupSelector, FallbackGroup>,
    ) -> Self {
        Self {
            pools,
            pinyin,
            meanings,
            style_phrases,
            group_phrases,
            curated,
            fallback,
        }
    }

    /// Enforce the static invariants: every (group, style) cell populated,
    /// every phrase present, every group's fallback usable.
    pub fn validate(&self) -> Result<(), TableError> {
        for &group in GroupSelector::all() {
            for &style in StyleSelector::all() {
                match self.pools.get(&(group, style)) {
                    None => return Err(TableError::MissingCell { group, style }),
                    Some(cell) if cell.is_empty() => {
                        return Err(TableError::EmptyCell { group, style })
                    }
                    Some(_) => {}
                }
            }
            if !self.group_phrases.contains_key(&group) {
                return Err(TableError::MissingPhrase {
                    key: group.to_string(),
                });
            }
            match self.fallback.get(&group) {
                None => return Err(TableError::invalid_fallback(group, "missing entry")),
                Some(entry) if entry.pool.is_empty() => {
                    return Err(TableError::invalid_fallback(group, "empty pad pool"))
                }
                Some(entry) if entry.records.is_empty() => {
                    return Err(TableError::invalid_fallback(group, "no canned records"))
                }
                Some(_) => {}
            }
        }
        for &style in StyleSelector::all() {
            if !self.style_phrases.contains_key(&style) {
                return Err(TableError::MissingPhrase {
                    key: style.to_string(),
                });
            }
        }
        Ok(())
    }

    /// The ordered symbol pool for a (group, style) cell.
    pub fn pool(
        &self,
        group: GroupSelector,
        style: StyleSelector,
    ) -> Result<&[String], TableError> {
        match self.pools.get(&(group, style)) {
            None => Err(TableError::MissingCell { group, style }),
            Some(cell) if cell.is_empty() => Err(TableError::EmptyCell { group, style }),
            Some(cell) => Ok(cell),
        }
    }

    /// Transliteration for a symbol, if known.
    pub fn pinyin(&self, symbol: &str) -> Option<&str> {
        self.pinyin.get(symbol).map(String::as_str)
    }

    /// Meaning fragment for a symbol, if known.
    pub fn meaning(&self, symbol: &str) -> Option<&str> {
        self.meanings.get(symbol).map(String::as_str)
    }

    /// The description phrase for a style.
    pub fn style_phrase(&self, style: StyleSelector) -> Result<&str, TableError> {
        self.style_phrases
            .get(&style)
            .map(String::as_str)
            .ok_or_else(|| TableError::MissingPhrase {
                key: style.to_string(),
            })
    }

    /// The description phrase for a group.
    pub fn group_phrase(&self, group: GroupSelector) -> Result<&str, TableError> {
        self.group_phrases
            .get(&group)
            .map(String::as_str)
            .ok_or_else(|| TableError::MissingPhrase {
                key: group.to_string(),
            })
    }

    /// Curated entries compatible with both selectors, in list order.
    pub fn curated_for(&self, group: GroupSelector, style: StyleSelector) -> Vec<&CuratedEntry> {
        self.curated
            .iter()
            .filter(|entry| entry.groups.contains(&group) && entry.styles.contains(&style))
            .collect()
    }

    /// The fallback data for a group.
    pub fn fallback_for(&self, group: GroupSelector) -> Result<&FallbackGroup, TableError> {
        self.fallback
            .get(&group)
            .ok_or_else(|| TableError::invalid_fallback(group, "missing entry"))
    }
}

// ============================================================================
// Tests
// ============================================================================
