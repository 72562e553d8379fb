//! Compile-time bundled asset loader for the generation tables.
//!
//! Bundles the pool, metadata, phrase, curated and fallback YAML files into
//! the binary via `include_str!`. No filesystem access at runtime.
//!
//! Unlike lenient asset pipelines that skip unparseable files, every parse
//! failure here is surfaced as a [`TableError`]: an incomplete table set is
//! a fatal configuration fault for this pipeline.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use super::errors::TableError;
use super::selectors::{GroupSelector, StyleSelector};

// ============================================================================
// Compile-time bundled YAML: Character pools (3)
// ============================================================================

const POOLS_MALE: &str = include_str!("../../assets/pools/male.yaml");
const POOLS_FEMALE: &str = include_str!("../../assets/pools/female.yaml");
const POOLS_NEUTRAL: &str = include_str!("../../assets/pools/neutral.yaml");

// ============================================================================
// Compile-time bundled YAML: Metadata, phrases, curated, fallback (4)
// ============================================================================

const METADATA_SYMBOLS: &str = include_str!("../../assets/metadata/symbols.yaml");
const PHRASES: &str = include_str!("../../assets/phrases.yaml");
const CURATED: &str = include_str!("../../assets/curated.yaml");
const FALLBACK: &str = include_str!("../../assets/fallback.yaml");

/// All pool YAML sources with labels for error reporting.
const POOL_SOURCES: &[(&str, &str)] = &[
    ("pools/male", POOLS_MALE),
    ("pools/female", POOLS_FEMALE),
    ("pools/neutral", POOLS_NEUTRAL),
];

// ============================================================================
// Raw file schemas
// ============================================================================

/// One pool file: every style cell for a single group.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolFile {
    pub group: GroupSelector,
    pub styles: HashMap<StyleSelector, Vec<String>>,
}

/// Per-symbol transliteration and meaning fragment.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolEntry {
    pub pinyin: String,
    pub meaning: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolFile {
    pub symbols: HashMap<String, SymbolEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhraseFile {
    pub styles: HashMap<StyleSelector, String>,
    pub groups: HashMap<GroupSelector, String>,
}

/// A curated starter name with its compatibility tags.
#[derive(Debug, Clone, Deserialize)]
pub struct CuratedEntry {
    pub symbols: Vec<String>,
    pub groups: Vec<GroupSelector>,
    pub styles: Vec<StyleSelector>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CuratedFile {
    pub names: Vec<CuratedEntry>,
}

/// A pre-baked record for the degraded path; self-contained so it never
/// depends on the metadata maps.
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackEntry {
    pub symbols: Vec<String>,
    pub pinyin: String,
    pub description: String,
}

/// Per-group fallback data: the pad pool and the canned records.
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackGroup {
    pub pool: Vec<String>,
    pub records: Vec<FallbackEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FallbackFile {
    pub groups: HashMap<GroupSelector, FallbackGroup>,
}

// ============================================================================
// AssetLoader
// ============================================================================

/// Loads bundled YAML assets into typed structs.
pub struct AssetLoader;

impl AssetLoader {
    /// Load the three per-group pool files.
    pub fn load_pools() -> Result<Vec<PoolFile>, TableError> {
        let mut files = Vec::with_capacity(POOL_SOURCES.len());
        for (label, yaml) in POOL_SOURCES {
            let file: PoolFile =
                serde_yaml::from_str(yaml).map_err(|e| TableError::parse_failed(*label, e))?;
            debug!(group = %file.group, styles = file.styles.len(), "loaded pool file");
            files.push(file);
        }
        Ok(files)
    }

    /// Load the symbol metadata map (pinyin + meaning per symbol).
    pub fn load_symbols() -> Result<SymbolFile, TableError> {
        let file: SymbolFile = serde_yaml::from_str(METADATA_SYMBOLS)
            .map_err(|e| TableError::parse_failed("metadata/symbols", e))?;
        debug!(symbols = file.symbols.len(), "loaded symbol metadata");
        Ok(file)
    }

    /// Load the style and group phrase tables.
    pub fn load_phrases() -> Result<PhraseFile, TableError> {
        serde_yaml::from_str(PHRASES).map_err(|e| TableError::parse_failed("phrases", e))
    }

    /// Load the curated starter list.
    pub fn load_curated() -> Result<CuratedFile, TableError> {
        serde_yaml::from_str(CURATED).map_err(|e| TableError::parse_failed("curated", e))
    }

    /// Load the per-group fallback table.
    pub fn load_fallback() -> Result<FallbackFile, TableError> {
        serde_yaml::from_str(FALLBACK).map_err(|e| TableError::parse_failed("fallback", e))
    }

    /// Count of bundled pool files.
    pub const POOL_FILE_COUNT: usize = POOL_SOURCES.len();

    /// Total count of bundled asset files.
    pub const TOTAL_ASSET_COUNT: usize = Self::POOL_FILE_COUNT + 4;
}

// ============================================================================
// Tests
// ============================================================================
