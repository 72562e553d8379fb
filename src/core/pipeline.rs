//! Pipeline Orchestrator
//!
//! Ties the resolver, synthesizer and expander into the single call contract
//! of the crate: `generate(seed, group, style, rng)` returning exactly
//! `target_count` records.
//!
//! Control flow is strictly linear: resolve pool, synthesize base, expand
//! siblings, prepend compatible curated names, pad with random draws from
//! the group-keyed fallback pool, truncate. The only checked failure is a
//! blank seed. Every internal fault is logged and converted to the canned
//! per-group fallback set; the outcome's `source` field tells callers which
//! path produced it, so degradation is observable without ever being an
//! error.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GenerationConfig;

use super::errors::{GenerateError, TableError};
use super::expander::expand;
use super::record::GeneratedRecord;
use super::resolver::resolve;
use super::selectors::{GroupSelector, StyleSelector};
use super::synthesizer::synthesize;
use super::tables::NameTables;

/// Absolute last resort, used only when the fallback table itself is
/// unusable (possible with unvalidated custom tables). The never-error
/// guarantee holds even then.
const LAST_RESORT: &[(&str, &str, &str, &str)] = &[
    ("安", "然", "ān rán", "peace, natural ease; settled and serene"),
    ("嘉", "禾", "jiā hé", "excellence, young grain; wholesome and promising"),
    ("文", "心", "wén xīn", "literary grace, heart; thoughtful and sincere"),
    ("思", "远", "sī yuǎn", "thoughtfulness, far horizon; reflective and forward-looking"),
    ("乐", "知", "lè zhī", "joy, knowing; curious and light of spirit"),
];

// ============================================================================
// Outcome
// ============================================================================

/// Which path produced the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeSource {
    /// The full pipeline ran.
    Generated,
    /// An internal fault was swallowed and canned records substituted.
    Fallback,
}

/// The result of a `generate` call: exactly `target_count` records plus the
/// path that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub records: Vec<GeneratedRecord>,
    pub source: OutcomeSource,
}

impl GenerationOutcome {
    /// True when canned fallback data was substituted.
    pub fn is_degraded(&self) -> bool {
        self.source == OutcomeSource::Fallback
    }
}

// ============================================================================
// NameForge
// ============================================================================

/// The generation engine: immutable tables plus tuning constants.
///
/// Stateless per call; a shared `NameForge` is safe across threads because
/// the tables are never mutated after construction. The RNG is passed into
/// each call rather than owned, so tests can seed it and production can use
/// entropy.
#[derive(Debug, Clone)]
pub struct NameForge {
    tables: NameTables,
    config: GenerationConfig,
}

impl NameForge {
    /// Build an engine over the bundled tables with default tuning.
    ///
    /// Fails fast if the bundled tables do not validate.
    pub fn new() -> Result<Self, TableError> {
        Self::with_config(GenerationConfig::default())
    }

    /// Build an engine over the bundled tables with explicit tuning.
    pub fn with_config(config: GenerationConfig) -> Result<Self, TableError> {
        Ok(Self {
            tables: NameTables::load_embedded()?,
            config,
        })
    }

    /// Build an engine over caller-supplied tables, skipping validation.
    ///
    /// Used by tests (including deliberately corrupted tables) and by
    /// callers with their own data sources; run `tables.validate()` first
    /// for the fail-fast guarantee.
    pub fn with_tables(tables: NameTables, config: GenerationConfig) -> Self {
        Self { tables, config }
    }

    pub fn tables(&self) -> &NameTables {
        &self.tables
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate exactly `target_count` records for a seed.
    ///
    /// The only error is a blank seed. Internal faults degrade to the
    /// per-group canned set instead of surfacing.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        seed: &str,
        group: GroupSelector,
        style: StyleSelector,
        rng: &mut R,
    ) -> Result<GenerationOutcome, GenerateError> {
        let trimmed = seed.trim();
        if trimmed.is_empty() {
            return Err(GenerateError::EmptySeed);
        }

        match self.run_pipeline(trimmed, group, style, rng) {
            Ok(records) => {
                debug!(
                    count = records.len(),
                    group = %group,
                    style = %style,
                    "generated records"
                );
                Ok(GenerationOutcome {
                    records,
                    source: OutcomeSource::Generated,
                })
            }
            Err(e) => {
                warn!(
                    error = %e,
                    group = %group,
                    style = %style,
                    "internal generation fault, substituting fallback records"
                );
                Ok(GenerationOutcome {
                    records: self.fallback_records(group),
                    source: OutcomeSource::Fallback,
                })
            }
        }
    }

    /// The happy path: resolve, synthesize, expand, prepend, pad, truncate.
    fn run_pipeline<R: Rng + ?Sized>(
        &self,
        seed: &str,
        group: GroupSelector,
        style: StyleSelector,
        rng: &mut R,
    ) -> Result<Vec<GeneratedRecord>, TableError> {
        let n = self.config.target_count;
        let pool = resolve(group, style, &self.tables)?;
        let base = synthesize(seed, pool, group, style, &self.tables, &self.config, rng)?;
        let siblings = expand(
            &base,
            pool,
            self.config.variation_count,
            style,
            &self.tables,
            rng,
        )?;

        let mut records = Vec::with_capacity(n + self.config.curated_prepend_max);
        for entry in self
            .tables
            .curated_for(group, style)
            .into_iter()
            .take(self.config.curated_prepend_max)
        {
            records.push(GeneratedRecord::from_symbols(
                entry.symbols.clone(),
                group,
                style,
                &self.tables,
            )?);
        }
        records.push(base);
        records.extend(siblings);

        while records.len() < n {
            records.push(self.random_record(group, style, rng)?);
        }
        records.truncate(n);
        Ok(records)
    }

    /// A fully random pad record: 2 or 3 symbols drawn from the group-keyed
    /// fallback pool, not seed-derived.
    fn random_record<R: Rng + ?Sized>(
        &self,
        group: GroupSelector,
        style: StyleSelector,
        rng: &mut R,
    ) -> Result<GeneratedRecord, TableError> {
        let fallback = self.tables.fallback_for(group)?;
        if fallback.pool.is_empty() {
            return Err(TableError::invalid_fallback(group, "empty pad pool"));
        }
        let units = rng.gen_range(2..=3);
        let symbols: Vec<String> = (0..units)
            .map(|_| {
                fallback
                    .pool
                    .choose(rng)
                    .cloned()
                    .unwrap_or_default()
            })
            .collect();
        GeneratedRecord::from_symbols(symbols, group, style, &self.tables)
    }

    /// The canned per-group result set, cycled to exactly `target_count`
    /// records with fresh ids.
    fn fallback_records(&self, group: GroupSelector) -> Vec<GeneratedRecord> {
        let n = self.config.target_count;
        match self.tables.fallback_for(group) {
            Ok(fallback) if !fallback.records.is_empty() => fallback
                .records
                .iter()
                .cycle()
                .take(n)
                .map(|entry| {
                    GeneratedRecord::pre_baked(
                        entry.symbols.clone(),
                        entry.pinyin.clone(),
                        entry.description.clone(),
                        group,
                    )
                })
                .collect(),
            _ => LAST_RESORT
                .iter()
                .cycle()
                .take(n)
                .map(|(first, second, pinyin, description)| {
                    GeneratedRecord::pre_baked(
                        vec![(*first).to_string(), (*second).to_string()],
                        *pinyin,
                        *description,
                        group,
                    )
                })
                .collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
