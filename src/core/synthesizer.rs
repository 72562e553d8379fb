//! Candidate Synthesizer
//!
//! Stage two of the pipeline: derive the base record from the seed string
//! and the resolved pool.
//!
//! Unit count comes from the seed's char count in exactly three bands:
//! short seeds (up to `short_seed_max` chars) get 2 units, long seeds (at
//! least `long_seed_min`) get 3, and seeds in between get 2 plus a coin
//! flip for a 3rd. Each unit's symbol is picked by taking the seed char at
//! a fixed position (first, middle, last), lowercasing it, and reducing its
//! code point modulo the pool length.
//!
//! Given a fixed RNG state the result is fully deterministic; without one,
//! only the mid band's unit count varies while the symbol chosen at each
//! position stays seed-determined. The expander is the deliberately
//! non-deterministic counterpart.

use rand::Rng;

use crate::config::GenerationConfig;

use super::errors::TableError;
use super::record::GeneratedRecord;
use super::selectors::{GroupSelector, StyleSelector};
use super::tables::NameTables;

/// Synthesize the deterministic base record for a seed.
///
/// `seed` is assumed trimmed and non-empty (the orchestrator rejects blank
/// seeds before any stage runs).
pub fn synthesize<R: Rng + ?Sized>(
    seed: &str,
    pool: &[String],
    group: GroupSelector,
    style: StyleSelector,
    tables: &NameTables,
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<GeneratedRecord, TableError> {
    if pool.is_empty() {
        return Err(TableError::EmptyCell { group, style });
    }

    let len = seed.chars().count();
    let units = unit_count(len, config, rng);
    let positions = unit_positions(len, units);

    let symbols: Vec<String> = positions
        .into_iter()
        .map(|pos| {
            let index = symbol_index(seed, pos, pool.len());
            pool[index].clone()
        })
        .collect();

    GeneratedRecord::from_symbols(symbols, group, style, tables)
}

/// The three-band unit count. Deliberately three bands, not a continuous
/// function: short seeds stay terse, long seeds get richer.
fn unit_count<R: Rng + ?Sized>(len: usize, config: &GenerationConfig, rng: &mut R) -> usize {
    if len <= config.short_seed_max {
        2
    } else if len >= config.long_seed_min {
        3
    } else if rng.gen_bool(third_unit_chance(config)) {
        3
    } else {
        2
    }
}

/// The mid-band coin weight, sanitized to a valid probability.
///
/// `third_unit_chance` comes from user config; `gen_bool` panics outside
/// [0, 1], so out-of-range values are clamped and non-finite ones fall back
/// to the default weight.
fn third_unit_chance(config: &GenerationConfig) -> f64 {
    let chance = config.third_unit_chance;
    if chance.is_finite() {
        chance.clamp(0.0, 1.0)
    } else {
        GenerationConfig::default().third_unit_chance
    }
}

/// Seed char positions per unit: first, (middle for 3 units), last.
fn unit_positions(len: usize, units: usize) -> Vec<usize> {
    let last = len.saturating_sub(1);
    if units == 2 {
        vec![0, last]
    } else {
        vec![0, len / 2, last]
    }
}

/// Map the seed char at `pos` to a pool index: lowercase code point modulo
/// pool length.
fn symbol_index(seed: &str, pos: usize, pool_len: usize) -> usize {
    let c = seed.chars().nth(pos).unwrap_or('\0');
    let lowered = c.to_lowercase().next().unwrap_or(c);
    (lowered as usize) % pool_len
}

// ============================================================================
// Tests
// ============================================================================
