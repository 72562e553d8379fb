//! Variation Expander
//!
//! Stage three of the pipeline: produce sibling variants of a base record.
//! Each sibling keeps the base's first symbol and re-rolls every subsequent
//! unit uniformly at random from the pool, so siblings share a leading
//! character with the base but diverge after it.
//!
//! This stage is intentionally non-deterministic, in contrast to the
//! synthesizer: expanding the same base twice yields different sibling sets
//! (overwhelmingly likely for pools with more than one symbol). A
//! single-symbol pool degenerates to repeats of that symbol, which is
//! acceptable, not an error.

use rand::seq::SliceRandom;
use rand::Rng;

use super::errors::TableError;
use super::record::GeneratedRecord;
use super::selectors::StyleSelector;
use super::tables::NameTables;

/// Expand `base` into `count` sibling records.
pub fn expand<R: Rng + ?Sized>(
    base: &GeneratedRecord,
    pool: &[String],
    count: usize,
    style: StyleSelector,
    tables: &NameTables,
    rng: &mut R,
) -> Result<Vec<GeneratedRecord>, TableError> {
    let mut siblings = Vec::with_capacity(count);
    for _ in 0..count {
        let mut symbols = Vec::with_capacity(base.symbols.len());
        for (i, unit) in base.symbols.iter().enumerate() {
            if i == 0 {
                symbols.push(unit.clone());
            } else {
                let rolled = pool.choose(rng).unwrap_or(unit);
                symbols.push(rolled.clone());
            }
        }
        siblings.push(GeneratedRecord::from_symbols(
            symbols, base.group, style, tables,
        )?);
    }
    Ok(siblings)
}

// ============================================================================
// Tests
// ============================================================================
