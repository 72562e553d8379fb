//! Attribute Resolver
//!
//! Stage one of the pipeline: resolve the (group, style) pair to its
//! candidate character pool. Pure lookup, no side effects. The seed itself
//! plays no part here; blank-seed rejection happens in the orchestrator
//! before any stage runs.

use super::errors::TableError;
use super::selectors::{GroupSelector, StyleSelector};
use super::tables::NameTables;

/// Resolve the candidate pool for a (group, style) cell.
///
/// Validated tables make the error arms unreachable; they exist so the
/// orchestrator can degrade gracefully when handed unvalidated tables.
pub fn resolve(
    group: GroupSelector,
    style: StyleSelector,
    tables: &NameTables,
) -> Result<&[String], TableError> {
    tables.pool(group, style)
}
