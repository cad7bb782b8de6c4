//! Single-level `extends` resolution.
//!
//! Every lookup reads the raw input table, never an already-resolved entry,
//! so a chain `C -> B -> A` gives `C` only what `B` itself declares.

use indexmap::IndexMap;
use log::debug;

use crate::error::ResolveError;
use crate::model::{
    BreakpointOverride, BreakpointSet, GridSet, GridSetTable, ResolvedGridSet, ResolvedGridTable,
    Shape,
};

/// Resolve every grid set in `table`. All entries are attempted; failures are collected.
pub fn resolve_table(table: &GridSetTable) -> Result<ResolvedGridTable, Vec<ResolveError>> {
    let mut resolved = ResolvedGridTable::with_capacity(table.len());
    let mut errors = Vec::new();

    for (name, raw) in table {
        match resolve_grid_set(name, raw, table) {
            Ok(set) => {
                resolved.insert(name.clone(), set);
            }
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(resolved)
    } else {
        Err(errors)
    }
}

/// Resolve one grid set `raw` (named `name`) against the raw `table`.
pub fn resolve_grid_set(
    name: &str,
    raw: &GridSet,
    table: &GridSetTable,
) -> Result<ResolvedGridSet, ResolveError> {
    // An empty `extends` counts as absent.
    let parent_extends = raw.extends.as_deref().filter(|t| !t.is_empty());
    let base = match parent_extends {
        Some(target) => Some(table.get(target).ok_or_else(|| {
            ResolveError::UnknownExtendsTarget {
                grid: name.to_string(),
                target: target.to_string(),
            }
        })?),
        None => None,
    };

    // Shallow merge: own keys win, inherited keys keep their position.
    let mut refined: IndexMap<String, BreakpointSet> = base
        .map(|b| b.breakpoints.clone())
        .unwrap_or_default();
    for (bp, set) in &raw.breakpoints {
        refined.insert(bp.clone(), set.clone());
    }

    let mut breakpoints = IndexMap::with_capacity(refined.len());
    for (bp, set) in refined {
        let shape = match BreakpointOverride::classify(&bp, &set) {
            BreakpointOverride::Direct(shape) => shape,
            BreakpointOverride::InheritFromParentExtends(inherited) => {
                inherit_breakpoint(name, parent_extends, &inherited, table)?
            }
        };
        breakpoints.insert(bp, shape);
    }

    let resolved = ResolvedGridSet {
        cols: raw.cols.or_else(|| base.and_then(|b| b.cols)),
        padding: raw
            .padding
            .clone()
            .or_else(|| base.and_then(|b| b.padding.clone())),
        gap: raw.gap.clone().or_else(|| base.and_then(|b| b.gap.clone())),
        breakpoints,
    };

    debug!(
        "resolved grid set '{}' ({} breakpoint override(s))",
        name,
        resolved.breakpoints.len()
    );
    Ok(resolved)
}

fn inherit_breakpoint(
    name: &str,
    parent_extends: Option<&str>,
    breakpoint: &str,
    table: &GridSetTable,
) -> Result<Shape, ResolveError> {
    parent_extends
        .and_then(|target| table.get(target))
        .and_then(|target| target.breakpoints.get(breakpoint))
        .map(BreakpointSet::shape)
        .ok_or_else(|| ResolveError::UnknownBreakpointExtendsTarget {
            grid: name.to_string(),
            breakpoint: breakpoint.to_string(),
            target: parent_extends.map(str::to_string),
        })
}
