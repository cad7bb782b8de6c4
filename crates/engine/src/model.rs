//! Grid set definitions and their resolved form
//!
//! A grid set is a named bundle of layout properties (`cols`, `padding`,
//! `gap`) with optional per-breakpoint overrides and a single-level
//! `extends` reference. Every key that is not a shape key or `extends` is a
//! breakpoint sub-record, so the breakpoints live in a flattened, ordered map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Spacing aliases (`"4"` -> `"1rem"`), owned by the theme.
pub type SpacingTable = IndexMap<String, String>;

/// Breakpoint name -> minimum width (`"md"` -> `"768px"`), owned by the theme.
pub type BreakpointTable = IndexMap<String, String>;

/// Grid set name -> raw definition. Iteration order is insertion order.
pub type GridSetTable = IndexMap<String, GridSet>;

/// Grid set name -> resolved, extends-free definition.
pub type ResolvedGridTable = IndexMap<String, ResolvedGridSet>;

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// The three layout properties a grid set (or breakpoint override) can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
}

// ---------------------------------------------------------------------------
// Raw definitions
// ---------------------------------------------------------------------------

/// A breakpoint sub-record inside a grid set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
}

impl BreakpointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cols(mut self, cols: u32) -> Self {
        self.cols = Some(cols);
        self
    }

    pub fn with_padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn with_gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn with_extends(mut self, extends: impl Into<String>) -> Self {
        self.extends = Some(extends.into());
        self
    }

    /// The shape properties, dropping `extends`.
    pub fn shape(&self) -> Shape {
        Shape {
            cols: self.cols,
            padding: self.padding.clone(),
            gap: self.gap.clone(),
        }
    }
}

/// A raw grid set as authored in the theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    /// Any other key. Names that match no breakpoint are kept but never emitted.
    #[serde(flatten)]
    pub breakpoints: IndexMap<String, BreakpointSet>,
}

impl GridSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cols(mut self, cols: u32) -> Self {
        self.cols = Some(cols);
        self
    }

    pub fn with_padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn with_gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn with_extends(mut self, extends: impl Into<String>) -> Self {
        self.extends = Some(extends.into());
        self
    }

    pub fn with_breakpoint(mut self, name: impl Into<String>, set: BreakpointSet) -> Self {
        self.breakpoints.insert(name.into(), set);
        self
    }
}

// ---------------------------------------------------------------------------
// Breakpoint override
// ---------------------------------------------------------------------------

/// How a breakpoint sub-record contributes to its resolved grid set.
///
/// A sub-record carrying `extends` does not follow its own reference: the
/// same breakpoint name is looked up in the grid set named by the *parent's*
/// `extends`, and the sub-record's own `extends` value is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakpointOverride {
    Direct(Shape),
    InheritFromParentExtends(String),
}

impl BreakpointOverride {
    pub fn classify(breakpoint: &str, set: &BreakpointSet) -> Self {
        if set.extends.as_deref().is_some_and(|e| !e.is_empty()) {
            Self::InheritFromParentExtends(breakpoint.to_string())
        } else {
            Self::Direct(set.shape())
        }
    }
}

// ---------------------------------------------------------------------------
// Resolved form
// ---------------------------------------------------------------------------

/// A grid set merged with its `extends` target. Carries no `extends` at any level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedGridSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(flatten)]
    pub breakpoints: IndexMap<String, Shape>,
}

impl ResolvedGridSet {
    pub fn shape(&self) -> Shape {
        Shape {
            cols: self.cols,
            padding: self.padding.clone(),
            gap: self.gap.clone(),
        }
    }
}

impl From<Shape> for BreakpointSet {
    fn from(shape: Shape) -> Self {
        Self {
            cols: shape.cols,
            padding: shape.padding,
            gap: shape.gap,
            extends: None,
        }
    }
}

impl From<ResolvedGridSet> for GridSet {
    fn from(resolved: ResolvedGridSet) -> Self {
        Self {
            cols: resolved.cols,
            padding: resolved.padding,
            gap: resolved.gap,
            extends: None,
            breakpoints: resolved
                .breakpoints
                .into_iter()
                .map(|(name, shape)| (name, BreakpointSet::from(shape)))
                .collect(),
        }
    }
}

/// Turn a resolved table back into raw definitions, e.g. to feed another pass.
pub fn into_grid_table(resolved: ResolvedGridTable) -> GridSetTable {
    resolved
        .into_iter()
        .map(|(name, set)| (name, GridSet::from(set)))
        .collect()
}

// ---------------------------------------------------------------------------
// Declaration helper + defaults
// ---------------------------------------------------------------------------

/// Returns `grid_sets` unchanged. Lets callers build a table against the typed shape.
pub fn define_grid(grid_sets: GridSetTable) -> GridSetTable {
    grid_sets
}

/// The built-in `standard` grid set used when a theme supplies none.
pub fn default_grid_sets() -> GridSetTable {
    let mut sets = GridSetTable::new();
    sets.insert(
        "standard".into(),
        GridSet::new()
            .with_cols(1)
            .with_gap("1rem")
            .with_breakpoint("md", BreakpointSet::new().with_cols(2))
            .with_breakpoint("lg", BreakpointSet::new().with_cols(3)),
    );
    sets
}
