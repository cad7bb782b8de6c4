//! Translate resolved grid sets into utility rules.

use indexmap::IndexMap;
use log::debug;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::model::{BreakpointTable, ResolvedGridSet, Shape, SpacingTable};

/// Ordered `property -> value` declarations.
pub type Declarations = IndexMap<String, String>;

/// Selector -> rule, in emission order.
pub type UtilityMap = IndexMap<String, UtilityRule>;

/// One utility class: its own declarations plus nested media blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtilityRule {
    pub declarations: Declarations,
    /// Keyed by the full at-rule prelude, e.g. `@media (min-width: 768px)`.
    pub media: IndexMap<String, Declarations>,
}

impl UtilityRule {
    pub fn declaration(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }
}

/// Serializes in the CSS-in-JS shape: declarations first, then at-rule blocks.
impl Serialize for UtilityRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len() + self.media.len()))?;
        for (property, value) in &self.declarations {
            map.serialize_entry(property, value)?;
        }
        for (query, block) in &self.media {
            map.serialize_entry(query, block)?;
        }
        map.end()
    }
}

/// Which property a breakpoint-level `gap` is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponsiveGap {
    /// `gap`.
    #[default]
    Gap,
    /// `padding`, overwriting any breakpoint `padding`. Matches stylesheets
    /// generated by older releases.
    LegacyPadding,
}

impl ResponsiveGap {
    pub fn property(&self) -> &'static str {
        match self {
            Self::Gap => "gap",
            Self::LegacyPadding => "padding",
        }
    }
}

pub fn media_query(min_width: &str) -> String {
    format!("@media (min-width: {min_width})")
}

pub fn grid_template_columns(cols: u32) -> String {
    format!("repeat({cols}, minmax(0, 1fr))")
}

/// Look `value` up as a spacing alias; unknown aliases pass through as literals.
pub fn resolve_spacing<'a>(value: &'a str, spacing: &'a SpacingTable) -> &'a str {
    spacing.get(value).map(String::as_str).unwrap_or(value)
}

/// Shape translation shared by the base class and every breakpoint block.
fn shape_declarations(shape: &Shape, spacing: &SpacingTable, gap_property: &str) -> Declarations {
    let mut declarations = Declarations::new();
    if let Some(cols) = shape.cols.filter(|c| *c > 0) {
        declarations.insert("grid-template-columns".into(), grid_template_columns(cols));
    }
    if let Some(padding) = shape.padding.as_deref().filter(|p| !p.is_empty()) {
        declarations.insert("padding".into(), resolve_spacing(padding, spacing).to_string());
    }
    if let Some(gap) = shape.gap.as_deref().filter(|g| !g.is_empty()) {
        declarations.insert(gap_property.into(), resolve_spacing(gap, spacing).to_string());
    }
    declarations
}

/// Build the rule for one resolved grid set.
pub fn emit_grid_set(
    name: &str,
    set: &ResolvedGridSet,
    breakpoints: &BreakpointTable,
    spacing: &SpacingTable,
    responsive_gap: ResponsiveGap,
) -> UtilityRule {
    let mut declarations = Declarations::new();
    declarations.insert("display".into(), "grid".into());
    declarations.extend(shape_declarations(&set.shape(), spacing, "gap"));

    let mut media = IndexMap::new();
    for (bp, shape) in &set.breakpoints {
        let Some(min_width) = breakpoints.get(bp).filter(|w| !w.is_empty()) else {
            debug!("grid set '{name}': skipping unknown breakpoint '{bp}'");
            continue;
        };
        media.insert(
            media_query(min_width),
            shape_declarations(shape, spacing, responsive_gap.property()),
        );
    }

    UtilityRule {
        declarations,
        media,
    }
}

/// Selector for grid set `name`: `.` followed by the escaped `grid-<name>`.
pub fn grid_selector<E>(name: &str, escape: E) -> String
where
    E: Fn(&str) -> String,
{
    format!(".{}", escape(&format!("grid-{name}")))
}
