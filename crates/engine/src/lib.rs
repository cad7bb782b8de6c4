//! `gridset-engine`: responsive grid utility generator.
//!
//! Pure engine crate: reads grid sets, breakpoints, and spacing from a theme,
//! resolves single-level `extends`, and emits one utility class per grid set.
//! Theme access, registration, and selector escaping are supplied by the host.

pub mod emit;
pub mod error;
pub mod escape;
pub mod model;
pub mod plugin;
pub mod resolve;
pub mod stylesheet;

pub use emit::{ResponsiveGap, UtilityMap, UtilityRule};
pub use error::{GridError, ResolveError};
pub use escape::escape_class_name;
pub use model::{
    default_grid_sets, define_grid, BreakpointOverride, BreakpointSet, BreakpointTable, GridSet,
    GridSetTable, ResolvedGridSet, ResolvedGridTable, Shape, SpacingTable,
};
pub use plugin::{GridOptions, GridOutput, GridPlugin, ThemeLookup, UtilitySink};
pub use resolve::resolve_table;
pub use stylesheet::Stylesheet;
