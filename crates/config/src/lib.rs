// Theme loading
// A theme document supplies the grid sets, breakpoints, and spacing the
// engine reads, plus per-plugin options.

pub mod error;
pub mod theme;

pub use error::ConfigError;
pub use theme::{build_stylesheet, PluginsConfig, ThemeConfig};
