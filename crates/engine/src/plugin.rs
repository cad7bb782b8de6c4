//! The grid plugin: reads grid sets from a theme, resolves them, and
//! registers one utility per set with the host.

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::emit::{emit_grid_set, grid_selector, ResponsiveGap, UtilityMap};
use crate::error::GridError;
use crate::model::{default_grid_sets, BreakpointTable, GridSetTable, ResolvedGridTable, SpacingTable};
use crate::resolve::resolve_table;

pub const DEFAULT_CONFIG_KEY: &str = "grid";
pub const SCREENS_KEY: &str = "screens";
pub const SPACING_KEY: &str = "spacing";

/// Read access to the host's theme.
pub trait ThemeLookup {
    fn lookup(&self, key: &str) -> Option<&Value>;
}

/// A JSON object used directly as a theme.
impl ThemeLookup for Value {
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// The host's utility registration capability.
pub trait UtilitySink {
    fn add_utilities(&mut self, utilities: UtilityMap);
}

impl UtilitySink for UtilityMap {
    fn add_utilities(&mut self, utilities: UtilityMap) {
        self.extend(utilities);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridOptions {
    /// Theme key holding the grid sets. Distinct keys allow independent grid configurations.
    pub config_key: String,
    pub responsive_gap: ResponsiveGap,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            config_key: DEFAULT_CONFIG_KEY.to_string(),
            responsive_gap: ResponsiveGap::default(),
        }
    }
}

impl GridOptions {
    pub fn with_config_key(mut self, key: impl Into<String>) -> Self {
        self.config_key = key.into();
        self
    }

    pub fn with_responsive_gap(mut self, mode: ResponsiveGap) -> Self {
        self.responsive_gap = mode;
        self
    }
}

/// Result of one generation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GridOutput {
    pub utilities: UtilityMap,
    /// Every grid set in resolved form, for other consumers of the same theme.
    pub resolved: ResolvedGridTable,
}

#[derive(Debug, Clone, Default)]
pub struct GridPlugin {
    options: GridOptions,
}

impl GridPlugin {
    pub fn new(options: GridOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Theme values this plugin contributes: the `standard` grid set under the config key.
    pub fn default_theme(&self) -> Value {
        let mut theme = serde_json::Map::new();
        theme.insert(
            self.options.config_key.clone(),
            json!({
                "standard": {
                    "cols": 1,
                    "gap": "1rem",
                    "md": { "cols": 2 },
                    "lg": { "cols": 3 },
                }
            }),
        );
        Value::Object(theme)
    }

    /// Resolve and emit every grid set in `theme` without registering anything.
    pub fn generate<E>(&self, theme: &dyn ThemeLookup, escape: E) -> Result<GridOutput, GridError>
    where
        E: Fn(&str) -> String,
    {
        let grid_sets = match read_table::<GridSetTable>(theme, &self.options.config_key)? {
            Some(sets) => sets,
            None => {
                warn!(
                    "no grid sets under theme key '{}', using defaults",
                    self.options.config_key
                );
                default_grid_sets()
            }
        };
        let breakpoints: BreakpointTable = read_table(theme, SCREENS_KEY)?.unwrap_or_default();
        let spacing: SpacingTable = read_table(theme, SPACING_KEY)?.unwrap_or_default();

        let resolved = resolve_table(&grid_sets)?;

        let mut utilities = UtilityMap::with_capacity(resolved.len());
        for (name, set) in &resolved {
            let rule = emit_grid_set(
                name,
                set,
                &breakpoints,
                &spacing,
                self.options.responsive_gap,
            );
            utilities.insert(grid_selector(name, &escape), rule);
        }

        Ok(GridOutput {
            utilities,
            resolved,
        })
    }

    /// Generate and register the utilities with `sink`. Nothing is registered on error.
    pub fn run<E>(
        &self,
        theme: &dyn ThemeLookup,
        sink: &mut dyn UtilitySink,
        escape: E,
    ) -> Result<ResolvedGridTable, GridError>
    where
        E: Fn(&str) -> String,
    {
        let output = self.generate(theme, escape)?;
        info!(
            "registering {} grid utilit{} from theme key '{}'",
            output.utilities.len(),
            if output.utilities.len() == 1 { "y" } else { "ies" },
            self.options.config_key
        );
        sink.add_utilities(output.utilities);
        Ok(output.resolved)
    }
}

/// `None` when the key is absent or null.
fn read_table<T: DeserializeOwned>(
    theme: &dyn ThemeLookup,
    key: &str,
) -> Result<Option<T>, GridError> {
    match theme.lookup(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|e| GridError::ThemeValue {
                key: key.to_string(),
                message: e.to_string(),
            }),
    }
}
