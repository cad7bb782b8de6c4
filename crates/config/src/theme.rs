// Theme documents
// Supports: TOML and JSON files, plugin option tables, plugin default layering

use std::fs;
use std::path::Path;

use gridset_engine::{escape_class_name, GridOptions, GridPlugin, Stylesheet, ThemeLookup};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Reserved top-level key holding plugin options rather than theme values.
const PLUGINS_KEY: &str = "plugins";

/// Per-plugin options (`[plugins.grid]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    pub grid: GridOptions,
}

/// A loaded theme: top-level keys (`grid`, `screens`, `spacing`, ...) as JSON values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeConfig {
    values: Map<String, Value>,
    pub plugins: PluginsConfig,
}

impl ThemeConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let document: Value =
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_value(document)
    }

    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let document: Value =
            serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_value(document)
    }

    /// Load a theme file; the extension picks the format.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, ConfigError> = match format.as_deref() {
            Some("toml") => Self::from_toml,
            Some("json") => Self::from_json,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let theme = parse(&content)?;
        debug!("loaded theme {} ({} key(s))", path.display(), theme.values.len());
        Ok(theme)
    }

    fn from_value(document: Value) -> Result<Self, ConfigError> {
        let Value::Object(mut values) = document else {
            return Err(ConfigError::Parse("theme document must be a table".into()));
        };
        let plugins = match values.remove(PLUGINS_KEY) {
            Some(raw) => serde_json::from_value(raw)
                .map_err(|e| ConfigError::Parse(format!("{PLUGINS_KEY}: {e}")))?,
            None => PluginsConfig::default(),
        };
        Ok(Self { values, plugins })
    }

    /// Layer `defaults` under this theme. Keys already present win wholesale.
    pub fn with_defaults(mut self, defaults: &Value) -> Self {
        if let Some(defaults) = defaults.as_object() {
            for (key, value) in defaults {
                if !self.values.contains_key(key) {
                    self.values.insert(key.clone(), value.clone());
                }
            }
        }
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The grid plugin configured by `[plugins.grid]`.
    pub fn grid_plugin(&self) -> GridPlugin {
        GridPlugin::new(self.plugins.grid.clone())
    }
}

impl ThemeLookup for ThemeConfig {
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

/// Load `path`, layer the grid plugin's defaults, and render its utilities.
pub fn build_stylesheet(path: &Path) -> Result<Stylesheet, ConfigError> {
    let theme = ThemeConfig::load(path)?;
    let plugin = theme.grid_plugin();
    let theme = theme.with_defaults(&plugin.default_theme());

    let mut sheet = Stylesheet::new();
    plugin.run(&theme, &mut sheet, escape_class_name)?;
    info!("built {} grid utilit(ies) from {}", sheet.len(), path.display());
    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridset_engine::ResponsiveGap;
    use serde_json::json;

    const THEME_TOML: &str = r#"
[screens]
md = "768px"
lg = "1024px"

[spacing]
"4" = "1rem"

[grid.cards]
cols = 2
padding = "4"

[grid.cards.md]
cols = 3
"#;

    #[test]
    fn parse_toml_theme() {
        let theme = ThemeConfig::from_toml(THEME_TOML).unwrap();
        let mut keys: Vec<_> = theme.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["grid", "screens", "spacing"]);
        assert_eq!(theme.lookup("screens").unwrap()["md"], "768px");
        assert_eq!(theme.lookup("grid").unwrap()["cards"]["md"]["cols"], 3);
        assert_eq!(theme.plugins, PluginsConfig::default());
    }

    #[test]
    fn parse_json_theme() {
        let theme = ThemeConfig::from_json(r#"{ "spacing": { "4": "1rem" } }"#).unwrap();
        assert_eq!(theme.lookup("spacing").unwrap()["4"], "1rem");
        assert!(theme.lookup("grid").is_none());
    }

    #[test]
    fn plugins_table_is_not_a_theme_value() {
        let input = format!(
            r#"{THEME_TOML}
[plugins.grid]
configKey = "layouts"
responsiveGap = "legacy_padding"
"#
        );
        let theme = ThemeConfig::from_toml(&input).unwrap();
        assert!(theme.lookup("plugins").is_none());
        assert_eq!(theme.plugins.grid.config_key, "layouts");
        assert_eq!(theme.plugins.grid.responsive_gap, ResponsiveGap::LegacyPadding);
        assert_eq!(theme.grid_plugin().options().config_key, "layouts");
    }

    #[test]
    fn reject_invalid_plugin_options() {
        let input = r#"
[plugins.grid]
responsiveGap = "margin"
"#;
        let err = ThemeConfig::from_toml(input).unwrap_err();
        assert!(err.to_string().contains("plugins"));
    }

    #[test]
    fn reject_non_table_document() {
        let err = ThemeConfig::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn reject_malformed_toml() {
        let err = ThemeConfig::from_toml("[grid\ncols = ").unwrap_err();
        assert!(err.to_string().starts_with("theme parse error"));
    }

    #[test]
    fn defaults_fill_missing_keys_only() {
        let theme = ThemeConfig::from_toml(THEME_TOML)
            .unwrap()
            .with_defaults(&json!({
                "grid": { "standard": { "cols": 1 } },
                "colors": { "red": "#f00" },
            }));

        // User grid sets replace the plugin's wholesale.
        let grid = theme.lookup("grid").unwrap();
        assert!(grid.get("standard").is_none());
        assert!(grid.get("cards").is_some());
        assert_eq!(theme.lookup("colors").unwrap()["red"], "#f00");
    }

    #[test]
    fn set_overrides_a_key() {
        let mut theme = ThemeConfig::default();
        theme.set("screens", json!({ "sm": "640px" }));
        assert_eq!(theme.lookup("screens").unwrap()["sm"], "640px");
    }
}
