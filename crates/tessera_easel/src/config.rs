//! App configuration loading.
//!
//! Reads `tessera.config.json` from the app root. Every field is optional;
//! a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tessera_carton::String;

/// Config file name looked up by [`load_config`].
pub const CONFIG_FILE: &str = "tessera.config.json";

/// Navigation bar height added to the status bar for floating bars.
pub const NAVBAR_HEIGHT: f64 = 44.0;

/// Default distance from the bottom that triggers `onReachBottom`.
pub const ON_REACH_BOTTOM_DISTANCE: u32 = 50;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level app configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub splashscreen: SplashscreenConfig,

    #[serde(default)]
    pub tab_bar: TabBarConfig,

    /// Height of the native navigation bar.
    #[serde(default = "default_navigation_bar_height")]
    pub navigation_bar_height: f64,

    /// Used when a route does not set its own distance.
    #[serde(default = "default_on_reach_bottom_distance")]
    pub on_reach_bottom_distance: u32,
}

fn default_navigation_bar_height() -> f64 {
    NAVBAR_HEIGHT
}

fn default_on_reach_bottom_distance() -> u32 {
    ON_REACH_BOTTOM_DISTANCE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            splashscreen: SplashscreenConfig::default(),
            tab_bar: TabBarConfig::default(),
            navigation_bar_height: default_navigation_bar_height(),
            on_reach_bottom_distance: default_on_reach_bottom_distance(),
        }
    }
}

/// Launch splash screen behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SplashscreenConfig {
    /// Close the splash as soon as the entry page is registered.
    #[serde(default)]
    pub autoclose: bool,

    /// Keep the splash until the first page has rendered.
    #[serde(default)]
    pub always_show_before_render: bool,
}

/// Tab bar configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TabBarConfig {
    #[serde(default)]
    pub list: Vec<TabBarItem>,

    /// Whether the tab bar is drawn over page content.
    #[serde(default)]
    pub cover: bool,

    #[serde(default)]
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TabBarItem {
    pub page_path: String,
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> ConfigResult<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&content)?;
    Ok(config)
}

/// Load `tessera.config.json` from the given directory (or CWD if None).
///
/// Unreadable or invalid files are logged and replaced by defaults.
pub fn load_config(dir: Option<&Path>) -> AppConfig {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let config_path = base.join(CONFIG_FILE);

    if !config_path.exists() {
        return AppConfig::default();
    }

    match read_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %config_path.display(), error = %e, "failed to load config");
            AppConfig::default()
        }
    }
}
