//! Route options resolved per navigation.

use serde::{Deserialize, Serialize};
use tessera_carton::{FxHashMap, String};

/// Page query parameters
pub type Query = FxHashMap<String, String>;

/// How a navigation was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpenType {
    AppLaunch,
    NavigateTo,
    RedirectTo,
    ReLaunch,
    SwitchTab,
    NavigateBack,
}

/// Native navigation bar style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationBarType {
    #[default]
    Default,
    Transparent,
    Float,
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationBar {
    #[serde(rename = "type", default)]
    pub kind: NavigationBarType,
}

/// Per-route configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    /// Numeric id of the webview hosting the route, known after creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    /// Route without leading slash (`pages/index/index`)
    pub route: String,

    #[serde(default)]
    pub is_entry: bool,

    #[serde(default)]
    pub is_tab_bar: bool,

    /// Rendered by the native runtime instead of the webview renderer
    #[serde(rename = "isNVue", default)]
    pub is_nvue: bool,

    #[serde(default)]
    pub navigation_bar: NavigationBar,

    #[serde(default)]
    pub disable_scroll: bool,

    /// Overrides the app-wide default when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_reach_bottom_distance: Option<u32>,

    /// Custom route fields, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RouteMeta {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            ..Self::default()
        }
    }
}

/// Route options for one navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    /// Absolute page path (`/pages/index/index`)
    pub path: String,
    pub meta: RouteMeta,
}

/// Resolves route options for a page path.
pub trait RouteResolver {
    fn resolve_route(&self, path: &str, open_type: OpenType) -> RouteOptions;
}

/// `/pages/index/index` -> `pages/index/index`
pub fn route_from_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}
