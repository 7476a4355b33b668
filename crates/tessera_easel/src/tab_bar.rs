//! Tab bar registry.

use tessera_carton::String;

use crate::config::TabBarConfig;
use crate::route::route_from_path;
use crate::webview::WebviewHandle;

/// Configured tab routes plus the webviews registered for them.
#[derive(Debug, Default)]
pub struct TabBar {
    routes: Vec<String>,
    webviews: Vec<WebviewHandle>,
    /// Drawn over page content
    pub cover: bool,
    pub height: f64,
}

impl TabBar {
    pub fn new(config: &TabBarConfig) -> Self {
        Self {
            routes: config
                .list
                .iter()
                .map(|item| String::from(route_from_path(&item.page_path)))
                .collect(),
            webviews: Vec::new(),
            cover: config.cover,
            height: config.height,
        }
    }

    /// Register the webview of a tab page.
    pub fn append(&mut self, webview: WebviewHandle) {
        self.webviews.push(webview);
    }

    /// Index of `route` among the configured tabs.
    pub fn index_of(&self, route: &str) -> Option<usize> {
        let route = route_from_path(route);
        self.routes.iter().position(|r| r == route)
    }

    pub fn is_tab_bar_route(&self, route: &str) -> bool {
        self.index_of(route).is_some()
    }

    pub fn webviews(&self) -> &[WebviewHandle] {
        &self.webviews
    }

    pub fn clear(&mut self) {
        self.webviews.clear();
    }
}
