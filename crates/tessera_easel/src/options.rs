//! Options bag for webview-rendered pages.

use serde::{Deserialize, Serialize};
use tessera_carton::String;

use crate::config::AppConfig;
use crate::route::{NavigationBarType, RouteMeta};
use crate::system::SystemInfo;
use crate::tab_bar::TabBar;

/// Layout and behaviour options passed to the page renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNodeOptions {
    pub css: bool,
    pub route: String,
    pub version: u32,
    pub locale: String,
    pub platform: String,
    pub pixel_ratio: f64,
    pub window_width: f64,
    pub disable_scroll: bool,
    pub on_page_scroll: bool,
    pub on_page_reach_bottom: bool,
    pub on_reach_bottom_distance: u32,
    pub statusbar_height: f64,
    pub window_top: f64,
    pub window_bottom: f64,
}

/// Build the options bag for `meta`.
pub fn init_page_options(
    meta: &RouteMeta,
    system: &impl SystemInfo,
    tab_bar: &TabBar,
    config: &AppConfig,
) -> PageNodeOptions {
    let statusbar_height = system.statusbar_height();
    let info = system.base_system_info();

    let window_top = if meta.navigation_bar.kind == NavigationBarType::Float {
        statusbar_height + config.navigation_bar_height
    } else {
        0.0
    };
    let window_bottom = if tab_bar.is_tab_bar_route(&meta.route) && tab_bar.cover {
        tab_bar.height
    } else {
        0.0
    };

    PageNodeOptions {
        css: true,
        route: meta.route.clone(),
        version: 1,
        locale: String::default(),
        platform: info.platform,
        pixel_ratio: info.pixel_ratio,
        window_width: info.window_width,
        disable_scroll: meta.disable_scroll,
        on_page_scroll: false,
        on_page_reach_bottom: false,
        on_reach_bottom_distance: meta
            .on_reach_bottom_distance
            .unwrap_or(config.on_reach_bottom_distance),
        statusbar_height,
        window_top,
        window_bottom,
    }
}
