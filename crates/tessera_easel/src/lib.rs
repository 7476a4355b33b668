//! Easel - The app-shell page runtime for Tessera.
//!
//! Registers pages on native webviews: preloaded webviews are reused when
//! possible, route metadata is resolved and tagged onto the webview, and
//! natively rendered (nvue) pages get a placeholder on the page stack until
//! the native runtime hands over the real page VM.
//!
//! All state lives in an [`AppState`] owned by the caller; the host
//! platform is reached through the traits bundled by [`Platform`].

pub mod app;
pub mod config;
pub mod options;
pub mod page;
pub mod preload;
pub mod register;
pub mod route;
pub mod stack;
pub mod system;
pub mod tab_bar;
pub mod webview;

pub use app::{AppShell, AppState, ReadyQueue};
pub use config::{
    load_config, read_config, AppConfig, ConfigError, ConfigResult, SplashscreenConfig,
    TabBarConfig, TabBarItem,
};
pub use options::{init_page_options, PageNodeOptions};
pub use page::{
    AppWebviewAccessor, PageEntry, PageInstance, PageInstanceFactory, PageRef, PageRenderer,
    PageVm, PlaceholderPage,
};
pub use preload::PreloadPool;
pub use register::{PageRegistrar, Platform, RegisterPageRequest};
pub use route::{
    NavigationBar, NavigationBarType, OpenType, Query, RouteMeta, RouteOptions, RouteResolver,
};
pub use stack::PageStack;
pub use system::{BaseSystemInfo, SystemInfo};
pub use tab_bar::TabBar;
pub use webview::{WeakWebview, Webview, WebviewHandle, WebviewHost, WebviewId};
