//! Native webview handles.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tessera_carton::String;

use crate::page::PageEntry;
use crate::route::{Query, RouteMeta, RouteOptions};

/// Numeric webview id assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WebviewId(pub u32);

impl WebviewId {
    /// The launch webview of the app
    pub const LAUNCH: Self = Self(1);
}

impl fmt::Display for WebviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State kept on a native webview.
#[derive(Debug)]
pub struct Webview {
    pub id: WebviewId,
    /// Page rendered by the native runtime
    pub nvue: bool,
    /// Route tag set on registration
    pub route: Option<String>,
    /// Created ahead of navigation by the preload pool
    pub preload: bool,
    /// Page occupying a preloaded webview
    pub page: Option<PageEntry>,
}

impl Webview {
    pub fn new(id: WebviewId) -> Self {
        Self {
            id,
            nvue: false,
            route: None,
            preload: false,
            page: None,
        }
    }

    pub fn into_handle(self) -> WebviewHandle {
        Rc::new(RefCell::new(self))
    }

    /// Whether this is the launch webview rendered natively.
    pub fn is_launch_nvue(&self) -> bool {
        self.id == WebviewId::LAUNCH && self.nvue
    }
}

/// Shared handle to a webview.
pub type WebviewHandle = Rc<RefCell<Webview>>;

/// Back-reference that does not keep the webview alive.
pub type WeakWebview = Weak<RefCell<Webview>>;

/// Native webview factory and lookup.
pub trait WebviewHost {
    /// Create the webview for a new page.
    fn create_webview(&self, path: &str, route: &RouteOptions, query: &Query) -> WebviewHandle;

    /// Apply size, orientation and style for the route.
    fn init_webview(&self, webview: &WebviewHandle, path: &str, query: &Query, meta: &RouteMeta);

    fn webview_by_id(&self, id: WebviewId) -> Option<WebviewHandle>;
}
