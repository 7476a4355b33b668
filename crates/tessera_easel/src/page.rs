//! Page instances, page VMs and the nvue placeholder.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use tessera_carton::String;

use crate::app::AppState;
use crate::options::PageNodeOptions;
use crate::route::{route_from_path, OpenType, Query, RouteMeta};
use crate::webview::{WeakWebview, WebviewHandle, WebviewId};

/// Internal page instance (`$page`) handed to the page VM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInstance {
    pub id: Option<u32>,
    /// `/pages/index/index`
    pub path: String,
    /// `pages/index/index`
    pub route: String,
    /// Requested url including query
    pub full_path: String,
    pub options: Query,
    pub meta: RouteMeta,
    pub open_type: OpenType,
}

impl PageInstance {
    pub fn new(open_type: OpenType, url: &str, query: &Query, meta: &RouteMeta) -> Self {
        let route = String::from(route_from_path(&meta.route));
        let mut path = String::with_capacity(route.len() + 1);
        path.push('/');
        path.push_str(&route);

        Self {
            id: meta.id,
            path,
            route,
            full_path: String::from(url),
            options: query.clone(),
            meta: meta.clone(),
            open_type,
        }
    }
}

/// Builds page instances for registered pages.
pub trait PageInstanceFactory {
    fn create_page_instance(
        &self,
        open_type: OpenType,
        url: &str,
        query: &Query,
        meta: &RouteMeta,
    ) -> PageInstance {
        PageInstance::new(open_type, url, query, meta)
    }
}

/// Access to the webview a page lives in (`$getAppWebview`).
pub trait AppWebviewAccessor {
    fn app_webview(&self) -> Option<WebviewHandle>;
}

/// A live page VM.
///
/// Native pages construct their VM already satisfying this interface; the
/// placeholder only has to hand over the webview and the page instance.
pub trait PageVm: AppWebviewAccessor {
    /// Bind the VM to its webview and give it ownership of its page instance.
    fn attach(&self, webview: WeakWebview, page: PageInstance);
}

pub type PageRef = Rc<dyn PageVm>;

/// Creates webview-rendered pages.
pub trait PageRenderer {
    fn create_page(
        &self,
        id: WebviewId,
        route: &str,
        query: &Query,
        page: PageInstance,
        options: PageNodeOptions,
    ) -> PageRef;
}

/// Entry of the live page stack.
#[derive(Clone)]
pub enum PageEntry {
    /// Stand-in for a native page that has not been created yet
    Placeholder(Rc<PlaceholderPage>),
    Page(PageRef),
}

impl PageEntry {
    /// Identity comparison.
    pub fn same(&self, other: &PageEntry) -> bool {
        match (self, other) {
            (Self::Placeholder(a), Self::Placeholder(b)) => Rc::ptr_eq(a, b),
            (Self::Page(a), Self::Page(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            _ => false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    pub fn app_webview(&self) -> Option<WebviewHandle> {
        match self {
            Self::Placeholder(placeholder) => placeholder.app_webview(),
            Self::Page(page) => page.app_webview(),
        }
    }
}

impl fmt::Debug for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placeholder(p) => write!(f, "Placeholder({:p})", Rc::as_ptr(p)),
            Self::Page(p) => write!(f, "Page({:p})", Rc::as_ptr(p)),
        }
    }
}

/// Placeholder pushed for an nvue page until the native runtime reports
/// the real VM.
pub struct PlaceholderPage {
    webview: WeakWebview,
    app: Weak<AppState>,
    /// Taken by the swap, so the swap runs at most once.
    page: RefCell<Option<PageInstance>>,
}

impl PlaceholderPage {
    pub fn new(webview: &WebviewHandle, page: PageInstance, app: &Rc<AppState>) -> Rc<Self> {
        Rc::new(Self {
            webview: Rc::downgrade(webview),
            app: Rc::downgrade(app),
            page: RefCell::new(Some(page)),
        })
    }

    /// Page instance held until the swap.
    pub fn page(&self) -> Option<PageInstance> {
        self.page.borrow().clone()
    }

    pub fn is_swapped(&self) -> bool {
        self.page.borrow().is_none()
    }

    /// Called by the native runtime once the real VM exists.
    ///
    /// The VM takes over the page instance and the placeholder's slot in
    /// the page stack. Returns whether the stack entry was replaced.
    pub fn on_nvue_page_created(self: &Rc<Self>, vm: PageRef) -> bool {
        let Some(page) = self.page.borrow_mut().take() else {
            tracing::warn!("nvue page created twice for the same placeholder");
            return false;
        };

        vm.attach(self.webview.clone(), page);

        let swapped = match self.app.upgrade() {
            Some(app) => {
                let placeholder = PageEntry::Placeholder(Rc::clone(self));
                let mut pages = app.pages_mut();
                match pages.position(&placeholder) {
                    Some(index) => {
                        pages.replace_at(index, PageEntry::Page(Rc::clone(&vm)));
                        true
                    }
                    None => false,
                }
            }
            None => false,
        };

        if let Some(webview) = self.webview.upgrade() {
            let mut webview = webview.borrow_mut();
            tracing::debug!(webview = %webview.id, swapped, "nvue page created");
            if webview.preload {
                webview.page = Some(PageEntry::Page(vm));
            }
        }

        swapped
    }
}

impl AppWebviewAccessor for PlaceholderPage {
    fn app_webview(&self) -> Option<WebviewHandle> {
        self.webview.upgrade()
    }
}
