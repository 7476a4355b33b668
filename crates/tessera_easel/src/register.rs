//! Page registration.
//!
//! Reconciles a navigation request against the preload pool, creates or
//! adopts the webview, and puts the page (or an nvue placeholder) on the
//! live page stack.

use std::cell::Cell;
use std::rc::Rc;

use tessera_carton::String;

use crate::app::{AppShell, AppState};
use crate::options::init_page_options;
use crate::page::{PageEntry, PageInstanceFactory, PageRenderer, PlaceholderPage};
use crate::route::{route_from_path, OpenType, Query, RouteResolver};
use crate::system::SystemInfo;
use crate::webview::{WebviewHandle, WebviewHost};

/// Host services the registrar calls into.
pub trait Platform:
    RouteResolver + WebviewHost + PageInstanceFactory + PageRenderer + SystemInfo + AppShell
{
}

impl<T> Platform for T where
    T: RouteResolver + WebviewHost + PageInstanceFactory + PageRenderer + SystemInfo + AppShell
{
}

/// A navigation to register.
#[derive(Debug, Clone)]
pub struct RegisterPageRequest {
    pub url: String,
    pub path: String,
    pub query: Query,
    pub open_type: OpenType,
    /// Webview handed over by the native launch page
    pub webview: Option<WebviewHandle>,
}

impl RegisterPageRequest {
    pub fn new(url: impl Into<String>, path: impl Into<String>, open_type: OpenType) -> Self {
        Self {
            url: url.into(),
            path: path.into(),
            query: Query::default(),
            open_type,
            webview: None,
        }
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn with_webview(mut self, webview: WebviewHandle) -> Self {
        self.webview = Some(webview);
        self
    }
}

enum PreloadMatch {
    /// Page already live elsewhere; create a fresh webview
    InUse,
    /// Attached page put back on the stack
    Reused,
    /// No page yet; initialize this webview
    Adopt,
}

/// Registers pages against one app state.
pub struct PageRegistrar<P> {
    app: Rc<AppState>,
    platform: Rc<P>,
    entry_initialized: Cell<bool>,
}

impl<P: Platform + 'static> PageRegistrar<P> {
    pub fn new(app: Rc<AppState>, platform: Rc<P>) -> Self {
        Self {
            app,
            platform,
            entry_initialized: Cell::new(false),
        }
    }

    pub fn app(&self) -> &Rc<AppState> {
        &self.app
    }

    /// Register a page and return the webview hosting it.
    pub fn register_page(&self, request: RegisterPageRequest) -> WebviewHandle {
        let RegisterPageRequest {
            url,
            path,
            query,
            open_type,
            webview,
        } = request;

        if webview.is_some() {
            self.init_entry();
        }

        let mut webview = webview;
        let preloaded = self.app.preloads().get(&url);
        if let Some(preloaded) = preloaded {
            match self.match_preload(&path, &preloaded) {
                PreloadMatch::Reused => return preloaded,
                PreloadMatch::InUse => webview = None,
                PreloadMatch::Adopt => webview = Some(preloaded),
            }
        }

        let mut route_options = self.platform.resolve_route(&path, open_type);

        let webview = match webview {
            None => self
                .platform
                .create_webview(&path, &route_options, &query),
            Some(adopted) => {
                let id = adopted.borrow().id;
                let webview = match self.platform.webview_by_id(id) {
                    Some(found) => found,
                    None => {
                        tracing::warn!(path = %path, webview = %id, "webview lookup missed, using handle as given");
                        adopted
                    }
                };
                webview.borrow_mut().nvue = route_options.meta.is_nvue;
                webview
            }
        };

        let id = webview.borrow().id;
        route_options.meta.id = Some(id.0);

        if route_options.meta.is_tab_bar {
            self.app.tab_bar_mut().append(Rc::clone(&webview));
        }

        tracing::debug!(path = %path, webview = %id, "registerPage");

        self.platform
            .init_webview(&webview, &path, &query, &route_options.meta);

        let route = route_from_path(&path);
        webview.borrow_mut().route = Some(String::from(route));

        let page_instance =
            self.platform
                .create_page_instance(open_type, &url, &query, &route_options.meta);

        self.init_nvue_entry_page(&webview);

        let nvue = webview.borrow().nvue;
        if nvue {
            let placeholder = PlaceholderPage::new(&webview, page_instance, &self.app);
            self.app
                .pages_mut()
                .push(PageEntry::Placeholder(placeholder));
        } else {
            let options = init_page_options(
                &route_options.meta,
                &*self.platform,
                &self.app.tab_bar(),
                &self.app.config,
            );
            let page = self
                .platform
                .create_page(id, route, &query, page_instance, options);
            self.app.pages_mut().push(PageEntry::Page(Rc::clone(&page)));

            let mut webview = webview.borrow_mut();
            if webview.preload {
                webview.page = Some(PageEntry::Page(page));
            }
        }

        webview
    }

    fn init_entry(&self) {
        if self.entry_initialized.replace(true) {
            return;
        }
        tracing::debug!("init app entry");
        self.platform.init_entry();
    }

    fn match_preload(&self, path: &str, preloaded: &WebviewHandle) -> PreloadMatch {
        let (id, attached) = {
            let webview = preloaded.borrow();
            (webview.id, webview.page.clone())
        };
        let Some(page) = attached else {
            return PreloadMatch::Adopt;
        };

        let in_use = self.app.pages().contains(&page);
        if in_use {
            tracing::debug!(path, webview = %id, "preload webview already in use");
            PreloadMatch::InUse
        } else {
            self.app.pages_mut().push(page);
            tracing::debug!(path, webview = %id, "reuse preload webview");
            PreloadMatch::Reused
        }
    }

    /// Resume a launch suspended on a native entry page.
    fn init_nvue_entry_page(&self, webview: &WebviewHandle) {
        if !webview.borrow().is_launch_nvue() {
            return;
        }

        let splash = &self.app.config.splashscreen;
        if splash.autoclose && !splash.always_show_before_render {
            tracing::debug!("close splashscreen");
            self.platform.close_splashscreen();
        }

        let platform = Rc::clone(&self.platform);
        self.app.on_ready(move || platform.navigate_finish());
    }
}
