//! Recording mock of the host platform.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tessera_carton::{FxHashMap, String};
use tessera_easel::{
    route::route_from_path, AppConfig, AppShell, AppState, AppWebviewAccessor, BaseSystemInfo,
    OpenType, PageInstance, PageInstanceFactory, PageNodeOptions, PageRef, PageRegistrar,
    PageRenderer, PageVm, Query, RouteMeta, RouteOptions, RouteResolver, SystemInfo, WeakWebview,
    Webview, WebviewHandle, WebviewHost, WebviewId,
};

pub const STATUSBAR_HEIGHT: f64 = 20.0;

/// Page VM created by the mock renderer or handed over by the native runtime.
#[derive(Default)]
pub struct MockVm {
    pub webview: RefCell<Option<WeakWebview>>,
    pub page: RefCell<Option<PageInstance>>,
}

impl AppWebviewAccessor for MockVm {
    fn app_webview(&self) -> Option<WebviewHandle> {
        self.webview.borrow().as_ref().and_then(|w| w.upgrade())
    }
}

impl PageVm for MockVm {
    fn attach(&self, webview: WeakWebview, page: PageInstance) {
        *self.webview.borrow_mut() = Some(webview);
        *self.page.borrow_mut() = Some(page);
    }
}

#[derive(Default)]
pub struct MockPlatform {
    next_id: Cell<u32>,
    routes: RefCell<FxHashMap<String, RouteMeta>>,
    webviews: RefCell<Vec<WebviewHandle>>,
    /// Lookups by id miss when set
    pub forget_webviews: Cell<bool>,

    pub created: RefCell<Vec<WebviewId>>,
    pub initialized: RefCell<Vec<(WebviewId, String)>>,
    pub rendered: RefCell<Vec<(WebviewId, String, PageNodeOptions)>>,
    pub page_instances: RefCell<Vec<PageInstance>>,
    pub entry_inits: Cell<usize>,
    pub splash_closes: Cell<usize>,
    pub navigate_finishes: Cell<usize>,
}

impl MockPlatform {
    pub fn new() -> Rc<Self> {
        let platform = Self::default();
        // id 1 belongs to the launch webview
        platform.next_id.set(2);
        Rc::new(platform)
    }

    pub fn route(&self, path: &str, meta: RouteMeta) {
        self.routes.borrow_mut().insert(String::from(path), meta);
    }

    /// Webview known to the host but not created through registration.
    pub fn host_webview(&self, id: WebviewId) -> WebviewHandle {
        let webview = Webview::new(id).into_handle();
        self.webviews.borrow_mut().push(Rc::clone(&webview));
        webview
    }

    pub fn next_webview(&self) -> WebviewHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.host_webview(WebviewId(id))
    }
}

impl RouteResolver for MockPlatform {
    fn resolve_route(&self, path: &str, _open_type: OpenType) -> RouteOptions {
        let meta = self
            .routes
            .borrow()
            .get(path)
            .cloned()
            .unwrap_or_else(|| RouteMeta::new(route_from_path(path)));
        RouteOptions {
            path: String::from(path),
            meta,
        }
    }
}

impl WebviewHost for MockPlatform {
    fn create_webview(&self, _path: &str, route: &RouteOptions, _query: &Query) -> WebviewHandle {
        let webview = self.next_webview();
        let id = {
            let mut w = webview.borrow_mut();
            w.nvue = route.meta.is_nvue;
            w.id
        };
        self.created.borrow_mut().push(id);
        webview
    }

    fn init_webview(&self, webview: &WebviewHandle, path: &str, _query: &Query, _meta: &RouteMeta) {
        let id = webview.borrow().id;
        self.initialized.borrow_mut().push((id, String::from(path)));
    }

    fn webview_by_id(&self, id: WebviewId) -> Option<WebviewHandle> {
        if self.forget_webviews.get() {
            return None;
        }
        self.webviews
            .borrow()
            .iter()
            .find(|w| w.borrow().id == id)
            .cloned()
    }
}

impl PageInstanceFactory for MockPlatform {
    fn create_page_instance(
        &self,
        open_type: OpenType,
        url: &str,
        query: &Query,
        meta: &RouteMeta,
    ) -> PageInstance {
        let page = PageInstance::new(open_type, url, query, meta);
        self.page_instances.borrow_mut().push(page.clone());
        page
    }
}

impl PageRenderer for MockPlatform {
    fn create_page(
        &self,
        id: WebviewId,
        route: &str,
        _query: &Query,
        page: PageInstance,
        options: PageNodeOptions,
    ) -> PageRef {
        self.rendered
            .borrow_mut()
            .push((id, String::from(route), options));
        let vm = MockVm::default();
        *vm.page.borrow_mut() = Some(page);
        Rc::new(vm)
    }
}

impl SystemInfo for MockPlatform {
    fn base_system_info(&self) -> BaseSystemInfo {
        BaseSystemInfo {
            platform: "android".into(),
            pixel_ratio: 2.0,
            window_width: 360.0,
        }
    }

    fn statusbar_height(&self) -> f64 {
        STATUSBAR_HEIGHT
    }
}

impl AppShell for MockPlatform {
    fn init_entry(&self) {
        self.entry_inits.set(self.entry_inits.get() + 1);
    }

    fn close_splashscreen(&self) {
        self.splash_closes.set(self.splash_closes.get() + 1);
    }

    fn navigate_finish(&self) {
        self.navigate_finishes.set(self.navigate_finishes.get() + 1);
    }
}

/// Fresh app state, platform and registrar.
pub fn setup(config: AppConfig) -> (Rc<AppState>, Rc<MockPlatform>, PageRegistrar<MockPlatform>) {
    let app = AppState::new(config);
    let platform = MockPlatform::new();
    let registrar = PageRegistrar::new(Rc::clone(&app), Rc::clone(&platform));
    (app, platform, registrar)
}
