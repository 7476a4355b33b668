//! Page registration against a recording mock platform.

mod common;

use std::rc::Rc;

use common::{setup, MockVm, STATUSBAR_HEIGHT};
use tessera_easel::{
    AppConfig, AppWebviewAccessor, NavigationBarType, OpenType, PageEntry, PageRef,
    RegisterPageRequest, RouteMeta, SplashscreenConfig, TabBarConfig, TabBarItem, WebviewId,
};

fn navigate(url: &str) -> RegisterPageRequest {
    let path = url.split('?').next().unwrap_or(url);
    RegisterPageRequest::new(url, path, OpenType::NavigateTo)
}

fn nvue_meta(route: &str) -> RouteMeta {
    let mut meta = RouteMeta::new(route);
    meta.is_nvue = true;
    meta
}

#[test]
fn registers_fresh_page() {
    let (app, platform, registrar) = setup(AppConfig::default());

    let webview = registrar.register_page(navigate("/pages/index/index?id=1"));

    let id = webview.borrow().id;
    assert_eq!(platform.created.borrow().as_slice(), &[id]);
    assert_eq!(webview.borrow().route.as_deref(), Some("pages/index/index"));
    assert_eq!(platform.initialized.borrow()[0].1.as_str(), "/pages/index/index");

    let instances = platform.page_instances.borrow();
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].id, Some(id.0));
    assert_eq!(instances[0].full_path.as_str(), "/pages/index/index?id=1");

    let rendered = platform.rendered.borrow();
    assert_eq!(rendered[0].0, id);
    assert_eq!(rendered[0].1.as_str(), "pages/index/index");
    assert_eq!(rendered[0].2.window_top, 0.0);

    assert_eq!(app.pages().len(), 1);
    assert!(!app.pages().get(0).unwrap().is_placeholder());
}

#[test]
fn float_navigation_bar_offsets_window_top() {
    let (_app, platform, registrar) = setup(AppConfig::default());
    let mut meta = RouteMeta::new("pages/feed/feed");
    meta.navigation_bar.kind = NavigationBarType::Float;
    platform.route("/pages/feed/feed", meta);

    registrar.register_page(navigate("/pages/feed/feed"));

    let rendered = platform.rendered.borrow();
    assert_eq!(rendered[0].2.window_top, STATUSBAR_HEIGHT + 44.0);
    assert_eq!(rendered[0].2.statusbar_height, STATUSBAR_HEIGHT);
}

#[test]
fn adopts_then_reuses_preloaded_webview() {
    let (app, platform, registrar) = setup(AppConfig::default());
    let preloaded = platform.next_webview();
    app.preloads_mut()
        .insert("/pages/detail/detail", Rc::clone(&preloaded));

    // first navigation adopts the preloaded webview
    let webview = registrar.register_page(navigate("/pages/detail/detail"));
    assert!(Rc::ptr_eq(&webview, &preloaded));
    assert!(platform.created.borrow().is_empty());
    assert_eq!(platform.page_instances.borrow().len(), 1);

    let page = preloaded.borrow().page.clone().expect("preload records its page");
    assert!(app.pages().contains(&page));

    // navigate back, then to the same url again
    app.pages_mut().remove(&page);
    let webview = registrar.register_page(navigate("/pages/detail/detail"));

    assert!(Rc::ptr_eq(&webview, &preloaded));
    assert!(platform.created.borrow().is_empty());
    assert_eq!(platform.page_instances.borrow().len(), 1);
    assert_eq!(platform.rendered.borrow().len(), 1);
    assert_eq!(app.pages().len(), 1);
    assert_eq!(app.pages().iter().filter(|p| p.same(&page)).count(), 1);
}

#[test]
fn preload_in_use_creates_new_webview() {
    let (app, platform, registrar) = setup(AppConfig::default());
    let preloaded = platform.next_webview();
    app.preloads_mut()
        .insert("/pages/detail/detail", Rc::clone(&preloaded));

    let vm: PageRef = Rc::new(MockVm::default());
    let live = PageEntry::Page(vm);
    preloaded.borrow_mut().page = Some(live.clone());
    app.pages_mut().push(live);

    let webview = registrar.register_page(navigate("/pages/detail/detail"));

    assert!(!Rc::ptr_eq(&webview, &preloaded));
    assert_eq!(platform.created.borrow().len(), 1);
    assert_eq!(app.pages().len(), 2);
}

#[test]
fn tab_bar_route_is_appended_and_covered() {
    let config = AppConfig {
        tab_bar: TabBarConfig {
            list: vec![TabBarItem {
                page_path: "pages/home/home".into(),
            }],
            cover: true,
            height: 56.0,
        },
        ..AppConfig::default()
    };
    let (app, platform, registrar) = setup(config);
    let mut meta = RouteMeta::new("pages/home/home");
    meta.is_tab_bar = true;
    platform.route("/pages/home/home", meta);

    let webview = registrar.register_page(RegisterPageRequest::new(
        "/pages/home/home",
        "/pages/home/home",
        OpenType::SwitchTab,
    ));

    let tab_bar = app.tab_bar();
    assert_eq!(tab_bar.webviews().len(), 1);
    assert!(Rc::ptr_eq(&tab_bar.webviews()[0], &webview));
    assert_eq!(platform.rendered.borrow()[0].2.window_bottom, 56.0);

    // not a tab route: no bottom inset
    drop(tab_bar);
    registrar.register_page(navigate("/pages/detail/detail"));
    assert_eq!(platform.rendered.borrow()[1].2.window_bottom, 0.0);
}

#[test]
fn nvue_placeholder_is_swapped_in_place() {
    let (app, platform, registrar) = setup(AppConfig::default());
    platform.route("/pages/native/native", nvue_meta("pages/native/native"));

    registrar.register_page(navigate("/pages/index/index"));
    let webview = registrar.register_page(navigate("/pages/native/native"));
    registrar.register_page(navigate("/pages/other/other"));

    assert!(webview.borrow().nvue);
    assert_eq!(platform.rendered.borrow().len(), 2);

    let (first, placeholder, last) = {
        let pages = app.pages();
        assert_eq!(pages.len(), 3);
        (
            pages.get(0).cloned().unwrap(),
            pages.get(1).cloned().unwrap(),
            pages.get(2).cloned().unwrap(),
        )
    };
    let PageEntry::Placeholder(placeholder_page) = &placeholder else {
        panic!("expected placeholder, got {placeholder:?}");
    };
    assert!(Rc::ptr_eq(&placeholder_page.app_webview().unwrap(), &webview));

    let vm = Rc::new(MockVm::default());
    assert!(placeholder_page.on_nvue_page_created(vm.clone()));

    let pages = app.pages();
    assert_eq!(pages.len(), 3);
    assert!(pages.get(0).unwrap().same(&first));
    assert!(pages.get(2).unwrap().same(&last));
    let vm_ref: PageRef = vm.clone();
    assert_eq!(pages.position(&PageEntry::Page(vm_ref)), Some(1));
    assert!(!pages.contains(&placeholder));
    drop(pages);

    assert!(Rc::ptr_eq(&vm.app_webview().unwrap(), &webview));
    let page = vm.page.borrow().clone().unwrap();
    assert_eq!(page.route.as_str(), "pages/native/native");
    assert_eq!(page.id, Some(webview.borrow().id.0));
    assert!(placeholder_page.is_swapped());

    // not a preload: nothing recorded on the webview
    assert!(webview.borrow().page.is_none());

    // a second notification does nothing
    assert!(!placeholder_page.on_nvue_page_created(Rc::new(MockVm::default())));
    assert_eq!(app.pages().len(), 3);
}

#[test]
fn nvue_swap_records_page_on_preloaded_webview() {
    let (app, platform, registrar) = setup(AppConfig::default());
    platform.route("/pages/native/native", nvue_meta("pages/native/native"));
    let preloaded = platform.next_webview();
    app.preloads_mut()
        .insert("/pages/native/native", Rc::clone(&preloaded));

    registrar.register_page(navigate("/pages/native/native"));
    assert!(preloaded.borrow().nvue);
    assert!(preloaded.borrow().page.is_none());

    let placeholder = match app.pages().get(0).cloned() {
        Some(PageEntry::Placeholder(placeholder)) => placeholder,
        other => panic!("expected placeholder, got {other:?}"),
    };
    let vm: PageRef = Rc::new(MockVm::default());
    placeholder.on_nvue_page_created(Rc::clone(&vm));

    let recorded = preloaded.borrow().page.clone().unwrap();
    assert!(recorded.same(&PageEntry::Page(vm)));
}

#[test]
fn nvue_launch_page_closes_splash_and_finishes_on_ready() {
    let config = AppConfig {
        splashscreen: SplashscreenConfig {
            autoclose: true,
            always_show_before_render: false,
        },
        ..AppConfig::default()
    };
    let (app, platform, registrar) = setup(config);
    platform.route("/pages/launch/launch", nvue_meta("pages/launch/launch"));
    let launch = platform.host_webview(WebviewId::LAUNCH);

    let webview = registrar.register_page(
        RegisterPageRequest::new("/pages/launch/launch", "/pages/launch/launch", OpenType::AppLaunch)
            .with_webview(Rc::clone(&launch)),
    );

    assert!(Rc::ptr_eq(&webview, &launch));
    assert!(platform.created.borrow().is_empty());
    assert_eq!(platform.entry_inits.get(), 1);
    assert_eq!(platform.splash_closes.get(), 1);
    assert_eq!(platform.navigate_finishes.get(), 0);

    app.fire_ready();
    assert_eq!(platform.navigate_finishes.get(), 1);
}

#[test]
fn splash_kept_until_render() {
    let config = AppConfig {
        splashscreen: SplashscreenConfig {
            autoclose: true,
            always_show_before_render: true,
        },
        ..AppConfig::default()
    };
    let (app, platform, registrar) = setup(config);
    platform.route("/pages/launch/launch", nvue_meta("pages/launch/launch"));
    let launch = platform.host_webview(WebviewId::LAUNCH);

    registrar.register_page(
        RegisterPageRequest::new("/pages/launch/launch", "/pages/launch/launch", OpenType::AppLaunch)
            .with_webview(launch),
    );

    assert_eq!(platform.splash_closes.get(), 0);
    assert_eq!(app.pending_ready_callbacks(), 1);
}

#[test]
fn entry_init_runs_once() {
    let (_app, platform, registrar) = setup(AppConfig::default());
    let a = platform.host_webview(WebviewId(30));
    let b = platform.host_webview(WebviewId(31));

    registrar.register_page(navigate("/pages/a/a").with_webview(a));
    registrar.register_page(navigate("/pages/b/b").with_webview(b));
    registrar.register_page(navigate("/pages/c/c"));

    assert_eq!(platform.entry_inits.get(), 1);
}

#[test]
fn adopted_webview_survives_lookup_miss() {
    let (app, platform, registrar) = setup(AppConfig::default());
    let preloaded = platform.next_webview();
    app.preloads_mut().insert("/pages/a/a", Rc::clone(&preloaded));
    platform.forget_webviews.set(true);

    let webview = registrar.register_page(navigate("/pages/a/a"));

    assert!(Rc::ptr_eq(&webview, &preloaded));
    assert_eq!(webview.borrow().route.as_deref(), Some("pages/a/a"));
    assert_eq!(app.pages().len(), 1);
}
