//! App-wide runtime state.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::preload::PreloadPool;
use crate::stack::PageStack;
use crate::tab_bar::TabBar;

/// App shell services used around registration.
pub trait AppShell {
    /// One-time app entry initialization
    fn init_entry(&self);

    fn close_splashscreen(&self);

    /// Complete the navigation that launched the app.
    fn navigate_finish(&self);
}

type ReadyCallback = Box<dyn FnOnce()>;

/// Callbacks run once the app reports ready.
#[derive(Default)]
pub struct ReadyQueue {
    ready: bool,
    callbacks: Vec<ReadyCallback>,
}

impl ReadyQueue {
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for ReadyQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadyQueue")
            .field("ready", &self.ready)
            .field("pending", &self.callbacks.len())
            .finish()
    }
}

/// Page stack, preload pool, tab bar and ready queue of one app run.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pages: RefCell<PageStack>,
    preloads: RefCell<PreloadPool>,
    tab_bar: RefCell<TabBar>,
    ready: RefCell<ReadyQueue>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Rc<Self> {
        let tab_bar = TabBar::new(&config.tab_bar);
        Rc::new(Self {
            config,
            pages: RefCell::new(PageStack::new()),
            preloads: RefCell::new(PreloadPool::new()),
            tab_bar: RefCell::new(tab_bar),
            ready: RefCell::new(ReadyQueue::default()),
        })
    }

    pub fn pages(&self) -> Ref<'_, PageStack> {
        self.pages.borrow()
    }

    pub fn pages_mut(&self) -> RefMut<'_, PageStack> {
        self.pages.borrow_mut()
    }

    pub fn preloads(&self) -> Ref<'_, PreloadPool> {
        self.preloads.borrow()
    }

    pub fn preloads_mut(&self) -> RefMut<'_, PreloadPool> {
        self.preloads.borrow_mut()
    }

    pub fn tab_bar(&self) -> Ref<'_, TabBar> {
        self.tab_bar.borrow()
    }

    pub fn tab_bar_mut(&self) -> RefMut<'_, TabBar> {
        self.tab_bar.borrow_mut()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.borrow().ready
    }

    /// Run `callback` once the app is ready, or now if it already is.
    pub fn on_ready(&self, callback: impl FnOnce() + 'static) {
        let mut ready = self.ready.borrow_mut();
        if ready.ready {
            drop(ready);
            callback();
        } else {
            ready.callbacks.push(Box::new(callback));
        }
    }

    /// Mark the app ready and drain pending callbacks.
    pub fn fire_ready(&self) {
        let callbacks = {
            let mut ready = self.ready.borrow_mut();
            ready.ready = true;
            std::mem::take(&mut ready.callbacks)
        };
        tracing::debug!(callbacks = callbacks.len(), "app ready");
        for callback in callbacks {
            callback();
        }
    }

    pub fn pending_ready_callbacks(&self) -> usize {
        self.ready.borrow().len()
    }

    /// Drop all pages, preloads and pending callbacks.
    pub fn teardown(&self) {
        self.pages.borrow_mut().clear();
        self.preloads.borrow_mut().clear();
        self.tab_bar.borrow_mut().clear();
        *self.ready.borrow_mut() = ReadyQueue::default();
    }
}
