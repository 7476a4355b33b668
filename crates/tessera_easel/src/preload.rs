//! Webviews created ahead of navigation.

use tessera_carton::{FxHashMap, String};

use crate::webview::WebviewHandle;

/// Preloaded webviews keyed by url.
#[derive(Debug, Default)]
pub struct PreloadPool {
    webviews: FxHashMap<String, WebviewHandle>,
}

impl PreloadPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a preloaded webview, marking it as such.
    pub fn insert(&mut self, url: &str, webview: WebviewHandle) -> Option<WebviewHandle> {
        webview.borrow_mut().preload = true;
        self.webviews.insert(String::from(url), webview)
    }

    pub fn get(&self, url: &str) -> Option<WebviewHandle> {
        self.webviews.get(url).cloned()
    }

    /// Drop the entry for `url`, e.g. when its webview is closed.
    pub fn take(&mut self, url: &str) -> Option<WebviewHandle> {
        self.webviews.remove(url)
    }

    pub fn len(&self) -> usize {
        self.webviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.webviews.is_empty()
    }

    pub fn clear(&mut self) {
        self.webviews.clear();
    }
}
