//! Live page stack.

use crate::page::PageEntry;

/// Ordered live pages, bottom first.
#[derive(Debug, Default)]
pub struct PageStack {
    pages: Vec<PageEntry>,
}

impl PageStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, page: PageEntry) {
        self.pages.push(page);
    }

    /// Replace the entry at `index` in place, returning the old entry.
    pub fn replace_at(&mut self, index: usize, page: PageEntry) -> Option<PageEntry> {
        let slot = self.pages.get_mut(index)?;
        Some(std::mem::replace(slot, page))
    }

    /// Index of `page` by identity.
    pub fn position(&self, page: &PageEntry) -> Option<usize> {
        self.pages.iter().position(|p| p.same(page))
    }

    pub fn contains(&self, page: &PageEntry) -> bool {
        self.position(page).is_some()
    }

    /// Remove `page`, e.g. when navigating back.
    pub fn remove(&mut self, page: &PageEntry) -> Option<PageEntry> {
        let index = self.position(page)?;
        Some(self.pages.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&PageEntry> {
        self.pages.get(index)
    }

    pub fn last(&self) -> Option<&PageEntry> {
        self.pages.last()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageEntry> {
        self.pages.iter()
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }
}
