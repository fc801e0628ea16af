//! Tracks whether a page region is maximized and notifies subscribers.
//!
//! One registry is built at application start and handed to each page by
//! reference; pages pick their own string id.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::sync::Arc;

pub type ViewSizeListener = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewSizeError {
    #[error("expected a page id")]
    MissingPageId,
}

#[derive(Default)]
struct Inner {
    maximized: FxHashMap<String, bool>,
    listeners: FxHashMap<String, Vec<ViewSizeListener>>,
}

#[derive(Default)]
pub struct ViewSizeRegistry {
    inner: Mutex<Inner>,
}

impl ViewSizeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering the same `Arc` twice for one page is a no-op.
    pub fn add_listener(&self, id: &str, listener: ViewSizeListener) {
        let mut inner = self.inner.lock();
        let listeners = inner.listeners.entry(id.to_string()).or_default();
        if listeners.iter().any(|l| Arc::ptr_eq(l, &listener)) {
            return;
        }
        listeners.push(listener);
    }

    pub fn remove_listener(&self, id: &str, listener: &ViewSizeListener) {
        let mut inner = self.inner.lock();
        if let Some(listeners) = inner.listeners.get_mut(id) {
            if let Some(index) = listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
                listeners.remove(index);
            }
        }
    }

    pub fn minimize(&self, id: &str) -> Result<(), ViewSizeError> {
        self.set_maximized(id, false)
    }

    pub fn maximize(&self, id: &str) -> Result<(), ViewSizeError> {
        self.set_maximized(id, true)
    }

    pub fn is_maximized(&self, id: &str) -> Result<bool, ViewSizeError> {
        check_id(id)?;
        Ok(self
            .inner
            .lock()
            .maximized
            .get(id)
            .copied()
            .unwrap_or(false))
    }

    pub fn listener_count(&self, id: &str) -> usize {
        self.inner.lock().listeners.get(id).map_or(0, Vec::len)
    }

    fn set_maximized(&self, id: &str, maximized: bool) -> Result<(), ViewSizeError> {
        check_id(id)?;
        // Listeners run unlocked so they may call back into the registry.
        let listeners = {
            let mut inner = self.inner.lock();
            inner.maximized.insert(id.to_string(), maximized);
            inner.listeners.get(id).cloned().unwrap_or_default()
        };
        tracing::debug!(page = id, maximized, listeners = listeners.len(), "view size changed");
        for listener in listeners {
            listener(maximized);
        }
        Ok(())
    }
}

fn check_id(id: &str) -> Result<(), ViewSizeError> {
    if id.trim().is_empty() {
        return Err(ViewSizeError::MissingPageId);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/ui/view_size.rs"]
mod tests;
