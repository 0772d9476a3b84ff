use std::sync::Arc;

use dashmap::DashMap;

/// Concurrent screenshot store, keyed by [`screenshot_key`](crate::screenshot_key).
///
/// Capture happens off the render path: a worker snapshots a screen as it is
/// covered and inserts the result here, while the render thread reads whatever
/// is present when it builds a frame. A missing screenshot is a normal state
/// (the capture has not landed yet) and renders as a placeholder, so `get`
/// returns `Option` rather than an error.
///
/// The handle is cheap to clone; all clones share the same map. `I` is
/// usually an `Arc`-backed bitmap handle, which keeps `get` cheap too.
pub struct ScreenshotCache<I> {
    inner: Arc<DashMap<String, I>>,
}

impl<I> Clone for ScreenshotCache<I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I> Default for ScreenshotCache<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> ScreenshotCache<I> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Inserts or replaces the screenshot for `key`. Returns the previous
    /// image, if any.
    pub fn put(&self, key: String, image: I) -> Option<I> {
        self.inner.insert(key, image)
    }

    pub fn remove(&self, key: &str) -> Option<I> {
        self.inner.remove(key).map(|(_, image)| image)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn clear(&self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<I: Clone> ScreenshotCache<I> {
    /// Returns a clone of the stored image handle, or `None` if the capture
    /// has not landed yet.
    pub fn get(&self, key: &str) -> Option<I> {
        self.inner.get(key).map(|entry| entry.value().clone())
    }
}

impl<I> std::fmt::Debug for ScreenshotCache<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenshotCache")
            .field("len", &self.inner.len())
            .finish_non_exhaustive()
    }
}
