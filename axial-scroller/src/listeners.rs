use alloc::sync::Arc;
use alloc::vec::Vec;

pub trait OnScrollListener {
    fn on_scroll_started(&self, from_index: usize) {
        let _ = from_index;
    }

    fn on_scroll_finished(&self, index: usize) {
        let _ = index;
    }
}

pub trait OnPageChangedListener {
    fn on_page_changed(&self, page: usize);
}

/// A set of shared listeners.
///
/// Registering the same `Arc` twice is a no-op. Broadcasts walk a snapshot taken when they
/// start, so the set may change while listeners are being notified.
pub struct ListenerList<T: ?Sized> {
    listeners: Vec<Arc<T>>,
}

impl<T: ?Sized> Default for ListenerList<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<T: ?Sized> Clone for ListenerList<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: self.listeners.clone(),
        }
    }
}

impl<T: ?Sized> core::fmt::Debug for ListenerList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListenerList")
            .field("len", &self.listeners.len())
            .finish()
    }
}

impl<T: ?Sized> ListenerList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn contains(&self, listener: &Arc<T>) -> bool {
        self.listeners.iter().any(|l| same(l, listener))
    }

    /// Returns `false` when the listener was already registered.
    pub fn add(&mut self, listener: Arc<T>) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    pub fn remove(&mut self, listener: &Arc<T>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !same(l, listener));
        self.listeners.len() != before
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn snapshot(&self) -> Vec<Arc<T>> {
        self.listeners.clone()
    }

    pub fn for_each(&self, mut f: impl FnMut(&T)) {
        for listener in self.snapshot() {
            f(listener.as_ref());
        }
    }
}

fn same<T: ?Sized>(a: &Arc<T>, b: &Arc<T>) -> bool {
    core::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
