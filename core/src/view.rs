//! View lookup
//!
//! The router only knows views by [`ViewKey`]. Whatever renders them (a
//! terminal UI, a web front-end, a test) supplies a [`ViewProvider`].

use crate::route::ViewKey;
use std::collections::HashMap;
use std::fmt;

/// Capability to turn a view key into something renderable
pub trait ViewProvider {
    type View;

    /// Look up the view registered under `key`
    fn resolve(&self, key: &ViewKey) -> Option<&Self::View>;
}

/// Map-backed view provider
pub struct ViewRegistry<V> {
    views: HashMap<ViewKey, V>,
}

impl<V> ViewRegistry<V> {
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
        }
    }

    /// Register a view under `key`, replacing any previous one
    pub fn register(mut self, key: impl Into<ViewKey>, view: V) -> Self {
        self.views.insert(key.into(), view);
        self
    }

    pub fn insert(&mut self, key: impl Into<ViewKey>, view: V) -> Option<V> {
        self.views.insert(key.into(), view)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.views.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl<V> Default for ViewRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ViewRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.views.keys().map(ViewKey::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("ViewRegistry").field("views", &keys).finish()
    }
}

impl<V> ViewProvider for ViewRegistry<V> {
    type View = V;

    fn resolve(&self, key: &ViewKey) -> Option<&V> {
        self.views.get(key)
    }
}

impl<K: Into<ViewKey>, V> FromIterator<(K, V)> for ViewRegistry<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            views: iter.into_iter().map(|(key, view)| (key.into(), view)).collect(),
        }
    }
}
