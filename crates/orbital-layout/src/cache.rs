//! Single-slot memoization of the most recent layout

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::body::CelestialBody;
use crate::layout::SystemLayout;
use crate::view_mode::ViewMode;

/// Structural signature of a layout request
///
/// Built from the view mode, the pause flag and each body's id, physical
/// radius and parent id, in input order. Orbital elements are not part of
/// the key; callers that edit them in place must clear the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(mode: ViewMode, paused: bool, bodies: &[CelestialBody]) -> Self {
        let mut key = format!("{}|{}", mode, if paused { "paused" } else { "running" });
        for body in bodies {
            let radius = body
                .physical_radius
                .map(|r| r.to_km().to_string())
                .unwrap_or_default();
            let parent = body.parent_id().unwrap_or_default();
            key.push_str(&format!("|{:?}:{}:{:?}", body.id, radius, parent));
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Holds at most one `(key, layout)` pair
///
/// Safe to share between threads. Two threads that miss at the same time
/// both compute; whichever stores last wins.
#[derive(Debug, Default)]
pub struct LayoutCache {
    slot: Mutex<Option<(CacheKey, Arc<SystemLayout>)>>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached layout if it was computed for `key`
    pub fn get(&self, key: &CacheKey) -> Option<Arc<SystemLayout>> {
        match self.lock().as_ref() {
            Some((cached_key, layout)) if cached_key == key => Some(Arc::clone(layout)),
            _ => None,
        }
    }

    /// Replace whatever is cached
    pub fn store(&self, key: CacheKey, layout: Arc<SystemLayout>) {
        *self.lock() = Some((key, layout));
    }

    pub fn clear(&self) {
        *self.lock() = None;
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_none()
    }

    // The slot is always left in a consistent state, so a panic elsewhere
    // while holding the lock does not invalidate it.
    fn lock(&self) -> MutexGuard<'_, Option<(CacheKey, Arc<SystemLayout>)>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
