//! Cached entry point used by the rendering layer

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::body::CelestialBody;
use crate::cache::{CacheKey, LayoutCache};
use crate::error::{LayoutError, LayoutResult};
use crate::layout::{SystemLayout, compute_layout};
use crate::view_mode::{LayoutSettings, ViewMode};

/// Layout engine with per-mode settings and a single-slot result cache
///
/// # Examples
///
/// ```
/// use orbital_layout::{CelestialBody, LayoutEngine, ViewMode};
/// use std::sync::Arc;
/// use units::Length;
///
/// let bodies = vec![
///     CelestialBody::star("sol", Length::from_km(695_700.0)),
///     CelestialBody::planet("earth", "sol", Length::from_km(6371.0), Length::from_au(1.0)),
/// ];
///
/// let engine = LayoutEngine::new();
/// let first = engine.layout(&bodies, ViewMode::Navigational, false);
/// let second = engine.layout(&bodies, ViewMode::Navigational, false);
/// assert!(Arc::ptr_eq(&first, &second));
///
/// engine.clear_cache();
/// let third = engine.layout(&bodies, ViewMode::Navigational, false);
/// assert!(!Arc::ptr_eq(&first, &third));
/// assert_eq!(first, third);
/// ```
#[derive(Debug, Default)]
pub struct LayoutEngine {
    settings: LayoutSettings,
    cache: LayoutCache,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: LayoutSettings) -> Self {
        Self {
            settings,
            cache: LayoutCache::new(),
        }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Layout for `mode`, served from the cache when the request matches
    /// the previous one
    ///
    /// `paused` only takes part in the cache key; geometry does not depend
    /// on it.
    pub fn layout(&self, bodies: &[CelestialBody], mode: ViewMode, paused: bool) -> Arc<SystemLayout> {
        let key = CacheKey::new(mode, paused, bodies);
        if let Some(cached) = self.cache.get(&key) {
            debug!(%mode, "layout cache hit");
            return cached;
        }

        debug!(%mode, bodies = bodies.len(), "layout cache miss");
        let layout = Arc::new(compute_layout(bodies, self.settings.config(mode)));
        self.cache.store(key, Arc::clone(&layout));
        layout
    }

    /// Validate the bodies, then lay them out
    pub fn try_layout(
        &self,
        bodies: &[CelestialBody],
        mode: ViewMode,
        paused: bool,
    ) -> LayoutResult<Arc<SystemLayout>> {
        validate_bodies(bodies)?;
        Ok(self.layout(bodies, mode, paused))
    }

    /// Forget the cached layout, e.g. after the data source changed
    pub fn clear_cache(&self) {
        debug!("layout cache cleared");
        self.cache.clear();
    }
}

/// Checks a caller should run before trusting a layout
///
/// The layout itself tolerates both conditions, but a non-empty system
/// without any root body, or with ids that collide, usually means the
/// input was assembled incorrectly.
pub fn validate_bodies(bodies: &[CelestialBody]) -> LayoutResult<()> {
    let mut seen = HashSet::with_capacity(bodies.len());
    for body in bodies {
        if !seen.insert(body.id.as_str()) {
            return Err(LayoutError::DuplicateBodyId(body.id.clone()));
        }
    }

    if !bodies.is_empty() && !bodies.iter().any(CelestialBody::is_root) {
        return Err(LayoutError::NoRootBody);
    }

    Ok(())
}
