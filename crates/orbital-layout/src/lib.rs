//! Collision-free render-space layout for hierarchical orbital systems
//!
//! Given a flat list of bodies (stars, planets, moons, belts, ...) linked by
//! their orbits, this crate computes a visual radius for every body and an
//! orbital placement relative to its parent, for a choice of view modes
//! ranging from compressed realism to fixed schematic sizes.
//!
//! The pipeline runs strictly forward:
//!
//! 1. size analysis of the system's physical radii
//! 2. visual radius resolution
//! 3. satellite placement, then primary placement
//! 4. sibling collision repair
//! 5. parent-larger-than-child enforcement
//!
//! [`compute_layout`] is the pure entry point; [`LayoutEngine`] wraps it
//! with per-mode settings and a single-slot cache.

pub mod body;
pub mod cache;
pub mod catalog;
pub mod collision;
pub mod engine;
pub mod error;
pub mod hierarchy;
pub mod layout;
pub mod placement;
pub mod size_analysis;
pub mod state;
pub mod tree;
pub mod view_mode;
pub mod visual_radius;

// Re-export main types at crate root
pub use body::{BeltOrbit, BodyKind, CelestialBody, GeometryHint, Orbit, PointOrbit};
pub use cache::{CacheKey, LayoutCache};
pub use engine::{LayoutEngine, validate_bodies};
pub use error::{LayoutError, LayoutResult};
pub use layout::{BeltGeometry, BodyLayout, SystemLayout, compute_layout};
pub use size_analysis::SizeRange;
pub use tree::SystemTree;
pub use view_mode::{FixedSizeTable, LayoutSettings, SizeCurve, SizingPolicy, ViewMode, ViewModeConfig};

#[cfg(test)]
mod placement_test;
#[cfg(test)]
mod view_mode_test;
#[cfg(test)]
mod visual_radius_test;
