//! Layout results and the pure layout pipeline

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::Time;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::body::CelestialBody;
use crate::collision::resolve_collisions;
use crate::hierarchy::enforce_hierarchy;
use crate::placement::{place_primaries, place_satellites};
use crate::state::{LayoutState, Placement};
use crate::tree::SystemTree;
use crate::view_mode::ViewModeConfig;
use crate::visual_radius::resolve_visual_radii;

/// Render-space extent of a belt or ring around its parent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct BeltGeometry {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub center_radius: f64,
}

impl BeltGeometry {
    pub fn width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }
}

/// Computed geometry of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct BodyLayout {
    pub visual_radius: f64,

    /// Distance from the parent centre; set for point orbits only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit_distance: Option<f64>,

    /// Set for belts and rings only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub belt: Option<BeltGeometry>,

    /// Orbits per Earth year; negative for retrograde orbits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_speed: Option<f64>,
}

/// Layout of a whole system keyed by body id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemLayout {
    bodies: BTreeMap<String, BodyLayout>,
}

impl SystemLayout {
    pub fn get(&self, id: &str) -> Option<&BodyLayout> {
        self.bodies.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BodyLayout)> {
        self.bodies.iter().map(|(id, layout)| (id.as_str(), layout))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Animation speed relative to an Earth year
///
/// Zero and non-finite periods have no meaningful speed.
pub fn animation_speed(period: Option<Time>) -> Option<f64> {
    period
        .filter(|p| p.to_years().is_finite() && p.to_years() != 0.0)
        .map(|p| Time::from_years(1.0) / p)
}

/// Compute the layout of a system for one view mode
///
/// Pure and deterministic: the same bodies and configuration always produce
/// the same layout. Never fails; degenerate input is corrected rather than
/// rejected. When ids repeat, the first occurrence is reported.
///
/// # Examples
///
/// ```
/// use orbital_layout::{CelestialBody, ViewMode, compute_layout};
/// use units::Length;
///
/// let bodies = vec![
///     CelestialBody::star("sol", Length::from_km(695_700.0)),
///     CelestialBody::planet("earth", "sol", Length::from_km(6371.0), Length::from_au(1.0)),
///     CelestialBody::planet("mars", "sol", Length::from_km(3390.0), Length::from_au(1.52)),
/// ];
///
/// let layout = compute_layout(&bodies, &ViewMode::Realistic.default_config());
/// let earth = layout.get("earth").unwrap();
/// let mars = layout.get("mars").unwrap();
///
/// assert!(mars.orbit_distance > earth.orbit_distance);
/// assert!(layout.get("sol").unwrap().visual_radius > earth.visual_radius);
/// ```
pub fn compute_layout(bodies: &[CelestialBody], config: &ViewModeConfig) -> SystemLayout {
    let tree = SystemTree::build(bodies);
    let visual = resolve_visual_radii(bodies, &tree, config);

    let mut state = LayoutState::new(visual);
    place_satellites(bodies, &tree, config, &mut state);
    place_primaries(bodies, &tree, config, &mut state);
    let shifts = resolve_collisions(bodies, &tree, config, &mut state);
    enforce_hierarchy(bodies, &tree, config, &mut state.visual);

    debug!(
        bodies = bodies.len(),
        roots = tree.roots().count(),
        collision_shifts = shifts,
        "computed orbital layout"
    );

    let mut result = BTreeMap::new();
    for (i, body) in bodies.iter().enumerate() {
        let (orbit_distance, belt) = match state.placement[i] {
            Placement::Anchored => (None, None),
            Placement::Orbit { distance } => (Some(distance), None),
            Placement::Band { inner, outer } => (
                None,
                Some(BeltGeometry {
                    inner_radius: inner,
                    outer_radius: outer,
                    center_radius: (inner + outer) / 2.0,
                }),
            ),
        };
        result.entry(body.id.clone()).or_insert(BodyLayout {
            visual_radius: state.visual[i],
            orbit_distance,
            belt,
            animation_speed: animation_speed(body.orbital_period()),
        });
    }

    SystemLayout { bodies: result }
}
