//! Two-pass orbit placement
//!
//! A planet's slot depends on how far its moons reach, while the moons are
//! positioned relative to the planet. The dependency is broken by placing all
//! satellites first (pass 1), relative to their parent centre, and only then
//! the bodies that carry them (pass 2). Both passes walk parents deepest
//! first, so nested systems are settled before their host is positioned.

use crate::body::{BeltOrbit, BodyKind, CelestialBody, Orbit};
use crate::state::{Footprint, LayoutState, Placement};
use crate::tree::SystemTree;
use crate::view_mode::ViewModeConfig;

/// Lower bound on the clearance multiplier between consecutive moons
pub const MIN_MOON_SPACING_FACTOR: f64 = 2.0;

/// Whether a body is placed in the satellite pass
///
/// Satellites are moons plus rings and belts around an orbiting, non-stellar
/// body (planetary rings). Everything else with a parent is a primary.
pub fn is_satellite(bodies: &[CelestialBody], tree: &SystemTree, body: usize) -> bool {
    let Some(parent) = tree.parent(body) else {
        return false;
    };
    match bodies[body].kind {
        BodyKind::Moon => true,
        BodyKind::Belt | BodyKind::Ring => {
            let host = bodies[parent].kind;
            tree.parent(parent).is_some()
                && !matches!(
                    host,
                    BodyKind::Star | BodyKind::Barycenter | BodyKind::CompactObject
                )
        }
        _ => false,
    }
}

/// Stable sort by physical distance from the parent
pub fn sort_by_placement_key(bodies: &[CelestialBody], members: &mut [usize]) {
    members.sort_by(|&a, &b| {
        bodies[a]
            .placement_key()
            .total_cmp(&bodies[b].placement_key())
    });
}

fn scaled_band(orbit: &BeltOrbit, config: &ViewModeConfig) -> (f64, f64) {
    let (inner, outer) = orbit.bounds_au();
    (inner * config.orbit_scaling, outer * config.orbit_scaling)
}

/// Push a band outward so its inner edge clears `required_inner`, keeping
/// its width
fn push_band(desired: (f64, f64), required_inner: f64) -> Placement {
    let (inner, outer) = desired;
    let width = outer - inner;
    let inner = inner.max(required_inner);
    Placement::Band {
        inner,
        outer: inner + width,
    }
}

/// Pass 1: moons and planetary rings, per parent, innermost first
///
/// The cursor starts at the parent's clearance radius and advances past each
/// placed satellite by its radius times the spacing factor plus the minimum
/// distance.
pub fn place_satellites(
    bodies: &[CelestialBody],
    tree: &SystemTree,
    config: &ViewModeConfig,
    state: &mut LayoutState,
) {
    let spacing = config.safety_multiplier.max(MIN_MOON_SPACING_FACTOR);

    for parent in tree.parents_deepest_first() {
        let mut satellites: Vec<usize> = tree
            .children(parent)
            .iter()
            .copied()
            .filter(|&child| is_satellite(bodies, tree, child))
            .collect();
        if satellites.is_empty() {
            continue;
        }
        sort_by_placement_key(bodies, &mut satellites);

        let mut cursor = config.start_clearance(state.visual[parent]);
        for satellite in satellites {
            match &bodies[satellite].orbit {
                Some(Orbit::Point(orbit)) => {
                    let desired = orbit.semi_major_axis.to_au() * config.orbit_scaling;
                    let distance = desired.max(cursor);
                    state.placement[satellite] = Placement::Orbit { distance };
                    cursor = distance
                        + state.effective_radius(tree, satellite) * spacing
                        + config.min_distance;
                }
                Some(Orbit::Belt(orbit)) => {
                    let placement = push_band(scaled_band(orbit, config), cursor);
                    state.placement[satellite] = placement;
                    if let Placement::Band { outer, .. } = placement {
                        cursor = outer + config.min_distance;
                    }
                }
                None => {}
            }
        }
    }
}

/// Pass 2: planets, belts and stellar companions, per parent, innermost first
///
/// Runs after every satellite is placed, so each body's effective radius
/// already covers its whole moon system. A body goes to its scaled physical
/// distance unless that would bring it within `min_distance` of the previous
/// sibling's footprint.
pub fn place_primaries(
    bodies: &[CelestialBody],
    tree: &SystemTree,
    config: &ViewModeConfig,
    state: &mut LayoutState,
) {
    for parent in tree.parents_deepest_first() {
        let mut primaries: Vec<usize> = tree
            .children(parent)
            .iter()
            .copied()
            .filter(|&child| !is_satellite(bodies, tree, child))
            .collect();
        if primaries.is_empty() {
            continue;
        }
        sort_by_placement_key(bodies, &mut primaries);

        let start = config.start_clearance(state.visual[parent]);
        let mut previous: Option<Footprint> = None;
        for body in primaries {
            let required_inner =
                previous.map_or(start, |prev| prev.outer_edge() + config.min_distance);
            match &bodies[body].orbit {
                Some(Orbit::Point(orbit)) => {
                    let desired = orbit.semi_major_axis.to_au() * config.orbit_scaling;
                    let radius = state.effective_radius(tree, body);
                    state.placement[body] = Placement::Orbit {
                        distance: desired.max(required_inner + radius),
                    };
                }
                Some(Orbit::Belt(orbit)) => {
                    state.placement[body] = push_band(scaled_band(orbit, config), required_inner);
                }
                None => continue,
            }
            previous = Some(state.footprint(tree, body));
        }
    }
}
