//! Sibling collision repair
//!
//! Placement spaces siblings one after the other in physical order. This pass
//! re-checks every sibling set by actual render-space position and pushes
//! bodies outward until consecutive footprints keep `min_distance` apart.

use tracing::trace;

use crate::body::CelestialBody;
use crate::state::LayoutState;
use crate::tree::SystemTree;
use crate::view_mode::ViewModeConfig;

/// Shortfalls below this (relative to the position) are rounding noise
const SHIFT_TOLERANCE: f64 = 1e-12;

/// Resolve overlaps among the children of every parent, deepest first
///
/// Footprints are recomputed for each body as it is visited, so a moon
/// system pushed outward here widens its planet's footprint before the
/// planet's own siblings are checked. Returns the number of shifts applied.
pub fn resolve_collisions(
    bodies: &[CelestialBody],
    tree: &SystemTree,
    config: &ViewModeConfig,
    state: &mut LayoutState,
) -> usize {
    let mut shifts = 0;

    for parent in tree.parents_deepest_first() {
        let mut siblings: Vec<(usize, f64)> = tree
            .children(parent)
            .iter()
            .copied()
            .filter(|&child| state.is_placed(child))
            .map(|child| (child, state.footprint(tree, child).center))
            .collect();
        if siblings.len() < 2 {
            continue;
        }
        siblings.sort_by(|&(a, center_a), &(b, center_b)| {
            center_a
                .total_cmp(&center_b)
                .then_with(|| bodies[a].placement_key().total_cmp(&bodies[b].placement_key()))
                .then(a.cmp(&b))
        });

        let mut previous_outer: Option<f64> = None;
        for (body, _) in siblings {
            if let Some(outer) = previous_outer {
                let footprint = state.footprint(tree, body);
                let shortfall = outer + config.min_distance - footprint.inner_edge();
                let required_center = footprint.center + shortfall;
                if shortfall > SHIFT_TOLERANCE * required_center.abs().max(1.0) {
                    trace!(
                        body = %bodies[body].id,
                        from = footprint.center,
                        to = required_center,
                        "shifting body outward to clear sibling"
                    );
                    state.shift_outward(body, shortfall);
                    shifts += 1;
                }
            }
            previous_outer = Some(state.footprint(tree, body).outer_edge());
        }
    }

    shifts
}
