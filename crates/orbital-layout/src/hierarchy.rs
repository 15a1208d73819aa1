//! Parent-larger-than-child correction
//!
//! Runs after placement and collision repair. Growing a parent never moves
//! anything; shrinking a star's children only narrows footprints that were
//! already clear of each other.

use tracing::trace;

use crate::body::CelestialBody;
use crate::tree::SystemTree;
use crate::view_mode::ViewModeConfig;

/// A parent that must grow ends up this much larger than its largest child
pub const HIERARCHY_GROWTH: f64 = 1.2;

/// Extra shrink applied to children when their parent hits its size cap
pub const SHRINK_SAFETY: f64 = 0.8;

/// Make every parent strictly larger than each of its non-band children
///
/// Parents are visited deepest first so a planet grown for its moon is
/// compared against its star at its final size. When a parent cannot grow
/// enough without passing its cap, it is set to the cap and each child
/// subtree is shrunk uniformly, never below the mode's minimum size. A
/// grow-only sweep then repairs parents inside shrunk subtrees whose children
/// were held up by that minimum.
pub fn enforce_hierarchy(
    bodies: &[CelestialBody],
    tree: &SystemTree,
    config: &ViewModeConfig,
    visual: &mut [f64],
) {
    let parents = tree.parents_deepest_first();
    let min_size = config.min_visual_size();

    let mut shrunk = false;
    for &parent in &parents {
        let Some(largest) = largest_child(bodies, tree, visual, parent) else {
            continue;
        };
        if visual[parent] > largest {
            continue;
        }

        let required = largest * HIERARCHY_GROWTH;
        let cap = config.parent_size_cap(bodies[parent].kind);
        if required <= cap {
            trace!(body = %bodies[parent].id, from = visual[parent], to = required, "growing parent above its children");
            visual[parent] = required;
            continue;
        }

        let ceiling = cap.max(visual[parent]);
        let factor = ceiling / required * SHRINK_SAFETY;
        trace!(body = %bodies[parent].id, ceiling, factor, "parent capped, shrinking its children");
        visual[parent] = ceiling;
        for &child in tree.children(parent) {
            if !bodies[child].kind.is_band() {
                scale_subtree(bodies, tree, visual, child, factor, min_size);
            }
        }
        shrunk = true;
    }

    if shrunk {
        for &parent in &parents {
            let Some(largest) = largest_child(bodies, tree, visual, parent) else {
                continue;
            };
            if visual[parent] > largest {
                continue;
            }
            let required = largest * HIERARCHY_GROWTH;
            if required <= config.parent_size_cap(bodies[parent].kind) {
                visual[parent] = required;
            }
        }
    }
}

fn largest_child(
    bodies: &[CelestialBody],
    tree: &SystemTree,
    visual: &[f64],
    parent: usize,
) -> Option<f64> {
    tree.children(parent)
        .iter()
        .filter(|&&child| !bodies[child].kind.is_band())
        .map(|&child| visual[child])
        .reduce(f64::max)
}

fn scale_subtree(
    bodies: &[CelestialBody],
    tree: &SystemTree,
    visual: &mut [f64],
    body: usize,
    factor: f64,
    min_size: f64,
) {
    visual[body] = (visual[body] * factor).max(min_size);
    for &child in tree.children(body) {
        if !bodies[child].kind.is_band() {
            scale_subtree(bodies, tree, visual, child, factor, min_size);
        }
    }
}
