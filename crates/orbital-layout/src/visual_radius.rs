//! Physical radius to render-space radius
//!
//! Resolution order matters for continuous modes: every non-moon is placed on
//! the system-wide size curve first, then moons are scaled from their already
//! resolved parent, shallowest moons first.

use crate::body::CelestialBody;
use crate::size_analysis::SizeRange;
use crate::tree::SystemTree;
use crate::view_mode::{SizeCurve, SizingPolicy, ViewModeConfig};

/// Moons never render smaller than this multiple of the minimum visual size
pub const MOON_FLOOR_FACTOR: f64 = 2.0;

/// Resolve the visual radius of every body, indexed like `bodies`
pub fn resolve_visual_radii(
    bodies: &[CelestialBody],
    tree: &SystemTree,
    config: &ViewModeConfig,
) -> Vec<f64> {
    match &config.sizing {
        SizingPolicy::Fixed(table) => bodies
            .iter()
            .map(|body| table.size_for(body.kind, body.geometry))
            .collect(),
        SizingPolicy::Continuous(curve) => resolve_continuous(bodies, tree, curve),
    }
}

fn resolve_continuous(bodies: &[CelestialBody], tree: &SystemTree, curve: &SizeCurve) -> Vec<f64> {
    let range = SizeRange::analyze(bodies);
    let mut visual: Vec<Option<f64>> = vec![None; bodies.len()];

    // Pass 1a: everything on the system-wide curve
    for (i, body) in bodies.iter().enumerate() {
        if !body.kind.is_moon() {
            visual[i] = Some(curve_radius(body, &range, curve));
        }
    }

    // Pass 1b: moons relative to their parent
    let mut moons: Vec<usize> = (0..bodies.len())
        .filter(|&i| bodies[i].kind.is_moon())
        .collect();
    moons.sort_by_key(|&i| tree.depth(i));

    for i in moons {
        let moon = &bodies[i];
        let proportional = tree.parent(i).and_then(|p| {
            let parent_visual = visual[p]?;
            proportional_moon_radius(parent_visual, &bodies[p], moon, curve)
        });
        visual[i] = Some(proportional.unwrap_or_else(|| curve_radius(moon, &range, curve)));
    }

    visual
        .into_iter()
        .map(|v| v.unwrap_or(curve.min_visual_size))
        .collect()
}

/// Radius on the logarithmic size curve; bodies without a positive radius
/// get the minimum size
pub fn curve_radius(body: &CelestialBody, range: &SizeRange, curve: &SizeCurve) -> f64 {
    match body.radius_km() {
        Some(radius) => curve.interpolate(range.normalize(radius)),
        None => curve.min_visual_size,
    }
}

/// Scale a moon by its physical size relative to its parent
///
/// Returns `None` when the ratio is undefined (either radius missing or not
/// positive), leaving the caller to fall back to the size curve.
pub fn proportional_moon_radius(
    parent_visual: f64,
    parent: &CelestialBody,
    moon: &CelestialBody,
    curve: &SizeCurve,
) -> Option<f64> {
    let parent_radius = parent.radius_km()?;
    let moon_radius = moon.radius_km()?;
    let floor = MOON_FLOOR_FACTOR * curve.min_visual_size;
    Some((parent_visual * moon_radius / parent_radius).max(floor))
}
