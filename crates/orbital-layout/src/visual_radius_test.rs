use approx::assert_relative_eq;
use units::Length;

use crate::body::{BodyKind, CelestialBody, GeometryHint};
use crate::catalog::solar_system;
use crate::size_analysis::SizeRange;
use crate::tree::SystemTree;
use crate::view_mode::{FixedSizeTable, SizeCurve, SizingPolicy, ViewModeConfig};
use crate::visual_radius::{MOON_FLOOR_FACTOR, resolve_visual_radii};

fn km(v: f64) -> Length {
    Length::from_km(v)
}

fn au(v: f64) -> Length {
    Length::from_au(v)
}

fn resolve(bodies: &[CelestialBody], config: &ViewModeConfig) -> Vec<f64> {
    let tree = SystemTree::build(bodies);
    resolve_visual_radii(bodies, &tree, config)
}

fn index(bodies: &[CelestialBody], id: &str) -> usize {
    bodies
        .iter()
        .position(|b| b.id == id)
        .unwrap_or_else(|| panic!("missing body {id}"))
}

#[test]
fn test_continuous_curve_endpoints() {
    let bodies = vec![
        CelestialBody::star("sun", km(695_700.0)),
        CelestialBody::planet("earth", "sun", km(6371.0), au(1.0)),
        CelestialBody::planet("mars", "sun", km(3390.0), au(1.52)),
    ];
    let config = ViewModeConfig::realistic();
    let visual = resolve(&bodies, &config);

    // Largest body sits at the top of the curve, smallest at the bottom
    assert_relative_eq!(visual[0], 1.0, max_relative = 1e-12);
    assert_relative_eq!(visual[2], 0.02, max_relative = 1e-12);

    let range = SizeRange::analyze(&bodies);
    let expected_earth = 0.02 + range.normalize(6371.0) * (1.0 - 0.02);
    assert_relative_eq!(visual[1], expected_earth, max_relative = 1e-9);
}

#[test]
fn test_moon_scales_with_parent() {
    let bodies = solar_system();
    let config = ViewModeConfig::realistic();
    let visual = resolve(&bodies, &config);

    let earth = index(&bodies, "earth");
    let moon = index(&bodies, "moon");
    let expected = visual[earth] * 1737.4 / 6371.0;
    assert!(expected > MOON_FLOOR_FACTOR * 0.02);
    assert_relative_eq!(visual[moon], expected, max_relative = 1e-9);
}

#[test]
fn test_tiny_moon_is_floored() {
    let bodies = solar_system();
    let config = ViewModeConfig::realistic();
    let visual = resolve(&bodies, &config);

    let phobos = index(&bodies, "phobos");
    assert_relative_eq!(visual[phobos], MOON_FLOOR_FACTOR * 0.02);
}

#[test]
fn test_moon_of_moon_scales_from_moon() {
    let bodies = vec![
        CelestialBody::star("sun", km(695_700.0)),
        CelestialBody::planet("pebble", "sun", km(10.0), au(1.0)),
        CelestialBody::planet("giant", "sun", km(70_000.0), au(5.0)),
        CelestialBody::moon("moon", "giant", km(35_000.0), au(0.01)),
        CelestialBody::moon("submoon", "moon", km(17_500.0), au(0.001)),
    ];
    let config = ViewModeConfig::explorational();
    let visual = resolve(&bodies, &config);

    // Well above the moon floor, so the plain ratio applies at each level
    assert!(visual[4] > MOON_FLOOR_FACTOR * 0.05);
    assert_relative_eq!(visual[3], visual[2] * 0.5, max_relative = 1e-9);
    assert_relative_eq!(visual[4], visual[3] * 0.5, max_relative = 1e-9);
}

#[test]
fn test_moon_without_parent_uses_curve() {
    let bodies = vec![
        CelestialBody::star("sun", km(100_000.0)),
        CelestialBody::moon("stray", "missing", km(100_000.0), au(0.01)),
    ];
    let config = ViewModeConfig::realistic();
    let visual = resolve(&bodies, &config);

    // Same radius as the star, same position on the curve
    assert_relative_eq!(visual[1], visual[0]);
}

#[test]
fn test_non_positive_radius_gets_minimum() {
    let mut broken = CelestialBody::planet("broken", "sun", km(1.0), au(1.0));
    broken.physical_radius = Some(Length::from_km(-10.0));
    let mut moon = CelestialBody::moon("ghost", "earth", km(1.0), au(0.001));
    moon.physical_radius = Some(Length::zero());

    let bodies = vec![
        CelestialBody::star("sun", km(695_700.0)),
        CelestialBody::planet("earth", "sun", km(6371.0), au(1.0)),
        broken,
        moon,
        CelestialBody::belt("belt", "sun", au(2.2), au(3.2)),
    ];
    let config = ViewModeConfig::explorational();
    let visual = resolve(&bodies, &config);

    assert_relative_eq!(visual[2], 0.05);
    assert_relative_eq!(visual[3], 0.05);
    assert_relative_eq!(visual[4], 0.05);
}

#[test]
fn test_fixed_policy_uses_table() {
    let bodies = solar_system();
    let config = ViewModeConfig::navigational();
    let visual = resolve(&bodies, &config);

    assert_relative_eq!(visual[index(&bodies, "sun")], 3.0);
    assert_relative_eq!(visual[index(&bodies, "earth")], 0.8);
    assert_relative_eq!(visual[index(&bodies, "jupiter")], 1.2);
    assert_relative_eq!(visual[index(&bodies, "pluto")], 0.4);
    assert_relative_eq!(visual[index(&bodies, "ganymede")], 0.25);
    assert_relative_eq!(visual[index(&bodies, "asteroid-belt")], 0.1);
}

#[test]
fn test_fixed_policy_ignores_physical_radius() {
    let config = ViewModeConfig {
        sizing: SizingPolicy::Fixed(FixedSizeTable::new([(BodyKind::Planet, 1.0)], 0.3)),
        ..ViewModeConfig::profile()
    };
    let bodies = vec![
        CelestialBody::root("hole", BodyKind::CompactObject, Some(km(10.0))),
        CelestialBody::planet("small", "hole", km(10.0), au(1.0)),
        CelestialBody::planet("huge", "hole", km(100_000.0), au(2.0)).with_geometry(GeometryHint::GasGiant),
    ];
    let visual = resolve(&bodies, &config);

    assert_relative_eq!(visual[0], 0.3);
    assert_relative_eq!(visual[1], 1.0);
    assert_relative_eq!(visual[2], 1.5);
}

#[test]
fn test_continuous_sizes_are_monotonic() {
    let bodies = solar_system();
    let curve = SizeCurve {
        min_visual_size: 0.02,
        max_visual_size: 1.0,
    };
    let config = ViewModeConfig {
        sizing: SizingPolicy::Continuous(curve),
        ..ViewModeConfig::realistic()
    };
    let visual = resolve(&bodies, &config);

    let independent: Vec<usize> = (0..bodies.len())
        .filter(|&i| !bodies[i].kind.is_moon() && bodies[i].radius_km().is_some())
        .collect();
    for &a in &independent {
        for &b in &independent {
            if bodies[a].radius_km() > bodies[b].radius_km() {
                assert!(
                    visual[a] >= visual[b],
                    "{} should not render smaller than {}",
                    bodies[a].id,
                    bodies[b].id
                );
            }
        }
    }
}
