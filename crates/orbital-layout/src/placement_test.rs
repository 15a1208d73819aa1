use approx::assert_relative_eq;
use units::Length;

use crate::body::CelestialBody;
use crate::placement::{is_satellite, place_primaries, place_satellites};
use crate::state::{LayoutState, Placement};
use crate::tree::SystemTree;
use crate::view_mode::ViewModeConfig;
use crate::visual_radius::resolve_visual_radii;

fn km(v: f64) -> Length {
    Length::from_km(v)
}

fn au(v: f64) -> Length {
    Length::from_au(v)
}

/// Runs both placement passes with the navigational preset: star 3.0,
/// planet 0.8, moon 0.25, ring/belt 0.1, scaling 8, safety 2, min distance 0.6
fn place(bodies: &[CelestialBody]) -> LayoutState {
    let config = ViewModeConfig::navigational();
    let tree = SystemTree::build(bodies);
    let mut state = LayoutState::new(resolve_visual_radii(bodies, &tree, &config));
    place_satellites(bodies, &tree, &config, &mut state);
    place_primaries(bodies, &tree, &config, &mut state);
    state
}

fn distance(state: &LayoutState, body: usize) -> f64 {
    match state.placement[body] {
        Placement::Orbit { distance } => distance,
        other => panic!("expected a point orbit, got {other:?}"),
    }
}

fn band(state: &LayoutState, body: usize) -> (f64, f64) {
    match state.placement[body] {
        Placement::Band { inner, outer } => (inner, outer),
        other => panic!("expected a band, got {other:?}"),
    }
}

#[test]
fn test_moons_follow_cursor_in_semi_major_axis_order() {
    let bodies = vec![
        CelestialBody::star("sun", km(695_700.0)),
        CelestialBody::planet("p", "sun", km(6000.0), au(10.0)),
        CelestialBody::moon("far", "p", km(100.0), au(1.0)),
        CelestialBody::moon("inner", "p", km(100.0), au(0.001)),
        CelestialBody::moon("middle", "p", km(100.0), au(0.002)),
    ];
    let state = place(&bodies);

    // Cursor starts at 0.8 * 2.0 and advances 0.25 * 2.0 + 0.6 per moon
    assert_relative_eq!(distance(&state, 3), 1.6, max_relative = 1e-9);
    assert_relative_eq!(distance(&state, 4), 2.7, max_relative = 1e-9);
    // Far enough out to keep its scaled distance
    assert_relative_eq!(distance(&state, 2), 8.0, max_relative = 1e-9);
}

#[test]
fn test_primaries_keep_desired_distance_when_clear() {
    let bodies = vec![
        CelestialBody::star("sun", km(695_700.0)),
        CelestialBody::planet("a", "sun", km(6000.0), au(0.5)),
        CelestialBody::planet("b", "sun", km(6000.0), au(2.0)),
    ];
    let state = place(&bodies);

    assert_eq!(state.placement[0], Placement::Anchored);
    // Desired 4.0 is inside the star clearance of 3.0 * 2.0
    assert_relative_eq!(distance(&state, 1), 6.8, max_relative = 1e-9);
    assert_relative_eq!(distance(&state, 2), 16.0, max_relative = 1e-9);
}

#[test]
fn test_moon_system_pushes_next_planet() {
    let bodies = vec![
        CelestialBody::star("sun", km(695_700.0)),
        CelestialBody::planet("b", "sun", km(6000.0), au(1.5)),
        CelestialBody::planet("a", "sun", km(6000.0), au(1.0)),
        CelestialBody::moon("a-i", "a", km(100.0), au(1.0)),
    ];
    let state = place(&bodies);

    // Moon at 8.0 gives planet a an effective radius of 8.25
    assert_relative_eq!(distance(&state, 3), 8.0, max_relative = 1e-9);
    assert_relative_eq!(distance(&state, 2), 6.0 + 8.25, max_relative = 1e-9);
    // Next sibling clears a's whole moon system
    assert_relative_eq!(distance(&state, 1), 14.25 + 8.25 + 0.6 + 0.8, max_relative = 1e-9);
}

#[test]
fn test_belt_keeps_width_when_pushed() {
    let bodies = vec![
        CelestialBody::star("sun", km(695_700.0)),
        CelestialBody::planet("inner", "sun", km(6000.0), au(2.15)),
        CelestialBody::belt("belt", "sun", au(2.2), au(3.2)),
        CelestialBody::planet("outer", "sun", km(6000.0), au(3.3)),
    ];
    let state = place(&bodies);

    assert_relative_eq!(distance(&state, 1), 17.2, max_relative = 1e-9);

    let (inner, outer) = band(&state, 2);
    assert_relative_eq!(inner, 17.2 + 0.8 + 0.6, max_relative = 1e-9);
    assert_relative_eq!(outer - inner, 8.0, max_relative = 1e-9);

    // Belt footprint ends at its outer edge
    assert_relative_eq!(distance(&state, 3), outer + 0.6 + 0.8, max_relative = 1e-9);
}

#[test]
fn test_planetary_ring_is_placed_with_moons() {
    let bodies = vec![
        CelestialBody::star("sun", km(695_700.0)),
        CelestialBody::planet("saturn", "sun", km(58_232.0), au(9.5))
            .with_geometry(crate::body::GeometryHint::GasGiant),
        CelestialBody::moon("moonlet", "saturn", km(200.0), au(0.002)),
        CelestialBody::ring("rings", "saturn", au(0.0005), au(0.001)),
    ];
    let tree = SystemTree::build(&bodies);
    assert!(is_satellite(&bodies, &tree, 2));
    assert!(is_satellite(&bodies, &tree, 3));
    assert!(!is_satellite(&bodies, &tree, 1));

    let state = place(&bodies);

    // Gas giant at 1.2 starts the cursor at 2.4
    let (inner, outer) = band(&state, 3);
    assert_relative_eq!(inner, 2.4, max_relative = 1e-9);
    assert_relative_eq!(outer - inner, 0.004, max_relative = 1e-6);
    assert_relative_eq!(distance(&state, 2), outer + 0.6, max_relative = 1e-9);
}

#[test]
fn test_belt_around_star_is_a_primary() {
    let bodies = vec![
        CelestialBody::star("sun", km(695_700.0)),
        CelestialBody::belt("belt", "sun", au(2.2), au(3.2)),
        CelestialBody::root("lonely", crate::body::BodyKind::Planet, Some(km(6000.0))),
        CelestialBody::ring("lonely-ring", "lonely", au(0.0005), au(0.001)),
    ];
    let tree = SystemTree::build(&bodies);

    assert!(!is_satellite(&bodies, &tree, 1));
    // Rings of a root body are spaced like primaries
    assert!(!is_satellite(&bodies, &tree, 3));
    assert!(!is_satellite(&bodies, &tree, 0));
}
