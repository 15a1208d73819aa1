use approx::assert_relative_eq;

use crate::body::{BodyKind, GeometryHint};
use crate::error::LayoutError;
use crate::view_mode::{FixedSizeTable, LayoutSettings, SizeCurve, ViewMode, ViewModeConfig};

#[test]
fn test_view_mode_identifiers_round_trip() {
    for mode in ViewMode::ALL {
        let parsed: ViewMode = mode.as_str().parse().expect("identifier parses");
        assert_eq!(parsed, mode);
        assert_eq!(mode.to_string(), mode.as_str());
    }
    assert_eq!(" Realistic ".parse::<ViewMode>().ok(), Some(ViewMode::Realistic));
}

#[test]
fn test_unknown_view_mode() {
    let err = "orrery".parse::<ViewMode>().unwrap_err();
    assert!(matches!(err, LayoutError::UnknownViewMode(ref s) if s == "orrery"));
    assert_eq!(err.to_string(), "Unknown view mode: orrery");
}

#[test]
fn test_continuous_and_fixed_presets() {
    assert!(ViewMode::Realistic.default_config().sizing.is_continuous());
    assert!(ViewMode::Explorational.default_config().sizing.is_continuous());
    assert!(!ViewMode::Navigational.default_config().sizing.is_continuous());
    assert!(!ViewMode::Profile.default_config().sizing.is_continuous());

    let realistic = ViewModeConfig::realistic();
    assert_relative_eq!(realistic.star_size_cap, 1.0);
    assert_relative_eq!(realistic.min_visual_size(), 0.02);
}

#[test]
fn test_size_curve_interpolation_is_clamped() {
    let curve = SizeCurve {
        min_visual_size: 0.1,
        max_visual_size: 1.1,
    };
    assert_relative_eq!(curve.interpolate(0.0), 0.1);
    assert_relative_eq!(curve.interpolate(0.5), 0.6);
    assert_relative_eq!(curve.interpolate(1.0), 1.1);
    assert_relative_eq!(curve.interpolate(-3.0), 0.1);
    assert_relative_eq!(curve.interpolate(7.0), 1.1);
}

#[test]
fn test_fixed_table_gas_giant_and_fallback() {
    let table = FixedSizeTable::new([(BodyKind::Star, 3.0), (BodyKind::Planet, 0.8)], 0.15);

    assert_relative_eq!(table.size_for(BodyKind::Planet, None), 0.8);
    assert_relative_eq!(table.size_for(BodyKind::Planet, Some(GeometryHint::Terrestrial)), 0.8);
    assert_relative_eq!(table.size_for(BodyKind::Planet, Some(GeometryHint::GasGiant)), 1.2);
    // The gas giant hint only applies to planets
    assert_relative_eq!(table.size_for(BodyKind::Star, Some(GeometryHint::GasGiant)), 3.0);
    // Kinds missing from the table use the asteroid fallback
    assert_relative_eq!(table.size_for(BodyKind::Moon, None), 0.15);

    assert_relative_eq!(table.min_size(), 0.15);
    assert_relative_eq!(table.max_size(), 3.0);
}

#[test]
fn test_parent_size_cap() {
    let realistic = ViewModeConfig::realistic();
    assert_relative_eq!(realistic.parent_size_cap(BodyKind::Star), 1.0);
    assert_relative_eq!(realistic.parent_size_cap(BodyKind::Planet), 1.0);

    let mut explorational = ViewModeConfig::explorational();
    explorational.star_size_cap = 1.5;
    assert_relative_eq!(explorational.parent_size_cap(BodyKind::Star), 1.5);
    assert_relative_eq!(explorational.parent_size_cap(BodyKind::Barycenter), 2.0);

    let navigational = ViewModeConfig::navigational();
    assert!(navigational.parent_size_cap(BodyKind::Planet).is_infinite());
}

#[test]
fn test_start_clearance_has_floor() {
    let config = ViewModeConfig::realistic();
    assert_relative_eq!(config.start_clearance(1.0), 2.5);
    assert_relative_eq!(config.start_clearance(0.0), config.min_distance);
}

#[test]
fn test_settings_partial_override() {
    let settings = LayoutSettings::from_json(
        r#"{
            "realistic": {
                "sizing": { "policy": "continuous", "minVisualSize": 0.01, "maxVisualSize": 0.5 },
                "orbitScaling": 100.0,
                "safetyMultiplier": 2.0,
                "minDistance": 0.05,
                "starSizeCap": 0.5
            }
        }"#,
    )
    .expect("valid settings");

    let realistic = settings.config(ViewMode::Realistic);
    assert_relative_eq!(realistic.orbit_scaling, 100.0);
    assert!(realistic.sizing.is_continuous());
    assert_relative_eq!(realistic.sizing.max_visual_size(), 0.5);
    assert_eq!(settings.config(ViewMode::Profile), &ViewModeConfig::profile());
}

#[test]
fn test_settings_rejects_malformed_json() {
    let err = LayoutSettings::from_json(r#"{ "realistic": { "sizing": 3 } }"#).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidSettings(_)));
}

#[test]
fn test_settings_config_mut() {
    let mut settings = LayoutSettings::default();
    settings.config_mut(ViewMode::Navigational).min_distance = 2.0;
    assert_relative_eq!(settings.config(ViewMode::Navigational).min_distance, 2.0);
    assert_relative_eq!(settings.config(ViewMode::Profile).min_distance, 1.0);
}
