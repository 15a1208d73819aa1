//! View modes and their layout parameters
//!
//! Each view mode trades realism for navigability. Continuous modes map
//! physical radii onto a logarithmic size curve; fixed modes look sizes up in
//! a per-classification table and ignore physical radii entirely.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::body::{BodyKind, GeometryHint};
use crate::error::{LayoutError, LayoutResult};

/// Tabulated planet size multiplier for bodies hinted as gas giants
pub const GAS_GIANT_SCALE: f64 = 1.5;

/// Named layout configuration selected by the caller
///
/// The string identifiers are shared with other consumers of the view mode
/// (camera rigs, UI state) and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum ViewMode {
    /// True size ratios on a compressed curve, wide orbits
    Realistic,
    /// Compressed curve with larger bodies and tighter orbits
    Explorational,
    /// Fixed schematic sizes for quick navigation
    Navigational,
    /// Fixed sizes packed closely for side-by-side comparison
    Profile,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [
        Self::Realistic,
        Self::Explorational,
        Self::Navigational,
        Self::Profile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Realistic => "realistic",
            Self::Explorational => "explorational",
            Self::Navigational => "navigational",
            Self::Profile => "profile",
        }
    }

    /// Built-in parameters for this mode
    pub fn default_config(&self) -> ViewModeConfig {
        match self {
            Self::Realistic => ViewModeConfig::realistic(),
            Self::Explorational => ViewModeConfig::explorational(),
            Self::Navigational => ViewModeConfig::navigational(),
            Self::Profile => ViewModeConfig::profile(),
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| LayoutError::UnknownViewMode(s.to_string()))
    }
}

/// Linear interpolation range for continuous sizing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SizeCurve {
    pub min_visual_size: f64,
    pub max_visual_size: f64,
}

impl SizeCurve {
    /// Map a normalized position in `[0, 1]` onto the visual size range
    pub fn interpolate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        self.min_visual_size + t * (self.max_visual_size - self.min_visual_size)
    }
}

/// Visual sizes by classification for fixed view modes
///
/// Kinds missing from `sizes` use `fallback`, the generic asteroid size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct FixedSizeTable {
    pub sizes: BTreeMap<BodyKind, f64>,
    pub fallback: f64,
}

impl FixedSizeTable {
    pub fn new(sizes: impl IntoIterator<Item = (BodyKind, f64)>, fallback: f64) -> Self {
        Self {
            sizes: sizes.into_iter().collect(),
            fallback,
        }
    }

    pub fn size_for(&self, kind: BodyKind, geometry: Option<GeometryHint>) -> f64 {
        let base = self.sizes.get(&kind).copied().unwrap_or(self.fallback);
        match (kind, geometry) {
            (BodyKind::Planet, Some(GeometryHint::GasGiant)) => base * GAS_GIANT_SCALE,
            _ => base,
        }
    }

    /// Smallest size this table can produce
    pub fn min_size(&self) -> f64 {
        self.sizes.values().copied().fold(self.fallback, f64::min)
    }

    /// Largest size this table can produce, gas giants included
    pub fn max_size(&self) -> f64 {
        let gas_giant = self.size_for(BodyKind::Planet, Some(GeometryHint::GasGiant));
        self.sizes
            .values()
            .copied()
            .fold(self.fallback.max(gas_giant), f64::max)
    }
}

/// How visual radii are derived from bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SizingPolicy {
    Continuous(SizeCurve),
    Fixed(FixedSizeTable),
}

impl SizingPolicy {
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::Continuous(_))
    }

    pub fn min_visual_size(&self) -> f64 {
        match self {
            Self::Continuous(curve) => curve.min_visual_size,
            Self::Fixed(table) => table.min_size(),
        }
    }

    pub fn max_visual_size(&self) -> f64 {
        match self {
            Self::Continuous(curve) => curve.max_visual_size,
            Self::Fixed(table) => table.max_size(),
        }
    }
}

/// Full parameter set of one view mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ViewModeConfig {
    pub sizing: SizingPolicy,

    /// Render units per AU of physical orbital distance
    pub orbit_scaling: f64,

    /// Clearance multiplier applied to a body's radius when spacing the
    /// next object outward
    pub safety_multiplier: f64,

    /// Absolute clearance between neighbouring footprints
    pub min_distance: f64,

    /// Largest visual radius a star may be grown to
    pub star_size_cap: f64,
}

impl ViewModeConfig {
    pub fn realistic() -> Self {
        Self {
            sizing: SizingPolicy::Continuous(SizeCurve {
                min_visual_size: 0.02,
                max_visual_size: 1.0,
            }),
            orbit_scaling: 50.0,
            safety_multiplier: 2.5,
            min_distance: 0.1,
            star_size_cap: 1.0,
        }
    }

    pub fn explorational() -> Self {
        Self {
            sizing: SizingPolicy::Continuous(SizeCurve {
                min_visual_size: 0.05,
                max_visual_size: 2.0,
            }),
            orbit_scaling: 15.0,
            safety_multiplier: 3.0,
            min_distance: 0.3,
            star_size_cap: 2.0,
        }
    }

    pub fn navigational() -> Self {
        Self {
            sizing: SizingPolicy::Fixed(FixedSizeTable::new(
                [
                    (BodyKind::Star, 3.0),
                    (BodyKind::CompactObject, 1.5),
                    (BodyKind::Planet, 0.8),
                    (BodyKind::DwarfPlanet, 0.4),
                    (BodyKind::Moon, 0.25),
                    (BodyKind::Belt, 0.1),
                    (BodyKind::Ring, 0.1),
                    (BodyKind::Barycenter, 0.5),
                ],
                0.15,
            )),
            orbit_scaling: 8.0,
            safety_multiplier: 2.0,
            min_distance: 0.6,
            star_size_cap: 3.0,
        }
    }

    pub fn profile() -> Self {
        Self {
            sizing: SizingPolicy::Fixed(FixedSizeTable::new(
                [
                    (BodyKind::Star, 4.0),
                    (BodyKind::CompactObject, 2.0),
                    (BodyKind::Planet, 1.0),
                    (BodyKind::DwarfPlanet, 0.6),
                    (BodyKind::Moon, 0.35),
                    (BodyKind::Belt, 0.15),
                    (BodyKind::Ring, 0.15),
                    (BodyKind::Barycenter, 0.6),
                ],
                0.2,
            )),
            orbit_scaling: 4.0,
            safety_multiplier: 1.5,
            min_distance: 1.0,
            star_size_cap: 4.0,
        }
    }

    pub fn min_visual_size(&self) -> f64 {
        self.sizing.min_visual_size()
    }

    /// Clearance the first object around a parent of the given visual
    /// radius must keep from the parent centre
    pub fn start_clearance(&self, parent_visual_radius: f64) -> f64 {
        (parent_visual_radius * self.safety_multiplier).max(self.min_distance)
    }

    /// Upper bound on a parent's visual radius when the hierarchy rule
    /// forces it to grow
    pub fn parent_size_cap(&self, kind: BodyKind) -> f64 {
        if kind.is_star() {
            return self.star_size_cap;
        }
        match &self.sizing {
            SizingPolicy::Continuous(curve) => curve.max_visual_size,
            SizingPolicy::Fixed(_) => f64::INFINITY,
        }
    }
}

/// Parameters for every view mode
///
/// Deserializing fills any mode missing from the input with its built-in
/// preset, so a settings file only needs to list what it overrides.
///
/// # Examples
///
/// ```
/// use orbital_layout::{LayoutSettings, ViewMode};
///
/// let settings = LayoutSettings::from_json(r#"{
///     "profile": {
///         "sizing": { "policy": "fixed", "sizes": { "star": 5.0 }, "fallback": 0.3 },
///         "orbitScaling": 2.0,
///         "safetyMultiplier": 1.5,
///         "minDistance": 1.0,
///         "starSizeCap": 5.0
///     }
/// }"#).unwrap();
///
/// assert_eq!(settings.config(ViewMode::Profile).orbit_scaling, 2.0);
/// assert_eq!(settings.config(ViewMode::Realistic), &ViewMode::Realistic.default_config());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct LayoutSettings {
    pub realistic: ViewModeConfig,
    pub explorational: ViewModeConfig,
    pub navigational: ViewModeConfig,
    pub profile: ViewModeConfig,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            realistic: ViewModeConfig::realistic(),
            explorational: ViewModeConfig::explorational(),
            navigational: ViewModeConfig::navigational(),
            profile: ViewModeConfig::profile(),
        }
    }
}

impl LayoutSettings {
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn config(&self, mode: ViewMode) -> &ViewModeConfig {
        match mode {
            ViewMode::Realistic => &self.realistic,
            ViewMode::Explorational => &self.explorational,
            ViewMode::Navigational => &self.navigational,
            ViewMode::Profile => &self.profile,
        }
    }

    pub fn config_mut(&mut self, mode: ViewMode) -> &mut ViewModeConfig {
        match mode {
            ViewMode::Realistic => &mut self.realistic,
            ViewMode::Explorational => &mut self.explorational,
            ViewMode::Navigational => &mut self.navigational,
            ViewMode::Profile => &mut self.profile,
        }
    }
}
