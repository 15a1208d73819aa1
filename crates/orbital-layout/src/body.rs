//! Celestial body input records
//!
//! Bodies form a tree through the `parent_id` of their orbit. A body without
//! an orbit is a root and sits at the origin of the layout.

use serde::{Deserialize, Serialize};
use units::{Length, Time};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Broad classification of a body, used for size policies and hierarchy rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum BodyKind {
    Star,
    Planet,
    DwarfPlanet,
    Moon,
    Belt,
    Ring,
    Barycenter,
    CompactObject,
}

impl BodyKind {
    /// Belts and rings are bands rather than discs; they are exempt from the
    /// parent-larger-than-child rule.
    pub fn is_band(&self) -> bool {
        matches!(self, Self::Belt | Self::Ring)
    }

    pub fn is_moon(&self) -> bool {
        matches!(self, Self::Moon)
    }

    pub fn is_star(&self) -> bool {
        matches!(self, Self::Star)
    }
}

impl std::fmt::Display for BodyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Star => write!(f, "Star"),
            Self::Planet => write!(f, "Planet"),
            Self::DwarfPlanet => write!(f, "Dwarf Planet"),
            Self::Moon => write!(f, "Moon"),
            Self::Belt => write!(f, "Belt"),
            Self::Ring => write!(f, "Ring"),
            Self::Barycenter => write!(f, "Barycenter"),
            Self::CompactObject => write!(f, "Compact Object"),
        }
    }
}

/// Rendering geometry hint, used by fixed size tables to tell gas giants
/// apart from rocky planets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum GeometryHint {
    Terrestrial,
    GasGiant,
}

/// Orbit of a discrete body around its parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PointOrbit {
    pub parent_id: String,

    /// Semi-major axis measured from the parent centre
    pub semi_major_axis: Length,

    pub eccentricity: f64,

    /// Inclination in degrees
    pub inclination: f64,

    /// Sidereal period; negative for retrograde orbits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_period: Option<Time>,
}

/// Radial extent of a belt or ring around its parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct BeltOrbit {
    pub parent_id: String,
    pub inner_radius: Length,
    pub outer_radius: Length,
    pub inclination: f64,
    pub eccentricity: f64,
}

impl BeltOrbit {
    /// Inner and outer radius in AU, ordered even if the input was swapped
    pub fn bounds_au(&self) -> (f64, f64) {
        let a = self.inner_radius.to_au();
        let b = self.outer_radius.to_au();
        if a <= b { (a, b) } else { (b, a) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum Orbit {
    Point(PointOrbit),
    Belt(BeltOrbit),
}

impl Orbit {
    pub fn parent_id(&self) -> &str {
        match self {
            Self::Point(orbit) => &orbit.parent_id,
            Self::Belt(orbit) => &orbit.parent_id,
        }
    }

    /// Physical distance (AU) that orders siblings: the semi-major axis for
    /// point orbits, the inner edge for bands.
    pub fn placement_key(&self) -> f64 {
        match self {
            Self::Point(orbit) => orbit.semi_major_axis.to_au(),
            Self::Belt(orbit) => orbit.bounds_au().0,
        }
    }
}

/// A body in a hierarchical orbital system
///
/// Input records are read-only to the layout engine and are never mutated.
///
/// # Examples
///
/// ```
/// use orbital_layout::{BodyKind, CelestialBody};
/// use units::Length;
///
/// let sun = CelestialBody::star("sol", Length::from_km(695_700.0));
/// let earth = CelestialBody::planet("earth", "sol", Length::from_km(6371.0), Length::from_au(1.0));
///
/// assert!(sun.is_root());
/// assert_eq!(earth.parent_id(), Some("sol"));
/// assert_eq!(earth.kind, BodyKind::Planet);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct CelestialBody {
    /// Unique identifier, stable across calls
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub kind: BodyKind,

    /// Physical radius; belts and barycenters usually have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_radius: Option<Length>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeometryHint>,

    /// `None` marks a root body anchored at the origin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit: Option<Orbit>,
}

impl CelestialBody {
    /// Create a root body of any kind
    pub fn root(id: impl Into<String>, kind: BodyKind, physical_radius: Option<Length>) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind,
            physical_radius,
            geometry: None,
            orbit: None,
        }
    }

    /// Create a root star
    pub fn star(id: impl Into<String>, radius: Length) -> Self {
        Self::root(id, BodyKind::Star, Some(radius))
    }

    /// Create a body on a circular, uninclined point orbit
    pub fn orbiting(
        id: impl Into<String>,
        kind: BodyKind,
        parent_id: impl Into<String>,
        radius: Length,
        semi_major_axis: Length,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind,
            physical_radius: Some(radius),
            geometry: None,
            orbit: Some(Orbit::Point(PointOrbit {
                parent_id: parent_id.into(),
                semi_major_axis,
                eccentricity: 0.0,
                inclination: 0.0,
                orbital_period: None,
            })),
        }
    }

    pub fn planet(
        id: impl Into<String>,
        parent_id: impl Into<String>,
        radius: Length,
        semi_major_axis: Length,
    ) -> Self {
        Self::orbiting(id, BodyKind::Planet, parent_id, radius, semi_major_axis)
    }

    pub fn moon(
        id: impl Into<String>,
        parent_id: impl Into<String>,
        radius: Length,
        semi_major_axis: Length,
    ) -> Self {
        Self::orbiting(id, BodyKind::Moon, parent_id, radius, semi_major_axis)
    }

    /// Create a band-shaped body of the given kind (belt or ring)
    pub fn band(
        id: impl Into<String>,
        kind: BodyKind,
        parent_id: impl Into<String>,
        inner_radius: Length,
        outer_radius: Length,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind,
            physical_radius: None,
            geometry: None,
            orbit: Some(Orbit::Belt(BeltOrbit {
                parent_id: parent_id.into(),
                inner_radius,
                outer_radius,
                inclination: 0.0,
                eccentricity: 0.0,
            })),
        }
    }

    pub fn belt(
        id: impl Into<String>,
        parent_id: impl Into<String>,
        inner_radius: Length,
        outer_radius: Length,
    ) -> Self {
        Self::band(id, BodyKind::Belt, parent_id, inner_radius, outer_radius)
    }

    pub fn ring(
        id: impl Into<String>,
        parent_id: impl Into<String>,
        inner_radius: Length,
        outer_radius: Length,
    ) -> Self {
        Self::band(id, BodyKind::Ring, parent_id, inner_radius, outer_radius)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_geometry(mut self, geometry: GeometryHint) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Attach an orbital period. Has no effect on bands and roots.
    pub fn with_period(mut self, period: Time) -> Self {
        if let Some(Orbit::Point(orbit)) = &mut self.orbit {
            orbit.orbital_period = Some(period);
        }
        self
    }

    pub fn is_root(&self) -> bool {
        self.orbit.is_none()
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.orbit.as_ref().map(Orbit::parent_id)
    }

    pub fn orbital_period(&self) -> Option<Time> {
        match &self.orbit {
            Some(Orbit::Point(orbit)) => orbit.orbital_period,
            _ => None,
        }
    }

    /// Physical sibling ordering key in AU; roots sort first
    pub fn placement_key(&self) -> f64 {
        self.orbit.as_ref().map_or(0.0, Orbit::placement_key)
    }

    /// Radius in km when present and strictly positive
    pub fn radius_km(&self) -> Option<f64> {
        self.physical_radius
            .filter(Length::is_positive)
            .map(|r| r.to_km())
    }
}

impl std::fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = self.name.as_deref().unwrap_or(&self.id);
        match self.parent_id() {
            Some(parent) => write!(f, "{} ({}, orbits {})", label, self.kind, parent),
            None => write!(f, "{} ({})", label, self.kind),
        }
    }
}
