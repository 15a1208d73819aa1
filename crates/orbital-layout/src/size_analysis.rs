//! Logarithmic size range of a system

use serde::{Deserialize, Serialize};

use crate::body::CelestialBody;

/// Radius bounds (km) assumed when a system has no measurable bodies
pub const DEFAULT_MIN_RADIUS_KM: f64 = 1.0;
pub const DEFAULT_MAX_RADIUS_KM: f64 = 1000.0;

/// Narrowest span (in decades) used for normalization
pub const MIN_LOG_RANGE: f64 = 1.0;

/// Base-10 logarithmic span of physical radii in a system
///
/// Every body with a positive physical radius contributes, moons included,
/// so the smallest moon anchors the bottom of the curve. Bands and
/// barycenters without a radius are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRange {
    pub log_min: f64,
    pub log_range: f64,
}

impl SizeRange {
    pub fn analyze(bodies: &[CelestialBody]) -> Self {
        Self::from_radii_km(bodies.iter().filter_map(CelestialBody::radius_km))
    }

    /// Build a range from raw radii in km, ignoring non-positive values
    pub fn from_radii_km(radii: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = radii
            .into_iter()
            .filter(|r| r.is_finite() && *r > 0.0)
            .fold(None, |bounds: Option<(f64, f64)>, r| match bounds {
                Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
                None => Some((r, r)),
            })
            .unwrap_or((DEFAULT_MIN_RADIUS_KM, DEFAULT_MAX_RADIUS_KM));

        let log_min = min.log10();
        let log_range = (max.log10() - log_min).max(MIN_LOG_RANGE);
        Self { log_min, log_range }
    }

    /// Position of a radius within the range, clamped to `[0, 1]`
    pub fn normalize(&self, radius_km: f64) -> f64 {
        if radius_km.is_nan() || radius_km <= 0.0 {
            return 0.0;
        }
        ((radius_km.log10() - self.log_min) / self.log_range).clamp(0.0, 1.0)
    }
}
