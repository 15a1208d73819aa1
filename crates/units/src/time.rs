use serde::{Deserialize, Serialize};
use std::ops::Div;

pub(crate) const DAYS_PER_YEAR: f64 = 365.25;

/// A physical time quantity using f64 precision.
///
/// Base unit is the Julian year, so an Earth-like orbital period is exactly 1.0.
/// Negative values are allowed and denote retrograde motion when used as an
/// orbital period.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let month = Time::from_days(27.32);
/// assert!(month.to_years() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Years

impl Time {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Time` from a value in years.
    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in days.
    pub fn from_days(value: f64) -> Self {
        Self(value / DAYS_PER_YEAR)
    }

    /// Returns the time in years.
    pub fn to_years(&self) -> f64 {
        self.0
    }

    /// Converts the time to days.
    pub fn to_days(&self) -> f64 {
        self.0 * DAYS_PER_YEAR
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}
