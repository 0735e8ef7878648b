use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::constants::{AU, EARTH_RADIUS, LIGHT_YEAR, SUN_RADIUS};

pub const KM_TO_M: f64 = 1e3;

/// Convert a distance in light years to metres.
///
/// # Examples
/// ```
/// use units::length::light_years_to_metres;
///
/// assert_eq!(light_years_to_metres(1.0), 9.461e15);
/// ```
pub fn light_years_to_metres(light_years: f64) -> f64 {
    light_years * LIGHT_YEAR
}

/// A physical length quantity using f64 precision.
///
/// The base unit is the metre so that every formula downstream can work in SI
/// without conversion. Stellar and interstellar scales are available through
/// the `from_*` constructors.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let proxima = Length::from_light_years(4.24);
/// let sun = Length::from_solar_radii(1.0);
/// let earth_orbit = Length::from_au(1.0);
///
/// assert!(proxima > earth_orbit);
/// assert!((sun.to_m() - 6.957e8).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: m

impl Length {
    /// Creates a new `Length` from a value in metres.
    pub fn from_m(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometres.
    pub fn from_km(value: f64) -> Self {
        Self(value * KM_TO_M)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value * AU)
    }

    /// Creates a new `Length` from a value in light years.
    pub fn from_light_years(value: f64) -> Self {
        Self(light_years_to_metres(value))
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SUN_RADIUS)
    }

    /// Returns the length in metres.
    pub fn to_m(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 / KM_TO_M
    }

    pub fn to_au(&self) -> f64 {
        self.0 / AU
    }

    pub fn to_light_years(&self) -> f64 {
        self.0 / LIGHT_YEAR
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.0 / EARTH_RADIUS
    }

    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SUN_RADIUS
    }

    /// Raise to integer power (returns dimensionless f64 for dimensional consistency)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
