use serde::{Deserialize, Serialize};

use crate::constants::SUN_TEMP;

const CELSIUS_OFFSET: f64 = 273.15;

/// A thermodynamic temperature using f64 precision.
///
/// Kelvin is the base unit: every radiation law in this workspace is written
/// against absolute temperature.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let photosphere = Temperature::sun();
/// let room = Temperature::from_celsius(20.0);
///
/// assert_eq!(photosphere.to_kelvin(), 5777.0);
/// assert!((room.to_kelvin() - 293.15).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a value in Celsius (K = °C + 273.15).
    pub fn from_celsius(value: f64) -> Self {
        Self(value + CELSIUS_OFFSET)
    }

    /// Effective surface temperature of the Sun.
    pub fn sun() -> Self {
        Self(SUN_TEMP)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    pub fn to_celsius(&self) -> f64 {
        self.0 - CELSIUS_OFFSET
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}
