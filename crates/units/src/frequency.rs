use serde::{Deserialize, Serialize};

use crate::constants::LIGHT_SPEED;
use crate::length::Length;

const MHZ_TO_HZ: f64 = 1e6;
const GHZ_TO_HZ: f64 = 1e9;

/// Convert a wavelength in metres to a frequency in Hz (ν = c / λ).
///
/// A zero wavelength yields an infinite frequency.
///
/// # Examples
/// ```
/// use units::frequency::wavelength_to_frequency;
///
/// // The 21 cm hydrogen line sits near 1.42 GHz
/// let nu = wavelength_to_frequency(0.2110);
/// assert!((nu / 1.42e9 - 1.0).abs() < 1e-3);
/// ```
pub fn wavelength_to_frequency(wavelength: f64) -> f64 {
    LIGHT_SPEED / wavelength
}

/// An electromagnetic frequency in Hz.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Frequency(f64); // Base unit: Hz

impl Frequency {
    pub fn from_hz(value: f64) -> Self {
        Self(value)
    }

    pub fn from_mhz(value: f64) -> Self {
        Self(value * MHZ_TO_HZ)
    }

    pub fn from_ghz(value: f64) -> Self {
        Self(value * GHZ_TO_HZ)
    }

    /// Frequency of light with the given wavelength in vacuum.
    pub fn from_wavelength(wavelength: Length) -> Self {
        Self(wavelength_to_frequency(wavelength.to_m()))
    }

    pub fn to_hz(&self) -> f64 {
        self.0
    }

    pub fn to_mhz(&self) -> f64 {
        self.0 / MHZ_TO_HZ
    }

    pub fn to_ghz(&self) -> f64 {
        self.0 / GHZ_TO_HZ
    }

    /// Vacuum wavelength, λ = c / ν.
    pub fn to_wavelength(&self) -> Length {
        Length::from_m(LIGHT_SPEED / self.0)
    }
}
