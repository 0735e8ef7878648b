//! Background radiation against which an interstellar radio signal must be
//! detected.
//!
//! Empirical fits from Cocconi & Morrison (1959). The numeric coefficients
//! are the paper's and are kept as published.
//!
//! # References
//! - G. Cocconi and P. Morrison, "Searching for Interstellar Communications",
//!   Nature 184, 844–846 (1959)

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use units::constants::LIGHT_SPEED;
use units::length::light_years_to_metres;

/// Detector diameter (m) used when none is given.
pub const DEFAULT_DIAMETER_MIRROR: f64 = 100.0;

/// Scaling constant of [`frequency_minimum`] used when none is given.
pub const DEFAULT_FREQUENCY_CONSTANT: f64 = 1e4;

/// Luminosity of a sun-like star at the given frequency (Hz).
pub fn luminosity_sunlike(frequency: f64) -> f64 {
    1e-15 * frequency.powi(2) * 4.0 * PI
}

/// Flux from a sun-like star at `frequency` Hz seen from `distance` metres.
pub fn flux_sunlike(frequency: f64, distance: f64) -> f64 {
    luminosity_sunlike(frequency) / distance.powi(2)
}

/// Galactic background flux at `frequency` Hz collected by a detector.
///
/// `diameter_mirror` is the detector diameter in metres, defaulting to
/// [`DEFAULT_DIAMETER_MIRROR`] when `None`.
///
/// # Examples
/// ```
/// use radiation::cocconi_morrison::flux_from_galaxy;
///
/// let f = 1.42e9;
/// assert_eq!(flux_from_galaxy(f, None), flux_from_galaxy(f, Some(100.0)));
/// ```
pub fn flux_from_galaxy(frequency: f64, diameter_mirror: Option<f64>) -> f64 {
    let diameter_mirror = diameter_mirror.unwrap_or(DEFAULT_DIAMETER_MIRROR);
    (10f64.powf(-12.5) / frequency) * (LIGHT_SPEED / (diameter_mirror * frequency)).powi(2)
}

/// Galactic background power at `frequency` Hz received by a detector of
/// `diameter_detector` metres.
pub fn power_from_galaxy(frequency: f64, diameter_detector: f64) -> f64 {
    flux_from_galaxy(frequency, Some(diameter_detector)) * diameter_detector.powi(2)
}

/// Lowest frequency (Hz) at which a signal from a star stands out against
/// the stellar and galactic background.
///
/// ν_min = constant · (d / D)^0.4 where d is the distance to the star in
/// metres and D the detector diameter. `constant` defaults to
/// [`DEFAULT_FREQUENCY_CONSTANT`] when `None`.
///
/// # Arguments
/// * `light_years_to_star` - Distance to the star in light years
/// * `diameter_detector` - Diameter of the detector in metres
/// * `constant` - Scaling constant
pub fn frequency_minimum(
    light_years_to_star: f64,
    diameter_detector: f64,
    constant: Option<f64>,
) -> f64 {
    let constant = constant.unwrap_or(DEFAULT_FREQUENCY_CONSTANT);
    let distance_to_star = light_years_to_metres(light_years_to_star);
    constant * (distance_to_star / diameter_detector).powf(0.4)
}

/// Detector setup for a search.
///
/// Fields missing from a serialized document fall back to the defaults.
///
/// # Examples
/// ```
/// use radiation::cocconi_morrison::{frequency_minimum, SearchConfig};
///
/// let config = SearchConfig::default();
/// assert_eq!(config.diameter_detector, 100.0);
/// assert_eq!(
///     config.frequency_minimum(4.24),
///     frequency_minimum(4.24, 100.0, None)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Detector diameter in metres
    pub diameter_detector: f64,
    /// Scaling constant of the minimum frequency relation
    pub constant: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            diameter_detector: DEFAULT_DIAMETER_MIRROR,
            constant: DEFAULT_FREQUENCY_CONSTANT,
        }
    }
}

impl SearchConfig {
    pub fn new(diameter_detector: f64, constant: f64) -> Self {
        Self {
            diameter_detector,
            constant,
        }
    }

    pub fn flux_from_galaxy(&self, frequency: f64) -> f64 {
        flux_from_galaxy(frequency, Some(self.diameter_detector))
    }

    pub fn power_from_galaxy(&self, frequency: f64) -> f64 {
        power_from_galaxy(frequency, self.diameter_detector)
    }

    pub fn frequency_minimum(&self, light_years_to_star: f64) -> f64 {
        frequency_minimum(light_years_to_star, self.diameter_detector, Some(self.constant))
    }
}
