//! Radiation from a blackbody.
//!
//! Total emission (Stefan-Boltzmann), spectral radiance (Planck and
//! Rayleigh-Jeans), and the luminosity, flux and detected power derived from
//! them. Every function takes and returns SI scalars; invalid inputs follow
//! IEEE 754 arithmetic (division by zero gives infinity, fractional powers of
//! negative numbers give NaN). See [`crate::checked`] for validating variants.

use std::f64::consts::PI;

use units::constants::{BOLTZMANN, LIGHT_SPEED, PLANCK, STEFAN_BOLTZMANN};
use units::geometry::surface_area_sphere;

/// Largest argument for which `f64::exp` stays finite, ln(f64::MAX).
pub const MAX_EXPONENT: f64 = 709.782_712_893_384;

/// Stefan-Boltzmann law, σT⁴.
///
/// Total power radiated per unit surface area of a blackbody across all
/// wavelengths (W m⁻²).
///
/// # Examples
/// ```
/// use radiation::blackbody::stefan_boltzmann_law;
///
/// // The Sun's photosphere emits ~63 MW per square metre
/// let emission = stefan_boltzmann_law(5777.0);
/// assert!((emission / 6.3153e7 - 1.0).abs() < 1e-3);
/// ```
pub fn stefan_boltzmann_law(temperature: f64) -> f64 {
    STEFAN_BOLTZMANN * temperature.powi(4)
}

/// Ratio hν/kT appearing in the exponent of Planck's law.
pub fn planck_exponent(frequency: f64, temperature: f64) -> f64 {
    (PLANCK * frequency) / (BOLTZMANN * temperature)
}

/// Planck's law of blackbody radiation.
///
/// Spectral radiance (W m⁻² sr⁻¹ Hz⁻¹):
///
/// B(ν, T) = (2hν³ / c²) · 1 / (exp(hν/kT) − 1)
///
/// Valid for ν > 0 and T > 0. The denominator is evaluated with `exp_m1` so
/// the result stays accurate when hν ≪ kT. Once hν/kT exceeds
/// [`MAX_EXPONENT`] the exponential overflows and the radiance is 0.
pub fn spectral_radiance_planck(frequency: f64, temperature: f64) -> f64 {
    let exponent = planck_exponent(frequency, temperature);
    if exponent > MAX_EXPONENT {
        log::trace!(
            "Planck exponent {exponent:e} overflows at {frequency:e} Hz, {temperature} K"
        );
    }

    ((2.0 * PLANCK * frequency.powi(3)) / LIGHT_SPEED.powi(2)) * (1.0 / exponent.exp_m1())
}

/// Rayleigh-Jeans law, the classical low-frequency limit of Planck's law.
///
/// Spectral radiance (W m⁻² sr⁻¹ Hz⁻¹):
///
/// B(ν, T) = 2ν²kT / c²
///
/// Grows without bound with frequency (the ultraviolet catastrophe); only
/// meaningful where hν ≪ kT.
pub fn spectral_radiance_rayleigh_jeans(frequency: f64, temperature: f64) -> f64 {
    (2.0 * frequency.powi(2) * BOLTZMANN * temperature) / LIGHT_SPEED.powi(2)
}

/// Area and solid-angle factor applied to a spectral radiance, 4π²r².
pub(crate) fn luminosity_factor(radius: f64) -> f64 {
    4.0 * PI.powi(2) * radius.powi(2)
}

/// Frequency dependent luminosity of a star from Planck's law.
///
/// The spectral radiance integrated over the stellar surface and all solid
/// angles, using the 4π²r² factor (W Hz⁻¹).
///
/// # Arguments
/// * `frequency` - Frequency of radiation in Hz
/// * `temperature` - Temperature of the blackbody in Kelvin
/// * `radius` - Radius of the spherical blackbody in metres
pub fn monochromatic_luminosity_planck(frequency: f64, temperature: f64, radius: f64) -> f64 {
    luminosity_factor(radius) * spectral_radiance_planck(frequency, temperature)
}

/// Frequency dependent luminosity of a star from the Rayleigh-Jeans law.
///
/// Same 4π²r² factor as [`monochromatic_luminosity_planck`]; only valid at
/// low frequency.
pub fn monochromatic_luminosity_rayleigh_jeans(
    frequency: f64,
    temperature: f64,
    radius: f64,
) -> f64 {
    luminosity_factor(radius) * spectral_radiance_rayleigh_jeans(frequency, temperature)
}

/// Flux at `distance` metres from a source of the given luminosity.
///
/// The luminosity is spread over a sphere of radius `distance`. A zero
/// distance gives an infinite flux.
pub fn flux_from_luminosity(luminosity: f64, distance: f64) -> f64 {
    luminosity / surface_area_sphere(distance)
}

/// Mass-luminosity relation, L/L☉ = (M/M☉)^3.5.
///
/// Input and output are both in solar units. Negative masses produce NaN.
///
/// # Examples
/// ```
/// use radiation::blackbody::luminosity_from_mass;
///
/// assert_eq!(luminosity_from_mass(1.0), 1.0);
/// assert!((luminosity_from_mass(2.0) - 11.3137).abs() < 1e-4);
/// ```
pub fn luminosity_from_mass(solar_masses: f64) -> f64 {
    solar_masses.powf(3.5)
}

/// Total luminosity of a spherical blackbody, 4πr²σT⁴ (W).
///
/// T⁴ enters once, through [`stefan_boltzmann_law`].
pub fn luminosity_from_temperature(temperature: f64, radius: f64) -> f64 {
    stefan_boltzmann_law(temperature) * surface_area_sphere(radius)
}

/// Power (W) collected by a mirror of the given diameter.
///
/// # Arguments
/// * `flux_from_star` - Radiation flux crossing the detector per unit area (W m⁻²)
/// * `diameter_mirror` - Diameter of the mirror in metres
pub fn power_from_star(flux_from_star: f64, diameter_mirror: f64) -> f64 {
    flux_from_star * diameter_mirror.powi(2)
}
