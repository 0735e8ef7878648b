//! Validating variants of the radiation formulas.
//!
//! Each `try_*` function checks its inputs against the physical domain of the
//! formula and then defers to the unchecked version, so successful results
//! are bit-for-bit identical to it.
//!
//! * temperature, frequency, wavelength, distance (metres or light years)
//!   and diameter: finite, > 0
//! * radius and mass: finite, ≥ 0
//! * luminosity and flux: finite, ≥ 0

use units::frequency::wavelength_to_frequency;
use units::geometry::surface_area_sphere;
use units::length::light_years_to_metres;

use crate::blackbody::{
    flux_from_luminosity, luminosity_factor, luminosity_from_mass, luminosity_from_temperature,
    planck_exponent, power_from_star, spectral_radiance_planck, spectral_radiance_rayleigh_jeans,
    stefan_boltzmann_law, MAX_EXPONENT,
};
use crate::cocconi_morrison::{
    flux_from_galaxy, flux_sunlike, frequency_minimum, luminosity_sunlike, power_from_galaxy,
};
use crate::error::{DomainError, Result};

fn finite(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("rejected {quantity} = {value}: not finite");
        Err(DomainError::NonFinite { quantity, value })
    }
}

fn positive(quantity: &'static str, value: f64) -> Result<f64> {
    let value = finite(quantity, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        log::debug!("rejected {quantity} = {value}: not positive");
        Err(DomainError::NonPositive { quantity, value })
    }
}

fn non_negative(quantity: &'static str, value: f64) -> Result<f64> {
    let value = finite(quantity, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        log::debug!("rejected {quantity} = {value}: negative");
        Err(DomainError::Negative { quantity, value })
    }
}

fn optional_positive(quantity: &'static str, value: Option<f64>) -> Result<Option<f64>> {
    value.map(|v| positive(quantity, v)).transpose()
}

pub fn try_surface_area_sphere(radius: f64) -> Result<f64> {
    Ok(surface_area_sphere(non_negative("radius", radius)?))
}

pub fn try_light_years_to_metres(light_years: f64) -> Result<f64> {
    Ok(light_years_to_metres(positive("light_years", light_years)?))
}

pub fn try_wavelength_to_frequency(wavelength: f64) -> Result<f64> {
    Ok(wavelength_to_frequency(positive("wavelength", wavelength)?))
}

pub fn try_stefan_boltzmann_law(temperature: f64) -> Result<f64> {
    Ok(stefan_boltzmann_law(positive("temperature", temperature)?))
}

/// Planck radiance, rejecting inputs whose exponent hν/kT would overflow.
pub fn try_spectral_radiance_planck(frequency: f64, temperature: f64) -> Result<f64> {
    let frequency = positive("frequency", frequency)?;
    let temperature = positive("temperature", temperature)?;

    let ratio = planck_exponent(frequency, temperature);
    if ratio > MAX_EXPONENT {
        log::debug!("rejected Planck exponent {ratio:e}");
        return Err(DomainError::ExponentOverflow { ratio });
    }
    Ok(spectral_radiance_planck(frequency, temperature))
}

pub fn try_spectral_radiance_rayleigh_jeans(frequency: f64, temperature: f64) -> Result<f64> {
    Ok(spectral_radiance_rayleigh_jeans(
        positive("frequency", frequency)?,
        positive("temperature", temperature)?,
    ))
}

pub fn try_monochromatic_luminosity_planck(
    frequency: f64,
    temperature: f64,
    radius: f64,
) -> Result<f64> {
    let radius = non_negative("radius", radius)?;
    Ok(luminosity_factor(radius) * try_spectral_radiance_planck(frequency, temperature)?)
}

pub fn try_monochromatic_luminosity_rayleigh_jeans(
    frequency: f64,
    temperature: f64,
    radius: f64,
) -> Result<f64> {
    let radius = non_negative("radius", radius)?;
    Ok(luminosity_factor(radius) * try_spectral_radiance_rayleigh_jeans(frequency, temperature)?)
}

pub fn try_flux_from_luminosity(luminosity: f64, distance: f64) -> Result<f64> {
    Ok(flux_from_luminosity(
        non_negative("luminosity", luminosity)?,
        positive("distance", distance)?,
    ))
}

pub fn try_luminosity_from_mass(solar_masses: f64) -> Result<f64> {
    Ok(luminosity_from_mass(non_negative("solar_masses", solar_masses)?))
}

pub fn try_luminosity_from_temperature(temperature: f64, radius: f64) -> Result<f64> {
    Ok(luminosity_from_temperature(
        positive("temperature", temperature)?,
        non_negative("radius", radius)?,
    ))
}

pub fn try_power_from_star(flux_from_star: f64, diameter_mirror: f64) -> Result<f64> {
    Ok(power_from_star(
        non_negative("flux_from_star", flux_from_star)?,
        positive("diameter_mirror", diameter_mirror)?,
    ))
}

pub fn try_luminosity_sunlike(frequency: f64) -> Result<f64> {
    Ok(luminosity_sunlike(positive("frequency", frequency)?))
}

pub fn try_flux_sunlike(frequency: f64, distance: f64) -> Result<f64> {
    Ok(flux_sunlike(
        positive("frequency", frequency)?,
        positive("distance", distance)?,
    ))
}

pub fn try_flux_from_galaxy(frequency: f64, diameter_mirror: Option<f64>) -> Result<f64> {
    Ok(flux_from_galaxy(
        positive("frequency", frequency)?,
        optional_positive("diameter_mirror", diameter_mirror)?,
    ))
}

pub fn try_power_from_galaxy(frequency: f64, diameter_detector: f64) -> Result<f64> {
    Ok(power_from_galaxy(
        positive("frequency", frequency)?,
        positive("diameter_detector", diameter_detector)?,
    ))
}

pub fn try_frequency_minimum(
    light_years_to_star: f64,
    diameter_detector: f64,
    constant: Option<f64>,
) -> Result<f64> {
    Ok(frequency_minimum(
        positive("light_years_to_star", light_years_to_star)?,
        positive("diameter_detector", diameter_detector)?,
        optional_positive("constant", constant)?,
    ))
}
