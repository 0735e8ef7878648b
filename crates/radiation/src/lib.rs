//! Closed-form astrophysical radiation formulas.
//!
//! * [`blackbody`] - Stefan-Boltzmann, Planck and Rayleigh-Jeans laws and the
//!   luminosity, flux and power derived from them
//! * [`cocconi_morrison`] - stellar and galactic radio background from
//!   Cocconi & Morrison (1959)
//! * [`source`] - spherical blackbody sources in typed units
//! * [`checked`] - the same formulas with input validation

pub mod blackbody;
pub mod checked;
pub mod cocconi_morrison;
pub mod error;
pub mod source;


pub use error::{DomainError, Result};

pub use blackbody::{
    flux_from_luminosity, luminosity_from_mass, luminosity_from_temperature,
    monochromatic_luminosity_planck, monochromatic_luminosity_rayleigh_jeans, power_from_star,
    spectral_radiance_planck, spectral_radiance_rayleigh_jeans, stefan_boltzmann_law,
};
pub use cocconi_morrison::{
    flux_from_galaxy, flux_sunlike, frequency_minimum, luminosity_sunlike, power_from_galaxy,
    SearchConfig,
};
pub use source::{Blackbody, SpectralLaw};
