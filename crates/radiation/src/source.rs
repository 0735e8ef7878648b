//! Spherical blackbody sources built from the free formulas in
//! [`crate::blackbody`].

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use units::{Frequency, Length, Temperature};

use crate::blackbody::{
    flux_from_luminosity, luminosity_from_temperature, monochromatic_luminosity_planck,
    monochromatic_luminosity_rayleigh_jeans, spectral_radiance_planck,
    spectral_radiance_rayleigh_jeans, stefan_boltzmann_law,
};

/// Spectral radiance law used to evaluate a blackbody spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SpectralLaw {
    Planck,
    RayleighJeans, // hν ≪ kT only
}

impl SpectralLaw {
    /// Spectral radiance (W m⁻² sr⁻¹ Hz⁻¹) at `frequency` Hz and `temperature` K.
    pub fn radiance(&self, frequency: f64, temperature: f64) -> f64 {
        match self {
            SpectralLaw::Planck => spectral_radiance_planck(frequency, temperature),
            SpectralLaw::RayleighJeans => spectral_radiance_rayleigh_jeans(frequency, temperature),
        }
    }

    /// Monochromatic luminosity (W Hz⁻¹) of a sphere of `radius` metres.
    pub fn monochromatic_luminosity(&self, frequency: f64, temperature: f64, radius: f64) -> f64 {
        match self {
            SpectralLaw::Planck => monochromatic_luminosity_planck(frequency, temperature, radius),
            SpectralLaw::RayleighJeans => {
                monochromatic_luminosity_rayleigh_jeans(frequency, temperature, radius)
            }
        }
    }
}

impl fmt::Display for SpectralLaw {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralLaw::Planck => "Planck",
            SpectralLaw::RayleighJeans => "Rayleigh-Jeans",
        };
        write!(f, "{}", str)
    }
}

/// A spherical blackbody of uniform surface temperature.
///
/// # Examples
/// ```
/// use radiation::source::Blackbody;
/// use units::Length;
///
/// let sun = Blackbody::sun();
///
/// // ~3.8e26 W
/// assert!((sun.luminosity() / 3.85e26 - 1.0).abs() < 0.02);
///
/// // ~1360 W/m² at 1 AU
/// let irradiance = sun.flux_at(Length::from_au(1.0));
/// assert!((irradiance - 1361.0).abs() < 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blackbody {
    pub temperature: Temperature,
    pub radius: Length,
}

impl Blackbody {
    pub fn new(temperature: Temperature, radius: Length) -> Self {
        Self {
            temperature,
            radius,
        }
    }

    /// The Sun as a blackbody: 5777 K photosphere, 6.957e8 m radius.
    pub fn sun() -> Self {
        Self::new(Temperature::sun(), Length::from_solar_radii(1.0))
    }

    /// Power emitted per unit surface area (W m⁻²).
    pub fn emission(&self) -> f64 {
        stefan_boltzmann_law(self.temperature.to_kelvin())
    }

    /// Total radiated power (W).
    pub fn luminosity(&self) -> f64 {
        luminosity_from_temperature(self.temperature.to_kelvin(), self.radius.to_m())
    }

    pub fn spectral_radiance(&self, frequency: Frequency, law: SpectralLaw) -> f64 {
        law.radiance(frequency.to_hz(), self.temperature.to_kelvin())
    }

    pub fn monochromatic_luminosity(&self, frequency: Frequency, law: SpectralLaw) -> f64 {
        law.monochromatic_luminosity(
            frequency.to_hz(),
            self.temperature.to_kelvin(),
            self.radius.to_m(),
        )
    }

    /// Bolometric flux (W m⁻²) at `distance` from the centre of the body.
    pub fn flux_at(&self, distance: Length) -> f64 {
        flux_from_luminosity(self.luminosity(), distance.to_m())
    }

    /// Monochromatic flux (W m⁻² Hz⁻¹) at `distance` from the centre of the body.
    pub fn monochromatic_flux_at(
        &self,
        frequency: Frequency,
        distance: Length,
        law: SpectralLaw,
    ) -> f64 {
        flux_from_luminosity(self.monochromatic_luminosity(frequency, law), distance.to_m())
    }
}
