//! Physical constants in SI units.

/// Boltzmann constant (J/K)
///
/// Relates the average kinetic energy of gas particles to the gas temperature.
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Planck constant (J·s)
///
/// Relates the energy of a photon to its frequency.
pub const PLANCK: f64 = 6.62607015e-34;

/// Stefan-Boltzmann constant (W m⁻² K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Speed of light in vacuum (m/s)
pub const LIGHT_SPEED: f64 = 2.99792458e8;

/// Metres in one light year
pub const LIGHT_YEAR: f64 = 9.461e15;

/// One astronomical unit, the mean Earth-Sun distance (m)
pub const AU: f64 = 1.495978707e11;

/// Equatorial radius of the Earth (m)
pub const EARTH_RADIUS: f64 = 6.378136e6;

/// Radius of the Sun (m)
pub const SUN_RADIUS: f64 = 6.957e8;

/// Effective surface temperature of the Sun (K)
pub const SUN_TEMP: f64 = 5777.0;
