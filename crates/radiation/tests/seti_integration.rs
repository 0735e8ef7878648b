//! Integration tests for a radio search toward a nearby star.
//!
//! These tests chain the unit helpers, blackbody laws and background
//! formulas the way a caller would.

use approx::assert_relative_eq;
use units::{light_years_to_metres, Frequency, Length, Temperature};

use radiation::checked::try_frequency_minimum;
use radiation::{
    flux_sunlike, frequency_minimum, power_from_galaxy, power_from_star, Blackbody, SearchConfig,
    SpectralLaw,
};

const PROXIMA_LY: f64 = 4.24;

#[test]
fn star_outshines_galaxy_above_minimum_frequency() {
    let config = SearchConfig::default();
    let distance = light_years_to_metres(PROXIMA_LY);

    let f_min = config.frequency_minimum(PROXIMA_LY);
    assert!(f_min > 1e9 && f_min < 1e11, "got {f_min:e} Hz");

    // Above the minimum frequency the stellar flux dominates the background
    let star = flux_sunlike(f_min, distance);
    let galaxy = config.flux_from_galaxy(f_min);
    assert!(star > galaxy, "star {star:e} vs galaxy {galaxy:e}");

    // A decade lower the galactic background wins
    let star = flux_sunlike(f_min / 10.0, distance);
    let galaxy = config.flux_from_galaxy(f_min / 10.0);
    assert!(galaxy > star, "star {star:e} vs galaxy {galaxy:e}");
}

#[test]
fn larger_dish_lowers_minimum_frequency() {
    let small = SearchConfig::new(25.0, 1e4);
    let large = SearchConfig::new(305.0, 1e4);

    assert!(large.frequency_minimum(PROXIMA_LY) < small.frequency_minimum(PROXIMA_LY));
    assert_relative_eq!(
        small.frequency_minimum(PROXIMA_LY) / large.frequency_minimum(PROXIMA_LY),
        (305.0f64 / 25.0).powf(0.4),
        max_relative = 1e-12
    );

    // Background power per beam does not depend on the dish
    let nu = 1.42e9;
    assert_relative_eq!(
        small.power_from_galaxy(nu),
        large.power_from_galaxy(nu),
        max_relative = 1e-12
    );
}

#[test]
fn config_from_json_drives_search() {
    let config: SearchConfig = serde_json::from_str(r#"{"diameterDetector": 64.0}"#).unwrap();

    assert_eq!(
        config.frequency_minimum(PROXIMA_LY),
        frequency_minimum(PROXIMA_LY, 64.0, None)
    );
    assert_eq!(config.power_from_galaxy(5e9), power_from_galaxy(5e9, 64.0));
    assert_eq!(
        try_frequency_minimum(PROXIMA_LY, config.diameter_detector, Some(config.constant)),
        Ok(config.frequency_minimum(PROXIMA_LY))
    );
}

#[test]
fn thermal_radio_power_from_proxima() {
    // Proxima Centauri: ~3042 K, 0.154 R☉
    let proxima = Blackbody::new(
        Temperature::from_kelvin(3042.0),
        Length::from_solar_radii(0.154),
    );
    let distance = Length::from_light_years(PROXIMA_LY);
    let nu = Frequency::from_ghz(1.42);

    let planck = proxima.monochromatic_flux_at(nu, distance, SpectralLaw::Planck);
    let rayleigh_jeans = proxima.monochromatic_flux_at(nu, distance, SpectralLaw::RayleighJeans);
    assert!(planck > 0.0 && planck.is_finite());
    assert_relative_eq!(planck, rayleigh_jeans, max_relative = 1e-4);

    // Collected by a 100 m dish, the thermal photosphere is far below the
    // galactic background at the same frequency
    let collected = power_from_star(planck, 100.0);
    assert!(collected < power_from_galaxy(nu.to_hz(), 100.0));
}

#[test]
fn sun_bolometric_flux_at_proxima() {
    let sun = Blackbody::sun();
    let at_earth = sun.flux_at(Length::from_au(1.0));
    let at_proxima = sun.flux_at(Length::from_light_years(PROXIMA_LY));

    // Inverse square over the AU to light-year ratio
    let ratio = Length::from_light_years(PROXIMA_LY) / Length::from_au(1.0);
    assert_relative_eq!(at_earth / at_proxima, ratio * ratio, max_relative = 1e-10);
}
