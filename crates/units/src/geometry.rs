use std::f64::consts::PI;

/// Surface area of a sphere, 4πr².
///
/// The radius is expected to be non-negative; the formula itself accepts any
/// value and simply squares it.
///
/// # Examples
/// ```
/// use units::geometry::surface_area_sphere;
///
/// assert_eq!(surface_area_sphere(0.0), 0.0);
/// assert!((surface_area_sphere(1.0) - 4.0 * std::f64::consts::PI).abs() < 1e-12);
/// ```
pub fn surface_area_sphere(radius: f64) -> f64 {
    4.0 * PI * radius.powi(2)
}
