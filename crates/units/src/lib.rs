//! SI quantities, physical constants and unit helpers.

pub mod constants;
pub mod frequency;
pub mod geometry;
pub mod length;
pub mod temperature;


pub use frequency::{wavelength_to_frequency, Frequency};
pub use geometry::surface_area_sphere;
pub use length::{light_years_to_metres, Length};
pub use temperature::Temperature;
