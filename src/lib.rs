//! Latitude/longitude <-> UTM conversion on WGS84.
//!
//! Easting and northing are in kilometres, angles in decimal degrees.

pub mod convert;
pub mod error;
pub mod point;
pub mod proj;
pub mod zone;
#[cfg(feature = "python")]
mod py;

pub use convert::{geodetic_to_utm, utm_to_geodetic};
pub use error::UtmError;
pub use point::{GeodeticPoint, UtmPoint};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn utm_kruger(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
