//! PyO3 bindings for the two conversions.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::UtmError;

impl From<UtmError> for PyErr {
    fn from(err: UtmError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(geodetic_to_utm, m)?)?;
    m.add_function(wrap_pyfunction!(utm_to_geodetic, m)?)?;
    Ok(())
}

/// Convert latitude/longitude in degrees to UTM.
///
/// Returns:
///     Tuple of (easting_km, northing_km, zone_number, zone_letter).
#[pyfunction]
#[pyo3(signature = (latitude, longitude))]
fn geodetic_to_utm(latitude: f64, longitude: f64) -> PyResult<(f64, f64, u8, char)> {
    let utm = crate::convert::geodetic_to_utm(latitude, longitude)?;
    Ok((
        utm.easting(),
        utm.northing(),
        utm.zone_number(),
        utm.zone_letter(),
    ))
}

/// Convert a UTM position (kilometres) back to latitude/longitude.
///
/// Returns:
///     Tuple of (latitude, longitude) in degrees.
#[pyfunction]
#[pyo3(signature = (easting, northing, zone_number, zone_letter))]
fn utm_to_geodetic(
    easting: f64,
    northing: f64,
    zone_number: u8,
    zone_letter: char,
) -> PyResult<(f64, f64)> {
    let point = crate::convert::utm_to_geodetic(easting, northing, zone_number, zone_letter)?;
    Ok((point.latitude(), point.longitude()))
}
