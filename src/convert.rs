//! Geodetic <-> UTM conversion.
//!
//! The zone is always derived from the input: forward picks the zone number
//! and band letter containing the point, inverse projects relative to the
//! zone the UTM point names. Points near a zone edge are never re-expressed
//! in a neighbouring zone.

use crate::error::UtmError;
use crate::point::{GeodeticPoint, UtmPoint};
use crate::proj::transverse_mercator::{TransverseMercator, FALSE_NORTHING};
use crate::zone::{is_southern_letter, zone_letter_of, zone_number_of};

/// Project a latitude/longitude in degrees onto the UTM grid.
pub fn geodetic_to_utm(latitude: f64, longitude: f64) -> Result<UtmPoint, UtmError> {
    GeodeticPoint::new(latitude, longitude)?.to_utm()
}

/// Recover latitude/longitude in degrees from a UTM position in kilometres.
pub fn utm_to_geodetic(
    easting: f64,
    northing: f64,
    zone_number: u8,
    zone_letter: char,
) -> Result<GeodeticPoint, UtmError> {
    UtmPoint::new(easting, northing, zone_number, zone_letter)?.to_geodetic()
}

impl GeodeticPoint {
    /// Fails with [`UtmError::UnsupportedRegion`] poleward of 80°S / 84°N.
    pub fn to_utm(&self) -> Result<UtmPoint, UtmError> {
        let zone_number = zone_number_of(self.longitude());
        let zone_letter = zone_letter_of(self.latitude())?;

        let tm = TransverseMercator::utm_zone(zone_number);
        let (easting, mut northing) =
            tm.forward(self.longitude().to_radians(), self.latitude().to_radians());
        // Same rule as the inverse: the band letter decides the hemisphere.
        // Latitudes a rounding error below the equator still fall in band N.
        if is_southern_letter(zone_letter) {
            northing += FALSE_NORTHING;
        }

        let utm = UtmPoint::new(easting, northing, zone_number, zone_letter)?;
        log::trace!("{self} -> {utm}");
        Ok(utm)
    }
}

impl UtmPoint {
    /// The hemisphere is taken from the band letter, so a southern point must
    /// carry a southern letter for its false northing to be removed.
    pub fn to_geodetic(&self) -> Result<GeodeticPoint, UtmError> {
        let equatorial_offset = if self.is_southern() {
            FALSE_NORTHING
        } else {
            0.0
        };

        let tm = TransverseMercator::utm_zone(self.zone_number());
        let (lon, lat) = tm.inverse(self.easting(), self.northing() - equatorial_offset);

        let geodetic = GeodeticPoint::new(lat.to_degrees(), lon.to_degrees())?;
        log::trace!("{self} -> {geodetic}");
        Ok(geodetic)
    }
}
