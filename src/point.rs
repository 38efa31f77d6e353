//! Validated value types on either side of the projection.
//!
//! Both points are immutable; the `with_*` methods return an updated copy and
//! re-validate only the field being changed.

use std::fmt;

use crate::error::UtmError;
use crate::zone::{is_southern_letter, is_zone_letter, MAX_ZONE_NUMBER, MIN_ZONE_NUMBER};

/// Latitude/longitude in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticPoint {
    latitude: f64,
    longitude: f64,
}

impl GeodeticPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, UtmError> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn with_latitude(self, latitude: f64) -> Result<Self, UtmError> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            ..self
        })
    }

    pub fn with_longitude(self, longitude: f64) -> Result<Self, UtmError> {
        Ok(Self {
            longitude: check_longitude(longitude)?,
            ..self
        })
    }
}

impl fmt::Display for GeodeticPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

fn check_latitude(latitude: f64) -> Result<f64, UtmError> {
    UtmError::check_range("latitude", latitude, -90.0, 90.0)
}

fn check_longitude(longitude: f64) -> Result<f64, UtmError> {
    UtmError::check_range("longitude", longitude, -180.0, 180.0)
}

/// A UTM grid position. Easting and northing are in kilometres.
///
/// Easting and northing may be any finite value; only the zone fields are
/// range checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UtmPoint {
    easting: f64,
    northing: f64,
    zone_number: u8,
    zone_letter: char,
}

impl UtmPoint {
    pub fn new(
        easting: f64,
        northing: f64,
        zone_number: u8,
        zone_letter: char,
    ) -> Result<Self, UtmError> {
        Ok(Self {
            easting: UtmError::check_finite("easting", easting)?,
            northing: UtmError::check_finite("northing", northing)?,
            zone_number: check_zone_number(zone_number)?,
            zone_letter: check_zone_letter(zone_letter)?,
        })
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    pub fn zone_number(&self) -> u8 {
        self.zone_number
    }

    pub fn zone_letter(&self) -> char {
        self.zone_letter
    }

    /// True for bands `C`..=`M`, whose northings carry the 10 000 km false
    /// northing.
    pub fn is_southern(&self) -> bool {
        is_southern_letter(self.zone_letter)
    }

    pub fn with_easting(self, easting: f64) -> Result<Self, UtmError> {
        Ok(Self {
            easting: UtmError::check_finite("easting", easting)?,
            ..self
        })
    }

    pub fn with_northing(self, northing: f64) -> Result<Self, UtmError> {
        Ok(Self {
            northing: UtmError::check_finite("northing", northing)?,
            ..self
        })
    }

    pub fn with_zone_number(self, zone_number: u8) -> Result<Self, UtmError> {
        Ok(Self {
            zone_number: check_zone_number(zone_number)?,
            ..self
        })
    }

    pub fn with_zone_letter(self, zone_letter: char) -> Result<Self, UtmError> {
        Ok(Self {
            zone_letter: check_zone_letter(zone_letter)?,
            ..self
        })
    }
}

impl fmt::Display for UtmPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {:.3} {:.3}",
            self.zone_number, self.zone_letter, self.easting, self.northing
        )
    }
}

fn check_zone_number(zone_number: u8) -> Result<u8, UtmError> {
    UtmError::check_range(
        "zone number",
        f64::from(zone_number),
        f64::from(MIN_ZONE_NUMBER),
        f64::from(MAX_ZONE_NUMBER),
    )?;
    Ok(zone_number)
}

fn check_zone_letter(zone_letter: char) -> Result<char, UtmError> {
    if is_zone_letter(zone_letter) {
        Ok(zone_letter)
    } else {
        log::debug!("rejected zone letter {zone_letter:?}");
        Err(UtmError::UnsupportedZone(zone_letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_bounds() {
        assert!(GeodeticPoint::new(90.0, 0.0).is_ok());
        assert!(GeodeticPoint::new(-90.0, 0.0).is_ok());
        assert!(matches!(
            GeodeticPoint::new(90.0001, 0.0),
            Err(UtmError::OutOfRange { name: "latitude", .. })
        ));
        assert!(matches!(
            GeodeticPoint::new(-90.0001, 0.0),
            Err(UtmError::OutOfRange { name: "latitude", .. })
        ));
    }

    #[test]
    fn test_longitude_bounds() {
        assert!(GeodeticPoint::new(0.0, 180.0).is_ok());
        assert!(GeodeticPoint::new(0.0, -180.0).is_ok());
        assert!(matches!(
            GeodeticPoint::new(0.0, 180.0001),
            Err(UtmError::OutOfRange { name: "longitude", .. })
        ));
        assert!(GeodeticPoint::new(0.0, -180.0001).is_err());
        assert!(GeodeticPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_geodetic_with_revalidates() {
        let p = GeodeticPoint::new(10.0, 20.0).unwrap();
        let moved = p.with_latitude(-45.5).unwrap().with_longitude(-120.25).unwrap();
        assert_eq!(moved.latitude(), -45.5);
        assert_eq!(moved.longitude(), -120.25);

        assert!(p.with_latitude(91.0).is_err());
        assert!(p.with_longitude(-181.0).is_err());
        // p itself is unchanged
        assert_eq!(p.latitude(), 10.0);
        assert_eq!(p.longitude(), 20.0);
    }

    #[test]
    fn test_zone_number_bounds() {
        assert!(UtmPoint::new(500.0, 0.0, 1, 'N').is_ok());
        assert!(UtmPoint::new(500.0, 0.0, 60, 'N').is_ok());
        assert!(matches!(
            UtmPoint::new(500.0, 0.0, 0, 'N'),
            Err(UtmError::OutOfRange { name: "zone number", .. })
        ));
        assert!(UtmPoint::new(500.0, 0.0, 61, 'N').is_err());
    }

    #[test]
    fn test_zone_letter_membership() {
        assert!(UtmPoint::new(500.0, 0.0, 31, 'C').is_ok());
        assert!(UtmPoint::new(500.0, 0.0, 31, 'X').is_ok());
        for letter in ['I', 'O', 'A', 'B', 'Y', 'Z'] {
            assert_eq!(
                UtmPoint::new(500.0, 0.0, 31, letter),
                Err(UtmError::UnsupportedZone(letter))
            );
        }
    }

    #[test]
    fn test_utm_with_revalidates() {
        let p = UtmPoint::new(448.0, 5411.0, 31, 'U').unwrap();

        let q = p.with_easting(-1.0e6).unwrap().with_northing(1.0e9).unwrap();
        assert_eq!(q.easting(), -1.0e6);
        assert_eq!(q.northing(), 1.0e9);

        assert_eq!(p.with_zone_number(32).unwrap().zone_number(), 32);
        assert_eq!(p.with_zone_letter('T').unwrap().zone_letter(), 'T');
        assert!(p.with_zone_number(0).is_err());
        assert_eq!(p.with_zone_letter('O'), Err(UtmError::UnsupportedZone('O')));
    }

    #[test]
    fn test_grid_values_must_be_finite() {
        assert!(matches!(
            UtmPoint::new(f64::NAN, 0.0, 31, 'N'),
            Err(UtmError::OutOfRange { name: "easting", .. })
        ));
        assert!(matches!(
            UtmPoint::new(500.0, f64::NEG_INFINITY, 31, 'N'),
            Err(UtmError::OutOfRange { name: "northing", .. })
        ));

        let p = UtmPoint::new(500.0, 0.0, 31, 'N').unwrap();
        assert!(p.with_easting(f64::INFINITY).is_err());
        assert!(p.with_northing(f64::NAN).is_err());
    }

    #[test]
    fn test_is_southern() {
        let north = UtmPoint::new(500.0, 0.0, 31, 'N').unwrap();
        let south = north.with_zone_letter('M').unwrap();
        assert!(!north.is_southern());
        assert!(south.is_southern());
    }

    #[test]
    fn test_display() {
        let g = GeodeticPoint::new(48.8566, 2.3522).unwrap();
        assert_eq!(g.to_string(), "48.856600, 2.352200");

        let u = UtmPoint::new(452.4826, 5411.7172, 31, 'U').unwrap();
        assert_eq!(u.to_string(), "31U 452.483 5411.717");
    }
}
