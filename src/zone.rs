//! UTM zone bookkeeping: latitude bands, longitude zones, central meridians.

use crate::error::UtmError;

/// Latitude band letters, 8° each from 80°S.
///
/// `X` appears twice so that the 20th band index (latitudes from 80°N up
/// to and including 84°N) still lands on `X`.
pub const ZONE_LETTERS: &[u8; 21] = b"CDEFGHJKLMNPQRSTUVWXX";

/// Southernmost latitude covered by a UTM band.
pub const MIN_BAND_LATITUDE: f64 = -80.0;
/// Northernmost latitude covered by a UTM band.
pub const MAX_BAND_LATITUDE: f64 = 84.0;

pub const MIN_ZONE_NUMBER: u8 = 1;
pub const MAX_ZONE_NUMBER: u8 = 60;

/// Latitude band letter for `latitude` in degrees.
///
/// Latitudes below 80°S or above 84°N belong to the polar UPS grids and are
/// rejected with [`UtmError::UnsupportedRegion`].
pub fn zone_letter_of(latitude: f64) -> Result<char, UtmError> {
    if !(MIN_BAND_LATITUDE..=MAX_BAND_LATITUDE).contains(&latitude) {
        log::debug!("latitude {latitude} is outside the UTM latitude bands");
        return Err(UtmError::UnsupportedRegion(latitude));
    }

    let index = ((latitude - MIN_BAND_LATITUDE) / 8.0).floor() as usize;
    Ok(char::from(ZONE_LETTERS[index]))
}

/// Zone number (1..=60) for `longitude` in degrees.
///
/// Expects a validated longitude in [-180, 180], as held by
/// [`GeodeticPoint`](crate::point::GeodeticPoint). 180° is the east edge of
/// zone 60 and stays there rather than opening a 61st zone. Anything outside
/// the domain is clamped to zone 1 or 60 (NaN gives zone 1), never rejected.
pub fn zone_number_of(longitude: f64) -> u8 {
    let zone = (((longitude + 180.0) / 6.0).floor() as u8).saturating_add(1);
    zone.clamp(MIN_ZONE_NUMBER, MAX_ZONE_NUMBER)
}

/// Central meridian of `zone_number`, in degrees.
pub fn central_longitude_of(zone_number: u8) -> f64 {
    (f64::from(zone_number) - 1.0) * 6.0 - 180.0 + 3.0
}

/// Whether `letter` is one of the UTM latitude band letters.
pub fn is_zone_letter(letter: char) -> bool {
    letter.is_ascii() && ZONE_LETTERS.contains(&(letter as u8))
}

/// Bands `C` through `M` lie south of the equator.
pub fn is_southern_letter(letter: char) -> bool {
    letter <= 'M'
}
