//! Transverse Mercator projection — Krüger n-series, 3rd order.
//!
//! Forward uses the conformal-latitude tangent in closed form; inverse goes
//! back through the conformal latitude and a γ series, so neither direction
//! iterates. Lengths are kilometres. This is the projection underlying all
//! UTM zones.

use crate::proj::ellipsoid::{Ellipsoid, WGS84};
use crate::proj::series::{KruegerSeries, WGS84_SERIES};
use crate::zone::central_longitude_of;

/// Central scale factor.
pub const K0: f64 = 0.9996;
/// False easting (km).
pub const FALSE_EASTING: f64 = 500.0;
/// False northing applied in the southern hemisphere (km).
pub const FALSE_NORTHING: f64 = 10_000.0;

pub struct TransverseMercator {
    ellipsoid: Ellipsoid,
    series: KruegerSeries,
    lon0: f64,
    k0: f64,
    false_easting: f64,
    // First eccentricity, 2√n / (1 + n)
    e: f64,
}

impl TransverseMercator {
    /// `series` must have been built from `ellipsoid`.
    pub fn new(
        ellipsoid: Ellipsoid,
        series: KruegerSeries,
        lon0: f64,
        k0: f64,
        false_easting: f64,
    ) -> Self {
        Self {
            ellipsoid,
            series,
            lon0,
            k0,
            false_easting,
            e: ellipsoid.eccentricity(),
        }
    }

    /// Create a Transverse Mercator for a UTM zone on WGS84.
    pub fn utm_zone(zone: u8) -> Self {
        let lon0 = central_longitude_of(zone).to_radians();
        Self::new(WGS84, WGS84_SERIES, lon0, K0, FALSE_EASTING)
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Central meridian in radians.
    pub fn lon0(&self) -> f64 {
        self.lon0
    }

    /// Forward: (lon_rad, lat_rad) -> (easting, northing) in km.
    ///
    /// Northing is measured from the equator; no false northing is applied.
    pub fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        let dlam = lon - self.lon0;
        let sin_lat = lat.sin();

        // Tangent of the conformal latitude
        let t = (sin_lat.atanh() - self.e * (self.e * sin_lat).atanh()).sinh();

        let xi_prime = t.atan2(dlam.cos());
        let eta_prime = (dlam.sin() / (1.0 + t * t).sqrt()).atanh();

        // Apply α series (forward)
        let mut xi = xi_prime;
        let mut eta = eta_prime;
        for (j, &a) in self.series.alpha.iter().enumerate() {
            let k = 2.0 * (j as f64 + 1.0);
            xi += a * (k * xi_prime).sin() * (k * eta_prime).cosh();
            eta += a * (k * xi_prime).cos() * (k * eta_prime).sinh();
        }

        let scale = self.k0 * self.series.a_hat;
        (self.false_easting + scale * eta, scale * xi)
    }

    /// Inverse: (easting, northing) in km -> (lon_rad, lat_rad).
    ///
    /// `y` must already have any false northing removed.
    pub fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let scale = self.k0 * self.series.a_hat;
        let xi = y / scale;
        let eta = (x - self.false_easting) / scale;

        // Apply β series (inverse)
        let mut xi_prime = xi;
        let mut eta_prime = eta;
        for (j, &b) in self.series.beta.iter().enumerate() {
            let k = 2.0 * (j as f64 + 1.0);
            xi_prime -= b * (k * xi).sin() * (k * eta).cosh();
            eta_prime -= b * (k * xi).cos() * (k * eta).sinh();
        }

        // Conformal latitude
        let chi = (xi_prime.sin() / eta_prime.cosh()).asin();

        let mut lat = chi;
        for (j, &g) in self.series.gamma.iter().enumerate() {
            let k = 2.0 * (j as f64 + 1.0);
            lat += g * (k * chi).sin();
        }

        let lon = self.lon0 + eta_prime.sinh().atan2(xi_prime.cos());

        (lon, lat)
    }
}
