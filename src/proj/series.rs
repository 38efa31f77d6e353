//! Krüger series coefficients, third order in the third flattening `n`.
//!
//! Every term beyond `n³` is dropped. The neglected part is `O(n⁴)`, which on
//! WGS84 amounts to well under a millimetre inside a 6° zone.

use super::ellipsoid::{Ellipsoid, WGS84};

#[derive(Clone, Copy, Debug)]
pub struct KruegerSeries {
    /// Third flattening of the source ellipsoid.
    pub n: f64,
    /// Rectifying radius A = a/(1+n) * (1 + n²/4 + n⁴/64), in km.
    pub a_hat: f64,
    /// Forward coefficients α₁..α₃ (conformal sphere -> ellipsoid plane).
    pub alpha: [f64; 3],
    /// Inverse coefficients β₁..β₃.
    pub beta: [f64; 3],
    /// Conformal -> geodetic latitude coefficients γ₁..γ₃.
    pub gamma: [f64; 3],
}

impl KruegerSeries {
    pub const fn new(ellipsoid: &Ellipsoid) -> Self {
        let n = ellipsoid.n;
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;

        Self {
            n,
            a_hat: ellipsoid.a / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0),
            alpha: [
                n / 2.0 - 2.0 / 3.0 * n2 + 5.0 / 16.0 * n3,
                13.0 / 48.0 * n2 - 3.0 / 5.0 * n3,
                61.0 / 240.0 * n3,
            ],
            beta: [
                n / 2.0 - 2.0 / 3.0 * n2 + 37.0 / 96.0 * n3,
                1.0 / 48.0 * n2 + 1.0 / 15.0 * n3,
                17.0 / 480.0 * n3,
            ],
            gamma: [
                2.0 * n - 2.0 / 3.0 * n2 - 2.0 * n3,
                7.0 / 3.0 * n2 - 8.0 / 5.0 * n3,
                56.0 / 15.0 * n3,
            ],
        }
    }
}

pub const WGS84_SERIES: KruegerSeries = KruegerSeries::new(&WGS84);
