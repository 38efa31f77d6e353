/// Reference ellipsoid parameters.
///
/// Lengths are in kilometres, the unit used throughout this crate.
#[derive(Clone, Copy, Debug)]
pub struct Ellipsoid {
    /// Equatorial radius (km)
    pub a: f64,
    /// First eccentricity squared: 2f - f^2
    pub e2: f64,
    /// Third flattening: f / (2 - f)
    pub n: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Self {
        Self {
            a,
            e2: 2.0 * f - f * f,
            n: f / (2.0 - f),
        }
    }

    /// First eccentricity, `2√n / (1 + n)`.
    ///
    /// `sqrt` is not const, so this is evaluated on demand.
    pub fn eccentricity(&self) -> f64 {
        self.e2.sqrt()
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378.137, 1.0 / 298.257_223_563);
