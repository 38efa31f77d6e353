pub mod ellipsoid;
pub mod series;
pub mod transverse_mercator;
