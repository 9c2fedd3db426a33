//! WGS84 reference ellipsoid constants

/// Equatorial radius (km)
pub const R_E_KM: f64 = 6378.137;

/// First eccentricity
pub const E_E: f64 = 0.081819221456;

/// First eccentricity squared
pub const E_E2: f64 = E_E * E_E;

/// Polar radius (km), R_E_KM * sqrt(1 - E_E^2)
pub const POLAR_RADIUS_KM: f64 = 6356.752298215718;

/// Latitude iteration stops once successive estimates differ by no more than this (rad)
pub const LATITUDE_TOLERANCE_RAD: f64 = 1e-7;

pub const MAX_LATITUDE_ITERATIONS: usize = 100;

/// Prime vertical radius of curvature (C_E) at a geodetic latitude
pub fn prime_vertical_radius(latitude_rad: f64) -> f64 {
    let sin_lat = latitude_rad.sin();
    R_E_KM / (1.0 - E_E2 * sin_lat * sin_lat).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_polar_radius_matches_eccentricity() {
        let expected = R_E_KM * (1.0 - E_E2).sqrt();
        assert!((POLAR_RADIUS_KM - expected).abs() < 1e-9);
    }

    #[test]
    fn test_prime_vertical_radius_equator() {
        assert!((prime_vertical_radius(0.0) - R_E_KM).abs() < 1e-12);
    }

    #[test]
    fn test_prime_vertical_radius_pole() {
        // At the pole C_E = a^2 / b
        let expected = R_E_KM / (1.0 - E_E2).sqrt();
        assert!((prime_vertical_radius(FRAC_PI_2) - expected).abs() < 1e-9);
        assert!((prime_vertical_radius(-FRAC_PI_2) - expected).abs() < 1e-9);
    }
}
