use nalgebra::Vector3;
use serde::Serialize;

/// ECEF position (Earth-Centered, Earth-Fixed)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EcefPosition {
    pub x_km: f64,
    pub y_km: f64,
    pub z_km: f64,
}

impl EcefPosition {
    pub fn new(x_km: f64, y_km: f64, z_km: f64) -> Self {
        Self { x_km, y_km, z_km }
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x_km, self.y_km, self.z_km)
    }

    /// Distance from the rotation axis
    pub fn axial_distance_km(&self) -> f64 {
        self.x_km.hypot(self.y_km)
    }

    pub fn is_finite(&self) -> bool {
        self.x_km.is_finite() && self.y_km.is_finite() && self.z_km.is_finite()
    }
}

impl From<Vector3<f64>> for EcefPosition {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Geodetic position on the WGS84 ellipsoid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeodeticPosition {
    pub latitude_rad: f64,  // (-pi/2, pi/2]
    pub longitude_rad: f64, // (-pi, pi]
    pub height_km: f64,     // above ellipsoid
}

impl GeodeticPosition {
    pub fn new(latitude_rad: f64, longitude_rad: f64, height_km: f64) -> Self {
        Self {
            latitude_rad,
            longitude_rad,
            height_km,
        }
    }

    pub fn from_degrees(latitude_deg: f64, longitude_deg: f64, height_km: f64) -> Self {
        Self::new(latitude_deg.to_radians(), longitude_deg.to_radians(), height_km)
    }
}

/// Offset of a target in the observer's South/East/Zenith frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SezVector {
    pub s_km: f64,
    pub e_km: f64,
    pub z_km: f64,
}

impl SezVector {
    pub fn new(s_km: f64, e_km: f64, z_km: f64) -> Self {
        Self { s_km, e_km, z_km }
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.s_km, self.e_km, self.z_km)
    }

    pub fn range_km(&self) -> f64 {
        self.to_vector().norm()
    }

    /// Azimuth (clockwise from North), elevation and range of the target
    pub fn look_angles(&self) -> LookAngles {
        let range_km = self.range_km();
        if range_km == 0.0 {
            return LookAngles {
                azimuth_rad: 0.0,
                elevation_rad: 0.0,
                range_km,
            };
        }

        // North is -S; 0.0 - s keeps an overhead target at azimuth 0 rather than pi
        let north_km = 0.0 - self.s_km;
        let mut azimuth_rad = self.e_km.atan2(north_km);
        if azimuth_rad < 0.0 {
            azimuth_rad += std::f64::consts::TAU;
        }
        let elevation_rad = (self.z_km / range_km).clamp(-1.0, 1.0).asin();

        LookAngles {
            azimuth_rad,
            elevation_rad,
            range_km,
        }
    }
}

impl From<Vector3<f64>> for SezVector {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Pointing of a target as seen from the observer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LookAngles {
    pub azimuth_rad: f64,   // [0, 2pi)
    pub elevation_rad: f64, // [-pi/2, pi/2]
    pub range_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_vector_bridge() {
        let p = EcefPosition::new(1.0, -2.0, 3.0);
        let v = p.to_vector();
        assert_eq!(v, Vector3::new(1.0, -2.0, 3.0));
        assert_eq!(EcefPosition::from(v), p);
    }

    #[test]
    fn test_axial_distance() {
        let p = EcefPosition::new(3.0, 4.0, 100.0);
        assert!((p.axial_distance_km() - 5.0).abs() < 1e-12);

        let tiny = EcefPosition::new(1e-170, 0.0, 1e-170);
        assert_eq!(tiny.axial_distance_km(), 1e-170);

        let huge = EcefPosition::new(3e200, 4e200, 0.0);
        assert!((huge.axial_distance_km() / 5e200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_look_angles_zenith() {
        let look = SezVector::new(0.0, 0.0, 10.0).look_angles();
        assert_eq!(look.azimuth_rad, 0.0);
        assert!((look.elevation_rad - FRAC_PI_2).abs() < 1e-12);
        assert!((look.range_km - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_look_angles_cardinal_directions() {
        // North
        let look = SezVector::new(-1.0, 0.0, 0.0).look_angles();
        assert!(look.azimuth_rad.abs() < 1e-12);
        assert!(look.elevation_rad.abs() < 1e-12);

        // East
        let look = SezVector::new(0.0, 1.0, 0.0).look_angles();
        assert!((look.azimuth_rad - FRAC_PI_2).abs() < 1e-12);

        // South
        let look = SezVector::new(1.0, 0.0, 0.0).look_angles();
        assert!((look.azimuth_rad - PI).abs() < 1e-12);

        // West wraps into [0, 2pi)
        let look = SezVector::new(0.0, -1.0, 0.0).look_angles();
        assert!((look.azimuth_rad - 3.0 * FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_look_angles_elevated_northeast() {
        let look = SezVector::new(-1.0, 1.0, 2.0_f64.sqrt()).look_angles();
        assert!((look.azimuth_rad - FRAC_PI_4).abs() < 1e-12);
        assert!((look.elevation_rad - FRAC_PI_4).abs() < 1e-12);
        assert!((look.range_km - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_look_angles_zero_range() {
        let look = SezVector::new(0.0, 0.0, 0.0).look_angles();
        assert_eq!(look.azimuth_rad, 0.0);
        assert_eq!(look.elevation_rad, 0.0);
        assert_eq!(look.range_km, 0.0);
    }
}
