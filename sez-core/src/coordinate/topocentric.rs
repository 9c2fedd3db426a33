use nalgebra::{Matrix3, RowVector3};

use super::geodetic::{ecef_to_llh, ensure_finite};
use super::types::{EcefPosition, SezVector};
use crate::error::{Result, SezError};

/// ECEF to SEZ rotation for an observer at the given geodetic latitude/longitude.
/// Rows are the South, East and Zenith unit vectors expressed in ECEF.
pub fn sez_rotation(latitude_rad: f64, longitude_rad: f64) -> Matrix3<f64> {
    let (sin_lat, cos_lat) = latitude_rad.sin_cos();
    let (sin_lon, cos_lon) = longitude_rad.sin_cos();

    let south = RowVector3::new(sin_lat * cos_lon, sin_lat * sin_lon, -cos_lat);
    let east = RowVector3::new(-sin_lon, cos_lon, 0.0);
    let zenith = RowVector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat);

    Matrix3::from_rows(&[south, east, zenith])
}

/// Express `target` in the South/East/Zenith frame centered on `observer`
pub fn ecef_to_sez(observer: &EcefPosition, target: &EcefPosition) -> Result<SezVector> {
    let llh = ecef_to_llh(observer)?;
    ensure_finite(target)?;

    let delta = target.to_vector() - observer.to_vector();
    let rotation = sez_rotation(llh.latitude_rad, llh.longitude_rad);

    Ok(SezVector::from(rotation * delta))
}

/// Inverse of [`ecef_to_sez`]: recover the ECEF target from an SEZ offset
pub fn sez_to_ecef(observer: &EcefPosition, sez: &SezVector) -> Result<EcefPosition> {
    let llh = ecef_to_llh(observer)?;
    if !sez.to_vector().iter().all(|c| c.is_finite()) {
        return Err(SezError::InvalidInput(format!(
            "non-finite SEZ offset ({}, {}, {}) km",
            sez.s_km, sez.e_km, sez.z_km
        )));
    }

    // Orthonormal, so the inverse is the transpose
    let rotation = sez_rotation(llh.latitude_rad, llh.longitude_rad);
    let delta = rotation.transpose() * sez.to_vector();

    Ok(EcefPosition::from(observer.to_vector() + delta))
}
