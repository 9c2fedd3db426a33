use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use tracing::{debug, trace};

use super::ellipsoid::{
    prime_vertical_radius, E_E2, LATITUDE_TOLERANCE_RAD, MAX_LATITUDE_ITERATIONS,
    POLAR_RADIUS_KM,
};
use super::types::{EcefPosition, GeodeticPosition};
use crate::error::{CoordinateError, Result, SezError};

/// Outcome of the fixed-point latitude iteration
#[derive(Debug, Clone, Copy)]
struct LatitudeSolution {
    latitude_rad: f64,
    /// C_E from the final iteration
    c_e_km: f64,
    iterations: usize,
}

/// Convert ECEF to geodetic latitude, longitude and height above the ellipsoid
///
/// Positions on the polar axis (x = y = 0) use the closed form latitude = ±pi/2
/// and height = |z| - polar radius. The Earth's center has no latitude and is
/// rejected.
pub fn ecef_to_llh(ecef: &EcefPosition) -> Result<GeodeticPosition> {
    ensure_finite(ecef)?;

    let longitude_rad = normalize_longitude(ecef.y_km.atan2(ecef.x_km));
    let r_lon_km = ecef.axial_distance_km();

    if r_lon_km == 0.0 {
        if ecef.z_km == 0.0 {
            return Err(CoordinateError::DegeneratePosition {
                x_km: ecef.x_km,
                y_km: ecef.y_km,
                z_km: ecef.z_km,
            }
            .into());
        }

        debug!(z_km = ecef.z_km, "position on polar axis, using closed form");
        return Ok(GeodeticPosition {
            latitude_rad: FRAC_PI_2.copysign(ecef.z_km),
            longitude_rad,
            height_km: ecef.z_km.abs() - POLAR_RADIUS_KM,
        });
    }

    // Geocentric latitude as the starting estimate
    let radius_km = r_lon_km.hypot(ecef.z_km);
    let geocentric_rad = (ecef.z_km / radius_km).asin();

    let solution = solve_latitude(r_lon_km, ecef.z_km, geocentric_rad)?;
    trace!(
        iterations = solution.iterations,
        latitude_rad = solution.latitude_rad,
        "latitude converged"
    );

    // r/cos(lat) loses all precision near the poles; use the z form there
    let height_km = if solution.latitude_rad.abs() > FRAC_PI_4 {
        ecef.z_km / solution.latitude_rad.sin() - solution.c_e_km * (1.0 - E_E2)
    } else {
        r_lon_km / solution.latitude_rad.cos() - solution.c_e_km
    };
    if !height_km.is_finite() || !solution.latitude_rad.is_finite() {
        return Err(SezError::Numerical(format!(
            "geodetic solution is not finite for ({}, {}, {}) km",
            ecef.x_km, ecef.y_km, ecef.z_km
        )));
    }

    Ok(GeodeticPosition {
        latitude_rad: solution.latitude_rad,
        longitude_rad,
        height_km,
    })
}

/// Reject positions with a NaN or infinite component
pub(crate) fn ensure_finite(ecef: &EcefPosition) -> Result<()> {
    if ecef.is_finite() {
        Ok(())
    } else {
        Err(CoordinateError::NonFinite {
            x_km: ecef.x_km,
            y_km: ecef.y_km,
            z_km: ecef.z_km,
        }
        .into())
    }
}

/// Convert geodetic latitude, longitude and height to ECEF
pub fn llh_to_ecef(llh: &GeodeticPosition) -> Result<EcefPosition> {
    if !(llh.latitude_rad.is_finite() && llh.longitude_rad.is_finite() && llh.height_km.is_finite())
    {
        return Err(SezError::InvalidInput(format!(
            "non-finite geodetic position ({}, {}, {})",
            llh.latitude_rad, llh.longitude_rad, llh.height_km
        )));
    }
    if llh.latitude_rad.abs() > FRAC_PI_2 {
        return Err(CoordinateError::InvalidLatitude(llh.latitude_rad).into());
    }

    let (sin_lat, cos_lat) = llh.latitude_rad.sin_cos();
    let (sin_lon, cos_lon) = llh.longitude_rad.sin_cos();
    let c_e = prime_vertical_radius(llh.latitude_rad);

    Ok(EcefPosition {
        x_km: (c_e + llh.height_km) * cos_lat * cos_lon,
        y_km: (c_e + llh.height_km) * cos_lat * sin_lon,
        z_km: (c_e * (1.0 - E_E2) + llh.height_km) * sin_lat,
    })
}

/// Fixed-point iteration on geodetic latitude. The body always runs once
/// before the convergence test.
fn solve_latitude(r_lon_km: f64, z_km: f64, initial_rad: f64) -> Result<LatitudeSolution> {
    let mut latitude_rad = initial_rad;
    let mut iterations = 0;

    loop {
        let c_e_km = prime_vertical_radius(latitude_rad);
        let previous_rad = latitude_rad;
        latitude_rad = ((z_km + c_e_km * E_E2 * previous_rad.sin()) / r_lon_km).atan();
        iterations += 1;

        if (latitude_rad - previous_rad).abs() <= LATITUDE_TOLERANCE_RAD {
            return Ok(LatitudeSolution {
                latitude_rad,
                c_e_km,
                iterations,
            });
        }

        if iterations >= MAX_LATITUDE_ITERATIONS {
            return Err(CoordinateError::NoConvergence(iterations).into());
        }
    }
}

/// Map atan2 output into (-pi, pi]
fn normalize_longitude(longitude_rad: f64) -> f64 {
    if longitude_rad <= -PI {
        longitude_rad + TAU
    } else {
        longitude_rad
    }
}
