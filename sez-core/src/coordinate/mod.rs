//! ECEF, geodetic and topocentric (SEZ) coordinate transformations

pub mod ellipsoid;
mod geodetic;
mod topocentric;
mod types;

pub use geodetic::{ecef_to_llh, llh_to_ecef};
pub use topocentric::{ecef_to_sez, sez_rotation, sez_to_ecef};
pub use types::{EcefPosition, GeodeticPosition, LookAngles, SezVector};
