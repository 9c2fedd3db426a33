pub mod coordinate;
pub mod error;

pub use coordinate::{
    ecef_to_llh, ecef_to_sez, llh_to_ecef, sez_rotation, sez_to_ecef, EcefPosition,
    GeodeticPosition, LookAngles, SezVector,
};
pub use error::{CoordinateError, Result, SezError};
