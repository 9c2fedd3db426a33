use thiserror::Error;

/// Errors surfaced by the ECEF/LLH/SEZ conversions
#[derive(Error, Debug)]
pub enum SezError {
    #[error("Coordinate transform error: {0}")]
    Coordinate(#[from] CoordinateError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Numerical error: {0}")]
    Numerical(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Degenerate position ({x_km}, {y_km}, {z_km}) km: latitude is undefined")]
    DegeneratePosition { x_km: f64, y_km: f64, z_km: f64 },

    #[error("Non-finite position ({x_km}, {y_km}, {z_km}) km")]
    NonFinite { x_km: f64, y_km: f64, z_km: f64 },

    #[error("Latitude iteration did not converge after {0} iterations")]
    NoConvergence(usize),

    #[error("Invalid latitude: {0} rad (must be -pi/2 to pi/2)")]
    InvalidLatitude(f64),
}

pub type Result<T> = std::result::Result<T, SezError>;
