//! Origin of the local grid and its range validation

use std::fmt;

use super::constants::{
    DEFAULT_ORIGIN_LATITUDE_DEG, DEFAULT_ORIGIN_LONGITUDE_DEG, LATITUDE_BOUNDS_DEG,
    LONGITUDE_BOUNDS_DEG,
};
use crate::errors::{GridError, GridResult};

/// Identifies one of the two origin arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Latitude, bounded to [-90, 90]
    Latitude,
    /// Longitude, bounded to [-180, 180]
    Longitude,
}

impl Axis {
    /// Get the inclusive bounds for this axis in degrees
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Axis::Latitude => LATITUDE_BOUNDS_DEG,
            Axis::Longitude => LONGITUDE_BOUNDS_DEG,
        }
    }

    /// Check a value against this axis' bounds
    ///
    /// NaN is never in range.
    pub fn validate(&self, value: f64) -> GridResult<f64> {
        let (min, max) = self.bounds();
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(GridError::OutOfRange { axis: *self, value })
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// South west corner of the local grid, mapped to planar (0, 0)
///
/// An `Origin` can only be built through [`Origin::new`] or [`Origin::default`],
/// so its fields always lie within their bounds.
///
/// A longitude of exactly ±180° is accepted, but points across the antimeridian
/// from such an origin come out on the far side of the grid. This is a known
/// limitation of the local approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    latitude: f64,
    longitude: f64,
}

impl Origin {
    /// Create a validated origin
    ///
    /// Latitude is checked before longitude, so when both are out of range
    /// the error names the latitude.
    pub fn new(latitude: f64, longitude: f64) -> GridResult<Self> {
        let latitude = Axis::Latitude.validate(latitude)?;
        let longitude = Axis::Longitude.validate(longitude)?;
        Ok(Origin { latitude, longitude })
    }

    /// Origin latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Origin longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Default for Origin {
    fn default() -> Self {
        Origin {
            latitude: DEFAULT_ORIGIN_LATITUDE_DEG,
            longitude: DEFAULT_ORIGIN_LONGITUDE_DEG,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}°, {}°)", self.latitude, self.longitude)
    }
}
