//! Point structures for the two coordinate spaces

use std::fmt;

/// A point on the sphere, in degrees
///
/// Values are never range checked; any f64 passes through the conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeographicPoint {
    /// Create a new geographic point
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeographicPoint { latitude, longitude }
    }

    /// Return the point as a `(latitude, longitude)` tuple
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for GeographicPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        GeographicPoint::new(latitude, longitude)
    }
}

impl fmt::Display for GeographicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat {}°, lon {}°", self.latitude, self.longitude)
    }
}

/// A point in the local plane, in meters east and north of the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPoint {
    /// Meters east of the origin
    pub easting: f64,
    /// Meters north of the origin
    pub northing: f64,
}

impl PlanarPoint {
    /// Create a new planar point
    pub fn new(easting: f64, northing: f64) -> Self {
        PlanarPoint { easting, northing }
    }

    /// Return the point as an `(easting, northing)` tuple
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.easting, self.northing)
    }
}

impl From<(f64, f64)> for PlanarPoint {
    fn from((easting, northing): (f64, f64)) -> Self {
        PlanarPoint::new(easting, northing)
    }
}

impl fmt::Display for PlanarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E {} m, N {} m", self.easting, self.northing)
    }
}
