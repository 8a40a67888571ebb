//! Spherical-earth conversion between geographic and local planar coordinates

use log::debug;

use super::constants::{DEG_TO_RAD, EARTH_SEMI_MAJOR_AXIS_M};
use super::origin::Origin;
use super::point::{GeographicPoint, PlanarPoint};
use crate::errors::GridResult;

/// Converter between latitude/longitude and easting/northing around an origin
///
/// The earth is treated as a sphere with the WGS84 semi-major axis as its
/// radius, rather than the WGS84 ellipsoid. Longitude differences are scaled
/// by the cosine of the latitude, latitude differences are scaled linearly.
/// Results are only meaningful close to the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeographicConverter {
    origin: Origin,
}

impl GeographicConverter {
    /// Create a converter at the default origin (52.39°, 1.42°)
    pub fn new() -> Self {
        GeographicConverter::default()
    }

    /// Create a converter at the given origin
    pub fn with_origin(latitude: f64, longitude: f64) -> GridResult<Self> {
        let mut converter = GeographicConverter::new();
        converter.set_origin(latitude, longitude)?;
        Ok(converter)
    }

    /// Create a converter at an already validated origin
    pub fn from_origin(origin: Origin) -> Self {
        GeographicConverter { origin }
    }

    /// Get the current origin
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Set the origin of the local grid
    ///
    /// # Arguments
    /// * `latitude` - Origin latitude, must lie in [-90, 90]
    /// * `longitude` - Origin longitude, must lie in [-180, 180]
    ///
    /// # Returns
    /// `OutOfRange` naming the offending axis, in which case the previous origin is kept
    pub fn set_origin(&mut self, latitude: f64, longitude: f64) -> GridResult<()> {
        let origin = Origin::new(latitude, longitude)?;
        debug!("Origin moved from {} to {}", self.origin, origin);
        self.origin = origin;
        Ok(())
    }

    /// Convert latitude/longitude to easting/northing in meters
    pub fn to_planar(&self, latitude: f64, longitude: f64) -> PlanarPoint {
        let easting = (longitude - self.origin.longitude())
            * DEG_TO_RAD
            * EARTH_SEMI_MAJOR_AXIS_M
            * (latitude * DEG_TO_RAD).cos();
        let northing = (latitude - self.origin.latitude()) * DEG_TO_RAD * EARTH_SEMI_MAJOR_AXIS_M;

        PlanarPoint::new(easting, northing)
    }

    /// Convert easting/northing in meters back to latitude/longitude
    ///
    /// Exact inverse of [`to_planar`](Self::to_planar). A northing that lands
    /// on a pole makes the longitude divide by (nearly) zero; the result is
    /// returned as-is, infinite or NaN included.
    pub fn to_geographic(&self, easting: f64, northing: f64) -> GeographicPoint {
        let origin_lat_rad = self.origin.latitude() * DEG_TO_RAD;
        let r_cos_alpha =
            EARTH_SEMI_MAJOR_AXIS_M * (northing / EARTH_SEMI_MAJOR_AXIS_M + origin_lat_rad).cos();

        let longitude =
            (easting + self.origin.longitude() * DEG_TO_RAD * r_cos_alpha) / r_cos_alpha / DEG_TO_RAD;
        let latitude = (northing / EARTH_SEMI_MAJOR_AXIS_M + origin_lat_rad) / DEG_TO_RAD;

        GeographicPoint::new(latitude, longitude)
    }

    /// Convert a geographic point to the local plane
    pub fn geographic_to_planar(&self, point: &GeographicPoint) -> PlanarPoint {
        self.to_planar(point.latitude, point.longitude)
    }

    /// Convert a planar point back to geographic coordinates
    pub fn planar_to_geographic(&self, point: &PlanarPoint) -> GeographicPoint {
        self.to_geographic(point.easting, point.northing)
    }
}
