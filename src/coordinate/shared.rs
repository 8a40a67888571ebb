//! Converter shared between threads
//!
//! Origin updates happen under a write lock and conversions run on a copied
//! snapshot, so no reader ever sees half of an origin update.

use std::sync::{Arc, RwLock};

use log::debug;

use super::converter::GeographicConverter;
use super::origin::Origin;
use super::point::{GeographicPoint, PlanarPoint};
use crate::errors::{GridError, GridResult};

/// Thread-safe handle to a converter; clones share the same origin
#[derive(Debug, Clone, Default)]
pub struct SharedConverter {
    inner: Arc<RwLock<GeographicConverter>>,
}

impl SharedConverter {
    /// Wrap a converter for sharing
    pub fn new(converter: GeographicConverter) -> Self {
        SharedConverter {
            inner: Arc::new(RwLock::new(converter)),
        }
    }

    /// Copy of the converter as it is right now
    ///
    /// Use the snapshot for a group of conversions that must agree on one origin.
    pub fn snapshot(&self) -> GridResult<GeographicConverter> {
        let guard = self.inner.read().map_err(|_| GridError::LockPoisoned)?;
        Ok(*guard)
    }

    /// Current origin
    pub fn origin(&self) -> GridResult<Origin> {
        Ok(self.snapshot()?.origin())
    }

    /// Validate and set a new origin for every holder of this handle
    ///
    /// # Returns
    /// The origin installed by this call, read under the same write lock
    pub fn set_origin(&self, latitude: f64, longitude: f64) -> GridResult<Origin> {
        let mut guard = self.inner.write().map_err(|_| GridError::LockPoisoned)?;
        guard.set_origin(latitude, longitude)?;
        let origin = guard.origin();
        debug!("Shared origin is now {}", origin);
        Ok(origin)
    }

    /// Convert latitude/longitude using the current origin
    pub fn to_planar(&self, latitude: f64, longitude: f64) -> GridResult<PlanarPoint> {
        Ok(self.snapshot()?.to_planar(latitude, longitude))
    }

    /// Convert easting/northing using the current origin
    pub fn to_geographic(&self, easting: f64, northing: f64) -> GridResult<GeographicPoint> {
        Ok(self.snapshot()?.to_geographic(easting, northing))
    }
}

impl From<GeographicConverter> for SharedConverter {
    fn from(converter: GeographicConverter) -> Self {
        SharedConverter::new(converter)
    }
}
