//! Thread-safe station handle.
//!
//! Each call holds the station lock for exactly one operation, so concurrent
//! callers see the same all-or-nothing behavior as the single-threaded API.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::bike::BikeType;
use crate::station::{Station, StationCounts};

#[derive(Debug, Clone)]
pub struct SharedStation {
    inner: Arc<Mutex<Station>>,
}

impl SharedStation {
    pub fn new(station: Station) -> Self {
        Self {
            inner: Arc::new(Mutex::new(station)),
        }
    }

    // Station operations never panic while mutating, so a poisoned lock still
    // guards consistent counters.
    fn lock(&self) -> MutexGuard<'_, Station> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn check_out(&self, bike_type: BikeType, allow_ebike_substitution: bool) -> bool {
        self.lock().check_out(bike_type, allow_ebike_substitution)
    }

    pub fn take_bike(&self, bike_type: BikeType, allow_ebike_substitution: bool) -> Option<BikeType> {
        self.lock().take_bike(bike_type, allow_ebike_substitution)
    }

    pub fn return_bike(&self, bike_type: BikeType) -> bool {
        self.lock().return_bike(bike_type)
    }

    pub fn reserve_bike(&self, bike_type: BikeType) -> bool {
        self.lock().reserve_bike(bike_type)
    }

    pub fn counts(&self) -> StationCounts {
        self.lock().counts()
    }

    /// Copy of the current station state.
    pub fn snapshot(&self) -> Station {
        self.lock().clone()
    }
}

impl From<Station> for SharedStation {
    fn from(station: Station) -> Self {
        Self::new(station)
    }
}
