//! Docking station inventory: bikes, docks, and reservations.
//!
//! A station only tracks counts. Bikes and docks are interchangeable within
//! their kind, so there is no notion of "which" bike or dock is used.
//!
//! Every operation is all-or-nothing: a `false` (or `None`) result leaves all
//! counters exactly as they were.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bike::BikeType;
use crate::error::StationError;
use crate::kiosk::DockingHook;

/// Snapshot of every station counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StationCounts {
    pub num_docks: u32,
    pub num_sbikes: u32,
    pub num_ebikes: u32,
    pub res_limit: u32,
    pub n_sreserved: u32,
    pub n_ereserved: u32,
}

impl StationCounts {
    /// True when all reservation and capacity invariants hold.
    pub fn is_consistent(&self) -> bool {
        self.n_sreserved <= self.num_sbikes
            && self.n_ereserved <= self.num_ebikes
            && self.n_sreserved.saturating_add(self.n_ereserved) <= self.res_limit
            && self.num_sbikes.saturating_add(self.num_ebikes) <= self.num_docks
    }
}

/// One docking station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    num_docks: u32,
    num_sbikes: u32,
    num_ebikes: u32,
    res_limit: u32,
    n_sreserved: u32,
    n_ereserved: u32,
}

impl Station {
    /// Build a station with no reservations.
    ///
    /// The caller is responsible for `num_sbikes + num_ebikes <= num_docks`;
    /// use [`Station::try_new`] to have it checked.
    pub fn new(num_docks: u32, num_sbikes: u32, num_ebikes: u32, res_limit: u32) -> Self {
        Self {
            num_docks,
            num_sbikes,
            num_ebikes,
            res_limit,
            n_sreserved: 0,
            n_ereserved: 0,
        }
    }

    /// Like [`Station::new`], but rejects an initial inventory that overflows the docks.
    pub fn try_new(
        num_docks: u32,
        num_sbikes: u32,
        num_ebikes: u32,
        res_limit: u32,
    ) -> Result<Self, StationError> {
        let bikes = num_sbikes.saturating_add(num_ebikes);
        if bikes > num_docks {
            return Err(StationError::OverCapacity {
                docks: num_docks,
                bikes,
            });
        }
        Ok(Self::new(num_docks, num_sbikes, num_ebikes, res_limit))
    }

    pub fn num_docks(&self) -> u32 {
        self.num_docks
    }

    pub fn num_sbikes(&self) -> u32 {
        self.num_sbikes
    }

    pub fn num_ebikes(&self) -> u32 {
        self.num_ebikes
    }

    pub fn res_limit(&self) -> u32 {
        self.res_limit
    }

    pub fn n_sreserved(&self) -> u32 {
        self.n_sreserved
    }

    pub fn n_ereserved(&self) -> u32 {
        self.n_ereserved
    }

    /// Docked bikes of `bike_type`.
    pub fn docked(&self, bike_type: BikeType) -> u32 {
        match bike_type {
            BikeType::Standard => self.num_sbikes,
            BikeType::Ebike => self.num_ebikes,
        }
    }

    /// Reserved bikes of `bike_type`.
    pub fn reserved(&self, bike_type: BikeType) -> u32 {
        match bike_type {
            BikeType::Standard => self.n_sreserved,
            BikeType::Ebike => self.n_ereserved,
        }
    }

    /// Docked bikes of `bike_type` not held under a reservation.
    pub fn available(&self, bike_type: BikeType) -> u32 {
        self.docked(bike_type).saturating_sub(self.reserved(bike_type))
    }

    pub fn occupied_docks(&self) -> u32 {
        self.num_sbikes.saturating_add(self.num_ebikes)
    }

    pub fn free_docks(&self) -> u32 {
        self.num_docks.saturating_sub(self.occupied_docks())
    }

    pub fn is_full(&self) -> bool {
        self.occupied_docks() >= self.num_docks
    }

    pub fn total_reserved(&self) -> u32 {
        self.n_sreserved.saturating_add(self.n_ereserved)
    }

    pub fn counts(&self) -> StationCounts {
        StationCounts {
            num_docks: self.num_docks,
            num_sbikes: self.num_sbikes,
            num_ebikes: self.num_ebikes,
            res_limit: self.res_limit,
            n_sreserved: self.n_sreserved,
            n_ereserved: self.n_ereserved,
        }
    }

    /// Check out one bike for a rider. Returns `true` if a bike was handed out.
    ///
    /// With `allow_ebike_substitution`, a standard request that cannot be served
    /// falls back to an unreserved ebike.
    pub fn check_out(&mut self, bike_type: BikeType, allow_ebike_substitution: bool) -> bool {
        self.take_bike(bike_type, allow_ebike_substitution).is_some()
    }

    /// Same as [`Station::check_out`], reporting which kind was handed out.
    ///
    /// Reservation counters are left untouched: checking out a reserved bike
    /// does not release its reservation.
    pub fn take_bike(
        &mut self,
        bike_type: BikeType,
        allow_ebike_substitution: bool,
    ) -> Option<BikeType> {
        match bike_type {
            BikeType::Standard => {
                if self.num_sbikes > 0 && self.num_sbikes > self.n_sreserved {
                    self.num_sbikes -= 1;
                    Some(BikeType::Standard)
                } else if allow_ebike_substitution && self.take_unreserved_ebike() {
                    Some(BikeType::Ebike)
                } else {
                    None
                }
            }
            BikeType::Ebike => self.take_unreserved_ebike().then_some(BikeType::Ebike),
        }
    }

    fn take_unreserved_ebike(&mut self) -> bool {
        if self.num_ebikes > 0 && self.num_ebikes > self.n_ereserved {
            self.num_ebikes -= 1;
            true
        } else {
            false
        }
    }

    /// Dock one bike. Returns `false` when every dock is occupied.
    pub fn return_bike(&mut self, bike_type: BikeType) -> bool {
        if self.occupied_docks() >= self.num_docks {
            return false;
        }
        match bike_type {
            BikeType::Standard => self.num_sbikes += 1,
            BikeType::Ebike => self.num_ebikes += 1,
        }
        true
    }

    /// Dock one bike and, if that succeeded, notify `hook`.
    ///
    /// The hook observes the post-return counts and has no say in the result.
    pub fn return_bike_with<H>(&mut self, bike_type: BikeType, hook: &mut H) -> bool
    where
        H: DockingHook + ?Sized,
    {
        if !self.return_bike(bike_type) {
            return false;
        }
        let counts = self.counts();
        hook.on_docked(bike_type, &counts);
        true
    }

    /// Hold one docked bike for a later check-out.
    ///
    /// Fails once `res_limit` holds are outstanding, regardless of kind. There
    /// is no way to release a hold.
    pub fn reserve_bike(&mut self, bike_type: BikeType) -> bool {
        if self.n_sreserved + self.n_ereserved >= self.res_limit {
            return false;
        }
        match bike_type {
            BikeType::Standard => {
                if self.num_sbikes > 0 && self.n_sreserved < self.num_sbikes {
                    self.n_sreserved += 1;
                    true
                } else {
                    false
                }
            }
            BikeType::Ebike => {
                if self.num_ebikes > 0 && self.n_ereserved < self.num_ebikes {
                    self.n_ereserved += 1;
                    true
                } else {
                    false
                }
            }
        }
    }
}

impl From<&Station> for StationCounts {
    fn from(station: &Station) -> Self {
        station.counts()
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Station: ({}, {}) SBikes, ({}, {}) EBikes",
            self.num_sbikes, self.n_sreserved, self.num_ebikes, self.n_ereserved
        )
    }
}
