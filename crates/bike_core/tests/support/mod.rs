#![allow(dead_code)]

use bike_core::bike::BikeType;
use bike_core::station::Station;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG so failures reproduce.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// One station operation, as issued by a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    CheckOut {
        bike_type: BikeType,
        allow_ebike_substitution: bool,
    },
    Return(BikeType),
    Reserve(BikeType),
}

impl Op {
    pub fn apply(self, station: &mut Station) -> bool {
        match self {
            Op::CheckOut {
                bike_type,
                allow_ebike_substitution,
            } => station.check_out(bike_type, allow_ebike_substitution),
            Op::Return(bike_type) => station.return_bike(bike_type),
            Op::Reserve(bike_type) => station.reserve_bike(bike_type),
        }
    }
}

pub fn random_bike_type<R: Rng>(rng: &mut R) -> BikeType {
    if rng.gen_bool(0.5) {
        BikeType::Ebike
    } else {
        BikeType::Standard
    }
}

pub fn random_op<R: Rng>(rng: &mut R) -> Op {
    let bike_type = random_bike_type(rng);
    match rng.gen_range(0..3) {
        0 => Op::CheckOut {
            bike_type,
            allow_ebike_substitution: rng.gen_bool(0.5),
        },
        1 => Op::Return(bike_type),
        _ => Op::Reserve(bike_type),
    }
}

/// A valid random starting station (inventory fits in the docks).
pub fn random_station<R: Rng>(rng: &mut R) -> Station {
    let num_docks = rng.gen_range(0..=12);
    let num_sbikes = rng.gen_range(0..=num_docks);
    let num_ebikes = rng.gen_range(0..=num_docks - num_sbikes);
    let res_limit = rng.gen_range(0..=4);
    Station::try_new(num_docks, num_sbikes, num_ebikes, res_limit).expect("valid station")
}
