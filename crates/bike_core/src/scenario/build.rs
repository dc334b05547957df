use rand::Rng;

use crate::bike::BikeType;
use crate::error::ScenarioError;
use crate::ride::StationId;
use crate::scenario::params::ScenarioParams;
use crate::station::Station;

/// Build one [`Station`] per configured entry, checking dock capacity.
pub fn build_stations(params: &ScenarioParams) -> Result<Vec<Station>, ScenarioError> {
    params.validate()?;
    params
        .stations
        .iter()
        .enumerate()
        .map(|(index, config)| {
            Station::try_new(
                config.num_docks,
                config.num_sbikes,
                config.num_ebikes,
                config.res_limit,
            )
            .map_err(|source| ScenarioError::Station { index, source })
        })
        .collect()
}

/// Pick the requested bike kind; ebike with probability `ebike_share`.
pub fn choose_bike_type<R: Rng + ?Sized>(rng: &mut R, ebike_share: f64) -> BikeType {
    if rng.gen_bool(ebike_share) {
        BikeType::Ebike
    } else {
        BikeType::Standard
    }
}

/// Uniformly random destination among `station_count` stations (the start included).
pub fn random_destination<R: Rng + ?Sized>(rng: &mut R, station_count: usize) -> StationId {
    StationId(rng.gen_range(0..station_count))
}
