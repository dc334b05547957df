//! Kiosk uplink: optional side activity triggered by a successful return.
//!
//! When a bike docks, the kiosk starts pulling a ride recording off it. The
//! payload size and transfer time are recorded for telemetry only; nothing
//! here feeds back into station counts.

use rand::Rng;
use serde::Serialize;

use crate::bike::BikeType;
use crate::distributions::PayloadSizeSampler;
use crate::station::StationCounts;

/// Sustained kiosk transfer rate (USB 3.1), in MB/s.
pub const TRANSFER_RATE_MB_PER_SEC: f64 = 600.0;

/// Observer notified after a bike has been docked.
pub trait DockingHook {
    fn on_docked(&mut self, bike_type: BikeType, counts: &StationCounts);
}

impl DockingHook for () {
    fn on_docked(&mut self, _bike_type: BikeType, _counts: &StationCounts) {}
}

/// One recorded transfer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KioskTransfer {
    pub bike_type: BikeType,
    pub payload_mb: u64,
    pub transfer_secs: f64,
}

impl KioskTransfer {
    pub fn new(bike_type: BikeType, payload_mb: u64) -> Self {
        Self {
            bike_type,
            payload_mb,
            transfer_secs: payload_mb as f64 / TRANSFER_RATE_MB_PER_SEC,
        }
    }
}

/// Records a [`KioskTransfer`] for every docking it observes.
#[derive(Debug)]
pub struct KioskUplink<R> {
    rng: R,
    sampler: PayloadSizeSampler,
    transfers: Vec<KioskTransfer>,
}

impl<R: Rng> KioskUplink<R> {
    pub fn new(rng: R) -> Self {
        Self::with_sampler(rng, PayloadSizeSampler::default())
    }

    pub fn with_sampler(rng: R, sampler: PayloadSizeSampler) -> Self {
        Self {
            rng,
            sampler,
            transfers: Vec::new(),
        }
    }

    pub fn transfers(&self) -> &[KioskTransfer] {
        &self.transfers
    }

    /// Drain recorded transfers.
    pub fn take_transfers(&mut self) -> Vec<KioskTransfer> {
        std::mem::take(&mut self.transfers)
    }
}

impl<R: Rng> DockingHook for KioskUplink<R> {
    fn on_docked(&mut self, bike_type: BikeType, _counts: &StationCounts) {
        let payload_mb = self.sampler.sample(&mut self.rng);
        self.transfers.push(KioskTransfer::new(bike_type, payload_mb));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::Station;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn transfer_time_uses_fixed_rate() {
        let transfer = KioskTransfer::new(BikeType::Standard, 1200);
        assert_eq!(transfer.transfer_secs, 2.0);
    }

    #[test]
    fn uplink_records_one_transfer_per_docking() {
        let mut station = Station::new(2, 0, 0, 0);
        let mut uplink = KioskUplink::new(StdRng::seed_from_u64(7));

        assert!(station.return_bike_with(BikeType::Standard, &mut uplink));
        assert!(station.return_bike_with(BikeType::Ebike, &mut uplink));
        assert!(!station.return_bike_with(BikeType::Ebike, &mut uplink));

        let transfers = uplink.take_transfers();
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[1].bike_type, BikeType::Ebike);
        for transfer in &transfers {
            assert!((45..128_000).contains(&transfer.payload_mb));
        }
        assert!(uplink.transfers().is_empty());
    }

    #[test]
    fn uplink_does_not_change_return_outcome() {
        let mut with_hook = Station::new(1, 0, 0, 0);
        let mut without_hook = with_hook.clone();
        let mut uplink = KioskUplink::new(StdRng::seed_from_u64(1));

        for kind in [BikeType::Ebike, BikeType::Standard] {
            assert_eq!(
                with_hook.return_bike_with(kind, &mut uplink),
                without_hook.return_bike(kind)
            );
        }
        assert_eq!(with_hook, without_hook);
    }
}
