//! Docking-station inventory model for a bike-share simulation.
//!
//! [`station::Station`] is the resource model: standard bikes, ebikes, docks,
//! and reservations, mutated by check-out, return, and reserve. The remaining
//! modules support it: [`ride::Ride`] records, seeded sampling helpers, and a
//! small step-driven [`runner`] that exercises stations end to end.

pub mod bike;
pub mod clock;
pub mod distributions;
pub mod error;
pub mod kiosk;
pub mod ride;
pub mod runner;
pub mod scenario;
pub mod shared;
pub mod station;
pub mod telemetry;

pub use bike::BikeType;
pub use error::{SamplingError, ScenarioError, StationError};
pub use ride::{Ride, StationId};
pub use shared::SharedStation;
pub use station::{Station, StationCounts};
