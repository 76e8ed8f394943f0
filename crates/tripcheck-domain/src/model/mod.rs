//! Domain model types

pub mod coordinate;
pub mod cycle_status;
pub mod duty_log;
pub mod trip;

pub use coordinate::{Coordinate, Waypoint};
pub use cycle_status::CycleStatus;
pub use duty_log::{DutyKind, DutyLogEntry};
pub use trip::{FuelStop, Leg, TripInput, TripResult};
