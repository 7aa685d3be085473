//! Day-state model building for spaceplan.
//!
//! Turns raw inventory snapshots into the candidate pool for one planning
//! day:
//! - `BedDayState`: every bed in the inventory, annotated with why it is
//!   out of play that day (if it is)
//! - the subset of bookings live on that day, as `SpaceBooking` values
//!
//! The wider datasets (bed summaries, out-of-service windows, booking
//! records) come from the external inventory and booking systems; this
//! crate only reshapes them, it never stores or mutates them.

pub mod day_state;
pub mod snapshot;

pub use day_state::{BedDayState, InactiveReason, SpacePlanningModelsFactory};
pub use snapshot::{BedSummary, BookingRecord, OutOfServiceWindow};
