//! Spaceplan - single-day bed allocation planning
//!
//! Answers, for one calendar day: which space bookings can be matched to
//! which beds, given per-room characteristic requirements and the
//! all-or-nothing exclusive-room rule — and which bookings cannot.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use spaceplan::prelude::*;
//!
//! let factory = SpacePlanningModelsFactory::new(CharacteristicCatalog::default());
//! let day = NaiveDate::from_ymd_opt(2027, 3, 11).unwrap();
//!
//! // Snapshots come from the external inventory and booking systems
//! let day_states = factory.all_beds_day_state(day, &[], &[]);
//! let bookings = factory.space_bookings_for_day(day, &[]);
//!
//! let beds: Vec<_> = day_states
//!     .into_iter()
//!     .filter(|state| state.is_active())
//!     .map(|state| state.bed)
//!     .collect();
//!
//! let plan = SpaceBookingDayPlanner::plan(&beds, &bookings);
//! let report = SpaceDayPlanRenderer::render(&beds, &plan);
//! assert!(report.starts_with("## Planned: 0"));
//! ```

// Domain value objects
pub use spaceplan_core::{
    Bed, BedId, Characteristic, Room, RoomId, SpaceBooking, SpaceBookingId,
};

// Characteristic reference data
pub use spaceplan_config::{CatalogConfig, CharacteristicCatalog, ConfigError};

// Day-state model building
pub use spaceplan_model::{
    BedDayState, BedSummary, BookingRecord, InactiveReason, OutOfServiceWindow,
    SpacePlanningModelsFactory,
};

// Planning and rendering
pub use spaceplan_planner::{DayPlan, SpaceBookingDayPlanner, SpaceDayPlanRenderer};

pub mod prelude {
    pub use super::{
        Bed, BedDayState, BedId, BedSummary, BookingRecord, Characteristic,
        CharacteristicCatalog, DayPlan, InactiveReason, OutOfServiceWindow, Room, RoomId,
        SpaceBooking, SpaceBookingDayPlanner, SpaceBookingId, SpaceDayPlanRenderer,
        SpacePlanningModelsFactory,
    };
}
