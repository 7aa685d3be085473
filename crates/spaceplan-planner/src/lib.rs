//! Spaceplan allocation engine
//!
//! This crate decides, for one calendar day, which space bookings get which
//! beds:
//! - `SpaceBookingDayPlanner`: priority-ordered greedy best-fit matching
//!   with an all-or-nothing exclusive-room rule
//! - `DayPlan`: the resulting assignment plus the unplanned set
//! - `SpaceDayPlanRenderer`: a stable two-table text report of the outcome
//!
//! The planner is a pure function over immutable inputs: no I/O, no shared
//! state, and every unsatisfiable requirement degrades to "unplanned"
//! rather than an error.

pub mod plan;
pub mod planner;
pub mod render;

pub use plan::DayPlan;
pub use planner::SpaceBookingDayPlanner;
pub use render::SpaceDayPlanRenderer;
