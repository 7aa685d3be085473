//! Spaceplan Core - domain types for single-day bed allocation
//!
//! This crate provides the value objects the planning engine operates on:
//! - `Characteristic`: a weighted property a room may offer and a booking may require
//! - `Room` and `Bed`: the bed inventory for one planning day
//! - `SpaceBooking`: a placement that needs a bed on that day
//!
//! All types are immutable after construction and compare by identity
//! (`code` for characteristics, id newtypes for everything else), so they
//! can be shared freely across concurrent planning runs.

pub mod booking;
pub mod characteristic;
pub mod id;
pub mod space;

pub use booking::SpaceBooking;
pub use characteristic::Characteristic;
pub use id::{BedId, RoomId, SpaceBookingId};
pub use space::{Bed, Room};
