//! Shared test fixtures for spaceplan crates.
//!
//! Provides deterministic builders for the domain value objects so model,
//! planner and renderer tests read as scenarios rather than plumbing. All
//! ids are derived from small integers (`uuid::Uuid::from_u128`), so a
//! fixture built twice is identical.
//!
//! # Example
//!
//! ```
//! use spaceplan_test::{bed, booking, characteristic, room};
//!
//! let step_free = characteristic("stepFree", 80);
//! let bed1 = bed(1, "bed1", room(1, "room1", [step_free.clone()]));
//! let booking1 = booking(1, "booking1", [step_free]);
//! assert_eq!(booking1.priority_weight(), 80);
//! ```

use chrono::NaiveDate;
use uuid::Uuid;

use spaceplan_config::CharacteristicCatalog;
use spaceplan_core::{Bed, BedId, Characteristic, Room, RoomId, SpaceBooking, SpaceBookingId};

/// The built-in characteristic catalog.
pub fn catalog() -> CharacteristicCatalog {
    CharacteristicCatalog::default()
}

/// A regular characteristic labelled with its own code.
pub fn characteristic(code: &str, weighting: u32) -> Characteristic {
    Characteristic::new(code, code, weighting)
}

/// The exclusive-room characteristic as the built-in catalog defines it.
pub fn single() -> Characteristic {
    Characteristic::exclusive("single", "Single occupancy", 100)
}

pub fn room_id(n: u128) -> RoomId {
    RoomId::new(Uuid::from_u128(n))
}

pub fn bed_id(n: u128) -> BedId {
    BedId::new(Uuid::from_u128(n))
}

pub fn booking_id(n: u128) -> SpaceBookingId {
    SpaceBookingId::new(Uuid::from_u128(n))
}

/// A room with a deterministic id derived from `n`.
pub fn room(
    n: u128,
    label: &str,
    characteristics: impl IntoIterator<Item = Characteristic>,
) -> Room {
    Room::new(room_id(n), label, characteristics)
}

/// A bed with a deterministic id derived from `n`.
pub fn bed(n: u128, label: &str, room: Room) -> Bed {
    Bed::new(bed_id(n), label, room)
}

/// `count` beds sharing one room, ids derived from `first_bed_n` upward.
pub fn beds_in_room(first_bed_n: u128, count: usize, room: Room) -> Vec<Bed> {
    (0..count as u128)
        .map(|i| {
            let n = first_bed_n + i;
            bed(n, &format!("bed{n}"), room.clone())
        })
        .collect()
}

/// A booking with a deterministic id derived from `n`.
pub fn booking(
    n: u128,
    label: &str,
    required: impl IntoIterator<Item = Characteristic>,
) -> SpaceBooking {
    SpaceBooking::new(booking_id(n), label, required)
}

/// Shorthand for a calendar date.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}
