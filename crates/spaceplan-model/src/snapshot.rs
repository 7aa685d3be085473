//! Snapshot record types supplied by the external inventory and booking
//! systems.
//!
//! These are plain data carriers: lifecycle and liveness questions are
//! answered here per record, and the day-state factory composes them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use spaceplan_core::{BedId, RoomId, SpaceBookingId};

/// One bed as the inventory system reports it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedSummary {
    pub id: BedId,
    pub label: String,
    pub room_id: RoomId,
    pub room_label: String,
    /// Raw characteristic codes on the room; unrecognized codes are dropped
    /// during model building.
    #[serde(default)]
    pub characteristic_codes: Vec<String>,
    /// The bed's permanent end date, if one has been set.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl BedSummary {
    /// Returns true if the bed has ended on or before the given day.
    pub fn is_ended_on(&self, day: NaiveDate) -> bool {
        self.end_date.is_some_and(|end| end <= day)
    }
}

/// A date range during which a bed is out of service.
///
/// Both ends are inclusive: a window covering a single day has
/// `start == end`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutOfServiceWindow {
    pub bed_id: BedId,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl OutOfServiceWindow {
    /// Returns true if the window covers the given day.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// One booking as the booking system reports it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: SpaceBookingId,
    pub label: String,
    pub canonical_arrival: NaiveDate,
    pub canonical_departure: NaiveDate,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub non_arrival_confirmed: bool,
    /// Raw required characteristic codes; unrecognized codes are dropped
    /// during model building.
    #[serde(default)]
    pub characteristic_codes: Vec<String>,
}

impl BookingRecord {
    /// Returns true if the booking occupies a bed on the given day.
    ///
    /// The interval is half-open: the departure day itself is not occupied
    /// ("last night" semantics). Cancelled bookings and confirmed
    /// non-arrivals never occupy a bed.
    pub fn is_resident_on(&self, day: NaiveDate) -> bool {
        !self.cancelled
            && !self.non_arrival_confirmed
            && self.canonical_arrival <= day
            && day < self.canonical_departure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(arrival: NaiveDate, departure: NaiveDate) -> BookingRecord {
        BookingRecord {
            id: SpaceBookingId::new(Uuid::from_u128(1)),
            label: "booking".into(),
            canonical_arrival: arrival,
            canonical_departure: departure,
            cancelled: false,
            non_arrival_confirmed: false,
            characteristic_codes: Vec::new(),
        }
    }

    #[test]
    fn test_residency_interval_is_half_open() {
        let booking = record(date(2027, 3, 10), date(2027, 3, 12));

        assert!(!booking.is_resident_on(date(2027, 3, 9)));
        assert!(booking.is_resident_on(date(2027, 3, 10)));
        assert!(booking.is_resident_on(date(2027, 3, 11)));
        // Departure day itself is excluded
        assert!(!booking.is_resident_on(date(2027, 3, 12)));
    }

    #[test]
    fn test_cancelled_and_non_arrival_never_resident() {
        let day = date(2027, 3, 11);

        let mut cancelled = record(date(2027, 3, 10), date(2027, 3, 12));
        cancelled.cancelled = true;
        assert!(!cancelled.is_resident_on(day));

        let mut no_show = record(date(2027, 3, 10), date(2027, 3, 12));
        no_show.non_arrival_confirmed = true;
        assert!(!no_show.is_resident_on(day));
    }

    #[test]
    fn test_out_of_service_window_is_inclusive() {
        let window = OutOfServiceWindow {
            bed_id: BedId::new(Uuid::from_u128(1)),
            start: date(2027, 3, 10),
            end: date(2027, 3, 12),
        };

        assert!(!window.covers(date(2027, 3, 9)));
        assert!(window.covers(date(2027, 3, 10)));
        assert!(window.covers(date(2027, 3, 12)));
        assert!(!window.covers(date(2027, 3, 13)));
    }

    #[test]
    fn test_bed_summary_deserializes_camel_case() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "label": "Bed 1",
            "roomId": "00000000-0000-0000-0000-000000000002",
            "roomLabel": "Room 1",
            "characteristicCodes": ["stepFree"],
            "endDate": "2027-03-10"
        }"#;

        let bed: BedSummary = serde_yaml::from_str(json).unwrap();
        assert_eq!(bed.label, "Bed 1");
        assert_eq!(bed.characteristic_codes, ["stepFree"]);
        assert!(bed.is_ended_on(date(2027, 3, 10)));
        assert!(!bed.is_ended_on(date(2027, 3, 9)));
    }
}
