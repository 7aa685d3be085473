//! The day-state builder: derives one planning day's candidate pool from
//! the wider snapshot datasets.

use chrono::NaiveDate;

use spaceplan_config::CharacteristicCatalog;
use spaceplan_core::{Bed, Room, SpaceBooking};

use crate::snapshot::{BedSummary, BookingRecord, OutOfServiceWindow};

/// Why a bed is out of play on the planning day.
///
/// A bed with an inactive reason is excluded from the allocation engine's
/// input for that day. `Ended` takes precedence over `OutOfService` when a
/// bed has both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InactiveReason {
    /// The bed's permanent end date is on or before the planning day.
    Ended { end_date: NaiveDate },
    /// An out-of-service record covers the planning day.
    OutOfService { start: NaiveDate, end: NaiveDate },
}

/// One bed's state on the planning day.
#[derive(Debug, Clone)]
pub struct BedDayState {
    pub bed: Bed,
    pub inactive_reason: Option<InactiveReason>,
}

impl BedDayState {
    /// Returns true if the bed can take a booking on the planning day.
    pub fn is_active(&self) -> bool {
        self.inactive_reason.is_none()
    }
}

/// Builds the per-day planning model from raw snapshots.
///
/// Both operations are pure: given a day and the full datasets, they derive
/// the day's view without retaining state between calls. Characteristic
/// codes on rooms and bookings are resolved through the catalog; codes the
/// catalog doesn't recognize are dropped so they cannot influence matching.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use spaceplan_config::CharacteristicCatalog;
/// use spaceplan_model::SpacePlanningModelsFactory;
///
/// let factory = SpacePlanningModelsFactory::new(CharacteristicCatalog::default());
/// let day = NaiveDate::from_ymd_opt(2027, 3, 11).unwrap();
///
/// let beds = factory.all_beds_day_state(day, &[], &[]);
/// let bookings = factory.space_bookings_for_day(day, &[]);
/// assert!(beds.is_empty());
/// assert!(bookings.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SpacePlanningModelsFactory {
    catalog: CharacteristicCatalog,
}

impl SpacePlanningModelsFactory {
    /// Creates a factory resolving characteristics through the given catalog.
    pub fn new(catalog: CharacteristicCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CharacteristicCatalog {
        &self.catalog
    }

    /// Derives the day state of every bed in the inventory.
    ///
    /// Returns one entry per input bed, preserving input order. A bed is
    /// inactive when it has ended on or before `day`, or failing that when
    /// any out-of-service window for it covers `day`.
    pub fn all_beds_day_state(
        &self,
        day: NaiveDate,
        beds: &[BedSummary],
        out_of_service: &[OutOfServiceWindow],
    ) -> Vec<BedDayState> {
        beds.iter()
            .map(|summary| BedDayState {
                bed: self.bed_from_summary(summary),
                inactive_reason: self.inactive_reason(day, summary, out_of_service),
            })
            .collect()
    }

    /// Derives the bookings that occupy a bed on `day`.
    ///
    /// A booking is live when `arrival <= day < departure` and it is
    /// neither cancelled nor a confirmed non-arrival. Input order is
    /// preserved.
    pub fn space_bookings_for_day(
        &self,
        day: NaiveDate,
        bookings: &[BookingRecord],
    ) -> Vec<SpaceBooking> {
        bookings
            .iter()
            .filter(|record| record.is_resident_on(day))
            .map(|record| {
                SpaceBooking::new(
                    record.id,
                    record.label.clone(),
                    self.catalog
                        .resolve_all(record.characteristic_codes.iter().map(String::as_str)),
                )
            })
            .collect()
    }

    fn bed_from_summary(&self, summary: &BedSummary) -> Bed {
        let room = Room::new(
            summary.room_id,
            summary.room_label.clone(),
            self.catalog
                .resolve_all(summary.characteristic_codes.iter().map(String::as_str)),
        );
        Bed::new(summary.id, summary.label.clone(), room)
    }

    // Ended is checked before out-of-service: a bed that has permanently
    // ended stays Ended even when an OOS window also covers the day.
    fn inactive_reason(
        &self,
        day: NaiveDate,
        summary: &BedSummary,
        out_of_service: &[OutOfServiceWindow],
    ) -> Option<InactiveReason> {
        if summary.is_ended_on(day) {
            let end_date = summary.end_date?;
            return Some(InactiveReason::Ended { end_date });
        }
        out_of_service
            .iter()
            .find(|window| window.bed_id == summary.id && window.covers(day))
            .map(|window| InactiveReason::OutOfService {
                start: window.start,
                end: window.end,
            })
    }
}

#[cfg(test)]
#[path = "day_state_tests.rs"]
mod tests;
