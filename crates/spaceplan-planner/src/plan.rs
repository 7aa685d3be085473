//! The assignment result of one planning run.

use std::collections::{BTreeMap, BTreeSet};

use spaceplan_core::{BedId, SpaceBooking, SpaceBookingId};

/// The outcome of planning one day: bed assignments plus the bookings that
/// could not be matched.
///
/// Invariants upheld by the planner:
/// - every input booking is either planned or unplanned, never both
/// - each bed carries at most one booking
/// - a booking appears under more than one bed only when it claimed an
///   entire room via the exclusive-room characteristic
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    assignments: BTreeMap<BedId, SpaceBooking>,
    unplanned: Vec<SpaceBooking>,
}

impl DayPlan {
    pub(crate) fn new(
        assignments: BTreeMap<BedId, SpaceBooking>,
        unplanned: Vec<SpaceBooking>,
    ) -> Self {
        Self {
            assignments,
            unplanned,
        }
    }

    /// Bed-to-booking assignments, keyed by bed id.
    pub fn assignments(&self) -> &BTreeMap<BedId, SpaceBooking> {
        &self.assignments
    }

    /// The booking assigned to the given bed, if any.
    pub fn booking_for(&self, bed_id: BedId) -> Option<&SpaceBooking> {
        self.assignments.get(&bed_id)
    }

    /// Bookings that could not be matched, in input order.
    pub fn unplanned(&self) -> &[SpaceBooking] {
        &self.unplanned
    }

    /// Returns true if the booking was assigned at least one bed.
    pub fn is_planned(&self, booking_id: SpaceBookingId) -> bool {
        self.assignments.values().any(|b| b.id() == booking_id)
    }

    /// Number of distinct planned bookings.
    ///
    /// A booking holding a whole room counts once, not once per bed.
    pub fn planned_count(&self) -> usize {
        self.assignments
            .values()
            .map(SpaceBooking::id)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Number of unplanned bookings.
    pub fn unplanned_count(&self) -> usize {
        self.unplanned.len()
    }
}
