//! The single-day allocation algorithm.
//!
//! A greedy, non-backtracking matcher: bookings are processed in priority
//! order (heaviest requirements first) and each takes the qualifying bed
//! wasting the least characteristic weight. A booking requiring the
//! exclusive-room characteristic claims every bed of a fully free room at
//! once. Once made, an assignment is never revisited.

use std::collections::{BTreeMap, BTreeSet};

use smallvec::SmallVec;
use tracing::{debug, trace};

use spaceplan_core::{Bed, Characteristic, RoomId, SpaceBooking};

use crate::plan::DayPlan;

/// One room's beds, in bed input order.
///
/// Rooms are listed in order of first appearance so that tie-breaks fall
/// back to input order, and every bed of a room can be claimed in one step.
struct RoomBeds {
    room_id: RoomId,
    bed_indices: SmallVec<[usize; 4]>,
}

/// Plans one day's bed assignments.
///
/// # Examples
///
/// ```
/// use spaceplan_core::{Bed, BedId, Characteristic, Room, RoomId, SpaceBooking, SpaceBookingId};
/// use spaceplan_planner::SpaceBookingDayPlanner;
///
/// let step_free = Characteristic::new("stepFree", "Step-free access", 80);
/// let room = Room::new(RoomId::random(), "room1", [step_free.clone()]);
/// let bed = Bed::new(BedId::random(), "bed1", room);
/// let booking = SpaceBooking::new(SpaceBookingId::random(), "booking1", [step_free]);
///
/// let plan = SpaceBookingDayPlanner::plan(&[bed.clone()], &[booking.clone()]);
/// assert_eq!(plan.booking_for(bed.id()), Some(&booking));
/// assert!(plan.unplanned().is_empty());
/// ```
pub struct SpaceBookingDayPlanner;

impl SpaceBookingDayPlanner {
    /// Matches bookings to beds for one day.
    ///
    /// Pure and total: identical inputs give identical plans, and a booking
    /// no bed can satisfy lands in the unplanned set rather than erroring.
    pub fn plan(beds: &[Bed], bookings: &[SpaceBooking]) -> DayPlan {
        let rooms = rooms_in_input_order(beds);
        // Working assignment state: one slot per bed, holding the index of
        // the booking occupying it. Inputs are never mutated.
        let mut assigned: Vec<Option<usize>> = vec![None; beds.len()];

        for &booking_idx in &priority_order(bookings) {
            let booking = &bookings[booking_idx];
            let placed = if booking.requires_exclusive_room() {
                place_exclusive(booking, booking_idx, beds, &rooms, &mut assigned)
            } else {
                place_best_fit(booking, booking_idx, beds, &mut assigned)
            };
            if !placed {
                debug!(booking = %booking.label(), "no qualifying bed free; booking unplanned");
            }
        }

        let mut assignments = BTreeMap::new();
        for (bed_idx, slot) in assigned.iter().enumerate() {
            if let Some(booking_idx) = slot {
                assignments.insert(beds[bed_idx].id(), bookings[*booking_idx].clone());
            }
        }
        let unplanned: Vec<SpaceBooking> = bookings
            .iter()
            .enumerate()
            .filter(|(idx, _)| !assigned.contains(&Some(*idx)))
            .map(|(_, booking)| booking.clone())
            .collect();

        debug!(
            planned = bookings.len() - unplanned.len(),
            unplanned = unplanned.len(),
            beds = beds.len(),
            "day plan complete"
        );
        DayPlan::new(assignments, unplanned)
    }
}

/// Booking indices, heaviest requirements first.
///
/// Descending priority weight, then descending required-characteristic
/// count; the stable sort keeps input order for full ties. Bookings with
/// specific requirements must pick before generic ones, or a generic
/// booking could consume the only bed able to satisfy a specific one.
fn priority_order(bookings: &[SpaceBooking]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..bookings.len()).collect();
    order.sort_by(|&a, &b| {
        let (first, second) = (&bookings[a], &bookings[b]);
        second
            .priority_weight()
            .cmp(&first.priority_weight())
            .then_with(|| {
                second
                    .required_characteristics()
                    .len()
                    .cmp(&first.required_characteristics().len())
            })
    });
    order
}

fn rooms_in_input_order(beds: &[Bed]) -> Vec<RoomBeds> {
    let mut rooms: Vec<RoomBeds> = Vec::new();
    for (bed_idx, bed) in beds.iter().enumerate() {
        match rooms.iter_mut().find(|r| r.room_id == bed.room().id()) {
            Some(entry) => entry.bed_indices.push(bed_idx),
            None => rooms.push(RoomBeds {
                room_id: bed.room().id(),
                bed_indices: SmallVec::from_slice(&[bed_idx]),
            }),
        }
    }
    rooms
}

/// Assigns the unassigned qualifying bed with the least surplus weighting.
///
/// Strict comparison keeps the earliest bed on surplus ties, so the
/// tie-break is bed input order.
fn place_best_fit(
    booking: &SpaceBooking,
    booking_idx: usize,
    beds: &[Bed],
    assigned: &mut [Option<usize>],
) -> bool {
    let required = booking.required_characteristics();

    let mut best: Option<(usize, u64)> = None;
    for (bed_idx, bed) in beds.iter().enumerate() {
        if assigned[bed_idx].is_some() || !bed.room().satisfies(required) {
            continue;
        }
        let surplus = bed.room().surplus_weighting(required);
        trace!(booking = %booking.label(), bed = %bed.label(), surplus, "candidate bed");
        if best.map_or(true, |(_, least)| surplus < least) {
            best = Some((bed_idx, surplus));
        }
    }

    match best {
        Some((bed_idx, surplus)) => {
            debug!(
                booking = %booking.label(),
                bed = %beds[bed_idx].label(),
                surplus,
                "assigned best-fit bed"
            );
            assigned[bed_idx] = Some(booking_idx);
            true
        }
        None => false,
    }
}

/// Claims every bed of the best fully free qualifying room.
///
/// Room ranking: fewest beds first (least capacity wasted), then rooms
/// that themselves carry the exclusive-room characteristic, then least
/// surplus weighting, then input order.
fn place_exclusive(
    booking: &SpaceBooking,
    booking_idx: usize,
    beds: &[Bed],
    rooms: &[RoomBeds],
    assigned: &mut [Option<usize>],
) -> bool {
    let required = booking.required_characteristics();
    let non_exclusive: BTreeSet<Characteristic> = required
        .iter()
        .filter(|c| !c.is_exclusive_room())
        .cloned()
        .collect();

    let mut best: Option<(usize, (usize, bool, u64))> = None;
    for (room_idx, entry) in rooms.iter().enumerate() {
        if entry.bed_indices.iter().any(|&i| assigned[i].is_some()) {
            continue;
        }
        let room = beds[entry.bed_indices[0]].room();
        if !room.satisfies(&non_exclusive) {
            continue;
        }
        let carries_exclusive = room.characteristics().iter().any(Characteristic::is_exclusive_room);
        let rank = (
            entry.bed_indices.len(),
            !carries_exclusive,
            room.surplus_weighting(required),
        );
        trace!(
            booking = %booking.label(),
            room = %room.label(),
            beds = entry.bed_indices.len(),
            carries_exclusive,
            "candidate room"
        );
        if best.map_or(true, |(_, least)| rank < least) {
            best = Some((room_idx, rank));
        }
    }

    match best {
        Some((room_idx, _)) => {
            let entry = &rooms[room_idx];
            debug!(
                booking = %booking.label(),
                room = %beds[entry.bed_indices[0]].room().label(),
                beds = entry.bed_indices.len(),
                "assigned whole room"
            );
            for &bed_idx in &entry.bed_indices {
                assigned[bed_idx] = Some(booking_idx);
            }
            true
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
