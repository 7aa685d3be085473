//! End-to-end test: snapshot datasets through model building, planning and
//! rendering.

use spaceplan::prelude::*;
use spaceplan_test::{bed_id, booking_id, catalog, date, room_id};

fn bed_summary(n: u128, room_n: u128, codes: &[&str]) -> BedSummary {
    BedSummary {
        id: bed_id(n),
        label: format!("bed{n}"),
        room_id: room_id(room_n),
        room_label: format!("room{room_n}"),
        characteristic_codes: codes.iter().map(|c| c.to_string()).collect(),
        end_date: None,
    }
}

fn booking_record(n: u128, codes: &[&str]) -> BookingRecord {
    BookingRecord {
        id: booking_id(n),
        label: format!("booking{n}"),
        canonical_arrival: date(2027, 3, 10),
        canonical_departure: date(2027, 3, 14),
        cancelled: false,
        non_arrival_confirmed: false,
        characteristic_codes: codes.iter().map(|c| c.to_string()).collect(),
    }
}

#[test]
fn test_snapshots_to_rendered_plan() {
    let day = date(2027, 3, 11);
    let factory = SpacePlanningModelsFactory::new(catalog());

    // room1: two wheelchair beds, one out of service today.
    // room2: a single room. room3: one ended bed.
    let mut ended = bed_summary(4, 3, &[]);
    ended.end_date = Some(date(2027, 3, 1));
    let summaries = [
        bed_summary(1, 1, &["wheelchair", "stepFree"]),
        bed_summary(2, 1, &["wheelchair", "stepFree"]),
        bed_summary(3, 2, &["single"]),
        ended,
    ];
    let out_of_service = [OutOfServiceWindow {
        bed_id: bed_id(2),
        start: date(2027, 3, 11),
        end: date(2027, 3, 11),
    }];

    let mut cancelled = booking_record(3, &[]);
    cancelled.cancelled = true;
    let mut departed = booking_record(4, &[]);
    departed.canonical_departure = day;
    let records = [
        booking_record(1, &["wheelchair"]),
        booking_record(2, &["single"]),
        cancelled,
        departed,
        booking_record(5, &["enSuite"]),
    ];

    let day_states = factory.all_beds_day_state(day, &summaries, &out_of_service);
    assert_eq!(day_states.len(), 4);
    assert!(matches!(
        day_states[1].inactive_reason,
        Some(InactiveReason::OutOfService { .. })
    ));
    assert!(matches!(
        day_states[3].inactive_reason,
        Some(InactiveReason::Ended { .. })
    ));

    let beds: Vec<_> = day_states
        .into_iter()
        .filter(BedDayState::is_active)
        .map(|state| state.bed)
        .collect();
    assert_eq!(beds.len(), 2);

    let bookings = factory.space_bookings_for_day(day, &records);
    let ids: Vec<_> = bookings.iter().map(|b| b.id()).collect();
    assert_eq!(ids, [booking_id(1), booking_id(2), booking_id(5)]);

    let plan = SpaceBookingDayPlanner::plan(&beds, &bookings);

    // booking2 takes the single room, booking1 the wheelchair bed;
    // booking5 wants an en-suite no room offers
    assert_eq!(plan.booking_for(bed_id(3)).map(|b| b.id()), Some(booking_id(2)));
    assert_eq!(plan.booking_for(bed_id(1)).map(|b| b.id()), Some(booking_id(1)));
    assert_eq!(plan.planned_count(), 2);
    assert_eq!(plan.unplanned_count(), 1);

    let report = SpaceDayPlanRenderer::render(&beds, &plan);
    assert!(report.starts_with("## Planned: 2"));
    assert!(report.contains("| bed1 | booking1 | stepFree(r), wheelchair(rb) |"));
    assert!(report.contains("| bed3 | booking2 | single(rb)"));
    assert!(report.contains("| booking5 | enSuite(b)"));
}
