//! Plain-text rendering of a day plan.
//!
//! Produces a stable two-table report so a plan can be eyeballed in logs
//! and compared verbatim in tests. The format is an internal contract
//! between the renderer and its consumers, not a wire format.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use spaceplan_core::{Bed, Characteristic, SpaceBooking};

use crate::plan::DayPlan;

/// Renders a `DayPlan` as two fixed-width Markdown-style tables.
///
/// The planned table lists every bed in input order with its assigned
/// booking (blank when none). Characteristic codes are annotated `(r)`
/// when the room carries the characteristic, `(b)` when the listed booking
/// requires it, and `(rb)` when both.
pub struct SpaceDayPlanRenderer;

impl SpaceDayPlanRenderer {
    /// Formats the plan for the given beds.
    ///
    /// Deterministic: identical inputs render identical reports.
    pub fn render(beds: &[Bed], plan: &DayPlan) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "## Planned: {}\n", plan.planned_count());
        let planned_rows: Vec<Vec<String>> = beds
            .iter()
            .map(|bed| {
                let booking = plan.booking_for(bed.id());
                vec![
                    bed.label().to_owned(),
                    booking.map(SpaceBooking::label).unwrap_or_default().to_owned(),
                    annotated_codes(
                        bed.room().characteristics(),
                        booking.map(SpaceBooking::required_characteristics),
                    ),
                ]
            })
            .collect();
        push_table(&mut out, &["Bed", "Booking", "Characteristics"], &planned_rows);

        let _ = writeln!(out, "\n## Unplanned: {}\n", plan.unplanned_count());
        let unplanned_rows: Vec<Vec<String>> = plan
            .unplanned()
            .iter()
            .map(|booking| {
                vec![
                    booking.label().to_owned(),
                    annotated_codes(&BTreeSet::new(), Some(booking.required_characteristics())),
                ]
            })
            .collect();
        push_table(&mut out, &["Booking", "Characteristics"], &unplanned_rows);

        out
    }
}

/// Codes of the union of room and required characteristics, in code order,
/// each suffixed with where it appears.
fn annotated_codes(
    room: &BTreeSet<Characteristic>,
    required: Option<&BTreeSet<Characteristic>>,
) -> String {
    let empty = BTreeSet::new();
    let required = required.unwrap_or(&empty);

    let annotated: Vec<String> = room
        .union(required)
        .map(|c| {
            let suffix = match (room.contains(c), required.contains(c)) {
                (true, true) => "rb",
                (true, false) => "r",
                _ => "b",
            };
            format!("{}({})", c.code(), suffix)
        })
        .collect();
    annotated.join(", ")
}

fn push_table(out: &mut String, header: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.len());
        }
    }

    push_row(out, header.iter().map(|h| (*h).to_owned()), &widths);
    push_row(out, widths.iter().map(|w| "-".repeat(*w)), &widths);
    for row in rows {
        push_row(out, row.iter().cloned(), &widths);
    }
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    for (cell, &width) in cells.zip(widths.iter()) {
        let _ = write!(out, "| {cell:<width$} ");
    }
    out.push_str("|\n");
}
