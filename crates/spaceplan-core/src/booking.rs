//! Space bookings: placements that need a bed for the planning day.

use std::collections::BTreeSet;

use crate::characteristic::Characteristic;
use crate::id::SpaceBookingId;

/// One person needing a bed on the planning day, with the characteristics
/// the assigned room must carry.
///
/// The required set may be empty (no constraints) or include the
/// exclusive-room characteristic, in which case the planner must give the
/// booking an entire room. Bookings compare by id.
///
/// # Examples
///
/// ```
/// use spaceplan_core::{Characteristic, SpaceBooking, SpaceBookingId};
/// use uuid::Uuid;
///
/// let booking = SpaceBooking::new(
///     SpaceBookingId::new(Uuid::from_u128(1)),
///     "booking1",
///     [
///         Characteristic::new("stepFree", "Step-free access", 80),
///         Characteristic::exclusive("single", "Single occupancy", 100),
///     ],
/// );
///
/// assert_eq!(booking.priority_weight(), 180);
/// assert!(booking.requires_exclusive_room());
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpaceBooking {
    id: SpaceBookingId,
    label: String,
    required_characteristics: BTreeSet<Characteristic>,
}

impl SpaceBooking {
    /// Creates a booking with the given requirements.
    pub fn new(
        id: SpaceBookingId,
        label: impl Into<String>,
        required_characteristics: impl IntoIterator<Item = Characteristic>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            required_characteristics: required_characteristics.into_iter().collect(),
        }
    }

    pub fn id(&self) -> SpaceBookingId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the required characteristics, ordered by code.
    pub fn required_characteristics(&self) -> &BTreeSet<Characteristic> {
        &self.required_characteristics
    }

    /// Sum of required characteristic weightings; 0 when nothing is required.
    ///
    /// Determines matching order: heavier bookings get first pick.
    pub fn priority_weight(&self) -> u64 {
        self.required_characteristics
            .iter()
            .map(|c| u64::from(c.weighting()))
            .sum()
    }

    /// Returns true if any required characteristic claims a whole room.
    pub fn requires_exclusive_room(&self) -> bool {
        self.required_characteristics
            .iter()
            .any(Characteristic::is_exclusive_room)
    }
}

impl PartialEq for SpaceBooking {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SpaceBooking {}

impl std::hash::Hash for SpaceBooking {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
