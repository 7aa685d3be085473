//! Rooms and beds: the physical inventory for one planning day.

use std::collections::BTreeSet;

use crate::characteristic::Characteristic;
use crate::id::{BedId, RoomId};

/// A room and the characteristic set shared by every bed inside it.
///
/// The characteristic set is fixed for the day being planned. Rooms compare
/// by id: the planner treats two `Room` values with the same id as the same
/// room even when carried by different `Bed` values.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use spaceplan_core::{Characteristic, Room, RoomId};
/// use uuid::Uuid;
///
/// let step_free = Characteristic::new("stepFree", "Step-free access", 80);
/// let room = Room::new(
///     RoomId::new(Uuid::from_u128(1)),
///     "Room 1",
///     [step_free.clone()],
/// );
///
/// let required: BTreeSet<_> = [step_free].into_iter().collect();
/// assert!(room.satisfies(&required));
/// assert_eq!(room.surplus_weighting(&required), 0);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    id: RoomId,
    label: String,
    characteristics: BTreeSet<Characteristic>,
}

impl Room {
    /// Creates a room with the given characteristic set.
    pub fn new(
        id: RoomId,
        label: impl Into<String>,
        characteristics: impl IntoIterator<Item = Characteristic>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            characteristics: characteristics.into_iter().collect(),
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the room's characteristics, ordered by code.
    pub fn characteristics(&self) -> &BTreeSet<Characteristic> {
        &self.characteristics
    }

    /// Returns true if the room carries the characteristic with this code.
    pub fn has(&self, code: &str) -> bool {
        self.characteristics.iter().any(|c| c.code() == code)
    }

    /// Returns true if the room carries every required characteristic.
    pub fn satisfies(&self, required: &BTreeSet<Characteristic>) -> bool {
        required.is_subset(&self.characteristics)
    }

    /// Total weighting of room characteristics not in the required set.
    ///
    /// This is the best-fit surplus metric: the planner sends a booking to
    /// the qualifying room wasting the least characteristic weight.
    pub fn surplus_weighting(&self, required: &BTreeSet<Characteristic>) -> u64 {
        self.characteristics
            .difference(required)
            .map(|c| u64::from(c.weighting()))
            .sum()
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Room {}

impl std::hash::Hash for Room {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A single bed, belonging to exactly one room.
///
/// Many beds may share a room; the shared room rides along by value and
/// room identity is its `RoomId`. Beds compare by id.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bed {
    id: BedId,
    label: String,
    room: Room,
}

impl Bed {
    /// Creates a bed inside the given room.
    pub fn new(id: BedId, label: impl Into<String>, room: Room) -> Self {
        Self {
            id,
            label: label.into(),
            room,
        }
    }

    pub fn id(&self) -> BedId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn room(&self) -> &Room {
        &self.room
    }
}

impl PartialEq for Bed {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Bed {}

impl std::hash::Hash for Bed {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn characteristic(code: &str, weighting: u32) -> Characteristic {
        Characteristic::new(code, code, weighting)
    }

    fn room_with(codes_and_weights: &[(&str, u32)]) -> Room {
        Room::new(
            RoomId::new(Uuid::from_u128(1)),
            "room",
            codes_and_weights
                .iter()
                .map(|&(code, w)| characteristic(code, w)),
        )
    }

    #[test]
    fn test_satisfies_is_superset_test() {
        let room = room_with(&[("enSuite", 70), ("stepFree", 80)]);

        let both: BTreeSet<_> = [characteristic("enSuite", 70), characteristic("stepFree", 80)]
            .into_iter()
            .collect();
        let missing: BTreeSet<_> = [characteristic("wheelchair", 90)].into_iter().collect();

        assert!(room.satisfies(&both));
        assert!(room.satisfies(&BTreeSet::new()));
        assert!(!room.satisfies(&missing));
    }

    #[test]
    fn test_surplus_weighting_counts_unrequired_only() {
        let room = room_with(&[("enSuite", 70), ("stepFree", 80), ("wheelchair", 90)]);

        let required: BTreeSet<_> = [characteristic("stepFree", 80)].into_iter().collect();
        assert_eq!(room.surplus_weighting(&required), 70 + 90);
        assert_eq!(room.surplus_weighting(&BTreeSet::new()), 70 + 80 + 90);
    }

    #[test]
    fn test_bed_equality_by_id() {
        let room = room_with(&[]);
        let a = Bed::new(BedId::new(Uuid::from_u128(7)), "bed A", room.clone());
        let b = Bed::new(BedId::new(Uuid::from_u128(7)), "renamed", room);

        assert_eq!(a, b);
    }
}
