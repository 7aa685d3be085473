//! Weighted characteristics of rooms and bookings.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named, weighted property a room may offer and a booking may require.
///
/// Identity is the stable `code`: two characteristics with the same code are
/// equal regardless of label or weighting, and characteristic sets order by
/// code so iteration and rendering are deterministic.
///
/// The weighting feeds the planner's priority ordering (bookings requiring
/// heavier characteristics are matched first) and its best-fit surplus
/// metric. A characteristic flagged `exclusive_room` means the booking must
/// occupy an entire room alone.
///
/// # Examples
///
/// ```
/// use spaceplan_core::Characteristic;
///
/// let step_free = Characteristic::new("stepFree", "Step-free access", 80);
/// assert_eq!(step_free.code(), "stepFree");
/// assert_eq!(step_free.weighting(), 80);
/// assert!(!step_free.is_exclusive_room());
///
/// let single = Characteristic::exclusive("single", "Single occupancy", 100);
/// assert!(single.is_exclusive_room());
///
/// // Identity is the code only
/// assert_eq!(step_free, Characteristic::new("stepFree", "renamed", 5));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Characteristic {
    code: String,
    label: String,
    weighting: u32,
    exclusive_room: bool,
}

impl Characteristic {
    /// Creates a regular characteristic.
    pub fn new(code: impl Into<String>, label: impl Into<String>, weighting: u32) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            weighting,
            exclusive_room: false,
        }
    }

    /// Creates the exclusive-room characteristic.
    pub fn exclusive(code: impl Into<String>, label: impl Into<String>, weighting: u32) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            weighting,
            exclusive_room: true,
        }
    }

    /// Returns the stable code identifying this characteristic.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the weighting used for priority ordering and best-fit.
    pub fn weighting(&self) -> u32 {
        self.weighting
    }

    /// Returns true if requiring this characteristic claims a whole room.
    pub fn is_exclusive_room(&self) -> bool {
        self.exclusive_room
    }
}

impl PartialEq for Characteristic {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Characteristic {}

impl Hash for Characteristic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Characteristic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Characteristic {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

// Display prints the code: it is what reports and logs key on.
impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_equality_by_code_only() {
        let a = Characteristic::new("enSuite", "En-suite", 70);
        let b = Characteristic::new("enSuite", "Different label", 1);
        let c = Characteristic::new("catered", "Catered", 50);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_sets_order_by_code() {
        let set: BTreeSet<_> = [
            Characteristic::new("wheelchair", "Wheelchair", 90),
            Characteristic::new("arson", "Arson suitable", 60),
            Characteristic::exclusive("single", "Single occupancy", 100),
        ]
        .into_iter()
        .collect();

        let codes: Vec<_> = set.iter().map(Characteristic::code).collect();
        assert_eq!(codes, ["arson", "single", "wheelchair"]);
    }

    #[test]
    fn test_duplicate_codes_collapse_in_sets() {
        let set: BTreeSet<_> = [
            Characteristic::new("enSuite", "En-suite", 70),
            Characteristic::new("enSuite", "En-suite again", 70),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 1);
    }
}
