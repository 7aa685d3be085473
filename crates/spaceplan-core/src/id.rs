//! Identifier newtypes for domain objects.
//!
//! Wrapping `uuid::Uuid` in per-type newtypes keeps bed, room and booking
//! ids from being mixed up at compile time.

use std::fmt;

use uuid::Uuid;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(Uuid);

        impl $name {
            /// Wraps an existing uuid.
            pub const fn new(id: Uuid) -> Self {
                Self(id)
            }

            /// Generates a fresh random id.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Returns the underlying uuid.
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(
    /// Identifier of a room.
    RoomId
);
define_id!(
    /// Identifier of a bed.
    BedId
);
define_id!(
    /// Identifier of a space booking (a placement needing a bed).
    SpaceBookingId
);
