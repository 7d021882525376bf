//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both types are `Copy + Ord + Hash` so they can be used as map keys and
//! sorted collection elements without ceremony.  The inner integer is `pub`;
//! use `.index()` when indexing per-floor `Vec`s.
//!
//! There is no "invalid" sentinel: an absent floor is always `Option<Floor>`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// A floor index, `0` being the ground floor.
    pub struct Floor(u32);
}

typed_id! {
    /// Sequential passenger number assigned by the simulation on arrival.
    pub struct PassengerId(u32);
}

impl Floor {
    pub const GROUND: Floor = Floor(0);

    /// Number of single-floor steps between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The floor directly above.
    #[inline]
    pub fn up(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// The floor directly below, or `None` from the ground floor.
    #[inline]
    pub fn down(self) -> Option<Floor> {
        self.0.checked_sub(1).map(Floor)
    }

    /// `true` if this floor exists in a building with `total_floors` floors.
    #[inline]
    pub fn within(self, total_floors: u32) -> bool {
        self.0 < total_floors
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {}", self.0)
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}
