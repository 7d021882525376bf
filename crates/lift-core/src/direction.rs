//! Cabin travel direction and dispatch policy selectors.

use std::fmt;
use std::str::FromStr;

use crate::LiftError;

/// The cabin's directional state.
///
/// Under the directional policy this is the state of the sweep state
/// machine; under the nearest policy it only reflects the last move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    /// The opposite sweep direction.  `Idle` stays `Idle`.
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = LiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up"   => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "idle" => Ok(Direction::Idle),
            other  => Err(LiftError::Parse(format!(
                "invalid direction {other:?}: expected \"up\", \"down\", or \"idle\""
            ))),
        }
    }
}

/// Which dispatch algorithm drives the cabin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Policy {
    /// Distance-greedy: nearest onboard destination, else nearest waiting floor.
    Nearest,
    /// Sweep in one direction until nothing is left ahead, then reverse.
    #[default]
    Directional,
}

impl Policy {
    pub const ALL: [Policy; 2] = [Policy::Nearest, Policy::Directional];

    pub fn as_str(self) -> &'static str {
        match self {
            Policy::Nearest     => "nearest",
            Policy::Directional => "directional",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = LiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "basic" => Ok(Policy::Nearest),
            "directional"       => Ok(Policy::Directional),
            other => Err(LiftError::Parse(format!(
                "invalid policy {other:?}: expected \"nearest\" or \"directional\""
            ))),
        }
    }
}
