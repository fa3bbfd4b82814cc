//! Board sides and the placement of Artemia spots on the rescue track.
//!
//! The physical board is double-sided:
//! - `STACKED`: the Artemia spots are stacked at the end of the rescue track.
//! - `ALTERNATING`: the Artemia spots alternate with regular spots over the
//!   last twelve slots.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TopologyError};
use crate::core::PlayerCount;

/// Which side of the board is in play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Layout {
    #[default]
    Stacked,
    Alternating,
}

impl Layout {
    /// Number of trailing rescue slots that are always Artemia on a stacked board.
    pub const STACKED_ARTEMIA_SLOTS: usize = 6;

    /// Number of trailing rescue slots over which an alternating board alternates.
    pub const ALTERNATING_WINDOW: usize = 12;

    /// Kind of rescue slot `slot` on a track of `len` slots.
    ///
    /// ```
    /// use not_alone::board::{Layout, RescueKind};
    /// use not_alone::core::PlayerCount;
    ///
    /// let four = PlayerCount::new(4).unwrap();
    /// assert_eq!(Layout::Stacked.rescue_kind(8, four, 15), RescueKind::Regular);
    /// assert_eq!(Layout::Stacked.rescue_kind(9, four, 15), RescueKind::Artemia);
    /// assert_eq!(Layout::Alternating.rescue_kind(2, four, 15), RescueKind::Regular);
    /// assert_eq!(Layout::Alternating.rescue_kind(4, four, 15), RescueKind::Artemia);
    /// ```
    #[must_use]
    pub fn rescue_kind(self, slot: usize, player_count: PlayerCount, len: usize) -> RescueKind {
        match self {
            Layout::Stacked => {
                if slot + Self::STACKED_ARTEMIA_SLOTS >= len {
                    RescueKind::Artemia
                } else {
                    RescueKind::Regular
                }
            }
            Layout::Alternating => {
                if slot + Self::ALTERNATING_WINDOW < len {
                    RescueKind::Regular
                } else if (slot + player_count.get()) % 2 == 0 {
                    RescueKind::Artemia
                } else {
                    RescueKind::Regular
                }
            }
        }
    }

    /// Numeric code of this side (`STACKED = 1`, `ALTERNATING = 2`).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Layout::Stacked => 1,
            Layout::Alternating => 2,
        }
    }
}

impl TryFrom<u8> for Layout {
    type Error = TopologyError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Layout::Stacked),
            2 => Ok(Layout::Alternating),
            other => Err(TopologyError::UnknownVariant {
                what: "board layout",
                value: other.to_string(),
            }),
        }
    }
}

impl std::str::FromStr for Layout {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stacked" => Ok(Layout::Stacked),
            "alternating" => Ok(Layout::Alternating),
            _ => Err(TopologyError::UnknownVariant {
                what: "board layout",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Stacked => write!(f, "STACKED"),
            Layout::Alternating => write!(f, "ALTERNATING"),
        }
    }
}

/// Kind of a rescue track slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RescueKind {
    #[default]
    Regular,
    Artemia,
}

impl RescueKind {
    /// Numeric code of this kind (`REGULAR = 0`, `ARTEMIA = 1`).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            RescueKind::Regular => 0,
            RescueKind::Artemia => 1,
        }
    }
}

impl TryFrom<u8> for RescueKind {
    type Error = TopologyError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(RescueKind::Regular),
            1 => Ok(RescueKind::Artemia),
            other => Err(TopologyError::UnknownVariant {
                what: "rescue position kind",
                value: other.to_string(),
            }),
        }
    }
}

impl std::str::FromStr for RescueKind {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "regular" => Ok(RescueKind::Regular),
            "artemia" => Ok(RescueKind::Artemia),
            _ => Err(TopologyError::UnknownVariant {
                what: "rescue position kind",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RescueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RescueKind::Regular => write!(f, "REGULAR"),
            RescueKind::Artemia => write!(f, "ARTEMIA"),
        }
    }
}
