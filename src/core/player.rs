//! Validated player count.
//!
//! Not Alone is played by 2 to 7 players. Track lengths derive from the
//! player count, so every constructor that depends on it takes a
//! `PlayerCount` (or validates a raw `usize` into one) before doing any work.

use serde::{Deserialize, Serialize};

use super::error::{Result, TopologyError};

/// Number of players in a game, guaranteed to lie in `2..=7`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PlayerCount(u8);

impl PlayerCount {
    /// Smallest legal player count.
    pub const MIN: usize = 2;

    /// Largest legal player count.
    pub const MAX: usize = 7;

    /// Validate a raw player count.
    ///
    /// ```
    /// use not_alone::core::PlayerCount;
    ///
    /// assert_eq!(PlayerCount::new(4).unwrap().get(), 4);
    /// assert!(PlayerCount::new(8).is_err());
    /// ```
    pub fn new(count: usize) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count as u8))
        } else {
            Err(TopologyError::InvalidPlayerCount(count))
        }
    }

    /// Get the raw count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every legal player count, smallest first.
    pub fn all() -> impl Iterator<Item = PlayerCount> {
        (Self::MIN as u8..=Self::MAX as u8).map(PlayerCount)
    }
}

impl TryFrom<usize> for PlayerCount {
    type Error = TopologyError;

    fn try_from(count: usize) -> Result<Self> {
        Self::new(count)
    }
}

impl From<PlayerCount> for usize {
    fn from(count: PlayerCount) -> usize {
        count.get()
    }
}

impl std::fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} players", self.0)
    }
}
