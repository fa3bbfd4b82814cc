//! Game setup configuration.
//!
//! The surrounding game decides the player count, the board side and
//! (optionally) a seed, then builds the board and the shuffle RNG from it.
//! The struct deserializes from any serde format:
//!
//! ```
//! use not_alone::board::Layout;
//! use not_alone::core::SetupConfig;
//!
//! let config = SetupConfig::new(4).with_layout(Layout::Alternating).with_seed(9);
//! let board = config.build_board().unwrap();
//! assert_eq!(board.rescue_track_length(), 15);
//! assert_eq!(config.rng().seed(), 9);
//! ```

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::player::PlayerCount;
use super::rng::PackRng;
use crate::board::{Board, Layout};

/// Parameters chosen before a game starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfig {
    /// Raw player count, validated when the board is built.
    pub player_count: usize,

    /// Board side. Defaults to `STACKED`.
    #[serde(default)]
    pub layout: Layout,

    /// Shuffle seed. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SetupConfig {
    /// Create a configuration for a stacked board with an unseeded RNG.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            layout: Layout::default(),
            seed: None,
        }
    }

    /// Set the board layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the player count.
    pub fn player_count(&self) -> Result<PlayerCount> {
        PlayerCount::new(self.player_count)
    }

    /// Build the board described by this configuration.
    pub fn build_board(&self) -> Result<Board> {
        Board::from_config(self)
    }

    /// Build the shuffle RNG described by this configuration.
    #[must_use]
    pub fn rng(&self) -> PackRng {
        self.seed.map_or_else(PackRng::from_entropy, PackRng::new)
    }
}
