//! The game board: one rescue track and one assimilation track.

use serde::Serialize;
use tracing::debug;

use super::layout::Layout;
use super::track::{AssimilationTrack, RescueTrack};
use crate::core::config::SetupConfig;
use crate::core::error::Result;
use crate::core::PlayerCount;

/// Both tracks built for a player count and board side.
///
/// A board is immutable once built.
///
/// ```
/// use not_alone::board::{Board, Layout};
///
/// let board = Board::new(4, Layout::Stacked).unwrap();
/// assert_eq!(board.assimilation_track_length(), 9);
/// assert_eq!(board.rescue_track_length(), 15);
/// assert!(Board::new(1, Layout::Stacked).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    player_count: PlayerCount,
    layout: Layout,
    rescue_track: RescueTrack,
    assimilation_track: AssimilationTrack,
}

impl Board {
    /// Validate `player_count` and build both tracks.
    pub fn new(player_count: usize, layout: Layout) -> Result<Self> {
        let player_count = PlayerCount::new(player_count)?;
        let rescue_track = RescueTrack::construct_for(player_count, layout)?;
        let assimilation_track = AssimilationTrack::construct_for(player_count, layout)?;

        debug!(%player_count, %layout, "Board built");
        Ok(Self {
            player_count,
            layout,
            rescue_track,
            assimilation_track,
        })
    }

    /// Build a board on its stacked side.
    pub fn stacked(player_count: usize) -> Result<Self> {
        Self::new(player_count, Layout::Stacked)
    }

    /// Build the board described by a setup configuration.
    pub fn from_config(config: &SetupConfig) -> Result<Self> {
        Self::new(config.player_count, config.layout)
    }

    /// Get the player count.
    #[must_use]
    pub fn player_count(&self) -> PlayerCount {
        self.player_count
    }

    /// Get the board side.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Get the rescue track.
    #[must_use]
    pub fn rescue_track(&self) -> &RescueTrack {
        &self.rescue_track
    }

    /// Get the assimilation track.
    #[must_use]
    pub fn assimilation_track(&self) -> &AssimilationTrack {
        &self.assimilation_track
    }

    /// `11 + player_count`.
    #[must_use]
    pub fn rescue_track_length(&self) -> usize {
        RescueTrack::length_for(self.player_count)
    }

    /// `5 + player_count`.
    #[must_use]
    pub fn assimilation_track_length(&self) -> usize {
        AssimilationTrack::length_for(self.player_count)
    }
}
