//! Positions on the two tracks.
//!
//! A position is identified by its value, which is range-checked at creation
//! against the fixed bounds of its track kind. Rescue positions also carry a
//! [`RescueKind`]. Positions carry no links: a track stores them contiguously
//! and "next"/"previous" are index lookups on the track.

use serde::{Deserialize, Serialize};

use super::layout::{Layout, RescueKind};
use crate::core::error::{Result, TopologyError};
use crate::core::PlayerCount;

/// The two tracks of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackKind {
    /// Progress of the Creature.
    Assimilation,
    /// Progress of the hunted players.
    Rescue,
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackKind::Assimilation => write!(f, "assimilation"),
            TrackKind::Rescue => write!(f, "rescue"),
        }
    }
}

/// A position type that can populate a [`Track`](super::Track).
pub trait TrackPosition: Clone + std::fmt::Debug + PartialEq + Eq {
    /// Which track this position belongs to.
    const KIND: TrackKind;

    /// Largest legal position value.
    const MAX_VALUE: u8;

    /// Track length for zero players; the full length adds the player count.
    const BASE_LENGTH: usize;

    /// Position identifier.
    fn value(&self) -> u8;

    /// Build the position for `slot` of a freshly constructed track.
    fn for_slot(slot: usize, player_count: PlayerCount, layout: Layout, len: usize) -> Result<Self>;
}

fn check_value(track: TrackKind, value: usize, max: u8) -> Result<u8> {
    match u8::try_from(value) {
        Ok(narrowed) if narrowed <= max => Ok(narrowed),
        _ => Err(TopologyError::InvalidPositionValue { track, value, max }),
    }
}

/// A slot of the assimilation track, valued `0..=11`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct AssimilationPosition {
    value: u8,
}

impl AssimilationPosition {
    /// Create a position, failing if `value` exceeds 11.
    pub fn new(value: u8) -> Result<Self> {
        let value = check_value(TrackKind::Assimilation, value.into(), Self::MAX_VALUE)?;
        Ok(Self { value })
    }
}

impl TrackPosition for AssimilationPosition {
    const KIND: TrackKind = TrackKind::Assimilation;
    const MAX_VALUE: u8 = 11;
    const BASE_LENGTH: usize = 5;

    fn value(&self) -> u8 {
        self.value
    }

    fn for_slot(slot: usize, _player_count: PlayerCount, _layout: Layout, _len: usize) -> Result<Self> {
        let value = check_value(Self::KIND, slot, Self::MAX_VALUE)?;
        Ok(Self { value })
    }
}

/// A slot of the rescue track, valued `0..=17`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RescuePosition {
    value: u8,
    kind: RescueKind,
}

impl RescuePosition {
    /// Create a position, failing if `value` exceeds 17.
    pub fn new(value: u8, kind: RescueKind) -> Result<Self> {
        let value = check_value(TrackKind::Rescue, value.into(), Self::MAX_VALUE)?;
        Ok(Self { value, kind })
    }

    /// Create a regular position.
    pub fn regular(value: u8) -> Result<Self> {
        Self::new(value, RescueKind::Regular)
    }

    /// Create an Artemia position.
    pub fn artemia(value: u8) -> Result<Self> {
        Self::new(value, RescueKind::Artemia)
    }

    /// Get the rescue kind.
    #[must_use]
    pub fn kind(&self) -> RescueKind {
        self.kind
    }

    /// Check if this is an Artemia spot.
    #[must_use]
    pub fn is_artemia(&self) -> bool {
        self.kind == RescueKind::Artemia
    }
}

impl TrackPosition for RescuePosition {
    const KIND: TrackKind = TrackKind::Rescue;
    const MAX_VALUE: u8 = 17;
    const BASE_LENGTH: usize = 11;

    fn value(&self) -> u8 {
        self.value
    }

    fn for_slot(slot: usize, player_count: PlayerCount, layout: Layout, len: usize) -> Result<Self> {
        let value = check_value(Self::KIND, slot, Self::MAX_VALUE)?;
        Ok(Self {
            value,
            kind: layout.rescue_kind(slot, player_count, len),
        })
    }
}

/// A position of either track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Position {
    Assimilation(AssimilationPosition),
    Rescue(RescuePosition),
}

impl Position {
    /// Get the position value.
    #[must_use]
    pub fn value(&self) -> u8 {
        match self {
            Position::Assimilation(p) => p.value(),
            Position::Rescue(p) => p.value(),
        }
    }

    /// Get the track this position belongs to.
    #[must_use]
    pub fn track(&self) -> TrackKind {
        match self {
            Position::Assimilation(_) => TrackKind::Assimilation,
            Position::Rescue(_) => TrackKind::Rescue,
        }
    }

    /// Rescue kind, `None` for assimilation positions.
    #[must_use]
    pub fn rescue_kind(&self) -> Option<RescueKind> {
        match self {
            Position::Assimilation(_) => None,
            Position::Rescue(p) => Some(p.kind()),
        }
    }
}

impl From<AssimilationPosition> for Position {
    fn from(position: AssimilationPosition) -> Self {
        Position::Assimilation(position)
    }
}

impl From<RescuePosition> for Position {
    fn from(position: RescuePosition) -> Self {
        Position::Rescue(position)
    }
}
