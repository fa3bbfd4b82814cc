//! # not-alone
//!
//! Static rule topology for the Not Alone board game: the two movement
//! tracks, the card packs and the Artemia map.
//!
//! ## Design Principles
//!
//! 1. **Validated at the edge**: player counts, position values and place
//!    card numbers are range-checked when created. Every operation is
//!    all-or-nothing; a failed call leaves its receiver untouched.
//!
//! 2. **Indices, not links**: tracks are contiguous; "next" and "previous"
//!    are index lookups.
//!
//! 3. **Explicit randomness**: every shuffle takes a seedable `PackRng`.
//!
//! Nothing here locks. A concurrent game must give each board, pack and map
//! a single writer.
//!
//! ## Modules
//!
//! - `core`: errors, player count, setup configuration, RNG
//! - `board`: positions, tracks, layouts, `Board`
//! - `cards`: card variants and `Pack`
//! - `map`: slot graph and `ArtemiaMap`

pub mod core;
pub mod board;
pub mod cards;
pub mod map;

// Re-export commonly used types
pub use crate::core::{PackRng, PackRngState, PlayerCount, Result, SetupConfig, TopologyError};

pub use crate::board::{
    AssimilationPosition, AssimilationTrack, Board, Layout, Position, RescueKind,
    RescuePosition, RescueTrack, Track, TrackKind, TrackPosition,
};

pub use crate::cards::{
    Card, Drawn, HandPlaceCard, HelperCard, MapPlaceCard, Pack, PackKind, PlaceCard, Side,
};

pub use crate::map::{ArtemiaMap, SlotGraph};
