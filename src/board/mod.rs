//! Board topology: positions, tracks and the two-track board.
//!
//! ## Key Types
//!
//! - `Layout`: board side, decides where Artemia spots fall
//! - `AssimilationPosition` / `RescuePosition`: range-checked track slots
//! - `Track`: ordered positions (`AssimilationTrack`, `RescueTrack`)
//! - `Board`: one track of each kind for a player count

pub mod layout;
pub mod position;
pub mod track;
pub mod setup;

pub use layout::{Layout, RescueKind};
pub use position::{AssimilationPosition, Position, RescuePosition, TrackKind, TrackPosition};
pub use track::{AssimilationTrack, RescueTrack, Track};
pub use setup::Board;
