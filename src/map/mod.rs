//! The Artemia map: a fixed ten-slot graph of map place cards.
//!
//! ## Key Types
//!
//! - `SlotGraph`: two rows of five slots, adjacency by slot index
//! - `ArtemiaMap`: map place cards laid out over the slots

pub mod graph;
pub mod artemia;

pub use graph::{slot_neighbors, SlotGraph, SlotNeighbors, ROW_LEN, SLOT_COUNT};
pub use artemia::{ArtemiaMap, Neighbors};
