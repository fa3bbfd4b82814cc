//! Cards and card packs.
//!
//! ## Key Types
//!
//! - `Card`: helper card or place card
//! - `MapPlaceCard`: place card on the Artemia map, identified by number
//! - `Pack`: ordered queue of cards (active draw pool or discard pile)
//! - `Side`: top or bottom insertion

pub mod card;
pub mod pack;

pub use card::{Card, HandPlaceCard, HelperCard, MapPlaceCard, PlaceCard, MAX_PLACE_NUMBER, MIN_PLACE_NUMBER};
pub use pack::{Drawn, Pack, PackKind, Side};
