//! Error type shared by every module of the crate.
//!
//! All failures are local validation failures. They surface immediately and
//! never leave a partially mutated track, pack or map behind.

use thiserror::Error;

use crate::board::TrackKind;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TopologyError>;

/// Errors raised by board, pack and map operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("illegal number of players {0}, expected between 2 and 7")]
    InvalidPlayerCount(usize),

    #[error("invalid {track} position {value}, expected between 0 and {max}")]
    InvalidPositionValue { track: TrackKind, value: usize, max: u8 },

    #[error("no position found for id {0}")]
    PositionNotFound(u8),

    #[error("map needs exactly 10 place cards, {given} given")]
    MapSetup { given: usize },

    #[error("cannot draw {requested} cards from a pack holding {have}")]
    InsufficientCards { have: usize, requested: usize },

    #[error("invalid insertion side '{0}', expected 'top' or 'bottom'")]
    InvalidInsertionSide(String),

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("place card number must be between 1 and 10, {0} given")]
    InvalidPlaceCardNumber(u8),

    #[error("no map place card with number {0}")]
    CardNotFound(u8),

    #[error("unknown {what} '{value}'")]
    UnknownVariant { what: &'static str, value: String },
}
