//! Shared value types: errors, player count, setup configuration, RNG.

pub mod error;
pub mod player;
pub mod rng;
pub mod config;

pub use error::{Result, TopologyError};
pub use player::PlayerCount;
pub use rng::{PackRng, PackRngState};
pub use config::SetupConfig;
