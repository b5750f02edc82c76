//! Core engine types: colors, players, state, RNG, configuration.
//!
//! These are the fundamental building blocks the rules layer operates on.
//! Everything here is a plain serializable value; the hosting platform
//! persists state between turns in whatever format it likes.

pub mod color;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use color::Color;
pub use config::GameConfig;
pub use player::{MatchScores, PlayerId, PLAYER_COUNT};
pub use rng::{ColorRng, ColorRngState};
pub use state::GameState;
