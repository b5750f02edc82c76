//! # simon-engine
//!
//! The authoritative rule engine for a two-player, turn-based memory game
//! in the style of "Simon": the engine grows a secret color sequence, one
//! player reproduces it move-by-move, and a mistake ends the round with
//! the opponent winning.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: The engine holds no state between calls.
//!    Every operation derives a fresh [`GameState`] snapshot; callers
//!    re-supply the previous one. Persistent `im` sequences make those
//!    snapshots O(1).
//!
//! 2. **Injected randomness**: The single random draw per round comes
//!    from a caller-supplied [`ColorRng`], so hosts can seed matches and
//!    tests can replay exact color streams.
//!
//! 3. **Host owns the outer game**: Turn routing, persistence, rendering,
//!    and transport belong to the hosting platform. The engine only
//!    computes the next legal state and outcome for one submitted color.
//!
//! ## Modules
//!
//! - `core`: Colors, players, scores, game state, RNG, configuration
//! - `rules`: Move records and the state-transition engine

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorRng, ColorRngState, GameConfig, GameState, MatchScores, PlayerId, PLAYER_COUNT,
};

pub use crate::rules::{Move, SimonRules, StateTransition};
