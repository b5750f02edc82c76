//! The rule engine: move records and the state-transition function.
//!
//! The hosting platform calls [`SimonRules`] once per submitted player
//! action, persists the resulting state, and routes the next turn from
//! the returned [`Move`].

pub mod engine;
pub mod moves;

pub use engine::SimonRules;
pub use moves::{Move, StateTransition};
