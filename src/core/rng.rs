//! Deterministic color generation.
//!
//! The engine draws exactly one fresh color per completed round. The
//! draw comes from a caller-supplied `ColorRng` rather than a hidden
//! global source, so:
//!
//! - **Hosts** seed a match once and get a reproducible color stream.
//! - **Tests** inject a known seed and assert on exact sequences.
//! - **Checkpointing** is O(1): [`ColorRngState`] captures the stream
//!   position alongside the game state.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::config::GameConfig;

/// Deterministic color generator.
///
/// Uses ChaCha8 for speed while keeping a uniform, seed-reproducible
/// stream.
#[derive(Clone, Debug)]
pub struct ColorRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ColorRng {
    /// Create a new generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator seeded from OS entropy.
    ///
    /// The drawn seed is retained, so [`ColorRng::state`] still captures
    /// a restorable checkpoint.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Draw one color uniformly from the configured pad domain.
    ///
    /// Consumes exactly one draw from the stream.
    pub fn next_color(&mut self, config: &GameConfig) -> Color {
        Color::new(self.inner.gen_range(0..config.color_count()))
    }

    /// Get the current stream state for serialization.
    #[must_use]
    pub fn state(&self) -> ColorRngState {
        ColorRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore a generator from a saved state.
    #[must_use]
    pub fn from_state(state: &ColorRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable generator state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how
/// many colors have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
