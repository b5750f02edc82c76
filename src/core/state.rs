//! Game state for one round in progress.
//!
//! ## GameState
//!
//! Three fields, persisted losslessly by the host between turns:
//! - `expected_sequence`: the secret challenge, grown by one color per
//!   completed round. Its length equals the 1-based round number.
//! - `player_sequence`: the reproducing player's colors so far this
//!   round; always a prefix of the expected sequence while play is
//!   valid, and cleared whenever the round completes or is lost.
//! - `delta`: opaque numeric slot reserved for host timing/scoring
//!   extensions; never interpreted by matching or outcome logic.
//!
//! All transitions derive a fresh `GameState` value. The `im` persistent
//! vectors make that O(1), so callers can keep every prior snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::config::GameConfig;
use super::rng::ColorRng;

/// The persisted state of one round in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The secret challenge sequence, append-only within a round.
    pub expected_sequence: Vector<Color>,

    /// The reproducing player's colors so far this round.
    pub player_sequence: Vector<Color>,

    /// Opaque host-attached value, reserved for timing/scoring.
    pub delta: Option<i64>,
}

impl GameState {
    /// Create the round-one state: a single freshly drawn color to
    /// reproduce, nothing reproduced yet.
    ///
    /// Consumes one draw from `rng`.
    #[must_use]
    pub fn initial(config: &GameConfig, rng: &mut ColorRng) -> Self {
        let mut expected_sequence = Vector::new();
        expected_sequence.push_back(rng.next_color(config));

        Self {
            expected_sequence,
            player_sequence: Vector::new(),
            delta: None,
        }
    }

    /// Get the 1-based round number (the challenge length).
    #[must_use]
    pub fn round(&self) -> usize {
        self.expected_sequence.len()
    }

    /// Check that the player sequence is still a prefix of the expected
    /// sequence.
    ///
    /// An empty player sequence trivially matches: nothing has been
    /// played this round, so nothing can contradict the challenge. A
    /// player sequence longer than the challenge never matches.
    #[must_use]
    pub fn matches_expected(&self) -> bool {
        self.player_sequence.len() <= self.expected_sequence.len()
            && self
                .player_sequence
                .iter()
                .zip(self.expected_sequence.iter())
                .all(|(played, expected)| played == expected)
    }

    /// Check whether the whole current challenge has been reproduced.
    #[must_use]
    pub fn completes_round(&self) -> bool {
        self.player_sequence.len() == self.expected_sequence.len() && self.matches_expected()
    }

    /// Derive the state with one more player color appended.
    ///
    /// The receiver is untouched; the host's prior snapshot stays valid.
    #[must_use]
    pub fn with_player_color(&self, color: Color) -> Self {
        let mut player_sequence = self.player_sequence.clone();
        player_sequence.push_back(color);

        Self {
            expected_sequence: self.expected_sequence.clone(),
            player_sequence,
            delta: None,
        }
    }

    /// Derive the next round's state after a full successful
    /// reproduction: challenge grown by one fresh color, player
    /// sequence cleared.
    ///
    /// Consumes one draw from `rng`. Must be applied exactly once per
    /// completed round.
    #[must_use]
    pub fn with_round_won(&self, config: &GameConfig, rng: &mut ColorRng) -> Self {
        let mut expected_sequence = self.expected_sequence.clone();
        expected_sequence.push_back(rng.next_color(config));

        Self {
            expected_sequence,
            player_sequence: Vector::new(),
            delta: None,
        }
    }

    /// Derive the state after a lost round: player sequence cleared,
    /// challenge untouched and ready to be replayed.
    #[must_use]
    pub fn with_round_lost(&self) -> Self {
        Self {
            expected_sequence: self.expected_sequence.clone(),
            player_sequence: Vector::new(),
            delta: None,
        }
    }
}
