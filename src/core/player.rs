//! Player identification and match scoring.
//!
//! ## PlayerId
//!
//! Type-safe player index for the fixed two-player game.
//!
//! ## MatchScores
//!
//! The end-of-match score pair the hosting platform uses to route match
//! results: a non-zero entry marks that player eliminated, `[0, 0]`
//! means nobody has been eliminated yet.

use serde::{Deserialize, Serialize};

/// Number of players in a match. The game is strictly two-player.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier for a two-player game.
///
/// Player indices are 0-based: player 0 always takes the first turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Player 0, who opens every match.
    pub const FIRST: PlayerId = PlayerId(0);

    /// Create a new player ID.
    ///
    /// Panics if `index` is not 0 or 1.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < PLAYER_COUNT, "Player index must be 0 or 1");
        Self(index)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both player IDs.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// End-of-match score pair, one slot per player.
///
/// A non-zero slot marks that player eliminated; `[0, 0]` signals a
/// round that continues (or has just been completed) with nobody
/// eliminated. Both readings are distinguished by the accompanying
/// next-player field of a [`Move`], not by the scores alone.
///
/// [`Move`]: crate::rules::Move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchScores([u32; PLAYER_COUNT]);

impl MatchScores {
    /// Scores for a round with no elimination: `[0, 0]`.
    #[must_use]
    pub const fn none_eliminated() -> Self {
        Self([0; PLAYER_COUNT])
    }

    /// Scores marking `loser` eliminated: 1 in the loser's slot, 0 in
    /// the other.
    #[must_use]
    pub fn elimination(loser: PlayerId) -> Self {
        let mut scores = [0; PLAYER_COUNT];
        scores[loser.index()] = 1;
        Self(scores)
    }

    /// Get one player's score.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> u32 {
        self.0[player.index()]
    }

    /// Check whether a player has been eliminated.
    #[must_use]
    pub fn is_eliminated(&self, player: PlayerId) -> bool {
        self.get(player) != 0
    }

    /// Check whether these scores end the match.
    #[must_use]
    pub fn match_over(&self) -> bool {
        self.0.iter().any(|&s| s != 0)
    }
}
