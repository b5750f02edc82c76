//! Move records exchanged with the hosting platform.
//!
//! A [`Move`] is the atomic unit handed back after every player action:
//! the derived state, the score pair (if any), and which player acts
//! next. The host persists `state` and routes the match from the other
//! two fields.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, MatchScores, PlayerId};

/// The result of one player action.
///
/// ## Signal semantics
///
/// - `scores: None` — match not over, no round resolved yet (only the
///   initial move looks like this).
/// - `scores: Some([0, 0])` — the round continues or was just completed
///   with nobody eliminated.
/// - `scores` with a non-zero slot — that player was eliminated and the
///   match is over.
/// - `next_player: Some(p)` — player `p` submits the next color.
/// - `next_player: None` — the round is over, either lost or fully
///   reproduced; no further in-turn action before the next round.
///
/// The `[0, 0]` scores and `next_player: None` signals are deliberately
/// independent: a completed round and a lost round both end the turn
/// sequence, but the host applies score deltas only in the latter case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// End-of-match score pair, absent while the match has not started
    /// resolving rounds.
    pub scores: Option<MatchScores>,

    /// Which player acts next, or `None` when the round is over.
    pub next_player: Option<PlayerId>,

    /// The derived game state the host persists for the next call.
    pub state: GameState,
}

impl Move {
    /// Check whether this move ended the round.
    #[must_use]
    pub fn round_over(&self) -> bool {
        self.next_player.is_none()
    }

    /// Check whether this move ended the whole match.
    #[must_use]
    pub fn match_over(&self) -> bool {
        self.scores.map_or(false, |s| s.match_over())
    }
}

/// A host-proposed state transition awaiting engine approval.
///
/// Shape mirrors what the transport layer delivers for a remote move:
/// the state the move claims to start from, whose turn it was, and the
/// proposed resulting [`Move`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTransition {
    /// State before the move; `None` for the round-zero bootstrap.
    pub state_before: Option<GameState>,

    /// The player whose turn it was.
    pub turn_index_before: PlayerId,

    /// The proposed resulting move.
    pub proposed: Move,
}
