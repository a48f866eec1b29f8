use core::fmt;

use serde::{Deserialize, Serialize};

use crate::*;

/// Token identifying one start/restart of the sample-and-load pipeline.
///
/// Tokens are handed out by [`Session::begin_round`] and must be echoed
/// back on completion so a result from an abandoned round can be told
/// apart from the one currently awaited.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(u64);

impl RoundId {
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of delivering a finished load to the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundCompletion {
    /// The board was installed and replaced the previous one entirely.
    Installed,
    /// The round had been superseded; the result was dropped.
    Stale,
}

impl RoundCompletion {
    pub const fn is_installed(self) -> bool {
        matches!(self, Self::Installed)
    }
}

/// Serializes board replacement against clue interaction.
///
/// The session owns the visible [`Board`], if any. Starting a round
/// marks it pending; only the completion carrying the pending token may
/// install a new board, so a slow load finishing after a restart can
/// never clobber the newer round. While a round is pending, reveal
/// interactions are no-ops rather than errors (a click racing a restart
/// is a valid, harmless interaction).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    board: Option<Board>,
    next_round: u64,
    pending: Option<RoundId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently visible board. Stays the previous round's board
    /// while a new load is in flight or after one fails.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a new round, abandoning any round still pending.
    pub fn begin_round(&mut self) -> RoundId {
        let round = RoundId(self.next_round);
        self.next_round += 1;
        if let Some(old) = self.pending.replace(round) {
            log::debug!("round {old} superseded by round {round}");
        }
        round
    }

    /// Deliver a successfully loaded board for `round`.
    ///
    /// The board replaces the previous session state wholesale when the
    /// token matches the pending round; a stale token leaves the
    /// session untouched.
    pub fn complete_round(&mut self, round: RoundId, board: Board) -> RoundCompletion {
        if self.pending != Some(round) {
            log::debug!("dropping stale board for round {round}");
            return RoundCompletion::Stale;
        }
        self.pending = None;
        log::info!(
            "round {round} installed: {} categories x {} clues",
            board.columns(),
            board.rows()
        );
        self.board = Some(board);
        RoundCompletion::Installed
    }

    /// Record that the load for `round` failed.
    ///
    /// Returns whether `round` was the pending one. The previously
    /// visible board, if any, remains on display either way; a
    /// half-built board is never exposed.
    pub fn fail_round(&mut self, round: RoundId) -> bool {
        if self.pending == Some(round) {
            self.pending = None;
            true
        } else {
            log::debug!("ignoring failure of superseded round {round}");
            false
        }
    }

    /// Reveal interaction on the visible board.
    ///
    /// While a newer round is pending the old board is about to be
    /// replaced, so the click is answered with [`RevealOutcome::NoOp`]
    /// instead of mutating state that is already condemned.
    pub fn transition(&mut self, category: usize, clue: usize) -> Result<RevealOutcome> {
        if self.pending.is_some() {
            return Ok(RevealOutcome::NoOp);
        }
        match &mut self.board {
            Some(board) => board.transition(category, clue),
            None => Err(BoardError::NoBoard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_board() -> Board {
        Board::new(vec![Category::new(
            "History",
            vec![Clue::new("q0", "a0"), Clue::new("q1", "a1")],
        )])
    }

    fn ready_session() -> Session {
        let mut session = Session::new();
        let round = session.begin_round();
        assert!(
            session
                .complete_round(round, tiny_board())
                .is_installed()
        );
        session
    }

    #[test]
    fn transition_without_a_board_is_an_error() {
        let mut session = Session::new();
        assert_eq!(session.transition(0, 0), Err(BoardError::NoBoard));
    }

    #[test]
    fn restart_discards_previous_reveal_state() {
        let mut session = ready_session();
        session.transition(0, 0).unwrap();
        assert_eq!(
            session.board().unwrap().clue_at(0, 0).unwrap().reveal(),
            RevealState::Question
        );

        let round = session.begin_round();
        session.complete_round(round, tiny_board());

        assert_eq!(
            session.board().unwrap().clue_at(0, 0).unwrap().reveal(),
            RevealState::Hidden
        );
    }

    #[test]
    fn click_during_pending_load_is_a_noop() {
        let mut session = ready_session();
        let _restart = session.begin_round();

        assert_eq!(session.transition(0, 0).unwrap(), RevealOutcome::NoOp);
        assert_eq!(
            session.board().unwrap().clue_at(0, 0).unwrap().reveal(),
            RevealState::Hidden
        );
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut session = ready_session();
        let slow = session.begin_round();
        let fast = session.begin_round();

        let mut marked = tiny_board();
        marked.transition(0, 1).unwrap();

        assert_eq!(
            session.complete_round(slow, marked),
            RoundCompletion::Stale
        );
        assert!(session.is_loading());

        assert!(session.complete_round(fast, tiny_board()).is_installed());
        assert!(!session.is_loading());
        assert_eq!(
            session.board().unwrap().clue_at(0, 1).unwrap().reveal(),
            RevealState::Hidden
        );
    }

    #[test]
    fn failed_round_keeps_the_old_board_visible() {
        let mut session = ready_session();
        session.transition(0, 1).unwrap();

        let round = session.begin_round();
        assert!(session.fail_round(round));

        assert!(!session.is_loading());
        let board = session.board().unwrap();
        assert_eq!(board.clue_at(0, 1).unwrap().reveal(), RevealState::Question);
    }

    #[test]
    fn failure_of_superseded_round_is_ignored() {
        let mut session = ready_session();
        let slow = session.begin_round();
        let fast = session.begin_round();

        assert!(!session.fail_round(slow));
        assert!(session.is_loading());
        assert!(session.complete_round(fast, tiny_board()).is_installed());
    }
}
