//! Game engine: board, turn, status, and score for one session.
//!
//! The engine is a plain owned value. Every command either applies exactly
//! one validated move or returns a [`MoveError`] without touching state.
//! Presentation is left to callers, which read the engine through its
//! query methods.

use super::action::{Move, MoveError, MoveOutcome, Outcome};
use super::opponent::{Opponent, RandomOpponent};
use super::rules;
use super::score::ScoreBoard;
use super::types::{Board, Cell, GameStatus, Mode, Player};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Player two's automatic reply in single-player mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerMove {
    /// Cell the computer marked.
    pub position: Position,
    /// Result of that move.
    pub outcome: MoveOutcome,
}

/// Everything that happened in response to one human click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Result of the human move.
    pub outcome: MoveOutcome,
    /// The computer's reply, if one was played.
    pub reply: Option<ComputerMove>,
}

impl TurnReport {
    /// Outcome after the whole turn, human move and reply included.
    pub fn final_outcome(&self) -> MoveOutcome {
        self.reply.map_or(self.outcome, |reply| reply.outcome)
    }
}

/// Serializable view of the engine, for logging or external renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board contents.
    pub board: Board,
    /// Number of marks on the board.
    pub move_count: usize,
    /// Player to move next (or who just finished the game).
    pub current_player: Player,
    /// Game status.
    pub status: GameStatus,
    /// Session score.
    pub score: ScoreBoard,
    /// Game mode.
    pub mode: Mode,
}

/// Tic-tac-toe game engine.
///
/// Generic over the [`Opponent`] that picks player two's cells in
/// [`Mode::SinglePlayer`], so tests can inject a fixed source.
#[derive(Debug, Clone)]
pub struct GameEngine<O = RandomOpponent> {
    board: Board,
    move_count: usize,
    current_player: Player,
    status: GameStatus,
    score: ScoreBoard,
    mode: Mode,
    history: Vec<Move>,
    opponent: O,
}

impl GameEngine<RandomOpponent> {
    /// Creates an engine whose computer opponent draws from OS entropy.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self::with_opponent(mode, RandomOpponent::from_entropy())
    }

    /// Creates an engine with a deterministic computer opponent.
    #[instrument]
    pub fn seeded(mode: Mode, seed: u64) -> Self {
        Self::with_opponent(mode, RandomOpponent::seeded(seed))
    }
}

impl<O: Opponent> GameEngine<O> {
    /// Creates an engine with an empty board, player one to move, and a zero score.
    pub fn with_opponent(mode: Mode, opponent: O) -> Self {
        info!(mode = mode.label(), "New game engine");
        Self {
            board: Board::new(),
            move_count: 0,
            current_player: Player::One,
            status: GameStatus::InProgress,
            score: ScoreBoard::new(),
            mode,
            history: Vec::new(),
            opponent,
        }
    }

    /// Clears the board and turn state. The score is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.move_count = 0;
        self.current_player = Player::One;
        self.status = GameStatus::InProgress;
        self.history.clear();
        info!(score = %self.score, "Game reset");
    }

    /// Clears the session score.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        self.score.reset();
        info!("Score reset");
    }

    /// True iff (row, col) is on the board, empty, and the game is in progress.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.check_move(row, col).is_ok()
    }

    /// Places the current player's mark at (row, col).
    ///
    /// Only the mover is checked for a win, since a move can never complete
    /// a line for the other player.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the game is over, the cell is off the board,
    /// or the cell is occupied. State is unchanged in every error case.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let pos = self.check_move(row, col)?;
        let mover = self.current_player;

        self.board.set(pos, Cell::Occupied(mover));
        self.move_count += 1;
        self.history.push(Move::new(mover, pos));
        debug!(position = %pos, move_count = self.move_count, "Move applied");

        if self.is_winner(mover) {
            self.score.record_win(mover);
            self.status = GameStatus::Won(mover);
            info!(winner = %mover, score = %self.score, "Game won");
            return Ok(MoveOutcome::GameOver(Outcome::Won(mover)));
        }

        if self.move_count == 9 {
            self.status = GameStatus::Draw;
            info!(score = %self.score, "Game drawn");
            return Ok(MoveOutcome::GameOver(Outcome::Draw));
        }

        self.current_player = mover.opponent();
        Ok(MoveOutcome::Continue)
    }

    /// Lets the computer play player two's move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::ComputerUnavailable`] outside single-player mode
    /// or when it is player one's turn (or if the opponent declines to pick
    /// a free cell), and [`MoveError::GameOver`] once the game has ended.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<ComputerMove, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.mode != Mode::SinglePlayer || self.current_player != Player::Two {
            return Err(MoveError::ComputerUnavailable);
        }

        let candidates = self.valid_moves();
        let position = self
            .opponent
            .choose(&candidates)
            .filter(|pos| candidates.contains(pos))
            .ok_or(MoveError::ComputerUnavailable)?;
        let (row, col) = position.coords();
        let outcome = self.apply_move(row, col)?;
        Ok(ComputerMove { position, outcome })
    }

    /// Applies a human move and, in single-player mode, the computer's reply.
    ///
    /// Both moves happen before this returns, so callers never observe the
    /// board between them. A rejected human move skips the reply. Once the
    /// human move is applied the turn succeeds; a reply the opponent cannot
    /// make is reported as `reply: None`.
    ///
    /// # Errors
    ///
    /// Returns the human move's [`MoveError`] if it was rejected.
    #[instrument(skip(self))]
    pub fn play_turn(&mut self, row: usize, col: usize) -> Result<TurnReport, MoveError> {
        let outcome = self.apply_move(row, col)?;
        let reply = if outcome == MoveOutcome::Continue && self.mode == Mode::SinglePlayer {
            match self.computer_move() {
                Ok(reply) => Some(reply),
                Err(e) => {
                    warn!(error = %e, "Computer reply skipped");
                    None
                }
            }
        } else {
            None
        };
        Ok(TurnReport { outcome, reply })
    }

    /// Checks whether `player` owns a full row, column, or diagonal.
    pub fn is_winner(&self, player: Player) -> bool {
        rules::is_winner(&self.board, player)
    }

    /// Empty cells in row-major order, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the session score.
    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// Returns the game mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Player to move. After a win this is the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Moves applied since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Copies the observable state into a serializable value.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            move_count: self.move_count,
            current_player: self.current_player,
            status: self.status,
            score: self.score,
            mode: self.mode,
        }
    }

    fn check_move(&self, row: usize, col: usize) -> Result<Position, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plays cells in a fixed order, skipping any that are no longer free.
    struct Scripted(Vec<Position>);

    impl Opponent for Scripted {
        fn choose(&mut self, candidates: &[Position]) -> Option<Position> {
            while !self.0.is_empty() {
                let next = self.0.remove(0);
                if candidates.contains(&next) {
                    return Some(next);
                }
            }
            None
        }
    }

    #[test]
    fn test_new_engine_is_empty() {
        let engine = GameEngine::seeded(Mode::TwoPlayer, 0);
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.current_player(), Player::One);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(*engine.score(), ScoreBoard::new());
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_turns_alternate() {
        let mut engine = GameEngine::seeded(Mode::TwoPlayer, 0);
        assert_eq!(engine.apply_move(0, 0), Ok(MoveOutcome::Continue));
        assert_eq!(engine.current_player(), Player::Two);
        assert_eq!(engine.apply_move(1, 1), Ok(MoveOutcome::Continue));
        assert_eq!(engine.current_player(), Player::One);
        assert_eq!(engine.board().get(Position::Center), Cell::Occupied(Player::Two));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = GameEngine::seeded(Mode::TwoPlayer, 0);
        assert!(!engine.is_valid_move(3, 0));
        assert_eq!(
            engine.apply_move(0, 5),
            Err(MoveError::OutOfBounds { row: 0, col: 5 })
        );
        assert_eq!(engine.move_count(), 0);
    }

    #[test]
    fn test_computer_unavailable_in_two_player() {
        let mut engine = GameEngine::seeded(Mode::TwoPlayer, 0);
        engine.apply_move(0, 0).expect("valid");
        assert_eq!(engine.computer_move(), Err(MoveError::ComputerUnavailable));
    }

    /// Never picks a cell.
    struct Declines;

    impl Opponent for Declines {
        fn choose(&mut self, _candidates: &[Position]) -> Option<Position> {
            None
        }
    }

    #[test]
    fn test_declined_reply_keeps_human_move() {
        let mut engine = GameEngine::with_opponent(Mode::SinglePlayer, Declines);

        let report = engine.play_turn(0, 0).expect("human move is valid");
        assert_eq!(report.outcome, MoveOutcome::Continue);
        assert_eq!(report.reply, None);
        assert_eq!(report.final_outcome(), MoveOutcome::Continue);
        assert_eq!(engine.move_count(), 1);
        assert_eq!(engine.board().get(Position::TopLeft), Cell::Occupied(Player::One));
        assert_eq!(engine.current_player(), Player::Two);
    }

    #[test]
    fn test_final_outcome_follows_reply() {
        // Computer completes the left column on its third move.
        let script = Scripted(vec![
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ]);
        let mut engine = GameEngine::with_opponent(Mode::SinglePlayer, script);
        engine.play_turn(0, 1).expect("valid");
        engine.play_turn(0, 2).expect("valid");
        let report = engine.play_turn(2, 2).expect("valid");

        assert_eq!(report.outcome, MoveOutcome::Continue);
        assert_eq!(
            report.final_outcome(),
            MoveOutcome::GameOver(Outcome::Won(Player::Two))
        );
        assert_eq!(Outcome::Won(Player::Two).winner(), Some(Player::Two));
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_computer_unavailable_on_player_one_turn() {
        let mut engine = GameEngine::seeded(Mode::SinglePlayer, 0);
        assert_eq!(engine.computer_move(), Err(MoveError::ComputerUnavailable));
    }

    #[test]
    fn test_play_turn_with_scripted_reply() {
        let script = Scripted(vec![Position::Center, Position::BottomLeft]);
        let mut engine = GameEngine::with_opponent(Mode::SinglePlayer, script);

        let report = engine.play_turn(0, 0).expect("valid");
        assert_eq!(report.outcome, MoveOutcome::Continue);
        assert_eq!(
            report.reply,
            Some(ComputerMove {
                position: Position::Center,
                outcome: MoveOutcome::Continue,
            })
        );
        assert_eq!(engine.move_count(), 2);
        assert_eq!(engine.current_player(), Player::One);
    }

    #[test]
    fn test_winning_human_move_gets_no_reply() {
        let script = Scripted(vec![Position::MiddleLeft, Position::MiddleRight]);
        let mut engine = GameEngine::with_opponent(Mode::SinglePlayer, script);

        engine.play_turn(0, 0).expect("valid");
        engine.play_turn(0, 1).expect("valid");
        let report = engine.play_turn(0, 2).expect("valid");

        assert_eq!(report.outcome, MoveOutcome::GameOver(Outcome::Won(Player::One)));
        assert_eq!(report.reply, None);
        assert_eq!(engine.move_count(), 5);
        assert_eq!(engine.score().player_one_wins(), 1);
    }

    #[test]
    fn test_history_tracks_moves_and_clears_on_reset() {
        let mut engine = GameEngine::seeded(Mode::TwoPlayer, 0);
        engine.apply_move(2, 2).expect("valid");
        engine.apply_move(0, 2).expect("valid");
        assert_eq!(
            engine.history(),
            &[
                Move::new(Player::One, Position::BottomRight),
                Move::new(Player::Two, Position::TopRight),
            ]
        );

        engine.reset();
        assert!(engine.history().is_empty());
    }
}
