//! Application state and input handling.

use crate::geometry::BoardGeometry;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use mousetoe_core::{
    GameEngine, GameStatus, Mode, MoveOutcome, Opponent, Outcome, RandomOpponent, TurnReport,
};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

/// What the display loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw and wait for the next event.
    Continue,
    /// Leave the display loop.
    Quit,
}

/// Main application state: the engine plus where its board was last drawn.
pub struct App<O = RandomOpponent> {
    engine: GameEngine<O>,
    geometry: BoardGeometry,
    board_area: Option<Rect>,
    status_message: String,
}

impl<O: Opponent> App<O> {
    /// Creates an application around a fresh engine.
    pub fn new(engine: GameEngine<O>, geometry: BoardGeometry) -> Self {
        Self {
            engine,
            geometry,
            board_area: None,
            status_message: "Click a square to play.".to_string(),
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine<O> {
        &self.engine
    }

    /// Gets the board layout.
    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Screen area the board was last drawn in.
    pub fn board_area(&self) -> Option<Rect> {
        self.board_area
    }

    /// Records where the renderer placed the board. The area may be smaller
    /// than the full board when the terminal is too small.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = Some(area);
    }

    /// Dispatches a terminal event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: Event) -> AppAction {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                self.handle_click(column, row);
                AppAction::Continue
            }
            _ => AppAction::Continue,
        }
    }

    /// Handles a key press: 'r' resets the game, 'q' or Esc quits.
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.kind != KeyEventKind::Press {
            return AppAction::Continue;
        }
        match key.code {
            KeyCode::Char('r') => {
                self.restart();
                AppAction::Continue
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                AppAction::Quit
            }
            _ => AppAction::Continue,
        }
    }

    /// Handles a left click at a screen cell.
    ///
    /// Clicks outside the board, on taken squares, or after the game is over
    /// are ignored.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<TurnReport> {
        let area = self.board_area?;
        let x = column.checked_sub(area.x)?;
        let y = row.checked_sub(area.y)?;
        if x >= area.width || y >= area.height {
            debug!(x, y, "Click outside the board");
            return None;
        }

        let (cell_row, cell_col) = self.geometry.cell_at(x, y);
        match self.engine.play_turn(cell_row, cell_col) {
            Ok(report) => {
                self.status_message = describe_turn(&report);
                Some(report)
            }
            Err(e) => {
                debug!(error = %e, "Click ignored");
                None
            }
        }
    }

    /// Starts a new game, keeping the score.
    pub fn restart(&mut self) {
        self.engine.reset();
        self.status_message = "Game restarted. Player 1's turn.".to_string();
    }

    /// Status line shown under the board.
    pub fn status_line(&self) -> String {
        let turn = match self.engine.status() {
            GameStatus::InProgress => {
                let player = self.engine.current_player();
                format!("{} ({}) to move", player, player.mark())
            }
            GameStatus::Won(player) => format!("{} won", player),
            GameStatus::Draw => "Draw".to_string(),
        };
        format!(
            "{} | {} | {} | {}",
            self.engine.mode().label(),
            turn,
            self.engine.score(),
            self.status_message
        )
    }

    /// Lines of the game-over box, or `None` while the game is running.
    pub fn game_over_lines(&self) -> Option<Vec<String>> {
        let outcome = match self.engine.status() {
            GameStatus::InProgress => return None,
            GameStatus::Won(player) => Outcome::Won(player),
            GameStatus::Draw => Outcome::Draw,
        };
        Some(vec![
            "Game over".to_string(),
            outcome.to_string(),
            self.engine.score().to_string(),
            "Press 'r' to replay or 'q' to quit".to_string(),
        ])
    }
}

impl App<RandomOpponent> {
    /// Creates an application for `mode`, seeded if a seed is given.
    pub fn for_mode(mode: Mode, seed: Option<u64>, geometry: BoardGeometry) -> Self {
        let engine = match seed {
            Some(seed) => GameEngine::seeded(mode, seed),
            None => GameEngine::new(mode),
        };
        Self::new(engine, geometry)
    }
}

fn describe_turn(report: &TurnReport) -> String {
    match (report.final_outcome(), report.reply) {
        (MoveOutcome::GameOver(outcome), _) => match outcome.winner() {
            Some(player) => format!("{} completed a line.", player),
            None => "Board full.".to_string(),
        },
        (MoveOutcome::Continue, Some(reply)) => format!("Computer played {}.", reply.position),
        (MoveOutcome::Continue, None) => "Next player's turn.".to_string(),
    }
}
