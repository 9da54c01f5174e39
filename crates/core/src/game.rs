//! Game session and game loop
//!
//! A session moves through `Spawning -> Falling -> Settling -> Clearing` and
//! back to `Spawning` until the stack reaches the top. [`GameSession`] holds the
//! state and performs one transition per call; [`GameLoop`] drives it with a
//! shape source, a ticker and the command queue.

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::commands::CommandQueue;
use crate::line_clear::{clear_full_rows, ClearedRows};
use crate::piece::Piece;
use crate::render::Renderer;
use crate::rng::ShapeSource;
use crate::ticker::Ticker;
use crate::types::{Cell, Command, PieceId, ShapeId, BOARD_HEIGHT, BOARD_WIDTH, GAME_OVER_ROWS};
use crate::{collision, Board};

/// Where the session is in the piece lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Spawning,
    Falling,
    Settling,
    Clearing,
    GameOver,
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    GameOver,
    Quit,
}

/// Final numbers of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub score: u32,
    pub pieces_spawned: u32,
    pub outcome: Outcome,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<Piece>,
    score: u32,
    phase: Phase,
    /// Last issued piece id (ids start at 1)
    last_piece_id: u32,
    pieces_spawned: u32,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Start a session on a prepared board (the next phase is `Spawning`)
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            active: None,
            score: 0,
            phase: Phase::Spawning,
            last_piece_id: 0,
            pieces_spawned: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    fn next_piece_id(&mut self) -> PieceId {
        self.last_piece_id += 1;
        PieceId(self.last_piece_id)
    }

    /// Spawn a piece of `shape` at the spawn anchor.
    ///
    /// Returns false and ends the game when the spawn position is already taken.
    pub fn spawn<R: Renderer + ?Sized>(&mut self, shape: ShapeId, renderer: &mut R) -> bool {
        if self.is_game_over() {
            return false;
        }

        let piece = Piece::spawn(shape, self.next_piece_id());
        if !collision::fits(&self.board, &piece) {
            debug!(%shape, id = %piece.id, "spawn blocked");
            self.end_game(renderer);
            return false;
        }

        debug!(%shape, id = %piece.id, "spawned");
        draw_piece(&piece, renderer);
        self.active = Some(piece);
        self.pieces_spawned += 1;
        self.phase = Phase::Falling;
        true
    }

    /// Apply a player move to the falling piece.
    ///
    /// Blocked moves are ignored. `Quit` is handled by the loop and never moves
    /// anything here.
    pub fn apply<R: Renderer + ?Sized>(&mut self, command: Command, renderer: &mut R) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        match command.offset() {
            Some((dcol, drow)) => self.translate(dcol, drow, renderer),
            None => false,
        }
    }

    /// One gravity step.
    ///
    /// Moves the falling piece down a row, or marks it for settling when it
    /// cannot move.
    pub fn gravity_step<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        if self.translate(0, 1, renderer) {
            return true;
        }
        self.phase = Phase::Settling;
        false
    }

    fn translate<R: Renderer + ?Sized>(&mut self, dcol: i8, drow: i8, renderer: &mut R) -> bool {
        let Some(mut piece) = self.active else {
            return false;
        };
        let before = piece;
        if !piece.try_move(&self.board, dcol, drow) {
            return false;
        }
        trace!(id = %piece.id, col = piece.col, row = piece.row, "moved");
        erase_piece(&before, renderer);
        draw_piece(&piece, renderer);
        self.active = Some(piece);
        true
    }

    /// Write the falling piece into the board. Irreversible.
    pub fn settle(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        let color = piece.color();
        for (col, row) in piece.cells() {
            self.board.occupy(col, row, color, piece.id);
        }
        debug!(id = %piece.id, col = piece.col, row = piece.row, "settled");
        self.phase = Phase::Clearing;
    }

    /// Clear full rows, score them, then either continue or end the game.
    pub fn clear_lines<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> ClearedRows {
        if self.is_game_over() {
            return ClearedRows::new();
        }

        let cleared = clear_full_rows(&mut self.board);
        if !cleared.is_empty() {
            self.score += cleared.len() as u32;
            info!(rows = ?cleared.as_slice(), score = self.score, "rows cleared");
            self.repaint(renderer);
        }

        if self.stack_reaches_top() {
            self.end_game(renderer);
        } else {
            self.phase = Phase::Spawning;
        }
        cleared
    }

    /// Whether any settled cell sits within the top `GAME_OVER_ROWS` rows
    pub fn stack_reaches_top(&self) -> bool {
        self.board
            .top_occupied_row()
            .is_some_and(|row| row < GAME_OVER_ROWS)
    }

    fn end_game<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        info!(score = self.score, pieces = self.pieces_spawned, "game over");
        self.phase = Phase::GameOver;
        renderer.announce_game_over(self.score);
    }

    /// Report every visible cell to the renderer, falling piece included.
    pub fn repaint<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for row in 0..BOARD_HEIGHT as i8 {
            for col in 0..BOARD_WIDTH as i8 {
                match self.board.get(col, row) {
                    Some(Cell::Occupied { color, .. }) => {
                        renderer.draw_cell(col as u8, row as u8, color)
                    }
                    _ => renderer.clear_cell(col as u8, row as u8),
                }
            }
        }
        if let Some(piece) = &self.active {
            draw_piece(piece, renderer);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn visible(col: i8, row: i8) -> Option<(u8, u8)> {
    if col >= 0 && col < BOARD_WIDTH as i8 && row >= 0 && row < BOARD_HEIGHT as i8 {
        Some((col as u8, row as u8))
    } else {
        None
    }
}

fn draw_piece<R: Renderer + ?Sized>(piece: &Piece, renderer: &mut R) {
    let color = piece.color();
    for (col, row) in piece.cells() {
        if let Some((col, row)) = visible(col, row) {
            renderer.draw_cell(col, row, color);
        }
    }
}

fn erase_piece<R: Renderer + ?Sized>(piece: &Piece, renderer: &mut R) {
    for (col, row) in piece.cells() {
        if let Some((col, row)) = visible(col, row) {
            renderer.clear_cell(col, row);
        }
    }
}

/// Drives a [`GameSession`] until game over or quit
#[derive(Debug)]
pub struct GameLoop<S, T> {
    session: GameSession,
    shapes: S,
    ticker: T,
}

impl<S: ShapeSource, T: Ticker> GameLoop<S, T> {
    pub fn new(shapes: S, ticker: T) -> Self {
        Self::with_session(GameSession::new(), shapes, ticker)
    }

    pub fn with_session(session: GameSession, shapes: S, ticker: T) -> Self {
        Self {
            session,
            shapes,
            ticker,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Paint the whole board, then run until the game ends or `Quit` arrives.
    pub fn run<R: Renderer>(
        &mut self,
        renderer: &mut R,
        queue: &CommandQueue,
    ) -> Result<SessionSummary, R::Error> {
        self.session.repaint(renderer);
        loop {
            let outcome = self.step(renderer, queue)?;
            renderer.present()?;
            if let Some(outcome) = outcome {
                return Ok(self.summary(outcome));
            }
        }
    }

    /// Perform one phase transition. Returns the outcome once the session is over.
    ///
    /// While falling, pending commands are drained and applied in arrival order
    /// right before the gravity check, then the ticker paces the next step.
    pub fn step<R: Renderer>(
        &mut self,
        renderer: &mut R,
        queue: &CommandQueue,
    ) -> Result<Option<Outcome>, R::Error> {
        if queue.quit_requested() {
            return Ok(Some(Outcome::Quit));
        }

        match self.session.phase() {
            Phase::Spawning => {
                let shape = self.shapes.next_shape();
                self.session.spawn(shape, renderer);
            }
            Phase::Falling => {
                for command in queue.drain() {
                    if command == Command::Quit {
                        return Ok(Some(Outcome::Quit));
                    }
                    self.session.apply(command, renderer);
                }
                if self.session.gravity_step(renderer) {
                    renderer.present()?;
                    self.ticker.wait(queue);
                }
            }
            Phase::Settling => self.session.settle(),
            Phase::Clearing => {
                self.session.clear_lines(renderer);
            }
            Phase::GameOver => return Ok(Some(Outcome::GameOver)),
        }
        Ok(None)
    }

    pub fn summary(&self, outcome: Outcome) -> SessionSummary {
        SessionSummary {
            score: self.session.score(),
            pieces_spawned: self.session.pieces_spawned(),
            outcome,
        }
    }
}
