use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::Text,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

use snake_core::{
    Board, Cell, Direction, GameError, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_TICK_INTERVAL_MS,
};

use crate::render::board::BoardRenderer;
use crate::render::quad::QuadRenderer;
use crate::render::types::CellDimensions;

#[derive(Debug)]
pub enum AppCommand {
    Quit,
    Restart,
}

/// Owns the wall-clock side of the game: input accumulation over the tick
/// window, tick timing, and the reset cycle. The board itself stays a pure
/// value that is replaced, never mutated.
pub struct App {
    board: Board,
    pending_input: Option<Direction>,
    tick_acc: Duration,
    tick_len: Duration,
    initial_seed: u64,
    games_played: u64,
}

impl App {
    pub fn new(initial_seed: u64) -> Result<Self> {
        Ok(Self {
            board: Self::fresh_board(initial_seed)?,
            pending_input: None,
            tick_acc: Duration::ZERO,
            tick_len: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            initial_seed,
            games_played: 0,
        })
    }

    fn fresh_board(seed: u64) -> Result<Board> {
        let board = Board::new(
            DEFAULT_COLUMNS,
            DEFAULT_ROWS,
            Direction::Right,
            &[Cell::new(0, 0)],
            seed,
        )?;
        Ok(board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pending_input(&self) -> Option<Direction> {
        self.pending_input
    }

    /// Explicit reset event: a fresh board from the next seed in the
    /// session's sequence, so a whole session replays from `initial_seed`.
    pub fn restart(&mut self) -> Result<()> {
        self.games_played += 1;
        let seed = self.initial_seed.wrapping_add(self.games_played);
        self.board = Self::fresh_board(seed)?;
        self.pending_input = None;
        self.tick_acc = Duration::ZERO;
        tracing::info!(game = self.games_played, seed, "board reset");
        Ok(())
    }

    /// Map one key event to either a direction (kept until the tick window
    /// closes, most recent key wins) or a shell command.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.pending_input = Some(Direction::Left);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.pending_input = Some(Direction::Right);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.pending_input = Some(Direction::Up);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.pending_input = Some(Direction::Down);
                None
            }
            KeyCode::Char('r') => Some(AppCommand::Restart),
            KeyCode::Char('q') | KeyCode::Char(' ') | KeyCode::Enter => Some(AppCommand::Quit),
            _ => None,
        }
    }

    /// Advance wall-clock time; call the core's `step` exactly once per
    /// elapsed tick window. Terminal boards (self-collision, the winning
    /// fill boundary, or a board with no room left for an apple) reset.
    pub fn update(&mut self, dt: Duration) -> Result<()> {
        self.tick_acc += dt;
        while self.tick_acc >= self.tick_len {
            self.tick_acc -= self.tick_len;

            if self.board.is_game_over() {
                tracing::info!(length = self.board.snake().len(), "game over");
                self.restart()?;
                continue;
            }

            match self.board.step(self.pending_input.take()) {
                Ok(next) => self.board = next,
                Err(GameError::BoardFull) => self.restart()?,
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    pub fn render(&self, frame: &mut Frame) {
        let dims = CellDimensions::new(2, 1);
        let renderer = BoardRenderer::new(QuadRenderer::new(dims));
        let lines = renderer.render(&self.board);

        let board_width = self.board.width() * dims.horizontal as u16;
        let board_height = self.board.height() * dims.vertical as u16;

        let area = frame.area();
        let width = (board_width + 2).min(area.width);
        let height = (board_height + 2).min(area.height.saturating_sub(1));
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height + 1) / 2;
        let board_area = Rect {
            x,
            y,
            width,
            height,
        };

        let block = Block::default().borders(Borders::ALL).title("snake");
        frame.render_widget(Paragraph::new(Text::from(lines)).block(block), board_area);

        let status = format!(
            "length {}  seed {}  arrows/hjkl move  r restart  q quit",
            self.board.snake().len(),
            self.board.seed()
        );
        let status_y = board_area.y.saturating_add(height);
        if status_y < area.y + area.height {
            let status_area = Rect {
                x: area.x,
                y: status_y,
                width: area.width,
                height: 1,
            };
            frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), status_area);
        }
    }
}
