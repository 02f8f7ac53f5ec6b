use std::collections::VecDeque;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Cell, Direction};
use crate::rng::PseudoRandom;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("no free cell left to place the apple")]
    BoardFull,
}

/// One immutable snapshot of the game.
///
/// Every tick produces a new `Board` from the previous one; nothing here is
/// mutated in place, which keeps each transition independently testable.
/// Invariants: the apple never sits on the snake, and the snake has no
/// duplicate cells while the game is running (a duplicate head is the crash
/// condition `is_game_over` detects, never a stored state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: u16,
    height: u16,
    /// Occupied cells, head first.
    snake: VecDeque<Cell>,
    direction: Direction,
    apple: Cell,
    /// Incremented on every apple consumed; `with_apple` derives the apple
    /// cell from it, so a game replays identically from its starting seed.
    seed: u64,
}

impl Board {
    /// Build the starting snapshot. The snake cells are taken head-to-tail
    /// as supplied and the first apple is derived from `seed`.
    pub fn new(
        width: u16,
        height: u16,
        direction: Direction,
        initial_cells: &[Cell],
        seed: u64,
    ) -> Result<Board, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "grid must have positive dimensions, got {width}x{height}"
            )));
        }
        if width > i16::MAX as u16 || height > i16::MAX as u16 {
            return Err(GameError::InvalidConfiguration(format!(
                "grid dimensions exceed {}, got {width}x{height}",
                i16::MAX
            )));
        }
        if initial_cells.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "initial snake must have at least one cell".to_string(),
            ));
        }
        for cell in initial_cells {
            if cell.x < 0 || cell.x >= width as i16 || cell.y < 0 || cell.y >= height as i16 {
                return Err(GameError::InvalidConfiguration(format!(
                    "snake cell ({}, {}) lies outside the {width}x{height} grid",
                    cell.x, cell.y
                )));
            }
        }

        let board = Board {
            width,
            height,
            snake: initial_cells.iter().copied().collect(),
            direction,
            // placeholder, replaced by with_apple below
            apple: Cell::new(0, 0),
            seed,
        };
        board.with_apple(seed)
    }

    /// Derive a new apple cell from `seed` and return the updated snapshot.
    ///
    /// Canonical placement: enumerate every cell the snake does not occupy,
    /// in row-major order, and draw one uniformly. Enumerating up front makes
    /// termination structural and lets a full board fail cleanly instead of
    /// spinning on occupied draws.
    pub fn with_apple(&self, seed: u64) -> Result<Board, GameError> {
        let mut free = Vec::with_capacity(self.cell_count().saturating_sub(self.snake.len()));
        for y in 0..self.height as i16 {
            for x in 0..self.width as i16 {
                let cell = Cell::new(x, y);
                if !self.snake.contains(&cell) {
                    free.push(cell);
                }
            }
        }
        if free.is_empty() {
            return Err(GameError::BoardFull);
        }

        let mut rng = PseudoRandom::new(seed);
        let apple = free[rng.pick_index(free.len())];
        debug!("apple placed at ({}, {}) from seed {seed}", apple.x, apple.y);

        let mut next = self.clone();
        next.apple = apple;
        next.seed = seed;
        Ok(next)
    }

    /// Advance the simulation by one tick and return the next snapshot.
    ///
    /// `input` is the single directional input accumulated over the tick
    /// window; `None` means "keep going". An input pointing straight back
    /// into the snake is silently ignored, the last valid direction wins.
    pub fn step(&self, input: Option<Direction>) -> Result<Board, GameError> {
        if self.head() == self.apple {
            // Eating was detected on the previous step's result. Bump the
            // seed, duplicate the tail so the pop below is a net no-op
            // (growth of one), re-derive the apple, then finish this same
            // tick's movement with the same input.
            let mut grown = self.clone();
            let tail = grown.tail();
            grown.snake.push_back(tail);
            let replaced = grown.with_apple(self.seed.wrapping_add(1))?;
            return replaced.step(input);
        }

        let mut next = self.clone();
        if let Some(dir) = input {
            if dir != self.direction.opposite() {
                next.direction = dir;
            }
        }

        let head = self
            .head()
            .offset(next.direction.delta(), self.width as i16, self.height as i16);
        next.snake.push_front(head);
        next.snake.pop_back();
        Ok(next)
    }

    /// Terminal-state query: self-collision, or the board is filled up to
    /// the winning boundary (`length + 1 == W * H`).
    pub fn is_game_over(&self) -> bool {
        let head = self.head();
        if self.snake.iter().skip(1).any(|&cell| cell == head) {
            return true;
        }
        self.snake.len() + 1 == self.cell_count()
    }

    pub fn head(&self) -> Cell {
        *self.snake.front().expect("snake is never empty")
    }

    fn tail(&self) -> Cell {
        *self.snake.back().expect("snake is never empty")
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn apple(&self) -> Cell {
        self.apple
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
