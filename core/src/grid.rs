use serde::{Deserialize, Serialize};

/// A single board cell. Coordinates are kept inside `[0, W) x [0, H)`;
/// `offset` is the only way positions move and it always wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub fn new(x: i16, y: i16) -> Self {
        Cell { x, y }
    }

    /// Add a delta and wrap each axis independently into the grid.
    /// Toroidal addressing: leaving one edge re-enters at the opposite edge.
    pub fn offset(self, delta: (i16, i16), width: i16, height: i16) -> Self {
        Cell {
            x: (self.x + delta.0).rem_euclid(width),
            y: (self.y + delta.1).rem_euclid(height),
        }
    }
}

/// A movement direction. "No input this tick" is `Option<Direction>::None`
/// at the call sites, not a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_wraps_on_every_edge() {
        assert_eq!(Cell::new(3, 0).offset((1, 0), 4, 4), Cell::new(0, 0));
        assert_eq!(Cell::new(0, 0).offset((-1, 0), 4, 4), Cell::new(3, 0));
        assert_eq!(Cell::new(0, 3).offset((0, 1), 4, 4), Cell::new(0, 0));
        assert_eq!(Cell::new(0, 0).offset((0, -1), 4, 4), Cell::new(0, 3));
    }

    #[test]
    fn offset_wraps_each_axis_independently() {
        assert_eq!(Cell::new(3, 3).offset((1, 1), 4, 4), Cell::new(0, 0));
        assert_eq!(Cell::new(3, 1).offset((1, 1), 4, 4), Cell::new(0, 2));
    }

    #[test]
    fn opposites_pair_up() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
