/// What occupies a logical board cell, as far as drawing is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    SnakeHead,
    SnakeBody,
    Apple,
}

/// Terminal characters drawn per logical board cell. 2x1 compensates for
/// character cells being roughly twice as tall as they are wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellDimensions {
    pub horizontal: usize,
    pub vertical: usize,
}

impl CellDimensions {
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}
