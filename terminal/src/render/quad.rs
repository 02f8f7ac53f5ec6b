use ratatui::style::{Color, Style};

use super::traits::CellRenderer;
use super::types::{CellDimensions, CellKind};

const EMPTY_COLOR: Color = Color::Rgb(200, 210, 240);
const BODY_COLOR: Color = Color::Rgb(110, 240, 100);
const HEAD_COLOR: Color = Color::Rgb(180, 255, 170);
const APPLE_COLOR: Color = Color::Rgb(240, 100, 110);

/// Standard renderer: one solid colored quad of block glyphs per cell.
pub struct QuadRenderer {
    dims: CellDimensions,
}

impl QuadRenderer {
    pub fn new(dims: CellDimensions) -> Self {
        Self { dims }
    }
}

impl CellRenderer for QuadRenderer {
    fn cell_dimensions(&self) -> CellDimensions {
        self.dims
    }

    fn cell(&self, kind: CellKind) -> (char, Style) {
        let color = match kind {
            CellKind::Empty => EMPTY_COLOR,
            CellKind::SnakeHead => HEAD_COLOR,
            CellKind::SnakeBody => BODY_COLOR,
            CellKind::Apple => APPLE_COLOR,
        };
        ('█', Style::default().fg(color))
    }
}
