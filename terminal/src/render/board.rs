use ratatui::text::{Line, Span};
use snake_core::{Board, Cell};

use super::traits::CellRenderer;
use super::types::CellKind;

/// Turns a board snapshot into styled terminal lines, one colored quad per
/// grid cell. Reads the board through its accessors only.
pub struct BoardRenderer<R: CellRenderer> {
    renderer: R,
}

impl<R: CellRenderer> BoardRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render(&self, board: &Board) -> Vec<Line<'static>> {
        let dims = self.renderer.cell_dimensions();
        let mut lines = Vec::with_capacity(board.height() as usize * dims.vertical);

        for y in 0..board.height() as i16 {
            let mut spans: Vec<Span<'static>> = Vec::with_capacity(board.width() as usize);
            for x in 0..board.width() as i16 {
                let kind = self.kind_at(board, Cell::new(x, y));
                let (glyph, style) = self.renderer.cell(kind);
                let run: String = std::iter::repeat(glyph).take(dims.horizontal).collect();
                spans.push(Span::styled(run, style));
            }
            let line = Line::from(spans);
            for _ in 0..dims.vertical {
                lines.push(line.clone());
            }
        }

        lines
    }

    /// The snake paints over the apple; during an eating tick the head and
    /// the apple transiently share a cell.
    fn kind_at(&self, board: &Board, cell: Cell) -> CellKind {
        if board.head() == cell {
            CellKind::SnakeHead
        } else if board.snake().iter().skip(1).any(|&c| c == cell) {
            CellKind::SnakeBody
        } else if board.apple() == cell {
            CellKind::Apple
        } else {
            CellKind::Empty
        }
    }
}
