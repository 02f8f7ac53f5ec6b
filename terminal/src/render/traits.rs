use ratatui::style::Style;

use super::types::{CellDimensions, CellKind};

/// Seam between the board renderer and any particular glyph/palette choice.
pub trait CellRenderer {
    fn cell_dimensions(&self) -> CellDimensions;

    /// Glyph and style used for every character of a cell of this kind.
    fn cell(&self, kind: CellKind) -> (char, Style);
}
