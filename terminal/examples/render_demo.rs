//! Prints a fixed board at a couple of cell dimensions, for eyeballing the
//! glyph output without a TTY.

use snake_core::{Board, Cell, Direction};
use terminal::render::{board::BoardRenderer, quad::QuadRenderer, types::CellDimensions};

fn main() {
    let board = Board::new(
        20,
        10,
        Direction::Right,
        &[
            Cell::new(5, 5),
            Cell::new(4, 5),
            Cell::new(3, 5),
            Cell::new(3, 6),
        ],
        42,
    )
    .expect("demo configuration is valid");

    for dims in [CellDimensions::new(1, 1), CellDimensions::new(2, 1)] {
        println!("=== {}x{} cells ===", dims.horizontal, dims.vertical);
        let renderer = BoardRenderer::new(QuadRenderer::new(dims));
        for line in renderer.render(&board) {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            println!("{text}");
        }
        println!();
    }
}
