mod board;
mod constants;
mod grid;
mod rng;

pub use board::*;
pub use constants::*;
pub use grid::*;
pub use rng::PseudoRandom;
