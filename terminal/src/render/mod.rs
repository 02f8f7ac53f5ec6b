pub mod board;
pub mod quad;
pub mod traits;
pub mod types;
