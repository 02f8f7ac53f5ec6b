/// Default number of board columns.
pub const DEFAULT_COLUMNS: u16 = 16;

/// Default number of board rows.
pub const DEFAULT_ROWS: u16 = 12;

/// Wall-clock length of one simulation tick window in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;
