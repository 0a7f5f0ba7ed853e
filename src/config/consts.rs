// src/config/consts.rs

// Source markup contract (nflpicks standings page)
pub const PICKS_TABLE_ID: &str = "nflpicks";
pub const HEADER_ROW_ID: &str = "nflheader";
pub const PLAYER_ROWS_ID: &str = "nflplayerRows";

// Columns around the game block: Player | games… | MNF | Weekly | YTD
pub const LEADING_COLUMNS: usize = 1;
pub const TRAILING_COLUMNS: usize = 3;

// Pick cell class markers
pub const MARKER_CORRECT: &str = "correct";
pub const MARKER_INCORRECT: &str = "incorrect";
pub const MARKER_UNLOCKED: &str = "unlocked";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "week";
