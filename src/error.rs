//! Error types for pick sheet extraction, decoding and points accounting.
//!
//! Nothing here is recoverable inside the pipeline: a table with the wrong
//! shape, an unreadable pick or an impossible point total stops the run so
//! the points accounting is never built on a guess.

use thiserror::Error;

/// The table's shape disagrees with the game slate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("picks header row (id=\"{0}\") not found")]
    MissingHeader(String),

    #[error("player rows section (id=\"{0}\") not found")]
    MissingBody(String),

    #[error("picks header has {found} cells; need at least {needed}")]
    ShortHeader { found: usize, needed: usize },

    #[error("header game cell {column} is malformed: {reason}")]
    BadGameHeader { column: usize, reason: String },

    #[error("row {row} ({player}): expected {expected} game cells, found {found}")]
    CellCountMismatch { row: usize, player: String, expected: usize, found: usize },

    #[error("row {row} ({player}): missing trailing columns (need {needed} cells, found {found})")]
    MissingTrailingColumns { row: usize, player: String, needed: usize, found: usize },

    #[error("row {row} ({player}): bad colspan {value:?} at column {column}")]
    BadSpan { row: usize, player: String, column: usize, value: String },

    #[error("row {row} ({player}): {column} is not numeric: {value:?}")]
    NotNumeric { row: usize, player: String, column: &'static str, value: String },
}

/// A cell string that matches none of the pick grammar's alternatives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unparseable pick {raw:?}: {reason}")]
pub struct ParseError {
    pub raw: String,
    pub reason: &'static str,
}

impl ParseError {
    pub fn new(raw: &str, reason: &'static str) -> Self {
        Self { raw: s!(raw), reason }
    }
}

/// A pick with no textual form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("a week with no picks has no cell text; it is encoded by cell absence")]
    NoSelection,

    #[error("team {0:?} without wagered points cannot be encoded")]
    TeamWithoutPoints(String),

    #[error("an unrevealed pick cannot carry a wager")]
    HiddenWithWager,
}

/// A row's point totals can't be right for the week.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("{player}: wagered {wagered} points but only {max_wagerable} are available this week")]
    Overspent { player: String, wagered: u32, max_wagerable: u32 },

    /// The visible wagers don't even fit in a `u32`.
    #[error("{player}: wagered points overflow a u32 total")]
    WagerOverflow { player: String },

    #[error("{player}: max possible points overflow ({weekly_points} weekly + {remaining_points} remaining)")]
    MaxPossibleOverflow { player: String, weekly_points: u32, remaining_points: u32 },
}

/// Everything the pipeline can fail with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A parse error located in the grid.
    #[error("parse error in row {row} ({player}), game {column}: {source}")]
    Cell { row: usize, player: String, column: usize, source: ParseError },

    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl PoolError {
    /// The offending cell string, for parse failures.
    pub fn raw_cell(&self) -> Option<&str> {
        match self {
            PoolError::Parse(e) | PoolError::Cell { source: e, .. } => Some(&e.raw),
            _ => None,
        }
    }
}

/// Presentation failures.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("path exists but is not a directory: {0}")]
    NotADirectory(String),
}

pub type PoolResult<T> = Result<T, PoolError>;
