// src/codec.rs
//! Pick cell grammar.
//!
//! A cell string is one of
//! - `TEAM(POINTS):STATUS`: visible pick, e.g. `KC(11):correct`
//! - `-(POINTS):STATUS`: this game skipped, other games picked
//! - `X:STATUS`: pick made, not revealed yet
//!
//! and a week with no picks at all has no string (`RawCell::Absent`).
//! STATUS words: `correct`, `incorrect`, `unlocked` (→ hidden), anything else → unknown.
//!
//! Older sheets omitted the `:STATUS` suffix; those strings are rejected.

use std::fmt;

use crate::error::{EncodeError, ParseError};
use crate::types::{Pick, PickStatus, RawCell};

pub const STATUS_CORRECT: &str = "correct";
pub const STATUS_INCORRECT: &str = "incorrect";
pub const STATUS_UNLOCKED: &str = "unlocked";
pub const STATUS_UNKNOWN: &str = "unknown";

/// The three textual shapes a cell can take, before status mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellShape<'a> {
    Picked { team: &'a str, points: u32, status: &'a str },
    Skipped { points: u32, status: &'a str },
    Concealed { status: &'a str },
}

impl<'a> CellShape<'a> {
    pub fn status_word(&self) -> &'a str {
        match *self {
            CellShape::Picked { status, .. }
            | CellShape::Skipped { status, .. }
            | CellShape::Concealed { status } => status,
        }
    }
}

/// Recognize which alternative `raw` is. Exactly one must match.
pub fn parse_shape(raw: &str) -> Result<CellShape<'_>, ParseError> {
    let s = raw.trim();
    let (pick, status) = s
        .split_once(':')
        .ok_or_else(|| ParseError::new(raw, "missing ':STATUS' suffix"))?;

    if status.is_empty() {
        return Err(ParseError::new(raw, "empty status"));
    }
    if status.contains(':') || status.chars().any(char::is_whitespace) {
        return Err(ParseError::new(raw, "malformed status"));
    }

    if pick == "X" {
        return Ok(CellShape::Concealed { status });
    }

    let (head, rest) = pick
        .split_once('(')
        .ok_or_else(|| ParseError::new(raw, "missing parentheses"))?;
    let digits = rest
        .strip_suffix(')')
        .ok_or_else(|| ParseError::new(raw, "unclosed parenthesis"))?;
    let points = parse_points(raw, digits)?;

    match head {
        "-" => Ok(CellShape::Skipped { points, status }),
        "" => Err(ParseError::new(raw, "missing team code")),
        team if team.chars().all(|c| c.is_ascii_alphabetic()) => {
            Ok(CellShape::Picked { team, points, status })
        }
        _ => Err(ParseError::new(raw, "team code must be alphabetic")),
    }
}

fn parse_points(raw: &str, digits: &str) -> Result<u32, ParseError> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::new(raw, "points must be a non-negative integer"));
    }
    digits
        .parse::<u32>()
        .map_err(|_| ParseError::new(raw, "points out of range"))
}

/// Status word → status. Total: anything unrecognized is `Unknown`.
pub fn status_from_word(word: &str) -> PickStatus {
    match word.to_ascii_lowercase().as_str() {
        STATUS_CORRECT => PickStatus::Correct,
        STATUS_INCORRECT => PickStatus::Incorrect,
        STATUS_UNLOCKED => PickStatus::Hidden,
        _ => PickStatus::Unknown,
    }
}

/// Status → status word. `None` has no word.
pub fn status_word(status: PickStatus) -> Option<&'static str> {
    match status {
        PickStatus::Correct => Some(STATUS_CORRECT),
        PickStatus::Incorrect => Some(STATUS_INCORRECT),
        PickStatus::Hidden => Some(STATUS_UNLOCKED),
        PickStatus::Unknown => Some(STATUS_UNKNOWN),
        PickStatus::None => None,
    }
}

/// Decode one cell string.
pub fn decode(raw: &str) -> Result<Pick, ParseError> {
    let shape = parse_shape(raw)?;
    let status = status_from_word(shape.status_word());

    match shape {
        CellShape::Concealed { .. } => Ok(Pick { team: None, points: None, status }),
        _ if status == PickStatus::Hidden => {
            Err(ParseError::new(raw, "unrevealed pick shows a wager"))
        }
        CellShape::Picked { team, points, .. } => {
            Ok(Pick { team: Some(s!(team)), points: Some(points), status })
        }
        CellShape::Skipped { points, .. } => Ok(Pick { team: None, points: Some(points), status }),
    }
}

/// Decode a grid cell; `Absent` is the week-empty pick.
pub fn decode_cell(cell: &RawCell) -> Result<Pick, ParseError> {
    match cell {
        RawCell::Absent => Ok(Pick::none()),
        RawCell::Entered(raw) => decode(raw),
    }
}

/// Inverse of `decode`.
pub fn encode(pick: &Pick) -> Result<String, EncodeError> {
    let word = status_word(pick.status).ok_or(EncodeError::NoSelection)?;

    match (&pick.team, pick.points) {
        (_, Some(_)) if pick.status == PickStatus::Hidden => {
            Err(EncodeError::HiddenWithWager)
        }
        (Some(team), Some(points)) => Ok(format!("{team}({points}):{word}")),
        (None, Some(points)) => Ok(format!("-({points}):{word}")),
        (None, None) => Ok(join!("X:", word)),
        (Some(team), None) => Err(EncodeError::TeamWithoutPoints(team.clone())),
    }
}

/// The cell text; picks with no textual form render empty.
impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match encode(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => Ok(()),
        }
    }
}
