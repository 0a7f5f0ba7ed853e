// src/types.rs
use std::fmt;

use serde::Serialize;

/// One matchup from the week's header, home team first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Game {
    pub home_team: String,
    pub away_team: String,
}

impl Game {
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self { home_team: home_team.into(), away_team: away_team.into() }
    }

    /// Column label, `HOME|AWAY`.
    pub fn label(&self) -> String {
        join!(&self.home_team, "|", &self.away_team)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.home_team, self.away_team)
    }
}

/// One player/game intersection before decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawCell {
    /// The player has entered nothing for the whole week (span-expanded).
    Absent,
    /// Cell text in pick grammar, e.g. `KC(11):correct`.
    Entered(String),
}

impl RawCell {
    pub fn entered(s: impl Into<String>) -> Self {
        RawCell::Entered(s.into())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PickStatus {
    Correct,
    Incorrect,
    /// Made but not revealed yet; the game hasn't started.
    Hidden,
    /// The cell carried no marker we recognize.
    Unknown,
    /// No picks at all this week.
    None,
}

/// A decoded pick.
///
/// `team` and `points` are both absent for `Hidden` and `None` picks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pick {
    pub team: Option<String>,
    pub points: Option<u32>,
    pub status: PickStatus,
}

impl Pick {
    pub fn none() -> Self {
        Self { team: None, points: None, status: PickStatus::None }
    }

    pub fn hidden() -> Self {
        Self { team: None, points: None, status: PickStatus::Hidden }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawPlayerRow {
    pub player_name: String,
    pub cells: Vec<RawCell>,
    pub mnf_tiebreaker: Option<String>,
    pub weekly_points: u32,
    pub ytd_points: u32,
}

/// Everything extraction produces for one week.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PicksTable {
    pub games: Vec<Game>,
    pub rows: Vec<RawPlayerRow>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerRow {
    pub player_name: String,
    /// Index-aligned with the week's games.
    pub picks: Vec<Pick>,
    pub mnf_tiebreaker: Option<String>,
    pub weekly_points: u32,
    pub ytd_points: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WeeklySummary {
    pub wagered_points: u32,
    pub remaining_points: u32,
    pub max_possible_points: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    #[serde(flatten)]
    pub row: PlayerRow,
    #[serde(flatten)]
    pub summary: WeeklySummary,
}

/// The week, ready for presentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WeekReport {
    pub games: Vec<Game>,
    pub max_wagerable: u32,
    pub players: Vec<PlayerRecord>,
}
