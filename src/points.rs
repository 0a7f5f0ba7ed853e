// src/points.rs
//! Confidence-pool points accounting.
//!
//! Each week with `N` games hands every player the wagers `1..=N`, once each.
//! Whatever isn't showing on the sheet yet (hidden picks, empty weeks) is
//! still in play, so `max_possible = weekly + (N(N+1)/2 - wagered)`.

use std::collections::HashSet;

use crate::error::InvariantViolation;
use crate::types::{PlayerRow, WeeklySummary};

/// Sum of `1..=n`.
pub fn max_wagerable(n: u32) -> u32 {
    n * (n + 1) / 2
}

/// Visible wagers on the row; hidden and empty picks have none.
/// `None` if the total doesn't fit in a `u32`.
pub fn wagered_points(row: &PlayerRow) -> Option<u32> {
    row.picks
        .iter()
        .filter_map(|p| p.points)
        .try_fold(0u32, |acc, p| acc.checked_add(p))
}

/// Derive the week summary for one row of an `n_games` week.
pub fn summarize(row: &PlayerRow, n_games: usize) -> Result<WeeklySummary, InvariantViolation> {
    let n = n_games as u32;
    let max = max_wagerable(n);

    warn_on_odd_wagers(row, n);

    let wagered = wagered_points(row).ok_or_else(|| InvariantViolation::WagerOverflow {
        player: row.player_name.clone(),
    })?;

    let remaining = max.checked_sub(wagered).ok_or_else(|| InvariantViolation::Overspent {
        player: row.player_name.clone(),
        wagered,
        max_wagerable: max,
    })?;

    let max_possible = row.weekly_points.checked_add(remaining).ok_or_else(|| {
        InvariantViolation::MaxPossibleOverflow {
            player: row.player_name.clone(),
            weekly_points: row.weekly_points,
            remaining_points: remaining,
        }
    })?;

    Ok(WeeklySummary {
        wagered_points: wagered,
        remaining_points: remaining,
        max_possible_points: max_possible,
    })
}

// Repeats and out-of-range values can't happen on a well-formed sheet.
// They only fail the row once they push the total past the week's maximum.
fn warn_on_odd_wagers(row: &PlayerRow, n: u32) {
    let mut seen = HashSet::new();
    for (col, points) in row.picks.iter().enumerate().filter_map(|(i, p)| p.points.map(|v| (i, v))) {
        if points == 0 || points > n {
            logw!("{}: game {} wager {} outside 1..={}", row.player_name, col, points, n);
        }
        if !seen.insert(points) {
            logw!("{}: wager {} used more than once", row.player_name, points);
        }
    }
}
