// src/pipeline.rs
//! markup → `PicksTable` → decoded `PlayerRow`s → `WeekReport`.
//!
//! Rows don't depend on each other; the first bad row stops the run.

use crate::codec::decode_cell;
use crate::config::options::ScrapeOptions;
use crate::error::{PoolError, PoolResult};
use crate::points::{max_wagerable, summarize};
use crate::specs::picks;
use crate::types::{PicksTable, PlayerRecord, PlayerRow, RawPlayerRow, WeekReport};

/// Run the whole week from a markup fragment.
pub fn process(markup: &str, opts: &ScrapeOptions) -> PoolResult<WeekReport> {
    let table = picks::extract(markup, &opts.selectors, opts.access)?;
    build_report(table)
}

/// Decode and score an already-extracted table.
pub fn build_report(table: PicksTable) -> PoolResult<WeekReport> {
    let n_games = table.games.len();

    let mut players = Vec::with_capacity(table.rows.len());
    for (i, raw) in table.rows.iter().enumerate() {
        let row = decode_row(raw, i + 1)?;
        let summary = summarize(&row, n_games)?;
        players.push(PlayerRecord { row, summary });
    }

    logf!("Processed {} players over {} games", players.len(), n_games);
    Ok(WeekReport {
        games: table.games,
        max_wagerable: max_wagerable(n_games as u32),
        players,
    })
}

/// Decode every cell of one raw row. `row` is 1-based, for error context.
pub fn decode_row(raw: &RawPlayerRow, row: usize) -> PoolResult<PlayerRow> {
    let picks = raw
        .cells
        .iter()
        .enumerate()
        .map(|(column, cell)| {
            decode_cell(cell).map_err(|source| PoolError::Cell {
                row,
                player: raw.player_name.clone(),
                column,
                source,
            })
        })
        .collect::<PoolResult<Vec<_>>>()?;

    Ok(PlayerRow {
        player_name: raw.player_name.clone(),
        picks,
        mnf_tiebreaker: raw.mnf_tiebreaker.clone(),
        weekly_points: raw.weekly_points,
        ytd_points: raw.ytd_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Game, Pick, PickStatus, RawCell};

    fn raw(name: &str, cells: Vec<RawCell>, weekly: u32) -> RawPlayerRow {
        RawPlayerRow {
            player_name: s!(name),
            cells,
            mnf_tiebreaker: Some(s!("44")),
            weekly_points: weekly,
            ytd_points: 50,
        }
    }

    fn five_games() -> Vec<Game> {
        ["KC", "NYJ", "SF", "DAL", "GB"]
            .iter()
            .zip(["DET", "BUF", "LAR", "PHI", "CHI"])
            .map(|(h, a)| Game::new(*h, a))
            .collect()
    }

    #[test]
    fn five_game_week_with_hidden_picks() {
        let cells = vec![
            RawCell::entered("KC(1):correct"),
            RawCell::entered("BUF(3):correct"),
            RawCell::entered("SF(5):correct"),
            RawCell::entered("X:unlocked"),
            RawCell::entered("X:unlocked"),
        ];
        let report = build_report(PicksTable { games: five_games(), rows: vec![raw("Ann", cells, 9)] }).unwrap();
        assert_eq!(report.max_wagerable, 15);
        let rec = &report.players[0];
        assert_eq!(rec.summary.wagered_points, 9);
        assert_eq!(rec.summary.remaining_points, 6);
        assert_eq!(rec.summary.max_possible_points, 15);
        assert_eq!(rec.row.picks[3], Pick::hidden());
        assert_eq!(rec.row.mnf_tiebreaker.as_deref(), Some("44"));
    }

    #[test]
    fn absent_cells_decode_to_none() {
        let report = build_report(PicksTable { games: five_games(), rows: vec![raw("Bob", vec![RawCell::Absent; 5], 0)] }).unwrap();
        let rec = &report.players[0];
        assert!(rec.row.picks.iter().all(|p| p.status == PickStatus::None && p.team.is_none() && p.points.is_none()));
        assert_eq!(rec.summary.remaining_points, 15);
    }

    #[test]
    fn parse_error_carries_location() {
        let mut cells = vec![RawCell::Absent; 5];
        cells[2] = RawCell::entered("KC11:correct");
        let err = decode_row(&raw("Cy", cells, 0), 3).unwrap_err();
        assert_eq!(err.raw_cell(), Some("KC11:correct"));
        assert!(matches!(err, PoolError::Cell { row: 3, column: 2, .. }));
    }

    #[test]
    fn overspent_row_aborts_report() {
        let cells = vec![
            RawCell::entered("KC(5):correct"),
            RawCell::entered("BUF(5):correct"),
            RawCell::entered("SF(5):correct"),
            RawCell::entered("DAL(5):correct"),
            RawCell::entered("GB(5):correct"),
        ];
        let err = build_report(PicksTable { games: five_games(), rows: vec![raw("Dee", cells, 25)] }).unwrap_err();
        assert!(matches!(err, PoolError::Invariant(_)));
    }
}
