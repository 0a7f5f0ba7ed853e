// src/specs/picks.rs
//! Extraction rules for the weekly picks table (`<table id="nflpicks">`).
//!
//! Layout:
//! ```text
//! <tr id="nflheader">   | Player | game 1 | … | game n | MNF | Weekly | YTD |
//! <tbody id="nflplayerRows">
//!   <tr>                | name   | pick   | … | pick   | 41  | 9      | 57  |
//!   <tr>                | name   | <td colspan=n> (no picks yet) | … |
//! ```
//! Each header game cell nests a two-row table: home team label, then away.
//! Pick cells carry their outcome as a class token (`correct`, `incorrect`,
//! `unlocked`); the cell text and that marker are fused into one pick-grammar
//! string here and decoded later by `codec`.
//!
//! Output is a `PicksTable` of raw cells. No decoding, no point math.

use std::time::Instant;

use crate::config::consts::{LEADING_COLUMNS, TRAILING_COLUMNS};
use crate::config::options::{MarkerClasses, Selectors, TeamLabelAccess};
use crate::core::html::{
    child_elements_ci, class_tokens, attr_value, find_element_by_id_ci, first_text_node,
    inner_after_open_tag, next_element_ci, open_tag, strip_tags,
};
use crate::core::sanitize::squeeze_ws;
use crate::codec::{STATUS_CORRECT, STATUS_INCORRECT, STATUS_UNLOCKED, STATUS_UNKNOWN};
use crate::error::SchemaError;
use crate::types::{Game, PicksTable, RawCell, RawPlayerRow};

/// Outcome flag found on a pick cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellMarker {
    Correct,
    Incorrect,
    Unlocked,
    Unrecognized,
}

impl CellMarker {
    /// The STATUS word this marker contributes to the cell string.
    pub fn status_word(self) -> &'static str {
        match self {
            CellMarker::Correct => STATUS_CORRECT,
            CellMarker::Incorrect => STATUS_INCORRECT,
            CellMarker::Unlocked => STATUS_UNLOCKED,
            CellMarker::Unrecognized => STATUS_UNKNOWN,
        }
    }
}

/// Class tokens → marker. Priority: correct, incorrect, unlocked, else unrecognized.
/// Tokens are matched whole, so `incorrect` never reads as `correct`.
pub fn classify_marker(tokens: &[String], markers: &MarkerClasses) -> CellMarker {
    let has = |name: &str| tokens.iter().any(|t| t.eq_ignore_ascii_case(name));

    if has(&markers.correct) {
        CellMarker::Correct
    } else if has(&markers.incorrect) {
        CellMarker::Incorrect
    } else if has(&markers.unlocked) {
        CellMarker::Unlocked
    } else {
        CellMarker::Unrecognized
    }
}

/// A spanned "no picks this week" cell, as `k` absent cells.
pub fn expand_span(k: usize) -> Vec<RawCell> {
    vec![RawCell::Absent; k]
}

/// Visible text + marker → pick-grammar cell string.
pub fn compose_cell(text: &str, marker: CellMarker) -> RawCell {
    RawCell::Entered(format!("{}:{}", text, marker.status_word()))
}

/// Narrow to the picks table when the input is a whole page.
pub fn locate_table<'a>(doc: &'a str, sel: &Selectors) -> &'a str {
    match find_element_by_id_ci(doc, "table", &sel.table_id) {
        Some(table) => table,
        None => {
            logd!("Picks: no table id={:?}, using whole fragment", sel.table_id);
            doc
        }
    }
}

/// Extract games and raw player rows.
pub fn extract(
    doc: &str,
    sel: &Selectors,
    access: TeamLabelAccess,
) -> Result<PicksTable, SchemaError> {
    let t = Instant::now();
    let table = locate_table(doc, sel);

    let games = extract_games(table, sel, access)?;
    let rows = extract_rows(table, sel, games.len())?;

    logd!("Picks: {} games, {} players parsed in {:?}", games.len(), rows.len(), t.elapsed());
    Ok(PicksTable { games, rows })
}

/* ---------------- game slate ---------------- */

/// The week's games, left to right, from the header row.
pub fn extract_games(
    table: &str,
    sel: &Selectors,
    access: TeamLabelAccess,
) -> Result<Vec<Game>, SchemaError> {
    let header = find_element_by_id_ci(table, "tr", &sel.header_row_id)
        .ok_or_else(|| SchemaError::MissingHeader(sel.header_row_id.clone()))?;

    let cells = child_elements_ci(inner_after_open_tag(header), "td");
    let needed = LEADING_COLUMNS + TRAILING_COLUMNS + 1;
    if cells.len() < needed {
        return Err(SchemaError::ShortHeader { found: cells.len(), needed });
    }

    cells[LEADING_COLUMNS..cells.len() - TRAILING_COLUMNS]
        .iter()
        .enumerate()
        .map(|(column, td)| game_from_cell(td, column, access))
        .collect()
}

fn game_from_cell(td: &str, column: usize, access: TeamLabelAccess) -> Result<Game, SchemaError> {
    let inner = inner_after_open_tag(td);
    let (s, e) = next_element_ci(inner, "table", 0).ok_or_else(|| SchemaError::BadGameHeader {
        column,
        reason: s!("no nested matchup table"),
    })?;
    let matchup = &inner[s..e];

    let labels = match access {
        TeamLabelAccess::Positional => team_labels_positional(matchup),
        TeamLabelAccess::Query => team_labels_query(matchup),
    }
    .map_err(|reason| SchemaError::BadGameHeader { column, reason: s!(reason) })?;

    match labels.as_slice() {
        [home, away] => Ok(Game::new(home.as_str(), away.as_str())),
        _ => Err(SchemaError::BadGameHeader {
            column,
            reason: format!("expected home and away rows, found {}", labels.len()),
        }),
    }
}

/// Walk table → (tbody) → rows; each row's first `<td>`, first text node.
/// A blank label cell is an error; later cells are never read in its place.
pub fn team_labels_positional(matchup: &str) -> Result<Vec<String>, &'static str> {
    let inner = inner_after_open_tag(matchup);
    let body = match next_element_ci(inner, "tbody", 0) {
        Some((s, e)) => inner_after_open_tag(&inner[s..e]),
        None => inner,
    };

    let mut out = Vec::with_capacity(2);
    for tr in child_elements_ci(body, "tr").into_iter().take(2) {
        let td = child_elements_ci(inner_after_open_tag(tr), "td")
            .into_iter()
            .next()
            .ok_or("team row has no cells")?;
        let label = first_text_node(inner_after_open_tag(td)).ok_or("blank team label")?;
        out.push(label);
    }
    Ok(out)
}

/// Search `<tr>` elements, then each one's first `<td>` by tag.
pub fn team_labels_query(matchup: &str) -> Result<Vec<String>, &'static str> {
    let mut out = Vec::with_capacity(2);
    let mut pos = 0usize;
    while out.len() < 2 {
        let Some((s, e)) = next_element_ci(matchup, "tr", pos) else { break };
        pos = e;
        let tr = &matchup[s..e];
        let (ts, te) = next_element_ci(tr, "td", 0).ok_or("team row has no cells")?;
        let label = strip_tags(&tr[ts..te]);
        if label.is_empty() {
            return Err("blank team label");
        }
        out.push(label);
    }
    Ok(out)
}

/* ---------------- player grid ---------------- */

/// One raw row per player, game cells aligned with a slate of `n_games`.
pub fn extract_rows(
    table: &str,
    sel: &Selectors,
    n_games: usize,
) -> Result<Vec<RawPlayerRow>, SchemaError> {
    let body = find_element_by_id_ci(table, "tbody", &sel.player_rows_id)
        .ok_or_else(|| SchemaError::MissingBody(sel.player_rows_id.clone()))?;

    let mut rows = Vec::new();
    for (i, tr) in child_elements_ci(inner_after_open_tag(body), "tr").into_iter().enumerate() {
        let tds = child_elements_ci(inner_after_open_tag(tr), "td");
        if tds.is_empty() {
            logd!("Picks: body row {} has no cells, skipping", i + 1);
            continue;
        }
        rows.push(parse_player_row(&tds, i + 1, sel, n_games)?);
    }
    Ok(rows)
}

fn parse_player_row(
    tds: &[&str],
    row: usize,
    sel: &Selectors,
    n_games: usize,
) -> Result<RawPlayerRow, SchemaError> {
    let player_name = strip_tags(tds[0]);

    let needed = LEADING_COLUMNS + TRAILING_COLUMNS;
    if tds.len() < needed {
        return Err(SchemaError::MissingTrailingColumns {
            row,
            player: player_name,
            needed,
            found: tds.len(),
        });
    }

    let game_tds = &tds[LEADING_COLUMNS..tds.len() - TRAILING_COLUMNS];
    let tail = &tds[tds.len() - TRAILING_COLUMNS..];

    let mut cells = Vec::with_capacity(n_games);
    for td in game_tds {
        let opener = open_tag(td);
        match attr_value(opener, "colspan") {
            Some(span) => {
                let k = span.trim().parse::<usize>().ok().filter(|k| *k > 0).ok_or_else(|| {
                    SchemaError::BadSpan {
                        row,
                        player: player_name.clone(),
                        column: cells.len(),
                        value: span.clone(),
                    }
                })?;
                cells.extend(expand_span(k));
            }
            None => {
                let text = squeeze_ws(&strip_tags(td));
                let marker = classify_marker(&class_tokens(opener), &sel.markers);
                cells.push(compose_cell(&text, marker));
            }
        }
    }

    if cells.len() != n_games {
        return Err(SchemaError::CellCountMismatch {
            row,
            player: player_name,
            expected: n_games,
            found: cells.len(),
        });
    }

    let mnf = strip_tags(tail[0]);
    let weekly_points = parse_number(tail[1], row, &player_name, "weekly points")?;
    let ytd_points = parse_number(tail[2], row, &player_name, "YTD points")?;

    Ok(RawPlayerRow {
        player_name,
        cells,
        mnf_tiebreaker: if mnf.is_empty() { None } else { Some(mnf) },
        weekly_points,
        ytd_points,
    })
}

fn parse_number(td: &str, row: usize, player: &str, column: &'static str) -> Result<u32, SchemaError> {
    let text = strip_tags(td);
    text.parse::<u32>().map_err(|_| SchemaError::NotNumeric {
        row,
        player: s!(player),
        column,
        value: text,
    })
}
