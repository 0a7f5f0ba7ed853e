// src/export.rs
//
// WeekReport → text. One flat row per player:
//   Player | HOME|AWAY … | MNF | Weekly | YTD | Wagered | Remaining | Max possible
// Pick columns hold the encoded cell (`KC(11):correct`); empty weeks are blank.

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::rows_to_string;
use crate::error::ExportError;
use crate::types::WeekReport;

pub fn headers(report: &WeekReport) -> Vec<String> {
    let mut h = Vec::with_capacity(report.games.len() + 7);
    h.push(s!("Player"));
    h.extend(report.games.iter().map(|g| g.label()));
    for col in ["MNF", "Weekly", "YTD", "Wagered", "Remaining", "Max possible"] {
        h.push(s!(col));
    }
    h
}

pub fn rows(report: &WeekReport) -> Vec<Vec<String>> {
    report
        .players
        .iter()
        .map(|rec| {
            let mut r = Vec::with_capacity(rec.row.picks.len() + 7);
            r.push(rec.row.player_name.clone());
            r.extend(rec.row.picks.iter().map(|p| p.to_string()));
            r.push(rec.row.mnf_tiebreaker.clone().unwrap_or_default());
            r.push(rec.row.weekly_points.to_string());
            r.push(rec.row.ytd_points.to_string());
            r.push(rec.summary.wagered_points.to_string());
            r.push(rec.summary.remaining_points.to_string());
            r.push(rec.summary.max_possible_points.to_string());
            r
        })
        .collect()
}

/// Render in the requested format.
pub fn render(report: &WeekReport, opts: &ExportOptions) -> Result<String, ExportError> {
    match opts.format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        ExportFormat::Table => Ok(render_table(&headers(report), &rows(report))),
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = opts.format.delim().unwrap_or(',');
            let h = headers(report);
            let hdr = if opts.include_headers { Some(h.as_slice()) } else { None };
            Ok(rows_to_string(hdr, &rows(report), sep))
        }
    }
}

/// Column-aligned plain text, numbers right-aligned.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for r in rows {
        for (i, cell) in r.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        let mut out = String::new();
        for (i, cell) in cells.iter().enumerate() {
            let w = widths.get(i).copied().unwrap_or(0);
            if i > 0 { out.push_str("  "); }
            let numeric = !cell.is_empty() && cell.chars().all(|c| c.is_ascii_digit());
            if numeric {
                out.push_str(&format!("{cell:>w$}"));
            } else {
                out.push_str(&format!("{cell:<w$}"));
            }
        }
        join!(out.trim_end(), "\n")
    };

    let mut out = line(headers);
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for r in rows {
        out.push_str(&line(r.as_slice()));
    }
    out
}
