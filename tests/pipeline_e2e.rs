// tests/pipeline_e2e.rs
//
// Full pass over a saved week-5 page: extraction, decoding, points.
use std::fs;
use std::path::PathBuf;

use pool_scrape::config::options::{ScrapeOptions, TeamLabelAccess};
use pool_scrape::error::{InvariantViolation, SchemaError};
use pool_scrape::specs::picks;
use pool_scrape::types::{Game, Pick, PickStatus, RawCell, WeeklySummary};
use pool_scrape::{process, PoolError};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn pick(team: Option<&str>, points: Option<u32>, status: PickStatus) -> Pick {
    Pick { team: team.map(String::from), points, status }
}

fn summary(wagered: u32, remaining: u32, max_possible: u32) -> WeeklySummary {
    WeeklySummary { wagered_points: wagered, remaining_points: remaining, max_possible_points: max_possible }
}

#[test]
fn week5_games_in_order() {
    let report = process(&read_fixture("week5.html"), &ScrapeOptions::default()).unwrap();
    assert_eq!(
        report.games,
        vec![
            Game::new("KC", "DET"),
            Game::new("NYJ", "BUF"),
            Game::new("SF", "LAR"),
            Game::new("DAL", "PHI"),
            Game::new("GB", "CHI"),
        ]
    );
    assert_eq!(report.max_wagerable, 15);
}

#[test]
fn week5_player_records() {
    let report = process(&read_fixture("week5.html"), &ScrapeOptions::default()).unwrap();
    let names: Vec<&str> = report.players.iter().map(|p| p.row.player_name.as_str()).collect();
    assert_eq!(names, ["Ann", "Bob", "Cy", "Dee"]);

    let ann = &report.players[0];
    assert_eq!(
        ann.row.picks,
        vec![
            pick(Some("KC"), Some(1), PickStatus::Correct),
            pick(Some("BUF"), Some(3), PickStatus::Correct),
            pick(Some("SF"), Some(5), PickStatus::Correct),
            Pick::hidden(),
            Pick::hidden(),
        ]
    );
    assert_eq!(ann.row.mnf_tiebreaker.as_deref(), Some("44"));
    assert_eq!((ann.row.weekly_points, ann.row.ytd_points), (9, 57));
    assert_eq!(ann.summary, summary(9, 6, 15));

    let bob = &report.players[1];
    assert_eq!(bob.row.picks, vec![Pick::none(); 5]);
    assert_eq!(bob.row.mnf_tiebreaker, None);
    assert_eq!(bob.summary, summary(0, 15, 15));

    let cy = &report.players[2];
    assert_eq!(cy.row.picks[0], pick(Some("DET"), Some(4), PickStatus::Incorrect));
    assert_eq!(cy.row.picks[2], pick(None, Some(1), PickStatus::Incorrect));
    assert_eq!(cy.summary, summary(7, 8, 10));

    let dee = &report.players[3];
    assert_eq!(dee.row.picks[2], pick(Some("LAR"), Some(1), PickStatus::Unknown));
    assert_eq!(dee.summary, summary(8, 7, 9));
}

#[test]
fn access_strategies_agree_on_fixture() {
    let doc = read_fixture("week5.html");
    let positional = ScrapeOptions { access: TeamLabelAccess::Positional, ..ScrapeOptions::default() };
    let query = ScrapeOptions { access: TeamLabelAccess::Query, ..ScrapeOptions::default() };
    assert_eq!(process(&doc, &positional).unwrap(), process(&doc, &query).unwrap());
}

#[test]
fn raw_cells_before_decoding() {
    let doc = read_fixture("week5.html");
    let opts = ScrapeOptions::default();
    let table = picks::extract(&doc, &opts.selectors, opts.access).unwrap();
    assert_eq!(table.rows[0].cells[0], RawCell::entered("KC(1):correct"));
    assert_eq!(table.rows[1].cells, vec![RawCell::Absent; 5]);
    assert_eq!(table.rows[2].cells[2], RawCell::entered("-(1):incorrect"));
    assert_eq!(table.rows[3].cells[2], RawCell::entered("LAR(1):unknown"));
}

#[test]
fn malformed_cell_fails_the_week() {
    let doc = read_fixture("week5.html").replace("DET (4)", "DET4");
    let err = process(&doc, &ScrapeOptions::default()).unwrap_err();
    assert_eq!(err.raw_cell(), Some("DET4:incorrect"));
    assert!(matches!(err, PoolError::Cell { row: 3, column: 0, .. }));
}

#[test]
fn dropped_cell_is_schema_error() {
    let doc = read_fixture("week5.html").replace(r#"<td class="pick">LAR (1)</td>"#, "");
    let err = process(&doc, &ScrapeOptions::default()).unwrap_err();
    assert!(matches!(err, PoolError::Schema(_)));
    assert!(err.to_string().contains("expected 5 game cells, found 4"));
}

#[test]
fn overspent_wagers_are_reported() {
    let doc = read_fixture("week5.html").replace("DET (4)", "DET (14)");
    let err = process(&doc, &ScrapeOptions::default()).unwrap_err();
    match err {
        PoolError::Invariant(InvariantViolation::Overspent { player, wagered, max_wagerable }) => {
            assert_eq!(player, "Cy");
            assert_eq!(wagered, 17);
            assert_eq!(max_wagerable, 15);
        }
        other => panic!("expected invariant violation, got {other:?}"),
    }
}

#[test]
fn wager_too_large_to_sum_fails_the_week() {
    let doc = read_fixture("week5.html").replace("DET (4)", "DET (4294967295)");
    let err = process(&doc, &ScrapeOptions::default()).unwrap_err();
    assert_eq!(err, PoolError::Invariant(InvariantViolation::WagerOverflow { player: "Cy".into() }));
}

#[test]
fn blank_team_label_rejects_header_in_both_modes() {
    let doc = read_fixture("week5.html").replace(r#"<td class="team">KC</td>"#, r#"<td class="team"><img src="kc.png"></td>"#);
    for access in [TeamLabelAccess::Positional, TeamLabelAccess::Query] {
        let opts = ScrapeOptions { access, ..ScrapeOptions::default() };
        let err = process(&doc, &opts).unwrap_err();
        assert!(matches!(err, PoolError::Schema(SchemaError::BadGameHeader { column: 0, .. })), "{access:?}");
    }
}
