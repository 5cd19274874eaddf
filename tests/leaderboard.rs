//! Decoding and score ordering against a fixture snapshot shaped like the
//! live API output (string and numeric timestamps, zero `last_star_ts` for
//! a player with no stars, string player ids as map keys).

use aoc_leaderboard::leaderboard::{StarCount, TimeStamp};
use aoc_leaderboard::AocData;

fn latest() -> AocData {
    AocData::from_file("tests/data/leaderboard.json").expect("fixture missing")
}

#[test]
fn fixture_decodes() {
    let data = latest();
    assert_eq!(data.event(), "2020");
    assert_eq!(data.scores().len(), 4);
}

#[test]
fn scores_are_ranked_best_first() {
    let data = latest();
    let scores = data.scores();
    let names: Vec<&str> = scores.iter().map(|(pl, _)| pl.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob", "Dave", "Carol"]);

    let scores = data.scores();
    assert_eq!(scores[0].1.stars, StarCount(4));
    assert_eq!(scores[3].1.stars, StarCount(0));
}

#[test]
fn scoreboard_lists_every_player() {
    let board = latest().scores_fmt();
    assert_eq!(board.lines().count(), 4);
    assert!(board.lines().next().unwrap().starts_with("1 "));
    assert!(board.contains("Alice"));
    assert!(board.contains("Carol"));
}

#[test]
fn latest_star_is_the_global_maximum() {
    assert_eq!(latest().latest_star(), Some(TimeStamp::new(1606901000)));
}

#[test]
fn snapshot_survives_a_write_read_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");

    let data = latest();
    data.write_to_file(&path).unwrap();
    let reread = AocData::from_file(&path).unwrap();

    assert_eq!(data.event(), reread.event());
    assert_eq!(data.scores(), reread.scores());
    assert_eq!(data.latest_star(), reread.latest_star());
    // Identical snapshots must not produce a diff.
    assert!(data.diff(&reread).is_none());
}
