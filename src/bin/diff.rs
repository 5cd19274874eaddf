//! Offline companion: prints the scoreboard of a local leaderboard snapshot
//! and what changed since an older one.

use aoc_leaderboard::{AocData, Error};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let mut args = std::env::args().skip(1);
    let usage = "usage: diff <latest.json> <prev.json>";
    let latest = args.next().ok_or(usage)?;
    let prev = args.next().ok_or(usage)?;

    let latest = AocData::from_file(&latest)?;
    let prev = AocData::from_file(&prev)?;

    println!("AoC {}", latest.event());
    print!("{}", latest.scores_fmt());
    match latest.diff(&prev) {
        Some(diff) => print!("{}", diff),
        None => println!("No news"),
    }

    Ok(())
}
