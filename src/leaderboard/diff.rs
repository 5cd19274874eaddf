use super::time::{Day, TimeStamp};
use super::{Player, STAR_SYMBOL};

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// What happened between two leaderboard snapshots.
#[derive(Clone, Debug)]
pub struct Diff {
    pub(crate) new_players: Vec<Player>,
    pub(crate) removed_players: Vec<Player>,
    pub(crate) new_stars: HashMap<String, BTreeMap<Day, NewStars>>,
}

impl Diff {
    pub fn new_players(&self) -> impl Iterator<Item = &Player> {
        self.new_players.iter()
    }

    pub fn removed_players(&self) -> impl Iterator<Item = &Player> {
        self.removed_players.iter()
    }

    pub fn new_stars(&self) -> impl Iterator<Item = (&String, &BTreeMap<Day, NewStars>)> {
        self.new_stars.iter()
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pl, stars) in &self.new_stars {
            for (day, new_stars) in stars {
                writeln!(f, "{0: <20} - day {1: <2}: {2}", pl, day, new_stars)?;
            }
        }
        if !self.new_players.is_empty() {
            write!(f, "New players:")?;
            for pl in &self.new_players {
                write!(f, " {}", pl.name())?;
            }
            writeln!(f)?;
        }
        if !self.removed_players.is_empty() {
            write!(f, "Players gone:")?;
            for pl in &self.removed_players {
                write!(f, " {}", pl.name())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Timestamps of the stars one player gained on one day.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct NewStars(pub(crate) Vec<TimeStamp>);

impl NewStars {
    pub fn count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn timestamps(&self) -> &[TimeStamp] {
        &self.0
    }
}

/// One or two star symbols, with acquisition times in hour and minute
/// resolution.
impl fmt::Display for NewStars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", STAR_SYMBOL.to_string().repeat(self.0.len()))?;
        match self.0.as_slice() {
            [ts] => write!(f, " ({})", ts),
            [first, second] => write!(f, " ({}, {})", first, second),
            _ => Ok(()),
        }
    }
}
