//! Typed model of the private leaderboard document served by the
//! [Advent of Code](https://adventofcode.com/) API, plus score ordering and
//! snapshot diffing on top of it.

mod diff;
mod time;

pub use diff::{Diff, NewStars};
pub use time::{Day, TimeStamp};

use crate::Error;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::fs::File;
use std::path::Path;

pub const STAR_SYMBOL: char = '\u{2B50}';

/// One snapshot of a private leaderboard.
#[derive(Debug, Deserialize, Serialize)]
pub struct AocData {
    /// Name of the event, e.g. "2020"
    event: String,
    /// Id of the player hosting the private leaderboard
    #[serde(deserialize_with = "de_player_id")]
    owner_id: PlayerId,
    /// Players in the private leaderboard and their progress
    #[serde(rename = "members")]
    players: HashMap<PlayerId, Player>,
}

impl AocData {
    /// Reads a snapshot previously saved with [`AocData::write_to_file`], or
    /// downloaded by any other means.
    pub fn from_file(path: impl AsRef<Path>) -> Result<AocData, Error> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        serde_json::to_writer(&File::create(path)?, self)?;
        Ok(())
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    /// Players and their scores, best first. Ties in star count are broken by
    /// local score.
    pub fn scores(&self) -> Vec<(String, Score)> {
        let mut scores: Vec<(String, Score)> = self
            .players
            .values()
            .map(|pl| (pl.name.clone(), pl.score()))
            .collect();
        scores.sort_unstable_by_key(|(_pl, score)| Reverse(*score));
        scores
    }

    /// Plain-text scoreboard, one line per player.
    pub fn scores_fmt(&self) -> String {
        let mut fmt_score = String::new();
        for (pos, (pl, score)) in self.scores().iter().enumerate() {
            fmt_score.push_str(&format!(
                "{0: <3} {1: <20} {2}: {3: <5} ls: {4: <4}\n",
                pos + 1,
                pl,
                STAR_SYMBOL,
                score.stars,
                score.local
            ));
        }
        fmt_score
    }

    /// Timestamp of the most recently acquired star across all players.
    pub fn latest_star(&self) -> Option<TimeStamp> {
        self.players.values().filter_map(|pl| pl.last_star_ts()).max()
    }

    fn player_ids(&self) -> HashSet<&PlayerId> {
        self.players.keys().collect()
    }

    /// Compares `self` to an older snapshot `prev`.
    ///
    /// Returns `None` when nothing happened in between: same latest star and
    /// the same set of player ids. Otherwise the diff lists players that
    /// joined, players that left, and stars gained per player and day.
    ///
    /// Never panics: the unwrapped `self.players[id]` accesses use ids drawn
    /// from `self.players`' own key set.
    pub fn diff(&self, prev: &AocData) -> Option<Diff> {
        let ids = self.player_ids();
        let prev_ids = prev.player_ids();
        if self.latest_star() == prev.latest_star() && ids == prev_ids {
            return None;
        }

        let new_ids: HashSet<&PlayerId> = ids.difference(&prev_ids).cloned().collect();
        let new_stars = self
            .updated_players(prev, &new_ids)
            .map(|(new, old)| (new.name.clone(), new.diff_stars(old)))
            .filter(|(_, stars)| !stars.is_empty())
            .collect();
        let new_players = new_ids
            .iter()
            .map(|&id| self.players[id].clone())
            .collect();
        let removed_players = prev_ids
            .difference(&ids)
            .map(|&id| prev.players[id].clone())
            .collect();

        Some(Diff {
            new_players,
            removed_players,
            new_stars,
        })
    }

    /// Players present in both snapshots whose last star moved, paired with
    /// their previous state.
    ///
    /// Never panics: `prev.players[id]` accesses use ids that survived the
    /// `new_ids` filter, so they exist in both snapshots.
    fn updated_players<'a>(
        &'a self,
        prev: &'a AocData,
        new_ids: &'a HashSet<&'a PlayerId>,
    ) -> impl Iterator<Item = (&'a Player, &'a Player)> {
        self.players
            .iter()
            .filter(move |&(id, _player)| !new_ids.contains(id))
            .filter(move |&(id, player)| player.last_star_ts() != prev.players[id].last_star_ts())
            .map(move |(id, player)| (player, &prev.players[id]))
    }
}

/// A player's display name and progress.
///
/// The score fields are pre-computed by the API; everything in them can be
/// inferred from `completion_day_level`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Player {
    name: String,
    completion_day_level: BTreeMap<Day, DayCompletion>,
    local_score: LocalScore,
    global_score: GlobalScore,
    #[serde(deserialize_with = "time::de_opt_timestamp")]
    last_star_ts: Option<TimeStamp>,
    stars: StarCount,
}

impl Player {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stars(&self) -> StarCount {
        self.stars
    }

    fn score(&self) -> Score {
        Score {
            stars: self.stars,
            local: self.local_score,
        }
    }

    fn last_star_ts(&self) -> Option<TimeStamp> {
        self.last_star_ts
    }

    /// Stars this player gained since `prev`, keyed by day. Days with no new
    /// stars are left out.
    fn diff_stars(&self, prev: &Player) -> BTreeMap<Day, NewStars> {
        self.completion_day_level
            .iter()
            .filter_map(|(day, dc)| {
                let new_stars = dc.diff(prev.completion_day_level.get(day));
                if new_stars.is_empty() {
                    None
                } else {
                    Some((*day, new_stars))
                }
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Deserialize, Serialize)]
struct PlayerId(u32);

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
struct DayCompletion {
    #[serde(rename = "1")]
    star_1: StarProgress,
    #[serde(rename = "2")]
    star_2: Option<StarProgress>,
}

impl DayCompletion {
    /// New stars for one day relative to `prev`.
    ///
    /// When the day already existed in `prev`, the first star must have been
    /// taken back then; only a fresh second star counts, but both timestamps
    /// are reported so the rendering can show the full pair. A day absent
    /// from `prev` contributes every star it has.
    fn diff(&self, prev: Option<&DayCompletion>) -> NewStars {
        match prev {
            Some(prev) => match (prev.star_2, self.star_2) {
                (None, Some(star_2)) => NewStars(vec![self.star_1.ts, star_2.ts]),
                _ => NewStars(vec![]),
            },
            None => match self.star_2 {
                None => NewStars(vec![self.star_1.ts]),
                Some(star_2) => NewStars(vec![self.star_1.ts, star_2.ts]),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
struct StarProgress {
    #[serde(rename = "get_star_ts")]
    #[serde(deserialize_with = "time::de_timestamp")]
    ts: TimeStamp,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
pub struct Score {
    pub stars: StarCount,
    pub local: LocalScore,
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.stars
            .cmp(&other.stars)
            .then(self.local.cmp(&other.local))
    }
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Ord, PartialOrd, Eq, PartialEq)]
pub struct StarCount(pub u32);

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Ord, PartialOrd, Eq, PartialEq)]
pub struct LocalScore(pub u32);

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Ord, PartialOrd, Eq, PartialEq)]
pub struct GlobalScore(pub u32);

impl fmt::Display for StarCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for LocalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The player id in the `owner_id` field is a JSON number, whereas the ids
/// keying `members` are strings. Accept both.
fn de_player_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PlayerId, D::Error> {
    let raw = match Value::deserialize(deserializer)? {
        Value::String(s) => s.parse::<u32>().map_err(de::Error::custom)?,
        Value::Number(num) => num
            .as_u64()
            .ok_or_else(|| de::Error::custom("invalid number"))? as u32,
        _ => return Err(de::Error::custom("wrong type")),
    };
    Ok(PlayerId(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_orders_by_stars_then_local() {
        let a = Score {
            stars: StarCount(3),
            local: LocalScore(10),
        };
        let b = Score {
            stars: StarCount(3),
            local: LocalScore(20),
        };
        let c = Score {
            stars: StarCount(4),
            local: LocalScore(1),
        };
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn owner_id_accepts_number_and_string() {
        #[derive(Deserialize)]
        struct Wrap {
            #[serde(deserialize_with = "de_player_id")]
            id: PlayerId,
        }

        let from_num: Wrap = serde_json::from_str(r#"{"id": 152507}"#).unwrap();
        let from_str: Wrap = serde_json::from_str(r#"{"id": "152507"}"#).unwrap();
        assert_eq!(from_num.id, from_str.id);
    }

    #[test]
    fn player_with_no_stars_decodes() {
        let player: Player = serde_json::from_str(
            r#"{
                "name": "Carol",
                "completion_day_level": {},
                "local_score": 0,
                "global_score": 0,
                "last_star_ts": 0,
                "stars": 0
            }"#,
        )
        .unwrap();
        assert_eq!(player.stars(), StarCount(0));
        assert_eq!(player.last_star_ts(), None);
    }
}
