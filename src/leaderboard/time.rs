use chrono::prelude::*;
use chrono::Local;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::{Duration, UNIX_EPOCH};

/// Puzzle day, 1 through 25.
#[derive(
    Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Deserialize, Serialize,
)]
pub struct Day(u32);

impl Day {
    pub fn new(day: u32) -> Day {
        Day(day)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unix timestamp of a star acquisition.
#[derive(Copy, Clone, Debug, Hash, Deserialize, Serialize, Ord, PartialOrd, Eq, PartialEq)]
pub struct TimeStamp(u64);

impl TimeStamp {
    pub fn new(ts: u64) -> TimeStamp {
        TimeStamp(ts)
    }

    pub fn hour_and_minute(self) -> (u32, u32) {
        let dt: DateTime<Local> = self.into();
        (dt.hour(), dt.minute())
    }
}

impl From<TimeStamp> for DateTime<Local> {
    fn from(ts: TimeStamp) -> Self {
        let d = UNIX_EPOCH + Duration::from_secs(ts.0);
        DateTime::<Local>::from(d)
    }
}

impl fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, minute) = self.hour_and_minute();
        write!(f, "{:02}:{:02}", hour, minute)
    }
}

/// The API serves timestamps both as JSON numbers and as strings. Accept both.
pub(crate) fn de_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<TimeStamp, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(ts) => {
            let ts = ts
                .trim()
                .parse::<u64>()
                .map_err(|err| de::Error::custom(format!("string parse: {}", err)))?;
            Ok(TimeStamp(ts))
        }
        Value::Number(ts) => match ts.as_u64() {
            Some(ts) => Ok(TimeStamp(ts)),
            None => Err(de::Error::custom("u64 ts parsing")),
        },
        _ => Err(de::Error::custom("wrong type")),
    }
}

/// Like [`de_timestamp`], for fields where the API signals "no star yet" with
/// `0` or `null` instead of omitting the field.
pub(crate) fn de_opt_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<TimeStamp>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(ts) => {
            let ts = ts
                .trim()
                .parse::<u64>()
                .map_err(|err| de::Error::custom(format!("string parse: {}", err)))?;
            Ok(Some(TimeStamp(ts)))
        }
        Value::Number(ts) => match ts.as_u64() {
            Some(0) => Ok(None),
            Some(ts) => Ok(Some(TimeStamp(ts))),
            None => Err(de::Error::custom("u64 ts parsing")),
        },
        Value::Null => Ok(None),
        _ => Err(de::Error::custom("wrong type")),
    }
}
