use crate::leaderboard::AocData;
use crate::Error;

use reqwest::header;
use serde_json::Value;

/// Endpoint queried when `AOC_LEADERBOARD_URL` is not set.
pub const LEADERBOARD_URL: &str =
    "https://adventofcode.com/2020/leaderboard/private/view/152507.json";

/// One GET against the leaderboard endpoint, decoded as an opaque JSON document.
///
/// The session token goes out the way a browser would send it, as a `session`
/// cookie. Connect and decode failures bubble up untranslated.
pub async fn fetch_raw(http: &reqwest::Client, url: &str, session: &str) -> Result<Value, Error> {
    log::info!("fetching leaderboard from {}", url);

    let document = http
        .get(url)
        .header(header::COOKIE, format!("session={}", session))
        .send()
        .await?
        .json::<Value>()
        .await?;

    Ok(document)
}

/// Like [`fetch_raw`], but decoded into the typed leaderboard model.
pub async fn fetch_leaderboard(
    http: &reqwest::Client,
    url: &str,
    session: &str,
) -> Result<AocData, Error> {
    let document = fetch_raw(http, url, session).await?;
    Ok(serde_json::from_value(document)?)
}
