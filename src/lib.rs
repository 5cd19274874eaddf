pub mod fetch;
pub mod leaderboard;

pub use fetch::{fetch_leaderboard, fetch_raw, LEADERBOARD_URL};
pub use leaderboard::{AocData, Diff};

pub type Error = Box<dyn std::error::Error + Send + Sync>;

fn env_var<T: std::str::FromStr>(name: &str) -> Result<T, Error>
where
    T::Err: std::fmt::Display,
{
    Ok(std::env::var(name)
        .map_err(|_| format!("Missing {}", name))?
        .parse()
        .map_err(|e| format!("Invalid {}: {}", name, e))?)
}

async fn app() -> Result<(), Error> {
    let session: String = env_var("AOC_SESSION")?;
    let url = match std::env::var("AOC_LEADERBOARD_URL") {
        Ok(url) => url,
        Err(_) => LEADERBOARD_URL.to_owned(),
    };

    let http = reqwest::Client::new();
    let document = fetch::fetch_raw(&http, &url, &session).await?;
    println!("{}", document);

    Ok(())
}

pub async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    log::debug!(
        "aoc-leaderboard {} ({})",
        env!("CARGO_PKG_VERSION"),
        option_env!("AOC_LEADERBOARD_REV").unwrap_or("unknown rev"),
    );

    if let Err(e) = app().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
