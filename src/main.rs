#[tokio::main]
async fn main() {
    aoc_leaderboard::main().await;
}
