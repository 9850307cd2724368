use anyhow::{Context, Result};
use game_stats::{client::StatsClient, models::GameResult};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Load configuration
    dotenvy::dotenv().ok();

    let base_url = std::env::var("STATS_URL")
        .unwrap_or_else(|_| "http://localhost:5000".to_string());

    let mut args = std::env::args().skip(1);
    let result = args.next().map(|tag| tag.parse::<GameResult>()).transpose()?;
    let score = args
        .next()
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("Score must be a non-negative integer")?;

    println!("Game Stats Client");
    println!("=================");
    println!("Server: {}", base_url);
    println!();

    let client = StatsClient::new(&base_url);

    let stats = match result {
        Some(result) => {
            println!("Reporting game: {}", result);
            client.report_game(&result, score).await?
        }
        None => client.fetch_stats().await?,
    };

    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
